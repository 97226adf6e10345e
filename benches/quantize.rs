use std::time::Duration;

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, Bencher, BenchmarkId, Criterion,
    SamplingMode,
};
use palette::Srgb;
use palettize::{centers, quantize, ColorSlice};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro128PlusPlus;

fn random_pixels(len: usize) -> Vec<Srgb<u8>> {
    let mut rng = Xoroshiro128PlusPlus::seed_from_u64(0);
    (0..len)
        .map(|_| Srgb::new(rng.gen(), rng.gen(), rng.gen()))
        .collect()
}

fn bench(
    c: &mut Criterion,
    group: &str,
    mut f: impl FnMut(&mut Bencher<WallTime>, &(u32, &Vec<Srgb<u8>>)),
) {
    let images = [
        ("256x256", random_pixels(256 * 256)),
        ("1024x1024", random_pixels(1024 * 1024)),
    ];

    let mut group = c.benchmark_group(group);
    group
        .sample_size(30)
        .noise_threshold(0.05)
        .sampling_mode(SamplingMode::Flat)
        .warm_up_time(Duration::from_millis(500));

    for (k, secs) in [(256, 4), (64, 3), (16, 2)] {
        group.measurement_time(Duration::from_secs(secs));
        for (name, pixels) in &images {
            group.bench_with_input(BenchmarkId::new(k.to_string(), name), &(k, pixels), &mut f);
        }
    }
}

fn remap_single(c: &mut Criterion) {
    bench(c, "remap_single", |b, &(k, pixels)| {
        let slice = ColorSlice::try_from(pixels.as_slice()).unwrap();
        let centers = centers::sample(k, slice, 0).unwrap();

        b.iter(|| quantize::with_centers(slice, &centers))
    })
}

fn remap_par(c: &mut Criterion) {
    bench(c, "remap_par", |b, &(k, pixels)| {
        let slice = ColorSlice::try_from(pixels.as_slice()).unwrap();
        let centers = centers::sample(k, slice, 0).unwrap();

        b.iter(|| quantize::with_centers_par(slice, &centers))
    })
}

fn sample_centers(c: &mut Criterion) {
    bench(c, "sample_centers", |b, &(k, pixels)| {
        let slice = ColorSlice::try_from(pixels.as_slice()).unwrap();

        b.iter(|| centers::sample(k, slice, 0))
    })
}

criterion_group!(benches, remap_single, remap_par, sample_centers);
criterion_main!(benches);
