//! Command line tool that reduces an image to `k` colors and writes the result
//! back out.

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice
)]

use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use palettize::{ImagePipeline, DEFAULT_PALETTE_SIZE};
use rand::Rng;

/// Reduce an image to k colors by sampling a random palette and remapping
/// every pixel to its nearest palette color.
#[derive(Parser)]
#[command(version, about)]
struct Options {
    /// Path of the image to quantize
    image: Option<PathBuf>,

    /// Number of colors to reduce the image to
    #[arg(short, long, default_value_t = DEFAULT_PALETTE_SIZE)]
    k: u32,

    /// Where to write the quantized image
    #[arg(short, long, default_value = "convert.jpg")]
    output: PathBuf,

    /// Seed for the random center selection; a fresh seed is drawn when absent
    #[arg(long)]
    seed: Option<u64>,

    /// Number of threads to use; 0 means all available, 1 runs serially
    #[arg(short, long, default_value_t = 0)]
    threads: u8,

    /// Print how long each stage took
    #[arg(long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let Options { image, k, output, seed, threads, verbose } = Options::parse();

    let Some(path) = image else {
        Options::command().print_help()?;
        return Ok(());
    };

    macro_rules! log {
        ($name: literal, $val: expr) => {
            if verbose {
                let time = std::time::Instant::now();
                let value = $val;
                println!("{} took {}ms", $name, time.elapsed().as_millis());
                value
            } else {
                $val
            }
        };
    }

    let image = log!(
        "read image",
        image::open(&path)
            .with_context(|| format!("failed to read image from {}", path.display()))?
    )
    .into_rgb8();

    let mut pipeline = ImagePipeline::try_from(&image).context("image has too many pixels")?;
    let pipeline = pipeline
        .palette_size(k)
        .seed(seed.unwrap_or_else(|| rand::thread_rng().gen()));

    let quantized = log!(
        "quantize",
        match threads {
            0 => pipeline.quantized_rgbimage_par(),
            1 => pipeline.quantized_rgbimage(),
            t => rayon::ThreadPoolBuilder::new()
                .num_threads(t.into())
                .build()
                .context("failed to build thread pool")?
                .install(|| pipeline.quantized_rgbimage_par()),
        }?
    );

    log!(
        "write image",
        quantized
            .save(&output)
            .with_context(|| format!("failed to write image to {}", output.display()))?
    );

    Ok(())
}
