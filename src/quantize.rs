//! Remapping of pixels onto their nearest center color.
//!
//! This is a single assignment pass: every pixel is compared against every
//! center and replaced by the closest one. The centers are fixed for the
//! duration of the pass and are never recomputed from the assignments.

use crate::{
    centers::{self, Centers},
    distance, ColorSlice, InvalidCenterCount,
};

use ordered_float::OrderedFloat;
use palette::Srgb;
#[cfg(feature = "threads")]
use rayon::prelude::*;

/// Index of the center nearest to `color`.
///
/// When two centers are equidistant, the lower index wins
/// (`min_by_key` keeps the first minimum).
fn nearest_center(centers: &[Srgb<u8>], color: Srgb<u8>) -> usize {
    // Centers is non-empty, so the minimum exists
    #[allow(clippy::unwrap_used)]
    {
        centers
            .iter()
            .enumerate()
            .min_by_key(|&(_, &center)| OrderedFloat(distance::squared_euclidean(center, color)))
            .unwrap()
            .0
    }
}

/// Replaces every pixel with the nearest of the given centers.
///
/// The output has the same length as `colors`, index `i` of the output refers
/// to the same pixel as index `i` of the input, and every output color is one
/// of the given centers. The assignment is deterministic for a fixed set of
/// centers. Each pixel costs one distance evaluation per center; there is no
/// indexing structure and no early exit.
#[must_use]
pub fn with_centers(colors: ColorSlice<'_, Srgb<u8>>, centers: &Centers) -> Vec<Srgb<u8>> {
    let centers = centers.as_ref();
    colors
        .iter()
        .map(|&color| centers[nearest_center(centers, color)])
        .collect()
}

/// Parallel version of [`with_centers`].
///
/// The pixel range is partitioned across threads; the centers are read-only
/// shared state, so the output is identical to the serial version.
#[cfg(feature = "threads")]
#[must_use]
pub fn with_centers_par(colors: ColorSlice<'_, Srgb<u8>>, centers: &Centers) -> Vec<Srgb<u8>> {
    let centers = centers.as_ref();
    colors
        .as_ref()
        .par_iter()
        .map(|&color| centers[nearest_center(centers, color)])
        .collect()
}

/// Samples `k` centers from `colors` without replacement (seeding the random
/// number generator from `seed`) and remaps every pixel onto the nearest one.
///
/// # Errors
/// Returns [`InvalidCenterCount`] if `k` is zero or greater than the number of
/// pixels in `colors`. The check happens before any distance computation and
/// no partial result is produced.
pub fn sampled(
    k: u32,
    colors: ColorSlice<'_, Srgb<u8>>,
    seed: u64,
) -> Result<Vec<Srgb<u8>>, InvalidCenterCount> {
    let centers = centers::sample(k, colors, seed)?;
    Ok(with_centers(colors, &centers))
}

/// Parallel version of [`sampled`].
///
/// Center selection is identical to the serial version; only the assignment
/// pass is parallelized.
///
/// # Errors
/// Returns [`InvalidCenterCount`] if `k` is zero or greater than the number of
/// pixels in `colors`.
#[cfg(feature = "threads")]
pub fn sampled_par(
    k: u32,
    colors: ColorSlice<'_, Srgb<u8>>,
    seed: u64,
) -> Result<Vec<Srgb<u8>>, InvalidCenterCount> {
    let centers = centers::sample(k, colors, seed)?;
    Ok(with_centers_par(colors, &centers))
}
