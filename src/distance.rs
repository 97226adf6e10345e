//! Color distance functions used for nearest-center assignment.

use palette::Srgb;

/// Euclidean distance between two colors.
///
/// Each channel is an axis of a 3-dimensional space; no normalization or
/// perceptual weighting is applied. The distance is symmetric and is zero
/// exactly when the two colors are channel-wise identical.
#[must_use]
pub fn euclidean(a: Srgb<u8>, b: Srgb<u8>) -> f32 {
    squared_euclidean(a, b).sqrt()
}

/// Squared euclidean distance between two colors.
///
/// Comparing squared distances selects the same nearest center (ties included)
/// as comparing true distances, without a square root per candidate.
#[must_use]
pub fn squared_euclidean(a: Srgb<u8>, b: Srgb<u8>) -> f32 {
    let dr = f32::from(a.red) - f32::from(b.red);
    let dg = f32::from(a.green) - f32::from(b.green);
    let db = f32::from(a.blue) - f32::from(b.blue);
    dr * dr + dg * dg + db * db
}
