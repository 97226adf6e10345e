//! Selection of the center colors that an image is remapped onto.
//!
//! Centers are drawn uniformly at random from the pixels of the image,
//! sampling positions without replacement. The same color value can still be
//! selected twice if it occurs at two different positions.

use crate::{ColorSlice, InvalidCenterCount};

use palette::Srgb;
use rand::{seq::index, Rng, SeedableRng};
use rand_xoshiro::Xoroshiro128PlusPlus;

/// An ordered, non-empty list of center colors.
///
/// A [`Centers`] is normally produced by [`sample`], but any non-empty palette
/// can be injected through `try_from` to pin the assignment step down to a
/// known set of colors:
/// ```
/// # use palettize::{centers::Centers, InvalidCenterCount};
/// # use palette::Srgb;
/// # fn main() -> Result<(), InvalidCenterCount> {
/// let centers = Centers::try_from(vec![Srgb::new(0u8, 0, 0), Srgb::new(255u8, 255, 255)])?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct Centers(Vec<Srgb<u8>>);

impl Centers {
    /// Returns the inner `Vec` of center colors.
    #[must_use]
    pub fn into_inner(self) -> Vec<Srgb<u8>> {
        self.0
    }

    /// Returns the number of centers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A [`Centers`] is never empty; this always returns `false`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl AsRef<[Srgb<u8>]> for Centers {
    fn as_ref(&self) -> &[Srgb<u8>] {
        &self.0
    }
}

impl From<Centers> for Vec<Srgb<u8>> {
    fn from(value: Centers) -> Self {
        value.into_inner()
    }
}

impl TryFrom<Vec<Srgb<u8>>> for Centers {
    type Error = InvalidCenterCount;

    fn try_from(colors: Vec<Srgb<u8>>) -> Result<Self, Self::Error> {
        if colors.is_empty() {
            Err(InvalidCenterCount::Zero)
        } else {
            Ok(Self(colors))
        }
    }
}

/// Selects `k` centers from `colors` uniformly at random without replacement,
/// seeding the random number generator from `seed`.
///
/// The same `seed` always selects the same centers for the same input.
///
/// # Errors
/// Returns [`InvalidCenterCount`] if `k` is zero or greater than the number of
/// pixels in `colors`.
pub fn sample(
    k: u32,
    colors: ColorSlice<'_, Srgb<u8>>,
    seed: u64,
) -> Result<Centers, InvalidCenterCount> {
    sample_with(k, colors, &mut Xoroshiro128PlusPlus::seed_from_u64(seed))
}

/// Same as [`sample`], but drawing randomness from the given generator.
///
/// # Errors
/// Returns [`InvalidCenterCount`] if `k` is zero or greater than the number of
/// pixels in `colors`.
pub fn sample_with(
    k: u32,
    colors: ColorSlice<'_, Srgb<u8>>,
    rng: &mut impl Rng,
) -> Result<Centers, InvalidCenterCount> {
    if k == 0 {
        return Err(InvalidCenterCount::Zero);
    }

    let pixels = colors.num_colors();
    if k > pixels {
        return Err(InvalidCenterCount::MoreThanPixels { k, pixels });
    }

    let colors = colors.as_ref();
    let centers = index::sample(rng, colors.len(), k as usize)
        .into_iter()
        .map(|i| colors[i])
        .collect();

    Ok(Centers(centers))
}
