//! Contains various types needed across the crate.

use crate::MAX_PIXELS;
use std::{
    error::Error,
    fmt::{Debug, Display},
    ops::Deref,
};

/// An error type for when the length of an input (e.g., `Vec` or slice)
/// is above the maximum supported value.
///
/// The inner value is the maximum supported value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveMaxLen<T>(pub T);

impl<T: Display> Display for AboveMaxLen<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "above the maximum length of {}", self.0)
    }
}

impl<T: Debug + Display> Error for AboveMaxLen<T> {}

/// An error type for when the requested number of centers cannot be sampled
/// from the input pixels.
///
/// Center selection samples pixel positions without replacement, so at most
/// one center can be taken per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidCenterCount {
    /// At least one center must be requested.
    Zero,
    /// More centers were requested than there are pixels to sample them from.
    MoreThanPixels {
        /// The requested number of centers.
        k: u32,
        /// The number of pixels available to sample from.
        pixels: u32,
    },
}

impl Display for InvalidCenterCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Zero => write!(f, "cannot sample an empty set of centers"),
            Self::MoreThanPixels { k, pixels } => {
                write!(f, "cannot sample {k} centers from {pixels} pixels")
            }
        }
    }
}

impl Error for InvalidCenterCount {}

/// A simple new type wrapper around `&'a [Color]` with the invariant that the
/// length of the inner slice must not be greater than [`MAX_PIXELS`].
///
/// The order of the slice is significant: index `i` of the quantized output
/// refers to the same pixel as index `i` of the input. When the slice comes
/// from an image, the mapping between indices and `(x, y)` coordinates is the
/// column-major one used by [`pixels::extract`](crate::pixels::extract).
///
/// # Examples
/// Use `try_into` to create a [`ColorSlice`] from a raw slice:
/// ```
/// # use palettize::{ColorSlice, AboveMaxLen};
/// # use palette::Srgb;
/// # fn main() -> Result<(), AboveMaxLen<u32>> {
/// let pixels = vec![Srgb::new(12u8, 34, 56)];
/// let colors: ColorSlice<_> = pixels.as_slice().try_into()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorSlice<'a, Color>(&'a [Color]);

impl<'a, Color> Clone for ColorSlice<'a, Color> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, Color> Copy for ColorSlice<'a, Color> {}

impl<'a, Color> ColorSlice<'a, Color> {
    /// Creates a [`ColorSlice`] without ensuring that its length
    /// is less than or equal to [`MAX_PIXELS`].
    #[allow(unused)]
    pub(crate) const fn new_unchecked(colors: &'a [Color]) -> Self {
        Self(colors)
    }

    /// Returns the length of the slice as a `u32`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn num_colors(&self) -> u32 {
        self.0.len() as u32
    }
}

impl<'a, Color> AsRef<[Color]> for ColorSlice<'a, Color> {
    fn as_ref(&self) -> &[Color] {
        self
    }
}

impl<'a, Color> Deref for ColorSlice<'a, Color> {
    type Target = [Color];

    fn deref(&self) -> &Self::Target {
        self.0
    }
}

impl<'a, Color> From<ColorSlice<'a, Color>> for &'a [Color] {
    fn from(val: ColorSlice<'a, Color>) -> Self {
        val.0
    }
}

impl<'a, Color> TryFrom<&'a [Color]> for ColorSlice<'a, Color> {
    type Error = AboveMaxLen<u32>;

    fn try_from(slice: &'a [Color]) -> Result<Self, Self::Error> {
        if slice.len() <= MAX_PIXELS as usize {
            Ok(Self(slice))
        } else {
            Err(AboveMaxLen(MAX_PIXELS))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn invalid_center_count_messages() {
        assert_eq!(
            InvalidCenterCount::Zero.to_string(),
            "cannot sample an empty set of centers"
        );
        assert_eq!(
            InvalidCenterCount::MoreThanPixels { k: 5, pixels: 3 }.to_string(),
            "cannot sample 5 centers from 3 pixels"
        );
    }

    #[test]
    fn color_slice_reports_length() {
        let colors = crate::tests::test_data_1024();
        let slice = ColorSlice::try_from(colors.as_slice()).unwrap();
        assert_eq!(slice.num_colors(), 1024);
        assert_eq!(slice.as_ref(), colors.as_slice());
    }
}
