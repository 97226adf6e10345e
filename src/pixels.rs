//! Column-major pixel extraction and write-back for [`image`] buffers.
//!
//! Both directions share one index↔coordinate mapping, so a sequence extracted
//! by [`extract`], remapped, and handed to [`to_rgbimage`] lands every color on
//! the pixel position it was read from.

use crate::{AboveMaxLen, MAX_PIXELS};

use image::{Rgb, RgbImage};
use palette::Srgb;

/// Flattens an image into a sequence of colors in column-major order.
///
/// Index `i` of the output corresponds to the pixel at
/// `(x, y) = (i / height, i % height)`: the outer loop runs over `x`,
/// the inner loop over `y`.
///
/// # Errors
/// Returns [`AboveMaxLen`] if the image has more than [`MAX_PIXELS`] pixels.
pub fn extract(image: &RgbImage) -> Result<Vec<Srgb<u8>>, AboveMaxLen<u32>> {
    if image.pixels().len() > MAX_PIXELS as usize {
        return Err(AboveMaxLen(MAX_PIXELS));
    }

    let (width, height) = image.dimensions();
    let mut colors = Vec::with_capacity(width as usize * height as usize);
    for x in 0..width {
        for y in 0..height {
            let Rgb([r, g, b]) = *image.get_pixel(x, y);
            colors.push(Srgb::new(r, g, b));
        }
    }

    Ok(colors)
}

/// Writes a color sequence back into a new [`RgbImage`], reading the sequence
/// in the same column-major order that [`extract`] produces.
///
/// Returns `None` if `colors.len()` is not equal to `width * height`.
#[must_use]
pub fn to_rgbimage(colors: &[Srgb<u8>], width: u32, height: u32) -> Option<RgbImage> {
    if colors.len() != width as usize * height as usize {
        return None;
    }

    let height_usize = height as usize;
    let mut image = RgbImage::new(width, height);
    for x in 0..width {
        for y in 0..height {
            let color = colors[x as usize * height_usize + y as usize];
            image.put_pixel(x, y, Rgb([color.red, color.green, color.blue]));
        }
    }

    Some(image)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// A 2x3 image whose pixels encode their own coordinates.
    #[allow(clippy::cast_possible_truncation)]
    fn coordinate_image() -> RgbImage {
        RgbImage::from_fn(2, 3, |x, y| Rgb([x as u8, y as u8, 0]))
    }

    #[test]
    fn extraction_is_column_major() {
        let colors = extract(&coordinate_image()).unwrap();

        let expected = vec![
            Srgb::new(0u8, 0, 0),
            Srgb::new(0u8, 1, 0),
            Srgb::new(0u8, 2, 0),
            Srgb::new(1u8, 0, 0),
            Srgb::new(1u8, 1, 0),
            Srgb::new(1u8, 2, 0),
        ];
        assert_eq!(colors, expected);
    }

    #[test]
    fn round_trips_through_the_same_mapping() {
        let image = coordinate_image();
        let colors = extract(&image).unwrap();

        let restored = to_rgbimage(&colors, 2, 3).unwrap();
        assert_eq!(restored.dimensions(), image.dimensions());
        assert_eq!(restored.as_raw(), image.as_raw());
    }

    #[test]
    fn length_must_match_dimensions() {
        let colors = vec![Srgb::new(0u8, 0, 0); 5];
        assert!(to_rgbimage(&colors, 2, 3).is_none());
        assert!(to_rgbimage(&colors, 5, 1).is_some());
    }

    #[test]
    fn empty_image_extracts_to_empty_sequence() {
        let image = RgbImage::new(0, 0);
        assert_eq!(extract(&image).unwrap(), Vec::new());
    }
}
