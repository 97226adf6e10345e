//! Contains the [`ImagePipeline`] builder struct for the high level API.

use crate::{quantize, ColorSlice, InvalidCenterCount, DEFAULT_PALETTE_SIZE, MAX_PIXELS};

use palette::Srgb;
#[cfg(feature = "image")]
use {
    crate::{pixels, AboveMaxLen},
    image::RgbImage,
};

/// A builder struct to specify the options for quantizing an image.
///
/// # Examples
/// To start, create an [`ImagePipeline`] from an [`RgbImage`]
/// (note that the `image` feature is needed):
/// ```no_run
/// # use palettize::ImagePipeline;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let img = image::open("some image")?.into_rgb8();
/// let mut pipeline = ImagePipeline::try_from(&img)?;
/// # Ok(())
/// # }
/// ```
///
/// Then, set the number of palette colors and, if reproducible output is
/// needed, the seed for the random center selection:
/// ```no_run
/// # use palettize::ImagePipeline;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let img = image::open("some image")?.into_rgb8();
/// # let mut pipeline = ImagePipeline::try_from(&img)?;
/// let pipeline = pipeline.palette_size(64).seed(42);
/// # Ok(())
/// # }
/// ```
///
/// Finally, run the pipeline, either serially or in parallel
/// (the latter needs the `threads` feature):
/// ```no_run
/// # use palettize::ImagePipeline;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let img = image::open("some image")?.into_rgb8();
/// # let pipeline = ImagePipeline::try_from(&img)?;
/// let image = pipeline.quantized_rgbimage()?;
/// let image = pipeline.quantized_rgbimage_par()?;
/// # Ok(())
/// # }
/// ```
#[must_use]
#[derive(Debug, Clone)]
pub struct ImagePipeline {
    /// The input image as a flat sequence of pixels in column-major order.
    colors: Vec<Srgb<u8>>,
    /// The dimensions of the image.
    dimensions: (u32, u32),
    /// The number of centers to sample for the palette.
    k: u32,
    /// The seed value for the random number generator.
    seed: u64,
}

impl ImagePipeline {
    /// Creates a new [`ImagePipeline`] with default options from a flat
    /// sequence of pixels in column-major order (see
    /// [`pixels::extract`](crate::pixels::extract)).
    ///
    /// Returns `None` if the length of `colors` is not equal to
    /// `width * height` or is greater than [`MAX_PIXELS`].
    pub fn new(colors: Vec<Srgb<u8>>, width: u32, height: u32) -> Option<Self> {
        if colors.len() == width as usize * height as usize
            && colors.len() <= MAX_PIXELS as usize
        {
            Some(Self {
                colors,
                dimensions: (width, height),
                k: DEFAULT_PALETTE_SIZE,
                seed: 0,
            })
        } else {
            None
        }
    }

    /// Returns the `(width, height)` of the image.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// Sets the palette size which determines the number of centers to sample.
    ///
    /// The default palette size is [`DEFAULT_PALETTE_SIZE`].
    pub fn palette_size(&mut self, k: u32) -> &mut Self {
        self.k = k;
        self
    }

    /// Sets the seed value for the random number generator.
    ///
    /// The same seed always selects the same centers for the same image.
    /// The default seed is `0`.
    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = seed;
        self
    }

    /// The pixels as a [`ColorSlice`].
    fn color_slice(&self) -> ColorSlice<'_, Srgb<u8>> {
        // the length bound was validated on construction
        ColorSlice::new_unchecked(&self.colors)
    }

    /// Runs the pipeline and returns the quantized pixels in the same
    /// column-major order as the input.
    ///
    /// # Errors
    /// Returns [`InvalidCenterCount`] if the palette size is zero or greater
    /// than the number of pixels.
    pub fn quantized_pixels(&self) -> Result<Vec<Srgb<u8>>, InvalidCenterCount> {
        quantize::sampled(self.k, self.color_slice(), self.seed)
    }

    /// Parallel version of [`ImagePipeline::quantized_pixels`].
    ///
    /// # Errors
    /// Returns [`InvalidCenterCount`] if the palette size is zero or greater
    /// than the number of pixels.
    #[cfg(feature = "threads")]
    pub fn quantized_pixels_par(&self) -> Result<Vec<Srgb<u8>>, InvalidCenterCount> {
        quantize::sampled_par(self.k, self.color_slice(), self.seed)
    }
}

#[cfg(feature = "image")]
impl TryFrom<&RgbImage> for ImagePipeline {
    type Error = AboveMaxLen<u32>;

    fn try_from(image: &RgbImage) -> Result<Self, Self::Error> {
        let colors = pixels::extract(image)?;

        #[allow(clippy::expect_used)]
        {
            // extract checked the pixel count and produces one color per pixel
            Ok(Self::new(colors, image.width(), image.height())
                .expect("length matches dimensions"))
        }
    }
}

#[cfg(feature = "image")]
impl ImagePipeline {
    /// Runs the pipeline and returns the quantized image.
    ///
    /// # Errors
    /// Returns [`InvalidCenterCount`] if the palette size is zero or greater
    /// than the number of pixels.
    pub fn quantized_rgbimage(&self) -> Result<RgbImage, InvalidCenterCount> {
        let (width, height) = self.dimensions;
        let colors = self.quantized_pixels()?;

        #[allow(clippy::expect_used)]
        {
            // quantization preserves the length validated on construction
            Ok(pixels::to_rgbimage(&colors, width, height).expect("length matches dimensions"))
        }
    }

    /// Parallel version of [`ImagePipeline::quantized_rgbimage`].
    ///
    /// # Errors
    /// Returns [`InvalidCenterCount`] if the palette size is zero or greater
    /// than the number of pixels.
    #[cfg(feature = "threads")]
    pub fn quantized_rgbimage_par(&self) -> Result<RgbImage, InvalidCenterCount> {
        let (width, height) = self.dimensions;
        let colors = self.quantized_pixels_par()?;

        #[allow(clippy::expect_used)]
        {
            // quantization preserves the length validated on construction
            Ok(pixels::to_rgbimage(&colors, width, height).expect("length matches dimensions"))
        }
    }
}
