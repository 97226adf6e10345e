//! A library for reducing the number of distinct colors in an image.
//!
//! `palettize` picks `k` pixels of the image uniformly at random to serve as the
//! color palette and then replaces every pixel with its nearest palette color
//! by Euclidean distance in RGB space. Selection and assignment both happen in
//! a single pass over the image; the sampled palette is never refined.
//! This keeps the algorithm simple and fast at the cost of some quality
//! compared to iterative clustering.
//!
//! # Features
//! To reduce dependencies and compile times, `palettize` has several `cargo`
//! features that can be turned off or on:
//! - `pipelines`: exposes the [`ImagePipeline`] builder struct that serves as the high-level API.
//! - `threads`: exposes parallel versions of the remapping functions via [`rayon`].
//! - `image`: enables integration with the [`image`] crate.
//! - `bin`: builds the `palettize` command line tool.
//!
//! # High-Level API
//! To get started with the high-level API, see [`ImagePipeline`].
//! Here is a quick example:
//! ```no_run
//! # use palettize::ImagePipeline;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = image::open("some image")?.into_rgb8();
//!
//! let mut pipeline = ImagePipeline::try_from(&img)?;
//! let quantized = pipeline
//!     .palette_size(16) // set the number of colors to keep
//!     .seed(42) // make the random palette selection reproducible
//!     .quantized_rgbimage_par()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Low-Level API
//! The underlying pieces are available in the [`centers`], [`quantize`], and
//! [`distance`] modules for callers that want to supply their own palette or
//! random number generator.

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::unwrap_in_result,
    clippy::expect_used,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice,
    missing_docs,
    clippy::missing_docs_in_private_items,
    rustdoc::all,
    clippy::float_cmp_const,
    clippy::lossy_float_literal
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::missing_panics_doc,
    clippy::unreadable_literal,
    clippy::wildcard_imports
)]

mod types;

pub mod centers;
pub mod distance;
pub mod quantize;

#[cfg(feature = "image")]
pub mod pixels;

#[cfg(feature = "pipelines")]
mod api;

pub use types::*;

#[cfg(feature = "pipelines")]
pub use api::*;

/// The maximum supported image size in number of pixels is `u32::MAX`.
pub const MAX_PIXELS: u32 = u32::MAX;

/// The default number of palette colors to reduce an image to.
pub const DEFAULT_PALETTE_SIZE: u32 = 24;
