//! # pixmat
//!
//! An in-memory raster image manipulation engine. A decoded image is a
//! [`PixelBuffer`] — one contiguous, row-major grid of 8-bit RGBA
//! [`Pixel`]s — owned by a [`RasterImage`] that applies geometric transforms
//! (rotate, mirror, resize, scale), color transforms built on the
//! [`ColorMatrix`] primitive (grayscale, sepia, saturation, brightness,
//! channel extraction, invert, black/white threshold) and spatial filters
//! (box blur, pixelate).
//!
//! File formats stay at the boundary: the [`codecs`] adapters decode a PNG
//! or JPEG file into the buffer's RGBA layout and encode it back, selected
//! by file extension.
//!
//! ```no_run
//! use pixmat::RasterImage;
//!
//! # fn main() -> pixmat::ImageResult<()> {
//! let mut image = RasterImage::open("photo.jpg")?;
//! image.rotate(90.0);
//! image.grayscale();
//! image.blur(2);
//! image.save("photo_processed.png")?;
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub use crate::buffer::PixelBuffer;
pub use crate::color::Pixel;
pub use crate::error::{ImageError, ImageResult, ParameterErrorKind};
pub use crate::image::{ImageFormat, RasterImage};
pub use crate::matrix::ColorMatrix;

mod buffer;
mod color;
mod error;
mod image;
mod matrix;

pub mod codecs;
pub mod imageops;
