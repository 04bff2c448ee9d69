//! The raster image type and its format dispatch.

use core::fmt;
use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::codecs;
use crate::error::{ImageError, ImageResult, ParameterErrorKind};
use crate::imageops;

/// An enumeration of supported image formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ImageFormat {
    /// An image in PNG format.
    Png,
    /// An image in JPEG format.
    Jpeg,
}

impl ImageFormat {
    /// Picks a format from a file extension, ASCII-case-insensitively.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ImageFormat> {
        if ext.eq_ignore_ascii_case("png") {
            Some(ImageFormat::Png)
        } else if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") {
            Some(ImageFormat::Jpeg)
        } else {
            None
        }
    }

    /// Picks a format from the extension of `path` (the substring after the
    /// final `.`).
    ///
    /// Fails with [`ImageError::UnsupportedFormat`] when the extension is
    /// missing or matches no registered codec.
    pub fn from_path(path: impl AsRef<Path>) -> ImageResult<ImageFormat> {
        // `Path::extension` treats a leading-dot name like `.png` as having
        // no extension, so split the file name on its final `.` instead.
        let ext = path
            .as_ref()
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.rsplit_once('.'))
            .map_or("", |(_, ext)| ext);
        ImageFormat::from_extension(ext).ok_or_else(|| ImageError::unsupported_format(ext))
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageFormat::Png => f.write_str("PNG"),
            ImageFormat::Jpeg => f.write_str("JPEG"),
        }
    }
}

/// A decoded raster image: one owned [`PixelBuffer`] plus the format it came
/// from.
///
/// Every transform mutates the buffer in place or, for the dimension-changing
/// operations (rotate, resize, scale), builds a full replacement buffer and
/// swaps it in; the old buffer is released as part of the swap. Width and
/// height are always read through the buffer so they stay consistent across
/// those swaps.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    buffer: PixelBuffer,
    format: ImageFormat,
}

impl RasterImage {
    /// Opens the image at `path`, selecting the codec by file extension.
    pub fn open(path: impl AsRef<Path>) -> ImageResult<RasterImage> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path)?;
        let buffer = match format {
            ImageFormat::Png => codecs::png::decode(path)?,
            ImageFormat::Jpeg => codecs::jpeg::decode(path)?,
        };
        Ok(RasterImage { buffer, format })
    }

    /// Saves the image to `path`, selecting the codec by the destination's
    /// file extension.
    pub fn save(&self, path: impl AsRef<Path>) -> ImageResult<()> {
        let path = path.as_ref();
        match ImageFormat::from_path(path)? {
            ImageFormat::Png => codecs::png::encode(path, &self.buffer),
            ImageFormat::Jpeg => codecs::jpeg::encode(path, &self.buffer),
        }
    }

    /// Wraps an already-decoded pixel buffer.
    #[must_use]
    pub fn from_buffer(buffer: PixelBuffer, format: ImageFormat) -> RasterImage {
        RasterImage { buffer, format }
    }

    /// Builds an image from interleaved RGBA bytes (the codec memory
    /// layout: 4 bytes per pixel, row-major, no padding).
    pub fn from_raw(
        width: usize,
        height: usize,
        bytes: &[u8],
        format: ImageFormat,
    ) -> ImageResult<RasterImage> {
        Ok(RasterImage {
            buffer: PixelBuffer::from_raw(width, height, bytes)?,
            format,
        })
    }

    /// The format this image was created as.
    #[must_use]
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// The image width in pixels.
    #[must_use]
    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    /// The image height in pixels.
    #[must_use]
    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    /// The width and height in pixels.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        self.buffer.dimensions()
    }

    /// A view of the underlying pixel buffer.
    #[must_use]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// A mutable view of the underlying pixel buffer.
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer {
        &mut self.buffer
    }

    /// Consumes the image and returns its pixel buffer.
    #[must_use]
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    /// Inverts every channel of every pixel, alpha included.
    pub fn invert(&mut self) {
        imageops::invert(&mut self.buffer);
    }

    /// Mirrors the image across its vertical midline.
    pub fn mirror_horizontally(&mut self) {
        imageops::mirror_horizontally(&mut self.buffer);
    }

    /// Mirrors the image across its horizontal midline.
    pub fn mirror_vertically(&mut self) {
        imageops::mirror_vertically(&mut self.buffer);
    }

    /// Rotates the image by an arbitrary angle (in degrees) around its
    /// center, expanding the canvas so nothing is clipped; exposed corners
    /// become transparent black.
    ///
    /// Exact multiples of 360° leave the image untouched.
    pub fn rotate(&mut self, degrees: f64) {
        if degrees % 360.0 == 0.0 {
            return;
        }
        self.buffer = imageops::rotate(&self.buffer, degrees);
    }

    /// Resamples to `width` columns, keeping the brightest pixel of each
    /// source span. Only shrinking is supported on this path.
    pub fn resize_width(&mut self, width: usize) -> ImageResult<()> {
        self.buffer = imageops::resize_width(&self.buffer, width)?;
        Ok(())
    }

    /// Resamples to `height` rows, keeping the brightest pixel of each
    /// source span. Only shrinking is supported on this path.
    pub fn resize_height(&mut self, height: usize) -> ImageResult<()> {
        self.buffer = imageops::resize_height(&self.buffer, height)?;
        Ok(())
    }

    /// Shrinks both dimensions to `percent`% of their current size via the
    /// single-axis resizes (width first, then height on the intermediate
    /// result). Values above 100 are unsupported here; use
    /// [`RasterImage::scale`] to enlarge.
    pub fn resize(&mut self, percent: u32) -> ImageResult<()> {
        if percent > 100 {
            return Err(ImageError::parameter(
                ParameterErrorKind::UpscaleUnsupported {
                    requested: percent as usize,
                    current: 100,
                },
            ));
        }
        let width = (self.width() as f64 * 0.01 * f64::from(percent)) as usize;
        let height = (self.height() as f64 * 0.01 * f64::from(percent)) as usize;
        self.resize_width(width)?;
        self.resize_height(height)
    }

    /// Nearest-neighbor resize of both dimensions to `percent`% of their
    /// current size; enlargement and shrinkage both work.
    pub fn scale(&mut self, percent: u32) {
        let width = (self.width() as f64 * 0.01 * f64::from(percent)) as usize;
        let height = (self.height() as f64 * 0.01 * f64::from(percent)) as usize;
        self.buffer = imageops::scale(&self.buffer, width, height);
    }

    /// Applies the sepia tone filter.
    pub fn sepia(&mut self) {
        imageops::sepia(&mut self.buffer);
    }

    /// Converts the image to grayscale.
    pub fn grayscale(&mut self) {
        imageops::grayscale(&mut self.buffer);
    }

    /// Scales the color channels by `percent / 100`; 100 is the identity.
    pub fn brightness(&mut self, percent: f32) {
        imageops::brightness(&mut self.buffer, percent);
    }

    /// Adjusts saturation: 0 desaturates fully, 1 is the identity, above 1
    /// oversaturates.
    pub fn saturate(&mut self, saturation: f32) {
        imageops::saturate(&mut self.buffer, saturation);
    }

    /// Keeps only the red channel.
    pub fn extract_red(&mut self) {
        imageops::extract_red(&mut self.buffer);
    }

    /// Keeps only the green channel.
    pub fn extract_green(&mut self) {
        imageops::extract_green(&mut self.buffer);
    }

    /// Keeps only the blue channel.
    pub fn extract_blue(&mut self) {
        imageops::extract_blue(&mut self.buffer);
    }

    /// Thresholds to opaque black and white on the RGB average; alpha is
    /// preserved.
    pub fn black_white(&mut self) {
        imageops::black_white(&mut self.buffer);
    }

    /// Replaces each `block` × `block` tile with its top-left color.
    pub fn pixelate(&mut self, block: usize) {
        imageops::pixelate(&mut self.buffer, block);
    }

    /// Separable box blur with the given radius.
    pub fn blur(&mut self, radius: u32) {
        imageops::blur(&mut self.buffer, radius);
    }

    /// Mixes the color channels through a 3×3 coefficient block, row-major
    /// `[rr, rg, rb, gr, gg, gb, br, bg, bb]`; alpha passes through.
    pub fn mix_channels(&mut self, block: [f32; 9]) {
        imageops::mix_channels(&mut self.buffer, block);
    }
}
