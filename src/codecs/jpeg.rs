//! JPEG adapter: decoding through `zune-jpeg`, encoding through
//! `jpeg-encoder`.

use std::fs;
use std::path::Path;

use zune_core::colorspace::ColorSpace;
use zune_core::options::DecoderOptions;

use crate::buffer::PixelBuffer;
use crate::error::{ImageError, ImageResult};
use crate::image::ImageFormat;

/// Decodes the JPEG file at `path` into an RGBA pixel buffer.
///
/// The decoder is asked for RGBA output directly; grayscale and YCbCr
/// sources come back already expanded with an opaque alpha channel.
pub fn decode(path: &Path) -> ImageResult<PixelBuffer> {
    let input = fs::read(path)?;
    let options = DecoderOptions::default().jpeg_set_out_colorspace(ColorSpace::RGBA);
    let mut decoder = zune_jpeg::JpegDecoder::new_with_options(input.as_slice(), options);

    let rgba = decoder.decode().map_err(from_zune)?;
    let (width, height) = decoder
        .dimensions()
        .ok_or_else(|| ImageError::decoding(ImageFormat::Jpeg, "missing image dimensions"))?;
    PixelBuffer::from_raw(width, height, &rgba)
}

/// Encodes the buffer as a baseline JPEG at `path` (quality 90).
///
/// JPEG carries no alpha; the encoder drops the alpha channel on the way to
/// YCbCr, so a decode of the written file reads back fully opaque.
pub fn encode(path: &Path, buffer: &PixelBuffer) -> ImageResult<()> {
    let (width, height) = buffer.dimensions();
    let encoder = jpeg_encoder::Encoder::new_file(path, 90)
        .map_err(|err| ImageError::encoding(ImageFormat::Jpeg, err))?;
    encoder
        .encode(
            &buffer.to_raw(),
            width as u16,
            height as u16,
            jpeg_encoder::ColorType::Rgba,
        )
        .map_err(|err| ImageError::encoding(ImageFormat::Jpeg, err))?;
    Ok(())
}

fn from_zune(err: zune_jpeg::errors::DecodeErrors) -> ImageError {
    ImageError::decoding(ImageFormat::Jpeg, err)
}
