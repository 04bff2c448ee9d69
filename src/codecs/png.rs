//! PNG adapter backed by the `png` crate.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::error::{ImageError, ImageResult};
use crate::image::ImageFormat;

/// Decodes the PNG file at `path` into an RGBA pixel buffer.
///
/// Paletted, grayscale and 16-bit inputs are expanded/narrowed to 8-bit
/// RGBA so every decoded image lands in the one buffer layout the core
/// operates on.
pub fn decode(path: &Path) -> ImageResult<PixelBuffer> {
    let file = File::open(path)?;
    let mut decoder = png::Decoder::new(file);
    decoder.set_transformations(
        png::Transformations::normalize_to_color8() | png::Transformations::ALPHA,
    );

    let mut reader = decoder.read_info().map_err(from_png)?;
    let mut data = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data).map_err(from_png)?;
    let (width, height) = (info.width as usize, info.height as usize);
    data.truncate(info.buffer_size());

    let rgba = match info.color_type {
        png::ColorType::Rgba => data,
        png::ColorType::GrayscaleAlpha => data
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        png::ColorType::Rgb => data
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
            .collect(),
        png::ColorType::Grayscale => data.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        other => {
            return Err(ImageError::decoding(
                ImageFormat::Png,
                format!("decoder produced unexpected color type {other:?}"),
            ))
        }
    };
    PixelBuffer::from_raw(width, height, &rgba)
}

/// Encodes the buffer as an 8-bit RGBA PNG at `path`.
pub fn encode(path: &Path, buffer: &PixelBuffer) -> ImageResult<()> {
    let (width, height) = buffer.dimensions();
    let file = File::create(path)?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width as u32, height as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|err| ImageError::encoding(ImageFormat::Png, err))?;
    writer
        .write_image_data(&buffer.to_raw())
        .map_err(|err| ImageError::encoding(ImageFormat::Png, err))?;
    Ok(())
}

fn from_png(err: png::DecodingError) -> ImageError {
    match err {
        png::DecodingError::IoError(err) => ImageError::from(err),
        other => ImageError::decoding(ImageFormat::Png, other),
    }
}
