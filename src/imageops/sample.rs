//! Resampling and area filters: single-axis resize, scale, pixelate, blur.

use crate::buffer::PixelBuffer;
use crate::color::Pixel;
use crate::error::{ImageError, ImageResult, ParameterErrorKind};

/// Resamples the image to `new_width` columns, returning the replacement
/// buffer.
///
/// For each target column the source span is `[x * ratio, x * ratio + ratio)`
/// with `ratio = width / new_width`, and the span's brightest pixel (maximum
/// [`Pixel::channel_sum`]) is selected rather than an average or the strict
/// nearest sample. Growing the image through this path is unsupported and
/// fails with a parameter error; a same-size call reduces to single-sample
/// spans and is a no-op.
pub fn resize_width(buffer: &PixelBuffer, new_width: usize) -> ImageResult<PixelBuffer> {
    let (width, height) = buffer.dimensions();
    if new_width > width {
        return Err(ImageError::parameter(
            ParameterErrorKind::UpscaleUnsupported {
                requested: new_width,
                current: width,
            },
        ));
    }

    let ratio = width as f32 / new_width as f32;
    let mut out = PixelBuffer::new(new_width, height);
    for y in 0..height {
        for x in 0..new_width {
            let beg = (x as f32 * ratio) as usize;
            let end = ((beg as f32 + ratio) as usize).min(width);
            let mut best = beg;
            for k in beg..end {
                if buffer.get_pixel(k, y).channel_sum() > buffer.get_pixel(best, y).channel_sum() {
                    best = k;
                }
            }
            out.put_pixel(x, y, buffer.get_pixel(best, y));
        }
    }
    Ok(out)
}

/// Resamples the image to `new_height` rows, returning the replacement
/// buffer.
///
/// Same brightest-representative policy as [`resize_width`], along the
/// vertical axis.
pub fn resize_height(buffer: &PixelBuffer, new_height: usize) -> ImageResult<PixelBuffer> {
    let (width, height) = buffer.dimensions();
    if new_height > height {
        return Err(ImageError::parameter(
            ParameterErrorKind::UpscaleUnsupported {
                requested: new_height,
                current: height,
            },
        ));
    }

    let ratio = height as f32 / new_height as f32;
    let mut out = PixelBuffer::new(width, new_height);
    for x in 0..width {
        for y in 0..new_height {
            let beg = (y as f32 * ratio) as usize;
            let end = ((beg as f32 + ratio) as usize).min(height);
            let mut best = beg;
            for k in beg..end {
                if buffer.get_pixel(x, k).channel_sum() > buffer.get_pixel(x, best).channel_sum() {
                    best = k;
                }
            }
            out.put_pixel(x, y, buffer.get_pixel(x, best));
        }
    }
    Ok(out)
}

/// Nearest-neighbor resize to an arbitrary target size, both directions
/// supported, returning the replacement buffer.
///
/// The axes sample independently: destination `(i, j)` takes source
/// `(trunc(i * dy), trunc(j * dx))` with `dx = width / new_width` and
/// `dy = height / new_height`.
#[must_use]
pub fn scale(buffer: &PixelBuffer, new_width: usize, new_height: usize) -> PixelBuffer {
    let (width, height) = buffer.dimensions();
    let mut out = PixelBuffer::new(new_width, new_height);
    if out.is_empty() || buffer.is_empty() {
        return out;
    }

    let dx = width as f32 / new_width as f32;
    let dy = height as f32 / new_height as f32;
    for i in 0..new_height {
        for j in 0..new_width {
            let src_x = ((j as f32 * dx) as usize).min(width - 1);
            let src_y = ((i as f32 * dy) as usize).min(height - 1);
            out.put_pixel(j, i, buffer.get_pixel(src_x, src_y));
        }
    }
    out
}

/// Overwrites each origin-aligned `block` × `block` tile with the color of
/// its top-left pixel, in place. Tiles reaching past the image edge are
/// clipped to the valid region. A block size of 0 is a no-op.
pub fn pixelate(buffer: &mut PixelBuffer, block: usize) {
    if block == 0 {
        return;
    }
    let (width, height) = buffer.dimensions();
    for y in (0..height).step_by(block) {
        for x in (0..width).step_by(block) {
            let color = buffer.get_pixel(x, y);
            for i in y..(y + block).min(height) {
                for j in x..(x + block).min(width) {
                    buffer.put_pixel(j, i, color);
                }
            }
        }
    }
}

/// Separable box blur: a horizontal pass followed by a vertical pass, each
/// averaging every in-bounds sample within `[index - radius, index + radius]`
/// per channel.
///
/// Windows shrink near the edges instead of padding, so the divisor is the
/// actual sample count. Each pass reads a snapshot of its input, so an
/// output pixel never observes a partially blurred neighbor.
pub fn blur(buffer: &mut PixelBuffer, radius: u32) {
    blur_pass(buffer, radius, Axis::Horizontal);
    blur_pass(buffer, radius, Axis::Vertical);
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

fn blur_pass(buffer: &mut PixelBuffer, radius: u32, axis: Axis) {
    let (width, height) = buffer.dimensions();
    if buffer.is_empty() {
        return;
    }
    let src = buffer.clone();
    let radius = radius as usize;

    for y in 0..height {
        for x in 0..width {
            let (center, limit) = match axis {
                Axis::Horizontal => (x, width),
                Axis::Vertical => (y, height),
            };
            let lo = center.saturating_sub(radius);
            let hi = (center + radius).min(limit - 1);

            // Sums stay far below u64::MAX even for a whole-axis window.
            let mut sums = [0u64; 4];
            for k in lo..=hi {
                let p = match axis {
                    Axis::Horizontal => src.get_pixel(k, y),
                    Axis::Vertical => src.get_pixel(x, k),
                };
                for (sum, channel) in sums.iter_mut().zip(p.channels()) {
                    *sum += u64::from(channel);
                }
            }
            let count = (hi - lo + 1) as u64;
            buffer.put_pixel(
                x,
                y,
                Pixel::new(
                    (sums[0] / count) as u8,
                    (sums[1] / count) as u8,
                    (sums[2] / count) as u8,
                    (sums[3] / count) as u8,
                ),
            );
        }
    }
}
