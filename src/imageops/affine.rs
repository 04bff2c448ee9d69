//! Mirrors and arbitrary-angle rotation.

use crate::buffer::PixelBuffer;

/// Mirrors the image across its vertical midline, in place.
///
/// Pixel pairs reflected across the midline swap; with an odd width the
/// center column is its own mirror and stays untouched.
pub fn mirror_horizontally(buffer: &mut PixelBuffer) {
    let width = buffer.width();
    for row in buffer.rows_mut() {
        for x in 0..width / 2 {
            row.swap(x, width - 1 - x);
        }
    }
}

/// Mirrors the image across its horizontal midline, in place.
///
/// With an odd height the center row is its own mirror and stays untouched.
pub fn mirror_vertically(buffer: &mut PixelBuffer) {
    let (width, height) = buffer.dimensions();
    let data = buffer.as_pixels_mut();
    for y in 0..height / 2 {
        for x in 0..width {
            data.swap(y * width + x, (height - 1 - y) * width + x);
        }
    }
}

/// Rotates the image by `degrees` around its center, expanding the canvas so
/// no content is clipped, and returns the replacement buffer.
///
/// Every destination pixel is mapped through the inverse rotation (pivoting
/// on the new center) plus the translation correcting for the old/new canvas
/// size difference; destinations whose source coordinate falls outside the
/// original bounds keep the default `(0, 0, 0, 0)`, so the exposed corners
/// come out transparent black.
///
/// Callers are expected to skip the call entirely for angles that are exact
/// multiples of 360° (see [`crate::RasterImage::rotate`]).
#[must_use]
pub fn rotate(buffer: &PixelBuffer, degrees: f64) -> PixelBuffer {
    let (width, height) = buffer.dimensions();
    let theta = degrees.to_radians();
    let (sin_t, cos_t) = theta.sin_cos();

    // Bounding box of the rotated image, integer-truncated.
    let new_w = (height as f64 * sin_t.abs() + width as f64 * cos_t.abs()) as usize;
    let new_h = (height as f64 * cos_t.abs() + width as f64 * sin_t.abs()) as usize;
    let mut out = PixelBuffer::new(new_w, new_h);

    let x0 = (new_w / 2) as f64;
    let y0 = (new_h / 2) as f64;
    let shift_x = (0.5 * new_w as f64 - 0.5 * width as f64) as i64;
    let shift_y = (0.5 * new_h as f64 - 0.5 * height as f64) as i64;

    for y in 0..new_h {
        for x in 0..new_w {
            let dx = x as f64 - x0;
            let dy = y as f64 - y0;
            let src_x = (cos_t * dx - sin_t * dy + x0) as i64 - shift_x;
            let src_y = (sin_t * dx + cos_t * dy + y0) as i64 - shift_y;
            if src_x >= 0 && (src_x as usize) < width && src_y >= 0 && (src_y as usize) < height {
                out.put_pixel(x, y, buffer.get_pixel(src_x as usize, src_y as usize));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{mirror_horizontally, mirror_vertically, rotate};
    use crate::buffer::PixelBuffer;
    use crate::color::Pixel;

    fn gradient(width: usize, height: usize) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height);
        for y in 0..height {
            for x in 0..width {
                buffer.put_pixel(x, y, Pixel::new((y * width + x) as u8, 0, 0, 255));
            }
        }
        buffer
    }

    #[test]
    fn mirror_horizontally_reverses_rows() {
        let mut buffer = gradient(3, 2);
        mirror_horizontally(&mut buffer);
        let top: Vec<u8> = buffer.row(0).unwrap().iter().map(|p| p.red).collect();
        assert_eq!(top, vec![2, 1, 0]);
        // Odd width: the center column stayed put.
        assert_eq!(buffer.get_pixel(1, 0).red, 1);
    }

    #[test]
    fn mirror_vertically_reverses_columns() {
        let mut buffer = gradient(2, 3);
        mirror_vertically(&mut buffer);
        let left: Vec<u8> = (0..3).map(|y| buffer.get_pixel(0, y).red).collect();
        assert_eq!(left, vec![4, 2, 0]);
        assert_eq!(buffer.get_pixel(0, 1).red, 2);
    }

    #[test]
    fn mirrors_are_involutions() {
        let original = gradient(4, 3);

        let mut buffer = original.clone();
        mirror_horizontally(&mut buffer);
        mirror_horizontally(&mut buffer);
        assert_eq!(buffer, original);

        mirror_vertically(&mut buffer);
        mirror_vertically(&mut buffer);
        assert_eq!(buffer, original);
    }

    #[test]
    fn rotate_quarter_turn_swaps_dimensions() {
        let buffer = gradient(3, 2);
        let rotated = rotate(&buffer, 90.0);
        assert_eq!(rotated.dimensions(), (2, 3));
    }

    #[test]
    fn rotate_quarter_turns_restore_dimensions() {
        let buffer = gradient(5, 3);
        let once = rotate(&buffer, 90.0);
        let back = rotate(&once, 270.0);
        assert_eq!(back.dimensions(), buffer.dimensions());
    }

    #[test]
    fn rotate_half_turn_keeps_dimensions() {
        let buffer = gradient(4, 3);
        assert_eq!(rotate(&buffer, 180.0).dimensions(), (4, 3));
    }

    #[test]
    fn rotate_fills_exposed_corners_with_default() {
        let mut buffer = PixelBuffer::new(4, 4);
        for pixel in buffer.pixels_mut() {
            *pixel = Pixel::new(255, 255, 255, 255);
        }
        let rotated = rotate(&buffer, 45.0);
        let (w, h) = rotated.dimensions();
        assert_eq!((w, h), (5, 5));
        // The new center maps straight back onto the old content.
        assert_eq!(rotated.get_pixel(2, 2), Pixel::new(255, 255, 255, 255));
        // The top-right corner's pre-image lies outside the source.
        assert_eq!(rotated.get_pixel(4, 0), Pixel::default());
    }
}
