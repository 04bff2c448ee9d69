//! The owned, contiguous 2-D pixel grid.

use crate::color::Pixel;
use crate::error::{ImageError, ImageResult, ParameterErrorKind};
use crate::matrix::ColorMatrix;

/// An owned 2-D grid of [`Pixel`] values stored in a single contiguous,
/// row-major allocation.
///
/// The buffer is exclusively owned by at most one image at a time; transforms
/// that change dimensions build a fresh buffer and swap it in wholesale.
/// `Clone` produces an independent deep duplicate, and `std::mem::take`
/// leaves a valid empty buffer behind (width = height = 0, no allocation),
/// which is how ownership moves between intermediate buffers.
///
/// Invariant: `width * height` always equals the allocation length, and a
/// zero dimension yields an empty allocation that is never dereferenced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<Pixel>,
}

impl PixelBuffer {
    /// Allocates a `width` × `height` buffer with every pixel defaulted to
    /// `(0, 0, 0, 0)`. A zero dimension yields an empty buffer.
    #[must_use]
    pub fn new(width: usize, height: usize) -> PixelBuffer {
        let len = if width == 0 || height == 0 {
            0
        } else {
            width * height
        };
        PixelBuffer {
            width,
            height,
            data: vec![Pixel::default(); len],
        }
    }

    /// Copies `width * height` pixels out of an interleaved RGBA byte slice
    /// (4 bytes per pixel, row-major, no padding).
    ///
    /// The source stays with the caller; the buffer owns its own copy. Fails
    /// with a parameter error when the slice is too short for the given
    /// dimensions; extra trailing bytes are ignored.
    pub fn from_raw(width: usize, height: usize, bytes: &[u8]) -> ImageResult<PixelBuffer> {
        let expected = width * height * 4;
        if bytes.len() < expected {
            return Err(ImageError::parameter(ParameterErrorKind::DimensionMismatch));
        }
        let data = bytes[..expected]
            .chunks_exact(4)
            .map(|c| Pixel::new(c[0], c[1], c[2], c[3]))
            .collect();
        Ok(PixelBuffer {
            width,
            height,
            data,
        })
    }

    /// Exports the pixels back to interleaved RGBA bytes in the exact layout
    /// [`PixelBuffer::from_raw`] consumes.
    #[must_use]
    pub fn to_raw(&self) -> Vec<u8> {
        self.data.iter().flat_map(|p| p.channels()).collect()
    }

    /// The width and height of this buffer.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// The width of this buffer.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// The height of this buffer.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the buffer holds no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The pixels of row `y`.
    ///
    /// Fails with an out-of-range parameter error when `y >= height`; a bad
    /// row index is a caller bug, never silent wraparound.
    pub fn row(&self, y: usize) -> ImageResult<&[Pixel]> {
        if y >= self.height {
            return Err(ImageError::parameter(ParameterErrorKind::RowOutOfBounds {
                row: y,
                height: self.height,
            }));
        }
        let start = y * self.width;
        Ok(&self.data[start..start + self.width])
    }

    /// The pixels of row `y`, mutably.
    ///
    /// Fails with an out-of-range parameter error when `y >= height`.
    pub fn row_mut(&mut self, y: usize) -> ImageResult<&mut [Pixel]> {
        if y >= self.height {
            return Err(ImageError::parameter(ParameterErrorKind::RowOutOfBounds {
                row: y,
                height: self.height,
            }));
        }
        let start = y * self.width;
        Ok(&mut self.data[start..start + self.width])
    }

    /// Iterates over the rows of the buffer as pixel slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.data.chunks_exact(self.width.max(1))
    }

    /// Iterates over the rows of the buffer as mutable pixel slices.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Pixel]> {
        self.data.chunks_exact_mut(self.width.max(1))
    }

    /// Iterates over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &Pixel> {
        self.data.iter()
    }

    /// Iterates over all pixels in row-major order, mutably.
    pub fn pixels_mut(&mut self) -> impl Iterator<Item = &mut Pixel> {
        self.data.iter_mut()
    }

    /// The whole grid as one row-major pixel slice.
    #[must_use]
    pub fn as_pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// The whole grid as one mutable row-major pixel slice.
    #[must_use]
    pub fn as_pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// Gets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of the bounds `(width, height)`.
    #[must_use]
    pub fn get_pixel(&self, x: usize, y: usize) -> Pixel {
        self.data[self.pixel_index(x, y)]
    }

    /// Puts a pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of the bounds `(width, height)`.
    pub fn put_pixel(&mut self, x: usize, y: usize, pixel: Pixel) {
        let index = self.pixel_index(x, y);
        self.data[index] = pixel;
    }

    /// Replaces every pixel `p` with `matrix.apply(p)`, in place.
    ///
    /// Each output depends only on the corresponding input, so the traversal
    /// order is irrelevant.
    pub fn apply_filter(&mut self, matrix: &ColorMatrix) {
        for pixel in &mut self.data {
            *pixel = matrix.apply(*pixel);
        }
    }

    fn pixel_index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel coordinate ({x}, {y}) out of bounds ({}, {})",
            self.width,
            self.height
        );
        y * self.width + x
    }
}

#[cfg(test)]
mod tests {
    use super::PixelBuffer;
    use crate::color::Pixel;
    use crate::error::{ImageError, ParameterErrorKind};
    use crate::matrix::ColorMatrix;

    #[test]
    fn new_buffer_is_zeroed() {
        let buffer = PixelBuffer::new(3, 2);
        assert_eq!(buffer.dimensions(), (3, 2));
        assert!(buffer.pixels().all(|p| *p == Pixel::default()));
    }

    #[test]
    fn zero_dimension_yields_empty_buffer() {
        assert!(PixelBuffer::new(0, 5).is_empty());
        assert!(PixelBuffer::new(5, 0).is_empty());
        assert_eq!(PixelBuffer::new(0, 5).rows().count(), 0);
    }

    #[test]
    fn raw_bytes_round_trip() {
        let bytes: Vec<u8> = (0..16).collect();
        let buffer = PixelBuffer::from_raw(2, 2, &bytes).unwrap();
        assert_eq!(buffer.get_pixel(0, 0), Pixel::new(0, 1, 2, 3));
        assert_eq!(buffer.get_pixel(1, 0), Pixel::new(4, 5, 6, 7));
        assert_eq!(buffer.get_pixel(0, 1), Pixel::new(8, 9, 10, 11));
        assert_eq!(buffer.get_pixel(1, 1), Pixel::new(12, 13, 14, 15));
        assert_eq!(buffer.to_raw(), bytes);
    }

    #[test]
    fn from_raw_rejects_short_input() {
        let err = PixelBuffer::from_raw(2, 2, &[0u8; 15]).unwrap_err();
        assert!(matches!(
            err,
            ImageError::Parameter {
                kind: ParameterErrorKind::DimensionMismatch
            }
        ));
    }

    #[test]
    fn row_access_is_bounds_checked() {
        let mut buffer = PixelBuffer::new(4, 3);
        assert_eq!(buffer.row(2).unwrap().len(), 4);
        let err = buffer.row(3).unwrap_err();
        assert!(matches!(
            err,
            ImageError::Parameter {
                kind: ParameterErrorKind::RowOutOfBounds { row: 3, height: 3 }
            }
        ));
        assert!(buffer.row_mut(7).is_err());
    }

    #[test]
    fn rows_visit_the_grid_in_order() {
        let bytes: Vec<u8> = (0..24).collect();
        let buffer = PixelBuffer::from_raw(2, 3, &bytes).unwrap();
        let rows: Vec<_> = buffer.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], buffer.row(1).unwrap());
    }

    #[test]
    fn clone_is_a_deep_copy() {
        let mut buffer = PixelBuffer::new(2, 2);
        let copy = buffer.clone();
        buffer.put_pixel(0, 0, Pixel::new(1, 2, 3, 4));
        assert_eq!(copy.get_pixel(0, 0), Pixel::default());
    }

    #[test]
    fn take_leaves_a_valid_empty_buffer() {
        let mut buffer = PixelBuffer::new(2, 2);
        let moved = std::mem::take(&mut buffer);
        assert_eq!(moved.dimensions(), (2, 2));
        assert_eq!(buffer.dimensions(), (0, 0));
        assert!(buffer.is_empty());
    }

    #[test]
    fn apply_filter_with_identity_is_a_no_op() {
        let bytes: Vec<u8> = (100..116).collect();
        let mut buffer = PixelBuffer::from_raw(2, 2, &bytes).unwrap();
        let before = buffer.clone();
        buffer.apply_filter(&ColorMatrix::IDENTITY);
        assert_eq!(buffer, before);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_pixel_panics_outside_the_grid() {
        let buffer = PixelBuffer::new(2, 2);
        let _ = buffer.get_pixel(2, 0);
    }
}
