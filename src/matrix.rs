//! The 4×5 affine color matrix primitive.

use crate::color::Pixel;

/// An immutable 4×5 matrix of coefficients mapping a pixel's channels to a
/// new pixel's channels.
///
/// Row `i`, columns 0–3 hold the weights applied to the source channels in
/// `(red, green, blue, alpha)` order to produce output channel `i`; column 4
/// is an additive bias for that channel. Application is a pure function from
/// pixel to pixel.
///
/// This is the single primitive underlying grayscale, sepia, brightness,
/// saturation and channel extraction; each of those is only a choice of
/// coefficients (see [`crate::imageops::mix_channels`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix {
    coeffs: [[f32; 5]; 4],
}

impl ColorMatrix {
    /// The matrix that maps every pixel to itself.
    pub const IDENTITY: ColorMatrix = ColorMatrix::new([
        [1.0, 0.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 1.0, 0.0],
    ]);

    /// Creates a matrix from a full 4-row, 5-column coefficient table.
    #[must_use]
    pub const fn new(coeffs: [[f32; 5]; 4]) -> ColorMatrix {
        ColorMatrix { coeffs }
    }

    /// Creates a matrix from a 3×3 RGB coefficient block, row-major
    /// `[rr, rg, rb, gr, gg, gb, br, bg, bb]`.
    ///
    /// The color rows carry no alpha weight and no bias; the alpha row is
    /// `[0, 0, 0, 1, 0]`, so alpha passes through unchanged and never bleeds
    /// into the color channels.
    #[must_use]
    pub const fn from_rgb_block(block: [f32; 9]) -> ColorMatrix {
        ColorMatrix::new([
            [block[0], block[1], block[2], 0.0, 0.0],
            [block[3], block[4], block[5], 0.0, 0.0],
            [block[6], block[7], block[8], 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0, 0.0],
        ])
    }

    /// Applies the matrix to one pixel, producing a new saturated pixel.
    ///
    /// Each output channel accumulates in floating point and is truncated
    /// toward zero before saturation, so results are reproducible rather
    /// than rounded.
    #[must_use]
    pub fn apply(&self, pixel: Pixel) -> Pixel {
        let input = [
            f32::from(pixel.red),
            f32::from(pixel.green),
            f32::from(pixel.blue),
            f32::from(pixel.alpha),
        ];

        let mut output = [0u8; 4];
        for (channel, row) in output.iter_mut().zip(&self.coeffs) {
            let mut acc = row[4];
            for (value, weight) in input.iter().zip(&row[..4]) {
                acc += value * weight;
            }
            *channel = Pixel::saturate(acc as i32);
        }
        Pixel::from_channels(output)
    }
}
