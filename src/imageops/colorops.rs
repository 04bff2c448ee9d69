//! Color operations: channel mixing and the filters expressed through it.

use crate::buffer::PixelBuffer;
use crate::color::Pixel;
use crate::matrix::ColorMatrix;

/// Standard luma weights used to derive the saturation matrix.
const LUMA_R: f32 = 0.3086;
const LUMA_G: f32 = 0.6094;
const LUMA_B: f32 = 0.0820;

/// Inverts each pixel, in place: every channel, alpha included, becomes its
/// complement `255 - channel`.
pub fn invert(buffer: &mut PixelBuffer) {
    for pixel in buffer.pixels_mut() {
        *pixel = Pixel::new(
            255 - pixel.red,
            255 - pixel.green,
            255 - pixel.blue,
            255 - pixel.alpha,
        );
    }
}

/// Applies a 3×3 RGB channel-mixing block to every pixel.
///
/// `block` is row-major `[rr, rg, rb, gr, gg, gb, br, bg, bb]`; alpha passes
/// through unchanged. This is the primitive behind [`grayscale`], [`sepia`],
/// [`brightness`], [`saturate`] and the channel extractions.
pub fn mix_channels(buffer: &mut PixelBuffer, block: [f32; 9]) {
    buffer.apply_filter(&ColorMatrix::from_rgb_block(block));
}

/// Converts the image to grayscale using the `(0.3, 0.59, 0.11)` weights
/// broadcast to every output channel.
pub fn grayscale(buffer: &mut PixelBuffer) {
    mix_channels(
        buffer,
        [0.3, 0.59, 0.11, 0.3, 0.59, 0.11, 0.3, 0.59, 0.11],
    );
}

/// Applies the classic sepia tone coefficients.
pub fn sepia(buffer: &mut PixelBuffer) {
    mix_channels(
        buffer,
        [0.393, 0.769, 0.189, 0.349, 0.686, 0.168, 0.272, 0.534, 0.131],
    );
}

/// Scales the three color channels by `percent / 100`.
///
/// `brightness(100.0)` is the identity; 50 halves every color channel, 200
/// doubles it (saturating at 255). Alpha is untouched.
pub fn brightness(buffer: &mut PixelBuffer, percent: f32) {
    let c = percent / 100.0;
    mix_channels(buffer, [c, 0.0, 0.0, 0.0, c, 0.0, 0.0, 0.0, c]);
}

/// Adjusts color saturation.
///
/// `s = 0` desaturates fully (luma-weighted gray), `s = 1` is the identity,
/// values above 1 oversaturate.
pub fn saturate(buffer: &mut PixelBuffer, s: f32) {
    let sr = (1.0 - s) * LUMA_R;
    let sg = (1.0 - s) * LUMA_G;
    let sb = (1.0 - s) * LUMA_B;
    mix_channels(
        buffer,
        [sr + s, sg, sb, sr, sg + s, sb, sr, sg, sb + s],
    );
}

/// Keeps only the red channel.
pub fn extract_red(buffer: &mut PixelBuffer) {
    mix_channels(buffer, [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
}

/// Keeps only the green channel.
pub fn extract_green(buffer: &mut PixelBuffer) {
    mix_channels(buffer, [0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
}

/// Keeps only the blue channel.
pub fn extract_blue(buffer: &mut PixelBuffer) {
    mix_channels(buffer, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
}

/// Thresholds the image to opaque black and white, in place.
///
/// The integer average of red, green and blue decides: at most 127 maps to
/// black, above 127 to white. Alpha is preserved. This is a thresholding
/// decision, not a linear map, so it does not go through the color matrix.
pub fn black_white(buffer: &mut PixelBuffer) {
    for pixel in buffer.pixels_mut() {
        let avg = (u32::from(pixel.red) + u32::from(pixel.green) + u32::from(pixel.blue)) / 3;
        let value = if avg <= 127 { 0 } else { 255 };
        *pixel = Pixel::new(value, value, value, pixel.alpha);
    }
}
