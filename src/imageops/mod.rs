//! Image processing functions operating on pixel buffers.
//!
//! In-place operations take `&mut PixelBuffer`; dimension-changing
//! operations take `&PixelBuffer` and return the replacement buffer, which
//! the caller swaps in wholesale.

/// Mirrors and rotation
pub use self::affine::{mirror_horizontally, mirror_vertically, rotate};

/// Color operations
pub use self::colorops::{
    black_white, brightness, extract_blue, extract_green, extract_red, grayscale, invert,
    mix_channels, saturate, sepia,
};

/// Sampling and area filters
pub use self::sample::{blur, pixelate, resize_height, resize_width, scale};

mod affine;
mod colorops;
mod sample;
