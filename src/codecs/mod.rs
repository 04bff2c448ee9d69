//! Codec adapters bridging external decoder/encoder crates to the pixel
//! buffer.
//!
//! Each adapter honors the same narrow contract: decode a file into
//! interleaved 8-bit RGBA (row-major, no padding) and build a
//! [`crate::PixelBuffer`] from it, or encode a buffer's RGBA bytes back to a
//! file. The transform core never talks to the codec crates directly.

pub mod jpeg;
pub mod png;
