//! The 8-bit RGBA color sample type.

use num_traits::clamp;

/// A single 4-channel color sample with 8 bits per channel.
///
/// `Pixel` is a plain value type; buffers copy it freely. Channel values are
/// always within `[0, 255]` by construction, and every arithmetic path that
/// can leave that range goes through [`Pixel::saturate`] before storing a
/// channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
    /// The alpha channel.
    pub alpha: u8,
}

impl Pixel {
    /// Creates a pixel from all four channel values.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Pixel {
        Pixel {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Creates a color pixel; the alpha channel defaults to 0, like every
    /// channel left unspecified at construction.
    #[must_use]
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Pixel {
        Pixel::new(red, green, blue, 0)
    }

    /// The sum of all four channels.
    ///
    /// Used as a cheap brightness proxy by the single-axis resize sampling,
    /// not as a true luminance measure.
    #[must_use]
    pub fn channel_sum(self) -> u32 {
        u32::from(self.red) + u32::from(self.green) + u32::from(self.blue) + u32::from(self.alpha)
    }

    /// Clamps a computed channel value into the valid `[0, 255]` range.
    ///
    /// This is the single saturation primitive shared by every arithmetic
    /// path that may overflow the 8-bit channel range (color matrix output
    /// in particular).
    #[must_use]
    pub fn saturate(value: i32) -> u8 {
        clamp(value, 0, 255) as u8
    }

    /// The channels in `[red, green, blue, alpha]` order, matching the
    /// interleaved byte layout of decoded image data.
    #[must_use]
    pub fn channels(self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Builds a pixel from channels in `[red, green, blue, alpha]` order.
    #[must_use]
    pub fn from_channels(channels: [u8; 4]) -> Pixel {
        Pixel::new(channels[0], channels[1], channels[2], channels[3])
    }
}
