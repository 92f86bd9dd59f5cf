//! RGB pixel values
//!
//! Channels are stored as `u8`. Integer input outside 0-255 is saturated by
//! [`Rgb::saturating`], so a stored channel never exceeds 255.

/// One pixel: red, green and blue channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// All channels off
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// All channels full
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a pixel value
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a pixel value, clamping each channel into 0-255
    pub fn saturating(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: r.clamp(0, 255) as u8,
            g: g.clamp(0, 255) as u8,
            b: b.clamp(0, 255) as u8,
        }
    }

    /// Channels in wire order
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Channels scaled by `brightness`, see [`scale_channel`]
    pub fn scaled(self, brightness: f32) -> [u8; 3] {
        [
            scale_channel(self.r, brightness),
            scale_channel(self.g, brightness),
            scale_channel(self.b, brightness),
        ]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for (u8, u8, u8) {
    fn from(rgb: Rgb) -> Self {
        (rgb.r, rgb.g, rgb.b)
    }
}

/// Scale one channel by a brightness factor
///
/// The product is truncated toward zero and saturated into 0-255: a
/// brightness above 1.0 clips at 255, a negative brightness gives 0, and a
/// NaN brightness gives 0.
#[inline]
pub fn scale_channel(value: u8, brightness: f32) -> u8 {
    // float -> int `as` casts truncate and saturate, NaN maps to 0
    (value as f32 * brightness) as u8
}
