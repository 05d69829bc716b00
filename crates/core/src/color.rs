//! Packed RGB colors and strip channel orders.

use core::{fmt, str::FromStr};

use smart_leds::RGB8;

use crate::Error;

/// 24-bit packed RGB color, `0xRRGGBB`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Color(u32);

impl Color {
    /// All channels off.
    pub const BLACK: Self = Self(0x00_0000);
    /// Full green.
    pub const GREEN: Self = Self(0x00_FF00);
    /// Full red.
    pub const RED: Self = Self(0xFF_0000);

    const MASK: u32 = 0x00FF_FFFF;

    /// Creates a color from the packed value, the upper byte is ignored.
    #[must_use]
    pub const fn from_packed(value: u32) -> Self {
        Self(value & Self::MASK)
    }

    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self((red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    #[must_use]
    pub const fn packed(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl From<Color> for RGB8 {
    fn from(color: Color) -> Self {
        RGB8::new(color.red(), color.green(), color.blue())
    }
}

impl From<RGB8> for Color {
    fn from(rgb: RGB8) -> Self {
        Self::from_rgb(rgb.r, rgb.g, rgb.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// The order in which a strip expects the color channels on the wire.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum ColorOrder {
    #[default]
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
}

impl ColorOrder {
    /// All supported channel orders.
    pub const ALL: [Self; 6] = [
        Self::Rgb,
        Self::Rbg,
        Self::Grb,
        Self::Gbr,
        Self::Brg,
        Self::Bgr,
    ];

    /// Returns the color channels in the order they should be sent to the strip.
    #[must_use]
    pub const fn arrange(self, color: Color) -> [u8; 3] {
        let (r, g, b) = (color.red(), color.green(), color.blue());
        match self {
            Self::Rgb => [r, g, b],
            Self::Rbg => [r, b, g],
            Self::Grb => [g, r, b],
            Self::Gbr => [g, b, r],
            Self::Brg => [b, r, g],
            Self::Bgr => [b, g, r],
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Rbg => "rbg",
            Self::Grb => "grb",
            Self::Gbr => "gbr",
            Self::Brg => "brg",
            Self::Bgr => "bgr",
        }
    }
}

impl fmt::Display for ColorOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.name().eq_ignore_ascii_case(s))
            .ok_or(Error::InvalidColorOrder)
    }
}
