//! LED strip abstraction

use core::fmt;

use crate::{Color, Result, StripConfig};

/// Zero-based position of a single LED on the strip.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct PixelIndex(pub u16);

impl PixelIndex {
    #[must_use]
    pub const fn is_even(self) -> bool {
        self.0 % 2 == 0
    }

    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u16> for PixelIndex {
    fn from(index: u16) -> Self {
        Self(index)
    }
}

impl fmt::Display for PixelIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Addressable LED strip driver.
///
/// The driver owns the frame buffer: pixels set by [`Strip::set_pixel`] stay in the buffer
/// until the next [`Strip::render`] call transmits them to the hardware.
pub trait Strip: Sized {
    /// Configures the hardware and returns a driver with all pixels turned off.
    fn init(config: &StripConfig) -> Result<Self>;
    /// Returns the number of LEDs in the strip.
    fn len(&self) -> u16;
    /// Returns true if the strip has no LEDs.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Sets the color of the given pixel in the frame buffer.
    fn set_pixel(&mut self, index: PixelIndex, color: Color) -> Result<()>;
    /// Flushes the frame buffer to the strip.
    ///
    /// This call blocks until the whole frame has been transmitted.
    fn render(&mut self) -> Result<()>;
    /// Releases the hardware.
    fn shutdown(self) -> Result<()>;
}
