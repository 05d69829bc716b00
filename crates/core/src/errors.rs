use alloc::collections::TryReserveError;
use core::fmt::Display;

use displaydoc::Display;

/// A specialized result type for Blinkpixie.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while driving a LED strip.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Debug)]
#[repr(u16)]
pub enum Error {
    /// Unable to allocate storage for the pixel indices.
    Allocation = 1,
    /// The strip must contain at least one LED.
    EmptyStrip = 2,
    /// The length of the strip does not match with the configured one.
    StripLengthMismatch = 3,
    /// The pixel index is outside of the strip.
    PixelOutOfRange = 4,
    /// The data pin cannot drive a LED strip.
    InvalidPin = 5,
    /// The DMA channel is out of the supported range.
    InvalidDmaChannel = 6,
    /// Unknown strip color order.
    InvalidColorOrder = 7,
    /// The render interval must be greater than zero.
    InvalidInterval = 8,
    /// Unable to open the LED strip device.
    DeviceUnavailable = 9,
    /// Unable to flush the frame to the LED strip.
    Render = 10,
    /// Unable to shut down the LED strip.
    Shutdown = 11,
    /// The strip frame does not fit into a single device transfer.
    StripTooLong = 12,
    /// Unspecified error with code {0}.
    Unspecified(u16),
}

impl Error {
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Allocation,
            2 => Self::EmptyStrip,
            3 => Self::StripLengthMismatch,
            4 => Self::PixelOutOfRange,
            5 => Self::InvalidPin,
            6 => Self::InvalidDmaChannel,
            7 => Self::InvalidColorOrder,
            8 => Self::InvalidInterval,
            9 => Self::DeviceUnavailable,
            10 => Self::Render,
            11 => Self::Shutdown,
            12 => Self::StripTooLong,

            other => Self::Unspecified(other),
        }
    }

    pub fn into_code(self) -> u16 {
        match self {
            Error::Allocation => 1,
            Error::EmptyStrip => 2,
            Error::StripLengthMismatch => 3,
            Error::PixelOutOfRange => 4,
            Error::InvalidPin => 5,
            Error::InvalidDmaChannel => 6,
            Error::InvalidColorOrder => 7,
            Error::InvalidInterval => 8,
            Error::DeviceUnavailable => 9,
            Error::Render => 10,
            Error::Shutdown => 11,
            Error::StripTooLong => 12,

            Error::Unspecified(other) => other,
        }
    }

    /// Creates a new device unavailable error.
    pub fn device_unavailable<E>(_: E) -> Self
    where
        E: Display,
    {
        Self::DeviceUnavailable
    }

    /// Creates a new frame flush error.
    pub fn render<E>(_: E) -> Self
    where
        E: Display,
    {
        Self::Render
    }
}

impl From<TryReserveError> for Error {
    fn from(_: TryReserveError) -> Self {
        Self::Allocation
    }
}

#[cfg(any(feature = "std", test))]
impl std::error::Error for Error {}
