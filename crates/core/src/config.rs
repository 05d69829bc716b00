use core::time::Duration;

use crate::{ColorOrder, Error, Result};

/// Number of LEDs in the default strip.
pub const DEFAULT_LED_COUNT: u16 = 45;
/// SPI0 MOSI pin.
pub const DEFAULT_PIN: u8 = 10;
pub const DEFAULT_DMA_CHANNEL: u8 = 5;
pub const MAX_DMA_CHANNEL: u8 = 14;
pub const DEFAULT_BRIGHTNESS: u8 = 255;
/// Delay between two consecutive frames.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// LED strip configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripConfig {
    /// GPIO pin the strip data line is connected to.
    pub pin: u8,
    /// DMA channel used to feed the data line.
    pub dma_channel: u8,
    /// The number of LEDs in the strip.
    pub led_count: u16,
    /// Channel order expected by the strip.
    pub color_order: ColorOrder,
    /// Global brightness, `255` keeps colors unchanged.
    pub brightness: u8,
    /// Delay between two consecutive frames.
    pub interval: Duration,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            pin: DEFAULT_PIN,
            dma_channel: DEFAULT_DMA_CHANNEL,
            led_count: DEFAULT_LED_COUNT,
            color_order: ColorOrder::default(),
            brightness: DEFAULT_BRIGHTNESS,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl StripConfig {
    /// Checks the hardware independent parameters.
    pub fn validate(&self) -> Result<()> {
        if self.led_count == 0 {
            return Err(Error::EmptyStrip);
        }
        if self.dma_channel > MAX_DMA_CHANNEL {
            return Err(Error::InvalidDmaChannel);
        }
        if self.interval.is_zero() {
            return Err(Error::InvalidInterval);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::StripConfig;
    use crate::{ColorOrder, Error};

    #[test]
    fn test_default_config() {
        let config = StripConfig::default();
        assert_eq!(config.led_count, 45);
        assert_eq!(config.dma_channel, 5);
        assert_eq!(config.brightness, 255);
        assert_eq!(config.color_order, ColorOrder::Rgb);
        assert_eq!(config.interval, Duration::from_secs(1));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_invalid_config() {
        let config = StripConfig {
            led_count: 0,
            ..StripConfig::default()
        };
        assert_eq!(config.validate(), Err(Error::EmptyStrip));

        let config = StripConfig {
            dma_channel: 15,
            ..StripConfig::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidDmaChannel));

        let config = StripConfig {
            interval: Duration::ZERO,
            ..StripConfig::default()
        };
        assert_eq!(config.validate(), Err(Error::InvalidInterval));
    }
}
