//! WS2812 strip on top of the Raspberry Pi SPI bus

use std::fmt::Debug;

use blinkpixie_core::{Color, ColorOrder, Error, PixelIndex, Result, Strip, StripConfig};
use rppal::spi::{Bus, Mode, SlaveSelect, Spi};
use smart_leds::{brightness, SmartLedsWrite, RGB8};
use ws2812_spi::prerendered::Ws2812;

/// SPI clock rate, each WS2812 bit is encoded into 4 SPI bits.
pub const SPI_CLOCK_SPEED: u32 = 3_800_000;
/// The number of encoded bytes per LED.
const BYTES_PER_LED: usize = 12;
/// Spidev transfer size limit unless the kernel module says otherwise.
pub const DEFAULT_SPIDEV_BUFSIZ: usize = 4096;
const SPIDEV_BUFSIZ_PATH: &str = "/sys/module/spidev/parameters/bufsiz";

/// Returns the maximum size of a single spidev transfer.
fn spidev_bufsiz() -> usize {
    std::fs::read_to_string(SPIDEV_BUFSIZ_PATH)
        .ok()
        .and_then(|value| parse_bufsiz(&value))
        .unwrap_or(DEFAULT_SPIDEV_BUFSIZ)
}

fn parse_bufsiz(value: &str) -> Option<usize> {
    value.trim().parse().ok().filter(|&bufsiz| bufsiz > 0)
}

/// Checks that the encoded frame fits into a single SPI transfer.
fn check_frame_size(led_count: u16, bufsiz: usize) -> Result<usize> {
    let frame_len = usize::from(led_count) * BYTES_PER_LED;
    if frame_len > bufsiz {
        log::error!(
            "{led_count} LEDs need {frame_len} bytes per frame, but spidev transfers are limited \
             to {bufsiz} bytes (at most {} LEDs)",
            bufsiz / BYTES_PER_LED
        );
        return Err(Error::StripTooLong);
    }
    Ok(frame_len)
}

/// Logs the SPI failure reason and converts it into the frame flush error.
fn flush_error<E: Debug>(err: E) -> Error {
    log::error!("Unable to write frame to SPI: {err:?}");
    Error::Render
}

/// Returns the SPI bus whose MOSI line is connected to the given GPIO pin.
fn spi_bus(pin: u8) -> Result<Bus> {
    match pin {
        10 => Ok(Bus::Spi0),
        20 => Ok(Bus::Spi1),
        _ => Err(Error::InvalidPin),
    }
}

/// Rearranges the pixel channels for the driver, which always transmits them as GRB.
fn wire_pixel(order: ColorOrder, rgb: RGB8) -> RGB8 {
    let [first, second, third] = order.arrange(Color::from(rgb));
    RGB8 {
        r: second,
        g: first,
        b: third,
    }
}

/// LED strip connected to the SPI MOSI pin.
pub struct RpiStrip {
    spi: Spi,
    frame: Vec<Color>,
    // Encoded SPI bit stream of the whole frame.
    encoded: Vec<u8>,
    color_order: ColorOrder,
    brightness: u8,
    len: u16,
}

impl RpiStrip {
    fn flush(&mut self) -> Result<()> {
        let order = self.color_order;
        let pixels = brightness(self.frame.iter().copied().map(RGB8::from), self.brightness)
            .map(|rgb| wire_pixel(order, rgb));

        Ws2812::new(&mut self.spi, &mut self.encoded)
            .write(pixels)
            .map_err(flush_error)
    }
}

impl Strip for RpiStrip {
    fn init(config: &StripConfig) -> Result<Self> {
        config.validate()?;
        let bus = spi_bus(config.pin)?;
        let frame_len = check_frame_size(config.led_count, spidev_bufsiz())?;

        log::info!(
            "Opening {:?} on GPIO {} for {} LEDs ({} order, brightness {})",
            bus,
            config.pin,
            config.led_count,
            config.color_order,
            config.brightness
        );
        // Spidev takes care about the DMA transfers by itself.
        log::debug!("Requested DMA channel {} is handled by spidev", config.dma_channel);

        let spi = Spi::new(bus, SlaveSelect::Ss0, SPI_CLOCK_SPEED, Mode::Mode0).map_err(|err| {
            log::error!("Unable to open {bus:?}: {err}");
            Error::device_unavailable(err)
        })?;

        let len = usize::from(config.led_count);
        let mut strip = Self {
            spi,
            frame: vec![Color::BLACK; len],
            encoded: vec![0_u8; frame_len],
            color_order: config.color_order,
            brightness: config.brightness,
            len: config.led_count,
        };
        // Cleanup strip, the flush logs the failure reason.
        strip.flush().map_err(|_| Error::DeviceUnavailable)?;
        Ok(strip)
    }

    fn len(&self) -> u16 {
        self.len
    }

    fn set_pixel(&mut self, index: PixelIndex, color: Color) -> Result<()> {
        let pixel = self
            .frame
            .get_mut(index.as_usize())
            .ok_or(Error::PixelOutOfRange)?;
        *pixel = color;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        self.flush()
    }

    fn shutdown(mut self) -> Result<()> {
        self.frame.fill(Color::BLACK);
        self.flush().map_err(|_| Error::Shutdown)?;
        log::info!("LED strip has been turned off");
        Ok(())
    }
}
