//! Strip emulation for running without the hardware.

use std::fmt::Write as _;

use blinkpixie_core::{Color, Error, PixelIndex, Result, Strip, StripConfig};

fn glyph(color: Color) -> char {
    match color {
        Color::BLACK => '.',
        Color::GREEN => 'G',
        Color::RED => 'R',
        _ => '*',
    }
}

/// LED strip which prints every flushed frame to the log.
#[derive(Debug)]
pub struct DryRunStrip {
    frame: Vec<Color>,
    frames: u64,
    len: u16,
}

impl DryRunStrip {
    /// Returns the text representation of the current frame buffer.
    #[must_use]
    pub fn render_line(&self) -> String {
        self.frame.iter().copied().map(glyph).collect()
    }

    /// Returns the number of flushed frames.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Strip for DryRunStrip {
    fn init(config: &StripConfig) -> Result<Self> {
        config.validate()?;

        log::info!(
            "Emulating {} LEDs instead of GPIO {}",
            config.led_count,
            config.pin
        );
        Ok(Self {
            frame: vec![Color::BLACK; usize::from(config.led_count)],
            frames: 0,
            len: config.led_count,
        })
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
        self.frames += 1;

        let mut line = String::with_capacity(self.frame.len() + 16);
        write!(line, "frame {:>5} | ", self.frames).map_err(Error::render)?;
        line.push_str(&self.render_line());
        log::info!("{line}");
        Ok(())
    }

    fn shutdown(self) -> Result<()> {
        log::info!("Emulated strip stopped after {} frames", self.frames);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use blinkpixie_core::{Color, PixelIndex, Strip, StripConfig};

    use super::DryRunStrip;

    #[test]
    fn test_dry_run_strip() {
        let config = StripConfig {
            led_count: 5,
            ..StripConfig::default()
        };
        let mut strip = DryRunStrip::init(&config).unwrap();
        assert_eq!(strip.len(), 5);
        assert_eq!(strip.render_line(), ".....");

        strip.set_pixel(PixelIndex(0), Color::GREEN).unwrap();
        strip.set_pixel(PixelIndex(1), Color::RED).unwrap();
        strip
            .set_pixel(PixelIndex(4), Color::from_rgb(1, 2, 3))
            .unwrap();
        assert!(strip.set_pixel(PixelIndex(5), Color::RED).is_err());
        assert_eq!(strip.render_line(), "GR..*");

        strip.render().unwrap();
        strip.render().unwrap();
        assert_eq!(strip.frames(), 2);
        strip.shutdown().unwrap();
    }
}
