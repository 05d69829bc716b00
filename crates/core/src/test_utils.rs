//! Test helpers

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{Color, Error, PixelIndex, Result, Strip, StripConfig};

#[derive(Debug, Default)]
struct Journal {
    frames: Vec<Vec<Color>>,
    failing_renders: usize,
    shut_down: bool,
}

/// Shared journal of the frames flushed by a [`MemoryStrip`].
///
/// The journal outlives the strip, so it can be inspected after the strip has been moved
/// into the render loop or shut down.
#[derive(Debug, Clone, Default)]
pub struct FrameLog(Arc<Mutex<Journal>>);

impl FrameLog {
    fn lock(&self) -> MutexGuard<'_, Journal> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns all flushed frames, oldest first.
    #[must_use]
    pub fn frames(&self) -> Vec<Vec<Color>> {
        self.lock().frames.clone()
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<Vec<Color>> {
        self.lock().frames.last().cloned()
    }

    /// Returns the number of flushed frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn is_shut_down(&self) -> bool {
        self.lock().shut_down
    }

    /// Makes the next `count` flushes fail with [`Error::Render`].
    pub fn fail_next_renders(&self, count: usize) {
        self.lock().failing_renders = count;
    }
}

/// In-memory LED strip.
#[derive(Debug)]
pub struct MemoryStrip {
    len: u16,
    frame: Vec<Color>,
    log: FrameLog,
}

impl MemoryStrip {
    /// Creates a strip with all pixels turned off.
    #[must_use]
    pub fn new(len: u16) -> Self {
        Self {
            len,
            frame: vec![Color::BLACK; usize::from(len)],
            log: FrameLog::default(),
        }
    }

    /// Returns a handle to the journal of flushed frames.
    #[must_use]
    pub fn log(&self) -> FrameLog {
        self.log.clone()
    }

    /// Returns the frame buffer contents, including pixels that have not been flushed yet.
    #[must_use]
    pub fn frame(&self) -> &[Color] {
        &self.frame
    }
}

impl Strip for MemoryStrip {
    fn init(config: &StripConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config.led_count))
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
        let mut journal = self.log.lock();
        if journal.failing_renders > 0 {
            journal.failing_renders -= 1;
            return Err(Error::Render);
        }
        journal.frames.push(self.frame.clone());
        Ok(())
    }

    fn shutdown(self) -> Result<()> {
        self.log.lock().shut_down = true;
        Ok(())
    }
}

#[test]
fn test_memory_strip() {
    let mut strip = MemoryStrip::new(3);
    let log = strip.log();
    assert_eq!(strip.len(), 3);
    assert!(log.is_empty());

    strip.set_pixel(PixelIndex(1), Color::RED).unwrap();
    assert_eq!(
        strip.set_pixel(PixelIndex(3), Color::RED),
        Err(Error::PixelOutOfRange)
    );
    strip.render().unwrap();
    assert_eq!(
        log.last_frame().unwrap(),
        [Color::BLACK, Color::RED, Color::BLACK]
    );

    log.fail_next_renders(1);
    assert_eq!(strip.render(), Err(Error::Render));
    strip.render().unwrap();
    assert_eq!(log.len(), 2);

    strip.shutdown().unwrap();
    assert!(log.is_shut_down());
}
