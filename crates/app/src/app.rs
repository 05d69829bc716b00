//! Blinkpixie render loop implementation

use std::{future::Future, pin::pin, time::Duration};

use blinkpixie_core::{IndexSequence, Phase, Strip, StripConfig};

use crate::{BlinkpixieError, BlinkpixieResult};

/// Render loop counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunStats {
    /// The number of rendered ticks.
    pub ticks: u64,
    /// The number of ticks whose frame could not be flushed to the strip.
    pub render_failures: u64,
}

/// Blinkpixie application runner.
///
/// Every tick flips the blink phase, paints even pixels with the phase "on" color and odd
/// pixels with its "off" color, then flushes the frame to the strip.
pub struct App<S: Strip> {
    strip: S,
    sequence: IndexSequence,
    phase: Phase,
    interval: Duration,
    stats: RunStats,
}

impl<S: Strip> App<S> {
    /// Creates a new application instance on top of an initialized strip.
    pub fn new(strip: S, config: &StripConfig) -> BlinkpixieResult<Self> {
        config.validate()?;
        if strip.len() != config.led_count {
            return Err(BlinkpixieError::StripLengthMismatch);
        }

        let sequence = IndexSequence::build(config.led_count)?;
        log::debug!("Built index sequence over {} pixels", sequence.len());
        Ok(Self {
            strip,
            sequence,
            phase: Phase::default(),
            interval: config.interval,
            stats: RunStats::default(),
        })
    }

    /// Returns the phase of the last rendered tick.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Renders a single frame and returns its phase.
    ///
    /// A failed flush doesn't abort the tick: it is logged and counted in [`RunStats`].
    pub fn tick(&mut self) -> BlinkpixieResult<Phase> {
        self.phase = self.phase.toggle();
        let colors = self.phase.colors();

        let strip = &mut self.strip;
        self.sequence
            .traverse(|index| strip.set_pixel(index, colors.color_for(index)))?;

        self.stats.ticks += 1;
        match self.strip.render() {
            Ok(()) => log::debug!("Rendered tick #{} in {:?} phase", self.stats.ticks, self.phase),
            Err(err) => {
                self.stats.render_failures += 1;
                log::warn!("Unable to flush tick #{}: {err}", self.stats.ticks);
            }
        }
        Ok(self.phase)
    }

    /// Runs the render loop until the `shutdown` future resolves.
    ///
    /// The shutdown future is polled while the loop sleeps between ticks. Once it resolves,
    /// the strip is shut down and the collected statistics are returned.
    pub async fn run<F>(mut self, shutdown: F) -> BlinkpixieResult<RunStats>
    where
        F: Future<Output = ()>,
    {
        let mut shutdown = pin!(shutdown);
        log::info!(
            "Starting render loop: {} pixels, interval {:?}",
            self.sequence.len(),
            self.interval
        );

        let outcome = loop {
            if let Err(err) = self.tick() {
                break Err(err);
            }

            tokio::select! {
                () = &mut shutdown => break Ok(()),
                () = tokio::time::sleep(self.interval) => {}
            }
        };
        // Release the strip even if the loop has been aborted by an error.
        let stats = self.shutdown();
        outcome.and(stats)
    }

    /// Releases the index sequence and shuts the strip down.
    pub fn shutdown(self) -> BlinkpixieResult<RunStats> {
        let Self {
            strip,
            sequence,
            stats,
            ..
        } = self;

        sequence.release();
        strip.shutdown()?;
        log::info!(
            "Render loop stopped after {} ticks ({} failed flushes)",
            stats.ticks,
            stats.render_failures
        );
        Ok(stats)
    }
}
