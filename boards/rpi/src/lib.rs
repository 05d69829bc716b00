//! Raspberry Pi board support for Blinkpixie.
//!
//! The strip data line is driven by the SPI MOSI pin, the WS2812 bit timings are encoded
//! into the SPI bit stream by the [`ws2812_spi`] crate.

// Linter configuration
#![warn(unsafe_code, clippy::pedantic, clippy::use_self)]
// Too many false positives.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation
)]

pub use crate::{dry_run::DryRunStrip, strip::RpiStrip};

mod dry_run;
mod strip;
