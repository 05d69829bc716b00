//! Blinkpixie core
//!
//! Implementation agnostic building blocks of the parity blink: pixel indices and colors,
//! the blink phase, the index sequence that enumerates the strip and the [`Strip`] trait
//! which abstracts the LED hardware.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
// Linter configuration
#![warn(unsafe_code, clippy::pedantic, clippy::use_self)]
// Too many false positives.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation
)]

extern crate alloc;

pub use crate::{
    color::{Color, ColorOrder},
    config::StripConfig,
    errors::{Error, Result},
    phase::{Phase, PhaseColors},
    sequence::{IndexSequence, NodeId, SequenceNode},
    strip::{PixelIndex, Strip},
};

pub mod color;
pub mod config;
pub mod errors;
pub mod phase;
pub mod sequence;
pub mod strip;

#[cfg(any(feature = "std", test))]
pub mod test_utils;
