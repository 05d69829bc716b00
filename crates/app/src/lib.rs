//! Blinkpixie application
//!
//! The parity blink render loop on top of the [`Strip`](blinkpixie_core::Strip) abstraction.

// Linter configuration
#![warn(unsafe_code, clippy::pedantic, clippy::use_self)]
// Too many false positives.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub use blinkpixie_core as core;
pub use blinkpixie_core::{Error as BlinkpixieError, Result as BlinkpixieResult};

pub use crate::app::{App, RunStats};

mod app;
