//! Core logic of the three-button alarm clock.
//!
//! Everything in this library is pure and runs on the host: debouncing,
//! hold detection, the UI state machine, timekeeping and display
//! rendering. Hardware is reached only through the samples passed to
//! [`AlarmClock::step`] and the [`board::OutputBank`] passed to
//! [`AlarmClock::drive`].
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and is only built with `--features embedded`.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod board;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod input;
pub mod lights;
pub mod ui;

/// Monotonic milliseconds since boot, sampled once per loop iteration.
pub type Millis = u64;

pub use app::{AlarmClock, Event, Snapshot, Tick};
pub use clock::ClockTime;
pub use error::{Error, Result};
pub use ui::UiState;
