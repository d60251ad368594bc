//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, input thresholds and power-on values live here
//! so they can be tuned in one place. Nothing here is adjustable at runtime.

use crate::clock::ClockTime;

// Timing (all values in milliseconds)

/// Minimum time between two accepted transitions of one button.
pub const DEBOUNCE_MS: u64 = 50;

/// A button (or combo) must stay down strictly longer than this to count as held.
pub const LONG_PRESS_MS: u64 = 1000;

/// Wall-clock tick period.
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Period of the blink toggle used for the field being edited.
pub const BLINK_INTERVAL_MS: u64 = 500;

/// Time each display position stays lit before the scan moves on.
pub const SCAN_INTERVAL_MS: u64 = 3;

// Buttons

/// Number of physical buttons (A, B, C).
pub const BUTTON_COUNT: usize = 3;

/// Analog readings below this value mean the button is pressed.
///
/// The buttons pull the line towards ground, and the SAADC runs at 12-bit
/// resolution, so released buttons read close to full scale.
pub const PRESS_THRESHOLD: u16 = 500;

// Power-on state

/// Clock value shown right after boot (there is no RTC backup).
pub const INITIAL_TIME: ClockTime = ClockTime::from_parts_wrapping(14, 23);

/// Alarm value right after boot.
pub const INITIAL_ALARM: ClockTime = ClockTime::from_parts_wrapping(8, 0);

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; the actual `embassy_nrf::peripherals::*` are
// selected in `main.rs`. Adjust for your own board.
//
//   Button A (mode)      → P0.02 / AIN0
//   Button B (up)        → P0.03 / AIN1
//   Button C (down)      → P0.04 / AIN2
//   Segments a..g        → P0.11, P0.12, P0.13, P0.14, P0.15, P0.16, P0.17
//   Digit select D1..D4  → P0.19, P0.20, P0.21, P0.22 (active low)
//   Decimal point/colon  → P0.23
//   Light green/red/alarm→ P0.24, P0.25, P0.26
