//! Button input - polled analog samples to debounced presses and holds.
//!
//! Three tactile buttons sit on analog inputs:
//!   - A - mode: enter alarm setting (short), leave it (long)
//!   - B - up: increment the edited field, dismiss the alarm
//!   - C - down: decrement the edited field
//!
//! B+C held switches between the minute and second field, A+B+C held
//! dismisses a ringing alarm.
//!
//! The pipeline is [`debounce::Debouncer`] followed by
//! [`hold::HoldDetector`]; both are pure and advanced once per loop
//! iteration with the same timestamp.

pub mod debounce;
pub mod hold;


use crate::config::{BUTTON_COUNT, PRESS_THRESHOLD};

pub use debounce::{ButtonSlot, Debouncer};
pub use hold::{Gesture, HoldDetector, HoldSignals, HoldTracker};

/// One of the three physical buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    A,
    B,
    C,
}

impl Button {
    /// All buttons in sampling order.
    pub const ALL: [Button; BUTTON_COUNT] = [Button::A, Button::B, Button::C];

    /// Slot index of this button.
    pub const fn index(self) -> usize {
        match self {
            Button::A => 0,
            Button::B => 1,
            Button::C => 2,
        }
    }

    /// Number printed next to the button on the enclosure (1-based).
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

/// Binary button level, either sampled or debounced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Pressed,
    Released,
}

impl Level {
    /// Threshold a raw analog intensity. Low readings mean pressed.
    pub fn from_intensity(intensity: u16) -> Self {
        if intensity < PRESS_THRESHOLD {
            Level::Pressed
        } else {
            Level::Released
        }
    }

    pub fn is_pressed(self) -> bool {
        self == Level::Pressed
    }
}
