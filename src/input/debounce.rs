//! Time-window debouncing for polled buttons.
//!
//! Each slot remembers the previous raw sample separately from the
//! debounced level. Every raw change is recorded, but it only becomes the
//! debounced level when at least [`DEBOUNCE_MS`] have passed since the
//! slot's last accepted transition. A flicker inside the window is
//! therefore tracked without being committed.

use super::{Button, Level};
use crate::config::{BUTTON_COUNT, DEBOUNCE_MS};
use crate::Millis;

/// Debounce state of one button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonSlot {
    level: Level,
    last_sample: Level,
    changed_at: Millis,
    processed: bool,
}

impl ButtonSlot {
    /// A released button whose last accepted transition is boot (t = 0).
    pub const fn new() -> Self {
        Self {
            level: Level::Released,
            last_sample: Level::Released,
            changed_at: 0,
            processed: false,
        }
    }

    /// Feed one raw sample taken at `now`.
    ///
    /// Returns the new debounced level when it changed.
    pub fn sample(&mut self, reading: Level, now: Millis) -> Option<Level> {
        if reading == self.last_sample {
            return None;
        }
        self.last_sample = reading;

        if now.saturating_sub(self.changed_at) < DEBOUNCE_MS {
            return None;
        }

        let previous = self.level;
        self.level = reading;
        self.changed_at = now;

        if previous == reading {
            return None;
        }
        if reading == Level::Pressed {
            self.processed = false;
        }
        Some(reading)
    }

    /// Debounced level.
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn is_pressed(&self) -> bool {
        self.level.is_pressed()
    }

    /// Timestamp of the last accepted transition.
    pub fn changed_at(&self) -> Millis {
        self.changed_at
    }

    /// Whether the current press already produced its action.
    pub fn is_processed(&self) -> bool {
        self.processed
    }

    pub fn mark_processed(&mut self) {
        self.processed = true;
    }

    /// Consume a pending short press.
    ///
    /// Returns `true` at most once per physical press: the button must be
    /// down and not yet processed, and it is marked processed on success.
    pub fn take_press(&mut self) -> bool {
        if self.is_pressed() && !self.processed {
            self.processed = true;
            true
        } else {
            false
        }
    }
}

impl Default for ButtonSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Debounce slots for all buttons.
#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    slots: [ButtonSlot; BUTTON_COUNT],
}

impl Debouncer {
    pub const fn new() -> Self {
        Self {
            slots: [ButtonSlot::new(); BUTTON_COUNT],
        }
    }

    /// Feed one sample per button, in [`Button::ALL`] order.
    ///
    /// Returns the debounced changes of this iteration, indexed by button.
    pub fn update(
        &mut self,
        readings: [Level; BUTTON_COUNT],
        now: Millis,
    ) -> [Option<Level>; BUTTON_COUNT] {
        let mut changes = [None; BUTTON_COUNT];
        for (slot, (reading, change)) in self
            .slots
            .iter_mut()
            .zip(readings.into_iter().zip(changes.iter_mut()))
        {
            *change = slot.sample(reading, now);
        }
        changes
    }

    pub fn slot(&self, button: Button) -> &ButtonSlot {
        &self.slots[button.index()]
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.slot(button).is_pressed()
    }

    /// True when every listed button is down.
    pub fn all_pressed(&self, buttons: &[Button]) -> bool {
        buttons.iter().all(|&b| self.is_pressed(b))
    }

    pub fn take_press(&mut self, button: Button) -> bool {
        self.slots[button.index()].take_press()
    }

    pub fn mark_processed(&mut self, button: Button) {
        self.slots[button.index()].mark_processed();
    }
}
