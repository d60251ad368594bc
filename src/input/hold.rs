//! Long-press detection for a single button and two button combos.
//!
//! A [`HoldTracker`] fires once per continuous satisfaction of its
//! condition, as soon as the condition has been true for strictly longer
//! than [`LONG_PRESS_MS`]. It re-arms only after the condition drops.

use super::{Button, Debouncer};
use crate::config::LONG_PRESS_MS;
use crate::Millis;

/// Buttons of the B+C combo.
const PAIR: [Button; 2] = [Button::B, Button::C];

/// Buttons of the A+B+C combo.
const TRIPLE: [Button; 3] = [Button::A, Button::B, Button::C];

/// Long-press gestures recognised by the detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gesture {
    /// Button A alone.
    HoldA,
    /// Buttons B and C together.
    HoldBC,
    /// All three buttons together.
    HoldABC,
}

/// Hold timer with a fire-once latch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoldTracker {
    started_at: Option<Millis>,
    fired: bool,
}

impl HoldTracker {
    pub const fn new() -> Self {
        Self {
            started_at: None,
            fired: false,
        }
    }

    /// Advance a tracker timed from an externally stamped start.
    ///
    /// `since` is the start of the current hold, or `None` while the
    /// condition is false. The start is taken as given on every call, so a
    /// restamped start re-times the hold. Returns `true` on the single
    /// iteration where the hold fires.
    pub fn poll_since(&mut self, since: Option<Millis>, now: Millis) -> bool {
        let Some(started_at) = since else {
            self.started_at = None;
            self.fired = false;
            return false;
        };

        self.started_at = Some(started_at);
        if self.fired || now.saturating_sub(started_at) <= LONG_PRESS_MS {
            return false;
        }
        self.fired = true;
        true
    }

    /// Advance a tracker timed from the first iteration `active` is true.
    pub fn poll_while(&mut self, active: bool, now: Millis) -> bool {
        let since = active.then(|| self.started_at.unwrap_or(now));
        self.poll_since(since, now)
    }

    /// True while the condition has lasted longer than the long-press delay,
    /// whether or not the hold already fired.
    pub fn is_long(&self, now: Millis) -> bool {
        self.started_at
            .is_some_and(|t| now.saturating_sub(t) > LONG_PRESS_MS)
    }

    pub fn started_at(&self) -> Option<Millis> {
        self.started_at
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Hold results of one iteration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoldSignals {
    /// Button A has been down longer than the long-press delay.
    pub a_long: bool,
    /// The A hold fired this iteration.
    pub a: bool,
    /// The B+C hold fired this iteration.
    pub bc: bool,
    /// The A+B+C hold fired this iteration.
    pub abc: bool,
}

impl HoldSignals {
    /// Whether `gesture` fired this iteration.
    pub fn fired(&self, gesture: Gesture) -> bool {
        match gesture {
            Gesture::HoldA => self.a,
            Gesture::HoldBC => self.bc,
            Gesture::HoldABC => self.abc,
        }
    }
}

/// The three independent hold trackers.
#[derive(Clone, Debug, Default)]
pub struct HoldDetector {
    single: HoldTracker,
    pair: HoldTracker,
    triple: HoldTracker,
}

impl HoldDetector {
    pub const fn new() -> Self {
        Self {
            single: HoldTracker::new(),
            pair: HoldTracker::new(),
            triple: HoldTracker::new(),
        }
    }

    /// Evaluate all trackers against the debounced buttons.
    ///
    /// The single-button hold is timed from A's latest accepted transition,
    /// so a re-accepted bounce restarts it. The combos are timed from the
    /// first iteration all their buttons are down.
    pub fn update(&mut self, buttons: &Debouncer, now: Millis) -> HoldSignals {
        let a = buttons.slot(Button::A);
        let a_since = a.is_pressed().then(|| a.changed_at());

        HoldSignals {
            a: self.single.poll_since(a_since, now),
            a_long: self.single.is_long(now),
            bc: self.pair.poll_while(buttons.all_pressed(&PAIR), now),
            abc: self.triple.poll_while(buttons.all_pressed(&TRIPLE), now),
        }
    }

    pub fn tracker(&self, gesture: Gesture) -> &HoldTracker {
        match gesture {
            Gesture::HoldA => &self.single,
            Gesture::HoldBC => &self.pair,
            Gesture::HoldABC => &self.triple,
        }
    }
}
