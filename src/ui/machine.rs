//! State machine definition
//!
//! Each state checks its inputs in a fixed order and acts on the first one
//! that applies. The order is part of the behavior: when a hold and a short
//! press are both pending, the earlier check wins and the later one is lost.

use super::{Transition, UiState};
use crate::clock::ClockTime;
use crate::input::{Button, Debouncer, HoldSignals};

/// Current UI state.
#[derive(Clone, Debug)]
pub struct UiMachine {
    state: UiState,
}

impl UiMachine {
    pub const fn new() -> Self {
        Self {
            state: UiState::ShowingTime,
        }
    }

    pub fn state(&self) -> UiState {
        self.state
    }

    /// Evaluate the machine once.
    ///
    /// Short presses are consumed from `buttons`, one button at a time; a
    /// button that is down but was not acted on stays pending for the next
    /// evaluation. The alarm value is edited in place.
    ///
    /// While showing time, a minute match moves to `AlarmTriggered` on every
    /// evaluation, so a dismissed alarm rings again until the minute passes.
    pub fn step(
        &mut self,
        buttons: &mut Debouncer,
        holds: &HoldSignals,
        time: ClockTime,
        alarm: &mut ClockTime,
    ) -> Option<Transition> {
        use UiState::*;

        let from = self.state;
        let to = match from {
            ShowingTime => {
                let mut next = from;
                if !holds.a_long && buttons.take_press(Button::A) {
                    next = SettingAlarmMinute;
                }
                if time.same_minute(alarm) {
                    next = AlarmTriggered;
                }
                next
            }

            SettingAlarmMinute => {
                if holds.a {
                    ShowingTime
                } else if buttons.take_press(Button::B) {
                    alarm.increment_minutes();
                    from
                } else if buttons.take_press(Button::C) {
                    alarm.decrement_minutes();
                    from
                } else if holds.bc {
                    SettingAlarmSecond
                } else {
                    from
                }
            }

            SettingAlarmSecond => {
                if holds.a {
                    ShowingTime
                } else if buttons.take_press(Button::B) {
                    alarm.increment_seconds();
                    from
                } else if buttons.take_press(Button::C) {
                    alarm.decrement_seconds();
                    from
                } else if holds.bc {
                    SettingAlarmMinute
                } else {
                    from
                }
            }

            AlarmTriggered => {
                if buttons.take_press(Button::B) || holds.abc {
                    ShowingTime
                } else {
                    from
                }
            }
        };

        if to == from {
            return None;
        }
        self.state = to;
        Some(Transition { from, to })
    }
}

impl Default for UiMachine {
    fn default() -> Self {
        Self::new()
    }
}
