//! User interface - the four-state alarm clock state machine.
//!
//! The machine reacts to short presses and long holds and owns every
//! change of the alarm setting. The display and the indicator lights are
//! pure functions of the current state.
//!
//! ## States
//!
//! - **ShowingTime**: clock running, A enters alarm setting
//! - **SettingAlarmMinute** / **SettingAlarmSecond**: B/C adjust the field,
//!   B+C held switches field, A held returns
//! - **AlarmTriggered**: B or A+B+C held dismisses

pub mod machine;

pub use machine::UiMachine;

/// States the clock UI can be in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UiState {
    /// Idle - shows the running clock.
    #[default]
    ShowingTime,
    /// Editing the alarm minutes (minute digits flash).
    SettingAlarmMinute,
    /// Editing the alarm seconds (second digits flash).
    SettingAlarmSecond,
    /// Alarm minute reached - colon flashes until dismissed.
    AlarmTriggered,
}

impl UiState {
    /// Check if the alarm value is being edited
    pub fn is_setting(&self) -> bool {
        matches!(self, UiState::SettingAlarmMinute | UiState::SettingAlarmSecond)
    }
}

/// A state change produced by one evaluation of the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    pub from: UiState,
    pub to: UiState,
}
