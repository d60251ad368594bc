//! Indicator light policy.

use crate::board::{Light, OutputBank, OutputLine};
use crate::ui::UiState;
use crate::Snapshot;

/// Level of each indicator light.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightLevels {
    pub green: bool,
    pub red: bool,
    pub alarm: bool,
}

impl LightLevels {
    /// Lights for the given state.
    ///
    /// Green means the clock is showing time, red means the alarm is being
    /// edited or is ringing. The alarm light follows the minute match while
    /// showing time.
    pub fn for_snapshot(snapshot: &Snapshot) -> Self {
        match snapshot.state {
            UiState::ShowingTime => Self {
                green: true,
                red: false,
                alarm: snapshot.alarm_minute_reached(),
            },
            UiState::SettingAlarmMinute | UiState::SettingAlarmSecond => Self {
                green: false,
                red: true,
                alarm: false,
            },
            UiState::AlarmTriggered => Self {
                green: false,
                red: true,
                alarm: true,
            },
        }
    }

    pub fn level(&self, light: Light) -> bool {
        match light {
            Light::Green => self.green,
            Light::Red => self.red,
            Light::Alarm => self.alarm,
        }
    }

    pub fn apply<B: OutputBank>(&self, bank: &mut B) {
        for light in Light::ALL {
            bank.set(OutputLine::Light(light), self.level(light));
        }
    }
}
