//! Turn a clock snapshot into the pin levels of one scan slot.

use super::{ScanPosition, Segments};
use crate::board::{Digit, OutputBank, OutputLine, Segment};
use crate::ui::UiState;
use crate::Snapshot;

/// What one scan slot shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Frame {
    /// A digit pattern on one digit position.
    Digit { digit: Digit, segments: Segments },
    /// The colon between minutes and seconds.
    Colon,
    /// Nothing lit (blink-off phase).
    Blank,
}

impl Frame {
    /// Frame for `position` given the current state.
    ///
    /// Setting states show the alarm value and flash the field being edited;
    /// a ringing alarm flashes the colon.
    pub fn render(snapshot: &Snapshot, position: ScanPosition) -> Self {
        if !snapshot.blink_on && blinks(snapshot.state, position) {
            return Frame::Blank;
        }

        let Some(digit) = position.digit() else {
            return Frame::Colon;
        };
        let value = snapshot.shown_time().digits()[position.index()];
        Segments::for_digit(value)
            .map(|segments| Frame::Digit { digit, segments })
            .unwrap_or(Frame::Blank)
    }

    /// Drive the display lines for this frame.
    ///
    /// All digit selects are released before new segment levels are
    /// written, so the previous digit never shows the next pattern.
    pub fn apply<B: OutputBank>(&self, bank: &mut B) {
        for digit in Digit::ALL {
            bank.set(OutputLine::Digit(digit), true);
        }

        match *self {
            Frame::Digit { digit, segments } => {
                bank.set(OutputLine::DecimalPoint, false);
                write_segments(bank, segments);
                bank.set(OutputLine::Digit(digit), false);
            }
            Frame::Colon => {
                write_segments(bank, Segments::BLANK);
                bank.set(OutputLine::Digit(Digit::D2), false);
                bank.set(OutputLine::DecimalPoint, true);
            }
            Frame::Blank => {
                write_segments(bank, Segments::BLANK);
                bank.set(OutputLine::DecimalPoint, false);
            }
        }
    }
}

/// Whether `position` belongs to the field that flashes in `state`.
fn blinks(state: UiState, position: ScanPosition) -> bool {
    use ScanPosition::*;

    match position {
        MinuteTens | MinuteUnits => state == UiState::SettingAlarmMinute,
        SecondTens | SecondUnits => state == UiState::SettingAlarmSecond,
        Colon => state == UiState::AlarmTriggered,
    }
}

fn write_segments<B: OutputBank>(bank: &mut B, segments: Segments) {
    for segment in Segment::ALL {
        bank.set(OutputLine::Segment(segment), segments.is_lit(segment));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ClockTime;

    fn snapshot(state: UiState, blink_on: bool) -> Snapshot {
        Snapshot {
            state,
            time: ClockTime::from_parts_wrapping(14, 23),
            alarm: ClockTime::from_parts_wrapping(8, 5),
            blink_on,
        }
    }

    fn digit_frame(digit: Digit, value: u8) -> Frame {
        Frame::Digit {
            digit,
            segments: Segments::for_digit(value).unwrap(),
        }
    }

    /// Records the last level written to each line.
    #[derive(Default)]
    struct Lines {
        segments: [bool; 7],
        digits: [bool; 4],
        dp: bool,
    }

    impl OutputBank for Lines {
        fn set(&mut self, line: OutputLine, high: bool) {
            match line {
                OutputLine::Segment(s) => self.segments[s.index()] = high,
                OutputLine::Digit(d) => self.digits[d.index()] = high,
                OutputLine::DecimalPoint => self.dp = high,
                OutputLine::Light(_) => {}
            }
        }
    }

    #[test]
    fn showing_time_renders_clock_digits() {
        let s = snapshot(UiState::ShowingTime, false);
        assert_eq!(
            Frame::render(&s, ScanPosition::MinuteTens),
            digit_frame(Digit::D1, 1)
        );
        assert_eq!(
            Frame::render(&s, ScanPosition::SecondUnits),
            digit_frame(Digit::D4, 3)
        );
        assert_eq!(Frame::render(&s, ScanPosition::Colon), Frame::Colon);
    }

    #[test]
    fn setting_minute_blinks_minutes_and_shows_alarm_seconds() {
        let off = snapshot(UiState::SettingAlarmMinute, false);
        assert_eq!(Frame::render(&off, ScanPosition::MinuteTens), Frame::Blank);
        assert_eq!(Frame::render(&off, ScanPosition::MinuteUnits), Frame::Blank);
        assert_eq!(
            Frame::render(&off, ScanPosition::SecondUnits),
            digit_frame(Digit::D4, 5)
        );

        let on = snapshot(UiState::SettingAlarmMinute, true);
        assert_eq!(
            Frame::render(&on, ScanPosition::MinuteUnits),
            digit_frame(Digit::D2, 8)
        );
    }

    #[test]
    fn setting_second_blinks_seconds_only() {
        let off = snapshot(UiState::SettingAlarmSecond, false);
        assert_eq!(
            Frame::render(&off, ScanPosition::MinuteTens),
            digit_frame(Digit::D1, 0)
        );
        assert_eq!(Frame::render(&off, ScanPosition::SecondTens), Frame::Blank);
        assert_eq!(Frame::render(&off, ScanPosition::Colon), Frame::Colon);
    }

    #[test]
    fn ringing_alarm_blinks_colon_over_clock_digits() {
        let off = snapshot(UiState::AlarmTriggered, false);
        assert_eq!(Frame::render(&off, ScanPosition::Colon), Frame::Blank);
        assert_eq!(
            Frame::render(&off, ScanPosition::MinuteUnits),
            digit_frame(Digit::D2, 4)
        );
    }

    #[test]
    fn applying_digit_selects_only_that_digit() {
        let mut lines = Lines::default();
        digit_frame(Digit::D3, 1).apply(&mut lines);

        assert_eq!(lines.digits, [true, true, false, true]);
        assert_eq!(
            lines.segments,
            [false, true, true, false, false, false, false]
        );
        assert!(!lines.dp);
    }

    #[test]
    fn applying_colon_uses_second_digit_and_decimal_point() {
        let mut lines = Lines::default();
        Frame::Colon.apply(&mut lines);

        assert_eq!(lines.digits, [true, false, true, true]);
        assert_eq!(lines.segments, [false; 7]);
        assert!(lines.dp);
    }

    #[test]
    fn applying_blank_turns_everything_off() {
        let mut lines = Lines::default();
        Frame::Colon.apply(&mut lines);
        Frame::Blank.apply(&mut lines);

        assert_eq!(lines.digits, [true; 4]);
        assert_eq!(lines.segments, [false; 7]);
        assert!(!lines.dp);
    }
}
