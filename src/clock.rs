//! Minutes/seconds timekeeping.
//!
//! The clock has no notion of hours: both fields wrap at 60, so the
//! displayed time repeats every hour. The same `ClockTime` type holds the
//! alarm setting.

use crate::config::TICK_INTERVAL_MS;
use crate::error::{Error, Result, TimeField};
use crate::Millis;

/// A `MM:SS` value with both fields in `0..=59`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    minutes: u8,
    seconds: u8,
}

impl ClockTime {
    /// Build a time from fields that must already be in range.
    pub fn new(minutes: u8, seconds: u8) -> Result<Self> {
        if minutes >= 60 {
            return Err(Error::FieldOutOfRange(TimeField::Minutes, minutes));
        }
        if seconds >= 60 {
            return Err(Error::FieldOutOfRange(TimeField::Seconds, seconds));
        }
        Ok(Self { minutes, seconds })
    }

    /// Build a time, reducing each field modulo 60.
    pub const fn from_parts_wrapping(minutes: u8, seconds: u8) -> Self {
        Self {
            minutes: minutes % 60,
            seconds: seconds % 60,
        }
    }

    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Advance by one second, carrying into minutes.
    pub fn advance_second(&mut self) {
        self.seconds += 1;
        if self.seconds >= 60 {
            self.seconds = 0;
            self.minutes = wrap_up(self.minutes);
        }
    }

    pub fn increment_minutes(&mut self) {
        self.minutes = wrap_up(self.minutes);
    }

    pub fn decrement_minutes(&mut self) {
        self.minutes = wrap_down(self.minutes);
    }

    /// Adjust seconds without carrying into minutes (alarm editing).
    pub fn increment_seconds(&mut self) {
        self.seconds = wrap_up(self.seconds);
    }

    pub fn decrement_seconds(&mut self) {
        self.seconds = wrap_down(self.seconds);
    }

    /// True when both values share the same minutes field.
    pub fn same_minute(&self, other: &ClockTime) -> bool {
        self.minutes == other.minutes
    }

    /// Display digits in scan order: minute tens, minute units,
    /// second tens, second units.
    pub fn digits(&self) -> [u8; 4] {
        [
            self.minutes / 10,
            self.minutes % 10,
            self.seconds / 10,
            self.seconds % 10,
        ]
    }
}

fn wrap_up(value: u8) -> u8 {
    if value >= 59 {
        0
    } else {
        value + 1
    }
}

fn wrap_down(value: u8) -> u8 {
    if value == 0 {
        59
    } else {
        value - 1
    }
}

/// Wall clock driven by the loop's millisecond timestamp.
#[derive(Clone, Debug)]
pub struct Clock {
    time: ClockTime,
    last_tick_at: Millis,
}

impl Clock {
    /// Start counting from `time`; the first second is measured from boot.
    pub const fn new(time: ClockTime) -> Self {
        Self {
            time,
            last_tick_at: 0,
        }
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    /// Advance one second if a full tick interval has passed.
    ///
    /// Returns `true` when the time changed. The next interval is measured
    /// from `now`, so a late poll delays every following tick by the same
    /// amount.
    pub fn poll(&mut self, now: Millis) -> bool {
        if now.saturating_sub(self.last_tick_at) < TICK_INTERVAL_MS {
            return false;
        }
        self.time.advance_second();
        self.last_tick_at = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range_fields() {
        assert_eq!(
            ClockTime::new(60, 0),
            Err(Error::FieldOutOfRange(TimeField::Minutes, 60))
        );
        assert_eq!(
            ClockTime::new(0, 75),
            Err(Error::FieldOutOfRange(TimeField::Seconds, 75))
        );
        assert!(ClockTime::new(59, 59).is_ok());
    }

    #[test]
    fn wrapping_constructor_reduces_fields() {
        let t = ClockTime::from_parts_wrapping(61, 120);
        assert_eq!((t.minutes(), t.seconds()), (1, 0));
    }

    #[test]
    fn advance_second_carries_and_wraps() {
        let mut t = ClockTime::from_parts_wrapping(14, 59);
        t.advance_second();
        assert_eq!((t.minutes(), t.seconds()), (15, 0));

        let mut t = ClockTime::from_parts_wrapping(59, 59);
        t.advance_second();
        assert_eq!((t.minutes(), t.seconds()), (0, 0));
    }

    #[test]
    fn field_adjustment_wraps_without_carry() {
        let mut t = ClockTime::from_parts_wrapping(59, 0);
        t.increment_minutes();
        assert_eq!(t.minutes(), 0);
        t.decrement_minutes();
        assert_eq!(t.minutes(), 59);

        t.decrement_seconds();
        assert_eq!((t.minutes(), t.seconds()), (59, 59));
        t.increment_seconds();
        assert_eq!((t.minutes(), t.seconds()), (59, 0));
    }

    #[test]
    fn digits_are_in_scan_order() {
        assert_eq!(ClockTime::from_parts_wrapping(14, 23).digits(), [1, 4, 2, 3]);
        assert_eq!(ClockTime::from_parts_wrapping(8, 5).digits(), [0, 8, 0, 5]);
    }

    #[test]
    fn clock_ticks_once_per_interval() {
        let mut clock = Clock::new(ClockTime::from_parts_wrapping(0, 0));
        assert!(!clock.poll(999));
        assert!(clock.poll(1000));
        assert!(!clock.poll(1500));
        assert!(clock.poll(2000));
        assert_eq!(clock.time().seconds(), 2);
    }

    #[test]
    fn late_poll_restarts_interval_from_now() {
        let mut clock = Clock::new(ClockTime::default());
        assert!(clock.poll(1400));
        assert!(!clock.poll(2399));
        assert!(clock.poll(2400));
    }

    #[test]
    fn sixty_ticks_advance_one_minute() {
        let mut clock = Clock::new(ClockTime::from_parts_wrapping(7, 0));
        for i in 1..=60u64 {
            assert!(clock.poll(i * 1000));
        }
        assert_eq!(clock.time(), ClockTime::from_parts_wrapping(8, 0));
    }
}
