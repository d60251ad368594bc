//! Multiplexed 4-digit 7-segment display with a colon.
//!
//! Only one position is lit at a time. The scan cursor moves every
//! [`SCAN_INTERVAL_MS`], fast enough that all five positions appear lit
//! together. A separate blink flag toggles every [`BLINK_INTERVAL_MS`] and
//! is used to flash the field being edited.
//!
//! ## Components
//!
//! - **Segments**: digit-to-pattern table
//! - **Render**: snapshot + scan position to pin levels

pub mod render;
pub mod segments;

use crate::board::Digit;
use crate::config::{BLINK_INTERVAL_MS, SCAN_INTERVAL_MS};
use crate::Millis;

pub use render::Frame;
pub use segments::Segments;

/// Position of the scan cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScanPosition {
    MinuteTens,
    MinuteUnits,
    SecondTens,
    SecondUnits,
    Colon,
}

impl ScanPosition {
    /// Scan order.
    pub const ALL: [ScanPosition; 5] = [
        ScanPosition::MinuteTens,
        ScanPosition::MinuteUnits,
        ScanPosition::SecondTens,
        ScanPosition::SecondUnits,
        ScanPosition::Colon,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Following position, wrapping after the colon.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Digit select for the four numeric positions.
    pub fn digit(self) -> Option<Digit> {
        Digit::ALL.get(self.index()).copied()
    }
}

/// Scan cursor and blink flag, each on its own timer.
#[derive(Clone, Debug)]
pub struct DisplayScan {
    position: ScanPosition,
    last_scan_at: Millis,
    blink_on: bool,
    last_blink_at: Millis,
}

impl DisplayScan {
    pub const fn new() -> Self {
        Self {
            position: ScanPosition::MinuteTens,
            last_scan_at: 0,
            blink_on: false,
            last_blink_at: 0,
        }
    }

    /// Toggle the blink flag if its interval elapsed. Returns `true` on toggle.
    pub fn poll_blink(&mut self, now: Millis) -> bool {
        if now.saturating_sub(self.last_blink_at) < BLINK_INTERVAL_MS {
            return false;
        }
        self.blink_on = !self.blink_on;
        self.last_blink_at = now;
        true
    }

    /// Advance the cursor if the scan interval elapsed.
    ///
    /// Returns the position to show for the coming interval.
    pub fn poll_scan(&mut self, now: Millis) -> Option<ScanPosition> {
        if now.saturating_sub(self.last_scan_at) < SCAN_INTERVAL_MS {
            return None;
        }
        let shown = self.position;
        self.position = shown.next();
        self.last_scan_at = now;
        Some(shown)
    }

    /// Position that will be shown next.
    pub fn position(&self) -> ScanPosition {
        self.position
    }

    pub fn blink_on(&self) -> bool {
        self.blink_on
    }
}

impl Default for DisplayScan {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_cycles_through_five_positions() {
        let mut scan = DisplayScan::new();
        let mut shown = [ScanPosition::Colon; 6];
        for (i, slot) in shown.iter_mut().enumerate() {
            *slot = scan.poll_scan(3 * (i as u64 + 1)).unwrap();
        }
        assert_eq!(&shown[..5], &ScanPosition::ALL);
        assert_eq!(shown[5], ScanPosition::MinuteTens);
    }

    #[test]
    fn scan_waits_for_interval() {
        let mut scan = DisplayScan::new();
        assert_eq!(scan.poll_scan(2), None);
        assert_eq!(scan.poll_scan(3), Some(ScanPosition::MinuteTens));
        assert_eq!(scan.poll_scan(5), None);
        assert_eq!(scan.position(), ScanPosition::MinuteUnits);
    }

    #[test]
    fn blink_toggles_every_interval() {
        let mut scan = DisplayScan::new();
        assert!(!scan.blink_on());
        assert!(!scan.poll_blink(499));
        assert!(scan.poll_blink(500));
        assert!(scan.blink_on());
        assert!(!scan.poll_blink(999));
        assert!(scan.poll_blink(1000));
        assert!(!scan.blink_on());
    }

    #[test]
    fn blink_and_scan_are_independent() {
        let mut scan = DisplayScan::new();
        for t in 0..=600u64 {
            scan.poll_scan(t);
        }
        assert!(!scan.blink_on());
        assert!(scan.poll_blink(600));
    }

    #[test]
    fn only_numeric_positions_have_digit_selects() {
        assert_eq!(ScanPosition::MinuteTens.digit(), Some(Digit::D1));
        assert_eq!(ScanPosition::SecondUnits.digit(), Some(Digit::D4));
        assert_eq!(ScanPosition::Colon.digit(), None);
    }
}
