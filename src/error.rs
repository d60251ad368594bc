//! Unified error type for alarmclock.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! The polling path never fails; errors only come from constructing
//! values out of untrusted numbers.

/// Top-level error type used across the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A minutes or seconds field was outside 0..=59.
    FieldOutOfRange(TimeField, u8),

    /// A segment pattern was requested for a value that is not a single
    /// decimal digit.
    DigitOutOfRange(u8),
}

/// Which half of a `MM:SS` value an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeField {
    Minutes,
    Seconds,
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, Error>;
