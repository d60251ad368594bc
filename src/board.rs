//! Output lines and the digital-write seam.
//!
//! The core never touches GPIO directly. Rendering and light updates go
//! through an [`OutputBank`], which the firmware implements over its
//! `embassy_nrf` outputs and the tests implement over a plain array.

/// Segment of a 7-segment digit, `a` (top) clockwise to `f`, then `g`
/// (middle).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Digit select line, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Digit {
    D1,
    D2,
    D3,
    D4,
}

impl Digit {
    pub const ALL: [Digit; 4] = [Digit::D1, Digit::D2, Digit::D3, Digit::D4];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Indicator light.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Light {
    /// Clock running normally.
    Green,
    /// Setting the alarm, or alarm ringing.
    Red,
    /// Alarm minute reached.
    Alarm,
}

impl Light {
    pub const ALL: [Light; 3] = [Light::Green, Light::Red, Light::Alarm];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Every digital output the clock drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputLine {
    Segment(Segment),
    /// Digit select, active low (common cathode).
    Digit(Digit),
    /// Decimal point, wired as the colon next to digit 2.
    DecimalPoint,
    Light(Light),
}

/// Sink for digital writes.
pub trait OutputBank {
    /// Drive `line` high (`true`) or low (`false`).
    fn set(&mut self, line: OutputLine, high: bool);
}
