//! 7-segment patterns for the decimal digits.
//!
//! Layout (one byte per digit, bit 7 unused):
//! ```text
//! Bit 6 = a, Bit 5 = b, Bit 4 = c, Bit 3 = d,
//! Bit 2 = e, Bit 1 = f, Bit 0 = g
//!
//!   aaa
//!  f   b
//!   ggg
//!  e   c
//!   ddd
//! ```

use crate::board::Segment;
use crate::error::{Error, Result};

/// Patterns for 0-9.
const DIGIT_PATTERNS: [u8; 10] = [
    0b111_1110, // 0
    0b011_0000, // 1
    0b110_1101, // 2
    0b111_1001, // 3
    0b011_0011, // 4
    0b101_1011, // 5
    0b101_1111, // 6
    0b111_0000, // 7
    0b111_1111, // 8
    0b111_1011, // 9
];

/// Lit segments of one digit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segments(u8);

impl Segments {
    /// All segments off.
    pub const BLANK: Segments = Segments(0);

    /// Pattern for a single decimal digit.
    pub fn for_digit(value: u8) -> Result<Self> {
        DIGIT_PATTERNS
            .get(usize::from(value))
            .map(|&bits| Segments(bits))
            .ok_or(Error::DigitOutOfRange(value))
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_lit(&self, segment: Segment) -> bool {
        (self.0 >> (6 - segment.index())) & 0x01 != 0
    }
}
