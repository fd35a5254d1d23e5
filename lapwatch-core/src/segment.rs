//! 7-segment encoding for the four-digit display

use crate::time::ElapsedTime;

/// Segment patterns for digits 0-9 (bit 0 = segment a ... bit 6 = segment g)
pub static DIGIT_SEGMENTS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Colon segment, wired to bit 7 of the second digit
pub const COLON_BIT: u8 = 0x80;

/// Index of the digit byte that carries the colon
pub const COLON_DIGIT: usize = 1;

/// Number of digits on the display
pub const DIGIT_COUNT: usize = 4;

/// Segment pattern for a single decimal digit (0-9)
pub fn encode_digit(digit: u8) -> u8 {
    debug_assert!(digit < 10, "not a decimal digit: {}", digit);
    DIGIT_SEGMENTS[digit as usize]
}

/// The four segment bytes sent to the display, left to right
///
/// Transient: built fresh for every refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitFrame(pub [u8; DIGIT_COUNT]);

impl DigitFrame {
    /// Encode minutes, seconds and colon into segment bytes
    pub fn new(minutes: u8, seconds: u8, colon: bool) -> Self {
        let mut bytes = ElapsedTime::new(minutes, seconds).digits().map(encode_digit);
        if colon {
            bytes[COLON_DIGIT] |= COLON_BIT;
        }
        Self(bytes)
    }

    /// Segment bytes in transmit order
    pub fn bytes(&self) -> &[u8; DIGIT_COUNT] {
        &self.0
    }
}
