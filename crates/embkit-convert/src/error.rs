//! Conversion error types.

use std::error::Error;
use std::fmt;

/// Errors from rendering or parsing radix text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConvertError {
    /// The base is outside `MIN_BASE..=MAX_BASE`.
    InvalidBase {
        /// The rejected base.
        base: u32,
    },
    /// The output buffer cannot hold the rendered text plus terminator.
    BufferTooSmall {
        /// Bytes needed, including the terminator.
        required: usize,
        /// Bytes available in the caller's buffer.
        available: usize,
    },
    /// There are no digits to parse (zero digit count, or a lone `-`).
    Empty,
    /// The digit count runs past the end of the input text.
    Truncated {
        /// Characters the caller asked to parse.
        digit_count: u8,
        /// Characters actually present.
        available: usize,
    },
    /// A character that is not a hexadecimal digit.
    InvalidDigit {
        /// The offending byte.
        byte: u8,
        /// Its position in the input text.
        position: usize,
    },
    /// A valid hexadecimal digit that is not legal in the requested base.
    DigitOutOfRange {
        /// The digit's value.
        digit: u32,
        /// The requested base.
        base: u32,
        /// Its position in the input text.
        position: usize,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase { base } => {
                write!(f, "base {base} is outside the supported range 2..=16")
            }
            Self::BufferTooSmall {
                required,
                available,
            } => {
                write!(
                    f,
                    "output buffer too small: need {required} bytes, have {available}"
                )
            }
            Self::Empty => write!(f, "no digits to parse"),
            Self::Truncated {
                digit_count,
                available,
            } => {
                write!(
                    f,
                    "digit count {digit_count} exceeds input length {available}"
                )
            }
            Self::InvalidDigit { byte, position } => {
                write!(f, "invalid digit {byte:#04x} at position {position}")
            }
            Self::DigitOutOfRange {
                digit,
                base,
                position,
            } => {
                write!(
                    f,
                    "digit {digit} at position {position} is not valid in base {base}"
                )
            }
        }
    }
}

impl Error for ConvertError {}
