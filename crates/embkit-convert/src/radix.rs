//! Integer ↔ ASCII transcoding in bases 2 through 16.
//!
//! [`integer_to_ascii`] renders into a caller-provided buffer and writes a
//! trailing NUL; [`ascii_to_integer`] parses a counted run of characters.
//! Neither allocates.
//!
//! Negative values only get a `-` sign in base 10. In every other base the
//! 32-bit two's-complement pattern is rendered as an unsigned magnitude, so
//! `-1` in base 16 is `FFFFFFFF`. Parsing accumulates with wrapping
//! arithmetic, which makes those renderings round-trip back to the same
//! negative value.

use std::fmt;

use crate::error::ConvertError;

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;

/// Largest supported base.
pub const MAX_BASE: u32 = 16;

/// Worst-case rendered length: sign, 32 binary digits and the terminator.
pub const MAX_ASCII_LEN: usize = 33;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

fn check_base(base: u32) -> Result<(), ConvertError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(ConvertError::InvalidBase { base })
    }
}

/// Value of a hexadecimal digit in either case, or `None`.
fn digit_value(byte: u8) -> Option<u32> {
    match byte {
        b'0'..=b'9' => Some(u32::from(byte - b'0')),
        b'A'..=b'F' => Some(u32::from(byte - b'A') + 10),
        b'a'..=b'f' => Some(u32::from(byte - b'a') + 10),
        _ => None,
    }
}

/// Render `value` in `base` into `buf` followed by a NUL terminator.
///
/// Returns the number of bytes written, terminator included: `0` yields
/// `"0\0"` and returns 2, `-42` in base 10 yields `"-42\0"` and returns 4.
/// Digits above 9 are uppercase.
///
/// A buffer of [`MAX_ASCII_LEN`] bytes is always large enough. Nothing is
/// written when an error is returned.
///
/// # Errors
///
/// - [`ConvertError::InvalidBase`] if `base` is outside 2..=16.
/// - [`ConvertError::BufferTooSmall`] if `buf` cannot hold the text and
///   terminator.
///
/// # Examples
///
/// ```
/// use embkit_convert::{integer_to_ascii, MAX_ASCII_LEN};
///
/// let mut buf = [0u8; MAX_ASCII_LEN];
/// let written = integer_to_ascii(255, &mut buf, 16).unwrap();
/// assert_eq!(&buf[..written], b"FF\0");
/// ```
pub fn integer_to_ascii(value: i32, buf: &mut [u8], base: u32) -> Result<usize, ConvertError> {
    check_base(base)?;

    let negative = value < 0 && base == 10;
    let mut magnitude = if negative {
        value.unsigned_abs()
    } else {
        // Two's-complement reinterpretation for non-decimal negatives.
        value as u32
    };

    // Least-significant digit first; reversed on the way out.
    let mut scratch = [0u8; MAX_ASCII_LEN];
    let mut count = 0;
    if magnitude == 0 {
        scratch[0] = b'0';
        count = 1;
    }
    while magnitude != 0 {
        scratch[count] = DIGITS[(magnitude % base) as usize];
        count += 1;
        magnitude /= base;
    }
    if negative {
        scratch[count] = b'-';
        count += 1;
    }

    let required = count + 1;
    if buf.len() < required {
        return Err(ConvertError::BufferTooSmall {
            required,
            available: buf.len(),
        });
    }

    for (out, &ch) in buf.iter_mut().zip(scratch[..count].iter().rev()) {
        *out = ch;
    }
    buf[count] = 0;
    Ok(required)
}

/// Parse the first `digit_count` characters of `text` as an integer in
/// `base`.
///
/// A leading `-` counts towards `digit_count` and negates the result.
/// Both upper- and lowercase hex letters are accepted. Accumulation wraps
/// on overflow instead of failing.
///
/// # Errors
///
/// - [`ConvertError::InvalidBase`] if `base` is outside 2..=16.
/// - [`ConvertError::Truncated`] if `digit_count` exceeds `text.len()`.
/// - [`ConvertError::Empty`] if there are no digits after the optional sign.
/// - [`ConvertError::InvalidDigit`] for a non-hex character.
/// - [`ConvertError::DigitOutOfRange`] for a hex digit `>= base`.
///
/// # Examples
///
/// ```
/// use embkit_convert::ascii_to_integer;
///
/// assert_eq!(ascii_to_integer(b"-42", 3, 10), Ok(-42));
/// assert_eq!(ascii_to_integer(b"ff", 2, 16), Ok(255));
/// assert!(ascii_to_integer(b"12", 2, 2).is_err());
/// ```
pub fn ascii_to_integer(text: &[u8], digit_count: u8, base: u32) -> Result<i32, ConvertError> {
    parse(text, digit_count, base).inspect_err(|err| {
        log::debug!("rejected {digit_count}-character base-{base} input: {err}");
    })
}

fn parse(text: &[u8], digit_count: u8, base: u32) -> Result<i32, ConvertError> {
    check_base(base)?;

    let count = usize::from(digit_count);
    if count > text.len() {
        return Err(ConvertError::Truncated {
            digit_count,
            available: text.len(),
        });
    }

    let field = &text[..count];
    let (negative, digits, offset) = match field.split_first() {
        Some((b'-', rest)) => (true, rest, 1),
        _ => (false, field, 0),
    };
    if digits.is_empty() {
        return Err(ConvertError::Empty);
    }

    let mut result: i32 = 0;
    for (i, &byte) in digits.iter().enumerate() {
        let position = offset + i;
        let digit = digit_value(byte).ok_or(ConvertError::InvalidDigit { byte, position })?;
        if digit >= base {
            return Err(ConvertError::DigitOutOfRange {
                digit,
                base,
                position,
            });
        }
        // Both operands are < 16, so the casts are exact.
        result = result
            .wrapping_mul(base as i32)
            .wrapping_add(digit as i32);
    }

    Ok(if negative {
        result.wrapping_neg()
    } else {
        result
    })
}

/// A fixed [`MAX_ASCII_LEN`]-byte rendering buffer.
///
/// Convenience for callers that do not want to size and manage their own
/// output buffer. The stored text always carries its NUL terminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AsciiBuf {
    bytes: [u8; MAX_ASCII_LEN],
    /// Rendered characters, terminator excluded.
    len: usize,
}

impl AsciiBuf {
    /// Render `value` in `base`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidBase`] if `base` is outside 2..=16.
    pub fn format(value: i32, base: u32) -> Result<Self, ConvertError> {
        let mut bytes = [0u8; MAX_ASCII_LEN];
        let written = integer_to_ascii(value, &mut bytes, base)?;
        Ok(Self {
            bytes,
            len: written - 1,
        })
    }

    /// Rendered characters without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Rendered characters followed by the NUL terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes[..=self.len]
    }

    /// Number of rendered characters, terminator excluded.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: every value renders at least one digit.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Character count in the form [`ascii_to_integer`] expects.
    pub fn digit_count(&self) -> u8 {
        // len <= 32
        self.len as u8
    }
}

impl fmt::Display for AsciiBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = std::str::from_utf8(self.as_bytes()).map_err(|_| fmt::Error)?;
        f.pad(text)
    }
}
