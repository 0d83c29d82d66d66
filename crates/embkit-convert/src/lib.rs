//! Integer ↔ ASCII radix conversion for embkit.
//!
//! Renders signed 32-bit integers as NUL-terminated text in bases 2–16 and
//! parses counted character runs back. Both directions work on
//! caller-supplied buffers with explicit lengths and never allocate.
//!
//! ```
//! use embkit_convert::{ascii_to_integer, AsciiBuf};
//!
//! let text = AsciiBuf::format(-42, 10).unwrap();
//! assert_eq!(text.as_bytes_with_nul(), b"-42\0");
//! assert_eq!(ascii_to_integer(text.as_bytes(), text.digit_count(), 10), Ok(-42));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod radix;

pub use error::ConvertError;
pub use radix::{
    ascii_to_integer, integer_to_ascii, AsciiBuf, MAX_ASCII_LEN, MAX_BASE, MIN_BASE,
};
