//! embkit: small embedded-systems utilities for teaching.
//!
//! This is the facade crate that re-exports the three independent utility
//! groups. Each works on caller-supplied buffers and holds no state.
//!
//! # Quick start
//!
//! ```rust
//! use embkit::prelude::*;
//!
//! // Radix conversion.
//! let mut text = [0u8; MAX_ASCII_LEN];
//! let written = integer_to_ascii(-42, &mut text, 10).unwrap();
//! assert_eq!(&text[..written], b"-42\0");
//! assert_eq!(ascii_to_integer(&text, (written - 1) as u8, 10), Ok(-42));
//!
//! // Overlap-safe move.
//! let mut buf = [1, 2, 3, 4, 5, 0, 0];
//! assert_eq!(move_within(&mut buf, 0, 2, 5).unwrap(), &[1, 2, 3, 4, 5]);
//!
//! // Statistics (the median sorts the sample in place).
//! let mut sample = [34, 201, 190, 154, 8];
//! let summary = StatsSummary::compute(&mut sample).unwrap();
//! assert_eq!(summary.median, 154);
//! assert_eq!(sample, [201, 190, 154, 34, 8]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`convert`] | `embkit-convert` | Integer ↔ ASCII in bases 2–16 |
//! | [`mem`] | `embkit-mem` | Byte move/copy/set/zero/reverse, word blocks |
//! | [`stats`] | `embkit-stats` | Descending sort, min/max/mean/median |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Integer ↔ ASCII radix conversion (`embkit-convert`).
pub use embkit_convert as convert;

/// Byte-buffer primitives and word blocks (`embkit-mem`).
pub use embkit_mem as mem;

/// Sample sorting and statistics (`embkit-stats`).
pub use embkit_stats as stats;

/// Common imports for typical embkit usage.
///
/// ```rust
/// use embkit::prelude::*;
/// ```
pub mod prelude {
    // Converter
    pub use embkit_convert::{ascii_to_integer, integer_to_ascii, AsciiBuf, MAX_ASCII_LEN};

    // Memory
    pub use embkit_mem::{
        allocate_words, copy, copy_within, move_within, release_words, reverse, set, zero,
        WordBlock,
    };

    // Statistics
    pub use embkit_stats::{
        find_maximum, find_mean, find_median, find_median_of_copy, find_minimum,
        sort_descending, SampleDisplay, StatsSummary,
    };

    // Errors
    pub use embkit_convert::ConvertError;
    pub use embkit_mem::MemoryError;
    pub use embkit_stats::StatsError;
}
