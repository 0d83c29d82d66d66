//! Byte-buffer primitives and owned word blocks for embkit.
//!
//! # Byte operations
//!
//! [`move_within`], [`copy`], [`copy_within`], [`set`], [`zero`] and
//! [`reverse`] operate on caller-owned slices and never allocate.
//! `move_within` picks its copy direction so overlapping ranges come out
//! as if copied through a temporary; `copy_within` refuses overlap.
//!
//! # Word blocks
//!
//! [`allocate_words`] returns a [`WordBlock`] owned by the caller. It is
//! released by [`release_words`] or on drop, so a forgotten or doubled
//! release cannot happen. Allocation failure comes back as
//! [`MemoryError`], not a process abort.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bytes;
pub mod config;
pub mod error;
pub mod words;

pub use bytes::{copy, copy_within, move_within, reverse, set, zero};
pub use config::WordConfig;
pub use error::MemoryError;
pub use words::{allocate_words, allocate_words_with, release_words, WordBlock};
