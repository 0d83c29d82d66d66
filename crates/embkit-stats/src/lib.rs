//! Byte-sample statistics for embkit.
//!
//! A sample is a caller-owned `&mut [u8]`. The crate sorts it in place
//! into descending order and derives minimum, maximum, truncated mean and
//! median from it.
//!
//! # Side effects
//!
//! [`find_median`] and [`StatsSummary::compute`] sort the caller's sample
//! as part of answering; both take `&mut [u8]` to make that visible.
//! [`find_median_of_copy`] leaves the input alone.
//!
//! # Stack usage
//!
//! [`sort_descending`] is iterative. Its work stack is bounded by
//! `log2(len)` entries regardless of input order; see [`sort`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod config;
pub mod error;
pub mod sort;
pub mod summary;

pub use aggregate::{find_maximum, find_mean, find_median, find_median_of_copy, find_minimum};
pub use config::SortConfig;
pub use error::StatsError;
pub use sort::{sort_descending, sort_descending_with};
pub use summary::{SampleDisplay, StatsSummary};
