//! Statistics error types.

use std::error::Error;
use std::fmt;

/// Errors from sample aggregates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsError {
    /// An aggregate was requested over a sample with no values.
    EmptySample,
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySample => write!(f, "sample must contain at least one value"),
        }
    }
}

impl Error for StatsError {}
