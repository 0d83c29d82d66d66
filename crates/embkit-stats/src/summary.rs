//! Bundled statistics and their text rendering.
//!
//! Nothing here performs I/O; callers print the [`Display`](std::fmt::Display)
//! output wherever they like.

use std::fmt;

use crate::aggregate::{find_maximum, find_mean, find_minimum, median_of_sorted};
use crate::error::StatsError;
use crate::sort::sort_descending;

/// Minimum, maximum, mean and median of one sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatsSummary {
    /// Smallest value.
    pub minimum: u8,
    /// Largest value.
    pub maximum: u8,
    /// Truncated arithmetic mean.
    pub mean: u8,
    /// Median (truncated average of the middle pair for even lengths).
    pub median: u8,
}

impl StatsSummary {
    /// Compute all four statistics. Like [`find_median`](crate::find_median),
    /// this **leaves `sample` sorted descending**.
    ///
    /// # Errors
    ///
    /// [`StatsError::EmptySample`] if `sample` is empty.
    pub fn compute(sample: &mut [u8]) -> Result<Self, StatsError> {
        let minimum = find_minimum(sample)?;
        let maximum = find_maximum(sample)?;
        let mean = find_mean(sample)?;
        sort_descending(sample);
        Ok(Self {
            minimum,
            maximum,
            mean,
            median: median_of_sorted(sample),
        })
    }
}

impl fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "Minimum: {}", self.minimum)?;
        writeln!(f, "Maximum: {}", self.maximum)?;
        writeln!(f, "Mean: {}", self.mean)?;
        write!(f, "Median: {}", self.median)
    }
}

/// Renders a sample as `Array: v0 v1 ...`.
#[derive(Clone, Copy, Debug)]
pub struct SampleDisplay<'a>(pub &'a [u8]);

impl fmt::Display for SampleDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Array:")?;
        for v in self.0 {
            write!(f, " {v}")?;
        }
        Ok(())
    }
}
