//! Sort tuning parameters.

/// Configuration for [`sort_descending_with`](crate::sort::sort_descending_with).
#[derive(Clone, Debug)]
pub struct SortConfig {
    /// Subranges of at most this many values skip partitioning and are
    /// finished with an insertion pass.
    ///
    /// Default: 8. A value of 0 or 1 partitions all the way down.
    pub insertion_threshold: usize,
}

impl SortConfig {
    /// Default insertion threshold.
    pub const DEFAULT_INSERTION_THRESHOLD: usize = 8;

    /// Create a config with the given insertion threshold.
    pub fn new(insertion_threshold: usize) -> Self {
        Self {
            insertion_threshold,
        }
    }

    /// Pure partition-exchange, no insertion pass.
    pub fn partition_only() -> Self {
        Self::new(0)
    }
}

impl Default for SortConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INSERTION_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_threshold() {
        assert_eq!(SortConfig::default().insertion_threshold, 8);
        assert_eq!(SortConfig::partition_only().insertion_threshold, 0);
    }
}
