//! Word allocation limits.

/// Configuration for [`allocate_words_with`](crate::words::allocate_words_with).
///
/// Caps a single request so that a runaway count is reported as an error
/// instead of being handed to the system allocator.
#[derive(Clone, Debug)]
pub struct WordConfig {
    /// Largest block a single request may reserve, in 32-bit words.
    ///
    /// Default: 16_777_216 (64MB at 4 bytes per word).
    pub max_words: usize,
}

impl WordConfig {
    /// Default cap: 64MB / 4 bytes = 16M words.
    pub const DEFAULT_MAX_WORDS: usize = 16_777_216;

    /// Create a config with the given cap.
    pub fn new(max_words: usize) -> Self {
        Self { max_words }
    }

    /// The cap expressed in bytes, saturating at `usize::MAX`.
    pub fn max_bytes(&self) -> usize {
        self.max_words.saturating_mul(std::mem::size_of::<u32>())
    }
}

impl Default for WordConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_WORDS)
    }
}
