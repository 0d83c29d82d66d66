//! Owned blocks of 32-bit words.
//!
//! [`WordBlock`] is the only storage this crate allocates. A block has a
//! single owner and is released exactly once: either by passing it to
//! [`release_words`] or by letting it drop. There is no way to touch a
//! block after release, or to release it twice.

use std::ops::{Deref, DerefMut};

use crate::config::WordConfig;
use crate::error::MemoryError;

/// A zero-initialised, fixed-size run of `u32` words.
///
/// Obtained from [`allocate_words`] or [`allocate_words_with`]. The block
/// never grows or shrinks after allocation.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct WordBlock {
    words: Box<[u32]>,
}

impl WordBlock {
    /// Number of words in the block.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether this is a zero-length block.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Size of the block in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u32>()
    }

    /// Shared view of the words.
    pub fn as_slice(&self) -> &[u32] {
        &self.words
    }

    /// Mutable view of the words.
    pub fn as_mut_slice(&mut self) -> &mut [u32] {
        &mut self.words
    }
}

impl Deref for WordBlock {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.words
    }
}

impl DerefMut for WordBlock {
    fn deref_mut(&mut self) -> &mut [u32] {
        &mut self.words
    }
}

/// Reserve `count` zeroed words under the default [`WordConfig`].
///
/// A `count` of zero yields an empty block that is valid to use and to
/// release.
///
/// # Errors
///
/// See [`allocate_words_with`].
///
/// # Examples
///
/// ```
/// use embkit_mem::{allocate_words, release_words};
///
/// let mut block = allocate_words(4).unwrap();
/// block[0] = 0xDEAD_BEEF;
/// assert_eq!(block.len(), 4);
/// release_words(block);
/// ```
pub fn allocate_words(count: usize) -> Result<WordBlock, MemoryError> {
    allocate_words_with(&WordConfig::default(), count)
}

/// Reserve `count` zeroed words, refusing requests above `config.max_words`.
///
/// Allocation failure is reported, never turned into an abort.
///
/// # Errors
///
/// - [`MemoryError::CapacityExceeded`] if `count > config.max_words`.
/// - [`MemoryError::AllocationFailed`] if the byte size overflows or the
///   allocator refuses the request.
pub fn allocate_words_with(config: &WordConfig, count: usize) -> Result<WordBlock, MemoryError> {
    if count > config.max_words {
        log::warn!(
            "word request of {count} exceeds cap of {} words",
            config.max_words
        );
        return Err(MemoryError::CapacityExceeded {
            requested_words: count,
            max_words: config.max_words,
        });
    }

    let mut words: Vec<u32> = Vec::new();
    if words.try_reserve_exact(count).is_err() {
        log::warn!("allocator refused {count} words");
        return Err(MemoryError::AllocationFailed {
            requested_words: count,
        });
    }
    words.resize(count, 0);

    log::debug!("allocated block of {count} words");
    Ok(WordBlock {
        words: words.into_boxed_slice(),
    })
}

/// Release a block obtained from [`allocate_words`].
///
/// Equivalent to dropping it; spelled out for call sites that want the
/// release to be visible.
pub fn release_words(block: WordBlock) {
    log::debug!("releasing block of {} words", block.len());
    drop(block);
}
