//! Memory-operation error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during byte moves or word allocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MemoryError {
    /// A source or destination range does not fit inside the buffer.
    OutOfBounds {
        /// Start offset of the offending range.
        offset: usize,
        /// Length of the offending range.
        len: usize,
        /// Length of the buffer it was applied to.
        buffer_len: usize,
    },
    /// The destination slice is shorter than the source slice.
    LengthMismatch {
        /// Bytes to copy.
        src_len: usize,
        /// Bytes available at the destination.
        dst_len: usize,
    },
    /// A forward-only copy was asked to work on overlapping ranges.
    Overlap {
        /// Source offset.
        src: usize,
        /// Destination offset.
        dst: usize,
        /// Number of bytes.
        len: usize,
    },
    /// The request exceeds the configured word cap.
    CapacityExceeded {
        /// Number of words requested.
        requested_words: usize,
        /// Configured maximum.
        max_words: usize,
    },
    /// The allocator could not satisfy the request.
    AllocationFailed {
        /// Number of words requested.
        requested_words: usize,
    },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds {
                offset,
                len,
                buffer_len,
            } => {
                write!(
                    f,
                    "range {offset}..{offset}+{len} out of bounds for buffer of {buffer_len} bytes"
                )
            }
            Self::LengthMismatch { src_len, dst_len } => {
                write!(
                    f,
                    "destination holds {dst_len} bytes, source has {src_len}"
                )
            }
            Self::Overlap { src, dst, len } => {
                write!(
                    f,
                    "forward copy of {len} bytes from {src} to {dst} overlaps itself"
                )
            }
            Self::CapacityExceeded {
                requested_words,
                max_words,
            } => {
                write!(
                    f,
                    "word capacity exceeded: requested {requested_words} words, max {max_words}"
                )
            }
            Self::AllocationFailed { requested_words } => {
                write!(f, "allocation of {requested_words} words failed")
            }
        }
    }
}

impl Error for MemoryError {}
