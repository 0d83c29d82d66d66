//! Byte-buffer primitives: move, copy, set, zero and reverse.
//!
//! Every function works on a slice with a known length and returns the
//! region it wrote so calls can be chained. Offsets are validated before
//! anything is written, so a rejected call leaves the buffer untouched.

use crate::error::MemoryError;

fn check_range(offset: usize, len: usize, buffer_len: usize) -> Result<(), MemoryError> {
    match offset.checked_add(len) {
        Some(end) if end <= buffer_len => Ok(()),
        _ => Err(MemoryError::OutOfBounds {
            offset,
            len,
            buffer_len,
        }),
    }
}

/// Copy `length` bytes from `buf[src..]` to `buf[dst..]`, correct even
/// when the two ranges overlap.
///
/// When `dst` lies strictly inside `src..src + length` the copy runs from
/// the highest offset down, otherwise from offset 0 up. `src == dst` and
/// `length == 0` are no-ops.
///
/// Returns the destination view `buf[dst..dst + length]`.
///
/// # Errors
///
/// [`MemoryError::OutOfBounds`] if either range does not fit in `buf`.
///
/// # Examples
///
/// ```
/// use embkit_mem::move_within;
///
/// let mut buf = [1, 2, 3, 4, 5, 0, 0];
/// let moved = move_within(&mut buf, 0, 2, 5).unwrap();
/// assert_eq!(moved, &[1, 2, 3, 4, 5]);
/// assert_eq!(buf, [1, 2, 1, 2, 3, 4, 5]);
/// ```
pub fn move_within(
    buf: &mut [u8],
    src: usize,
    dst: usize,
    length: usize,
) -> Result<&mut [u8], MemoryError> {
    check_range(src, length, buf.len())?;
    check_range(dst, length, buf.len())?;

    if src != dst && length != 0 {
        if dst > src && dst < src + length {
            for i in (0..length).rev() {
                buf[dst + i] = buf[src + i];
            }
        } else {
            for i in 0..length {
                buf[dst + i] = buf[src + i];
            }
        }
    }
    Ok(&mut buf[dst..dst + length])
}

/// Forward byte-by-byte copy of all of `src` into the front of `dst`.
///
/// Returns the written view `dst[..src.len()]`.
///
/// # Errors
///
/// [`MemoryError::LengthMismatch`] if `dst` is shorter than `src`.
pub fn copy<'a>(src: &[u8], dst: &'a mut [u8]) -> Result<&'a mut [u8], MemoryError> {
    if dst.len() < src.len() {
        return Err(MemoryError::LengthMismatch {
            src_len: src.len(),
            dst_len: dst.len(),
        });
    }
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = s;
    }
    Ok(&mut dst[..src.len()])
}

/// Forward copy of `length` bytes between two disjoint ranges of `buf`.
///
/// Unlike [`move_within`], this never reverses direction, so overlapping
/// ranges are refused. `src == dst` is a no-op.
///
/// # Errors
///
/// - [`MemoryError::OutOfBounds`] if either range does not fit in `buf`.
/// - [`MemoryError::Overlap`] if the ranges intersect.
pub fn copy_within(
    buf: &mut [u8],
    src: usize,
    dst: usize,
    length: usize,
) -> Result<&mut [u8], MemoryError> {
    check_range(src, length, buf.len())?;
    check_range(dst, length, buf.len())?;

    if src != dst && length != 0 {
        if src < dst + length && dst < src + length {
            return Err(MemoryError::Overlap {
                src,
                dst,
                len: length,
            });
        }
        for i in 0..length {
            buf[dst + i] = buf[src + i];
        }
    }
    Ok(&mut buf[dst..dst + length])
}

/// Write `value` into every byte of `buf`.
pub fn set(buf: &mut [u8], value: u8) -> &mut [u8] {
    buf.fill(value);
    buf
}

/// Write zero into every byte of `buf`.
pub fn zero(buf: &mut [u8]) -> &mut [u8] {
    set(buf, 0)
}

/// Reverse `buf` in place by swapping from both ends towards the middle.
pub fn reverse(buf: &mut [u8]) -> &mut [u8] {
    let mut start = 0;
    let mut end = buf.len().saturating_sub(1);
    while start < end {
        buf.swap(start, end);
        start += 1;
        end -= 1;
    }
    buf
}
