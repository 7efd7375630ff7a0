//! # Checked slice wrappers
//!
//! The raw primitives leave every precondition to the caller. The functions in
//! this module take slices instead, check the conditions the raw layer would
//! treat as undefined behavior, and report violations as a [`RegionError`].
//! Sequence functions treat a slice as a buffer holding a zero-terminated
//! sequence somewhere inside it.

use crate::{cstr, mem};
use core::cmp::Ordering;
use core::ptr::NonNull;
use thiserror::Error;

/// A precondition of the raw layer that a slice argument does not meet.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum RegionError {
    /// Two regions that must be equally long are not.
    #[error("region lengths differ: destination holds {dst_len} bytes, source {src_len}")]
    LengthMismatch { dst_len: usize, src_len: usize },
    /// The destination cannot hold the result, terminator included.
    #[error("destination too small: {needed} bytes needed, {available} available")]
    DestinationTooSmall { needed: usize, available: usize },
    /// The buffer contains no zero byte.
    #[error("no terminator within {capacity} bytes")]
    Unterminated { capacity: usize },
    /// An `offset + len` range reaches past the end of the buffer.
    #[error("range of {len} bytes at offset {offset} exceeds buffer of {capacity} bytes")]
    OutOfBounds {
        offset: usize,
        len: usize,
        capacity: usize,
    },
}

/// Sets every byte of `dst` to `value`.
pub fn fill(dst: &mut [u8], value: u8) {
    unsafe { mem::fill(dst.as_mut_ptr(), value, dst.len()) };
}

/// Copies `src` into `dst`; both must have the same length.
///
/// # Errors
/// [`RegionError::LengthMismatch`] if the lengths differ.
pub fn copy(dst: &mut [u8], src: &[u8]) -> Result<(), RegionError> {
    same_length(dst.len(), src.len())?;
    unsafe { mem::copy(dst.as_mut_ptr(), src.as_ptr(), src.len()) };
    Ok(())
}

/// Moves `len` bytes inside `buf` from offset `src` to offset `dst`.
///
/// The ranges may overlap.
///
/// # Errors
/// [`RegionError::OutOfBounds`] if either range leaves the buffer.
pub fn move_within(buf: &mut [u8], src: usize, dst: usize, len: usize) -> Result<(), RegionError> {
    in_bounds(buf.len(), src, len)?;
    in_bounds(buf.len(), dst, len)?;
    let base = buf.as_mut_ptr();
    unsafe { mem::copy_overlapping(base.add(dst), base.add(src), len) };
    Ok(())
}

/// Compares two equally long regions byte by byte.
///
/// # Errors
/// [`RegionError::LengthMismatch`] if the lengths differ.
pub fn compare(a: &[u8], b: &[u8]) -> Result<Ordering, RegionError> {
    same_length(a.len(), b.len())?;
    Ok(unsafe { mem::compare(a.as_ptr(), b.as_ptr(), a.len()) }.cmp(&0))
}

/// Position of the first `byte` in `haystack`.
#[must_use]
pub fn find_byte_in(haystack: &[u8], byte: u8) -> Option<usize> {
    let hit = unsafe { mem::find_byte_in(haystack.as_ptr(), byte, haystack.len()) };
    hit.map(|p| offset_of(haystack, p))
}

/// Length of the sequence stored in `buf`.
///
/// # Errors
/// [`RegionError::Unterminated`] if `buf` holds no zero byte.
pub fn sequence_len(buf: &[u8]) -> Result<usize, RegionError> {
    find_byte_in(buf, 0).ok_or(RegionError::Unterminated {
        capacity: buf.len(),
    })
}

/// Copies the sequence in `src`, terminator included, to the start of `dst`.
///
/// Returns the copied sequence length (without terminator).
///
/// # Errors
/// [`RegionError::Unterminated`] or [`RegionError::DestinationTooSmall`].
pub fn sequence_copy(dst: &mut [u8], src: &[u8]) -> Result<usize, RegionError> {
    let len = sequence_len(src)?;
    fits(len + 1, dst.len())?;
    unsafe { mem::copy(dst.as_mut_ptr(), src.as_ptr(), len + 1) };
    Ok(len)
}

/// Fixed-width copy: fills all of `dst` from the sequence in `src`.
///
/// Short sequences are zero-padded to `dst.len()`. A sequence of `dst.len()`
/// bytes or more is truncated and `dst` receives **no terminator**. Returns
/// whether `dst` ended up terminated.
///
/// # Errors
/// [`RegionError::Unterminated`] if `src` ends before either a zero byte or
/// `dst.len()` bytes.
pub fn sequence_copy_padded(dst: &mut [u8], src: &[u8]) -> Result<bool, RegionError> {
    let n = dst.len();
    let available = unsafe { cstr::bounded_length(src.as_ptr(), n.min(src.len())) };
    if available == src.len() && available < n {
        return Err(RegionError::Unterminated {
            capacity: src.len(),
        });
    }
    unsafe { cstr::copy_padded(dst.as_mut_ptr(), src.as_ptr(), n) };
    Ok(available < n)
}

/// Appends the sequence in `src` to the sequence in `dst`.
///
/// Returns the combined length (without terminator).
///
/// # Errors
/// [`RegionError::Unterminated`] or [`RegionError::DestinationTooSmall`].
pub fn sequence_concat(dst: &mut [u8], src: &[u8]) -> Result<usize, RegionError> {
    let head = sequence_len(dst)?;
    let tail = sequence_len(src)?;
    fits(head + tail + 1, dst.len())?;
    unsafe { mem::copy(dst.as_mut_ptr().add(head), src.as_ptr(), tail + 1) };
    Ok(head + tail)
}

/// Lexicographic order of the sequences in `a` and `b`.
///
/// # Errors
/// [`RegionError::Unterminated`] if either buffer lacks a terminator.
pub fn sequence_compare(a: &[u8], b: &[u8]) -> Result<Ordering, RegionError> {
    sequence_len(a)?;
    sequence_len(b)?;
    Ok(unsafe { cstr::compare(a.as_ptr(), b.as_ptr()) }.cmp(&0))
}

/// ASCII case-insensitive order of the sequences in `a` and `b`.
///
/// # Errors
/// [`RegionError::Unterminated`] if either buffer lacks a terminator.
pub fn sequence_compare_ignore_case(a: &[u8], b: &[u8]) -> Result<Ordering, RegionError> {
    sequence_len(a)?;
    sequence_len(b)?;
    Ok(unsafe { cstr::compare_ignore_case(a.as_ptr(), b.as_ptr()) }.cmp(&0))
}

/// Position of `byte` in the sequence in `buf`; `0` finds the terminator.
///
/// # Errors
/// [`RegionError::Unterminated`] if `buf` lacks a terminator.
pub fn sequence_find_byte(buf: &[u8], byte: u8) -> Result<Option<usize>, RegionError> {
    let len = sequence_len(buf)?;
    Ok(find_byte_in(&buf[..=len], byte))
}

/// Position of the sequence `needle` within the sequence `haystack`.
///
/// # Errors
/// [`RegionError::Unterminated`] if either buffer lacks a terminator.
pub fn sequence_find(haystack: &[u8], needle: &[u8]) -> Result<Option<usize>, RegionError> {
    let haystack = &haystack[..sequence_len(haystack)?];
    let needle = &needle[..sequence_len(needle)?];
    let Some((&first, _)) = needle.split_first() else {
        return Ok(Some(0));
    };

    let mut from = 0;
    while let Some(hit) = find_byte_in(&haystack[from..], first) {
        let at = from + hit;
        if haystack[at..].starts_with(needle) {
            return Ok(Some(at));
        }
        from = at + 1;
    }
    Ok(None)
}

const fn same_length(dst_len: usize, src_len: usize) -> Result<(), RegionError> {
    if dst_len == src_len {
        Ok(())
    } else {
        Err(RegionError::LengthMismatch { dst_len, src_len })
    }
}

const fn fits(needed: usize, available: usize) -> Result<(), RegionError> {
    if needed <= available {
        Ok(())
    } else {
        Err(RegionError::DestinationTooSmall { needed, available })
    }
}

const fn in_bounds(capacity: usize, offset: usize, len: usize) -> Result<(), RegionError> {
    match offset.checked_add(len) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(RegionError::OutOfBounds {
            offset,
            len,
            capacity,
        }),
    }
}

fn offset_of(buf: &[u8], hit: NonNull<u8>) -> usize {
    hit.as_ptr().addr() - buf.as_ptr().addr()
}
