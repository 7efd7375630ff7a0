use super::length::{bounded_length, length};
use crate::mem;

/// Copies the sequence at `src`, terminator included, to `dst`; returns `dst`.
///
/// # Safety
/// - `src` must be zero-terminated, and the aligned word containing its
///   terminator must be readable in full (see [`length`]).
/// - `dst` must be valid for `length(src) + 1` bytes of writes and must not
///   overlap the source sequence.
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
pub unsafe fn copy(dst: *mut u8, src: *const u8) -> *mut u8 {
    unsafe {
        let len = length(src);
        mem::copy(dst, src, len + 1);
    }
    dst
}

/// Copies at most `n` bytes of the sequence at `src` into `dst`; returns `dst`.
///
/// If the sequence is shorter than `n`, the rest of `dst[..n]` is zero-filled.
/// If it is `n` bytes or longer, exactly `n` bytes are copied and **no
/// terminator is written**: `dst` is then not a valid sequence on its own.
/// Callers that need termination must reserve and write the last byte
/// themselves.
///
/// # Safety
/// - `src` must be readable up to its terminator or `n` bytes, whichever is first.
/// - `dst` must be valid for `n` bytes of writes and must not overlap `src`.
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
pub unsafe fn copy_padded(dst: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    unsafe {
        let len = bounded_length(src, n);
        mem::copy(dst, src, len);
        mem::fill(dst.add(len), 0, n - len);
    }
    dst
}

/// Appends the sequence at `src` to the sequence at `dst`; returns `dst`.
///
/// # Safety
/// - Both `dst` and `src` must be zero-terminated, and for each the aligned
///   word containing the terminator must be readable in full (see [`length`]).
/// - `dst` must have room for `length(dst) + length(src) + 1` bytes; this is
///   not checked.
/// - The sequences must not overlap.
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
pub unsafe fn concat(dst: *mut u8, src: *const u8) -> *mut u8 {
    unsafe {
        let end = dst.add(length(dst));
        copy(end, src);
    }
    dst
}
