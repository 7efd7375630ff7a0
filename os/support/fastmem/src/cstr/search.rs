use super::length::length;
use crate::mem;
use crate::word::{WORD_SIZE, has_byte, has_zero_byte, is_word_aligned, load, splat};
use core::ptr::NonNull;

/// Finds the first `byte` in the zero-terminated sequence at `s`.
///
/// Searching for `0` yields the terminator's address, so `None` always means
/// the byte does not occur. After a byte-wise run up to the first word
/// boundary, each word is tested for the target and for the terminator with
/// the branchless lane check; only a word with a hit is rescanned byte by byte.
///
/// # Safety
/// - `s` must be zero-terminated.
/// - As for [`length`](super::length), the aligned word containing the
///   terminator (or the target, if it comes first) must be readable in full.
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[must_use]
pub unsafe fn find_byte(s: *const u8, byte: u8) -> Option<NonNull<u8>> {
    let mut p = s;
    unsafe {
        while !is_word_aligned(p) {
            match p.read() {
                b if b == byte => return NonNull::new(p.cast_mut()),
                0 => return None,
                _ => p = p.add(1),
            }
        }

        let pattern = splat(byte);
        loop {
            let word = load(p);
            if has_zero_byte(word) || has_byte(word, pattern) {
                break;
            }
            p = p.add(WORD_SIZE);
        }

        loop {
            match p.read() {
                b if b == byte => return NonNull::new(p.cast_mut()),
                0 => return None,
                _ => p = p.add(1),
            }
        }
    }
}

/// Finds the first occurrence of the sequence `needle` within `haystack`.
///
/// An empty needle matches at `haystack` itself. Candidates are located with
/// [`find_byte`] on the needle's first byte and confirmed with
/// [`mem::compare`] over the needle's length, which stops at the first
/// mismatch and therefore never runs past the haystack's terminator.
///
/// # Safety
/// - Both `haystack` and `needle` must be zero-terminated.
/// - For each of them, the aligned word containing the terminator must be
///   readable in full (see [`length`](super::length)).
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[must_use]
pub unsafe fn find(haystack: *const u8, needle: *const u8) -> Option<NonNull<u8>> {
    unsafe {
        let first = needle.read();
        if first == 0 {
            return NonNull::new(haystack.cast_mut());
        }

        let needle_len = length(needle);
        let mut from = haystack;
        while let Some(candidate) = find_byte(from, first) {
            let candidate = candidate.as_ptr().cast_const();
            if mem::compare(candidate, needle, needle_len) == 0 {
                return NonNull::new(candidate.cast_mut());
            }
            from = candidate.add(1);
        }
    }
    None
}
