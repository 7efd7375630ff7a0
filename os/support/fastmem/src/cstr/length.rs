use crate::word::{WORD_SIZE, has_zero_byte, is_word_aligned, load};

/// Number of bytes before the first zero byte at `s`.
///
/// Once `s` is word-aligned the scan loads whole aligned words, so it touches
/// the bytes after the terminator up to the end of the terminator's word.
///
/// # Safety
/// - `s` must point to a zero-terminated sequence.
/// - The aligned word containing the terminator must be readable in full: the
///   allocation holding the sequence must extend to the end of that word.
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[must_use]
pub unsafe fn length(s: *const u8) -> usize {
    let mut p = s;
    unsafe {
        while !is_word_aligned(p) {
            if p.read() == 0 {
                return p.offset_from_unsigned(s);
            }
            p = p.add(1);
        }

        while !has_zero_byte(load(p)) {
            p = p.add(WORD_SIZE);
        }

        while p.read() != 0 {
            p = p.add(1);
        }
        p.offset_from_unsigned(s)
    }
}

/// Like [`length`], but never inspects more than `max` bytes.
///
/// Returns `max` if no terminator occurs in `[s, s + max)`.
///
/// # Safety
/// Every byte of `s` up to the terminator or `max`, whichever is first, must be
/// valid for reads.
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[must_use]
pub unsafe fn bounded_length(s: *const u8, max: usize) -> usize {
    let mut n = 0;
    while n < max && unsafe { s.add(n).read() } != 0 {
        n += 1;
    }
    n
}
