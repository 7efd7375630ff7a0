use crate::word::{WORD_SIZE, has_byte, is_word_aligned, load, splat};
use core::ptr::NonNull;

/// Finds the first `byte` within `[s, s + n)`.
///
/// Whole words are tested with the splat/XOR lane check once `s` is aligned;
/// no load ever reaches past `s + n`.
///
/// # Safety
/// `[s, s + n)` must be valid for reads.
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[must_use]
pub unsafe fn find_byte_in(s: *const u8, byte: u8, n: usize) -> Option<NonNull<u8>> {
    let mut p = s;
    let mut n = n;

    unsafe {
        while n > 0 && !is_word_aligned(p) {
            if p.read() == byte {
                return NonNull::new(p.cast_mut());
            }
            p = p.add(1);
            n -= 1;
        }

        let pattern = splat(byte);
        while n >= WORD_SIZE && !has_byte(load(p), pattern) {
            p = p.add(WORD_SIZE);
            n -= WORD_SIZE;
        }

        while n > 0 {
            if p.read() == byte {
                return NonNull::new(p.cast_mut());
            }
            p = p.add(1);
            n -= 1;
        }
    }
    None
}
