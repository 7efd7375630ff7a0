//! Forward and backward block copies.
//!
//! Both directions share one shape: byte-wise until the destination sits on a
//! word boundary, whole words while at least one word remains, then the
//! remaining bytes. The word loop only runs when source and destination have
//! the same offset within a word, so both sides are aligned together.

use crate::word::{WORD_COPY_THRESHOLD, WORD_SIZE, head_len, load, residue, same_residue, store};

/// Copies `n` bytes from `src` to `dst` and returns `dst`.
///
/// # Safety
/// - `[src, src + n)` must be valid for reads and `[dst, dst + n)` valid for writes.
/// - The regions must not overlap unless `dst == src`. Use [`copy_overlapping`]
///   otherwise.
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
pub unsafe fn copy(dst: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    // Compilers emit `memcpy(p, p, n)` for self-assignment; that case is benign.
    debug_assert!(
        n == 0 || dst.addr() == src.addr() || !ranges_overlap(dst.addr(), src.addr(), n),
        "copy called with overlapping regions"
    );
    unsafe { copy_forward(dst, src, n) };
    dst
}

/// Copies `n` bytes from `src` to `dst`, correct for any overlap, and returns `dst`.
///
/// When `dst` lands inside the tail of the source region the copy runs from
/// the highest address downwards; otherwise it runs forwards.
///
/// # Safety
/// `[src, src + n)` must be valid for reads and `[dst, dst + n)` valid for writes.
/// If the regions overlap, both pointers must derive from the same allocation.
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
pub unsafe fn copy_overlapping(dst: *mut u8, src: *const u8, n: usize) -> *mut u8 {
    if n == 0 || dst.cast_const() == src {
        return dst;
    }

    unsafe {
        if dst_in_src_tail(dst.addr(), src.addr(), n) {
            copy_backward(dst, src, n);
        } else {
            copy_forward(dst, src, n);
        }
    }
    dst
}

/// Whether `dst` lies strictly after `src` but before `src + n`.
#[inline]
#[must_use]
pub(crate) const fn dst_in_src_tail(dst: usize, src: usize, n: usize) -> bool {
    dst > src && dst - src < n
}

#[inline]
const fn ranges_overlap(a: usize, b: usize, n: usize) -> bool {
    if a <= b { b - a < n } else { a - b < n }
}

#[inline]
unsafe fn copy_forward(mut dst: *mut u8, mut src: *const u8, mut n: usize) {
    unsafe {
        if n >= WORD_COPY_THRESHOLD && same_residue(dst, src) {
            let head = head_len(dst.addr());
            copy_bytes_forward(dst, src, head);
            dst = dst.add(head);
            src = src.add(head);
            n -= head;

            let mut words = n / WORD_SIZE;
            while words > 0 {
                store(dst, load(src));
                dst = dst.add(WORD_SIZE);
                src = src.add(WORD_SIZE);
                words -= 1;
            }
            n %= WORD_SIZE;
        }

        copy_bytes_forward(dst, src, n);
    }
}

/// Copies downwards starting just below `dst + n` / `src + n`.
#[inline]
unsafe fn copy_backward(dst: *mut u8, src: *const u8, mut n: usize) {
    unsafe {
        let mut dst_end = dst.add(n);
        let mut src_end = src.add(n);

        if n >= WORD_COPY_THRESHOLD && same_residue(dst_end, src_end) {
            let tail = residue(dst_end.addr());
            copy_bytes_backward(dst_end, src_end, tail);
            dst_end = dst_end.sub(tail);
            src_end = src_end.sub(tail);
            n -= tail;

            let mut words = n / WORD_SIZE;
            while words > 0 {
                dst_end = dst_end.sub(WORD_SIZE);
                src_end = src_end.sub(WORD_SIZE);
                store(dst_end, load(src_end));
                words -= 1;
            }
            n %= WORD_SIZE;
        }

        copy_bytes_backward(dst_end, src_end, n);
    }
}

#[inline]
unsafe fn copy_bytes_forward(mut dst: *mut u8, mut src: *const u8, mut n: usize) {
    while n > 0 {
        unsafe {
            dst.write(src.read());
            dst = dst.add(1);
            src = src.add(1);
        }
        n -= 1;
    }
}

/// `dst_end` and `src_end` point one past the bytes to copy.
#[inline]
unsafe fn copy_bytes_backward(mut dst_end: *mut u8, mut src_end: *const u8, mut n: usize) {
    while n > 0 {
        unsafe {
            dst_end = dst_end.sub(1);
            src_end = src_end.sub(1);
            dst_end.write(src_end.read());
        }
        n -= 1;
    }
}
