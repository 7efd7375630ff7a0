use crate::word::{WORD_COPY_THRESHOLD, WORD_SIZE, head_len, splat, store};

/// Sets `n` bytes starting at `dst` to `value` and returns `dst`.
///
/// Regions of at least [`WORD_COPY_THRESHOLD`] bytes are filled with
/// word-sized stores between a byte-wise head and tail.
///
/// # Safety
/// `[dst, dst + n)` must be valid for writes.
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
pub unsafe fn fill(dst: *mut u8, value: u8, n: usize) -> *mut u8 {
    let mut d = dst;
    let mut n = n;

    unsafe {
        if n >= WORD_COPY_THRESHOLD {
            let head = head_len(d.addr());
            fill_bytes(d, value, head);
            d = d.add(head);
            n -= head;

            let pattern = splat(value);
            let mut words = n / WORD_SIZE;
            while words > 0 {
                store(d, pattern);
                d = d.add(WORD_SIZE);
                words -= 1;
            }
            n %= WORD_SIZE;
        }

        fill_bytes(d, value, n);
    }
    dst
}

#[inline]
unsafe fn fill_bytes(mut dst: *mut u8, value: u8, mut n: usize) {
    while n > 0 {
        unsafe {
            dst.write(value);
            dst = dst.add(1);
        }
        n -= 1;
    }
}
