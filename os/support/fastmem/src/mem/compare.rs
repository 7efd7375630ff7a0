/// Compares `n` bytes of `a` and `b` as unsigned values.
///
/// Returns the difference `a[i] - b[i]` at the first mismatching index, or zero
/// if the regions are equal (always zero for `n == 0`). The scan stops at the
/// first mismatch and never reads past it.
///
/// # Safety
/// `[a, a + n)` and `[b, b + n)` must be valid for reads, except that bytes
/// after the first mismatch are never touched.
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[must_use]
pub unsafe fn compare(a: *const u8, b: *const u8, n: usize) -> i32 {
    for offset in 0..n {
        let (left, right) = unsafe { (a.add(offset).read(), b.add(offset).read()) };
        if left != right {
            return i32::from(left) - i32::from(right);
        }
    }
    0
}

/// Equality-only comparison: zero if the regions are equal, non-zero otherwise.
///
/// # Safety
/// Same contract as [`compare`].
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[must_use]
pub unsafe fn equal(a: *const u8, b: *const u8, n: usize) -> i32 {
    unsafe { compare(a, b, n) }
}
