use super::fold::fold;

/// Lexicographic comparison of two zero-terminated sequences.
///
/// Returns the unsigned difference of the bytes at the first position where
/// the sequences differ or either ends; zero only if both are identical up to
/// and including their terminators.
///
/// # Safety
/// Both sequences must be zero-terminated. Reads stop at the first difference.
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[must_use]
pub unsafe fn compare(a: *const u8, b: *const u8) -> i32 {
    unsafe { walk(a, b, usize::MAX, core::convert::identity) }
}

/// [`compare`] limited to the first `n` bytes; `n == 0` compares equal.
///
/// # Safety
/// Both sequences must be readable up to their terminator or `n` bytes.
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[must_use]
pub unsafe fn compare_bounded(a: *const u8, b: *const u8, n: usize) -> i32 {
    unsafe { walk(a, b, n, core::convert::identity) }
}

/// [`compare`] with both sides passed through [`FOLD_TABLE`](super::FOLD_TABLE).
///
/// # Safety
/// Same contract as [`compare`].
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[must_use]
pub unsafe fn compare_ignore_case(a: *const u8, b: *const u8) -> i32 {
    unsafe { walk(a, b, usize::MAX, fold) }
}

/// [`compare_ignore_case`] limited to the first `n` bytes.
///
/// # Safety
/// Same contract as [`compare_bounded`].
#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[must_use]
pub unsafe fn compare_ignore_case_bounded(a: *const u8, b: *const u8, n: usize) -> i32 {
    unsafe { walk(a, b, n, fold) }
}

/// Lock-step walk over at most `limit` bytes.
///
/// `map` must send only zero to zero, so the terminator test on the mapped
/// byte matches the raw one.
#[inline(always)]
#[allow(clippy::inline_always)]
unsafe fn walk(a: *const u8, b: *const u8, limit: usize, map: impl Fn(u8) -> u8) -> i32 {
    let mut offset = 0;
    while offset < limit {
        let (left, right) = unsafe { (map(a.add(offset).read()), map(b.add(offset).read())) };
        if left != right || left == 0 {
            return i32::from(left) - i32::from(right);
        }
        offset += 1;
    }
    0
}
