//! # Machine word helpers
//!
//! The fast paths move and inspect memory one [`Word`] at a time. Everything
//! here is derived from the width of [`Word`] so the same code serves 32-bit
//! and 64-bit targets.

/// The natural fast-access unit of the target.
pub(crate) type Word = usize;

/// Width of a [`Word`] in bytes (a power of two).
pub(crate) const WORD_SIZE: usize = size_of::<Word>();

/// Low bits selecting the byte offset within a [`Word`].
pub(crate) const WORD_MASK: usize = WORD_SIZE - 1;

/// Minimum length at which probing for a shared alignment pays off.
pub const WORD_COPY_THRESHOLD: usize = 16;

const _: () = assert!(WORD_SIZE.is_power_of_two(), "word size must be a power of two");
const _: () = assert!(
    WORD_COPY_THRESHOLD >= WORD_SIZE,
    "threshold must cover the head alignment"
);

/// `0x01` repeated in every byte of a [`Word`].
const LOW_BITS: Word = Word::MAX / 0xFF;

/// `0x80` repeated in every byte of a [`Word`].
const HIGH_BITS: Word = LOW_BITS << 7;

/// Offset of `addr` within its word.
#[inline]
#[must_use]
pub(crate) const fn residue(addr: usize) -> usize {
    addr & WORD_MASK
}

/// Number of bytes from `addr` up to the next word boundary (zero if aligned).
#[inline]
#[must_use]
pub(crate) const fn head_len(addr: usize) -> usize {
    addr.wrapping_neg() & WORD_MASK
}

#[inline]
#[must_use]
pub(crate) fn is_word_aligned(ptr: *const u8) -> bool {
    residue(ptr.addr()) == 0
}

/// Whether two addresses can be brought onto a word boundary together.
#[inline]
#[must_use]
pub(crate) fn same_residue(a: *const u8, b: *const u8) -> bool {
    residue(a.addr()) == residue(b.addr())
}

/// Reads the word at `p`.
///
/// # Safety
/// `p` must be word-aligned and valid for a [`WORD_SIZE`]-byte read.
#[inline(always)]
#[allow(clippy::inline_always, clippy::cast_ptr_alignment)]
pub(crate) unsafe fn load(p: *const u8) -> Word {
    debug_assert!(is_word_aligned(p), "unaligned word load");
    unsafe { p.cast::<Word>().read() }
}

/// Writes `word` at `p`.
///
/// # Safety
/// `p` must be word-aligned and valid for a [`WORD_SIZE`]-byte write.
#[inline(always)]
#[allow(clippy::inline_always, clippy::cast_ptr_alignment)]
pub(crate) unsafe fn store(p: *mut u8, word: Word) {
    debug_assert!(is_word_aligned(p), "unaligned word store");
    unsafe { p.cast::<Word>().write(word) };
}

/// Broadcast `byte` into every byte lane of a [`Word`].
#[inline]
#[must_use]
pub(crate) const fn splat(byte: u8) -> Word {
    LOW_BITS * byte as Word
}

/// Branchless test for a zero byte lane in `word`.
///
/// Subtracting one from every lane borrows into the high bit only for lanes
/// that were zero (or carried a borrow from a zero lane below). Masking with
/// `!word` discards lanes whose high bit was already set.
#[inline]
#[must_use]
pub(crate) const fn has_zero_byte(word: Word) -> bool {
    word.wrapping_sub(LOW_BITS) & !word & HIGH_BITS != 0
}

/// Branchless test for a lane equal to the byte broadcast in `pattern`.
#[inline]
#[must_use]
pub(crate) const fn has_byte(word: Word, pattern: Word) -> bool {
    has_zero_byte(word ^ pattern)
}
