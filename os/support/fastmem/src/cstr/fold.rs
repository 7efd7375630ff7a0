/// ASCII case-folding table: `A`-`Z` map to `a`-`z`, every other byte to itself.
///
/// Bytes `0x80..=0xFF` are passed through unchanged; there is no locale or
/// Unicode folding.
pub static FOLD_TABLE: [u8; 256] = build_fold_table();

const fn build_fold_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < table.len() {
        #[allow(clippy::cast_possible_truncation)]
        let byte = i as u8;
        table[i] = byte.to_ascii_lowercase();
        i += 1;
    }
    table
}

#[inline]
#[must_use]
pub(crate) fn fold(byte: u8) -> u8 {
    FOLD_TABLE[usize::from(byte)]
}
