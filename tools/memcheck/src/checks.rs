//! Exhaustive sweeps of every primitive against slice-based references.

use fastmem::{cstr, mem};
use log::debug;
use std::cmp::Ordering;
use std::ptr::NonNull;
use thiserror::Error;

/// Offsets swept on each side; two words covers every residue pairing.
pub const OFFSETS: usize = 2 * size_of::<usize>();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckError {
    #[error("{op} mismatch: len {len}, src offset {src_off}, dst offset {dst_off}")]
    Mismatch {
        op: &'static str,
        len: usize,
        src_off: usize,
        dst_off: usize,
    },
    #[error("{op} returned the wrong pointer: len {len}, offset {offset}")]
    WrongReturn {
        op: &'static str,
        len: usize,
        offset: usize,
    },
}

/// Deterministic, non-repeating-looking fill so shifted copies are detectable.
#[allow(clippy::cast_possible_truncation)]
fn pattern(len: usize, seed: u8) -> Vec<u8> {
    (0..len)
        .map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed))
        .collect()
}

/// Like [`pattern`] but never zero, for use as sequence content.
fn text(len: usize, seed: u8) -> Vec<u8> {
    pattern(len, seed).into_iter().map(|b| b | 1).collect()
}

fn mismatch(op: &'static str, len: usize, src_off: usize, dst_off: usize) -> CheckError {
    CheckError::Mismatch {
        op,
        len,
        src_off,
        dst_off,
    }
}

pub fn fill(max_len: usize) -> Result<usize, CheckError> {
    let mut cases = 0;
    for offset in 0..OFFSETS {
        for len in 0..=max_len {
            let mut buf = vec![0x5Au8; max_len + 2 * OFFSETS];
            let dst = buf.as_mut_ptr().wrapping_add(offset);
            if unsafe { mem::fill(dst, 0xC3, len) } != dst {
                return Err(CheckError::WrongReturn {
                    op: "fill",
                    len,
                    offset,
                });
            }

            let (head, rest) = buf.split_at(offset);
            let (body, tail) = rest.split_at(len);
            if head.iter().chain(tail).any(|&b| b != 0x5A) || body.iter().any(|&b| b != 0xC3) {
                return Err(mismatch("fill", len, 0, offset));
            }
            cases += 1;
        }
    }
    debug!("fill: {cases} cases");
    Ok(cases)
}

pub fn copy(max_len: usize) -> Result<usize, CheckError> {
    let src = pattern(max_len + OFFSETS, 7);
    let mut cases = 0;
    for src_off in 0..OFFSETS {
        for dst_off in 0..OFFSETS {
            for len in 0..=max_len {
                let mut dst = vec![0u8; max_len + OFFSETS];
                let d = dst.as_mut_ptr().wrapping_add(dst_off);
                if unsafe { mem::copy(d, src.as_ptr().add(src_off), len) } != d {
                    return Err(CheckError::WrongReturn {
                        op: "copy",
                        len,
                        offset: dst_off,
                    });
                }
                if dst[dst_off..dst_off + len] != src[src_off..src_off + len]
                    || dst[..dst_off].iter().chain(&dst[dst_off + len..]).any(|&b| b != 0)
                {
                    return Err(mismatch("copy", len, src_off, dst_off));
                }
                cases += 1;
            }
        }
    }
    debug!("copy: {cases} cases");
    Ok(cases)
}

pub fn copy_overlapping(max_len: usize) -> Result<usize, CheckError> {
    let span = 2 * OFFSETS;
    let original = pattern(max_len + span, 11);
    let mut cases = 0;
    for src_off in 0..span {
        for dst_off in 0..span {
            for len in 0..=max_len {
                let mut expected = original.clone();
                expected.copy_within(src_off..src_off + len, dst_off);

                let mut buf = original.clone();
                let base = buf.as_mut_ptr();
                unsafe { mem::copy_overlapping(base.add(dst_off), base.add(src_off), len) };
                if buf != expected {
                    return Err(mismatch("copy_overlapping", len, src_off, dst_off));
                }
                cases += 1;
            }
        }
    }
    debug!("copy_overlapping: {cases} cases");
    Ok(cases)
}

pub fn compare(max_len: usize) -> Result<usize, CheckError> {
    let a = pattern(max_len, 3);
    let mut cases = 0;
    for len in 0..=max_len {
        if unsafe { mem::compare(a.as_ptr(), a.as_ptr(), len) } != 0 {
            return Err(mismatch("compare", len, 0, 0));
        }
        for pos in 0..len {
            let mut b = a.clone();
            b[pos] = b[pos].wrapping_add(1);
            let ab = unsafe { mem::compare(a.as_ptr(), b.as_ptr(), len) };
            let ba = unsafe { mem::compare(b.as_ptr(), a.as_ptr(), len) };
            let expected = a[..len].cmp(&b[..len]);
            if ab.cmp(&0) != expected || ab.signum() != -ba.signum() {
                return Err(mismatch("compare", len, pos, pos));
            }
            cases += 1;
        }
    }
    debug!("compare: {cases} cases");
    Ok(cases)
}

pub fn search(max_len: usize) -> Result<usize, CheckError> {
    let mut cases = 0;
    for offset in 0..OFFSETS {
        for len in 0..=max_len {
            // Targets sit right after the region and must stay invisible.
            let mut buf = vec![b'.'; offset + len + OFFSETS];
            buf[offset + len..].fill(b'#');
            let hay = buf.as_ptr().wrapping_add(offset);
            if unsafe { mem::find_byte_in(hay, b'#', len) }.is_some() {
                return Err(mismatch("find_byte_in", len, offset, 0));
            }

            if len > 0 {
                let at = len / 2;
                buf[offset + at] = b'#';
                let hay = buf.as_ptr().wrapping_add(offset);
                let found = unsafe { mem::find_byte_in(hay, b'#', len) };
                if position(hay, found) != Some(at) {
                    return Err(mismatch("find_byte_in", len, offset, at));
                }
            }
            cases += 1;
        }
    }
    debug!("search: {cases} cases");
    Ok(cases)
}

pub fn sequences(max_len: usize) -> Result<usize, CheckError> {
    let mut cases = 0;
    for offset in 0..OFFSETS {
        for len in 0..=max_len {
            let content = text(len, 5);
            let buf = terminated(&content, offset);
            let s = &buf[offset..];

            if unsafe { cstr::length(s.as_ptr()) } != len {
                return Err(mismatch("length", len, offset, 0));
            }

            let found = unsafe { cstr::find_byte(s.as_ptr(), 0) };
            if position(s.as_ptr(), found) != Some(len) {
                return Err(mismatch("find_byte", len, offset, 0));
            }

            if let Some(&last) = content.last() {
                let expected = content.iter().position(|&b| b == last);
                let found = unsafe { cstr::find_byte(s.as_ptr(), last) };
                if position(s.as_ptr(), found) != expected {
                    return Err(mismatch("find_byte", len, offset, 0));
                }

                let needle_start = len / 2;
                let needle = terminated(&content[needle_start..], 0);
                let expected = content
                    .windows(len - needle_start)
                    .position(|w| w == &content[needle_start..]);
                let found = unsafe { cstr::find(s.as_ptr(), needle.as_ptr()) };
                if position(s.as_ptr(), found) != expected {
                    return Err(mismatch("find", len, offset, needle_start));
                }
            }

            let mut dst = vec![0xEEu8; len + 1 + OFFSETS];
            unsafe { cstr::copy(dst.as_mut_ptr(), s.as_ptr()) };
            if dst[..=len] != s[..=len] {
                return Err(mismatch("sequence copy", len, offset, 0));
            }
            cases += 1;
        }
    }
    debug!("sequences: {cases} cases");
    Ok(cases)
}

pub fn sequence_copies(max_len: usize) -> Result<usize, CheckError> {
    let mut cases = 0;
    for offset in 0..OFFSETS {
        for len in 0..=max_len {
            let content = text(len, 13);
            let buf = terminated(&content, offset);
            let s = &buf[offset..];

            for max in [0, len / 2, len, len + 1, len + OFFSETS] {
                if unsafe { cstr::bounded_length(s.as_ptr(), max) } != len.min(max) {
                    return Err(mismatch("bounded_length", len, offset, max));
                }
            }

            for n in [len / 2, len, len + 1, len + OFFSETS] {
                let mut dst = vec![0xEEu8; n + OFFSETS];
                unsafe { cstr::copy_padded(dst.as_mut_ptr(), s.as_ptr(), n) };
                let copied = len.min(n);
                if dst[..copied] != content[..copied]
                    || dst[copied..n].iter().any(|&b| b != 0)
                    || dst[n..].iter().any(|&b| b != 0xEE)
                {
                    return Err(mismatch("copy_padded", len, offset, n));
                }
            }

            let head = text(len / 2, 17);
            let mut dst = terminated(&head, 0);
            dst.resize(head.len() + len + 1 + OFFSETS, 0);
            unsafe { cstr::concat(dst.as_mut_ptr(), s.as_ptr()) };
            let mut expected = head;
            expected.extend_from_slice(&content);
            expected.push(0);
            if dst[..expected.len()] != expected[..] {
                return Err(mismatch("concat", len, offset, 0));
            }
            cases += 1;
        }
    }
    debug!("sequence_copies: {cases} cases");
    Ok(cases)
}

pub fn sequence_compare(max_len: usize) -> Result<usize, CheckError> {
    let mut cases = 0;
    for len in 0..=max_len {
        let a = text(len, 9);
        let mut altered = a.clone();
        if let Some(b) = altered.get_mut(len / 2) {
            *b = b.wrapping_add(2) | 1;
        }
        let others = [a.to_ascii_uppercase(), altered, a[..len / 2].to_vec()];

        for (variant, b) in others.iter().enumerate() {
            let sb = terminated(b, 0);
            for offset in 0..OFFSETS {
                let buf = terminated(&a, offset);
                let (pa, pb) = (buf[offset..].as_ptr(), sb.as_ptr());

                let plain = unsafe { cstr::compare(pa, pb) };
                let folded = unsafe { cstr::compare_ignore_case(pa, pb) };
                if plain.cmp(&0) != ordered(&a, b, usize::MAX, false) {
                    return Err(mismatch("compare", len, offset, variant));
                }
                if folded.cmp(&0) != ordered(&a, b, usize::MAX, true) {
                    return Err(mismatch("compare_ignore_case", len, offset, variant));
                }

                for n in [0, len / 2, len, len + 1] {
                    let plain = unsafe { cstr::compare_bounded(pa, pb, n) };
                    let folded = unsafe { cstr::compare_ignore_case_bounded(pa, pb, n) };
                    if plain.cmp(&0) != ordered(&a, b, n, false) {
                        return Err(mismatch("compare_bounded", len, offset, n));
                    }
                    if folded.cmp(&0) != ordered(&a, b, n, true) {
                        return Err(mismatch("compare_ignore_case_bounded", len, offset, n));
                    }
                }
                cases += 1;
            }
        }
    }
    debug!("sequence_compare: {cases} cases");
    Ok(cases)
}

/// `content` at `offset`, then a terminator and [`OFFSETS`] bytes of zero slack
/// so word scans never leave the allocation.
fn terminated(content: &[u8], offset: usize) -> Vec<u8> {
    let mut buf = vec![b'#'; offset];
    buf.extend_from_slice(content);
    buf.resize(offset + content.len() + 1 + OFFSETS, 0);
    buf
}

fn position(base: *const u8, hit: Option<NonNull<u8>>) -> Option<usize> {
    hit.map(|p| p.as_ptr().addr() - base.addr())
}

/// Slice order of the first `limit` bytes of `a` and `b`, terminators included.
fn ordered(a: &[u8], b: &[u8], limit: usize, fold: bool) -> Ordering {
    let prefix = |s: &[u8]| -> Vec<u8> {
        s.iter()
            .chain(&[0])
            .take(limit)
            .map(|&c| if fold { c.to_ascii_lowercase() } else { c })
            .collect()
    };
    prefix(a).cmp(&prefix(b))
}
