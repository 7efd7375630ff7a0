use fastmem::cstr;
use proptest::prelude::*;
use std::cmp::Ordering;
use std::ptr::NonNull;

/// Word-sized slack after the terminator; the word scans may look there.
const TAIL: usize = 16;

/// `text` followed by a terminator and `TAIL` zero bytes.
fn sequence(text: &[u8]) -> Vec<u8> {
    let mut v = text.to_vec();
    v.resize(text.len() + 1 + TAIL, 0);
    v
}

fn position(base: &[u8], hit: Option<NonNull<u8>>) -> Option<usize> {
    hit.map(|p| p.as_ptr().addr() - base.as_ptr().addr())
}

fn text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=255, 0..48)
}

fn ascii_text() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"abcABC xyz".to_vec()), 0..12)
}

#[test]
fn length_of_empty_and_short() {
    assert_eq!(unsafe { cstr::length(sequence(b"").as_ptr()) }, 0);
    assert_eq!(unsafe { cstr::length(sequence(b"abc").as_ptr()) }, 3);
}

#[test]
fn padded_copy_three_into_ten() {
    let src = sequence(b"abc");
    let mut dst = [0xEEu8; 10];
    let ret = unsafe { cstr::copy_padded(dst.as_mut_ptr(), src.as_ptr(), 10) };
    assert_eq!(ret, dst.as_mut_ptr());
    assert_eq!(&dst, b"abc\0\0\0\0\0\0\0");
}

#[test]
fn padded_copy_long_source_is_unterminated() {
    let src = sequence(b"0123456789ABC");
    let mut dst = [0xEEu8; 12];
    unsafe { cstr::copy_padded(dst.as_mut_ptr(), src.as_ptr(), 10) };
    assert_eq!(&dst[..10], b"0123456789");
    assert_eq!(&dst[10..], &[0xEE, 0xEE]);
}

#[test]
fn find_byte_examples() {
    let s = sequence(b"abc");
    assert_eq!(position(&s, unsafe { cstr::find_byte(s.as_ptr(), 0) }), Some(3));
    assert_eq!(position(&s, unsafe { cstr::find_byte(s.as_ptr(), b'b') }), Some(1));
    assert_eq!(position(&s, unsafe { cstr::find_byte(s.as_ptr(), b'z') }), None);
}

#[test]
fn substring_examples() {
    let cases: [(&[u8], &[u8], Option<usize>); 4] = [
        (b"", b"", Some(0)),
        (b"hello world", b"world", Some(6)),
        (b"aaab", b"aab", Some(1)),
        (b"abc", b"xyz", None),
    ];
    for (hay, needle, expected) in cases {
        let (h, n) = (sequence(hay), sequence(needle));
        let hit = unsafe { cstr::find(h.as_ptr(), n.as_ptr()) };
        assert_eq!(position(&h, hit), expected, "{hay:?} / {needle:?}");
    }
}

#[test]
fn case_insensitive_examples() {
    let ci = |a: &[u8], b: &[u8]| unsafe {
        cstr::compare_ignore_case(sequence(a).as_ptr(), sequence(b).as_ptr())
    };
    assert_eq!(ci(b"ABC", b"abc"), 0);
    assert!(ci(b"abc", b"abd") < 0);
    assert!(ci(b"\xC0", b"\xE0") < 0);
    assert_eq!(ci(b"\xC0", b"\xC0"), 0);
}

proptest! {
    #[test]
    fn length_at_any_offset(t in text(), offset in 0usize..8) {
        let mut buf = vec![b'#'; offset];
        buf.extend_from_slice(&sequence(&t));
        prop_assert_eq!(unsafe { cstr::length(buf.as_ptr().add(offset)) }, t.len());
    }

    #[test]
    fn copy_and_concat_match_slices(a in text(), b in text()) {
        let src = sequence(&a);
        let mut dst = vec![0xEEu8; a.len() + b.len() + 1 + TAIL];
        unsafe { cstr::copy(dst.as_mut_ptr(), src.as_ptr()) };
        prop_assert_eq!(&dst[..=a.len()], &src[..=a.len()]);

        let tail = sequence(&b);
        unsafe { cstr::concat(dst.as_mut_ptr(), tail.as_ptr()) };
        let mut expected = a.clone();
        expected.extend_from_slice(&b);
        expected.push(0);
        prop_assert_eq!(&dst[..expected.len()], &expected[..]);
    }

    #[test]
    fn compare_orders_like_slices(a in text(), b in text()) {
        let (sa, sb) = (sequence(&a), sequence(&b));
        let r = unsafe { cstr::compare(sa.as_ptr(), sb.as_ptr()) };
        prop_assert_eq!(r.cmp(&0), a.cmp(&b));
        let back = unsafe { cstr::compare(sb.as_ptr(), sa.as_ptr()) };
        prop_assert_eq!(r.signum(), -back.signum());
    }

    #[test]
    fn bounded_compare_orders_prefixes(a in text(), b in text(), n in 0usize..64) {
        let (sa, sb) = (sequence(&a), sequence(&b));
        let r = unsafe { cstr::compare_bounded(sa.as_ptr(), sb.as_ptr(), n) };
        let pa = &sa[..=a.len()];
        let pb = &sb[..=b.len()];
        let expected = pa[..n.min(pa.len())].cmp(&pb[..n.min(pb.len())]);
        // Both prefixes include the terminator when shorter than `n`.
        prop_assert_eq!(r.cmp(&0), expected);
    }

    #[test]
    fn ignore_case_matches_lowercased(a in ascii_text(), b in ascii_text()) {
        let r = unsafe { cstr::compare_ignore_case(sequence(&a).as_ptr(), sequence(&b).as_ptr()) };
        let expected = a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase());
        prop_assert_eq!(r.cmp(&0), expected);
    }

    #[test]
    fn find_byte_matches_position(t in text(), byte in any::<u8>()) {
        let s = sequence(&t);
        let expected = if byte == 0 { Some(t.len()) } else { t.iter().position(|&b| b == byte) };
        prop_assert_eq!(position(&s, unsafe { cstr::find_byte(s.as_ptr(), byte) }), expected);
    }

    #[test]
    fn find_matches_window_search(hay in ascii_text(), needle in ascii_text()) {
        let expected = if needle.is_empty() {
            Some(0)
        } else {
            hay.windows(needle.len()).position(|w| w == &needle[..])
        };
        let (h, n) = (sequence(&hay), sequence(&needle));
        prop_assert_eq!(position(&h, unsafe { cstr::find(h.as_ptr(), n.as_ptr()) }), expected);
    }
}

#[test]
fn ordering_helper_sanity() {
    // `Vec<u8>` ordering is what the properties above compare against.
    assert_eq!(b"ab".to_vec().cmp(&b"abc".to_vec()), Ordering::Less);
}
