//! The exported C entry points, called through their C signatures.
//!
//! Linking these into the test binary replaces the platform's own routines for
//! the whole process, so everything else the harness does runs on them too.

#![cfg(feature = "c-symbols")]

use core::ffi::{c_char, c_int, c_void};
use fastmem::symbols::{
    memchr, memcmp, memcpy, memmove, memset, strcasecmp, strcat, strchr, strcmp, strcpy, strlen,
    strncasecmp, strncmp, strncpy, strnlen, strstr,
};

/// `text` with a terminator and a word of zero slack.
fn sequence(text: &[u8]) -> Vec<u8> {
    let mut v = text.to_vec();
    v.resize(text.len() + 1 + 16, 0);
    v
}

fn cs(buf: &[u8]) -> *const c_char {
    buf.as_ptr().cast()
}

#[test]
fn strchr_maps_hits_and_misses() {
    let s = sequence(b"abc");
    let base = cs(&s);
    assert_eq!(unsafe { strchr(base, 0) }.cast_const(), base.wrapping_add(3));
    assert_eq!(unsafe { strchr(base, c_int::from(b'b')) }.cast_const(), base.wrapping_add(1));
    assert!(unsafe { strchr(base, c_int::from(b'z')) }.is_null());
    // Only the low byte of the argument counts.
    assert_eq!(unsafe { strchr(base, 0x100 | c_int::from(b'c')) }.cast_const(), base.wrapping_add(2));
}

#[test]
fn memchr_truncates_the_search_byte() {
    let s = *b"xyzAB";
    let hit = unsafe { memchr(s.as_ptr().cast(), 0x141, s.len()) };
    assert_eq!(hit.cast_const(), s.as_ptr().wrapping_add(3).cast::<c_void>());
    assert!(unsafe { memchr(s.as_ptr().cast(), c_int::from(b'B'), 4) }.is_null());
}

#[test]
fn strstr_empty_needle_and_miss() {
    let (h, empty, miss) = (sequence(b"hello world"), sequence(b""), sequence(b"xyz"));
    assert_eq!(unsafe { strstr(cs(&h), cs(&empty)) }.cast_const(), cs(&h));
    assert!(unsafe { strstr(cs(&h), cs(&miss)) }.is_null());
    let world = sequence(b"world");
    assert_eq!(unsafe { strstr(cs(&h), cs(&world)) }.cast_const(), cs(&h).wrapping_add(6));
}

#[test]
fn region_calls_return_destination() {
    let mut buf = [0u8; 32];
    let dst = buf.as_mut_ptr().cast::<c_void>();
    assert_eq!(unsafe { memset(dst, 0x1AA, 20) }, dst);
    assert!(buf[..20].iter().all(|&b| b == 0xAA));
    assert!(buf[20..].iter().all(|&b| b == 0));

    let src: Vec<u8> = (0..32).collect();
    let dst = buf.as_mut_ptr().cast::<c_void>();
    assert_eq!(unsafe { memcpy(dst, src.as_ptr().cast(), 32) }, dst);
    assert_eq!(&buf[..], &src[..]);
}

#[test]
fn memmove_handles_overlap_both_ways() {
    let mut buf: Vec<u8> = (0..40).collect();
    let base = buf.as_mut_ptr();
    let ret = unsafe { memmove(base.add(3).cast(), base.cast(), 30) };
    assert_eq!(ret, unsafe { base.add(3) }.cast::<c_void>());
    let mut expected: Vec<u8> = (0..40).collect();
    expected.copy_within(0..30, 3);
    assert_eq!(buf, expected);

    let base = buf.as_mut_ptr();
    unsafe { memmove(base.cast(), base.add(5).cast(), 30) };
    expected.copy_within(5..35, 0);
    assert_eq!(buf, expected);
}

#[test]
fn memcmp_is_unsigned() {
    let (a, b) = (*b"ab\x80", *b"ab\x7F");
    assert!(unsafe { memcmp(a.as_ptr().cast(), b.as_ptr().cast(), 3) } > 0);
    assert_eq!(unsafe { memcmp(a.as_ptr().cast(), b.as_ptr().cast(), 2) }, 0);
}

#[test]
fn string_copies_and_lengths() {
    let src = sequence(b"abc");
    let mut dst = [0xEEu8; 10];
    let ret = unsafe { strncpy(dst.as_mut_ptr().cast(), cs(&src), 10) };
    assert_eq!(ret.cast_const(), cs(&dst));
    assert_eq!(&dst, b"abc\0\0\0\0\0\0\0");

    let mut joined = sequence(b"ab");
    joined.resize(32, 0);
    unsafe { strcat(joined.as_mut_ptr().cast(), cs(&src)) };
    assert_eq!(unsafe { strlen(cs(&joined)) }, 5);
    assert_eq!(unsafe { strnlen(cs(&joined), 3) }, 3);

    let mut copy = [0xEEu8; 24];
    unsafe { strcpy(copy.as_mut_ptr().cast(), cs(&joined)) };
    assert_eq!(&copy[..6], b"ababc\0");
}

#[test]
fn string_ordering() {
    let (abc, abd, upper) = (sequence(b"abc"), sequence(b"abd"), sequence(b"ABD"));
    assert!(unsafe { strcmp(cs(&abc), cs(&abd)) } < 0);
    assert_eq!(unsafe { strncmp(cs(&abc), cs(&abd), 2) }, 0);
    assert_eq!(unsafe { strcasecmp(cs(&abd), cs(&upper)) }, 0);
    assert!(unsafe { strncasecmp(cs(&abc), cs(&upper), 3) } < 0);
}

#[test]
fn strcasecmp_leaves_high_bytes_raw() {
    let (a, b) = (sequence(b"\xC4"), sequence(b"\xE4"));
    assert_eq!(unsafe { strcasecmp(cs(&a), cs(&b)) }, 0xC4 - 0xE4);
}
