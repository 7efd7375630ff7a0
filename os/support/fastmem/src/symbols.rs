//! Unmangled C entry points.
//!
//! These carry the conventional libc names and signatures so the linker picks
//! them over the toolchain's versions. Each one forwards to the typed routine
//! in [`mem`] or [`cstr`].

#![allow(clippy::missing_safety_doc)]

use crate::{cstr, mem};
use core::ffi::{c_char, c_int, c_void};
use core::ptr::{NonNull, null_mut};

/// C converts the `int` argument to `unsigned char`.
#[inline(always)]
#[allow(clippy::inline_always, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn as_byte(c: c_int) -> u8 {
    c as u8
}

#[inline(always)]
#[allow(clippy::inline_always)]
fn or_null(hit: Option<NonNull<u8>>) -> *mut c_char {
    hit.map_or(null_mut(), |p| p.as_ptr().cast())
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memset(s: *mut c_void, c: c_int, n: usize) -> *mut c_void {
    unsafe { mem::fill(s.cast(), as_byte(c), n).cast() }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memcpy(dest: *mut c_void, src: *const c_void, n: usize) -> *mut c_void {
    unsafe { mem::copy(dest.cast(), src.cast(), n).cast() }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memmove(dest: *mut c_void, src: *const c_void, n: usize) -> *mut c_void {
    unsafe { mem::copy_overlapping(dest.cast(), src.cast(), n).cast() }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memcmp(s1: *const c_void, s2: *const c_void, n: usize) -> c_int {
    unsafe { mem::compare(s1.cast(), s2.cast(), n) }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bcmp(s1: *const c_void, s2: *const c_void, n: usize) -> c_int {
    unsafe { mem::equal(s1.cast(), s2.cast(), n) }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memchr(s: *const c_void, c: c_int, n: usize) -> *mut c_void {
    unsafe { or_null(mem::find_byte_in(s.cast(), as_byte(c), n)).cast() }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strlen(s: *const c_char) -> usize {
    unsafe { cstr::length(s.cast()) }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strnlen(s: *const c_char, maxlen: usize) -> usize {
    unsafe { cstr::bounded_length(s.cast(), maxlen) }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strcpy(dest: *mut c_char, src: *const c_char) -> *mut c_char {
    unsafe { cstr::copy(dest.cast(), src.cast()).cast() }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strncpy(dest: *mut c_char, src: *const c_char, n: usize) -> *mut c_char {
    unsafe { cstr::copy_padded(dest.cast(), src.cast(), n).cast() }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strcat(dest: *mut c_char, src: *const c_char) -> *mut c_char {
    unsafe { cstr::concat(dest.cast(), src.cast()).cast() }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strcmp(s1: *const c_char, s2: *const c_char) -> c_int {
    unsafe { cstr::compare(s1.cast(), s2.cast()) }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strncmp(s1: *const c_char, s2: *const c_char, n: usize) -> c_int {
    unsafe { cstr::compare_bounded(s1.cast(), s2.cast(), n) }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strcasecmp(s1: *const c_char, s2: *const c_char) -> c_int {
    unsafe { cstr::compare_ignore_case(s1.cast(), s2.cast()) }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strncasecmp(s1: *const c_char, s2: *const c_char, n: usize) -> c_int {
    unsafe { cstr::compare_ignore_case_bounded(s1.cast(), s2.cast(), n) }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strchr(s: *const c_char, c: c_int) -> *mut c_char {
    unsafe { or_null(cstr::find_byte(s.cast(), as_byte(c))) }
}

#[cfg_attr(feature = "fast-section", unsafe(link_section = ".fast"))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strstr(haystack: *const c_char, needle: *const c_char) -> *mut c_char {
    unsafe { or_null(cstr::find(haystack.cast(), needle.cast())) }
}
