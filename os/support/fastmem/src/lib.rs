//! # Word-optimized memory and string primitives
//!
//! Drop-in replacements for the freestanding libc routines a firmware image
//! links against: block fill, copy, overlap-safe move and compare over byte
//! regions, plus length, copy, concatenation, comparison and search over
//! zero-terminated sequences.
//!
//! ## Layers
//!
//! | Module | Inputs | Contract |
//! |--------|--------|----------|
//! | [`mem`] | `(pointer, length)` regions | `unsafe fn`, caller upholds validity |
//! | [`cstr`] | zero-terminated sequences | `unsafe fn`, caller upholds termination |
//! | [`region`] | slices | safe, violations reported as [`RegionError`] |
//! | `symbols` | C ABI (`memcpy`, `strlen`, ...) | exported with the `c-symbols` feature |
//!
//! ## Fast paths
//!
//! Copies and fills of at least [`WORD_COPY_THRESHOLD`] bytes move whole
//! machine words once source and destination share their offset within a
//! word. Sequence scans test a word at a time for a zero lane (and, for
//! searches, a lane equal to the target) with the branchless
//! `(w - 0x01..01) & !w & 0x80..80` check. Byte-level results are identical to
//! plain byte loops in every case.
//!
//! ## Execution contexts
//!
//! Every routine is reentrant: there is no global or cached state, nothing
//! blocks, and running time is proportional to the region length. They are
//! safe to call from threads and interrupt handlers alike.
//!
//! ## Features
//!
//! - `c-symbols`: export the unmangled C entry points. Never active in this
//!   crate's own unit tests.
//! - `fast-section`: place all routines in the `.fast` link section so the
//!   linker script can locate them in low-latency instruction memory.
//!
//! ```rust
//! use fastmem::region;
//!
//! let mut buf = *b"hello\0\0\0\0\0\0\0";
//! let len = region::sequence_concat(&mut buf, b" you\0").unwrap();
//! assert_eq!(&buf[..=len], b"hello you\0");
//! assert_eq!(region::sequence_find(&buf, b"you\0"), Ok(Some(6)));
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]
#![no_builtins]
#![allow(unsafe_code)]

pub mod cstr;
pub mod mem;
pub mod region;
mod word;

#[cfg(all(feature = "c-symbols", not(test)))]
pub mod symbols;

pub use region::RegionError;
pub use word::WORD_COPY_THRESHOLD;
