//! # Zero-terminated byte sequences
//!
//! Length, copy, concatenation, comparison and search over C-style strings.
//! Sequences are plain bytes; no encoding is assumed.

mod compare;
mod copy;
mod fold;
mod length;
mod search;

pub use compare::{compare, compare_bounded, compare_ignore_case, compare_ignore_case_bounded};
pub use copy::{concat, copy, copy_padded};
pub use fold::FOLD_TABLE;
pub use length::{bounded_length, length};
pub use search::{find, find_byte};
