//! # Raw byte-region primitives
//!
//! Fill, copy, move, compare and search over `(pointer, length)` regions.

mod compare;
mod copy;
mod fill;
mod search;

pub use compare::{compare, equal};
pub use copy::{copy, copy_overlapping};
pub use fill::fill;
pub use search::find_byte_in;
