//! The flat list operation namespace of the Loon runtime.
//!
//! This crate is the surface wrapper packages build on: one free
//! function per operation, delegating to the engine in
//! [`loon_sequence`]. Every function is pure, never mutates its
//! arguments, and signals a legitimately absent result through
//! [`Option`] rather than a panic or an error.
//!
//! Argument order follows the runtime's curried signatures: the
//! configuring arguments come first and the sequence operated on comes
//! last, so partial application is an ordinary closure over the leading
//! arguments:
//!
//! ```
//! use loon_list::{map, Sequence};
//!
//! let double = |seq: &Sequence<i64>| map(|n| n * 2, seq);
//! let doubled = double(&vec![1, 2, 3].into());
//! assert_eq!(doubled, vec![2, 4, 6].into());
//! ```

mod access;
mod fold;
mod order;
mod search;
mod transform;

pub use loon_sequence::error::{Error, Result};
pub use loon_sequence::{IntoIter, Iter, Sequence, SequenceCore};

pub use access::{at, drop, insert_at, length, remove_at, set, slice, take};
pub use fold::{foldl, foldr, join, reduce, sum};
pub use order::sort;
pub use search::{all, any, find, find_map, index_of};
pub use transform::{
    append, concat, distinct, filter, flatten, indexed_map, map, prepend, range, reverse, zip_with,
};
