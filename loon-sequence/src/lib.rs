//! The sequence engine beneath the Loon runtime.
//!
//! Everything in this crate is a pure computation over immutable values:
//! sequences share their storage behind reference counts, transformations
//! construct new sequences, and no operation ever mutates its input.

pub mod error;
pub mod sequence;

pub use sequence::{IntoIter, Iter, Sequence, SequenceCore};
