//! Ordering.

use std::cmp::Ordering;

use loon_sequence::Sequence;

/// The elements of `seq` ordered by `compare`; stable, so elements that
/// compare equal keep their original relative order. The input sequence
/// is untouched.
///
/// `compare` must be a consistent total order for the input; an
/// inconsistent comparator yields the elements in an unspecified order.
pub fn sort<T: Clone>(compare: impl FnMut(&T, &T) -> Ordering, seq: &Sequence<T>) -> Sequence<T> {
    seq.sorted_by(compare)
}
