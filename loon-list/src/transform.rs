//! Transformations: every function here returns a newly constructed
//! sequence and leaves its inputs untouched.

use std::hash::Hash;

use loon_sequence::Sequence;

/// A new sequence of `f` applied to each element of `seq`; same length,
/// same order.
pub fn map<T, U>(f: impl FnMut(&T) -> U, seq: &Sequence<T>) -> Sequence<U> {
    seq.map(f)
}

/// As [`map`], passing `f` the zero-based index of each element as
/// well.
pub fn indexed_map<T, U>(f: impl FnMut(usize, &T) -> U, seq: &Sequence<T>) -> Sequence<U> {
    seq.indexed_map(f)
}

/// The subsequence of elements of `seq` satisfying `predicate`, order
/// preserved.
pub fn filter<T: Clone>(predicate: impl FnMut(&T) -> bool, seq: &Sequence<T>) -> Sequence<T> {
    seq.filter(predicate)
}

/// A new sequence with `item` added at the end of `seq`.
pub fn append<T: Clone>(item: T, seq: &Sequence<T>) -> Sequence<T> {
    seq.append(item)
}

/// A new sequence with `item` added at the start of `seq`.
pub fn prepend<T: Clone>(item: T, seq: &Sequence<T>) -> Sequence<T> {
    seq.prepend(item)
}

/// `a` followed by `b`.
pub fn concat<T: Clone>(a: &Sequence<T>, b: &Sequence<T>) -> Sequence<T> {
    a.clone().concat(b.clone())
}

/// The integers counting from `lower` towards `upper`: ascending and
/// upper-exclusive when `lower < upper`, descending and upper-exclusive
/// when `lower > upper`, empty when the bounds are equal.
pub fn range(lower: i64, upper: i64) -> Sequence<i64> {
    Sequence::range(lower, upper)
}

/// One sequence out of a sequence of sequences, inner order first, then
/// outer order. An empty outer sequence yields the empty sequence.
pub fn flatten<T: Clone>(seq: &Sequence<Sequence<T>>) -> Sequence<T> {
    seq.flatten()
}

/// Pair up `a` and `b` at equal indices through `f`, stopping at the
/// shorter sequence's length; excess elements of the longer sequence
/// are discarded.
pub fn zip_with<T, U, V>(
    f: impl FnMut(&T, &U) -> V,
    a: &Sequence<T>,
    b: &Sequence<U>,
) -> Sequence<V> {
    a.zip_with(b, f)
}

/// The elements of `seq` in reverse order.
pub fn reverse<T: Clone>(seq: &Sequence<T>) -> Sequence<T> {
    seq.reversed()
}

/// The first occurrence of each distinct element of `seq`, in the
/// order the occurrences appear.
pub fn distinct<T: Clone + Hash + Eq>(seq: &Sequence<T>) -> Sequence<T> {
    seq.distinct()
}
