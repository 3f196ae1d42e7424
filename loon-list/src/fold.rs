//! Folding and aggregation.

use std::fmt::Display;

use num_traits::Zero;

use loon_sequence::Sequence;

/// Left fold over `seq`: `f(...f(f(seed, s[0]), s[1])..., s[n-1])`.
pub fn foldl<T, A>(seed: A, f: impl FnMut(A, &T) -> A, seq: &Sequence<T>) -> A {
    seq.fold_left(seed, f)
}

/// Right fold over `seq`: elements are combined from index `n-1`
/// downward with the accumulator built from the elements to their
/// right.
pub fn foldr<T, A>(seed: A, f: impl FnMut(&T, A) -> A, seq: &Sequence<T>) -> A {
    seq.fold_right(seed, f)
}

/// The sum of the elements of `seq`; zero for the empty sequence.
pub fn sum<T: Zero + Clone>(seq: &Sequence<T>) -> T {
    seq.sum()
}

/// Case analysis on `seq`: `on_empty()` for the empty sequence,
/// otherwise `on_non_empty(head, tail)` where `head` is the first
/// element and `tail` the rest, order preserved.
pub fn reduce<T: Clone, R>(
    on_empty: impl FnOnce() -> R,
    on_non_empty: impl FnOnce(T, Sequence<T>) -> R,
    seq: &Sequence<T>,
) -> R {
    seq.reduce(on_empty, on_non_empty)
}

/// The textual form of each element of `seq`, interleaved with
/// `separator`. The empty sequence yields the empty string.
pub fn join<T: Display>(separator: &str, seq: &Sequence<T>) -> String {
    seq.join(separator)
}
