use std::fmt::Display;

use num_traits::Zero;

use super::{core::Sequence, traits::SequenceCore};

impl<T> Sequence<T> {
    /// Left fold: combine elements into `seed` from index 0 upward.
    pub fn fold_left<A>(&self, seed: A, mut f: impl FnMut(A, &T) -> A) -> A {
        let mut accumulator = seed;
        for item in self.iter() {
            accumulator = f(accumulator, item);
        }
        accumulator
    }

    /// Right fold: combine each element with the accumulator built from
    /// the elements to its right.
    pub fn fold_right<A>(&self, seed: A, mut f: impl FnMut(&T, A) -> A) -> A {
        let mut accumulator = seed;
        for item in self.iter().rev() {
            accumulator = f(item, accumulator);
        }
        accumulator
    }

    /// The sum of the elements; zero for the empty sequence.
    pub fn sum(&self) -> T
    where
        T: Zero + Clone,
    {
        self.fold_left(T::zero(), |total, item| total + item.clone())
    }

    /// Case analysis on the sequence: `on_empty` for the empty sequence,
    /// otherwise `on_non_empty(head, tail)` with the tail order
    /// preserved.
    pub fn reduce<R>(
        &self,
        on_empty: impl FnOnce() -> R,
        on_non_empty: impl FnOnce(T, Sequence<T>) -> R,
    ) -> R
    where
        T: Clone,
    {
        match self {
            Self::Empty(_) => on_empty(),
            Self::One(one) => on_non_empty(one.item().clone(), Self::default()),
            Self::Many(many) => {
                let items = many.as_slice();
                let head = items[0].clone();
                let tail = Self::new(items[1..].to_vec());
                on_non_empty(head, tail)
            }
        }
    }

    /// The textual form of each element, interleaved with `separator`.
    /// The empty sequence yields the empty string.
    pub fn join(&self, separator: &str) -> String
    where
        T: Display,
    {
        let mut parts = Vec::with_capacity(self.len());
        for item in self.iter() {
            parts.push(item.to_string());
        }
        parts.join(separator)
    }
}
