use std::cmp::Ordering;

use super::{
    core::Sequence,
    traits::SequenceCore,
    variant::{Empty, Many},
};

impl<T> Sequence<T> {
    /// Construct a sequence, normalizing the variant to the length.
    ///
    /// This is the only constructor; it guarantees that `Many` always
    /// holds at least two elements.
    pub(crate) fn new(items: Vec<T>) -> Self {
        match items.len() {
            0 => Self::Empty(Empty {}),
            1 => Self::One(items.into_iter().next().unwrap().into()),
            _ => Self::Many(items.into()),
        }
    }

    /// Concatenate two sequences producing a new sequence.
    pub fn concat(self, other: Self) -> Self
    where
        T: Clone,
    {
        match (self, other) {
            (Self::Empty(_), other) => other,
            (this, Self::Empty(_)) => this,
            (Self::One(a), Self::One(b)) => Self::new(vec![a.into_item(), b.into_item()]),
            (Self::One(a), Self::Many(b)) => {
                let mut items = Vec::with_capacity(b.len() + 1);
                items.push(a.into_item());
                items.extend(b.iter().cloned());
                Self::Many(Many::from(items))
            }
            (Self::Many(a), Self::One(b)) => {
                let mut items = Vec::with_capacity(a.len() + 1);
                items.extend(a.iter().cloned());
                items.push(b.into_item());
                Self::Many(Many::from(items))
            }
            (Self::Many(a), Self::Many(b)) => {
                let mut items = Vec::with_capacity(a.len() + b.len());
                items.extend(a.iter().cloned());
                items.extend(b.iter().cloned());
                Self::Many(Many::from(items))
            }
        }
    }
}

impl Sequence<i64> {
    /// The sequence of integers counting from `lower` towards `upper`.
    ///
    /// Ascending and upper-exclusive when `lower < upper`; descending and
    /// upper-exclusive when `lower > upper`; empty when the bounds are
    /// equal.
    pub fn range(lower: i64, upper: i64) -> Self {
        match lower.cmp(&upper) {
            Ordering::Less => (lower..upper).collect(),
            Ordering::Equal => Self::default(),
            Ordering::Greater => ((upper + 1)..=lower).rev().collect(),
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> From<T> for Sequence<T> {
    fn from(item: T) -> Self {
        Self::One(item.into())
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Self::new(items.to_vec())
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
