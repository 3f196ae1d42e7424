use std::cmp::Ordering;

use super::{core::Sequence, traits::SequenceCore};

impl<T> Sequence<T> {
    /// The same elements ordered by `compare`. The sort is stable:
    /// elements that compare equal keep their original relative order.
    ///
    /// `compare` must be a consistent total order; an inconsistent
    /// comparator yields the elements in an unspecified order.
    pub fn sorted_by(&self, mut compare: impl FnMut(&T, &T) -> Ordering) -> Self
    where
        T: Clone,
    {
        if self.len() < 2 {
            return self.clone();
        }
        let mut items: Vec<T> = self.iter().cloned().collect();
        items.sort_by(|a, b| compare(a, b));
        Self::new(items)
    }

    /// The same elements in their natural order; stable, like
    /// [`sorted_by`](Sequence::sorted_by).
    pub fn sorted(&self) -> Self
    where
        T: Ord + Clone,
    {
        self.sorted_by(|a, b| a.cmp(b))
    }
}
