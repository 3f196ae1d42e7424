use super::{core::Sequence, traits::SequenceCore, variant::Many};

impl<T> Sequence<T> {
    /// A new sequence of `f` applied to each element, in order.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Sequence<U> {
        self.iter().map(|item| f(item)).collect()
    }

    /// As [`map`](Sequence::map), passing `f` the zero-based index of
    /// each element as well.
    pub fn indexed_map<U>(&self, mut f: impl FnMut(usize, &T) -> U) -> Sequence<U> {
        self.iter()
            .enumerate()
            .map(|(index, item)| f(index, item))
            .collect()
    }

    /// The subsequence of elements satisfying `predicate`, order
    /// preserved.
    pub fn filter(&self, mut predicate: impl FnMut(&T) -> bool) -> Self
    where
        T: Clone,
    {
        self.iter().filter(|item| predicate(item)).cloned().collect()
    }

    /// A new sequence with `item` added at the end.
    pub fn append(&self, item: T) -> Self
    where
        T: Clone,
    {
        match self {
            Self::Empty(_) => Self::One(item.into()),
            Self::One(one) => Self::new(vec![one.item().clone(), item]),
            Self::Many(many) => {
                let mut items = Vec::with_capacity(many.len() + 1);
                items.extend(many.iter().cloned());
                items.push(item);
                Self::Many(Many::from(items))
            }
        }
    }

    /// A new sequence with `item` added at the start.
    pub fn prepend(&self, item: T) -> Self
    where
        T: Clone,
    {
        match self {
            Self::Empty(_) => Self::One(item.into()),
            Self::One(one) => Self::new(vec![item, one.item().clone()]),
            Self::Many(many) => {
                let mut items = Vec::with_capacity(many.len() + 1);
                items.push(item);
                items.extend(many.iter().cloned());
                Self::Many(Many::from(items))
            }
        }
    }

    /// The same elements in reverse order.
    pub fn reversed(&self) -> Self
    where
        T: Clone,
    {
        if self.len() < 2 {
            return self.clone();
        }
        let mut items: Vec<T> = self.iter().cloned().collect();
        items.reverse();
        Self::new(items)
    }

    /// Pair up elements of `self` and `other` at equal indices through
    /// `f`, stopping at the shorter sequence's length.
    pub fn zip_with<U, V>(
        &self,
        other: &Sequence<U>,
        mut f: impl FnMut(&T, &U) -> V,
    ) -> Sequence<V> {
        self.iter()
            .zip(other.iter())
            .map(|(a, b)| f(a, b))
            .collect()
    }
}

impl<T: Clone> Sequence<Sequence<T>> {
    /// Concatenate a sequence of sequences into one, inner order first,
    /// then outer order. An empty outer sequence yields the empty
    /// sequence.
    pub fn flatten(&self) -> Sequence<T> {
        let mut items = Vec::new();
        for seq in self.iter() {
            items.extend(seq.iter().cloned());
        }
        Sequence::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_length_and_order() {
        let seq: Sequence<i64> = vec![1, 2, 3].into();
        let doubled = seq.map(|n| n * 2);
        assert_eq!(doubled, vec![2, 4, 6].into());
        assert_eq!(doubled.len(), seq.len());
    }

    #[test]
    fn test_map_identity_is_identity() {
        let seq: Sequence<i64> = vec![1, 2, 3].into();
        assert_eq!(seq.map(|n| *n), seq);
    }

    #[test]
    fn test_map_changes_element_type() {
        let seq: Sequence<i64> = vec![1, 22].into();
        let texts = seq.map(|n| n.to_string());
        assert_eq!(texts, vec!["1".to_string(), "22".to_string()].into());
    }

    #[test]
    fn test_indexed_map_sees_indices() {
        let seq: Sequence<&str> = vec!["a", "b", "c"].into();
        let indexed = seq.indexed_map(|i, s| format!("{i}{s}"));
        assert_eq!(
            indexed,
            vec!["0a".to_string(), "1b".to_string(), "2c".to_string()].into()
        );
    }

    #[test]
    fn test_filter_keeps_order() {
        let seq: Sequence<i64> = vec![1, 2, 3, 4, 5, 6].into();
        assert_eq!(seq.filter(|n| n % 2 == 0), vec![2, 4, 6].into());
    }

    #[test]
    fn test_filter_can_empty_out() {
        let seq: Sequence<i64> = vec![1, 3].into();
        assert_eq!(seq.filter(|n| n % 2 == 0), Sequence::default());
    }

    #[test]
    fn test_append_grows_by_one() {
        let seq: Sequence<i64> = vec![1, 2].into();
        assert_eq!(seq.append(3), vec![1, 2, 3].into());
        assert_eq!(Sequence::default().append(1), vec![1].into());
        assert_eq!(Sequence::from(1).append(2), vec![1, 2].into());
    }

    #[test]
    fn test_prepend_grows_by_one() {
        let seq: Sequence<i64> = vec![2, 3].into();
        assert_eq!(seq.prepend(1), vec![1, 2, 3].into());
        assert_eq!(Sequence::default().prepend(1), vec![1].into());
        assert_eq!(Sequence::from(2).prepend(1), vec![1, 2].into());
    }

    #[test]
    fn test_reversed() {
        let seq: Sequence<i64> = vec![1, 2, 3].into();
        assert_eq!(seq.reversed(), vec![3, 2, 1].into());
        assert_eq!(Sequence::<i64>::default().reversed(), Sequence::default());
    }

    #[test]
    fn test_zip_with_stops_at_shorter() {
        let a: Sequence<i64> = vec![1, 2, 3].into();
        let b: Sequence<i64> = vec![4, 5, 6, 7].into();
        assert_eq!(a.zip_with(&b, |x, y| x * y), vec![4, 10, 18].into());
        assert_eq!(b.zip_with(&a, |x, y| x * y), vec![4, 10, 18].into());
    }

    #[test]
    fn test_zip_with_empty_is_empty() {
        let a: Sequence<i64> = vec![1, 2, 3].into();
        let empty = Sequence::<i64>::default();
        assert_eq!(a.zip_with(&empty, |x, y| x + y), Sequence::default());
    }

    #[test]
    fn test_flatten_preserves_inner_then_outer_order() {
        let nested: Sequence<Sequence<i64>> =
            vec![vec![1, 2].into(), vec![].into(), vec![3].into()].into();
        assert_eq!(nested.flatten(), vec![1, 2, 3].into());
    }

    #[test]
    fn test_flatten_empty_outer_is_empty() {
        let nested = Sequence::<Sequence<i64>>::default();
        assert_eq!(nested.flatten(), Sequence::default());
    }
}
