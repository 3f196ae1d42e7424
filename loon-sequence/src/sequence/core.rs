// The Sequence enum wires the three variants together. Dispatch is a plain
// match per method so the compiler can see through to the concrete variant
// on the inside; only the iterator is wrapped into one outer type.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error;

use super::{
    iter::Iter,
    traits::SequenceCore,
    variant::{Empty, Many, One},
};

/// An immutable ordered sequence of elements of type `T`.
///
/// Two sequences are equal iff they have the same length and pairwise
/// equal elements in order, regardless of variant. Cloning is O(1):
/// storage is shared, never copied, and never mutated.
pub enum Sequence<T> {
    Empty(Empty),
    One(One<T>),
    Many(Many<T>),
}

// a static assertion to ensure that Sequence never grows in size
#[cfg(target_arch = "x86_64")]
static_assertions::assert_eq_size!(Sequence<i64>, [u8; 24]);

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::Empty(Empty {})
    }
}

// cloning must not require T: Clone, so this is not derived
impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Empty(inner) => Self::Empty(inner.clone()),
            Self::One(inner) => Self::One(inner.clone()),
            Self::Many(inner) => Self::Many(inner.clone()),
        }
    }
}

impl<'a, T: 'a> SequenceCore<'a, T, Iter<'a, T>> for Sequence<T> {
    fn is_empty(&self) -> bool {
        // the empty arm is inlined: nothing in the signature pins down
        // the element type for the variant's generic impl
        match self {
            Sequence::Empty(_) => true,
            Sequence::One(inner) => inner.is_empty(),
            Sequence::Many(inner) => inner.is_empty(),
        }
    }

    fn len(&self) -> usize {
        match self {
            Sequence::Empty(_) => 0,
            Sequence::One(inner) => inner.len(),
            Sequence::Many(inner) => inner.len(),
        }
    }

    fn get(&self, index: usize) -> Option<&T> {
        match self {
            Sequence::Empty(inner) => inner.get(index),
            Sequence::One(inner) => inner.get(index),
            Sequence::Many(inner) => inner.get(index),
        }
    }

    fn iter(&'a self) -> Iter<'a, T> {
        match self {
            Sequence::Empty(inner) => Iter::Empty(inner.iter()),
            Sequence::One(inner) => Iter::One(inner.iter()),
            Sequence::Many(inner) => Iter::Many(inner.iter()),
        }
    }

    fn one(self) -> error::Result<T>
    where
        T: Clone,
    {
        match self {
            Sequence::Empty(inner) => inner.one(),
            Sequence::One(inner) => inner.one(),
            Sequence::Many(inner) => inner.one(),
        }
    }

    fn option(self) -> error::Result<Option<T>>
    where
        T: Clone,
    {
        match self {
            Sequence::Empty(inner) => inner.option(),
            Sequence::One(inner) => inner.option(),
            Sequence::Many(inner) => inner.option(),
        }
    }
}

impl<T> Sequence<T> {
    /// A reference to the first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.get(0)
    }

    /// A reference to the last element, if any.
    pub fn last(&self) -> Option<&T> {
        match self.len() {
            0 => None,
            n => self.get(n - 1),
        }
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality_across_variants() {
        let a: Sequence<i64> = vec![42].into();
        let b: Sequence<i64> = 42.into();
        assert_eq!(a, b);
        assert_ne!(a, Sequence::default());
    }

    #[test]
    fn test_empty_len() {
        let seq = Sequence::<i64>::default();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
        assert_eq!(seq.first(), None);
    }

    #[test]
    fn test_get_in_and_out_of_range() {
        let seq: Sequence<i64> = vec![1, 2, 3].into();
        assert_eq!(seq.get(0), Some(&1));
        assert_eq!(seq.get(2), Some(&3));
        assert_eq!(seq.get(3), None);
        assert_eq!(seq.last(), Some(&3));
    }

    #[test]
    fn test_one_on_singleton() {
        let seq: Sequence<i64> = vec![7].into();
        assert_eq!(seq.one(), Ok(7));
    }

    #[test]
    fn test_one_rejects_other_cardinalities() {
        let empty = Sequence::<i64>::default();
        assert_eq!(empty.one(), Err(crate::error::Error::NotOne(0)));
        let many: Sequence<i64> = vec![1, 2].into();
        assert_eq!(many.one(), Err(crate::error::Error::NotOne(2)));
    }

    #[test]
    fn test_option_cardinalities() {
        assert_eq!(Sequence::<i64>::default().option(), Ok(None));
        let one: Sequence<i64> = vec![7].into();
        assert_eq!(one.option(), Ok(Some(7)));
        let many: Sequence<i64> = vec![1, 2, 3].into();
        assert_eq!(many.option(), Err(crate::error::Error::NotOptional(3)));
    }

    #[test]
    fn test_clone_shares_storage() {
        let seq: Sequence<i64> = vec![1, 2, 3].into();
        let clone = seq.clone();
        assert_eq!(seq, clone);
    }
}
