use crate::error;
use crate::sequence::traits::SequenceCore;

/// The sequence with no elements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Empty {}

impl<'a, T: 'a> SequenceCore<'a, T, std::iter::Empty<&'a T>> for Empty {
    #[inline]
    fn is_empty(&self) -> bool {
        true
    }

    #[inline]
    fn len(&self) -> usize {
        0
    }

    #[inline]
    fn get(&self, _index: usize) -> Option<&T> {
        None
    }

    #[inline]
    fn iter(&'a self) -> std::iter::Empty<&'a T> {
        std::iter::empty()
    }

    #[inline]
    fn one(self) -> error::Result<T>
    where
        T: Clone,
    {
        Err(error::Error::NotOne(0))
    }

    #[inline]
    fn option(self) -> error::Result<Option<T>>
    where
        T: Clone,
    {
        Ok(None)
    }
}
