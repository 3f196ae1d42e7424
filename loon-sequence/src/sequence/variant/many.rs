use std::rc::Rc;

use crate::error;
use crate::sequence::traits::SequenceCore;

/// A sequence holding two or more elements behind a shared slice.
#[derive(Debug)]
pub struct Many<T> {
    items: Rc<[T]>,
}

impl<T> Many<T> {
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.items
    }
}

// cloning must not require T: Clone, so this is not derived
impl<T> Clone for Many<T> {
    fn clone(&self) -> Self {
        Many {
            items: self.items.clone(),
        }
    }
}

impl<T> From<Vec<T>> for Many<T> {
    fn from(items: Vec<T>) -> Self {
        Many {
            items: items.into(),
        }
    }
}

impl<'a, T: 'a> SequenceCore<'a, T, std::slice::Iter<'a, T>> for Many<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    #[inline]
    fn iter(&'a self) -> std::slice::Iter<'a, T> {
        self.items.iter()
    }

    #[inline]
    fn one(self) -> error::Result<T>
    where
        T: Clone,
    {
        Err(error::Error::NotOne(self.items.len()))
    }

    #[inline]
    fn option(self) -> error::Result<Option<T>>
    where
        T: Clone,
    {
        Err(error::Error::NotOptional(self.items.len()))
    }
}
