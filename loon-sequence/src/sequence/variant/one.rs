use std::rc::Rc;

use crate::error;
use crate::sequence::traits::SequenceCore;

/// A sequence holding exactly one element.
#[derive(Debug)]
pub struct One<T> {
    item: Rc<T>,
}

impl<T> One<T> {
    pub(crate) fn item(&self) -> &T {
        &*self.item
    }

    pub(crate) fn into_item(self) -> T
    where
        T: Clone,
    {
        Rc::try_unwrap(self.item).unwrap_or_else(|item| (*item).clone())
    }
}

// cloning must not require T: Clone, so this is not derived
impl<T> Clone for One<T> {
    fn clone(&self) -> Self {
        One {
            item: self.item.clone(),
        }
    }
}

impl<T> From<T> for One<T> {
    fn from(item: T) -> Self {
        One {
            item: Rc::new(item),
        }
    }
}

impl<'a, T: 'a> SequenceCore<'a, T, std::iter::Once<&'a T>> for One<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    fn len(&self) -> usize {
        1
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        if index == 0 {
            Some(&*self.item)
        } else {
            None
        }
    }

    #[inline]
    fn iter(&'a self) -> std::iter::Once<&'a T> {
        std::iter::once(&*self.item)
    }

    #[inline]
    fn one(self) -> error::Result<T>
    where
        T: Clone,
    {
        Ok(self.into_item())
    }

    #[inline]
    fn option(self) -> error::Result<Option<T>>
    where
        T: Clone,
    {
        Ok(Some(self.into_item()))
    }
}
