use super::{core::Sequence, traits::SequenceCore};

// Indexed access and slicing. Signed indices throughout: anything the
// caller can write is in range of the argument type, and out-of-range
// values clamp or fall back to a no-op instead of failing.

impl<T> Sequence<T> {
    /// The element at `index`, or `None` when `index` is out of range.
    pub fn at(&self, index: i64) -> Option<T>
    where
        T: Clone,
    {
        if index < 0 {
            return None;
        }
        self.get(index as usize).cloned()
    }

    /// The elements with index in `[start, end)`.
    ///
    /// Both bounds are clamped into `[0, len]`; a clamped `start >= end`
    /// yields the empty sequence. A negative `end` never wraps around to
    /// the tail.
    pub fn slice(&self, start: i64, end: i64) -> Self
    where
        T: Clone,
    {
        let len = self.len() as i64;
        let start = start.clamp(0, len) as usize;
        let end = end.clamp(0, len) as usize;
        if start >= end {
            return Self::default();
        }
        self.iter().skip(start).take(end - start).cloned().collect()
    }

    /// The first `count` elements; the whole sequence when `count`
    /// exceeds the length, empty when `count <= 0`.
    pub fn take(&self, count: i64) -> Self
    where
        T: Clone,
    {
        self.slice(0, count)
    }

    /// Everything but the first `count` elements; `count <= 0` is a
    /// no-op, `count` beyond the length yields empty.
    pub fn skip(&self, count: i64) -> Self
    where
        T: Clone,
    {
        self.slice(count, self.len() as i64)
    }

    /// A copy with the element at `index` replaced by `value`.
    ///
    /// An out-of-range `index` returns the sequence unchanged.
    pub fn set(&self, index: i64, value: T) -> Self
    where
        T: Clone,
    {
        if index < 0 || index as usize >= self.len() {
            return self.clone();
        }
        let mut items: Vec<T> = self.iter().cloned().collect();
        items[index as usize] = value;
        Self::new(items)
    }

    /// A copy with `value` inserted so that it ends up at `index`.
    ///
    /// The index is clamped into `[0, len]`, so inserting past the end
    /// appends and a negative index prepends.
    pub fn insert_at(&self, index: i64, value: T) -> Self
    where
        T: Clone,
    {
        let len = self.len();
        let index = index.clamp(0, len as i64) as usize;
        let mut items = Vec::with_capacity(len + 1);
        items.extend(self.iter().take(index).cloned());
        items.push(value);
        items.extend(self.iter().skip(index).cloned());
        Self::new(items)
    }

    /// A copy with the element at `index` removed.
    ///
    /// An out-of-range `index` returns the sequence unchanged.
    pub fn remove_at(&self, index: i64) -> Self
    where
        T: Clone,
    {
        if index < 0 || index as usize >= self.len() {
            return self.clone();
        }
        let mut items: Vec<T> = self.iter().cloned().collect();
        items.remove(index as usize);
        Self::new(items)
    }
}
