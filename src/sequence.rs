use std::{
    fmt,
    ops::{Index, IndexMut},
    slice,
};

use crate::error::SequenceError;

/// A growable array that tracks its own capacity policy.
///
/// After every [`push`](Self::push) at least half of the capacity is free:
/// once the length passes half the capacity the buffer is reallocated to
/// `capacity + len + 1`. Cloning copies the live elements into a fresh
/// buffer of the same capacity.
pub struct Sequence<T> {
    buf: Vec<T>,
    capacity: usize,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            capacity: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Like [`with_capacity`](Self::with_capacity) for callers holding a
    /// signed count. Negative counts are rejected rather than clamped.
    pub fn try_with_capacity(capacity: i64) -> Result<Self, SequenceError> {
        let capacity =
            usize::try_from(capacity).map_err(|_| SequenceError::NegativeCapacity(capacity))?;
        Ok(Self::with_capacity(capacity))
    }

    pub fn push(&mut self, value: T) {
        if self.capacity == 0 {
            self.reallocate(1);
        }

        self.buf.push(value);

        let len = self.buf.len();
        if len > self.capacity / 2 {
            self.reallocate(self.capacity + len + 1);
        }
    }

    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.buf.len());
        let mut buf = Vec::with_capacity(capacity);
        buf.append(&mut self.buf);
        self.buf = buf;
        self.capacity = capacity;
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    /// Replaces the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, SequenceError> {
        let len = self.len();
        match self.buf.get_mut(index) {
            Some(slot) => Ok(std::mem::replace(slot, value)),
            None => Err(SequenceError::OutOfBounds { index, len }),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every element and releases the buffer.
    pub fn clear(&mut self) {
        self.buf = Vec::new();
        self.capacity = 0;
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.buf.swap(a, b)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buf.iter()
    }

    pub fn last(&self) -> Option<&T> {
        self.buf.last()
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), SequenceError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(SequenceError::OutOfBounds {
                index,
                len: self.len(),
            })
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.capacity);
        buf.extend(self.buf.iter().cloned());
        Self {
            buf,
            capacity: self.capacity,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.buf.iter()).finish()
    }
}

// only live elements take part; capacity is an allocation detail
impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Sequence<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.buf[..] == other[..]
    }
}

impl<T> Index<usize> for Sequence<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let len = self.len();
        match self.buf.get(index) {
            Some(value) => value,
            None => panic!("index {index} out of bounds for sequence of length {len}"),
        }
    }
}

impl<T> IndexMut<usize> for Sequence<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.len();
        match self.buf.get_mut(index) {
            Some(value) => value,
            None => panic!("index {index} out of bounds for sequence of length {len}"),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value)
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

impl<'s, T> IntoIterator for &'s Sequence<T> {
    type Item = &'s T;

    type IntoIter = slice::Iter<'s, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}
