use std::{fmt::Debug, slice::Iter};

#[cfg(feature = "tracing")]
use tracing::{instrument, Level};

use crate::error::{Error, Overflow};

/// Element limit used by [`Stack::new`] and [`Stack::default`].
pub const DEFAULT_CAPACITY: usize = 2048;

/// LIFO storage with a hard upper bound on the number of elements.
///
/// The bottom of the stack is the first element of the backing buffer and the top is the
/// last one. The buffer grows on demand, so `capacity` is a limit and not a preallocation.
#[derive(Clone)]
pub struct Stack<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: vec![],
            capacity,
        }
    }

    /// Builds a stack from `data` where the last element becomes the top.
    pub fn from_vec(capacity: usize, data: Vec<T>) -> Result<Self, Error> {
        if data.len() > capacity {
            return Err(Error::Overflow { capacity });
        }

        Ok(Self { data, capacity })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.data.len()
    }

    /// Pushes `value` on top of the stack.
    ///
    /// Fails with [`Error::Overflow`] once the stack holds `capacity` elements, in which case
    /// the stack is left untouched and `value` is dropped. Use [`Stack::try_push`] to get the
    /// value back.
    #[cfg_attr(feature = "tracing", instrument(level = Level::TRACE, skip_all, fields(len = self.data.len(), capacity = self.capacity), ret))]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        Ok(self.try_push(value)?)
    }

    /// Like [`Stack::push`], but a rejected value is returned inside the error.
    pub fn try_push(&mut self, value: T) -> Result<(), Overflow<T>> {
        if self.is_full() {
            #[cfg(feature = "tracing")]
            tracing::warn!(capacity = self.capacity, "stack grew too large");

            return Err(Overflow {
                capacity: self.capacity,
                value,
            });
        }

        self.data.push(value);
        Ok(())
    }

    #[cfg_attr(feature = "tracing", instrument(level = Level::TRACE, skip_all, fields(len = self.data.len())))]
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Pops the top element, falling back to `T::default()` on an empty stack.
    pub fn pop_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.pop().unwrap_or_default()
    }

    pub fn peek(&self) -> Result<&T, Error> {
        self.data.last().ok_or(Error::Empty)
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, Error> {
        self.data.last_mut().ok_or(Error::Empty)
    }

    /// Pops the two top elements as `(lhs, rhs)`, where `rhs` was on top.
    pub fn operands(&mut self) -> Result<(T, T), Error> {
        let len = self.data.len();
        let [lhs, rhs]: [T; 2] = self
            .split_to_vec(2)?
            .try_into()
            .map_err(|_| Error::Underflow { expected: 2, len })?;

        Ok((lhs, rhs))
    }

    /// Removes the top `n` elements and returns them bottom to top.
    pub fn split_to_vec(&mut self, n: usize) -> Result<Vec<T>, Error> {
        self.ensure_len(n)?;

        let at = self.data.len() - n;
        Ok(self.data.split_off(at))
    }

    /// Pushes every element of `iter` in order, stopping at the first overflow.
    pub fn extend_from(&mut self, iter: impl IntoIterator<Item = T>) -> Result<(), Error> {
        for value in iter {
            self.push(value)?;
        }

        Ok(())
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn ensure_len(&self, expected: usize) -> Result<(), Error> {
        if self.data.len() < expected {
            return Err(Error::Underflow {
                expected,
                len: self.data.len(),
            });
        }

        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}
