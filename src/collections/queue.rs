//! `Queue` - a FIFO adapter over [`Sequence`].

use super::sequence::{Iter, Sequence};
use super::ContainerError;

/// A first-in, first-out queue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue<T> {
    items: Sequence<T>,
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            items: Sequence::new(),
        }
    }

    /// Returns the number of queued elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds `value` at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        self.items.insert_last(value);
    }

    /// Removes and returns the earliest queued element.
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, ContainerError> {
        self.items.remove_first()
    }

    /// Returns the element `dequeue` would return next.
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.items.peek_first()
    }

    /// Iterates front to back without dequeuing.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
