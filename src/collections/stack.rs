//! `Stack` - a LIFO container.

use super::ContainerError;

/// A last-in, first-out stack.
///
/// Iteration and [`Stack::as_slice`] run bottom to top, which is the order a
/// path accumulated by pushes is read in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes `value` onto the top.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top element.
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, ContainerError> {
        self.items.pop().ok_or(ContainerError::Empty)
    }

    /// Returns the top element without removing it.
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] if the stack is empty.
    pub fn peek(&self) -> Result<&T, ContainerError> {
        self.items.last().ok_or(ContainerError::Empty)
    }

    /// Mutable access to the top element.
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] if the stack is empty.
    pub fn peek_mut(&mut self) -> Result<&mut T, ContainerError> {
        self.items.last_mut().ok_or(ContainerError::Empty)
    }

    /// The elements from bottom to top.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates bottom to top.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }
}
