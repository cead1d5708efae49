//! `Sequence` - an arena-backed singly linked list.
//!
//! Nodes live in a `Vec` of slots and link to each other by index, so the list
//! never hands out pointers into its own storage. Removed slots are threaded
//! onto a free list and reused by later insertions.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `insert_last` | \(O(1)\) amortized | Reuses a free slot when one exists |
//! | `remove_first` | \(O(1)\) | Pushes the slot onto the free list |
//! | `peek_first` / `peek_last` | \(O(1)\) | |
//! | `iter` | \(O(n)\) | Fresh cursor per call |

use core::fmt;
use core::iter::FusedIterator;

use super::ContainerError;

/// A slot in the backing arena.
#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { value: T, next: Option<usize> },
    Free(Option<usize>), // Next free slot index
}

/// An ordered, append-at-end sequence.
///
/// Iteration always walks from the first inserted element that is still
/// present to the last one. Every call to [`Sequence::iter`] starts a new,
/// independent cursor.
#[derive(Clone)]
pub struct Sequence<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_head: Option<usize>,
    len: usize,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free_head: None,
            len: 0,
        }
    }

    /// Creates an empty sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocates a slot for `value`, reusing a free one if possible.
    fn alloc(&mut self, value: T) -> usize {
        let occupied = Slot::Occupied { value, next: None };
        match self.free_head {
            Some(idx) => {
                let slot = core::mem::replace(&mut self.slots[idx], occupied);
                self.free_head = match slot {
                    Slot::Free(next_free) => next_free,
                    Slot::Occupied { .. } => panic!("Corrupted free list"),
                };
                idx
            }
            None => {
                self.slots.push(occupied);
                self.slots.len() - 1
            }
        }
    }

    /// Appends `value` after the current last element.
    pub fn insert_last(&mut self, value: T) {
        let new_idx = self.alloc(value);

        match self.tail {
            Some(tail_idx) => {
                if let Slot::Occupied { next, .. } = &mut self.slots[tail_idx] {
                    *next = Some(new_idx);
                }
            }
            None => self.head = Some(new_idx),
        }

        self.tail = Some(new_idx);
        self.len += 1;
    }

    /// Returns the first element without removing it.
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] if the sequence is empty.
    pub fn peek_first(&self) -> Result<&T, ContainerError> {
        self.head
            .and_then(|idx| self.value_at(idx))
            .ok_or(ContainerError::Empty)
    }

    /// Returns the last element without removing it.
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] if the sequence is empty.
    pub fn peek_last(&self) -> Result<&T, ContainerError> {
        self.tail
            .and_then(|idx| self.value_at(idx))
            .ok_or(ContainerError::Empty)
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] if the sequence is empty.
    pub fn remove_first(&mut self) -> Result<T, ContainerError> {
        let head_idx = self.head.ok_or(ContainerError::Empty)?;

        let slot = core::mem::replace(&mut self.slots[head_idx], Slot::Free(self.free_head));
        let (value, next) = match slot {
            Slot::Occupied { value, next } => (value, next),
            Slot::Free(_) => panic!("Corrupted list: head points to free slot"),
        };

        self.free_head = Some(head_idx);
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(value)
    }

    /// Removes every element, keeping the allocated slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free_head = None;
        self.len = 0;
    }

    /// Returns a fresh cursor over the elements in insertion order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            slots: &self.slots,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Returns `true` if any element equals `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|v| v == value)
    }

    fn value_at(&self, idx: usize) -> Option<&T> {
        match self.slots.get(idx)? {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Free(_) => None,
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_last(value);
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

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward cursor over a [`Sequence`].
pub struct Iter<'a, T> {
    slots: &'a [Slot<T>],
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.current?;
        match self.slots.get(idx)? {
            Slot::Occupied { value, next } => {
                self.current = *next;
                self.remaining -= 1;
                Some(value)
            }
            Slot::Free(_) => None, // Should not happen for valid list traversal
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

// Derived `Clone` would require `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            current: self.current,
            remaining: self.remaining,
        }
    }
}
