//! Last-in-first-out stack.

use crate::core::error::{StackError, StackResult};

/// An unbounded LIFO container.
///
/// `pop` and `peek` return [`StackError::Empty`] instead of an `Option` so
/// that underflow is reported as an error and never mistaken for a value.
/// Failed calls leave the stack untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create an empty stack with room for `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Push an item on top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top item.
    pub fn pop(&mut self) -> StackResult<T> {
        self.items.pop().ok_or(StackError::Empty)
    }

    /// Return the top item without removing it.
    pub fn peek(&self) -> StackResult<&T> {
        self.items.last().ok_or(StackError::Empty)
    }

    /// Number of items currently on the stack.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Whether the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate from the top of the stack to the bottom.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().rev()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Items are pushed in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
