//! LIFO stacks: contiguous and linked.

use crate::error::LinearError;

/// Stack over a contiguous buffer whose capacity doubles when full.
///
/// Capacity goes 0, 1, 2, 4, 8, ... Growth moves the stored values, so
/// references into the stack do not survive a `push`.
#[derive(Clone, Debug, Default)]
pub struct ContiguousStack<T> {
    values: Vec<T>,
}

impl<T> ContiguousStack<T> {
    /// An empty stack with no storage.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Push `value` on top, doubling the buffer if it is full.
    pub fn push(&mut self, value: T) {
        if self.values.len() == self.values.capacity() {
            self.double_capacity();
        }
        self.values.push(value);
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> Result<T, LinearError> {
        self.values
            .pop()
            .ok_or_else(|| LinearError::empty("stack", "pop"))
    }

    /// The top value.
    pub fn top(&self) -> Result<&T, LinearError> {
        self.values
            .last()
            .ok_or_else(|| LinearError::empty("stack", "top"))
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Number of values the buffer holds before the next doubling.
    pub fn capacity(&self) -> usize {
        self.values.capacity()
    }

    /// Values from top to bottom.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        self.values.iter().rev()
    }

    fn double_capacity(&mut self) {
        let capacity = self.values.capacity();
        let new_capacity = if capacity == 0 { 1 } else { capacity * 2 };
        self.values.reserve_exact(new_capacity - self.values.len());
    }
}

struct StackNode<T> {
    value: T,
    next: Option<Box<StackNode<T>>>,
}

/// Stack over a chain of boxed nodes. Push and pop never move other values.
pub struct LinkedStack<T> {
    top: Option<Box<StackNode<T>>>,
    len: usize,
}

impl<T> LinkedStack<T> {
    /// An empty stack.
    pub fn new() -> Self {
        Self { top: None, len: 0 }
    }

    /// Push `value` on top.
    pub fn push(&mut self, value: T) {
        let next = self.top.take();
        self.top = Some(Box::new(StackNode { value, next }));
        self.len += 1;
    }

    /// Remove and return the top value.
    pub fn pop(&mut self) -> Result<T, LinearError> {
        let node = self
            .top
            .take()
            .ok_or_else(|| LinearError::empty("stack", "pop"))?;
        let StackNode { value, next } = *node;
        self.top = next;
        self.len -= 1;
        Ok(value)
    }

    /// The top value.
    pub fn top(&self) -> Result<&T, LinearError> {
        self.top
            .as_deref()
            .map(|node| &node.value)
            .ok_or_else(|| LinearError::empty("stack", "top"))
    }

    /// Whether the stack holds no values.
    pub fn is_empty(&self) -> bool {
        self.top.is_none()
    }

    /// Number of values on the stack.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Values from top to bottom.
    pub fn iter(&self) -> LinkedStackIter<'_, T> {
        LinkedStackIter {
            next: self.top.as_deref(),
        }
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    // Unlink node by node; the default recursive drop can overflow the
    // call stack on long chains.
    fn drop(&mut self) {
        let mut cursor = self.top.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}

/// Top-to-bottom iterator over a [`LinkedStack`].
pub struct LinkedStackIter<'a, T> {
    next: Option<&'a StackNode<T>>,
}

impl<'a, T> Iterator for LinkedStackIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next.as_deref();
        Some(&node.value)
    }
}
