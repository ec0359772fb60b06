//! Double-ended queue over doubly-linked colony nodes.

use colony_pool::{Address, Colony};

use crate::error::LinearError;

struct DequeNode<T> {
    value: T,
    prev: Option<Address>,
    next: Option<Address>,
}

/// Double-ended queue whose nodes live in a [`Colony`].
///
/// Each node links to both neighbours; the `front` and `rear` ends play
/// the role of the sentinel. Values never move while in the deque.
pub struct Deque<T> {
    nodes: Colony<DequeNode<T>>,
    front: Option<Address>,
    rear: Option<Address>,
}

impl<T> Deque<T> {
    /// An empty deque. Node storage is allocated on the first insert.
    pub fn new() -> Self {
        Self {
            nodes: Colony::new(),
            front: None,
            rear: None,
        }
    }

    /// Insert `value` before the current front.
    pub fn insert_front(&mut self, value: T) -> Result<(), LinearError> {
        let node = self.nodes.insert(DequeNode {
            value,
            prev: None,
            next: self.front,
        })?;
        match self.front {
            Some(front) => self.nodes[front].prev = Some(node),
            None => self.rear = Some(node),
        }
        self.front = Some(node);
        Ok(())
    }

    /// Insert `value` after the current rear.
    pub fn insert_rear(&mut self, value: T) -> Result<(), LinearError> {
        let node = self.nodes.insert(DequeNode {
            value,
            prev: self.rear,
            next: None,
        })?;
        match self.rear {
            Some(rear) => self.nodes[rear].next = Some(node),
            None => self.front = Some(node),
        }
        self.rear = Some(node);
        Ok(())
    }

    /// Remove and return the front value.
    pub fn remove_front(&mut self) -> Result<T, LinearError> {
        let front = self
            .front
            .ok_or_else(|| LinearError::empty("deque", "remove_front"))?;
        let node = self.nodes.remove(front)?;
        match node.next {
            Some(next) => self.nodes[next].prev = None,
            None => self.rear = None,
        }
        self.front = node.next;
        Ok(node.value)
    }

    /// Remove and return the rear value.
    pub fn remove_rear(&mut self) -> Result<T, LinearError> {
        let rear = self
            .rear
            .ok_or_else(|| LinearError::empty("deque", "remove_rear"))?;
        let node = self.nodes.remove(rear)?;
        match node.prev {
            Some(prev) => self.nodes[prev].next = None,
            None => self.front = None,
        }
        self.rear = node.prev;
        Ok(node.value)
    }

    /// The front value.
    pub fn front(&self) -> Result<&T, LinearError> {
        self.value_at(self.front)
            .ok_or_else(|| LinearError::empty("deque", "front"))
    }

    /// The rear value.
    pub fn rear(&self) -> Result<&T, LinearError> {
        self.value_at(self.rear)
            .ok_or_else(|| LinearError::empty("deque", "rear"))
    }

    /// Whether the deque holds no values.
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Number of values in the deque.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Values from front to rear.
    pub fn iter(&self) -> DequeIter<'_, T> {
        DequeIter {
            nodes: &self.nodes,
            front: self.front,
            rear: self.rear,
            remaining: self.nodes.len(),
        }
    }

    fn value_at(&self, end: Option<Address>) -> Option<&T> {
        end.and_then(|address| self.nodes.get(address))
            .map(|node| &node.value)
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Front-to-rear iterator over a [`Deque`]; reversible.
pub struct DequeIter<'a, T> {
    nodes: &'a Colony<DequeNode<T>>,
    front: Option<Address>,
    rear: Option<Address>,
    remaining: usize,
}

impl<'a, T> Iterator for DequeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for DequeIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.nodes.get(self.rear?)?;
        self.rear = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for DequeIter<'_, T> {}
