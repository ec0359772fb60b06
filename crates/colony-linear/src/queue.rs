//! FIFO queues: circular buffer and colony-linked.

use colony_pool::Colony;

use crate::error::LinearError;

/// Queue over a circular buffer whose capacity doubles when full.
///
/// The live values occupy `len` consecutive positions starting at
/// `begin`, wrapping around the end of the buffer. Doubling copies them
/// into a fresh buffer starting at position 0.
#[derive(Clone, Debug)]
pub struct CircularQueue<T> {
    buffer: Vec<Option<T>>,
    begin: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    /// An empty queue with no storage.
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            begin: 0,
            len: 0,
        }
    }

    /// Append `value` at the rear.
    pub fn enqueue(&mut self, value: T) {
        if self.len == self.buffer.len() {
            self.double_capacity();
        }
        let rear = self.wrap(self.begin + self.len);
        self.buffer[rear] = Some(value);
        self.len += 1;
    }

    /// Remove and return the front value.
    pub fn dequeue(&mut self) -> Result<T, LinearError> {
        if self.is_empty() {
            return Err(LinearError::empty("queue", "dequeue"));
        }
        let value = self.buffer[self.begin]
            .take()
            .expect("positions begin..begin+len are occupied");
        self.begin = self.wrap(self.begin + 1);
        self.len -= 1;
        Ok(value)
    }

    /// The front value.
    pub fn front(&self) -> Result<&T, LinearError> {
        if self.is_empty() {
            return Err(LinearError::empty("queue", "front"));
        }
        self.buffer[self.begin]
            .as_ref()
            .ok_or_else(|| LinearError::empty("queue", "front"))
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of values the buffer holds before the next doubling.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Values from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.buffer[self.wrap(self.begin + i)].as_ref())
    }

    fn wrap(&self, position: usize) -> usize {
        position % self.buffer.len()
    }

    fn double_capacity(&mut self) {
        let capacity = self.buffer.len();
        let new_capacity = if capacity == 0 { 1 } else { capacity * 2 };
        let mut fresh: Vec<Option<T>> = Vec::with_capacity(new_capacity);
        for i in 0..self.len {
            let position = self.wrap(self.begin + i);
            fresh.push(self.buffer[position].take());
        }
        fresh.resize_with(new_capacity, || None);
        self.buffer = fresh;
        self.begin = 0;
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Queue whose values live in a [`Colony`].
///
/// The colony's live order already is FIFO order: every insert appends at
/// the tail, and removal of the head splices in O(1). Values never move
/// while queued.
pub struct LinkedQueue<T> {
    nodes: Colony<T>,
}

impl<T> LinkedQueue<T> {
    /// An empty queue. Node storage is allocated on the first enqueue.
    pub fn new() -> Self {
        Self {
            nodes: Colony::new(),
        }
    }

    /// Append `value` at the rear.
    ///
    /// Fails only if node storage cannot grow.
    pub fn enqueue(&mut self, value: T) -> Result<(), LinearError> {
        self.nodes.insert(value)?;
        Ok(())
    }

    /// Remove and return the front value.
    pub fn dequeue(&mut self) -> Result<T, LinearError> {
        let front = self
            .nodes
            .first()
            .ok_or_else(|| LinearError::empty("queue", "dequeue"))?;
        Ok(self.nodes.remove(front)?)
    }

    /// The front value.
    pub fn front(&self) -> Result<&T, LinearError> {
        self.nodes
            .first()
            .and_then(|front| self.nodes.get(front))
            .ok_or_else(|| LinearError::empty("queue", "front"))
    }

    /// Whether the queue holds no values.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of queued values.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Values from front to rear.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.values()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
