//! Singly-linked list with splice, split and concatenate.
//!
//! Nodes live in the list's own [`Colony`], so a node's [`Address`] is
//! stable while it stays in the list. A *position* is an
//! `Option<Address>`: `None` stands for the place before the first node,
//! `Some(node)` for the place right after `node`.
//!
//! Each list owns its node storage, so operations that move nodes into
//! another list (`graft_after`, `concatenate`, `split_after`,
//! `extract_between`) are O(moved) and hand out fresh addresses for the
//! moved nodes. They reserve the destination's storage before moving
//! anything, so a failure leaves both lists untouched.

use std::fmt;

use colony_pool::{Address, Colony, ColonyError};

use crate::error::LinearError;

struct ListNode<T> {
    value: T,
    next: Option<Address>,
}

/// Singly-linked list whose nodes live in a [`Colony`].
pub struct List<T> {
    nodes: Colony<ListNode<T>>,
    head: Option<Address>,
    last: Option<Address>,
}

impl<T> List<T> {
    /// An empty list. Node storage is allocated on the first insert.
    pub fn new() -> Self {
        Self {
            nodes: Colony::new(),
            head: None,
            last: None,
        }
    }

    /// Insert `value` right after `position` and return the new node.
    pub fn insert_after(
        &mut self,
        position: Option<Address>,
        value: T,
    ) -> Result<Address, LinearError> {
        let next = self.successor(position)?;
        let node = self.nodes.insert(ListNode { value, next })?;
        self.set_successor(position, Some(node));
        if next.is_none() {
            self.last = Some(node);
        }
        Ok(node)
    }

    /// Remove the node following `position` and return its value.
    ///
    /// Returns [`LinearError::PastEnd`] if nothing follows `position`.
    pub fn remove_after(&mut self, position: Option<Address>) -> Result<T, LinearError> {
        let target = self.successor(position)?.ok_or(LinearError::PastEnd)?;
        let node = self.nodes.remove(target)?;
        self.set_successor(position, node.next);
        if node.next.is_none() {
            self.last = position;
        }
        Ok(node.value)
    }

    /// Insert `value` before the first node.
    pub fn push_front(&mut self, value: T) -> Result<Address, LinearError> {
        self.insert_after(None, value)
    }

    /// Insert `value` after the last node.
    pub fn push_back(&mut self, value: T) -> Result<Address, LinearError> {
        self.insert_after(self.last, value)
    }

    /// Remove and return the first value.
    pub fn pop_front(&mut self) -> Option<T> {
        self.remove_after(None).ok()
    }

    /// Move every node of `other` into this list, right after `position`.
    ///
    /// `other` is left empty. Returns the position after the grafted run:
    /// its last node, or `position` itself when `other` was empty.
    pub fn graft_after(
        &mut self,
        position: Option<Address>,
        other: &mut List<T>,
    ) -> Result<Option<Address>, LinearError> {
        let next = self.successor(position)?;
        if other.is_empty() {
            return Ok(position);
        }
        self.nodes.reserve(other.len())?;

        let mut cursor = position;
        while let Some(value) = other.pop_front() {
            let node = self.nodes.insert(ListNode { value, next })?;
            self.set_successor(cursor, Some(node));
            cursor = Some(node);
        }
        if next.is_none() {
            self.last = cursor;
        }
        Ok(cursor)
    }

    /// Append every node of `other`, leaving it empty.
    ///
    /// Returns the new last node.
    pub fn concatenate(&mut self, other: &mut List<T>) -> Result<Option<Address>, LinearError> {
        self.graft_after(self.last, other)
    }

    /// Detach every node after `position` into a new list.
    pub fn split_after(&mut self, position: Option<Address>) -> Result<List<T>, LinearError> {
        let moved = self.run_length(position, None)?;
        self.detach(position, moved)
    }

    /// Detach the nodes in the range `(prev, last]` into a new list.
    ///
    /// `prev == last` names an empty range. Returns
    /// [`LinearError::InvalidRange`] if `last` does not follow `prev`.
    pub fn extract_between(
        &mut self,
        prev: Option<Address>,
        last: Option<Address>,
    ) -> Result<List<T>, LinearError> {
        if prev == last {
            self.successor(prev)?;
            return Ok(List::new());
        }
        let last = last.ok_or(LinearError::InvalidRange)?;
        let moved = self.run_length(prev, Some(last))?;
        self.detach(prev, moved)
    }

    /// Address of the first node whose value matches `predicate`.
    pub fn search<F>(&self, mut predicate: F) -> Option<Address>
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.head;
        while let Some(address) = cursor {
            let node = self.nodes.get(address)?;
            if predicate(&node.value) {
                return Some(address);
            }
            cursor = node.next;
        }
        None
    }

    /// Address of the first node.
    pub fn first(&self) -> Option<Address> {
        self.head
    }

    /// Address of the last node.
    pub fn last(&self) -> Option<Address> {
        self.last
    }

    /// Address of the node following `node`.
    pub fn next(&self, node: Address) -> Option<Address> {
        self.nodes.get(node).and_then(|node| node.next)
    }

    /// The value stored at `node`, if it is in this list.
    pub fn get(&self, node: Address) -> Option<&T> {
        self.nodes.get(node).map(|node| &node.value)
    }

    /// Mutable access to the value stored at `node`.
    pub fn get_mut(&mut self, node: Address) -> Option<&mut T> {
        self.nodes.get_mut(node).map(|node| &mut node.value)
    }

    /// Whether the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Values in list order.
    pub fn iter(&self) -> ListIter<'_, T> {
        ListIter {
            nodes: &self.nodes,
            next: self.head,
        }
    }

    fn successor(&self, position: Option<Address>) -> Result<Option<Address>, LinearError> {
        match position {
            None => Ok(self.head),
            Some(address) => self
                .nodes
                .get(address)
                .map(|node| node.next)
                .ok_or(LinearError::Storage(ColonyError::StaleAddress { address })),
        }
    }

    fn set_successor(&mut self, position: Option<Address>, next: Option<Address>) {
        match position {
            None => self.head = next,
            Some(address) => self.nodes[address].next = next,
        }
    }

    // Nodes after `position` up to and including `until`, or to the end
    // of the list when `until` is `None`.
    fn run_length(
        &self,
        position: Option<Address>,
        until: Option<Address>,
    ) -> Result<usize, LinearError> {
        let mut count = 0;
        let mut cursor = self.successor(position)?;
        while let Some(address) = cursor {
            count += 1;
            if Some(address) == until {
                return Ok(count);
            }
            cursor = self.next(address);
        }
        match until {
            None => Ok(count),
            Some(_) => Err(LinearError::InvalidRange),
        }
    }

    fn detach(&mut self, position: Option<Address>, moved: usize) -> Result<List<T>, LinearError> {
        let mut detached = List::new();
        detached.nodes.reserve(moved)?;
        for _ in 0..moved {
            let value = self.remove_after(position)?;
            detached.push_back(value)?;
        }
        Ok(detached)
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over the values of a [`List`], first to last.
pub struct ListIter<'a, T> {
    nodes: &'a Colony<ListNode<T>>,
    next: Option<Address>,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.next?)?;
        self.next = node.next;
        Some(&node.value)
    }
}
