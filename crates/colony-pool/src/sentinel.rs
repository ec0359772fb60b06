//! The sentinel: anchor of the live order and head of the free list.
//!
//! The live order is a doubly-linked list threaded through the `Links` of
//! live slots. A link of `None` means "the sentinel", which makes the list
//! circular in effect: the sentinel's `first`/`last` are its next/previous.
//! The free list is a singly-linked list threaded through free slots, with
//! its head kept here as well.

use crate::bucket::BucketChain;
use crate::handle::SlotIndex;
use crate::slot::Links;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Sentinel {
    /// Head of the live order.
    pub(crate) first: Option<SlotIndex>,
    /// Tail of the live order.
    pub(crate) last: Option<SlotIndex>,
    /// Most recently freed slot.
    pub(crate) free_head: Option<SlotIndex>,
    /// Number of live slots.
    pub(crate) live: usize,
    /// Number of slots on the free list.
    pub(crate) free: usize,
}

impl Sentinel {
    pub(crate) fn is_empty(&self) -> bool {
        self.first.is_none()
    }

    /// Links for a slot about to be appended at the tail.
    pub(crate) fn tail_links(&self) -> Links {
        Links::new(self.last, None)
    }

    /// Splice `index` in after the current tail.
    ///
    /// The slot's own links must already be [`tail_links`](Self::tail_links).
    pub(crate) fn link_tail<T>(&mut self, chain: &mut BucketChain<T>, index: SlotIndex) {
        match self.last {
            Some(tail) => chain.linked_mut(tail).links_mut().next = Some(index),
            None => self.first = Some(index),
        }
        self.last = Some(index);
        self.live += 1;
    }

    /// Splice a slot out of the live order by joining its neighbours.
    pub(crate) fn unlink<T>(&mut self, chain: &mut BucketChain<T>, links: Links) {
        match links.prev {
            Some(prev) => chain.linked_mut(prev).links_mut().next = links.next,
            None => self.first = links.next,
        }
        match links.next {
            Some(next) => chain.linked_mut(next).links_mut().prev = links.prev,
            None => self.last = links.prev,
        }
        self.live -= 1;
    }

    /// Make `index` the new free-list head, returning the previous head.
    pub(crate) fn push_free(&mut self, index: SlotIndex) -> Option<SlotIndex> {
        self.free += 1;
        self.free_head.replace(index)
    }

    /// Replace the free-list head after its slot was taken.
    pub(crate) fn pop_free(&mut self, next_free: Option<SlotIndex>) {
        self.free -= 1;
        self.free_head = next_free;
    }
}
