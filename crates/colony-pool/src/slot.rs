//! Storage cells shared by the live order and the free list.
//!
//! A [`Slot`] is either live (holding a value and its two live-order links)
//! or free (holding the next link of the free list). Exactly one role is
//! active at a time; the tag is the [`SlotState`] variant.

use std::mem;

use crate::handle::SlotIndex;

/// Live-order neighbours of a slot. `None` stands for the sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Links {
    pub(crate) prev: Option<SlotIndex>,
    pub(crate) next: Option<SlotIndex>,
}

impl Links {
    pub(crate) fn new(prev: Option<SlotIndex>, next: Option<SlotIndex>) -> Self {
        Self { prev, next }
    }
}

#[derive(Debug)]
pub(crate) enum SlotState<T> {
    /// Part of the live order.
    Live { value: T, links: Links },
    /// On the free list.
    Free { next_free: Option<SlotIndex> },
}

/// One storage cell in a bucket.
#[derive(Debug)]
pub(crate) struct Slot<T> {
    /// Bumped every time the slot leaves the live order.
    generation: u32,
    state: SlotState<T>,
}

impl<T> Slot<T> {
    /// A freshly issued live slot.
    pub(crate) fn live(value: T, links: Links) -> Self {
        Self {
            generation: 0,
            state: SlotState::Live { value, links },
        }
    }

    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }

    pub(crate) fn is_live(&self) -> bool {
        matches!(self.state, SlotState::Live { .. })
    }

    /// Whether this slot is live and was issued under `generation`.
    pub(crate) fn is_live_at(&self, generation: u32) -> bool {
        self.is_live() && self.generation == generation
    }

    pub(crate) fn value(&self) -> Option<&T> {
        match &self.state {
            SlotState::Live { value, .. } => Some(value),
            SlotState::Free { .. } => None,
        }
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            SlotState::Live { value, .. } => Some(value),
            SlotState::Free { .. } => None,
        }
    }

    pub(crate) fn links(&self) -> Option<Links> {
        match &self.state {
            SlotState::Live { links, .. } => Some(*links),
            SlotState::Free { .. } => None,
        }
    }

    /// Mutable live-order links.
    ///
    /// # Panics
    ///
    /// Panics if the slot is free: only live slots are reachable from the
    /// live order.
    pub(crate) fn links_mut(&mut self) -> &mut Links {
        match &mut self.state {
            SlotState::Live { links, .. } => links,
            SlotState::Free { .. } => panic!("live-order link points at a free slot"),
        }
    }

    #[cfg(test)]
    pub(crate) fn next_free(&self) -> Option<SlotIndex> {
        match self.state {
            SlotState::Free { next_free } => next_free,
            SlotState::Live { .. } => None,
        }
    }

    /// Put a value into a free slot, returning the free link it held.
    ///
    /// Both live-order links are rewritten from `links`; whatever the slot
    /// pointed at before it was freed is gone.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already live.
    pub(crate) fn occupy(&mut self, value: T, links: Links) -> Option<SlotIndex> {
        let next_free = match self.state {
            SlotState::Free { next_free } => next_free,
            SlotState::Live { .. } => panic!("free-list head points at a live slot"),
        };
        self.state = SlotState::Live { value, links };
        next_free
    }

    /// Move the value out and put the slot on the free list in front of
    /// `next_free`. Advances the generation.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already free.
    pub(crate) fn vacate(&mut self, next_free: Option<SlotIndex>) -> T {
        match mem::replace(&mut self.state, SlotState::Free { next_free }) {
            SlotState::Live { value, .. } => {
                self.generation = self.generation.wrapping_add(1);
                value
            }
            SlotState::Free { .. } => panic!("vacated a slot that was already free"),
        }
    }
}
