//! Slot indices and stable addresses.
//!
//! A [`SlotIndex`] names a physical slot: which bucket, and which offset
//! within it. An [`Address`] adds the slot's generation at the time the
//! value was inserted, which makes removed addresses detectable in O(1)
//! without a lookup table.

use std::fmt;

/// Physical location of a slot within the colony's bucket chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotIndex {
    /// Index of the bucket, oldest first.
    pub(crate) bucket: u32,
    /// Offset of the slot within its bucket.
    pub(crate) offset: u32,
}

impl SlotIndex {
    pub(crate) fn new(bucket: u32, offset: u32) -> Self {
        Self { bucket, offset }
    }

    /// The bucket this slot lives in.
    pub fn bucket(&self) -> u32 {
        self.bucket
    }

    /// Offset of the slot within its bucket.
    pub fn offset(&self) -> u32 {
        self.offset
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.bucket, self.offset)
    }
}

/// Stable handle to a value stored in a [`Colony`](crate::Colony).
///
/// Returned by [`Colony::insert`](crate::Colony::insert). It keeps
/// resolving to the same value, at the same memory location, until the
/// value is removed. Bucket growth and unrelated removals never move it.
///
/// Addresses are plain `Copy` data and do not borrow the colony. Once the
/// value is removed the slot's generation advances, so the old address is
/// rejected even after the slot is recycled for a new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    pub(crate) slot: SlotIndex,
    pub(crate) generation: u32,
}

impl Address {
    pub(crate) fn new(slot: SlotIndex, generation: u32) -> Self {
        Self { slot, generation }
    }

    /// The physical slot this address refers to.
    ///
    /// Two addresses with the same slot but different generations name the
    /// same storage cell at different points in its life.
    pub fn slot(&self) -> SlotIndex {
        self.slot
    }

    /// The slot generation this address was issued under.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address(slot={}, gen={})", self.slot, self.generation)
    }
}
