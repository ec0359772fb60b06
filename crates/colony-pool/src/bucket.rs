//! Fixed-capacity buckets and the growable bucket chain.
//!
//! A [`Bucket`] is a block of slot storage reserved once and filled in
//! order. A [`BucketChain`] holds every bucket the colony has allocated,
//! oldest first, and grows by appending a bucket twice the size of the
//! newest one.

use crate::config::ColonyConfig;
use crate::error::ColonyError;
use crate::handle::SlotIndex;
use crate::slot::{Links, Slot};

/// A single block of slot storage with in-order issuing.
///
/// The backing `Vec` is reserved to full capacity at creation and only ever
/// pushed to while `len < capacity`, so it never reallocates and a value
/// stored in it never moves. Buckets are never freed during the colony's
/// lifetime.
pub(crate) struct Bucket<T> {
    /// Issued slots. `slots.len()` is the issue cursor.
    slots: Vec<Slot<T>>,
    /// Number of slots this bucket may issue.
    capacity: usize,
}

impl<T> Bucket<T> {
    /// Reserve storage for `capacity` slots. No slot is initialised.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, ColonyError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| ColonyError::AllocationFailed { slots: capacity })?;
        Ok(Self { slots, capacity })
    }

    /// Whether every reserved slot has been issued.
    pub(crate) fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Construct `value` in the next unissued slot.
    ///
    /// Returns the offset of the issued slot.
    ///
    /// # Panics
    ///
    /// Panics if the bucket is full.
    pub(crate) fn issue(&mut self, value: T, links: Links) -> u32 {
        assert!(!self.is_full(), "issued from a full bucket");
        let offset = self.slots.len() as u32;
        self.slots.push(Slot::live(value, links));
        offset
    }

    pub(crate) fn slot(&self, offset: u32) -> Option<&Slot<T>> {
        self.slots.get(offset as usize)
    }

    pub(crate) fn slot_mut(&mut self, offset: u32) -> Option<&mut Slot<T>> {
        self.slots.get_mut(offset as usize)
    }

    /// Number of slots issued so far.
    pub(crate) fn issued(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots this bucket can issue in total.
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots not yet issued.
    pub(crate) fn remaining(&self) -> usize {
        self.capacity - self.slots.len()
    }
}

/// Every bucket of a colony, oldest first, plus the issue cursor.
///
/// When the current bucket is full, issuing advances to the next bucket
/// that was reserved ahead of time, or grows the chain by one bucket of
/// twice the newest bucket's capacity.
pub(crate) struct BucketChain<T> {
    buckets: Vec<Bucket<T>>,
    /// Index of the bucket currently being issued from.
    current: usize,
    first_capacity: usize,
    max_slots: usize,
    /// Sum of all bucket capacities.
    reserved: usize,
}

impl<T> BucketChain<T> {
    /// A chain with no buckets yet. The first bucket is allocated on demand.
    pub(crate) fn lazy(config: &ColonyConfig) -> Self {
        Self {
            buckets: Vec::new(),
            current: 0,
            first_capacity: config.first_bucket_capacity(),
            max_slots: config.max_slots,
            reserved: 0,
        }
    }

    /// A chain with its first bucket already reserved.
    pub(crate) fn eager(config: &ColonyConfig) -> Result<Self, ColonyError> {
        let mut chain = Self::lazy(config);
        chain.grow()?;
        Ok(chain)
    }

    /// Capacity the next bucket would have.
    fn next_capacity(&self) -> usize {
        match self.buckets.last() {
            Some(newest) => newest.capacity().saturating_mul(2),
            None => self.first_capacity,
        }
    }

    /// Append one bucket to the chain.
    ///
    /// Either the bucket is appended and usable, or the chain is left
    /// exactly as it was.
    fn grow(&mut self) -> Result<(), ColonyError> {
        let capacity = self.next_capacity();
        let requested = self.reserved.saturating_add(capacity);
        if requested > self.max_slots {
            tracing::warn!(
                requested,
                limit = self.max_slots,
                "colony growth refused by slot ceiling"
            );
            return Err(ColonyError::CapacityExceeded {
                requested,
                limit: self.max_slots,
            });
        }

        // Reserve room in the chain itself first so the push below cannot
        // allocate after the bucket exists.
        self.buckets
            .try_reserve(1)
            .map_err(|_| ColonyError::AllocationFailed { slots: capacity })?;
        let bucket = Bucket::with_capacity(capacity)?;
        self.buckets.push(bucket);
        self.reserved = requested;

        tracing::debug!(
            bucket = self.buckets.len() - 1,
            capacity,
            reserved = self.reserved,
            "colony grew a bucket"
        );
        Ok(())
    }

    /// Number of slots that can still be issued without growing.
    pub(crate) fn unissued(&self) -> usize {
        self.buckets[self.current.min(self.buckets.len())..]
            .iter()
            .map(Bucket::remaining)
            .sum()
    }

    /// Make sure at least one slot can be issued.
    pub(crate) fn reserve_one(&mut self) -> Result<(), ColonyError> {
        let current_has_room = self
            .buckets
            .get(self.current)
            .is_some_and(|bucket| !bucket.is_full());
        if current_has_room || self.unissued() > 0 {
            return Ok(());
        }
        self.grow()
    }

    /// Make sure at least `additional` slots can be issued.
    ///
    /// Buckets grown before a failure stay in the chain; they are valid,
    /// merely unused.
    pub(crate) fn reserve(&mut self, additional: usize) -> Result<(), ColonyError> {
        while self.unissued() < additional {
            self.grow()?;
        }
        Ok(())
    }

    /// Issue the next unused slot.
    ///
    /// # Panics
    ///
    /// Panics unless [`reserve_one`](Self::reserve_one) succeeded since the
    /// last issue.
    pub(crate) fn issue(&mut self, value: T, links: Links) -> SlotIndex {
        while self.buckets[self.current].is_full() {
            self.current += 1;
        }
        let offset = self.buckets[self.current].issue(value, links);
        SlotIndex::new(self.current as u32, offset)
    }

    pub(crate) fn slot(&self, index: SlotIndex) -> Option<&Slot<T>> {
        self.buckets.get(index.bucket as usize)?.slot(index.offset)
    }

    pub(crate) fn slot_mut(&mut self, index: SlotIndex) -> Option<&mut Slot<T>> {
        self.buckets
            .get_mut(index.bucket as usize)?
            .slot_mut(index.offset)
    }

    /// Slot reached by following a live-order or free-list link.
    ///
    /// # Panics
    ///
    /// Panics if `index` was never issued; links only ever name issued slots.
    pub(crate) fn linked(&self, index: SlotIndex) -> &Slot<T> {
        self.slot(index)
            .unwrap_or_else(|| panic!("link to unissued slot {index}"))
    }

    /// Mutable counterpart of [`linked`](Self::linked).
    pub(crate) fn linked_mut(&mut self, index: SlotIndex) -> &mut Slot<T> {
        self.slot_mut(index)
            .unwrap_or_else(|| panic!("link to unissued slot {index}"))
    }

    pub(crate) fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Capacities of every bucket, oldest first.
    pub(crate) fn bucket_capacities(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(Bucket::capacity)
    }

    /// Total reserved slots across all buckets.
    pub(crate) fn capacity(&self) -> usize {
        self.reserved
    }

    /// Total slots issued at least once.
    pub(crate) fn issued(&self) -> usize {
        self.buckets.iter().map(Bucket::issued).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(initial: usize) -> BucketChain<u32> {
        BucketChain::eager(&ColonyConfig::new(initial)).unwrap()
    }

    fn fill(chain: &mut BucketChain<u32>, count: u32) -> Vec<SlotIndex> {
        (0..count)
            .map(|v| {
                chain.reserve_one().unwrap();
                chain.issue(v, Links::default())
            })
            .collect()
    }

    #[test]
    fn bucket_issues_in_order_until_full() {
        let mut bucket = Bucket::with_capacity(2).unwrap();
        assert_eq!(bucket.issue(10u32, Links::default()), 0);
        assert_eq!(bucket.issue(11u32, Links::default()), 1);
        assert!(bucket.is_full());
        assert_eq!(bucket.remaining(), 0);
        assert_eq!(bucket.slot(1).and_then(Slot::value), Some(&11));
    }

    #[test]
    #[should_panic(expected = "full bucket")]
    fn issuing_from_full_bucket_panics() {
        let mut bucket = Bucket::with_capacity(1).unwrap();
        bucket.issue(0u8, Links::default());
        bucket.issue(1u8, Links::default());
    }

    #[test]
    fn bucket_never_reallocates() {
        let mut bucket = Bucket::with_capacity(4).unwrap();
        bucket.issue(1u64, Links::default());
        let first = bucket.slot(0).and_then(Slot::value).unwrap() as *const u64;
        for v in 2..=4 {
            bucket.issue(v, Links::default());
        }
        let after = bucket.slot(0).and_then(Slot::value).unwrap() as *const u64;
        assert_eq!(first, after);
    }

    #[test]
    fn lazy_chain_has_no_buckets() {
        let chain = BucketChain::<u32>::lazy(&ColonyConfig::default());
        assert_eq!(chain.bucket_count(), 0);
        assert_eq!(chain.capacity(), 0);
        assert_eq!(chain.unissued(), 0);
    }

    #[test]
    fn chain_doubles_on_overflow() {
        let mut chain = chain(4);
        let slots = fill(&mut chain, 5);
        assert_eq!(chain.bucket_count(), 2);
        assert_eq!(chain.bucket_capacities().collect::<Vec<_>>(), vec![4, 8]);
        assert_eq!(slots[4], SlotIndex::new(1, 0));
        assert_eq!(chain.capacity(), 12);
        assert_eq!(chain.issued(), 5);
    }

    #[test]
    fn reserve_grows_ahead_and_issue_walks_forward() {
        let mut chain = chain(4);
        chain.reserve(20).unwrap();
        // 4 + 8 + 16 = 28 slots is the first total covering 20.
        assert_eq!(chain.bucket_capacities().collect::<Vec<_>>(), vec![4, 8, 16]);
        let slots = fill(&mut chain, 13);
        assert_eq!(slots[3], SlotIndex::new(0, 3));
        assert_eq!(slots[4], SlotIndex::new(1, 0));
        assert_eq!(slots[12], SlotIndex::new(2, 0));
        assert_eq!(chain.bucket_count(), 3);
    }

    #[test]
    fn ceiling_refuses_growth_atomically() {
        let config = ColonyConfig::new(4).with_max_slots(10);
        let mut chain = BucketChain::<u32>::eager(&config).unwrap();
        fill(&mut chain, 4);
        let err = chain.reserve_one().unwrap_err();
        assert_eq!(
            err,
            ColonyError::CapacityExceeded {
                requested: 12,
                limit: 10,
            }
        );
        assert_eq!(chain.bucket_count(), 1);
        assert_eq!(chain.capacity(), 4);
    }

    #[test]
    fn oversized_bucket_reports_allocation_failure() {
        let err = Bucket::<u64>::with_capacity(usize::MAX).err();
        assert_eq!(err, Some(ColonyError::AllocationFailed { slots: usize::MAX }));
    }

    #[test]
    fn unissued_slot_lookup_is_none() {
        let chain = chain(4);
        assert!(chain.slot(SlotIndex::new(0, 0)).is_none());
        assert!(chain.slot(SlotIndex::new(7, 0)).is_none());
    }
}
