//! The colony: stable-address pooled container.
//!
//! [`Colony`] ties together the three mechanisms that share slot storage:
//!
//! 1. **Bucket chain**: storage grows by appending a bucket twice the size
//!    of the newest one. Existing buckets are never reallocated.
//! 2. **Free list**: removed slots are pushed onto a singly-linked list and
//!    reused, most recently freed first, before any new slot is issued.
//! 3. **Live order**: every live slot sits in a doubly-linked list anchored
//!    at the sentinel. Inserts always append at the tail, removal splices in
//!    O(1), and traversal follows this order.
//!
//! ```text
//! Colony
//! ├── Sentinel { first, last, free_head }
//! └── BucketChain
//!     ├── Bucket 0 (cap 4)   [live][free][live][live]
//!     ├── Bucket 1 (cap 8)   [live][live][free][ -- unissued -- ]
//!     └── ...
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

use crate::bucket::BucketChain;
use crate::config::ColonyConfig;
use crate::error::{ColonyError, InsertError};
use crate::handle::{Address, SlotIndex};
use crate::sentinel::Sentinel;
use crate::slot::{Links, Slot};

/// Stable-address pooled container.
///
/// Insertion and removal are O(1); traversal visits live values in the
/// relative order they were inserted. A value never moves while it is in
/// the colony, so the [`Address`] returned by [`insert`](Colony::insert)
/// (and any reference obtained through it) keeps naming the same memory
/// until the value is removed.
///
/// Removed slots are recycled before new storage is used. Storage is
/// never returned to the allocator until the colony is dropped.
pub struct Colony<T> {
    chain: BucketChain<T>,
    sentinel: Sentinel,
    config: ColonyConfig,
}

/// Occupancy counters for a [`Colony`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColonyStats {
    /// Values currently in the live order.
    pub live: usize,
    /// Slots waiting on the free list.
    pub free: usize,
    /// Slots issued at least once (`live + free`).
    pub issued: usize,
    /// Slots reserved across all buckets.
    pub reserved: usize,
    /// Number of buckets allocated.
    pub buckets: usize,
}

impl<T> Colony<T> {
    /// Create an empty colony with the default config.
    ///
    /// No storage is reserved until the first insert.
    pub fn new() -> Self {
        let config = ColonyConfig::default();
        Self {
            chain: BucketChain::lazy(&config),
            sentinel: Sentinel::default(),
            config,
        }
    }

    /// Create a colony whose first bucket holds `capacity` slots.
    ///
    /// Hints below [`ColonyConfig::MIN_BUCKET_CAPACITY`] are raised to it.
    /// The bucket is reserved immediately.
    pub fn with_capacity(capacity: usize) -> Result<Self, ColonyError> {
        Self::with_config(ColonyConfig::new(capacity))
    }

    /// Create a colony from an explicit config, reserving its first bucket.
    ///
    /// Returns `Err(ColonyError)` if the config is invalid or the first
    /// bucket cannot be allocated.
    pub fn with_config(config: ColonyConfig) -> Result<Self, ColonyError> {
        config.validate()?;
        let chain = BucketChain::eager(&config)?;
        Ok(Self {
            chain,
            sentinel: Sentinel::default(),
            config,
        })
    }

    /// Insert a value at the tail of the live order.
    ///
    /// Reuses the most recently freed slot if there is one; otherwise
    /// issues the next slot of the current bucket, growing a new bucket
    /// when the current one is full.
    ///
    /// On failure the colony is unchanged and the value is handed back in
    /// the [`InsertError`].
    pub fn insert(&mut self, value: T) -> Result<Address, InsertError<T>> {
        let links = self.sentinel.tail_links();
        let (index, generation) = match self.sentinel.free_head {
            Some(index) => {
                let slot = self.chain.linked_mut(index);
                let next_free = slot.occupy(value, links);
                let generation = slot.generation();
                self.sentinel.pop_free(next_free);
                tracing::trace!(slot = %index, generation, "colony reused a freed slot");
                (index, generation)
            }
            None => {
                if let Err(err) = self.chain.reserve_one() {
                    return Err(InsertError::new(value, err));
                }
                let index = self.chain.issue(value, links);
                (index, self.chain.linked(index).generation())
            }
        };
        self.sentinel.link_tail(&mut self.chain, index);
        Ok(Address::new(index, generation))
    }

    /// Remove the value at `address` and return it.
    ///
    /// The slot is spliced out of the live order and becomes the head of
    /// the free list, so the next insert lands in exactly this slot.
    ///
    /// Returns `Err(ColonyError::StaleAddress)` if `address` was already
    /// removed or never named a live value of this colony.
    pub fn remove(&mut self, address: Address) -> Result<T, ColonyError> {
        let links = self.live_links(address)?;
        self.sentinel.unlink(&mut self.chain, links);
        let next_free = self.sentinel.push_free(address.slot);
        Ok(self.chain.linked_mut(address.slot).vacate(next_free))
    }

    /// Address of the first value, in live order, matching `predicate`.
    ///
    /// Visits only live values; free and unissued slots are skipped.
    pub fn search<F>(&self, mut predicate: F) -> Option<Address>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter()
            .find(|(_, value)| predicate(value))
            .map(|(address, _)| address)
    }

    /// Whether the live order is empty.
    pub fn is_empty(&self) -> bool {
        self.sentinel.is_empty()
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.sentinel.live
    }

    /// Shared reference to the value at `address`, if it is still live.
    pub fn get(&self, address: Address) -> Option<&T> {
        self.chain
            .slot(address.slot)
            .filter(|slot| slot.is_live_at(address.generation))
            .and_then(Slot::value)
    }

    /// Mutable reference to the value at `address`, if it is still live.
    pub fn get_mut(&mut self, address: Address) -> Option<&mut T> {
        self.chain
            .slot_mut(address.slot)
            .filter(|slot| slot.is_live_at(address.generation))
            .and_then(Slot::value_mut)
    }

    /// Whether `address` names a live value.
    pub fn contains(&self, address: Address) -> bool {
        self.get(address).is_some()
    }

    /// Address of the oldest live value.
    pub fn first(&self) -> Option<Address> {
        self.sentinel.first.map(|index| self.address_of(index))
    }

    /// Address of the newest live value.
    pub fn last(&self) -> Option<Address> {
        self.sentinel.last.map(|index| self.address_of(index))
    }

    /// Address following `address` in live order.
    ///
    /// `None` if `address` is the last value or is not live.
    pub fn next(&self, address: Address) -> Option<Address> {
        let links = self.live_links(address).ok()?;
        links.next.map(|index| self.address_of(index))
    }

    /// Address preceding `address` in live order.
    pub fn prev(&self, address: Address) -> Option<Address> {
        let links = self.live_links(address).ok()?;
        links.prev.map(|index| self.address_of(index))
    }

    /// Iterate over `(address, value)` pairs in live order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: &self.chain,
            next: self.sentinel.first,
            remaining: self.sentinel.live,
        }
    }

    /// Iterate over values in live order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(|(_, value)| value)
    }

    /// Reserve storage so that the next `additional` inserts cannot fail.
    ///
    /// Free slots count towards `additional`. Growth still doubles bucket
    /// by bucket; if a later bucket fails, the buckets grown before it stay
    /// reserved and the colony remains fully usable.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ColonyError> {
        let needed = additional.saturating_sub(self.sentinel.free);
        if needed > self.chain.unissued() {
            tracing::debug!(
                additional,
                free = self.sentinel.free,
                "colony reserving buckets ahead of inserts"
            );
            self.chain.reserve(needed)?;
        }
        Ok(())
    }

    /// Remove and drop every live value, in live order.
    ///
    /// All buckets are kept; every issued slot becomes reusable.
    pub fn clear(&mut self) {
        while let Some(address) = self.first() {
            let _ = self.remove(address);
        }
    }

    /// Keep only the values for which `keep` returns `true`.
    ///
    /// Values are visited in live order; the survivors keep their relative
    /// order and their addresses.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let mut cursor = self.sentinel.first;
        while let Some(index) = cursor {
            let slot = self.chain.linked(index);
            cursor = slot.links().and_then(|links| links.next);
            let drop_it = slot.value().is_some_and(|value| !keep(value));
            if drop_it {
                let address = Address::new(index, slot.generation());
                let _ = self.remove(address);
            }
        }
    }

    /// Total slots reserved across all buckets.
    pub fn capacity(&self) -> usize {
        self.chain.capacity()
    }

    /// Number of buckets allocated so far.
    pub fn bucket_count(&self) -> usize {
        self.chain.bucket_count()
    }

    /// Capacity of each bucket, oldest first.
    pub fn bucket_capacities(&self) -> impl Iterator<Item = usize> + '_ {
        self.chain.bucket_capacities()
    }

    /// Number of freed slots waiting to be reused.
    pub fn free_len(&self) -> usize {
        self.sentinel.free
    }

    /// Occupancy counters.
    pub fn stats(&self) -> ColonyStats {
        ColonyStats {
            live: self.sentinel.live,
            free: self.sentinel.free,
            issued: self.chain.issued(),
            reserved: self.chain.capacity(),
            buckets: self.chain.bucket_count(),
        }
    }

    /// Memory reserved for slot storage, in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.chain.capacity() * std::mem::size_of::<Slot<T>>()
    }

    /// The config this colony was built with.
    pub fn config(&self) -> &ColonyConfig {
        &self.config
    }

    fn address_of(&self, index: SlotIndex) -> Address {
        Address::new(index, self.chain.linked(index).generation())
    }

    fn live_links(&self, address: Address) -> Result<Links, ColonyError> {
        self.chain
            .slot(address.slot)
            .filter(|slot| slot.is_live_at(address.generation))
            .and_then(Slot::links)
            .ok_or(ColonyError::StaleAddress { address })
    }
}

impl<T> Default for Colony<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Colony<T> {
    /// Drops live values in live order; bucket storage is released after.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Index<Address> for Colony<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `address` is not live.
    fn index(&self, address: Address) -> &T {
        self.get(address)
            .unwrap_or_else(|| panic!("stale address: {address}"))
    }
}

impl<T> IndexMut<Address> for Colony<T> {
    fn index_mut(&mut self, address: Address) -> &mut T {
        self.get_mut(address)
            .unwrap_or_else(|| panic!("stale address: {address}"))
    }
}

impl<T: fmt::Debug> fmt::Debug for Colony<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Colony<T> {
    type Item = (Address, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Live-order iterator over a [`Colony`].
///
/// Created by [`Colony::iter`].
pub struct Iter<'a, T> {
    chain: &'a BucketChain<T>,
    next: Option<SlotIndex>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Address, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let slot = self.chain.linked(index);
        self.next = slot.links().and_then(|links| links.next);
        self.remaining = self.remaining.saturating_sub(1);
        let value = slot.value()?;
        Some((Address::new(index, slot.generation()), value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
