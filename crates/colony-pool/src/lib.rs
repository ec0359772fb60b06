//! Stable-address pooled container for the Colony workspace.
//!
//! A [`Colony`] offers O(1) insertion, O(1) removal by address and
//! forward traversal in insertion order, while guaranteeing that a live
//! value never moves. Its storage is a chain of geometrically growing
//! buckets; removed slots are recycled through an intrusive free list.
//!
//! # Architecture
//!
//! ```text
//! Colony (orchestrator)
//! ├── Sentinel (live-order head/tail + free-list head)
//! └── BucketChain
//!     └── Bucket[] (fixed-capacity Vec<Slot<T>>, capacities 4, 8, 16, ...)
//!         └── Slot = Live { value, prev, next } | Free { next_free }
//! ```
//!
//! # Addresses
//!
//! [`Colony::insert`] returns an [`Address`]: bucket, offset and the
//! slot's generation. Removing a value advances its slot's generation, so
//! an address that outlived its value is reported as
//! [`ColonyError::StaleAddress`] instead of silently naming whatever was
//! inserted into the recycled slot.
//!
//! # Example
//!
//! ```
//! use colony_pool::Colony;
//!
//! let mut colony = Colony::with_capacity(4)?;
//! for word in ["foo", "bar", "baz", "hello", "world"] {
//!     colony.insert(word.to_string())?;
//! }
//!
//! let baz = colony.search(|w| w == "baz").expect("baz was inserted");
//! colony.remove(baz)?;
//! assert_eq!(
//!     colony.values().collect::<Vec<_>>(),
//!     ["foo", "bar", "hello", "world"]
//! );
//!
//! // The freed slot is the first to be reused.
//! let zab = colony.insert("zab".to_string())?;
//! assert_eq!(zab.slot(), baz.slot());
//! # Ok::<(), colony_pool::ColonyError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod bucket;
pub mod config;
pub mod error;
pub mod handle;
pub mod pool;
mod sentinel;
mod slot;

// Public re-exports for the primary API surface.
pub use config::ColonyConfig;
pub use error::{ColonyError, InsertError};
pub use handle::{Address, SlotIndex};
pub use pool::{Colony, ColonyStats, Iter};
