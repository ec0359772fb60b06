//! Test utilities and fixtures for Colony development.
//!
//! Provides a drop-tracking value type ([`DropLog`] / [`Tracked`]) for
//! leak and drop-order assertions, plus deterministic workload fixtures in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{churn_script, ChurnOp, SCENARIO_WORDS};

use std::cell::RefCell;
use std::rc::Rc;

/// Shared record of which [`Tracked`] values have been dropped, in order.
///
/// Clones share the same record.
#[derive(Clone, Debug, Default)]
pub struct DropLog {
    dropped: Rc<RefCell<Vec<u32>>>,
}

impl DropLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a value that records `id` here when dropped.
    pub fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            log: self.clone(),
        }
    }

    /// Ids dropped so far, in drop order.
    pub fn dropped(&self) -> Vec<u32> {
        self.dropped.borrow().clone()
    }

    /// Total number of drops recorded.
    pub fn count(&self) -> usize {
        self.dropped.borrow().len()
    }

    /// Number of times `id` was dropped. Anything above 1 is a double drop.
    pub fn count_of(&self, id: u32) -> usize {
        self.dropped.borrow().iter().filter(|&&d| d == id).count()
    }
}

/// A value that reports its own drop to a [`DropLog`].
#[derive(Debug)]
pub struct Tracked {
    id: u32,
    log: DropLog,
}

impl Tracked {
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.dropped.borrow_mut().push(self.id);
    }
}
