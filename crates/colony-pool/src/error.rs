//! Pool-specific error types.

use std::error::Error;
use std::fmt;

use crate::handle::Address;

/// Errors that can occur during colony operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColonyError {
    /// Bucket storage could not be obtained from the allocator.
    ///
    /// Also reported when the byte size of the bucket would overflow `isize`.
    AllocationFailed {
        /// Number of slots the failed bucket would have held.
        slots: usize,
    },
    /// Growing would push the total reserved slots past the configured ceiling.
    CapacityExceeded {
        /// Total slots the colony would hold after growing.
        requested: usize,
        /// The configured ceiling (`ColonyConfig::max_slots`).
        limit: usize,
    },
    /// An `Address` whose slot has since been removed, or that never
    /// referred to a live slot of this colony.
    StaleAddress {
        /// The rejected address.
        address: Address,
    },
    /// A `ColonyConfig` that cannot be honoured.
    InvalidConfig {
        /// Which constraint was violated.
        reason: &'static str,
    },
}

impl fmt::Display for ColonyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { slots } => {
                write!(f, "bucket allocation failed: could not reserve {slots} slots")
            }
            Self::CapacityExceeded { requested, limit } => {
                write!(
                    f,
                    "colony capacity exceeded: growth to {requested} slots, limit {limit} slots"
                )
            }
            Self::StaleAddress { address } => {
                write!(f, "stale address: {address}")
            }
            Self::InvalidConfig { reason } => {
                write!(f, "invalid colony config: {reason}")
            }
        }
    }
}

impl Error for ColonyError {}

/// Error returned by [`Colony::insert`](crate::Colony::insert).
///
/// Hands the rejected value back so the caller can retry after freeing
/// memory or raising the slot ceiling. The colony is unchanged.
pub struct InsertError<T> {
    value: T,
    error: ColonyError,
}

impl<T> InsertError<T> {
    pub(crate) fn new(value: T, error: ColonyError) -> Self {
        Self { value, error }
    }

    /// The reason the insert was refused.
    pub fn error(&self) -> &ColonyError {
        &self.error
    }

    /// Recover the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Split into the rejected value and the underlying error.
    pub fn into_parts(self) -> (T, ColonyError) {
        (self.value, self.error)
    }
}

// Not derived: `T` need not be `Debug` for the error to be reportable.
impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "insert failed: {}", self.error)
    }
}

impl<T> Error for InsertError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<InsertError<T>> for ColonyError {
    fn from(err: InsertError<T>) -> Self {
        err.error
    }
}
