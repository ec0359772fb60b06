//! Error types for the linear containers.

use std::error::Error;
use std::fmt;

use colony_pool::{ColonyError, InsertError};

/// Errors from stack, queue, deque and list operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinearError {
    /// The operation needs an element but the container is empty.
    Empty {
        /// Which container was empty (`"stack"`, `"queue"`, `"deque"`).
        container: &'static str,
        /// The refused operation.
        operation: &'static str,
    },
    /// `remove_after` was given the last position of a list.
    PastEnd,
    /// A list range whose end does not follow its start.
    InvalidRange,
    /// The node storage refused the operation: allocation failure, slot
    /// ceiling, or a node address that is no longer live.
    Storage(ColonyError),
}

impl LinearError {
    pub(crate) fn empty(container: &'static str, operation: &'static str) -> Self {
        Self::Empty {
            container,
            operation,
        }
    }
}

impl fmt::Display for LinearError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty {
                container,
                operation,
            } => write!(f, "{operation} on empty {container}"),
            Self::PastEnd => write!(f, "cannot remove past the end of the list"),
            Self::InvalidRange => write!(f, "range end does not follow range start"),
            Self::Storage(err) => write!(f, "node storage: {err}"),
        }
    }
}

impl Error for LinearError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ColonyError> for LinearError {
    fn from(err: ColonyError) -> Self {
        Self::Storage(err)
    }
}

impl<T> From<InsertError<T>> for LinearError {
    fn from(err: InsertError<T>) -> Self {
        Self::Storage(err.into())
    }
}
