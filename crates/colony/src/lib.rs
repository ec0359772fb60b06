//! Colony: a stable-address pooled container.
//!
//! This is the top-level facade crate that re-exports the public API of the
//! Colony sub-crates. For most users, adding `colony` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use colony::prelude::*;
//!
//! let mut colony = Colony::with_capacity(4)?;
//! let first: Vec<Address> = (0..4).map(|v| colony.insert(v)).collect::<Result<_, _>>()?;
//!
//! // The fifth insert grows a second bucket; earlier addresses still resolve.
//! colony.insert(4)?;
//! assert_eq!(colony.bucket_count(), 2);
//! assert_eq!(colony[first[2]], 2);
//!
//! // A removed slot is the next one reused.
//! colony.remove(first[1])?;
//! let reused = colony.insert(9)?;
//! assert_eq!(reused.slot(), first[1].slot());
//! assert!(colony.get(first[1]).is_none());
//! assert_eq!(colony.values().copied().collect::<Vec<_>>(), [0, 2, 3, 4, 9]);
//! # Ok::<(), ColonyError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`pool`] | `colony-pool` | `Colony`, addresses, config, errors |
//! | [`linear`] | `colony-linear` | Stacks, queues, deque and list |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The stable-address pool (`colony-pool`).
///
/// [`pool::Colony`] and its [`pool::Address`] handles are also available in
/// the [`prelude`].
pub use colony_pool as pool;

/// Stacks, queues, deque and list (`colony-linear`).
///
/// The linked containers keep their nodes in a [`pool::Colony`].
pub use colony_linear as linear;

/// Common imports for typical Colony usage.
///
/// ```rust
/// use colony::prelude::*;
/// ```
pub mod prelude {
    // Pool
    pub use colony_pool::{Address, Colony, ColonyConfig};

    // Linear containers
    pub use colony_linear::{
        CircularQueue, ContiguousStack, Deque, LinkedQueue, LinkedStack, List,
    };

    // Errors
    pub use colony_linear::LinearError;
    pub use colony_pool::{ColonyError, InsertError};
}
