//! Stacks, queues, deques and lists for the Colony workspace.
//!
//! Two families of containers live here:
//!
//! - contiguous ones ([`ContiguousStack`], [`CircularQueue`]) that keep
//!   their values in a buffer whose capacity doubles when full;
//! - linked ones ([`LinkedStack`], [`LinkedQueue`], [`Deque`], [`List`])
//!   whose values never move while stored. All but `LinkedStack` keep
//!   their nodes in a [`colony_pool::Colony`], so node addresses are
//!   checked handles rather than pointers.
//!
//! Every fallible operation reports a [`LinearError`].
//!
//! ```
//! use colony_linear::{Deque, List};
//!
//! let mut deque = Deque::new();
//! deque.insert_rear(2)?;
//! deque.insert_front(1)?;
//! assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 2]);
//!
//! let mut list = List::new();
//! let head = list.push_back("head")?;
//! list.push_back("tail")?;
//! let tail = list.split_after(Some(head))?;
//! assert_eq!(tail.iter().copied().collect::<Vec<_>>(), ["tail"]);
//! # Ok::<(), colony_linear::LinearError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod deque;
pub mod error;
pub mod list;
pub mod queue;
pub mod stack;

pub use deque::{Deque, DequeIter};
pub use error::LinearError;
pub use list::{List, ListIter};
pub use queue::{CircularQueue, LinkedQueue};
pub use stack::{ContiguousStack, LinkedStack, LinkedStackIter};
