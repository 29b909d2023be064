//! # corral
//!
//! Generic mutable containers for Rust with explicit, observable resizing
//! policies.
//!
//! ## Overview
//!
//! The standard library hides the growth strategy of its collections. This
//! library implements four classic containers whose internal policies are
//! part of their documented behaviour:
//!
//! - **Associative Map**: Separate chaining, rehash past a load factor threshold
//! - **Dynamic Stack**: Geometric growth with a shrink hysteresis gap
//! - **Linked Queue**: O(1) enqueue and dequeue over linked nodes
//! - **Ordered Tree**: Unbalanced binary search tree with traversals
//!
//! ## Feature Flags
//!
//! - `map`: [`AssociativeMap`](collections::AssociativeMap)
//! - `stack`: [`DynamicStack`](collections::DynamicStack)
//! - `queue`: [`LinkedQueue`](collections::LinkedQueue)
//! - `tree`: [`OrderedTree`](collections::OrderedTree)
//! - `full`: Enable all containers (default)
//! - `fxhash`: Hash map keys with `rustc-hash`
//! - `ahash`: Hash map keys with `ahash`
//!
//! ## Logging
//!
//! Structural reallocations (map rehashes, stack grow and shrink) are
//! reported as `tracing` debug events. Install a subscriber to see them.
//!
//! ## Example
//!
//! ```rust
//! use corral::prelude::*;
//!
//! # #[cfg(feature = "stack")]
//! # {
//! let mut stack = DynamicStack::new();
//! stack.push("first");
//! stack.push("second");
//! assert_eq!(stack.pop(), Some("second"));
//! # }
//!
//! # #[cfg(feature = "queue")]
//! # {
//! let mut queue = LinkedQueue::new();
//! queue.enqueue("first");
//! queue.enqueue("second");
//! assert_eq!(queue.dequeue(), Some("first"));
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every container, its configuration and the error type.
///
/// # Usage
///
/// ```rust
/// use corral::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
}

pub mod collections;
