//! Mutable in-memory containers.
//!
//! This module provides four independent, single-threaded containers:
//!
//! - [`AssociativeMap`]: Hash map with chained buckets and load-factor rehashing
//! - [`DynamicStack`]: LIFO stack with hysteresis grow/shrink
//! - [`LinkedQueue`]: FIFO queue over singly-linked nodes
//! - [`OrderedTree`]: Unbalanced binary search tree
//!
//! Every container owns its elements exclusively. Absent results are
//! reported as [`Option`], and the few genuinely fallible operations return
//! [`CollectionError`].
//!
//! # Examples
//!
//! ## `AssociativeMap`
//!
//! ```rust
//! # #[cfg(feature = "map")]
//! # {
//! use corral::collections::AssociativeMap;
//!
//! let mut map = AssociativeMap::new();
//! assert_eq!(map.put("apple", 1), None);
//! assert_eq!(map.put("apple", 2), Some(1));
//! assert_eq!(map.get("apple"), Some(&2));
//! assert_eq!(map.remove("apple"), Some(2));
//! assert!(map.is_empty());
//! # }
//! ```
//!
//! ## `DynamicStack`
//!
//! ```rust
//! # #[cfg(feature = "stack")]
//! # {
//! use corral::collections::DynamicStack;
//!
//! let mut stack: DynamicStack<i32> = (0..17).collect();
//! assert_eq!(stack.capacity(), 32); // grew once
//!
//! while stack.len() > 8 {
//!     stack.pop();
//! }
//! assert_eq!(stack.capacity(), 16); // shrank back to the floor
//! # }
//! ```
//!
//! ## `LinkedQueue`
//!
//! ```rust
//! # #[cfg(feature = "queue")]
//! # {
//! use corral::collections::LinkedQueue;
//!
//! let mut queue: LinkedQueue<&str> = ["a", "b"].into_iter().collect();
//! queue.enqueue("c");
//! assert_eq!(queue.dequeue(), Some("a"));
//! assert_eq!(queue.to_string(), "LinkedQueue[b -> c]");
//! # }
//! ```
//!
//! ## `OrderedTree`
//!
//! ```rust
//! # #[cfg(feature = "tree")]
//! # {
//! use corral::collections::{OrderedTree, TraversalOrder};
//!
//! let tree: OrderedTree<i32> = [5, 3, 7].into_iter().collect();
//! assert_eq!(tree.min(), Ok(&3));
//! assert_eq!(tree.traverse(TraversalOrder::PostOrder), vec![&3, &7, &5]);
//! # }
//! ```

mod error;
#[cfg(feature = "map")]
mod hashing;

#[cfg(feature = "map")]
mod associative_map;
#[cfg(feature = "stack")]
mod dynamic_stack;
#[cfg(feature = "queue")]
mod linked_queue;
#[cfg(feature = "tree")]
mod ordered_tree;

pub use error::CollectionError;

#[cfg(feature = "map")]
pub use associative_map::AssociativeMap;
#[cfg(feature = "map")]
pub use associative_map::AssociativeMapIntoIterator;
#[cfg(feature = "map")]
pub use associative_map::AssociativeMapIterMut;
#[cfg(feature = "map")]
pub use associative_map::AssociativeMapIterator;
#[cfg(feature = "map")]
pub use associative_map::DEFAULT_BUCKET_COUNT;
#[cfg(feature = "map")]
pub use associative_map::DEFAULT_LOAD_FACTOR_THRESHOLD;
#[cfg(feature = "map")]
pub use associative_map::MapConfig;
#[cfg(feature = "map")]
pub use hashing::DefaultHashBuilder;

#[cfg(feature = "stack")]
pub use dynamic_stack::DEFAULT_GROWTH_RATIO;
#[cfg(feature = "stack")]
pub use dynamic_stack::DEFAULT_MINIMUM_CAPACITY;
#[cfg(feature = "stack")]
pub use dynamic_stack::DEFAULT_SHRINK_THRESHOLD;
#[cfg(feature = "stack")]
pub use dynamic_stack::DynamicStack;
#[cfg(feature = "stack")]
pub use dynamic_stack::DynamicStackIntoIterator;
#[cfg(feature = "stack")]
pub use dynamic_stack::DynamicStackIterator;
#[cfg(feature = "stack")]
pub use dynamic_stack::StackConfig;

#[cfg(feature = "queue")]
pub use linked_queue::LinkedQueue;
#[cfg(feature = "queue")]
pub use linked_queue::LinkedQueueIntoIterator;
#[cfg(feature = "queue")]
pub use linked_queue::LinkedQueueIterator;

#[cfg(feature = "tree")]
pub use ordered_tree::OrderedTree;
#[cfg(feature = "tree")]
pub use ordered_tree::OrderedTreeIterator;
#[cfg(feature = "tree")]
pub use ordered_tree::TraversalOrder;
