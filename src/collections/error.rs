//! Error types for the collections module.
//!
//! Absent values (popping an empty stack, looking up a missing key) are
//! reported as `None`, not as errors. [`CollectionError`] is reserved for
//! calls that break a precondition, such as indexing past the top of a
//! stack or building a container from an unusable configuration.

use std::error::Error;
use std::fmt;

/// Errors raised by the containers in this crate.
///
/// # Examples
///
/// ```rust
/// use corral::collections::CollectionError;
///
/// let error = CollectionError::IndexOutOfBounds { index: 3, length: 2 };
/// assert_eq!(
///     format!("{error}"),
///     "index out of bounds: the length is 2 but the index is 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// An index was at or past the number of stored elements.
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of elements at the time of the call.
        length: usize,
    },

    /// `min` or `max` was called on a tree with no nodes.
    EmptyTree,

    /// A configuration value was rejected before the container was built.
    InvalidConfiguration {
        /// The name of the offending field.
        parameter: &'static str,
        /// What the field must satisfy.
        reason: &'static str,
    },
}

impl fmt::Display for CollectionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, length } => write!(
                formatter,
                "index out of bounds: the length is {length} but the index is {index}"
            ),
            Self::EmptyTree => write!(formatter, "tree is empty"),
            Self::InvalidConfiguration { parameter, reason } => {
                write!(formatter, "invalid configuration: {parameter} {reason}")
            }
        }
    }
}

impl Error for CollectionError {}
