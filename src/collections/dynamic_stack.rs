//! LIFO stack over a contiguous buffer with hysteresis resizing.
//!
//! This module provides [`DynamicStack`], a stack that manages its own
//! capacity instead of leaving it to [`Vec`]'s growth policy.
//!
//! # Overview
//!
//! - `push` grows the buffer by the growth ratio (×2) when it is full
//! - `pop` shrinks the buffer by the growth ratio once no more than a
//!   quarter of it is used, but never below the minimum capacity (16)
//! - Grow is only considered before a push and shrink only after a pop, so
//!   alternating push/pop near a boundary never reallocates repeatedly
//!
//! # Examples
//!
//! ```rust
//! use corral::collections::DynamicStack;
//!
//! let mut stack = DynamicStack::new();
//! stack.push('a');
//! stack.push('b');
//! stack.push('c');
//!
//! assert_eq!(stack.pop(), Some('c'));
//! assert_eq!(stack.pop(), Some('b'));
//! assert_eq!(stack.pop(), Some('a'));
//! assert_eq!(stack.pop(), None);
//! ```
//!
//! # Capacity Lifecycle
//!
//! ```text
//! push x17    capacity 16 -> 32   (the 17th push finds the buffer full)
//! pop to 8    capacity 32 -> 16   (8 <= 32 / 4 and 32 > 16)
//! pop to 0    capacity stays 16   (already at the floor)
//! ```

use std::fmt;
use std::iter::{FusedIterator, Rev};

use super::error::CollectionError;

// =============================================================================
// Constants
// =============================================================================

/// Capacity of a new stack and the floor below which it never shrinks.
pub const DEFAULT_MINIMUM_CAPACITY: usize = 16;

/// Factor by which capacity is multiplied on grow and divided on shrink.
pub const DEFAULT_GROWTH_RATIO: usize = 2;

/// A stack shrinks once `len <= capacity / shrink_threshold`.
pub const DEFAULT_SHRINK_THRESHOLD: usize = 4;

// =============================================================================
// Configuration
// =============================================================================

/// Sizing parameters for a [`DynamicStack`].
///
/// # Examples
///
/// ```rust
/// use corral::collections::{DynamicStack, StackConfig};
///
/// let config = StackConfig::new().with_minimum_capacity(4);
/// let stack: DynamicStack<u8> = DynamicStack::try_with_config(config).unwrap();
/// assert_eq!(stack.capacity(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StackConfig {
    minimum_capacity: usize,
    growth_ratio: usize,
    shrink_threshold: usize,
}

impl StackConfig {
    /// Creates a configuration with a floor of 16, a growth ratio of 2 and
    /// a shrink threshold of 4.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            minimum_capacity: DEFAULT_MINIMUM_CAPACITY,
            growth_ratio: DEFAULT_GROWTH_RATIO,
            shrink_threshold: DEFAULT_SHRINK_THRESHOLD,
        }
    }

    /// Sets the initial capacity, which is also the shrink floor.
    #[must_use]
    pub const fn with_minimum_capacity(mut self, minimum_capacity: usize) -> Self {
        self.minimum_capacity = minimum_capacity;
        self
    }

    /// Sets the factor applied on grow and shrink.
    #[must_use]
    pub const fn with_growth_ratio(mut self, growth_ratio: usize) -> Self {
        self.growth_ratio = growth_ratio;
        self
    }

    /// Sets the occupancy divisor that triggers a shrink.
    #[must_use]
    pub const fn with_shrink_threshold(mut self, shrink_threshold: usize) -> Self {
        self.shrink_threshold = shrink_threshold;
        self
    }

    /// Returns the initial capacity and shrink floor.
    #[inline]
    pub const fn minimum_capacity(&self) -> usize {
        self.minimum_capacity
    }

    /// Returns the factor applied on grow and shrink.
    #[inline]
    pub const fn growth_ratio(&self) -> usize {
        self.growth_ratio
    }

    /// Returns the occupancy divisor that triggers a shrink.
    #[inline]
    pub const fn shrink_threshold(&self) -> usize {
        self.shrink_threshold
    }

    /// Checks that the configuration can back a stack.
    ///
    /// The shrink threshold must be strictly greater than the growth ratio:
    /// a shrunk buffer then always has room left, so the next push cannot
    /// immediately grow it back.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidConfiguration`] naming the first
    /// field that is out of range.
    pub const fn validate(&self) -> Result<(), CollectionError> {
        if self.minimum_capacity == 0 {
            return Err(CollectionError::InvalidConfiguration {
                parameter: "minimum_capacity",
                reason: "must be greater than 0",
            });
        }
        if self.growth_ratio < 2 {
            return Err(CollectionError::InvalidConfiguration {
                parameter: "growth_ratio",
                reason: "must be at least 2",
            });
        }
        if self.shrink_threshold <= self.growth_ratio {
            return Err(CollectionError::InvalidConfiguration {
                parameter: "shrink_threshold",
                reason: "must be greater than growth_ratio",
            });
        }
        Ok(())
    }
}

impl Default for StackConfig {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// DynamicStack Definition
// =============================================================================

/// A LIFO stack whose buffer grows when full and shrinks when mostly empty.
///
/// Elements live in one contiguous buffer; index 0 is the bottom (oldest)
/// element and index `len - 1` the top.
///
/// # Time Complexity
///
/// | Operation  | Complexity      |
/// |------------|-----------------|
/// | `push`     | O(1) amortized  |
/// | `pop`      | O(1) amortized  |
/// | `peek`     | O(1)            |
/// | `get`      | O(1)            |
/// | `len`      | O(1)            |
/// | `capacity` | O(1)            |
#[derive(Clone)]
pub struct DynamicStack<T> {
    /// Elements from bottom to top. Its allocation is at least `capacity`.
    elements: Vec<T>,
    /// The capacity managed by this stack, independent of `Vec`'s own.
    capacity: usize,
    config: StackConfig,
}

static_assertions::assert_impl_all!(DynamicStack<String>: Send, Sync);

impl<T> DynamicStack<T> {
    /// Creates an empty stack with a capacity of 16.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::DynamicStack;
    ///
    /// let stack: DynamicStack<i32> = DynamicStack::new();
    /// assert!(stack.is_empty());
    /// assert_eq!(stack.capacity(), 16);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_validated_config(StackConfig::new())
    }

    /// Creates an empty stack sized by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidConfiguration`] if `config` does not
    /// pass [`StackConfig::validate`].
    pub fn try_with_config(config: StackConfig) -> Result<Self, CollectionError> {
        config.validate()?;
        Ok(Self::from_validated_config(config))
    }

    fn from_validated_config(config: StackConfig) -> Self {
        Self {
            elements: Vec::with_capacity(config.minimum_capacity),
            capacity: config.minimum_capacity,
            config,
        }
    }

    /// Pushes `item` onto the top of the stack, growing the buffer first if
    /// it is full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::DynamicStack;
    ///
    /// let mut stack = DynamicStack::new();
    /// for value in 0..17 {
    ///     stack.push(value);
    /// }
    /// assert_eq!(stack.capacity(), 32);
    /// ```
    pub fn push(&mut self, item: T) {
        if self.is_full() {
            let grown = self.capacity.saturating_mul(self.config.growth_ratio);
            self.reallocate(grown);
        }
        self.elements.push(item);
    }

    /// Removes and returns the top element, or `None` if the stack is empty.
    ///
    /// After removal the buffer shrinks by the growth ratio if at most
    /// `capacity / shrink_threshold` elements remain and the capacity is
    /// above the floor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::DynamicStack;
    ///
    /// let mut stack: DynamicStack<i32> = (0..17).collect();
    /// assert_eq!(stack.capacity(), 32);
    ///
    /// while stack.len() > 8 {
    ///     stack.pop();
    /// }
    /// assert_eq!(stack.capacity(), 16);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let item = self.elements.pop()?;

        if self.elements.len() <= self.capacity / self.config.shrink_threshold
            && self.capacity > self.config.minimum_capacity
        {
            let shrunk = (self.capacity / self.config.growth_ratio).max(self.config.minimum_capacity);
            self.reallocate(shrunk);
        }

        Some(item)
    }

    /// Moves the elements into a fresh buffer of `new_capacity` slots.
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.elements.len());

        let mut resized = Vec::with_capacity(new_capacity);
        resized.append(&mut self.elements);
        self.elements = resized;

        tracing::debug!(
            from = self.capacity,
            to = new_capacity,
            length = self.elements.len(),
            "resized dynamic stack buffer"
        );
        self.capacity = new_capacity;
    }

    /// Returns the top element without removing it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Returns the element at `index`, counting from the bottom of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::{CollectionError, DynamicStack};
    ///
    /// let stack: DynamicStack<&str> = ["bottom", "top"].into_iter().collect();
    /// assert_eq!(stack.get(0), Ok(&"bottom"));
    /// assert_eq!(
    ///     stack.get(2),
    ///     Err(CollectionError::IndexOutOfBounds { index: 2, length: 2 })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, CollectionError> {
        self.elements
            .get(index)
            .ok_or(CollectionError::IndexOutOfBounds {
                index,
                length: self.elements.len(),
            })
    }

    /// Returns the number of elements on the stack.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns the number of elements the current buffer holds before the
    /// next push grows it.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns `true` if the next push will grow the buffer.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.elements.len() == self.capacity
    }

    /// Returns the configuration the stack was created with.
    #[inline]
    pub const fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Returns an iterator from the top of the stack to the bottom.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::DynamicStack;
    ///
    /// let stack: DynamicStack<i32> = (1..=3).collect();
    /// let elements: Vec<&i32> = stack.iter().collect();
    /// assert_eq!(elements, vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> DynamicStackIterator<'_, T> {
        DynamicStackIterator {
            inner: self.elements.iter().rev(),
        }
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`DynamicStack`], top first.
pub struct DynamicStackIterator<'a, T> {
    inner: Rev<std::slice::Iter<'a, T>>,
}

impl<'a, T> Iterator for DynamicStackIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for DynamicStackIterator<'_, T> {}

impl<T> FusedIterator for DynamicStackIterator<'_, T> {}

/// An owning iterator over the elements of a [`DynamicStack`], top first.
pub struct DynamicStackIntoIterator<T> {
    inner: Rev<std::vec::IntoIter<T>>,
}

impl<T> Iterator for DynamicStackIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for DynamicStackIntoIterator<T> {}

impl<T> FusedIterator for DynamicStackIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for DynamicStack<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Pushes the elements in iteration order, so the last one ends on top.
impl<T> FromIterator<T> for DynamicStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for DynamicStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> IntoIterator for DynamicStack<T> {
    type Item = T;
    type IntoIter = DynamicStackIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        DynamicStackIntoIterator {
            inner: self.elements.into_iter().rev(),
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicStack<T> {
    type Item = &'a T;
    type IntoIter = DynamicStackIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for DynamicStack<T> {
    /// Stacks are equal when they hold equal elements in the same order,
    /// whatever their capacities.
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for DynamicStack<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T> fmt::Display for DynamicStack<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "DynamicStack (size: {}, capacity: {})",
            self.len(),
            self.capacity
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
