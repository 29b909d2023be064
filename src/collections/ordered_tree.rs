//! Unbalanced binary search tree.
//!
//! This module provides [`OrderedTree`], a set of totally ordered values
//! kept in a plain binary search tree.
//!
//! # Overview
//!
//! Every node owns its left and right subtrees; there are no parent
//! pointers. For every node, all values in the left subtree are strictly
//! smaller and all values in the right subtree strictly greater, so a value
//! is stored at most once.
//!
//! The tree is never rebalanced. Inserting already sorted values produces a
//! list-shaped tree on which every operation is O(n); callers needing
//! guaranteed O(log n) should use a balanced tree instead.
//!
//! # Examples
//!
//! ```rust
//! use corral::collections::{OrderedTree, TraversalOrder};
//!
//! let mut tree: OrderedTree<i32> = [5, 3, 7, 6, 8].into_iter().collect();
//! assert!(tree.delete(&7));
//!
//! let sorted: Vec<&i32> = tree.traverse(TraversalOrder::InOrder);
//! assert_eq!(sorted, vec![&3, &5, &6, &8]);
//! assert!(tree.is_valid_bst());
//! ```
//!
//! # Deletion
//!
//! Deleting a node with two children does not move nodes around: the
//! node's value is replaced by its in-order successor (the minimum of the
//! right subtree), and the successor's node is then deleted from the right
//! subtree, where it has at most one child.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use super::error::CollectionError;

// =============================================================================
// Node Definition
// =============================================================================

/// Internal node of the tree.
#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

/// An owned, possibly empty subtree.
type Link<T> = Option<Box<Node<T>>>;

impl<T> Node<T> {
    const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// The order in which [`OrderedTree::traverse`] visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree: ascending order.
    InOrder,
    /// Node before both subtrees.
    PreOrder,
    /// Both subtrees before the node.
    PostOrder,
}

// =============================================================================
// OrderedTree Definition
// =============================================================================

/// A binary search tree over totally ordered values.
///
/// # Time Complexity
///
/// | Operation      | Average  | Worst case |
/// |----------------|----------|------------|
/// | `insert`       | O(log n) | O(n)       |
/// | `contains`     | O(log n) | O(n)       |
/// | `delete`       | O(log n) | O(n)       |
/// | `min` / `max`  | O(log n) | O(n)       |
/// | `len`          | O(n)     | O(n)       |
/// | `height`       | O(n)     | O(n)       |
/// | `traverse`     | O(n)     | O(n)       |
///
/// The worst case is reached when values are inserted in sorted order; the
/// tree does not rebalance itself.
///
/// # Recursion Depth
///
/// `insert`, `contains`, `delete`, `len`, `height`, `traverse` and `clone`
/// recurse once per level, so on a list-shaped tree their stack use grows
/// with the number of values. Dropping and clearing are iterative and safe
/// at any depth.
#[derive(Clone)]
pub struct OrderedTree<T> {
    root: Link<T>,
}

static_assertions::assert_impl_all!(OrderedTree<String>: Send, Sync);

impl<T> OrderedTree<T> {
    /// Creates an empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::OrderedTree;
    ///
    /// let tree: OrderedTree<i32> = OrderedTree::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.height(), -1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` if the tree has no nodes.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes of the tree.
    ///
    /// The count is not cached: every call walks the whole tree.
    #[must_use]
    pub fn len(&self) -> usize {
        Self::count_nodes(self.root.as_deref())
    }

    fn count_nodes(node: Option<&Node<T>>) -> usize {
        node.map_or(0, |node| {
            1 + Self::count_nodes(node.left.as_deref()) + Self::count_nodes(node.right.as_deref())
        })
    }

    /// Returns the number of edges on the longest root-to-leaf path.
    ///
    /// An empty tree has height -1 and a single node height 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::OrderedTree;
    ///
    /// let balanced: OrderedTree<i32> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(balanced.height(), 1);
    ///
    /// let degenerate: OrderedTree<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(degenerate.height(), 2);
    /// ```
    #[must_use]
    pub fn height(&self) -> isize {
        Self::height_of(self.root.as_deref())
    }

    fn height_of(node: Option<&Node<T>>) -> isize {
        node.map_or(-1, |node| {
            1 + Self::height_of(node.left.as_deref()).max(Self::height_of(node.right.as_deref()))
        })
    }

    /// Returns the smallest value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyTree`] if the tree has no nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::{CollectionError, OrderedTree};
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.min(), Err(CollectionError::EmptyTree));
    ///
    /// tree.insert(4);
    /// tree.insert(2);
    /// assert_eq!(tree.min(), Ok(&2));
    /// ```
    pub fn min(&self) -> Result<&T, CollectionError> {
        let mut node = self.root.as_deref().ok_or(CollectionError::EmptyTree)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.value)
    }

    /// Returns the largest value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::EmptyTree`] if the tree has no nodes.
    pub fn max(&self) -> Result<&T, CollectionError> {
        let mut node = self.root.as_deref().ok_or(CollectionError::EmptyTree)?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Ok(&node.value)
    }

    /// Collects references to every value in the requested order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::{OrderedTree, TraversalOrder};
    ///
    /// let tree: OrderedTree<i32> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.traverse(TraversalOrder::InOrder), vec![&1, &2, &3]);
    /// assert_eq!(tree.traverse(TraversalOrder::PreOrder), vec![&2, &1, &3]);
    /// assert_eq!(tree.traverse(TraversalOrder::PostOrder), vec![&1, &3, &2]);
    /// ```
    #[must_use]
    pub fn traverse(&self, order: TraversalOrder) -> Vec<&T> {
        let mut result = Vec::new();
        let root = self.root.as_deref();
        match order {
            TraversalOrder::InOrder => Self::collect_in_order(root, &mut result),
            TraversalOrder::PreOrder => Self::collect_pre_order(root, &mut result),
            TraversalOrder::PostOrder => Self::collect_post_order(root, &mut result),
        }
        result
    }

    fn collect_in_order<'a>(node: Option<&'a Node<T>>, result: &mut Vec<&'a T>) {
        if let Some(node) = node {
            Self::collect_in_order(node.left.as_deref(), result);
            result.push(&node.value);
            Self::collect_in_order(node.right.as_deref(), result);
        }
    }

    fn collect_pre_order<'a>(node: Option<&'a Node<T>>, result: &mut Vec<&'a T>) {
        if let Some(node) = node {
            result.push(&node.value);
            Self::collect_pre_order(node.left.as_deref(), result);
            Self::collect_pre_order(node.right.as_deref(), result);
        }
    }

    fn collect_post_order<'a>(node: Option<&'a Node<T>>, result: &mut Vec<&'a T>) {
        if let Some(node) = node {
            Self::collect_post_order(node.left.as_deref(), result);
            Self::collect_post_order(node.right.as_deref(), result);
            result.push(&node.value);
        }
    }

    /// Returns a lazy iterator over the values in ascending order.
    #[must_use]
    pub fn iter(&self) -> OrderedTreeIterator<'_, T> {
        let mut iterator = OrderedTreeIterator { stack: Vec::new() };
        iterator.push_left_spine(self.root.as_deref());
        iterator
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        dismantle(self.root.take());
        tracing::trace!("cleared ordered tree");
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Inserts `value`, returning `false` if an equal value was already
    /// present.
    ///
    /// An equal value already in the tree is left untouched; the new value
    /// is dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        Self::insert_into(&mut self.root, value)
    }

    fn insert_into(link: &mut Link<T>, value: T) -> bool {
        match link {
            None => {
                *link = Some(Box::new(Node::leaf(value)));
                true
            }
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::insert_into(&mut node.left, value),
                Ordering::Greater => Self::insert_into(&mut node.right, value),
                Ordering::Equal => false,
            },
        }
    }

    /// Returns `true` if a value equal to `value` is in the tree.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::contains_in(self.root.as_deref(), value)
    }

    fn contains_in<Q>(node: Option<&Node<T>>, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        node.is_some_and(|node| match value.cmp(node.value.borrow()) {
            Ordering::Less => Self::contains_in(node.left.as_deref(), value),
            Ordering::Greater => Self::contains_in(node.right.as_deref(), value),
            Ordering::Equal => true,
        })
    }

    /// Removes the value equal to `value`, returning whether one was found.
    ///
    /// - A leaf is removed outright.
    /// - A node with one child is replaced by that child.
    /// - A node with two children takes the value of its in-order successor,
    ///   whose node is then deleted from the right subtree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::{OrderedTree, TraversalOrder};
    ///
    /// let mut tree: OrderedTree<i32> = [5, 3, 7, 6, 8].into_iter().collect();
    /// assert!(tree.delete(&5));
    /// assert!(!tree.delete(&5));
    ///
    /// // 6 replaced the root
    /// assert_eq!(tree.traverse(TraversalOrder::PreOrder), vec![&6, &3, &7, &8]);
    /// ```
    pub fn delete<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Self::delete_from(&mut self.root, value)
    }

    fn delete_from<Q>(link: &mut Link<T>, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let Some(node) = link else {
            return false;
        };

        match value.cmp(node.value.borrow()) {
            Ordering::Less => Self::delete_from(&mut node.left, value),
            Ordering::Greater => Self::delete_from(&mut node.right, value),
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    if let Some(successor) = Self::take_min(&mut node.right) {
                        node.value = successor;
                    }
                } else {
                    let child = node.left.take().or_else(|| node.right.take());
                    *link = child;
                }
                true
            }
        }
    }

    /// Unlinks the minimum node of a non-empty subtree and returns its value.
    ///
    /// The minimum has no left child, so it is replaced by its right
    /// subtree.
    fn take_min(link: &mut Link<T>) -> Option<T> {
        let node = link.as_mut()?;
        if node.left.is_some() {
            return Self::take_min(&mut node.left);
        }
        let Node { value, right, .. } = *link.take()?;
        *link = right;
        Some(value)
    }

    /// Checks the search tree property at every node.
    ///
    /// Each node's value must lie strictly between the nearest ancestor it
    /// descends to the right of and the nearest ancestor it descends to the
    /// left of. The root is unbounded.
    #[must_use]
    pub fn is_valid_bst(&self) -> bool {
        Self::is_within_bounds(self.root.as_deref(), None, None)
    }

    fn is_within_bounds(node: Option<&Node<T>>, lower: Option<&T>, upper: Option<&T>) -> bool {
        let Some(node) = node else {
            return true;
        };

        if lower.is_some_and(|lower| node.value <= *lower)
            || upper.is_some_and(|upper| node.value >= *upper)
        {
            return false;
        }

        Self::is_within_bounds(node.left.as_deref(), lower, Some(&node.value))
            && Self::is_within_bounds(node.right.as_deref(), Some(&node.value), upper)
    }
}

/// Frees a subtree iteratively so list-shaped trees do not overflow the
/// call stack.
fn dismantle<T>(link: Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}

impl<T> Drop for OrderedTree<T> {
    fn drop(&mut self) {
        dismantle(self.root.take());
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An in-order iterator over the values of an [`OrderedTree`].
pub struct OrderedTreeIterator<'a, T> {
    /// Nodes whose value and right subtree are still to be visited.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> OrderedTreeIterator<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for OrderedTreeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

impl<T> FusedIterator for OrderedTreeIterator<'_, T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for OrderedTree<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = OrderedTreeIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for OrderedTree<T> {
    /// Trees are equal when they hold the same values, whatever their shape.
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for OrderedTree<T> {}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
