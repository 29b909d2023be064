//! FIFO queue over singly-linked nodes.
//!
//! This module provides [`LinkedQueue`], a queue with O(1) `enqueue` at the
//! tail and O(1) `dequeue` at the head.
//!
//! # Overview
//!
//! Nodes are linked by index into a slot arena owned by the queue, which
//! keeps a separate reference to the head and the tail:
//!
//! ```text
//! head -> [a | next] -> [b | next] -> [c | nil] <- tail
//! ```
//!
//! A dequeued node's slot goes onto a free list and is reused by the next
//! enqueue. When the queue becomes empty both `head` and `tail` are cleared
//! and the arena is released. A queue that never fully drains compacts its
//! arena instead, once no more than a quarter of the slots hold elements.
//!
//! # Examples
//!
//! ```rust
//! use corral::collections::LinkedQueue;
//!
//! let mut queue = LinkedQueue::new();
//! queue.enqueue("a");
//! queue.enqueue("b");
//! queue.enqueue("c");
//!
//! assert_eq!(queue.dequeue(), Some("a"));
//! assert_eq!(queue.dequeue(), Some("b"));
//! assert_eq!(queue.dequeue(), Some("c"));
//! assert_eq!(queue.peek(), None);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::mem;

/// Arenas at or below this many slots are never compacted.
const COMPACTION_MINIMUM_SLOTS: usize = 16;

// =============================================================================
// Node Definition
// =============================================================================

/// A slot of the node arena.
#[derive(Clone)]
enum Slot<T> {
    /// A live node holding an element and the index of its successor.
    Occupied { element: T, next: Option<usize> },
    /// A free slot, linked to the next free slot.
    Vacant { next_free: Option<usize> },
}

// =============================================================================
// LinkedQueue Definition
// =============================================================================

/// A FIFO queue built from singly-linked nodes.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `enqueue` | O(1)*      |
/// | `dequeue` | O(1)*      |
/// | `peek`    | O(1)       |
/// | `len`     | O(1)       |
///
/// \* amortized over growth of the node arena. `dequeue` is amortized the
/// same way, since it occasionally compacts the arena.
#[derive(Clone)]
pub struct LinkedQueue<T> {
    slots: Vec<Slot<T>>,
    /// Oldest node, the next one to be dequeued.
    head: Option<usize>,
    /// Newest node. Its `next` is always `None`.
    tail: Option<usize>,
    /// First vacant slot available for reuse.
    free: Option<usize>,
    length: usize,
}

static_assertions::assert_impl_all!(LinkedQueue<String>: Send, Sync);

impl<T> LinkedQueue<T> {
    /// Creates an empty queue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::LinkedQueue;
    ///
    /// let queue: LinkedQueue<i32> = LinkedQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            length: 0,
        }
    }

    /// Appends `item` at the tail of the queue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::LinkedQueue;
    ///
    /// let mut queue = LinkedQueue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(queue.peek(), Some(&1));
    /// ```
    pub fn enqueue(&mut self, item: T) {
        let node = Slot::Occupied {
            element: item,
            next: None,
        };
        let index = self.allocate(node);

        match self.tail {
            Some(tail) => {
                if let Slot::Occupied { next, .. } = &mut self.slots[tail] {
                    *next = Some(index);
                }
            }
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.length += 1;
    }

    /// Removes and returns the head element, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::LinkedQueue;
    ///
    /// let mut queue: LinkedQueue<i32> = (1..=2).collect();
    /// assert_eq!(queue.dequeue(), Some(1));
    /// assert_eq!(queue.dequeue(), Some(2));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        let head = self.head?;
        let vacated = Slot::Vacant {
            next_free: self.free,
        };

        match mem::replace(&mut self.slots[head], vacated) {
            Slot::Occupied { element, next } => {
                self.free = Some(head);
                self.head = next;
                self.length -= 1;
                if self.head.is_none() {
                    self.release();
                } else if self.slots.len() > COMPACTION_MINIMUM_SLOTS
                    && self.length <= self.slots.len() / 4
                {
                    self.compact();
                }
                Some(element)
            }
            vacant @ Slot::Vacant { .. } => {
                // `head` always names an occupied slot; put it back untouched.
                self.slots[head] = vacant;
                None
            }
        }
    }

    /// Returns the head element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.head.and_then(|head| self.element_at(head))
    }

    /// Returns the number of elements in the queue.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        tracing::trace!(removed = self.length, "cleared linked queue");
        self.release();
    }

    /// Returns an iterator from the head of the queue to the tail.
    ///
    /// The queue is not modified, so iteration can be repeated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::collections::LinkedQueue;
    ///
    /// let queue: LinkedQueue<char> = "abc".chars().collect();
    /// let first: String = queue.iter().collect();
    /// let second: String = queue.iter().collect();
    /// assert_eq!(first, "abc");
    /// assert_eq!(first, second);
    /// ```
    #[must_use]
    pub fn iter(&self) -> LinkedQueueIterator<'_, T> {
        LinkedQueueIterator {
            slots: &self.slots,
            current: self.head,
            remaining: self.length,
        }
    }

    /// Stores `node` in a free slot, or a new one, and returns its index.
    fn allocate(&mut self, node: Slot<T>) -> usize {
        match self.free {
            Some(index) => {
                if let Slot::Vacant { next_free } = self.slots[index] {
                    self.free = next_free;
                }
                self.slots[index] = node;
                index
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        }
    }

    fn element_at(&self, index: usize) -> Option<&T> {
        match &self.slots[index] {
            Slot::Occupied { element, .. } => Some(element),
            Slot::Vacant { .. } => None,
        }
    }

    /// Moves the live nodes, in queue order, into a new arena with no
    /// vacant slots.
    fn compact(&mut self) {
        let mut retired = mem::take(&mut self.slots);
        let mut compacted = Vec::with_capacity(self.length);
        let mut current = self.head;
        while let Some(index) = current {
            match mem::replace(&mut retired[index], Slot::Vacant { next_free: None }) {
                Slot::Occupied { element, next } => {
                    let position = compacted.len();
                    compacted.push(Slot::Occupied {
                        element,
                        next: next.map(|_| position + 1),
                    });
                    current = next;
                }
                Slot::Vacant { .. } => break,
            }
        }
        tracing::debug!(
            from = retired.len(),
            to = compacted.len(),
            "compacted linked queue arena"
        );

        self.head = (!compacted.is_empty()).then_some(0);
        self.tail = compacted.len().checked_sub(1);
        self.free = None;
        self.slots = compacted;
    }

    /// Drops every node and resets the queue to its empty state.
    fn release(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.length = 0;
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`LinkedQueue`], head first.
pub struct LinkedQueueIterator<'a, T> {
    slots: &'a [Slot<T>],
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedQueueIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.slots.get(self.current?)? {
            Slot::Occupied { element, next } => {
                self.current = *next;
                self.remaining -= 1;
                Some(element)
            }
            Slot::Vacant { .. } => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedQueueIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for LinkedQueueIterator<'_, T> {}

/// An owning iterator that dequeues the elements of a [`LinkedQueue`].
pub struct LinkedQueueIntoIterator<T> {
    queue: LinkedQueue<T>,
}

impl<T> Iterator for LinkedQueueIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.length, Some(self.queue.length))
    }
}

impl<T> ExactSizeIterator for LinkedQueueIntoIterator<T> {
    fn len(&self) -> usize {
        self.queue.length
    }
}

impl<T> FusedIterator for LinkedQueueIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> IntoIterator for LinkedQueue<T> {
    type Item = T;
    type IntoIter = LinkedQueueIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedQueueIntoIterator { queue: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = LinkedQueueIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for LinkedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedQueue<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "LinkedQueue[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, " -> ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn next_of(queue: &LinkedQueue<i32>, index: usize) -> Option<usize> {
        match &queue.slots[index] {
            Slot::Occupied { next, .. } => *next,
            Slot::Vacant { .. } => panic!("slot {index} is vacant"),
        }
    }

    #[rstest]
    fn test_empty_queue_has_no_head_or_tail() {
        let queue: LinkedQueue<i32> = LinkedQueue::new();
        assert!(queue.head.is_none());
        assert!(queue.tail.is_none());
        assert_eq!(queue.len(), 0);
    }

    #[rstest]
    fn test_tail_successor_is_always_none() {
        let mut queue = LinkedQueue::new();
        for value in 0..5 {
            queue.enqueue(value);
            let tail = queue.tail.unwrap();
            assert_eq!(next_of(&queue, tail), None);
        }
        queue.dequeue();
        let tail = queue.tail.unwrap();
        assert_eq!(next_of(&queue, tail), None);
    }

    #[rstest]
    fn test_dequeue_last_clears_tail() {
        let mut queue = LinkedQueue::new();
        queue.enqueue(1);
        assert_eq!(queue.dequeue(), Some(1));

        assert!(queue.head.is_none());
        assert!(queue.tail.is_none());
        assert!(queue.slots.is_empty());
    }

    #[rstest]
    fn test_dequeued_slots_are_reused() {
        let mut queue: LinkedQueue<i32> = (0..4).collect();
        queue.dequeue();
        queue.dequeue();
        queue.enqueue(4);
        queue.enqueue(5);

        assert_eq!(queue.slots.len(), 4);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5]);
    }

    #[rstest]
    fn test_small_arena_is_not_compacted() {
        let mut queue: LinkedQueue<i32> = (0..16).collect();
        for _ in 0..14 {
            queue.dequeue();
        }

        assert_eq!(queue.slots.len(), 16);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![14, 15]);
    }

    #[rstest]
    fn test_arena_compacts_when_mostly_vacant() {
        let mut queue: LinkedQueue<i32> = (0..100).collect();
        for expected in 0..74 {
            assert_eq!(queue.dequeue(), Some(expected));
        }
        assert_eq!(queue.slots.len(), 100);

        assert_eq!(queue.dequeue(), Some(74));
        assert_eq!(queue.len(), 25);
        assert_eq!(queue.slots.len(), 25);
        assert_eq!(queue.head, Some(0));
        assert_eq!(queue.tail, Some(24));
        assert_eq!(next_of(&queue, 24), None);
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), (75..100).collect::<Vec<_>>());

        queue.enqueue(100);
        assert_eq!(queue.slots.len(), 26);
        assert_eq!(queue.peek(), Some(&75));
        assert_eq!(queue.into_iter().collect::<Vec<_>>(), (75..=100).collect::<Vec<_>>());
    }

    #[rstest]
    fn test_arena_stays_bounded_without_draining() {
        let mut queue: LinkedQueue<i32> = (0..1_000).collect();
        let mut next_expected = 0;
        for value in 1_000..5_000 {
            for _ in 0..3 {
                if queue.len() > 1 {
                    assert_eq!(queue.dequeue(), Some(next_expected));
                    next_expected += 1;
                }
            }
            queue.enqueue(value);
        }

        assert!(!queue.is_empty());
        assert!(queue.slots.len() <= COMPACTION_MINIMUM_SLOTS.max(queue.len() * 4));
        assert_eq!(queue.peek(), Some(&next_expected));
    }

    #[rstest]
    fn test_interleaved_operations_keep_fifo_order() {
        let mut queue = LinkedQueue::new();
        let mut dequeued = Vec::new();
        for value in 0..20 {
            queue.enqueue(value);
            if value % 3 == 2 {
                dequeued.extend(queue.dequeue());
                dequeued.extend(queue.dequeue());
            }
        }
        dequeued.extend(queue);
        assert_eq!(dequeued, (0..20).collect::<Vec<_>>());
    }

    #[rstest]
    #[case(vec![], "LinkedQueue[]")]
    #[case(vec![1], "LinkedQueue[1]")]
    #[case(vec![1, 2, 3], "LinkedQueue[1 -> 2 -> 3]")]
    fn test_display(#[case] elements: Vec<i32>, #[case] expected: &str) {
        let queue: LinkedQueue<i32> = elements.into_iter().collect();
        assert_eq!(queue.to_string(), expected);
    }
}
