//! FIFO queue over an arena of singly linked slots.
//!
//! A singly linked queue needs a second handle on its tail. Rather than
//! aliasing owned nodes, the chain lives in a `Vec` of slots linked by index;
//! released slots are threaded onto a free list and reused by later
//! enqueues, so a queue that is drained and refilled does not grow.

use std::fmt;

struct Slot<T> {
    value: Option<T>,
    next: Option<usize>,
}

/// A first-in, first-out queue built from an index-linked chain.
///
/// Breadth-first search uses the queue as its frontier. Dequeuing an empty
/// queue returns `None` rather than signalling an error.
///
/// # Examples
/// ```
/// use keiro_core::LinkedQueue;
///
/// let mut queue = LinkedQueue::new();
/// queue.enqueue("a");
/// queue.enqueue("b");
/// assert_eq!(queue.front(), Some(&"a"));
/// assert_eq!(queue.dequeue(), Some("a"));
/// assert_eq!(queue.dequeue(), Some("b"));
/// assert_eq!(queue.dequeue(), None);
/// ```
pub struct LinkedQueue<T> {
    slots: Vec<Slot<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Option<usize>,
    len: usize,
}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
        }
    }

    /// Creates an empty queue with room for `capacity` values before the
    /// arena reallocates.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// Appends `value` at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        let index = self.allocate(value);
        match self.tail {
            Some(tail) => self.slots[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    /// Removes and returns the front value, or `None` when the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let index = self.head?;
        let slot = &mut self.slots[index];
        let value = slot.value.take();
        self.head = slot.next;
        slot.next = self.free;
        self.free = Some(index);
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        debug_assert!(value.is_some(), "linked slots must hold a value");
        value
    }

    /// Returns a reference to the front value without removing it.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head
            .and_then(|index| self.slots.get(index))
            .and_then(|slot| slot.value.as_ref())
    }

    /// Returns the number of queued values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the queue holds no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Removes every value and releases the arena.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = None;
        self.tail = None;
        self.free = None;
        self.len = 0;
    }

    /// Iterates from the front of the queue to the back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            queue: self,
            next: self.head,
        }
    }

    fn allocate(&mut self, value: T) -> usize {
        if let Some(index) = self.free {
            let slot = &mut self.slots[index];
            self.free = slot.next;
            slot.value = Some(value);
            slot.next = None;
            return index;
        }
        self.slots.push(Slot {
            value: Some(value),
            next: None,
        });
        self.slots.len() - 1
    }

    #[cfg(test)]
    fn arena_len(&self) -> usize {
        self.slots.len()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Borrowing iterator over a [`LinkedQueue`], front first.
pub struct Iter<'a, T> {
    queue: &'a LinkedQueue<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slot = self.queue.slots.get(self.next?)?;
        self.next = slot.next;
        slot.value.as_ref()
    }
}
