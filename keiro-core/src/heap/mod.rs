//! Array-backed binary min-heap used as a lazy-deletion priority queue.
//!
//! Prim's and Dijkstra's algorithms push a fresh `(vertex, key)` entry every
//! time they improve a vertex's key instead of decreasing the old entry in
//! place. Superseded entries stay in the heap and are discarded by the caller
//! when they surface. The heap itself knows nothing about staleness; it only
//! orders entries by key.

use crate::error::HeapError;

/// A `(vertex, key)` pair stored in a [`PriorityHeap`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct HeapEntry<K> {
    vertex: usize,
    key: K,
}

impl<K: Copy> HeapEntry<K> {
    /// Creates an entry for `vertex` with priority `key`.
    #[must_use]
    pub const fn new(vertex: usize, key: K) -> Self {
        Self { vertex, key }
    }

    /// Returns the vertex carried by the entry.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> usize { self.vertex }

    /// Returns the entry's priority.
    #[must_use]
    #[rustfmt::skip]
    pub const fn key(&self) -> K { self.key }
}

/// Capacity policy for a [`PriorityHeap`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum HeapCapacity {
    /// The heap holds at most this many entries; further inserts fail with
    /// [`HeapError::CapacityExceeded`].
    Fixed(usize),
    /// The heap grows as needed.
    Growable,
}

/// Binary min-heap of [`HeapEntry`] values ordered by key.
///
/// Sifting up stops at the first parent whose key is not strictly greater,
/// so equal keys keep their relative tree positions; insertion order among
/// equal keys is not otherwise preserved.
///
/// # Examples
/// ```
/// use keiro_core::{HeapCapacity, PriorityHeap};
///
/// let mut heap = PriorityHeap::new(HeapCapacity::Fixed(4));
/// heap.insert(0, 7_u32)?;
/// heap.insert(1, 3)?;
/// heap.insert(2, 5)?;
/// let order: Vec<_> = std::iter::from_fn(|| heap.pop_min())
///     .map(|entry| entry.vertex())
///     .collect();
/// assert_eq!(order, vec![1, 2, 0]);
/// # Ok::<(), keiro_core::HeapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PriorityHeap<K> {
    entries: Vec<HeapEntry<K>>,
    capacity: HeapCapacity,
}

impl<K: Copy + Ord> PriorityHeap<K> {
    /// Creates an empty heap with the given capacity policy.
    ///
    /// Storage grows on demand, including for fixed capacities.
    #[must_use]
    pub const fn new(capacity: HeapCapacity) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Inserts `(vertex, key)` in O(log n).
    ///
    /// # Errors
    /// Returns [`HeapError::CapacityExceeded`] when a fixed-capacity heap is
    /// already full. The entry is not inserted in that case.
    pub fn insert(&mut self, vertex: usize, key: K) -> Result<(), HeapError> {
        if let HeapCapacity::Fixed(limit) = self.capacity
            && self.entries.len() >= limit
        {
            return Err(HeapError::CapacityExceeded { capacity: limit });
        }
        self.entries.push(HeapEntry::new(vertex, key));
        self.sift_up(self.entries.len() - 1);
        #[cfg(test)]
        assert!(self.is_heap_ordered(), "heap order violated after insert");
        Ok(())
    }

    /// Removes and returns the entry with the smallest key, or `None` when
    /// the heap is empty.
    pub fn pop_min(&mut self) -> Option<HeapEntry<K>> {
        let last = self.entries.pop()?;
        if self.entries.is_empty() {
            return Some(last);
        }
        let min = std::mem::replace(&mut self.entries[0], last);
        self.sift_down(0);
        #[cfg(test)]
        assert!(self.is_heap_ordered(), "heap order violated after pop");
        Some(min)
    }

    /// Returns the entry with the smallest key without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<&HeapEntry<K>> {
        self.entries.first()
    }

    /// Returns the number of stored entries, stale ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the heap holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the capacity policy the heap was created with.
    #[must_use]
    pub const fn capacity(&self) -> HeapCapacity {
        self.capacity
    }

    /// Removes every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn sift_up(&mut self, mut node: usize) {
        while node > 0 {
            let parent = (node - 1) / 2;
            if self.entries[node].key < self.entries[parent].key {
                self.entries.swap(node, parent);
                node = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * node + 1;
            let right = left + 1;
            let mut smallest = node;
            if left < len && self.entries[left].key < self.entries[smallest].key {
                smallest = left;
            }
            if right < len && self.entries[right].key < self.entries[smallest].key {
                smallest = right;
            }
            if smallest == node {
                break;
            }
            self.entries.swap(node, smallest);
            node = smallest;
        }
    }

    #[cfg(test)]
    fn is_heap_ordered(&self) -> bool {
        (1..self.entries.len()).all(|child| {
            let parent = (child - 1) / 2;
            self.entries[parent].key <= self.entries[child].key
        })
    }
}
