//! Per-vertex adjacency chains.
//!
//! Each vertex owns a singly linked chain of [`EdgeRecord`]s. New records are
//! prepended, so iteration yields the most recently inserted edge first. That
//! order is observable in BFS and DFS visitation and is part of the engine's
//! behaviour.

use std::fmt;

use crate::Weight;

/// One outgoing edge stored in a vertex's adjacency chain.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EdgeRecord {
    destination: usize,
    weight: Weight,
}

impl EdgeRecord {
    /// Creates a record pointing at `destination` with `weight`.
    #[must_use]
    pub const fn new(destination: usize, weight: Weight) -> Self {
        Self {
            destination,
            weight,
        }
    }

    /// Returns the vertex this edge leads to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn destination(&self) -> usize { self.destination }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> Weight { self.weight }
}

struct EdgeNode {
    record: EdgeRecord,
    next: Option<Box<EdgeNode>>,
}

/// The chain of edge records owned by a single vertex.
///
/// # Examples
/// ```
/// use keiro_core::{AdjacencyList, EdgeRecord};
///
/// let mut list = AdjacencyList::new();
/// list.add_edge(1, 5);
/// list.add_edge(2, 7);
/// assert_eq!(list.head(), Some(&EdgeRecord::new(2, 7)));
/// let destinations: Vec<_> = list.iter().map(EdgeRecord::destination).collect();
/// assert_eq!(destinations, vec![2, 1]);
/// ```
#[derive(Default)]
pub struct AdjacencyList {
    head: Option<Box<EdgeNode>>,
    len: usize,
}

impl AdjacencyList {
    /// Creates an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Prepends an edge to `destination` in O(1).
    pub fn add_edge(&mut self, destination: usize, weight: Weight) {
        let node = Box::new(EdgeNode {
            record: EdgeRecord::new(destination, weight),
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Overwrites the weight of the newest record leading to `destination`,
    /// prepending a new record when none exists.
    ///
    /// Returns `true` when an existing record was updated.
    pub fn replace_or_add(&mut self, destination: usize, weight: Weight) -> bool {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.record.destination == destination {
                node.record.weight = weight;
                return true;
            }
            cursor = node.next.as_deref_mut();
        }
        self.add_edge(destination, weight);
        false
    }

    /// Returns the newest record, or `None` for an isolated vertex.
    #[must_use]
    pub fn head(&self) -> Option<&EdgeRecord> {
        self.head.as_ref().map(|node| &node.record)
    }

    /// Iterates over the records, newest first.
    pub fn iter(&self) -> Edges<'_> {
        Edges {
            next: self.head.as_deref(),
        }
    }

    /// Returns the number of records in the chain.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the chain holds no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl Drop for AdjacencyList {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl fmt::Debug for AdjacencyList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a AdjacencyList {
    type Item = &'a EdgeRecord;
    type IntoIter = Edges<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over an [`AdjacencyList`], newest record first.
pub struct Edges<'a> {
    next: Option<&'a EdgeNode>,
}

impl<'a> Iterator for Edges<'a> {
    type Item = &'a EdgeRecord;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.record
        })
    }
}
