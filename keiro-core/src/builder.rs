//! Builder utilities for configuring [`Graph`] construction.
//!
//! Exposes the duplicate-edge and heap-capacity policies, and the builder
//! validation performed before a [`Graph`] is allocated.

use crate::{MAX_VERTICES, Result, error::GraphError, graph::Graph, heap::HeapCapacity};

/// Controls how [`Graph::add_edge`] treats a second edge between a vertex
/// pair that is already connected.
///
/// The adjacency matrix always keeps only the latest weight. `Append` keeps
/// every record in the adjacency chains, so traversals may examine the same
/// neighbour more than once and the greedy algorithms consider every parallel
/// weight. `Replace` overwrites the chain record so both representations
/// agree.
///
/// # Examples
/// ```
/// use keiro_core::DuplicateEdgePolicy;
///
/// assert_eq!(DuplicateEdgePolicy::default(), DuplicateEdgePolicy::Append);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DuplicateEdgePolicy {
    /// Prepend a new record for every insertion.
    #[default]
    Append,
    /// Overwrite the existing record's weight in place.
    Replace,
}

/// Determines the capacity of the priority heap used by Prim's and
/// Dijkstra's algorithms.
///
/// # Examples
/// ```
/// use keiro_core::{HeapCapacity, HeapCapacityPolicy};
///
/// let policy = HeapCapacityPolicy::Quadratic;
/// assert_eq!(policy.resolve(4), HeapCapacity::Fixed(16));
/// assert_eq!(HeapCapacityPolicy::Growable.resolve(4), HeapCapacity::Growable);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum HeapCapacityPolicy {
    /// A fixed capacity of `vertex_count²` entries (at least one).
    #[default]
    Quadratic,
    /// A fixed capacity chosen by the caller.
    Fixed(usize),
    /// An unbounded heap.
    Growable,
}

impl HeapCapacityPolicy {
    /// Resolves the policy into a concrete [`HeapCapacity`] for a graph with
    /// `vertex_count` vertices.
    #[must_use]
    pub const fn resolve(self, vertex_count: usize) -> HeapCapacity {
        match self {
            Self::Quadratic => {
                let squared = vertex_count.saturating_mul(vertex_count);
                HeapCapacity::Fixed(if squared == 0 { 1 } else { squared })
            }
            Self::Fixed(limit) => HeapCapacity::Fixed(limit),
            Self::Growable => HeapCapacity::Growable,
        }
    }
}

/// Validated configuration carried by a [`Graph`].
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct GraphConfig {
    duplicate_edges: DuplicateEdgePolicy,
    heap_capacity: HeapCapacityPolicy,
}

impl GraphConfig {
    /// Creates a configuration from explicit policies.
    #[must_use]
    pub const fn new(
        duplicate_edges: DuplicateEdgePolicy,
        heap_capacity: HeapCapacityPolicy,
    ) -> Self {
        Self {
            duplicate_edges,
            heap_capacity,
        }
    }

    /// Returns the duplicate-edge policy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn duplicate_edges(&self) -> DuplicateEdgePolicy { self.duplicate_edges }

    /// Returns the heap-capacity policy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn heap_capacity(&self) -> HeapCapacityPolicy { self.heap_capacity }
}

/// Configures and constructs [`Graph`] instances.
///
/// # Examples
/// ```
/// use keiro_core::{DuplicateEdgePolicy, GraphBuilder, HeapCapacityPolicy};
///
/// let graph = GraphBuilder::new(6)
///     .with_duplicate_edges(DuplicateEdgePolicy::Replace)
///     .with_heap_capacity(HeapCapacityPolicy::Growable)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(graph.vertex_count(), 6);
/// assert_eq!(graph.config().duplicate_edges(), DuplicateEdgePolicy::Replace);
/// ```
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    vertex_count: usize,
    config: GraphConfig,
}

impl GraphBuilder {
    /// Creates a builder for a graph with `vertex_count` vertices and default
    /// policies.
    ///
    /// # Examples
    /// ```
    /// use keiro_core::{DuplicateEdgePolicy, GraphBuilder, HeapCapacityPolicy};
    ///
    /// let builder = GraphBuilder::new(3);
    /// assert_eq!(builder.vertex_count(), 3);
    /// assert_eq!(builder.duplicate_edges(), DuplicateEdgePolicy::Append);
    /// assert_eq!(builder.heap_capacity(), HeapCapacityPolicy::Quadratic);
    /// ```
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            config: GraphConfig::default(),
        }
    }

    /// Replaces every policy with those from `config`.
    #[must_use]
    pub fn with_config(mut self, config: GraphConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the duplicate-edge policy.
    #[must_use]
    pub fn with_duplicate_edges(mut self, policy: DuplicateEdgePolicy) -> Self {
        self.config.duplicate_edges = policy;
        self
    }

    /// Overrides the heap-capacity policy.
    #[must_use]
    pub fn with_heap_capacity(mut self, policy: HeapCapacityPolicy) -> Self {
        self.config.heap_capacity = policy;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Returns the configured duplicate-edge policy.
    #[must_use]
    pub fn duplicate_edges(&self) -> DuplicateEdgePolicy {
        self.config.duplicate_edges
    }

    /// Returns the configured heap-capacity policy.
    #[must_use]
    pub fn heap_capacity(&self) -> HeapCapacityPolicy {
        self.config.heap_capacity
    }

    /// Validates the configuration and allocates the [`Graph`].
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when the vertex count is zero and
    /// [`GraphError::TooManyVertices`] when it exceeds [`MAX_VERTICES`].
    ///
    /// # Examples
    /// ```
    /// use keiro_core::{GraphBuilder, GraphError};
    ///
    /// assert_eq!(GraphBuilder::new(0).build().unwrap_err(), GraphError::EmptyGraph);
    /// ```
    pub fn build(self) -> Result<Graph> {
        if self.vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }
        if self.vertex_count > MAX_VERTICES {
            return Err(GraphError::TooManyVertices {
                vertex_count: self.vertex_count,
                max: MAX_VERTICES,
            });
        }
        Ok(Graph::with_config(self.vertex_count, self.config))
    }
}
