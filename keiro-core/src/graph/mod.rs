//! Undirected weighted graph and the algorithms that run over it.
//!
//! A [`Graph`] mirrors every edge into two representations: one
//! [`AdjacencyList`] per vertex, which drives the algorithms, and a dense
//! adjacency matrix answering weight lookups in O(1). Both are updated
//! together by [`Graph::add_edge`] and never diverge on which pairs are
//! connected.

mod shortest_path;
mod spanning;
mod stats;
mod traversal;

use std::fmt;

use tracing::trace;

use crate::{
    Result, Weight,
    adjacency::{AdjacencyList, Edges},
    builder::{DuplicateEdgePolicy, GraphConfig},
    error::GraphError,
    heap::HeapCapacity,
    result::{Algorithm, AlgorithmOutput},
};

/// An undirected weighted graph over vertices `0..vertex_count`.
///
/// # Examples
/// ```
/// use keiro_core::Graph;
///
/// let mut graph = Graph::new(4)?;
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(1, 2, 1)?;
/// graph.add_edge(2, 3, 1)?;
/// assert_eq!(graph.bfs(0)?.order(), &[0, 1, 2, 3]);
/// assert_eq!(graph.dfs(0)?.order(), &[0, 1, 2, 3]);
/// # Ok::<(), keiro_core::GraphError>(())
/// ```
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<AdjacencyList>,
    matrix: Vec<Option<Weight>>,
    edge_count: usize,
    config: GraphConfig,
}

impl Graph {
    /// Allocates a graph with `vertex_count` isolated vertices and default
    /// policies.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyGraph`] when `vertex_count` is zero.
    pub fn new(vertex_count: usize) -> Result<Self> {
        crate::GraphBuilder::new(vertex_count).build()
    }

    pub(crate) fn with_config(vertex_count: usize, config: GraphConfig) -> Self {
        let adjacency = (0..vertex_count).map(|_| AdjacencyList::new()).collect();
        Self {
            vertex_count,
            adjacency,
            matrix: vec![None; vertex_count.saturating_mul(vertex_count)],
            edge_count: 0,
            config,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of distinct vertex pairs joined by an edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the policies the graph was built with.
    #[must_use]
    #[rustfmt::skip]
    pub const fn config(&self) -> GraphConfig { self.config }

    /// Inserts the undirected edge `{source, target}` with `weight`.
    ///
    /// Both adjacency chains and both matrix cells are written. A self-loop
    /// stores two records in its vertex's chain under
    /// [`DuplicateEdgePolicy::Append`].
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when either endpoint is outside
    /// the graph; the graph is left unchanged.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: Weight) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        match self.config.duplicate_edges() {
            DuplicateEdgePolicy::Append => {
                self.adjacency[source].add_edge(target, weight);
                self.adjacency[target].add_edge(source, weight);
            }
            DuplicateEdgePolicy::Replace => {
                self.adjacency[source].replace_or_add(target, weight);
                self.adjacency[target].replace_or_add(source, weight);
            }
        }

        let forward = self.matrix_index(source, target);
        let backward = self.matrix_index(target, source);
        if self.matrix[forward].replace(weight).is_none() {
            self.edge_count += 1;
        }
        self.matrix[backward] = Some(weight);

        trace!(source, target, weight, "edge inserted");
        Ok(())
    }

    /// Returns the weight stored in the adjacency matrix for `{source,
    /// target}`, or `None` when the pair is unconnected or out of range.
    ///
    /// After repeated insertions for one pair this is the latest weight.
    #[must_use]
    pub fn edge_weight(&self, source: usize, target: usize) -> Option<Weight> {
        if source >= self.vertex_count || target >= self.vertex_count {
            return None;
        }
        self.matrix[self.matrix_index(source, target)]
    }

    /// Returns `vertex`'s adjacency chain.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when `vertex` is out of range.
    pub fn adjacency(&self, vertex: usize) -> Result<&AdjacencyList> {
        self.check_vertex(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Iterates over `vertex`'s edge records, newest first.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when `vertex` is out of range.
    pub fn neighbors(&self, vertex: usize) -> Result<Edges<'_>> {
        self.adjacency(vertex).map(AdjacencyList::iter)
    }

    /// Runs `algorithm` from `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when `start` is out of range and
    /// [`GraphError::Heap`] when a fixed-capacity heap overflows.
    pub fn run(&self, algorithm: Algorithm, start: usize) -> Result<AlgorithmOutput> {
        Ok(match algorithm {
            Algorithm::Bfs => self.bfs(start)?.into(),
            Algorithm::Dfs => self.dfs(start)?.into(),
            Algorithm::Prim => self.prim(start)?.into(),
            Algorithm::Dijkstra => self.dijkstra(start)?.into(),
        })
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<()> {
        if vertex < self.vertex_count {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                vertex_count: self.vertex_count,
            })
        }
    }

    fn heap_capacity(&self) -> HeapCapacity {
        self.config.heap_capacity().resolve(self.vertex_count)
    }

    const fn matrix_index(&self, row: usize, column: usize) -> usize {
        row * self.vertex_count + column
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertex_count", &self.vertex_count)
            .field("edge_count", &self.edge_count)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod property;
#[cfg(test)]
mod tests;
