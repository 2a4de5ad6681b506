//! Result types produced by the graph algorithms.
//!
//! Every algorithm returns an owned value sized to the graph. The
//! [`AlgorithmOutput::encode_into`] helper flattens a result into the integer
//! buffer layout consumed across the [`crate::GraphSession`] boundary.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{Distance, Weight};

/// Buffer value marking a vertex without a spanning-tree parent.
pub const NO_PARENT: i64 = -1;

/// Buffer value marking a vertex unreachable from the start vertex.
pub const UNREACHABLE: i64 = i64::MAX;

/// The four algorithms offered by the engine.
///
/// # Examples
/// ```
/// use keiro_core::Algorithm;
///
/// let algorithm: Algorithm = "dijkstra".parse()?;
/// assert_eq!(algorithm, Algorithm::Dijkstra);
/// assert_eq!(algorithm.as_str(), "dijkstra");
/// # Ok::<(), keiro_core::UnknownAlgorithm>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Breadth-first search.
    Bfs,
    /// Iterative depth-first search.
    Dfs,
    /// Prim's minimum spanning tree.
    Prim,
    /// Dijkstra's single-source shortest paths.
    Dijkstra,
}

impl Algorithm {
    /// Every algorithm, in presentation order.
    pub const ALL: [Self; 4] = [Self::Bfs, Self::Dfs, Self::Prim, Self::Dijkstra];

    /// Returns the stable lowercase name of the algorithm.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Dfs => "dfs",
            Self::Prim => "prims",
            Self::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("unknown algorithm `{name}`; expected one of bfs, dfs, prims, dijkstra")]
pub struct UnknownAlgorithm {
    name: String,
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            "prim" | "prims" => Ok(Self::Prim),
            "dijkstra" => Ok(Self::Dijkstra),
            _ => Err(UnknownAlgorithm {
                name: raw.to_owned(),
            }),
        }
    }
}

/// Visitation order produced by BFS or DFS.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Traversal {
    algorithm: Algorithm,
    start: usize,
    order: Vec<usize>,
    vertex_count: usize,
}

impl Traversal {
    pub(crate) fn new(
        algorithm: Algorithm,
        start: usize,
        order: Vec<usize>,
        vertex_count: usize,
    ) -> Self {
        debug_assert!(
            order.len() <= vertex_count,
            "traversal visited a vertex twice"
        );
        Self {
            algorithm,
            start,
            order,
            vertex_count,
        }
    }

    /// Returns the traversal that produced this order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the start vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> usize { self.start }

    /// Returns the vertices in visitation order. Unreachable vertices are
    /// absent.
    #[must_use]
    #[rustfmt::skip]
    pub fn order(&self) -> &[usize] { &self.order }

    /// Returns the number of vertices in the traversed graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns `true` when every vertex of the graph was visited.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.order.len() == self.vertex_count
    }

    /// Consumes the traversal and returns the visitation order.
    #[must_use]
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

/// Parent links of a minimum spanning tree grown by Prim's algorithm.
///
/// Only the component containing the start vertex is spanned; every other
/// vertex, and the start itself, has no parent.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningTree {
    start: usize,
    parents: Vec<Option<usize>>,
    weights: Vec<Option<Weight>>,
}

impl SpanningTree {
    pub(crate) fn new(
        start: usize,
        parents: Vec<Option<usize>>,
        weights: Vec<Option<Weight>>,
    ) -> Self {
        debug_assert_eq!(parents.len(), weights.len());
        Self {
            start,
            parents,
            weights,
        }
    }

    /// Returns the root of the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> usize { self.start }

    /// Returns the parent of every vertex, indexed by vertex id.
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[Option<usize>] { &self.parents }

    /// Returns the parent of `vertex`, if it has one.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Iterates over tree edges as `(parent, child, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.parents
            .iter()
            .zip(&self.weights)
            .enumerate()
            .filter_map(|(child, (parent, weight))| Some(((*parent)?, child, (*weight)?)))
    }

    /// Returns the sum of the tree's edge weights.
    #[must_use]
    pub fn total_weight(&self) -> Distance {
        self.edges()
            .map(|(_, _, weight)| Distance::from(weight))
            .sum()
    }

    /// Returns the number of vertices in the spanned component.
    #[must_use]
    pub fn spanned_count(&self) -> usize {
        self.edges().count() + 1
    }

    /// Returns `true` when the tree spans every vertex of the graph.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.spanned_count() == self.parents.len()
    }
}

/// Single-source shortest-path distances computed by Dijkstra's algorithm.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShortestPaths {
    start: usize,
    distances: Vec<Option<Distance>>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub(crate) fn new(
        start: usize,
        distances: Vec<Option<Distance>>,
        predecessors: Vec<Option<usize>>,
    ) -> Self {
        debug_assert_eq!(distances.len(), predecessors.len());
        Self {
            start,
            distances,
            predecessors,
        }
    }

    /// Returns the source vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> usize { self.start }

    /// Returns the distance of every vertex; `None` marks unreachable ones.
    #[must_use]
    #[rustfmt::skip]
    pub fn distances(&self) -> &[Option<Distance>] { &self.distances }

    /// Returns the distance to `vertex`, or `None` when it is unreachable.
    #[must_use]
    pub fn distance(&self, vertex: usize) -> Option<Distance> {
        self.distances.get(vertex).copied().flatten()
    }

    /// Returns the predecessor of `vertex` on its shortest path.
    #[must_use]
    pub fn predecessor(&self, vertex: usize) -> Option<usize> {
        self.predecessors.get(vertex).copied().flatten()
    }

    /// Reconstructs the shortest path from the source to `target`.
    ///
    /// Returns `None` when `target` is unreachable.
    ///
    /// # Examples
    /// ```
    /// use keiro_core::Graph;
    ///
    /// let mut graph = Graph::new(3)?;
    /// graph.add_edge(0, 1, 4)?;
    /// graph.add_edge(1, 2, 1)?;
    /// let paths = graph.dijkstra(0)?;
    /// assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    /// # Ok::<(), keiro_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn path_to(&self, target: usize) -> Option<Vec<usize>> {
        self.distance(target)?;
        let mut path = vec![target];
        let mut current = target;
        while let Some(previous) = self.predecessor(current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }

    /// Returns the number of vertices reachable from the source.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        self.distances
            .iter()
            .filter(|distance| distance.is_some())
            .count()
    }
}

/// The typed output of one algorithm run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AlgorithmOutput {
    /// BFS or DFS visitation order.
    Traversal(Traversal),
    /// Prim's spanning tree.
    SpanningTree(SpanningTree),
    /// Dijkstra's distances.
    ShortestPaths(ShortestPaths),
}

impl AlgorithmOutput {
    /// Returns the algorithm that produced the output.
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        match self {
            Self::Traversal(traversal) => traversal.algorithm(),
            Self::SpanningTree(_) => Algorithm::Prim,
            Self::ShortestPaths(_) => Algorithm::Dijkstra,
        }
    }

    /// Writes the output into `buffer` using the boundary encoding and
    /// returns the number of leading entries written.
    ///
    /// Traversals write their visitation order and leave the remaining
    /// entries untouched. Spanning trees write every parent, using
    /// [`NO_PARENT`] for roots and unreachable vertices. Shortest paths write
    /// every distance, using [`UNREACHABLE`] for unreachable vertices.
    ///
    /// # Examples
    /// ```
    /// use keiro_core::{Graph, NO_PARENT};
    ///
    /// let mut graph = Graph::new(3)?;
    /// graph.add_edge(0, 1, 1)?;
    /// let output = graph.run(keiro_core::Algorithm::Prim, 0)?;
    /// let mut buffer = vec![7; 3];
    /// assert_eq!(output.encode_into(&mut buffer), 3);
    /// assert_eq!(buffer, vec![NO_PARENT, 0, NO_PARENT]);
    /// # Ok::<(), keiro_core::GraphError>(())
    /// ```
    pub fn encode_into(&self, buffer: &mut [i64]) -> usize {
        match self {
            Self::Traversal(traversal) => {
                let written = traversal.order().len().min(buffer.len());
                for (slot, vertex) in buffer.iter_mut().zip(traversal.order()) {
                    *slot = encode_index(*vertex);
                }
                written
            }
            Self::SpanningTree(tree) => {
                for (slot, parent) in buffer.iter_mut().zip(tree.parents()) {
                    *slot = parent.map_or(NO_PARENT, encode_index);
                }
                tree.parents().len().min(buffer.len())
            }
            Self::ShortestPaths(paths) => {
                for (slot, distance) in buffer.iter_mut().zip(paths.distances()) {
                    *slot = distance.map_or(UNREACHABLE, encode_distance);
                }
                paths.distances().len().min(buffer.len())
            }
        }
    }
}

impl From<Traversal> for AlgorithmOutput {
    fn from(value: Traversal) -> Self {
        Self::Traversal(value)
    }
}

impl From<SpanningTree> for AlgorithmOutput {
    fn from(value: SpanningTree) -> Self {
        Self::SpanningTree(value)
    }
}

impl From<ShortestPaths> for AlgorithmOutput {
    fn from(value: ShortestPaths) -> Self {
        Self::ShortestPaths(value)
    }
}

// Vertex ids are bounded by the allocated graph, far below `i64::MAX`.
fn encode_index(vertex: usize) -> i64 {
    i64::try_from(vertex).unwrap_or(i64::MAX)
}

// Distances saturate into the sentinel rather than wrapping negative.
fn encode_distance(distance: Distance) -> i64 {
    i64::try_from(distance).unwrap_or(UNREACHABLE)
}
