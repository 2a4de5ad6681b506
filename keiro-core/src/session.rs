//! Integer-indexed session boundary over a single [`Graph`].
//!
//! Front ends drive the engine through signed integers and read results from
//! one shared `i64` buffer. [`GraphSession`] validates those integers, owns
//! the current graph (if any) and re-encodes every typed result into the
//! buffer.

use tracing::{info, warn};

use crate::{
    MAX_VERTICES, Weight,
    builder::{GraphBuilder, GraphConfig},
    error::SessionError,
    graph::Graph,
    result::{Algorithm, AlgorithmOutput},
};

/// Owns the current graph and the shared result buffer.
///
/// # Examples
/// ```
/// use keiro_core::{GraphSession, UNREACHABLE};
///
/// let mut session = GraphSession::new();
/// session.init_graph(4)?;
/// session.add_edge(0, 1, 4)?;
/// session.add_edge(0, 2, 1)?;
/// session.add_edge(2, 1, 1)?;
/// session.run_dijkstra(0)?;
/// assert_eq!(session.result_buffer(), &[0, 2, 1, UNREACHABLE]);
/// # Ok::<(), keiro_core::SessionError>(())
/// ```
#[derive(Debug, Default)]
pub struct GraphSession {
    config: GraphConfig,
    graph: Option<Graph>,
    buffer: Vec<i64>,
    written: usize,
    last: Option<AlgorithmOutput>,
}

impl GraphSession {
    /// Creates a session with default graph policies and no graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session whose graphs are built with `config`.
    #[must_use]
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replaces the current graph with `vertex_count` isolated vertices and
    /// resets the result buffer to that many zeros.
    ///
    /// # Errors
    /// Returns [`SessionError::InvalidVertexCount`] when `vertex_count` is
    /// outside `1..=MAX_VERTICES`. The previous graph is kept in that case.
    pub fn init_graph(&mut self, vertex_count: i64) -> Result<(), SessionError> {
        let count = usize::try_from(vertex_count)
            .ok()
            .filter(|count| (1..=MAX_VERTICES).contains(count))
            .ok_or_else(|| {
                warn!(
                    value = vertex_count,
                    max = MAX_VERTICES,
                    "rejected vertex count"
                );
                SessionError::InvalidVertexCount {
                    value: vertex_count,
                }
            })?;
        let graph = GraphBuilder::new(count).with_config(self.config).build()?;
        if self.graph.is_some() {
            info!(vertex_count = count, "replacing existing graph");
        } else {
            info!(vertex_count = count, "graph initialised");
        }
        self.graph = Some(graph);
        self.buffer = vec![0; count];
        self.written = 0;
        self.last = None;
        Ok(())
    }

    /// Inserts the undirected edge `{source, target}` with `weight`.
    ///
    /// # Errors
    /// Returns [`SessionError::Uninitialized`] before [`Self::init_graph`],
    /// [`SessionError::InvalidIndex`] for an endpoint outside the graph and
    /// [`SessionError::InvalidWeight`] for a weight that is negative or does
    /// not fit [`Weight`].
    pub fn add_edge(&mut self, source: i64, target: i64, weight: i64) -> Result<(), SessionError> {
        let graph = self.graph.as_mut().ok_or(SessionError::Uninitialized)?;
        let source = vertex_index(graph, source)?;
        let target = vertex_index(graph, target)?;
        let weight = Weight::try_from(weight).map_err(|_| {
            warn!(value = weight, "rejected edge weight");
            SessionError::InvalidWeight { value: weight }
        })?;
        graph.add_edge(source, target, weight)?;
        Ok(())
    }

    /// Runs `algorithm` from `start`, writes the encoded result into the
    /// buffer and returns the typed output.
    ///
    /// # Errors
    /// Returns [`SessionError::Uninitialized`] before [`Self::init_graph`],
    /// [`SessionError::InvalidIndex`] when `start` is outside the graph and
    /// [`SessionError::Graph`] when the algorithm itself fails.
    pub fn run(
        &mut self,
        algorithm: Algorithm,
        start: i64,
    ) -> Result<&AlgorithmOutput, SessionError> {
        let graph = self.graph.as_ref().ok_or(SessionError::Uninitialized)?;
        let start = vertex_index(graph, start)?;
        let output = graph.run(algorithm, start).inspect_err(|err| {
            warn!(
                algorithm = algorithm.as_str(),
                code = err.code().as_str(),
                "algorithm failed"
            );
        })?;
        self.written = output.encode_into(&mut self.buffer);
        info!(
            algorithm = algorithm.as_str(),
            start,
            written = self.written,
            "run complete"
        );
        Ok(self.last.insert(output))
    }

    /// Runs breadth-first search from `start`.
    ///
    /// # Errors
    /// See [`Self::run`].
    pub fn run_bfs(&mut self, start: i64) -> Result<&AlgorithmOutput, SessionError> {
        self.run(Algorithm::Bfs, start)
    }

    /// Runs depth-first search from `start`.
    ///
    /// # Errors
    /// See [`Self::run`].
    pub fn run_dfs(&mut self, start: i64) -> Result<&AlgorithmOutput, SessionError> {
        self.run(Algorithm::Dfs, start)
    }

    /// Runs Prim's algorithm from `start`.
    ///
    /// # Errors
    /// See [`Self::run`].
    pub fn run_prims(&mut self, start: i64) -> Result<&AlgorithmOutput, SessionError> {
        self.run(Algorithm::Prim, start)
    }

    /// Runs Dijkstra's algorithm from `start`.
    ///
    /// # Errors
    /// See [`Self::run`].
    pub fn run_dijkstra(&mut self, start: i64) -> Result<&AlgorithmOutput, SessionError> {
        self.run(Algorithm::Dijkstra, start)
    }

    /// Returns the shared result buffer: one entry per vertex.
    ///
    /// After a traversal only the first [`Self::written`] entries belong to
    /// that run; the rest keep whatever earlier runs wrote.
    #[must_use]
    pub fn result_buffer(&self) -> &[i64] {
        &self.buffer
    }

    /// Returns how many leading buffer entries the last run wrote.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Returns the typed result of the most recent run on the current graph.
    #[must_use]
    pub const fn last_output(&self) -> Option<&AlgorithmOutput> {
        self.last.as_ref()
    }

    /// Returns the current graph, if one has been initialised.
    #[must_use]
    pub const fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    /// Returns the policies used for new graphs.
    #[must_use]
    pub const fn config(&self) -> GraphConfig {
        self.config
    }
}

fn vertex_index(graph: &Graph, value: i64) -> Result<usize, SessionError> {
    usize::try_from(value)
        .ok()
        .filter(|&index| index < graph.vertex_count())
        .ok_or_else(|| {
            warn!(
                value,
                vertex_count = graph.vertex_count(),
                "rejected vertex index"
            );
            SessionError::InvalidIndex {
                value,
                vertex_count: graph.vertex_count(),
            }
        })
}
