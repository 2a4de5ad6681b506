//! Benchmark parameter types.
//!
//! The `Display` impls become Criterion benchmark identifiers.

use std::fmt;

/// Parameters for a graph algorithm benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Extra edges added per vertex on top of the spanning tree.
    pub extra_edges_per_vertex: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},extra={}",
            self.vertex_count, self.extra_edges_per_vertex
        )
    }
}

/// Parameters for a heap benchmark run.
#[derive(Clone, Debug)]
pub struct HeapBenchParams {
    /// Number of entries inserted before draining.
    pub entry_count: usize,
}

impl fmt::Display for HeapBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.entry_count)
    }
}
