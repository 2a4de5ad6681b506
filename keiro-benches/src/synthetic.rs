//! Seeded synthetic graphs for benchmarks.
//!
//! A generated graph is a random spanning tree over every vertex plus a
//! configurable number of random extra edges per vertex, so every
//! algorithm reaches the whole graph from vertex 0.

use keiro_core::{Graph, GraphBuilder, HeapCapacityPolicy, Weight};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for a synthetic weighted graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Random extra edges added per vertex after the spanning tree.
    pub extra_edges_per_vertex: usize,
    /// Largest edge weight; weights are drawn from `1..=max_weight`.
    pub max_weight: Weight,
    /// Seed for the deterministic RNG.
    pub seed: u64,
}

/// One undirected edge of a synthetic graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyntheticEdge {
    /// First endpoint.
    pub source: usize,
    /// Second endpoint.
    pub target: usize,
    /// Edge weight.
    pub weight: Weight,
}

impl SyntheticGraphConfig {
    /// Generates the edge list described by this configuration.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` or
    /// `max_weight` is zero.
    pub fn edges(&self) -> Result<Vec<SyntheticEdge>, BenchSetupError> {
        if self.vertex_count == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "vertex_count",
            });
        }
        if self.max_weight == 0 {
            return Err(BenchSetupError::ZeroValue {
                context: "max_weight",
            });
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let extra = self.vertex_count
            .saturating_mul(self.extra_edges_per_vertex);
        let tree_edges = self.vertex_count.saturating_sub(1);
        let mut edges = Vec::with_capacity(tree_edges.saturating_add(extra));
        for vertex in 1..self.vertex_count {
            edges.push(SyntheticEdge {
                source: rng.gen_range(0..vertex),
                target: vertex,
                weight: rng.gen_range(1..=self.max_weight),
            });
        }
        for _ in 0..extra {
            edges.push(SyntheticEdge {
                source: rng.gen_range(0..self.vertex_count),
                target: rng.gen_range(0..self.vertex_count),
                weight: rng.gen_range(1..=self.max_weight),
            });
        }
        Ok(edges)
    }

    /// Builds a [`Graph`] from [`Self::edges`] with a growable heap, since
    /// parallel extra edges may exceed a quadratic bound on small graphs.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] when generation or insertion fails.
    pub fn build(&self) -> Result<Graph, BenchSetupError> {
        let edges = self.edges()?;
        let mut graph = GraphBuilder::new(self.vertex_count)
            .with_heap_capacity(HeapCapacityPolicy::Growable)
            .build()?;
        for edge in edges {
            graph.add_edge(edge.source, edge.target, edge.weight)?;
        }
        Ok(graph)
    }
}

/// Generates `count` heap keys from `seed`.
#[must_use]
pub fn heap_keys(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..1_000_000)).collect()
}
