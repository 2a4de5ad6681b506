//! Fixture types shared by the graph property suites.

use std::collections::HashMap;

use crate::{DuplicateEdgePolicy, Graph, GraphBuilder, HeapCapacityPolicy, Weight};

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Topology {
    /// A random spanning tree plus a handful of extra edges.
    Sparse,
    /// Each vertex pair is connected with high probability.
    Dense,
    /// Several components with no edges between them.
    Disconnected,
    /// Weights drawn from a two-value set, with parallel edges and self-loops.
    ManyIdentical,
}

/// A generated edge list together with the start vertex and policy used to
/// build the graph.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    pub vertex_count: usize,
    pub start: usize,
    pub edges: Vec<(usize, usize, Weight)>,
    pub policy: DuplicateEdgePolicy,
    pub topology: Topology,
}

impl GraphFixture {
    /// Builds the graph. `Append` fixtures use a growable heap because
    /// parallel edges can push more than `n²` entries.
    pub(super) fn build(&self) -> Graph {
        let heap_capacity = match self.policy {
            DuplicateEdgePolicy::Append => HeapCapacityPolicy::Growable,
            DuplicateEdgePolicy::Replace => HeapCapacityPolicy::Quadratic,
        };
        let mut graph = GraphBuilder::new(self.vertex_count)
            .with_duplicate_edges(self.policy)
            .with_heap_capacity(heap_capacity)
            .build()
            .expect("fixtures always have at least one vertex");
        for &(source, target, weight) in &self.edges {
            graph
                .add_edge(source, target, weight)
                .expect("fixture edges stay in range");
        }
        graph
    }

    /// Returns the edges the algorithms actually see under the fixture's
    /// duplicate-edge policy: every record for `Append`, the latest weight
    /// per vertex pair for `Replace`.
    pub(super) fn effective_edges(&self) -> Vec<(usize, usize, Weight)> {
        match self.policy {
            DuplicateEdgePolicy::Append => self.edges.clone(),
            DuplicateEdgePolicy::Replace => {
                let mut latest: HashMap<(usize, usize), Weight> = HashMap::new();
                for &(source, target, weight) in &self.edges {
                    latest.insert((source.min(target), source.max(target)), weight);
                }
                let mut edges: Vec<_> = latest
                    .into_iter()
                    .map(|((source, target), weight)| (source, target, weight))
                    .collect();
                edges.sort_unstable();
                edges
            }
        }
    }

    /// Returns `true` when some effective edge joins `a` and `b` with
    /// `weight`.
    pub(super) fn has_edge(&self, a: usize, b: usize, weight: Weight) -> bool {
        self.effective_edges().iter().any(|&(source, target, w)| {
            w == weight && ((source == a && target == b) || (source == b && target == a))
        })
    }
}
