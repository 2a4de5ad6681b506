//! Prim's minimum spanning tree.

use tracing::instrument;

use crate::{
    Result, Weight,
    heap::PriorityHeap,
    result::{Algorithm, SpanningTree},
};

use super::{Graph, stats::RunStats};

impl Graph {
    /// Grows a minimum spanning tree of `start`'s component with Prim's
    /// algorithm.
    ///
    /// Key improvements push a fresh heap entry; entries for vertices already
    /// in the tree are skipped when popped. Vertices outside the component
    /// keep no parent.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertex`] when `start` is out of
    /// range and [`crate::GraphError::Heap`] when the configured heap capacity
    /// is exhausted.
    ///
    /// # Examples
    /// ```
    /// use keiro_core::Graph;
    ///
    /// let mut graph = Graph::new(3)?;
    /// graph.add_edge(0, 1, 1)?;
    /// graph.add_edge(1, 2, 3)?;
    /// graph.add_edge(0, 2, 5)?;
    /// let tree = graph.prim(0)?;
    /// assert_eq!(tree.total_weight(), 4);
    /// assert_eq!(tree.parent(2), Some(1));
    /// # Ok::<(), keiro_core::GraphError>(())
    /// ```
    #[instrument(name = "graph.prim", err, skip(self), fields(vertices = self.vertex_count))]
    pub fn prim(&self, start: usize) -> Result<SpanningTree> {
        self.check_vertex(start)?;
        let mut stats = RunStats::default();
        let mut key: Vec<Option<Weight>> = vec![None; self.vertex_count];
        let mut parent = vec![None; self.vertex_count];
        let mut in_tree = vec![false; self.vertex_count];
        let mut heap = PriorityHeap::new(self.heap_capacity());

        key[start] = Some(0);
        heap.insert(start, 0)?;
        stats.pushes += 1;
        while let Some(entry) = heap.pop_min() {
            let current = entry.vertex();
            if in_tree[current] {
                stats.stale += 1;
                continue;
            }
            in_tree[current] = true;
            stats.visited += 1;

            for edge in &self.adjacency[current] {
                let next = edge.destination();
                let weight = edge.weight();
                if !in_tree[next] && key[next].is_none_or(|best| weight < best) {
                    key[next] = Some(weight);
                    parent[next] = Some(current);
                    heap.insert(next, weight)?;
                    stats.pushes += 1;
                }
            }
        }

        stats.report(Algorithm::Prim);
        Ok(SpanningTree::new(start, parent, key))
    }
}
