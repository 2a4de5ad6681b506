//! Dijkstra's single-source shortest paths.

use tracing::instrument;

use crate::{
    Distance, Result,
    heap::PriorityHeap,
    result::{Algorithm, ShortestPaths},
};

use super::{Graph, stats::RunStats};

impl Graph {
    /// Computes shortest-path distances from `start` with Dijkstra's
    /// algorithm.
    ///
    /// Distances accumulate in [`Distance`] with saturating addition. A popped
    /// entry whose key exceeds the vertex's best known distance is stale and
    /// skipped.
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
    /// graph.add_edge(1, 2, 1)?;
    /// graph.add_edge(0, 2, 5)?;
    /// let paths = graph.dijkstra(0)?;
    /// assert_eq!(paths.distance(2), Some(2));
    /// # Ok::<(), keiro_core::GraphError>(())
    /// ```
    #[instrument(name = "graph.dijkstra", err, skip(self), fields(vertices = self.vertex_count))]
    pub fn dijkstra(&self, start: usize) -> Result<ShortestPaths> {
        self.check_vertex(start)?;
        let mut stats = RunStats::default();
        let mut distances: Vec<Option<Distance>> = vec![None; self.vertex_count];
        let mut predecessors = vec![None; self.vertex_count];
        let mut heap = PriorityHeap::new(self.heap_capacity());

        distances[start] = Some(0);
        heap.insert(start, 0)?;
        stats.pushes += 1;
        while let Some(entry) = heap.pop_min() {
            let current = entry.vertex();
            let reached = entry.key();
            if distances[current].is_some_and(|best| reached > best) {
                stats.stale += 1;
                continue;
            }
            stats.visited += 1;

            for edge in &self.adjacency[current] {
                let next = edge.destination();
                let candidate = reached.saturating_add(Distance::from(edge.weight()));
                if distances[next].is_none_or(|best| candidate < best) {
                    distances[next] = Some(candidate);
                    predecessors[next] = Some(current);
                    heap.insert(next, candidate)?;
                    stats.pushes += 1;
                }
            }
        }

        stats.report(Algorithm::Dijkstra);
        Ok(ShortestPaths::new(start, distances, predecessors))
    }
}
