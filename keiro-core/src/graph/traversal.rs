//! Breadth-first and depth-first traversal.

use tracing::instrument;

use crate::{
    Result,
    collections::{LinkedQueue, LinkedStack},
    result::{Algorithm, Traversal},
};

use super::{Graph, stats::RunStats};

impl Graph {
    /// Visits every vertex reachable from `start` in breadth-first order.
    ///
    /// Vertices are marked when enqueued, so each appears once. Neighbours are
    /// explored in adjacency-chain order, newest edge first.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertex`] when `start` is out of
    /// range.
    #[instrument(name = "graph.bfs", err, skip(self), fields(vertices = self.vertex_count))]
    pub fn bfs(&self, start: usize) -> Result<Traversal> {
        self.check_vertex(start)?;
        let mut stats = RunStats::default();
        let mut visited = vec![false; self.vertex_count];
        let mut order = Vec::with_capacity(self.vertex_count);
        let mut queue = LinkedQueue::with_capacity(self.vertex_count);

        visited[start] = true;
        queue.enqueue(start);
        stats.pushes += 1;
        while let Some(current) = queue.dequeue() {
            order.push(current);
            for edge in &self.adjacency[current] {
                let next = edge.destination();
                if !visited[next] {
                    visited[next] = true;
                    queue.enqueue(next);
                    stats.pushes += 1;
                }
            }
        }

        stats.visited = order.len();
        stats.report(Algorithm::Bfs);
        Ok(Traversal::new(Algorithm::Bfs, start, order, self.vertex_count))
    }

    /// Visits every vertex reachable from `start` in depth-first order.
    ///
    /// Vertices are marked when popped. Every unvisited neighbour of a popped
    /// vertex is pushed, so a vertex may sit on the stack several times; the
    /// extra copies are skipped when they surface. Because the stack reverses
    /// push order, the oldest edge of a vertex is followed first.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertex`] when `start` is out of
    /// range.
    #[instrument(name = "graph.dfs", err, skip(self), fields(vertices = self.vertex_count))]
    pub fn dfs(&self, start: usize) -> Result<Traversal> {
        self.check_vertex(start)?;
        let mut stats = RunStats::default();
        let mut visited = vec![false; self.vertex_count];
        let mut order = Vec::with_capacity(self.vertex_count);
        let mut stack = LinkedStack::new();

        stack.push(start);
        stats.pushes += 1;
        while let Some(current) = stack.pop() {
            if visited[current] {
                stats.stale += 1;
            } else {
                visited[current] = true;
                order.push(current);
            }
            for edge in &self.adjacency[current] {
                let next = edge.destination();
                if !visited[next] {
                    stack.push(next);
                    stats.pushes += 1;
                }
            }
        }

        stats.visited = order.len();
        stats.report(Algorithm::Dfs);
        Ok(Traversal::new(Algorithm::Dfs, start, order, self.vertex_count))
    }
}
