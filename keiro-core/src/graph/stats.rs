//! Per-run counters reported once an algorithm finishes.

use tracing::debug;

use crate::result::Algorithm;

/// Work performed by a single algorithm run.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct RunStats {
    pub(super) visited: usize,
    pub(super) pushes: usize,
    pub(super) stale: usize,
}

impl RunStats {
    /// Emits the debug summary and, with the `metrics` feature, the run
    /// counters.
    pub(super) fn report(self, algorithm: Algorithm) {
        debug!(
            algorithm = algorithm.as_str(),
            visited = self.visited,
            pushes = self.pushes,
            stale_skipped = self.stale,
            "run complete"
        );
        self.record(algorithm);
    }

    #[cfg(feature = "metrics")]
    fn record(self, algorithm: Algorithm) {
        let label = algorithm.as_str();
        metrics::counter!("keiro_runs_total", "algorithm" => label).increment(1);
        metrics::counter!("keiro_vertices_visited_total", "algorithm" => label)
            .increment(self.visited as u64);
        metrics::counter!("keiro_heap_pushes_total", "algorithm" => label)
            .increment(self.pushes as u64);
        metrics::counter!("keiro_stale_entries_skipped_total", "algorithm" => label)
            .increment(self.stale as u64);
    }

    #[cfg(not(feature = "metrics"))]
    fn record(self, _algorithm: Algorithm) {}
}
