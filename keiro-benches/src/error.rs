//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` so the benchmark bodies
//! never reach for `.expect()`.

use keiro_core::{GraphError, HeapError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Graph construction or an algorithm run failed.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
    /// Filling a heap fixture failed.
    #[error("heap operation failed: {0}")]
    Heap(#[from] HeapError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// The parameter that was unexpectedly zero.
        context: &'static str,
    },
}
