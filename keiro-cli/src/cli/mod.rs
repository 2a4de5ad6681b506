//! Command-line interface for running graph algorithms over edge files.
//!
//! The `run` command loads an edge list, builds a graph through a
//! [`keiro_core::GraphSession`] and prints the session's result buffer.

mod commands;
mod edges;

pub use commands::{
    AlgorithmArg, Cli, CliError, Command, DuplicateEdgesArg, ExecutionSummary, HeapArg, RunCommand,
    render_summary, run_cli,
};
pub use edges::{EdgeSpec, parse_edges};
