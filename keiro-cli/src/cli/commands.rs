//! Command implementations and argument parsing for the keiro CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use keiro_core::{
    Algorithm, DuplicateEdgePolicy, GraphConfig, GraphSession, HeapCapacityPolicy, SessionError,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::edges::parse_edges;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "keiro", about = "Run graph algorithms over an edge list.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Load an edge list and run one algorithm from a start vertex.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Algorithm to execute.
    #[arg(value_enum)]
    pub algorithm: AlgorithmArg,

    /// Edge list with one `source target [weight]` triple per line.
    pub edges: PathBuf,

    /// Number of vertices in the graph.
    #[arg(long, allow_negative_numbers = true)]
    pub vertices: i64,

    /// Vertex the algorithm starts from.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub start: i64,

    /// How repeated edges between one vertex pair are stored.
    #[arg(long = "duplicate-edges", value_enum, default_value_t = DuplicateEdgesArg::Append)]
    pub duplicate_edges: DuplicateEdgesArg,

    /// Capacity policy for the priority heap.
    #[arg(long, value_enum, default_value_t = HeapArg::Quadratic)]
    pub heap: HeapArg,
}

/// Algorithms selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Breadth-first search.
    Bfs,
    /// Depth-first search.
    Dfs,
    /// Prim's minimum spanning tree.
    Prims,
    /// Dijkstra's shortest paths.
    Dijkstra,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Bfs => Self::Bfs,
            AlgorithmArg::Dfs => Self::Dfs,
            AlgorithmArg::Prims => Self::Prim,
            AlgorithmArg::Dijkstra => Self::Dijkstra,
        }
    }
}

/// Duplicate-edge policies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DuplicateEdgesArg {
    /// Keep every inserted record.
    Append,
    /// Overwrite the existing record's weight.
    Replace,
}

impl From<DuplicateEdgesArg> for DuplicateEdgePolicy {
    fn from(value: DuplicateEdgesArg) -> Self {
        match value {
            DuplicateEdgesArg::Append => Self::Append,
            DuplicateEdgesArg::Replace => Self::Replace,
        }
    }
}

/// Heap capacity policies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeapArg {
    /// Fixed capacity of `vertices²` entries.
    Quadratic,
    /// Unbounded heap.
    Growable,
}

impl From<HeapArg> for HeapCapacityPolicy {
    fn from(value: HeapArg) -> Self {
        match value {
            HeapArg::Quadratic => Self::Quadratic,
            HeapArg::Growable => Self::Growable,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading the edge list.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A line of the edge list was malformed.
    #[error("{path}:{line}: {message}")]
    Parse {
        /// Edge list being parsed.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },
    /// An edge line was well formed but rejected by the graph.
    #[error("{path}:{line}: {source}")]
    Edge {
        /// Edge list being loaded.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// Session rejection.
        #[source]
        source: SessionError,
    },
    /// The session rejected graph construction or the algorithm run.
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl CliError {
    /// Returns the session error behind this failure, if any.
    #[must_use]
    pub const fn session_error(&self) -> Option<&SessionError> {
        match self {
            Self::Edge { source, .. } | Self::Session(source) => Some(source),
            Self::Io { .. } | Self::Parse { .. } => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionSummary {
    /// Algorithm that ran.
    pub algorithm: Algorithm,
    /// Number of vertices in the graph.
    pub vertices: usize,
    /// Leading buffer entries written by the run.
    pub written: usize,
    /// The session's result buffer after the run.
    pub buffer: Vec<i64>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the edge list or running the algorithm
/// fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use keiro_cli::cli::{AlgorithmArg, Cli, Command, DuplicateEdgesArg, HeapArg, RunCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "0 1 4\n0 2 1\n2 1 1\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         algorithm: AlgorithmArg::Dijkstra,
///         edges: file.path().to_path_buf(),
///         vertices: 3,
///         start: 0,
///         duplicate_edges: DuplicateEdgesArg::Append,
///         heap: HeapArg::Quadratic,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.buffer, vec![0, 2, 1]);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(algorithm = field::Empty, path = field::Empty, vertices = command.vertices),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let algorithm = Algorithm::from(command.algorithm);
    let span = Span::current();
    span.record("algorithm", field::display(algorithm));
    span.record("path", field::display(command.edges.display()));

    let config = GraphConfig::new(command.duplicate_edges.into(), command.heap.into());
    let mut session = GraphSession::with_config(config);
    session.init_graph(command.vertices)?;
    let edge_count = load_edges(&mut session, &command.edges)?;

    session.run(algorithm, command.start)?;
    let summary = ExecutionSummary {
        algorithm,
        vertices: session.result_buffer().len(),
        written: session.written(),
        buffer: session.result_buffer().to_vec(),
    };
    info!(
        algorithm = algorithm.as_str(),
        edges = edge_count,
        written = summary.written,
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.load_edges", err, skip(session), fields(path = %path.display()))]
fn load_edges(session: &mut GraphSession, path: &std::path::Path) -> Result<usize, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let edges = parse_edges(BufReader::new(file), path)?;
    for edge in &edges {
        session
            .add_edge(edge.source, edge.target, edge.weight)
            .map_err(|source| CliError::Edge {
                path: path.to_path_buf(),
                line: edge.line,
                source,
            })?;
    }
    Ok(edges.len())
}

/// Writes a summary to `writer` in a stable text format.
///
/// # Errors
/// Returns any I/O error raised by `writer`.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use keiro_cli::cli::{ExecutionSummary, render_summary};
/// # use keiro_core::Algorithm;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     algorithm: Algorithm::Bfs,
///     vertices: 2,
///     written: 2,
///     buffer: vec![0, 1],
/// };
/// let mut output = Vec::new();
/// render_summary(&summary, &mut output)?;
/// assert_eq!(String::from_utf8(output)?, "algorithm: bfs\nvertices: 2\nwritten: 2\n0\t0\n1\t1\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "algorithm: {}", summary.algorithm)?;
    writeln!(writer, "vertices: {}", summary.vertices)?;
    writeln!(writer, "written: {}", summary.written)?;
    for (index, value) in summary.buffer.iter().enumerate() {
        writeln!(writer, "{index}\t{value}")?;
    }
    Ok(())
}
