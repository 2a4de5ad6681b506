//! Entry point for the `keiro` binary.
//!
//! Parses arguments with clap, loads the edge list, runs the requested
//! algorithm, prints the result buffer to stdout and maps failures to a
//! non-zero exit code with the stable error code logged.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use keiro_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{self, LoggingError},
};
use tracing::{error, field};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let session_error = err
            .downcast_ref::<CliError>()
            .and_then(CliError::session_error);
        let code = session_error.map(|inner| field::display(inner.code().as_str()));
        let graph_code = session_error
            .and_then(|inner| inner.graph_code())
            .map(|inner| field::display(inner.as_str()));

        error!(
            error = %format!("{err:#}"),
            code = code,
            graph_code = graph_code,
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
