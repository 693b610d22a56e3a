//! CLI entry point for edgegen.
//!
//! Parses the optional vertex and edge counts, generates a random edge list,
//! writes it to stdout, and maps failures to a non-zero exit code. Logging
//! is initialised first so failures are reported as structured `tracing`
//! events on stderr.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use edgegen_cli::{
    cli::{Cli, CliError, render_graph, run_cli},
    logging::{self, LoggingError},
};
use tracing::error;

/// Parse CLI arguments, generate the edge list, and write it to stdout.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let graph = run_cli(&cli).context("failed to generate edge list")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_graph(&graph, &mut writer).context("failed to write edge list")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err.downcast_ref::<CliError>().map(CliError::code);
        let message = format!("{err:#}");
        error!(error = %message, code, "command execution failed");
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
