//! Argument parsing and command execution for the edgegen CLI.

use std::io::{self, Write};
use std::num::ParseIntError;

use clap::Parser;
use edgegen_core::{
    DEFAULT_EDGE_COUNT, DEFAULT_VERTEX_COUNT, GenerateError, GeneratedGraph, GeneratorBuilder,
};
use rand::Rng;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const INVALID_ARGUMENT_CODE: &str = "EDGEGEN_INVALID_ARGUMENT";

/// Positional arguments parsed by [`clap`].
///
/// Counts are kept as raw text so malformed values surface as
/// [`CliError::InvalidArgument`] rather than a clap usage error.
#[derive(Debug, Parser, Clone, Default)]
#[command(
    name = "edgegen",
    version,
    about = "Print a random undirected graph as a lexicographically sorted edge list.",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Number of vertices [default: 10].
    #[arg(value_name = "VERTICES")]
    pub vertices: Option<String>,

    /// Number of distinct edges to print [default: 20].
    #[arg(value_name = "EDGES")]
    pub edges: Option<String>,
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// A positional argument was not a non-negative integer.
    #[error("invalid {name} `{value}`: {source}")]
    InvalidArgument {
        /// Argument name as shown in the usage text.
        name: &'static str,
        /// Raw text supplied by the user.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
    /// Validation or generation failed in the core library.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

impl CliError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => INVALID_ARGUMENT_CODE,
            Self::Generate(err) => err.code().as_str(),
        }
    }
}

/// Validated counts extracted from [`Cli`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateRequest {
    /// Number of vertices to draw from.
    pub vertex_count: usize,
    /// Number of edges to produce.
    pub edge_count: usize,
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            edge_count: DEFAULT_EDGE_COUNT,
        }
    }
}

impl GenerateRequest {
    /// Parses the positional arguments, substituting defaults for absent
    /// values.
    ///
    /// # Errors
    /// Returns [`CliError::InvalidArgument`] when a value is not a
    /// non-negative integer.
    ///
    /// # Examples
    /// ```
    /// use edgegen_cli::cli::{Cli, GenerateRequest};
    ///
    /// let cli = Cli { vertices: Some("4".into()), edges: None };
    /// let request = GenerateRequest::from_cli(&cli).expect("4 is a valid count");
    /// assert_eq!(request.vertex_count, 4);
    /// assert_eq!(request.edge_count, 20);
    /// ```
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        Ok(Self {
            vertex_count: parse_count("VERTICES", cli.vertices.as_deref(), DEFAULT_VERTEX_COUNT)?,
            edge_count: parse_count("EDGES", cli.edges.as_deref(), DEFAULT_EDGE_COUNT)?,
        })
    }
}

pub(super) fn parse_count(
    name: &'static str,
    raw: Option<&str>,
    default: usize,
) -> Result<usize, CliError> {
    let Some(text) = raw else {
        return Ok(default);
    };
    text.trim()
        .parse::<usize>()
        .map_err(|source| CliError::InvalidArgument {
            name,
            value: text.to_owned(),
            source,
        })
}

/// Executes the command using the thread-local random number generator.
///
/// # Errors
/// Returns [`CliError`] when an argument is malformed or the request cannot
/// be satisfied.
pub fn run_cli(cli: &Cli) -> Result<GeneratedGraph, CliError> {
    run_with_rng(cli, &mut rand::thread_rng())
}

/// Executes the command drawing randomness from `rng`.
///
/// # Errors
/// Returns [`CliError`] when an argument is malformed or the request cannot
/// be satisfied.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use edgegen_cli::cli::{Cli, run_with_rng};
/// # use rand::{SeedableRng, rngs::SmallRng};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let cli = Cli { vertices: Some("4".into()), edges: Some("3".into()) };
/// let graph = run_with_rng(&cli, &mut SmallRng::seed_from_u64(1))?;
/// assert_eq!(graph.len(), 3);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli, rng),
    fields(vertex_count = field::Empty, edge_count = field::Empty),
)]
pub fn run_with_rng<R: Rng + ?Sized>(cli: &Cli, rng: &mut R) -> Result<GeneratedGraph, CliError> {
    let request = GenerateRequest::from_cli(cli)?;
    let span = Span::current();
    span.record("vertex_count", request.vertex_count);
    span.record("edge_count", request.edge_count);

    let graph = GeneratorBuilder::new()
        .with_vertex_count(request.vertex_count)
        .with_edge_count(request.edge_count)
        .build()?
        .generate(rng)?;

    info!(edges = graph.len(), "generation completed");
    Ok(graph)
}

/// Renders `graph` to `writer`, one `"<a> <b>"` line per edge.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_graph(graph: &GeneratedGraph, writer: impl Write) -> io::Result<()> {
    graph.write_to(writer)
}
