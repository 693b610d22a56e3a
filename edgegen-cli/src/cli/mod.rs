//! Command-line interface orchestration for edgegen.
//!
//! Takes two optional positional arguments, a vertex count and an edge
//! count, and prints a random undirected edge list built from them.

mod commands;

pub use commands::{Cli, CliError, GenerateRequest, render_graph, run_cli, run_with_rng};

#[cfg(test)]
mod tests;
