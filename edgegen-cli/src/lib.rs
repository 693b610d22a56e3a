//! Support library for the edgegen CLI binary.
//!
//! Re-exports the CLI and logging modules so integration tests can exercise
//! argument handling and generation without forking a subprocess.

pub mod cli;
pub mod logging;
