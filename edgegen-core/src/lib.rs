//! edgegen core library.
//!
//! Generates random undirected graphs as deduplicated edge lists. Requests
//! are validated up front by [`GeneratorBuilder::build`]; a built
//! [`EdgeSetGenerator`] then draws edges from any [`rand::Rng`] and returns
//! them ordered by the lexicographic order of their `"<low> <high>"` lines.

mod edge;
mod edge_set;
mod error;
mod generator;
mod graph;
mod strategy;

pub use crate::{
    edge::{Edge, VertexId, max_edge_count},
    edge_set::EdgeSet,
    error::{GenerateError, GenerateErrorCode, Result},
    generator::{DEFAULT_EDGE_COUNT, DEFAULT_VERTEX_COUNT, EdgeSetGenerator, GeneratorBuilder},
    graph::GeneratedGraph,
    strategy::SamplingStrategy,
};
