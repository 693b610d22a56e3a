//! Benchmark support crate for edgegen.
//!
//! Describes the request shapes the Criterion benchmarks sweep so the
//! strategies can be compared at matching densities.

use std::fmt;

use edgegen_core::max_edge_count;

/// Seed used for every benchmark RNG.
pub const SEED: u64 = 42;

/// Vertex counts swept by the generator benchmarks.
pub const VERTEX_COUNTS: &[usize] = &[100, 1_000];

/// Requested densities, in percent of the full pair space.
pub const DENSITY_PERCENTS: &[usize] = &[1, 10, 50, 90, 100];

/// Parameters for a single generator benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerateBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges requested.
    pub edge_count: usize,
    /// Density the edge count was derived from, in percent.
    pub density_percent: usize,
}

impl GenerateBenchParams {
    /// Derives the edge count for `density_percent` of the pairs available
    /// over `vertex_count` vertices, rounding down.
    #[must_use]
    pub fn at_density(vertex_count: usize, density_percent: usize) -> Self {
        let max_edges = max_edge_count(vertex_count);
        let edge_count = max_edges
            .saturating_mul(density_percent.min(100))
            .checked_div(100)
            .unwrap_or(0);
        Self {
            vertex_count,
            edge_count,
            density_percent,
        }
    }

    /// Full sweep of vertex counts and densities.
    #[must_use]
    pub fn sweep() -> Vec<Self> {
        VERTEX_COUNTS
            .iter()
            .flat_map(|&vertices| {
                DENSITY_PERCENTS
                    .iter()
                    .map(move |&density| Self::at_density(vertices, density))
            })
            .collect()
    }
}

impl fmt::Display for GenerateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},m={},d={}%",
            self.vertex_count, self.edge_count, self.density_percent
        )
    }
}
