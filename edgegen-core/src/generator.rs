//! Random edge-set generation.
//!
//! [`GeneratorBuilder`] validates a request before any randomness is
//! consumed, so an [`EdgeSetGenerator`] always describes a satisfiable
//! request and [`EdgeSetGenerator::generate`] always terminates.

use rand::{Rng, seq::SliceRandom};
use tracing::{Span, debug, field, instrument, warn};

use crate::{
    GeneratedGraph,
    edge::{Edge, max_edge_count},
    edge_set::EdgeSet,
    error::{GenerateError, Result},
    strategy::SamplingStrategy,
};

/// Vertex count used when the caller does not supply one.
pub const DEFAULT_VERTEX_COUNT: usize = 10;

/// Edge count used when the caller does not supply one.
pub const DEFAULT_EDGE_COUNT: usize = 20;

/// Draws allowed per requested edge before rejection sampling gives up and
/// enumerates the remaining pairs.
const REJECTION_ATTEMPTS_PER_EDGE: usize = 16;

/// Flat allowance added to the rejection budget so tiny requests are not
/// cut short by a few unlucky self-loops.
const REJECTION_ATTEMPT_SLACK: usize = 64;

/// Configures and constructs [`EdgeSetGenerator`] instances.
///
/// # Examples
/// ```
/// use edgegen_core::{GeneratorBuilder, SamplingStrategy};
///
/// let generator = GeneratorBuilder::new()
///     .with_vertex_count(4)
///     .with_edge_count(3)
///     .with_strategy(SamplingStrategy::Rejection)
///     .build()
///     .expect("three of six pairs can be drawn");
/// assert_eq!(generator.vertex_count(), 4);
/// assert_eq!(generator.max_edges(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct GeneratorBuilder {
    vertex_count: usize,
    edge_count: usize,
    strategy: SamplingStrategy,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            vertex_count: DEFAULT_VERTEX_COUNT,
            edge_count: DEFAULT_EDGE_COUNT,
            strategy: SamplingStrategy::Auto,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder populated with the default 10 vertices and 20
    /// edges.
    ///
    /// # Examples
    /// ```
    /// use edgegen_core::GeneratorBuilder;
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!(builder.vertex_count(), 10);
    /// assert_eq!(builder.edge_count(), 20);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vertices.
    #[must_use]
    pub const fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Returns the configured number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Overrides the number of edges to generate.
    #[must_use]
    pub const fn with_edge_count(mut self, edge_count: usize) -> Self {
        self.edge_count = edge_count;
        self
    }

    /// Returns the configured number of edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Selects the sampling strategy.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: SamplingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured sampling strategy.
    #[must_use]
    pub const fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    /// Validates the request and constructs an [`EdgeSetGenerator`].
    ///
    /// # Errors
    /// Returns [`GenerateError::UnsatisfiableRequest`] when more edges are
    /// requested than `vertex_count * (vertex_count - 1) / 2`, which
    /// includes any positive edge count over fewer than two vertices.
    ///
    /// # Examples
    /// ```
    /// use edgegen_core::{GenerateError, GeneratorBuilder};
    ///
    /// let err = GeneratorBuilder::new()
    ///     .with_vertex_count(2)
    ///     .with_edge_count(5)
    ///     .build()
    ///     .expect_err("two vertices admit a single edge");
    /// assert!(matches!(err, GenerateError::UnsatisfiableRequest { max_edges: 1, .. }));
    /// ```
    pub fn build(self) -> Result<EdgeSetGenerator> {
        let max_edges = max_edge_count(self.vertex_count);
        if self.edge_count > max_edges {
            return Err(GenerateError::UnsatisfiableRequest {
                vertex_count: self.vertex_count,
                edge_count: self.edge_count,
                max_edges,
            });
        }
        Ok(EdgeSetGenerator {
            vertex_count: self.vertex_count,
            edge_count: self.edge_count,
            strategy: self.strategy,
        })
    }
}

/// Generates deduplicated random edge lists for a validated request.
///
/// # Examples
/// ```
/// use edgegen_core::GeneratorBuilder;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let generator = GeneratorBuilder::new()
///     .with_vertex_count(4)
///     .with_edge_count(3)
///     .build()
///     .expect("request is satisfiable");
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = generator.generate(&mut rng).expect("generation succeeds");
/// assert_eq!(graph.len(), 3);
/// assert!(graph.edges().iter().all(|edge| edge.high() < 4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSetGenerator {
    vertex_count: usize,
    edge_count: usize,
    strategy: SamplingStrategy,
}

impl EdgeSetGenerator {
    /// Number of vertices edges are drawn from.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges every run produces.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Strategy as configured, before `Auto` is resolved.
    #[must_use]
    pub const fn strategy(&self) -> SamplingStrategy {
        self.strategy
    }

    /// Largest edge count the configured vertex count supports.
    #[must_use]
    pub fn max_edges(&self) -> usize {
        max_edge_count(self.vertex_count)
    }

    /// Draws `edge_count` distinct edges using randomness from `rng` and
    /// returns them in lexicographic order of their rendered lines.
    ///
    /// # Errors
    /// Returns [`GenerateError`] if an edge set invariant is violated while
    /// collecting edges.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GeneratedGraph> {
        self.generate_with_budget(rng, rejection_budget(self.edge_count))
    }

    /// Runs generation, allowing rejection sampling at most `budget` draws
    /// before the unused pairs are enumerated.
    #[instrument(
        name = "generator.generate",
        err,
        skip(self, rng),
        fields(
            vertex_count = self.vertex_count,
            edge_count = self.edge_count,
            strategy = field::Empty,
            attempts = field::Empty,
        ),
    )]
    fn generate_with_budget<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        budget: usize,
    ) -> Result<GeneratedGraph> {
        let strategy = self.strategy.resolve(self.vertex_count, self.edge_count);
        let span = Span::current();
        span.record("strategy", field::display(strategy));

        let mut edges = EdgeSet::new(self.vertex_count, self.edge_count);
        match strategy {
            SamplingStrategy::Rejection => {
                let attempts = sample_by_rejection(&mut edges, rng, budget)?;
                span.record("attempts", attempts);
                if !edges.is_complete() {
                    warn!(
                        attempts,
                        collected = edges.len(),
                        remaining = edges.remaining(),
                        "rejection budget exhausted; enumerating remaining pairs"
                    );
                    fill_from_unused_pairs(&mut edges, rng)?;
                }
            }
            // `resolve` never yields `Auto`.
            SamplingStrategy::Enumeration | SamplingStrategy::Auto => {
                fill_from_unused_pairs(&mut edges, rng)?;
            }
        }

        let graph = GeneratedGraph::new(self.vertex_count, edges.into_sorted_edges());
        debug!(edges = graph.len(), "edge set generated");
        Ok(graph)
    }
}

const fn rejection_budget(target: usize) -> usize {
    target
        .saturating_mul(REJECTION_ATTEMPTS_PER_EDGE)
        .saturating_add(REJECTION_ATTEMPT_SLACK)
}

/// Draws uniform vertex pairs until `edges` is complete or `budget` draws
/// have been made. Returns the number of draws made.
fn sample_by_rejection<R: Rng + ?Sized>(
    edges: &mut EdgeSet,
    rng: &mut R,
    budget: usize,
) -> Result<usize> {
    let vertex_count = edges.vertex_count();
    let mut attempts = 0_usize;
    while !edges.is_complete() && attempts < budget {
        attempts += 1;
        let a = rng.gen_range(0..vertex_count);
        let b = rng.gen_range(0..vertex_count);
        if a == b {
            continue;
        }
        edges.insert(Edge::from_distinct(a, b))?;
    }
    Ok(attempts)
}

/// Completes `edges` by shuffling every pair it does not yet hold and
/// taking as many as are still missing.
fn fill_from_unused_pairs<R: Rng + ?Sized>(edges: &mut EdgeSet, rng: &mut R) -> Result<()> {
    let needed = edges.remaining();
    if needed == 0 {
        return Ok(());
    }
    let vertex_count = edges.vertex_count();
    let mut unused: Vec<Edge> = (0..vertex_count)
        .flat_map(|low| (low + 1..vertex_count).map(move |high| Edge::from_distinct(low, high)))
        .filter(|edge| !edges.contains(edge))
        .collect();
    let (chosen, _) = unused.partial_shuffle(rng, needed);
    for edge in chosen.iter().copied() {
        edges.insert(edge)?;
    }
    Ok(())
}
