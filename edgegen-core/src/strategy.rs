//! Sampling strategy selection.

use std::fmt;

use crate::edge::max_edge_count;

/// How [`crate::EdgeSetGenerator`] draws its edges.
///
/// Rejection sampling is cheap while few pairs are taken but its retry rate
/// climbs as the request approaches the full pair space; enumeration costs
/// memory proportional to the pair space but never retries. `Auto` picks
/// enumeration once more than half of all pairs are requested.
///
/// # Examples
/// ```
/// use edgegen_core::SamplingStrategy;
///
/// assert_eq!(SamplingStrategy::Auto.resolve(10, 20), SamplingStrategy::Rejection);
/// assert_eq!(SamplingStrategy::Auto.resolve(10, 40), SamplingStrategy::Enumeration);
/// assert_eq!(SamplingStrategy::Rejection.resolve(10, 40), SamplingStrategy::Rejection);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SamplingStrategy {
    /// Choose between rejection and enumeration from the requested density.
    #[default]
    Auto,
    /// Draw random pairs and discard self-loops and duplicates. Falls back
    /// to enumeration if the attempt budget runs out.
    Rejection,
    /// Enumerate every pair, shuffle, and keep a prefix.
    Enumeration,
}

impl SamplingStrategy {
    /// Resolves `Auto` into a concrete strategy for the given request.
    /// Concrete strategies are returned unchanged.
    #[must_use]
    pub fn resolve(self, vertex_count: usize, edge_count: usize) -> Self {
        match self {
            Self::Auto => {
                if edge_count.saturating_mul(2) > max_edge_count(vertex_count) {
                    Self::Enumeration
                } else {
                    Self::Rejection
                }
            }
            concrete => concrete,
        }
    }

    /// Stable lowercase label used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Rejection => "rejection",
            Self::Enumeration => "enumeration",
        }
    }
}

impl fmt::Display for SamplingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::sparse(10, 20, SamplingStrategy::Rejection)]
    #[case::exactly_half(10, 22, SamplingStrategy::Rejection)]
    #[case::just_over_half(10, 23, SamplingStrategy::Enumeration)]
    #[case::complete(10, 45, SamplingStrategy::Enumeration)]
    #[case::empty_request(0, 0, SamplingStrategy::Rejection)]
    #[case::huge_vertex_count(usize::MAX, 1_000, SamplingStrategy::Rejection)]
    fn auto_switches_on_density(
        #[case] vertices: usize,
        #[case] edges: usize,
        #[case] expected: SamplingStrategy,
    ) {
        assert_eq!(SamplingStrategy::Auto.resolve(vertices, edges), expected);
    }

    #[rstest]
    #[case(SamplingStrategy::Rejection)]
    #[case(SamplingStrategy::Enumeration)]
    fn concrete_strategies_resolve_to_themselves(#[case] strategy: SamplingStrategy) {
        assert_eq!(strategy.resolve(4, 6), strategy);
        assert_eq!(strategy.resolve(100, 1), strategy);
    }

    #[test]
    fn labels_are_lowercase() {
        assert_eq!(SamplingStrategy::default().to_string(), "auto");
        assert_eq!(SamplingStrategy::Enumeration.as_str(), "enumeration");
    }
}
