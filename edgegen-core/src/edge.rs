//! Vertex and edge primitives.
//!
//! An [`Edge`] is an unordered pair of distinct vertices. Pairs are
//! normalised on construction so the smaller identifier is always stored
//! first; equality, hashing and rendering therefore ignore the order the
//! endpoints were supplied in.

use std::fmt;

use crate::error::{GenerateError, Result};

/// Identifier of a vertex in `[0, vertex_count)`.
pub type VertexId = usize;

/// Unordered pair of two distinct vertices.
///
/// # Examples
/// ```
/// use edgegen_core::Edge;
///
/// let edge = Edge::new(7, 3).expect("endpoints differ");
/// assert_eq!(edge, Edge::new(3, 7).expect("endpoints differ"));
/// assert_eq!(edge.endpoints(), (3, 7));
/// assert_eq!(edge.to_string(), "3 7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    low: VertexId,
    high: VertexId,
}

impl Edge {
    /// Creates an edge between `a` and `b`.
    ///
    /// # Errors
    /// Returns [`GenerateError::SelfLoop`] when `a == b`.
    pub const fn new(a: VertexId, b: VertexId) -> Result<Self> {
        if a == b {
            return Err(GenerateError::SelfLoop { vertex: a });
        }
        Ok(Self::from_distinct(a, b))
    }

    /// Builds an edge from endpoints the caller already knows to differ.
    pub(crate) const fn from_distinct(a: VertexId, b: VertexId) -> Self {
        if a < b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    pub const fn low(self) -> VertexId {
        self.low
    }

    /// Returns the larger endpoint.
    #[must_use]
    pub const fn high(self) -> VertexId {
        self.high
    }

    /// Returns both endpoints, smaller first.
    #[must_use]
    pub const fn endpoints(self) -> (VertexId, VertexId) {
        (self.low, self.high)
    }

    /// Reports whether `vertex` is one of the endpoints.
    #[must_use]
    pub const fn contains(self, vertex: VertexId) -> bool {
        self.low == vertex || self.high == vertex
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.low, self.high)
    }
}

/// Returns the number of distinct unordered pairs over `vertex_count`
/// vertices, `n * (n - 1) / 2`, saturating at [`usize::MAX`].
///
/// # Examples
/// ```
/// use edgegen_core::max_edge_count;
///
/// assert_eq!(max_edge_count(0), 0);
/// assert_eq!(max_edge_count(1), 0);
/// assert_eq!(max_edge_count(4), 6);
/// ```
#[must_use]
pub fn max_edge_count(vertex_count: usize) -> usize {
    let n = vertex_count as u128;
    // n * (n - 1) is even, so the shift halves it exactly.
    let pairs = (n * n.saturating_sub(1)) >> 1;
    usize::try_from(pairs).unwrap_or(usize::MAX)
}
