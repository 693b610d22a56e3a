//! Deduplicating edge collection bound to a vertex range and a target size.

use std::collections::HashSet;

use crate::edge::{Edge, VertexId, max_edge_count};
use crate::error::{GenerateError, Result};

/// Set of distinct [`Edge`] values that never grows beyond its target.
///
/// # Examples
/// ```
/// use edgegen_core::{Edge, EdgeSet};
///
/// let mut set = EdgeSet::new(4, 2);
/// assert!(set.insert(Edge::new(0, 1)?)?);
/// assert!(!set.insert(Edge::new(1, 0)?)?);
/// assert!(set.insert(Edge::new(2, 3)?)?);
/// assert!(set.is_complete());
/// # Ok::<(), edgegen_core::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EdgeSet {
    vertex_count: usize,
    target: usize,
    edges: HashSet<Edge>,
}

impl EdgeSet {
    /// Creates an empty set accepting endpoints in `[0, vertex_count)` and
    /// holding at most `target` edges.
    #[must_use]
    pub fn new(vertex_count: usize, target: usize) -> Self {
        let capacity = target.min(max_edge_count(vertex_count));
        Self {
            vertex_count,
            target,
            edges: HashSet::with_capacity(capacity),
        }
    }

    /// Inserts `edge`, returning `true` when it was not already present.
    ///
    /// Once the set holds `target` edges further insertions are ignored and
    /// report `false`.
    ///
    /// # Errors
    /// Returns [`GenerateError::VertexOutOfRange`] when an endpoint lies
    /// outside the vertex range.
    pub fn insert(&mut self, edge: Edge) -> Result<bool> {
        let high: VertexId = edge.high();
        if high >= self.vertex_count {
            return Err(GenerateError::VertexOutOfRange {
                vertex: high,
                vertex_count: self.vertex_count,
            });
        }
        if self.is_complete() {
            return Ok(false);
        }
        Ok(self.edges.insert(edge))
    }

    /// Reports whether `edge` is already in the set.
    #[must_use]
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Number of edges collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Reports whether no edges have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Vertex count the set validates endpoints against.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of edges the set is collecting towards.
    #[must_use]
    pub const fn target(&self) -> usize {
        self.target
    }

    /// Number of edges still missing before the target is reached.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.target.saturating_sub(self.len())
    }

    /// Reports whether the target size has been reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len() >= self.target
    }

    /// Iterates the collected edges in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Consumes the set, returning its edges ordered by the lexicographic
    /// order of their rendered text.
    ///
    /// Ordering is by string comparison, not by number, so `"0 10"` sorts
    /// before `"0 2"`.
    #[must_use]
    pub fn into_sorted_edges(self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.edges.into_iter().collect();
        edges.sort_by_cached_key(ToString::to_string);
        edges
    }
}
