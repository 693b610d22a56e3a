//! Output of a generator run.

use std::io::{self, Write};

use crate::edge::Edge;

/// Edges produced by [`crate::EdgeSetGenerator::generate`], already in
/// output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedGraph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl GeneratedGraph {
    pub(crate) const fn new(vertex_count: usize, edges: Vec<Edge>) -> Self {
        Self {
            vertex_count,
            edges,
        }
    }

    /// Vertex count the edges were drawn from.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Edges in lexicographic order of their rendered lines.
    #[must_use]
    pub const fn edges(&self) -> &[Edge] {
        self.edges.as_slice()
    }

    /// Number of edges.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.edges.len()
    }

    /// Reports whether the graph has no edges.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Rendered output lines, `"<low> <high>"`, in output order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.edges.iter().map(ToString::to_string)
    }

    /// Writes one line per edge to `writer`.
    ///
    /// # Errors
    /// Returns [`io::Error`] if writing to `writer` fails.
    pub fn write_to(&self, mut writer: impl Write) -> io::Result<()> {
        for edge in &self.edges {
            writeln!(writer, "{edge}")?;
        }
        Ok(())
    }
}
