//! Output checks shared by the integration tests.

use std::collections::HashSet;

use edgegen_core::GeneratedGraph;

/// Parses a rendered `"<a> <b>"` line back into its endpoints.
pub fn parse_line(line: &str) -> (usize, usize) {
    let mut parts = line.split(' ');
    let a = parts
        .next()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| panic!("malformed line `{line}`"));
    let b = parts
        .next()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| panic!("malformed line `{line}`"));
    assert!(parts.next().is_none(), "line `{line}` has extra fields");
    (a, b)
}

/// Checks every output property a generated graph must satisfy, returning a
/// description of the first violation found.
pub fn check_output(
    graph: &GeneratedGraph,
    vertex_count: usize,
    edge_count: usize,
) -> Result<(), String> {
    let lines: Vec<String> = graph.lines().collect();
    if lines.len() != edge_count {
        return Err(format!("expected {edge_count} lines, got {}", lines.len()));
    }
    let mut seen = HashSet::new();
    for line in &lines {
        let (a, b) = parse_line(line);
        if a == b {
            return Err(format!("self loop `{line}`"));
        }
        if a >= vertex_count || b >= vertex_count {
            return Err(format!("`{line}` leaves [0, {vertex_count})"));
        }
        if !seen.insert((a.min(b), a.max(b))) {
            return Err(format!("duplicate edge `{line}`"));
        }
    }
    if lines
        .windows(2)
        .any(|pair| matches!(pair, [before, after] if before > after))
    {
        return Err(format!("lines are not sorted as text: {lines:?}"));
    }
    Ok(())
}
