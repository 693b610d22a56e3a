//! Unit tests for argument handling and command execution.

use super::commands::parse_count;
use super::{Cli, CliError, GenerateRequest, render_graph, run_cli, run_with_rng};

use std::collections::HashSet;

use clap::Parser;
use edgegen_core::GenerateError;
use rand::{SeedableRng, rngs::SmallRng};
use rstest::{fixture, rstest};

type TestResult = Result<(), Box<dyn std::error::Error>>;

#[fixture]
fn rng() -> SmallRng {
    SmallRng::seed_from_u64(17)
}

fn cli(vertices: Option<&str>, edges: Option<&str>) -> Cli {
    Cli {
        vertices: vertices.map(ToOwned::to_owned),
        edges: edges.map(ToOwned::to_owned),
    }
}

fn run_expecting_error(cli: &Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

#[rstest]
#[case::absent(None, 10, 10)]
#[case::plain(Some("7"), 10, 7)]
#[case::padded(Some(" 12 "), 10, 12)]
#[case::zero(Some("0"), 10, 0)]
fn parse_count_accepts_integers(
    #[case] raw: Option<&str>,
    #[case] default: usize,
    #[case] expected: usize,
) -> TestResult {
    assert_eq!(parse_count("VERTICES", raw, default)?, expected);
    Ok(())
}

#[rstest]
#[case::word("ten")]
#[case::negative("-3")]
#[case::fraction("2.5")]
#[case::empty("")]
fn parse_count_rejects_non_integers(#[case] raw: &str) {
    let err = parse_count("EDGES", Some(raw), 20).expect_err("value must be rejected");
    match err {
        CliError::InvalidArgument { name, value, .. } => {
            assert_eq!(name, "EDGES");
            assert_eq!(value, raw);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn request_defaults_to_ten_vertices_and_twenty_edges() -> TestResult {
    let request = GenerateRequest::from_cli(&Cli::default())?;
    assert_eq!(request, GenerateRequest::default());
    assert_eq!(request.vertex_count, 10);
    assert_eq!(request.edge_count, 20);
    Ok(())
}

#[test]
fn clap_parses_positional_counts() -> TestResult {
    let parsed = Cli::try_parse_from(["edgegen", "4", "3"])?;
    assert_eq!(parsed.vertices.as_deref(), Some("4"));
    assert_eq!(parsed.edges.as_deref(), Some("3"));
    let request = GenerateRequest::from_cli(&parsed)?;
    assert_eq!(request.vertex_count, 4);
    assert_eq!(request.edge_count, 3);
    Ok(())
}

#[test]
fn clap_passes_negative_numbers_through() -> TestResult {
    let parsed = Cli::try_parse_from(["edgegen", "-4"])?;
    assert_eq!(parsed.vertices.as_deref(), Some("-4"));
    Ok(())
}

#[test]
fn clap_rejects_a_third_positional() {
    assert!(Cli::try_parse_from(["edgegen", "4", "3", "2"]).is_err());
}

#[rstest]
fn run_with_rng_produces_requested_edges(mut rng: SmallRng) -> TestResult {
    let graph = run_with_rng(&cli(Some("4"), Some("3")), &mut rng)?;
    assert_eq!(graph.len(), 3);
    let distinct: HashSet<_> = graph.edges().iter().map(|edge| edge.endpoints()).collect();
    assert_eq!(distinct.len(), 3);
    assert!(graph.edges().iter().all(|edge| edge.high() < 4));
    Ok(())
}

#[test]
fn run_cli_uses_defaults() -> TestResult {
    let graph = run_cli(&Cli::default())?;
    assert_eq!(graph.vertex_count(), 10);
    assert_eq!(graph.len(), 20);
    Ok(())
}

#[test]
fn run_cli_rejects_unsatisfiable_requests() {
    let err = run_expecting_error(&cli(Some("2"), Some("5")), "two vertices admit one edge");
    assert!(matches!(
        err,
        CliError::Generate(GenerateError::UnsatisfiableRequest { max_edges: 1, .. })
    ));
    assert_eq!(err.code(), "EDGEGEN_UNSATISFIABLE_REQUEST");
}

#[test]
fn run_cli_rejects_garbage_arguments() {
    let err = run_expecting_error(&cli(Some("lots"), None), "garbage must be rejected");
    assert!(matches!(
        err,
        CliError::InvalidArgument {
            name: "VERTICES",
            ..
        }
    ));
    assert_eq!(err.code(), "EDGEGEN_INVALID_ARGUMENT");
}

#[rstest]
fn render_graph_writes_sorted_lines(mut rng: SmallRng) -> TestResult {
    let graph = run_with_rng(&cli(Some("12"), Some("66")), &mut rng)?;
    let mut buffer = Vec::new();
    render_graph(&graph, &mut buffer)?;
    let output = String::from_utf8(buffer)?;
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 66);
    let mut sorted = lines.clone();
    sorted.sort_unstable();
    assert_eq!(lines, sorted);
    assert!(output.ends_with('\n'));
    Ok(())
}
