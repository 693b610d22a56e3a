//! Stable error code tests.

use edgegen_core::{GenerateError, GenerateErrorCode};
use rstest::rstest;

#[rstest]
#[case(
    GenerateError::UnsatisfiableRequest { vertex_count: 2, edge_count: 5, max_edges: 1 },
    GenerateErrorCode::UnsatisfiableRequest,
    "EDGEGEN_UNSATISFIABLE_REQUEST",
)]
#[case(
    GenerateError::SelfLoop { vertex: 3 },
    GenerateErrorCode::SelfLoop,
    "EDGEGEN_SELF_LOOP",
)]
#[case(
    GenerateError::VertexOutOfRange { vertex: 9, vertex_count: 4 },
    GenerateErrorCode::VertexOutOfRange,
    "EDGEGEN_VERTEX_OUT_OF_RANGE",
)]
fn returns_expected_code(
    #[case] error: GenerateError,
    #[case] expected: GenerateErrorCode,
    #[case] label: &str,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().as_str(), label);
    assert_eq!(expected.to_string(), label);
}

#[test]
fn unsatisfiable_message_names_the_limit() {
    let error = GenerateError::UnsatisfiableRequest {
        vertex_count: 2,
        edge_count: 5,
        max_edges: 1,
    };
    assert_eq!(
        error.to_string(),
        "cannot draw 5 distinct edges from 2 vertices (at most 1 are possible)"
    );
}
