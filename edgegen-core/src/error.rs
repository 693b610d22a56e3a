//! Error types for the edgegen core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::edge::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running an
/// [`crate::EdgeSetGenerator`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GenerateError {
    /// More edges were requested than distinct unordered pairs exist.
    #[error(
        "cannot draw {edge_count} distinct edges from {vertex_count} vertices \
         (at most {max_edges} are possible)"
    )]
    UnsatisfiableRequest {
        /// Number of vertices in the requested graph.
        vertex_count: usize,
        /// Number of edges requested by the caller.
        edge_count: usize,
        /// Largest edge count the vertex count supports.
        max_edges: usize,
    },
    /// Both endpoints of an edge referred to the same vertex.
    #[error("edge endpoints must differ (both were {vertex})")]
    SelfLoop {
        /// The vertex used for both endpoints.
        vertex: VertexId,
    },
    /// An edge endpoint fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: VertexId,
        /// Number of vertices the edge set was created for.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GenerateError`] variants.
    enum GenerateErrorCode for GenerateError {
        /// More edges were requested than distinct unordered pairs exist.
        UnsatisfiableRequest => UnsatisfiableRequest { .. } => "EDGEGEN_UNSATISFIABLE_REQUEST",
        /// Both endpoints of an edge referred to the same vertex.
        SelfLoop => SelfLoop { .. } => "EDGEGEN_SELF_LOOP",
        /// An edge endpoint fell outside the vertex range.
        VertexOutOfRange => VertexOutOfRange { .. } => "EDGEGEN_VERTEX_OUT_OF_RANGE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GenerateError>;
