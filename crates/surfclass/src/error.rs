//! Fault taxonomy for surface construction and classification.
//!
//! - `ValidationFault`: a `(vertex_count, edges, gluing)` triple was rejected at
//!   construction. Each variant names the rule and carries the offending value.
//! - `AlgorithmFault`: the reduction loop could not make progress, or a split
//!   was requested with markers that are not in canonical order.
//! - `WordError`: boundary-word text that does not describe a gluing.
//! - `SurfaceError`: umbrella for callers running Construct → Classify in one go.
//!
//! Nothing here is recovered locally; faults propagate to the boundary layer.

use thiserror::Error;

use crate::model::{Edge, GluedPair};

/// Rejection of a polygon-with-gluing at construction time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationFault {
    #[error("vertex count must be an even positive integer, got {0}")]
    OddOrZeroVertexCount(usize),
    #[error("edge {edge} has a label outside 0..{vertex_count}")]
    LabelOutOfRange { edge: Edge, vertex_count: usize },
    #[error("edge {0} is not a boundary edge; edges must be of the form (i, i+1) or (i+1, i)")]
    NotBoundaryEdge(Edge),
    #[error("edges cannot contain both (i, i+1) and (i+1, i); conflicting edge {0}")]
    ConflictingDirection(Edge),
    #[error("vertex {vertex} appears in {count} edges, expected exactly 2")]
    VertexDegree { vertex: usize, count: usize },
    #[error("gluing pair {pair} references edge {edge}, which is not on the boundary")]
    GluedEdgeUnknown { pair: GluedPair, edge: Edge },
    #[error("gluing pair {0} glues an edge to itself")]
    SelfPaired(GluedPair),
    #[error("edge {edge} appears in more than one gluing pair (again in {pair})")]
    EdgeGluedTwice { pair: GluedPair, edge: Edge },
    #[error("edge {0} is not covered by any gluing pair")]
    EdgeNotGlued(Edge),
    #[error("a single-edge bigon must glue {edge} to itself and nothing else")]
    MalformedBigon { edge: Edge },
}

/// Failure of the reduction machinery on an already validated surface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgorithmFault {
    /// No rule applies although the polygon still has more than two corners.
    #[error("no reduction rule applies to a surface with {vertex_count} vertices")]
    Stuck { vertex_count: usize },
    #[error("split marker {0} is not a boundary edge of this surface")]
    UnknownMarker(Edge),
    #[error("split markers must be strictly increasing in canonical order, got positions {positions:?}")]
    MarkersOutOfOrder { positions: Vec<usize> },
    /// A rewrite produced a triple that fails construction.
    #[error("rewrite by {rule} produced an invalid surface: {source}")]
    InvalidRewrite {
        rule: &'static str,
        #[source]
        source: ValidationFault,
    },
}

/// Any fault, for one-shot pipelines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    #[error(transparent)]
    Validation(#[from] ValidationFault),
    #[error(transparent)]
    Algorithm(#[from] AlgorithmFault),
    #[error(transparent)]
    Word(#[from] WordError),
}

/// Malformed boundary-word text or letter multiset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WordError {
    #[error("boundary word is empty")]
    Empty,
    #[error("unexpected {found:?} at byte {offset} of boundary word")]
    BadToken { offset: usize, found: char },
    #[error("boundary word ends inside an exponent at byte {offset}")]
    Truncated { offset: usize },
    #[error("letter {letter} occurs {count} times, expected exactly 2")]
    LetterCount { letter: String, count: usize },
    #[error(transparent)]
    Invalid(#[from] ValidationFault),
}
