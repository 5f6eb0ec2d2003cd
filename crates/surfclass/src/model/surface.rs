//! The `Surface` value: a polygon with an even number of corners whose
//! boundary edges are glued in pairs.
//!
//! Invariants (checked once, in `Surface::new`):
//! - `vertex_count` is even and positive.
//! - `edges` holds exactly one oriented edge per boundary position, and every
//!   corner label occurs in exactly two edges.
//! - `gluing` is a perfect matching on `edges` by distinct-edge pairs.
//!
//! The two-corner polygon is special. With the single record `(0, 1)` (or
//! `(1, 0)`) glued to itself it encodes the word `a a^-1` (sphere); with both
//! records `(0, 1)` and `(1, 0)` glued together it encodes `a a` (projective
//! plane). These are the only bigons accepted.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::types::{Edge, GluedPair};
use crate::error::ValidationFault;

/// Immutable polygon-with-gluing.
///
/// Equality compares the `(vertex_count, edges, gluing)` triple; both
/// collections are sets, so the order edges or pairs were supplied in is
/// irrelevant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Surface {
    vertex_count: usize,
    edges: BTreeSet<Edge>,
    gluing: BTreeSet<GluedPair>,
}

impl Surface {
    /// Validate and build a surface.
    ///
    /// Duplicate edge records and duplicate pairs collapse (set semantics);
    /// everything else that breaks an invariant is rejected with the first
    /// violated rule.
    pub fn new<E, P>(vertex_count: usize, edges: E, gluing: P) -> Result<Self, ValidationFault>
    where
        E: IntoIterator,
        E::Item: Into<Edge>,
        P: IntoIterator,
        P::Item: Into<GluedPair>,
    {
        if vertex_count == 0 || vertex_count % 2 != 0 {
            return Err(ValidationFault::OddOrZeroVertexCount(vertex_count));
        }
        let edges: BTreeSet<Edge> = edges.into_iter().map(Into::into).collect();
        let gluing: BTreeSet<GluedPair> = gluing.into_iter().map(Into::into).collect();

        if let Some(edge) = single_edge_bigon(vertex_count, &edges) {
            check_bigon_gluing(edge, &gluing)?;
        } else {
            check_edges(vertex_count, &edges)?;
            check_gluing(&edges, &gluing)?;
        }
        Ok(Self {
            vertex_count,
            edges,
            gluing,
        })
    }

    /// Build from plain tuples, as a boundary layer would receive them.
    pub fn from_tuples(
        vertex_count: usize,
        edges: &[(usize, usize)],
        gluing: &[((usize, usize), (usize, usize))],
    ) -> Result<Self, ValidationFault> {
        Self::new(vertex_count, edges.iter().copied(), gluing.iter().copied())
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    #[inline]
    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    #[inline]
    pub fn gluing(&self) -> &BTreeSet<GluedPair> {
        &self.gluing
    }

    /// Number of letters in the boundary word (half the number of positions).
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.vertex_count / 2
    }

    #[inline]
    pub fn is_bigon(&self) -> bool {
        self.vertex_count == 2
    }

    /// The bigon `a a^-1`: one edge record glued to itself.
    #[inline]
    pub fn is_sphere_bigon(&self) -> bool {
        self.is_bigon() && self.edges.len() == 1
    }

    /// The gluing pair containing `e`.
    pub fn pair_of(&self, e: Edge) -> Option<GluedPair> {
        self.gluing.iter().copied().find(|p| p.contains(e))
    }

    /// The edge glued to `e`.
    pub fn partner(&self, e: Edge) -> Option<Edge> {
        self.gluing.iter().find_map(|p| p.partner(e))
    }

    #[inline]
    pub fn contains_pair(&self, pair: GluedPair) -> bool {
        self.gluing.contains(&pair)
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface with {} vertices, edges {{", self.vertex_count)?;
        for (k, e) in self.edges.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{e}")?;
        }
        f.write_str("}, gluing {")?;
        for (k, p) in self.gluing.iter().enumerate() {
            if k > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        f.write_str("}")
    }
}

fn single_edge_bigon(vertex_count: usize, edges: &BTreeSet<Edge>) -> Option<Edge> {
    if vertex_count != 2 || edges.len() != 1 {
        return None;
    }
    edges
        .iter()
        .copied()
        .find(|&e| e == Edge::new(0, 1) || e == Edge::new(1, 0))
}

fn check_bigon_gluing(edge: Edge, gluing: &BTreeSet<GluedPair>) -> Result<(), ValidationFault> {
    let expected = GluedPair::new(edge, edge);
    if gluing.len() == 1 && gluing.contains(&expected) {
        Ok(())
    } else {
        Err(ValidationFault::MalformedBigon { edge })
    }
}

fn check_edges(n: usize, edges: &BTreeSet<Edge>) -> Result<(), ValidationFault> {
    // Sparse tables: `n` comes from the caller and may be far larger than the input.
    let mut degree: BTreeMap<usize, usize> = BTreeMap::new();
    let mut occupied: BTreeMap<usize, Edge> = BTreeMap::new();
    for &e in edges {
        if e.tail >= n || e.head >= n {
            return Err(ValidationFault::LabelOutOfRange {
                edge: e,
                vertex_count: n,
            });
        }
        if e.tail != (e.head + 1) % n && e.head != (e.tail + 1) % n {
            return Err(ValidationFault::NotBoundaryEdge(e));
        }
        // Both directions on one position are only meaningful for the bigon.
        if n != 2 && occupied.insert(e.position(n), e).is_some() {
            return Err(ValidationFault::ConflictingDirection(e));
        }
        *degree.entry(e.tail).or_default() += 1;
        *degree.entry(e.head).or_default() += 1;
    }
    match first_bad_degree(n, &degree) {
        Some((vertex, count)) => Err(ValidationFault::VertexDegree { vertex, count }),
        None => Ok(()),
    }
}

/// Smallest corner whose degree is not 2; corners absent from `degree` have degree 0.
fn first_bad_degree(n: usize, degree: &BTreeMap<usize, usize>) -> Option<(usize, usize)> {
    let mut expected = 0;
    for (&vertex, &count) in degree {
        if vertex != expected {
            return Some((expected, 0));
        }
        if count != 2 {
            return Some((vertex, count));
        }
        expected += 1;
    }
    (expected < n).then_some((expected, 0))
}

fn check_gluing(edges: &BTreeSet<Edge>, gluing: &BTreeSet<GluedPair>) -> Result<(), ValidationFault> {
    let mut seen: BTreeSet<Edge> = BTreeSet::new();
    for &pair in gluing {
        for edge in pair.edges() {
            if !edges.contains(&edge) {
                return Err(ValidationFault::GluedEdgeUnknown { pair, edge });
            }
        }
        if pair.is_self_paired() {
            return Err(ValidationFault::SelfPaired(pair));
        }
        for edge in pair.edges() {
            if !seen.insert(edge) {
                return Err(ValidationFault::EdgeGluedTwice { pair, edge });
            }
        }
    }
    match edges.difference(&seen).next() {
        Some(&missing) => Err(ValidationFault::EdgeNotGlued(missing)),
        None => Ok(()),
    }
}
