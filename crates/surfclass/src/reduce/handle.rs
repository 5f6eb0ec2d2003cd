//! Handle removal (torus step).
//!
//! Two opposite-direction pairs whose chords cross read
//! `a A1 b A2 a^-1 A3 b^-1 A4` around the boundary. The commutator splits off
//! as a torus summand and the remaining word is `A4 A3 A2 A1`, every edge kept
//! in its original direction.

use tracing::debug;

use super::rebuild::reassemble;
use super::{Rewrite, TieBreak};
use crate::error::AlgorithmFault;
use crate::model::{Edge, GluedPair, Surface};

/// Interleaved pairs `(e1, e3)` and `(e2, e4)` with `e1 < e2 < e3 < e4` canonically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandleMarkers {
    pub positions: [usize; 4],
    pub edges: [Edge; 4],
}

impl HandleMarkers {
    #[inline]
    pub fn pairs(&self) -> [GluedPair; 2] {
        let [e1, e2, e3, e4] = self.edges;
        [GluedPair::new(e1, e3), GluedPair::new(e2, e4)]
    }
}

/// All crossing pairs of opposite-direction pairs, sorted by position quadruple.
pub fn handle_candidates(surface: &Surface) -> Vec<HandleMarkers> {
    if surface.vertex_count() < 4 {
        return Vec::new();
    }
    let order = surface.canonical_order();
    let positions = surface.canonical_positions();
    let chords: Vec<(usize, usize)> = surface
        .gluing()
        .iter()
        .filter(|p| !p.same_direction())
        .filter_map(|p| {
            let (pa, pb) = (*positions.get(&p.first())?, *positions.get(&p.second())?);
            Some((pa.min(pb), pa.max(pb)))
        })
        .collect();

    let mut out = Vec::new();
    for &(a1, a3) in &chords {
        for &(b2, b4) in &chords {
            if a1 < b2 && b2 < a3 && a3 < b4 {
                let positions = [a1, b2, a3, b4];
                out.push(HandleMarkers {
                    positions,
                    edges: positions.map(|k| order[k]),
                });
            }
        }
    }
    out.sort();
    out
}

/// Remove one handle, chosen by `choice` among all candidates.
pub fn remove_handle(surface: &Surface, choice: TieBreak) -> Result<Rewrite, AlgorithmFault> {
    match choice.pick(&handle_candidates(surface)) {
        Some(markers) => remove_handle_at(surface, markers),
        None => Ok(Rewrite::Unchanged),
    }
}

/// Remove the handle described by `markers`; unchanged if the markers are not
/// two crossing opposite-direction pairs of this surface.
pub fn remove_handle_at(surface: &Surface, markers: HandleMarkers) -> Result<Rewrite, AlgorithmFault> {
    let pairs = markers.pairs();
    if pairs
        .iter()
        .any(|p| !surface.contains_pair(*p) || p.same_direction())
    {
        return Ok(Rewrite::Unchanged);
    }
    let [e1, e2, e3, e4] = markers.edges;
    let [a1, a2, a3, a4] = surface.split_at_four(e1, e2, e3, e4)?;
    let boundary: Vec<(Edge, bool)> = [a4, a3, a2, a1]
        .iter()
        .flatten()
        .map(|&e| (e, e.is_forward()))
        .collect();

    debug!(
        rule = "handle",
        positions = ?markers.positions,
        from = surface.vertex_count(),
        to = boundary.len(),
        "reduce"
    );
    reassemble(surface, "handle", &boundary, &pairs)
}
