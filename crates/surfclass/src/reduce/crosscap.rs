//! Crosscap removal (projective-plane step).
//!
//! A pair glued in the same direction reads `a B a C` around the boundary.
//! Cutting along the identified pair and regluing leaves `C^-1 B`: the arc
//! after the pair is traversed backwards with every edge flipped, followed by
//! the arc between the two copies of `a`.

use tracing::debug;

use super::rebuild::reassemble;
use super::{Rewrite, TieBreak};
use crate::error::AlgorithmFault;
use crate::model::{Edge, GluedPair, Surface};

/// A same-direction pair with its edges ordered by canonical position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CrosscapMarkers {
    /// Canonical positions of `low` and `high`, `low` first.
    pub positions: [usize; 2],
    pub low: Edge,
    pub high: Edge,
}

impl CrosscapMarkers {
    #[inline]
    pub fn pair(&self) -> GluedPair {
        GluedPair::new(self.low, self.high)
    }
}

/// All same-direction pairs, sorted by canonical positions.
pub fn crosscap_candidates(surface: &Surface) -> Vec<CrosscapMarkers> {
    if surface.vertex_count() <= 2 {
        return Vec::new();
    }
    let positions = surface.canonical_positions();
    let mut out: Vec<CrosscapMarkers> = surface
        .gluing()
        .iter()
        .filter(|p| p.same_direction())
        .filter_map(|p| {
            let (a, b) = (p.first(), p.second());
            let (pa, pb) = (*positions.get(&a)?, *positions.get(&b)?);
            let (low, high) = if pa < pb { (a, b) } else { (b, a) };
            Some(CrosscapMarkers {
                positions: [pa.min(pb), pa.max(pb)],
                low,
                high,
            })
        })
        .collect();
    out.sort();
    out
}

/// Remove one crosscap, chosen by `choice` among all candidates.
pub fn remove_crosscap(surface: &Surface, choice: TieBreak) -> Result<Rewrite, AlgorithmFault> {
    match choice.pick(&crosscap_candidates(surface)) {
        Some(markers) => remove_crosscap_at(surface, markers),
        None => Ok(Rewrite::Unchanged),
    }
}

/// Remove the crosscap described by `markers`; unchanged if they do not
/// describe a same-direction pair of this surface.
pub fn remove_crosscap_at(
    surface: &Surface,
    markers: CrosscapMarkers,
) -> Result<Rewrite, AlgorithmFault> {
    let pair = markers.pair();
    if surface.vertex_count() <= 2 || !surface.contains_pair(pair) || !pair.same_direction() {
        return Ok(Rewrite::Unchanged);
    }
    let (between, after) = surface.split_at_two(markers.low, markers.high)?;
    let boundary: Vec<(Edge, bool)> = after
        .iter()
        .rev()
        .map(|&e| (e, !e.is_forward()))
        .chain(between.iter().map(|&e| (e, e.is_forward())))
        .collect();

    debug!(
        rule = "crosscap",
        low = %markers.low,
        high = %markers.high,
        from = surface.vertex_count(),
        to = boundary.len(),
        "reduce"
    );
    reassemble(surface, "crosscap", &boundary, &[pair])
}
