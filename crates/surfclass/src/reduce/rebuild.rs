//! Shared reassembly step for the crosscap and handle rules.
//!
//! Given the surviving old edges in their new boundary order, together with the
//! direction each must take, assign new positions `0..m`, derive the new edge
//! records from position and direction alone, and carry every surviving gluing
//! pair over through the old → new lookup.

use std::collections::BTreeMap;

use super::Rewrite;
use crate::error::AlgorithmFault;
use crate::model::{Edge, GluedPair, Surface};

/// Rebuild a surface from `boundary` (old edge, new direction), dropping `consumed` pairs.
pub(crate) fn reassemble(
    surface: &Surface,
    rule: &'static str,
    boundary: &[(Edge, bool)],
    consumed: &[GluedPair],
) -> Result<Rewrite, AlgorithmFault> {
    let m = boundary.len();
    if m == 0 {
        return Ok(Rewrite::Collapsed);
    }
    let renamed: BTreeMap<Edge, Edge> = boundary
        .iter()
        .enumerate()
        .map(|(k, &(old, forward))| (old, Edge::at(k, forward, m)))
        .collect();
    let lookup = |e: Edge| renamed.get(&e).copied().ok_or(AlgorithmFault::UnknownMarker(e));

    let gluing = surface
        .gluing()
        .iter()
        .filter(|p| !consumed.contains(p))
        .map(|p| -> Result<GluedPair, AlgorithmFault> {
            Ok(GluedPair::new(lookup(p.first())?, lookup(p.second())?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Surface::new(m, renamed.values().copied(), gluing)
        .map(Rewrite::Reduced)
        .map_err(|source| AlgorithmFault::InvalidRewrite { rule, source })
}
