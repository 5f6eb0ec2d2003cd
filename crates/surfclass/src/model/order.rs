//! Canonical cyclic order of boundary edges and arc splitting.
//!
//! Purpose
//! - Fix one deterministic starting point on the boundary cycle so that arc
//!   splitting is well defined: edges sorted by their larger label, with the
//!   wraparound edge (labels differing by more than one) moved to the end.
//! - Split the cycle at k marker edges into the k open arcs between them.
//!
//! For polygons with more than two corners the canonical index of an edge
//! equals its boundary position (`Edge::position`).

use std::collections::BTreeMap;

use super::surface::Surface;
use super::types::Edge;
use crate::error::AlgorithmFault;

impl Surface {
    /// Boundary edges in canonical order.
    pub fn canonical_order(&self) -> Vec<Edge> {
        let mut order: Vec<Edge> = self.edges().iter().copied().collect();
        // Stable: ties (bigon only) keep the set order.
        order.sort_by_key(|e| e.max_label());
        if let Some(k) = order.iter().position(|e| e.is_wrap()) {
            let wrap = order.remove(k);
            order.push(wrap);
        }
        order
    }

    /// Edge → canonical index lookup.
    pub fn canonical_positions(&self) -> BTreeMap<Edge, usize> {
        self.canonical_order()
            .into_iter()
            .enumerate()
            .map(|(k, e)| (e, k))
            .collect()
    }

    /// Open arcs strictly between `a` and `b`, and from `b` around back to `a`.
    ///
    /// Pre: `a` precedes `b` in canonical order.
    pub fn split_at_two(&self, a: Edge, b: Edge) -> Result<(Vec<Edge>, Vec<Edge>), AlgorithmFault> {
        let mut arcs = self.split_at(&[a, b])?;
        let outer = arcs.pop().unwrap_or_default();
        let inner = arcs.pop().unwrap_or_default();
        Ok((inner, outer))
    }

    /// The four open arcs between four markers in canonical order.
    pub fn split_at_four(
        &self,
        e1: Edge,
        e2: Edge,
        e3: Edge,
        e4: Edge,
    ) -> Result<[Vec<Edge>; 4], AlgorithmFault> {
        let mut arcs = self.split_at(&[e1, e2, e3, e4])?;
        let a4 = arcs.pop().unwrap_or_default();
        let a3 = arcs.pop().unwrap_or_default();
        let a2 = arcs.pop().unwrap_or_default();
        let a1 = arcs.pop().unwrap_or_default();
        Ok([a1, a2, a3, a4])
    }

    /// One open arc per marker: arc `i` runs from marker `i` to marker `i+1`,
    /// the last one wraps from the final marker back to the first.
    ///
    /// Markers must have strictly increasing canonical positions.
    pub fn split_at(&self, markers: &[Edge]) -> Result<Vec<Vec<Edge>>, AlgorithmFault> {
        let order = self.canonical_order();
        let positions = markers
            .iter()
            .map(|&m| {
                order
                    .iter()
                    .position(|&e| e == m)
                    .ok_or(AlgorithmFault::UnknownMarker(m))
            })
            .collect::<Result<Vec<usize>, _>>()?;
        if positions.windows(2).any(|w| w[0] >= w[1]) {
            return Err(AlgorithmFault::MarkersOutOfOrder { positions });
        }
        let Some((&first, &last)) = positions.first().zip(positions.last()) else {
            return Ok(Vec::new());
        };
        let mut arcs: Vec<Vec<Edge>> = positions
            .windows(2)
            .map(|w| order[w[0] + 1..w[1]].to_vec())
            .collect();
        let mut closing = order[last + 1..].to_vec();
        closing.extend_from_slice(&order[..first]);
        arcs.push(closing);
        Ok(arcs)
    }
}
