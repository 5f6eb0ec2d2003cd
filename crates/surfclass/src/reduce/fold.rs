//! Fold cancellation (sphere step).
//!
//! At corner `i` the incoming edge sits at position `i-1` and the outgoing
//! edge at position `i`. If they are glued with opposite directions (`x^-1 x`
//! or `x x^-1` around `i`) the fold closes up: corner `i` disappears and its
//! two neighbours merge.

use tracing::debug;

use super::Rewrite;
use crate::error::AlgorithmFault;
use crate::model::{Edge, GluedPair, Surface};

/// First corner (in label order) whose two incident edges cancel.
pub fn find_fold(surface: &Surface) -> Option<usize> {
    let n = surface.vertex_count();
    if n <= 2 {
        return None;
    }
    (0..n).find(|&i| {
        let [before, after] = fold_edges(i, n);
        surface.contains_pair(GluedPair::new(before, after))
            || surface.contains_pair(GluedPair::new(before.reversed(), after.reversed()))
    })
}

/// Remove the first fold, shrinking the polygon by two corners.
pub fn remove_fold(surface: &Surface) -> Result<Rewrite, AlgorithmFault> {
    let Some(i) = find_fold(surface) else {
        return Ok(Rewrite::Unchanged);
    };
    let n = surface.vertex_count();
    let m = n - 2;
    let [before, after] = fold_edges(i, n);
    let removed = [before, after, before.reversed(), after.reversed()];

    // Corner 0 is special: only one label below the cut shifts.
    let relabel = |x: usize| -> usize {
        let shifted = if i == 0 {
            x.saturating_sub(1)
        } else if x > i {
            x - 2
        } else {
            x
        };
        shifted % m
    };
    let relabel_edge = |e: Edge| Edge::new(relabel(e.tail), relabel(e.head));

    let edges: Vec<Edge> = surface
        .edges()
        .iter()
        .copied()
        .filter(|e| !removed.contains(e))
        .map(relabel_edge)
        .collect();
    let gluing: Vec<GluedPair> = surface
        .gluing()
        .iter()
        .filter(|p| !p.edges().iter().any(|e| removed.contains(e)))
        .map(|p| GluedPair::new(relabel_edge(p.first()), relabel_edge(p.second())))
        .collect();

    debug!(rule = "fold", vertex = i, from = n, to = m, "reduce");
    Surface::new(m, edges, gluing)
        .map(Rewrite::Reduced)
        .map_err(|source| AlgorithmFault::InvalidRewrite {
            rule: "fold",
            source,
        })
}

/// `(i, i-1)` and `(i, i+1)`: both incident edges oriented away from corner `i`.
fn fold_edges(i: usize, n: usize) -> [Edge; 2] {
    [Edge::new(i, (i + n - 1) % n), Edge::new(i, (i + 1) % n)]
}
