//! Reduction Engine: three rewrite rules on `Surface`.
//!
//! Purpose
//! - `fold`: cancel an adjacent `x x^-1` pair (sphere summand), −2 corners.
//! - `crosscap`: remove a same-direction pair `a … a` (projective-plane
//!   summand), −2 corners.
//! - `handle`: remove two interleaved opposite-direction pairs
//!   `a … b … a^-1 … b^-1` (torus summand), −4 corners.
//!
//! Every rule is pure. It either reports `Rewrite::Unchanged` (pattern absent),
//! returns a strictly smaller `Rewrite::Reduced` surface, or, for the handle
//! rule only, `Rewrite::Collapsed` when all four remaining edges were consumed.
//!
//! Code cross-refs: `model::{Surface, Edge, GluedPair}`, `Surface::split_at`,
//! `classify::classify_with` (driver).

mod crosscap;
mod fold;
mod handle;
mod rebuild;

pub use crosscap::{crosscap_candidates, remove_crosscap, remove_crosscap_at, CrosscapMarkers};
pub use fold::{find_fold, remove_fold};
pub use handle::{handle_candidates, remove_handle, remove_handle_at, HandleMarkers};

use crate::model::Surface;

/// Outcome of applying one rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rewrite {
    /// Pattern absent; the input stands.
    Unchanged,
    /// A new surface with fewer corners.
    Reduced(Surface),
    /// Nothing left: the last handle consumed the whole boundary.
    Collapsed,
}

impl Rewrite {
    #[inline]
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Rewrite::Unchanged)
    }

    pub fn into_surface(self) -> Option<Surface> {
        match self {
            Rewrite::Reduced(s) => Some(s),
            _ => None,
        }
    }
}

/// Which match to act on when a rule finds several.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Lexicographically smallest canonical positions.
    #[default]
    First,
    /// Lexicographically largest canonical positions.
    Last,
}

impl TieBreak {
    /// Pick from candidates sorted ascending.
    pub(crate) fn pick<T: Copy>(self, sorted: &[T]) -> Option<T> {
        match self {
            TieBreak::First => sorted.first().copied(),
            TieBreak::Last => sorted.last().copied(),
        }
    }
}

/// Reduction configuration.
///
/// The classification theorem makes the final `(orientable, genus)` independent
/// of these choices; they exist to exercise that property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReductionCfg {
    pub crosscap: TieBreak,
    pub handle: TieBreak,
}

impl Default for ReductionCfg {
    fn default() -> Self {
        Self {
            crosscap: TieBreak::First,
            handle: TieBreak::First,
        }
    }
}

#[cfg(test)]
mod tests;
