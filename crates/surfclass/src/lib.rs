//! Classification of compact surfaces given as polygons with edge gluings.
//!
//! A surface is an even n-gon whose boundary edges are glued in pairs. The
//! classifier rewrites the polygon until nothing but sphere, crosscap and
//! handle summands remain, then reports the normal form.
//!
//! Layout
//! - `model`: validated `Surface`, boundary ordering and arc splitting.
//! - `reduce`: the three rewrite rules (fold, crosscap, handle).
//! - `classify`: the driver loop and the crosscap/handle closure rule.
//! - `invariants`: names, π₁ presentations and homology from `(orientable, genus)`.
//! - `word`, `sample`: boundary-word text and seeded random gluings.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.

pub mod classify;
pub mod error;
pub mod invariants;
pub mod model;
pub mod reduce;
pub mod report;
pub mod sample;
pub mod word;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use classify::{classify, classify_with, Classification};
pub use error::{AlgorithmFault, SurfaceError, ValidationFault, WordError};
pub use model::{Edge, GluedPair, Surface};
pub use report::{report, report_with, Report};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::classify::{classify, classify_traced, classify_with, Classification, Counts, Rule};
    pub use crate::invariants::{fundamental_group, homology, surface_name, Homology};
    pub use crate::model::{Edge, GluedPair, Surface};
    pub use crate::reduce::{ReductionCfg, Rewrite, TieBreak};
    pub use crate::report::{report, report_with, Report};
    pub use crate::sample::{draw_surface, draw_word, LetterCount, ReplayToken, SampleCfg};
    pub use crate::word::{format_word, parse_word, Letter};
}

/// Parse a boundary word and classify it in one go.
pub fn classify_word(text: &str) -> Result<Report, SurfaceError> {
    let letters = word::parse_word(text)?;
    let surface = Surface::from_word(&letters)?;
    Ok(report(&surface)?)
}
