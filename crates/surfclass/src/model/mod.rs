//! Surface Model and Boundary Ordering.
//!
//! Purpose
//! - `Surface`: immutable, validated polygon-with-gluing (`surface.rs`).
//! - `Edge`, `GluedPair`: value-comparable records stored in sets (`types.rs`).
//! - Canonical boundary order and arc splitting (`order.rs`).
//! - Euler characteristic and orientability read off the gluing (`euler.rs`),
//!   used to cross-check the reduction engine.

mod euler;
mod order;
mod surface;
mod types;

pub use surface::Surface;
pub use types::{Edge, GluedPair};
