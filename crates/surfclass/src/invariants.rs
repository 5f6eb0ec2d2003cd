//! Invariant Interpreter: pure functions of `(orientable, genus)`.
//!
//! - `surface_name`: normal-form name ("This is a torus", …).
//! - `fundamental_group`: one-relator presentation string.
//! - `homology`: simplified 4-tuple `(1, 1, 2g, 1)` for orientable genus `g`,
//!   `(0, 1, g, 0)` for non-orientable genus `g`. This is a rank/parity
//!   encoding, not integral homology with torsion.

use std::fmt;

/// Name of the normal form. Genus 0 is the sphere for either flag.
pub fn surface_name(orientable: bool, genus: usize) -> String {
    match (orientable, genus) {
        (_, 0) => "This is a sphere".to_string(),
        (true, 1) => "This is a torus".to_string(),
        (true, g) => format!("This is a connected sum of {g} tori"),
        (false, 1) => "This is a projective plane".to_string(),
        (false, 2) => "This is a Klein Bottle".to_string(),
        (false, g) => format!("This is a connected sum of {g} projective planes"),
    }
}

/// Standard presentation of π₁.
pub fn fundamental_group(orientable: bool, genus: usize) -> String {
    if genus == 0 {
        return "{1}".to_string();
    }
    let idx = 1..=genus;
    if orientable {
        let gens: Vec<String> = idx.clone().map(|i| format!("a{i}, b{i}")).collect();
        let rel: String = idx.map(|i| format!("[a{i}, b{i}]")).collect();
        format!("⟨{} | {} = 1⟩", gens.join(", "), rel)
    } else {
        let gens: Vec<String> = idx.clone().map(|i| format!("a{i}")).collect();
        let rel: String = idx.map(|i| format!("a{i}²")).collect();
        format!("⟨{} | {} = 1⟩", gens.join(", "), rel)
    }
}

/// Simplified homology 4-tuple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Homology(pub [usize; 4]);

impl fmt::Display for Homology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "({a}, {b}, {c}, {d})")
    }
}

pub fn homology(orientable: bool, genus: usize) -> Homology {
    if orientable {
        Homology([1, 1, 2 * genus, 1])
    } else {
        Homology([0, 1, genus, 0])
    }
}

/// Everything derived from `(orientable, genus)` besides the name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Derived {
    pub fundamental_group: String,
    pub homology: Homology,
}

pub fn derive(orientable: bool, genus: usize) -> Derived {
    Derived {
        fundamental_group: fundamental_group(orientable, genus),
        homology: homology(orientable, genus),
    }
}
