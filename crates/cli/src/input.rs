//! JSON shapes exchanged with the user: the `{ vertices, edges, pairs }`
//! request and the report printed back.

use serde::{Deserialize, Serialize};
use surfclass::classify::Counts;
use surfclass::{Report, Surface, ValidationFault};

type RawEdge = (usize, usize);

/// One polygon-with-gluing as submitted by a user.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SurfaceInput {
    pub vertices: usize,
    pub edges: Vec<RawEdge>,
    pub pairs: Vec<(RawEdge, RawEdge)>,
}

impl SurfaceInput {
    pub fn to_surface(&self) -> Result<Surface, ValidationFault> {
        Surface::from_tuples(self.vertices, &self.edges, &self.pairs)
    }
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct CountsOut {
    pub crosscaps: usize,
    pub handles: usize,
    pub spheres: usize,
}

impl From<Counts> for CountsOut {
    fn from(c: Counts) -> Self {
        Self {
            crosscaps: c.crosscaps,
            handles: c.handles,
            spheres: c.spheres,
        }
    }
}

/// Report as printed to stdout or written next to `--out`.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ReportOut {
    pub name: String,
    /// `1` for orientable, `0` otherwise.
    pub orientable: u8,
    pub genus: usize,
    pub fundamental_group: String,
    pub homology: [usize; 4],
    pub counts: CountsOut,
}

impl From<&Report> for ReportOut {
    fn from(r: &Report) -> Self {
        Self {
            name: r.name.clone(),
            orientable: u8::from(r.orientable),
            genus: r.genus,
            fundamental_group: r.fundamental_group.clone(),
            homology: r.homology.0,
            counts: r.counts.into(),
        }
    }
}
