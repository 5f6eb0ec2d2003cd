//! Classification report: the driver result plus everything derived from it.

use crate::classify::{classify_with, Counts};
use crate::error::AlgorithmFault;
use crate::invariants::{derive, surface_name, Homology};
use crate::model::Surface;
use crate::reduce::ReductionCfg;

/// What the boundary layer prints for one surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub name: String,
    pub orientable: bool,
    pub genus: usize,
    pub fundamental_group: String,
    pub homology: Homology,
    pub counts: Counts,
}

pub fn report(surface: &Surface) -> Result<Report, AlgorithmFault> {
    report_with(surface, ReductionCfg::default())
}

pub fn report_with(surface: &Surface, cfg: ReductionCfg) -> Result<Report, AlgorithmFault> {
    let class = classify_with(surface, cfg)?;
    let derived = derive(class.orientable, class.genus);
    Ok(Report {
        name: surface_name(class.orientable, class.genus),
        orientable: class.orientable,
        genus: class.genus,
        fundamental_group: derived.fundamental_group,
        homology: derived.homology,
        counts: class.counts,
    })
}
