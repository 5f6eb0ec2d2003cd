//! Classification Driver.
//!
//! Fixed-point loop over the current surface:
//! 1. Bigon: `a a^-1` counts as a sphere, `a a` as a crosscap; stop.
//! 2. Otherwise try fold, then crosscap, then handle; the first rule that
//!    changes the surface is counted and its result becomes current. A handle
//!    that consumes the whole boundary stops the loop.
//! 3. If no rule applies the surface is reported as `AlgorithmFault::Stuck`.
//!
//! After the loop Dyck's theorem folds handles into crosscaps whenever both
//! occur (`crosscaps += 2 * handles`). Every step removes 2 or 4 corners, so
//! the loop runs at most `vertex_count / 2` times.

use tracing::trace;

use crate::error::AlgorithmFault;
use crate::invariants::surface_name;
use crate::model::Surface;
use crate::reduce::{remove_crosscap, remove_fold, remove_handle, ReductionCfg, Rewrite};

/// Raw counters accumulated by the driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Counts {
    pub crosscaps: usize,
    pub handles: usize,
    /// Diagnostic only; sphere summands never change the result.
    pub spheres: usize,
}

impl Counts {
    /// Dyck's theorem: in the presence of a crosscap, a handle is two more crosscaps.
    pub fn closed(self) -> Self {
        if self.crosscaps > 0 && self.handles > 0 {
            Self {
                crosscaps: self.crosscaps + 2 * self.handles,
                handles: 0,
                spheres: self.spheres,
            }
        } else {
            self
        }
    }

    /// `(orientable, genus)` of the closed counters.
    pub fn invariant(self) -> (bool, usize) {
        let c = self.closed();
        if c.crosscaps == 0 {
            (true, c.handles)
        } else {
            (false, c.crosscaps)
        }
    }

    fn record(&mut self, rule: Rule) {
        match rule {
            Rule::Fold => self.spheres += 1,
            Rule::Crosscap => self.crosscaps += 1,
            Rule::Handle => self.handles += 1,
        }
    }
}

/// Result of classifying one surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Classification {
    pub orientable: bool,
    pub genus: usize,
    /// Counters before the closure rule.
    pub counts: Counts,
}

impl Classification {
    pub fn name(&self) -> String {
        surface_name(self.orientable, self.genus)
    }

    /// `1` for orientable, `0` otherwise.
    #[inline]
    pub fn orientable_flag(&self) -> u8 {
        u8::from(self.orientable)
    }
}

/// The three rewrite rules, in the order the driver tries them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    Fold,
    Crosscap,
    Handle,
}

impl Rule {
    pub const ORDER: [Rule; 3] = [Rule::Fold, Rule::Crosscap, Rule::Handle];

    pub fn apply(self, surface: &Surface, cfg: ReductionCfg) -> Result<Rewrite, AlgorithmFault> {
        match self {
            Rule::Fold => remove_fold(surface),
            Rule::Crosscap => remove_crosscap(surface, cfg.crosscap),
            Rule::Handle => remove_handle(surface, cfg.handle),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rule::Fold => "fold",
            Rule::Crosscap => "crosscap",
            Rule::Handle => "handle",
        }
    }
}

/// One applied rewrite. `result` is `None` when the boundary collapsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub rule: Rule,
    pub vertices_before: usize,
    pub result: Option<Surface>,
}

/// Classify with the default tie-breaks.
pub fn classify(surface: &Surface) -> Result<Classification, AlgorithmFault> {
    classify_with(surface, ReductionCfg::default())
}

pub fn classify_with(surface: &Surface, cfg: ReductionCfg) -> Result<Classification, AlgorithmFault> {
    drive(surface, cfg, None)
}

/// Classify and record every applied rewrite.
pub fn classify_traced(
    surface: &Surface,
    cfg: ReductionCfg,
) -> Result<(Classification, Vec<Step>), AlgorithmFault> {
    let mut steps = Vec::new();
    let class = drive(surface, cfg, Some(&mut steps))?;
    Ok((class, steps))
}

fn drive(
    surface: &Surface,
    cfg: ReductionCfg,
    mut trace_steps: Option<&mut Vec<Step>>,
) -> Result<Classification, AlgorithmFault> {
    let mut counts = Counts::default();
    let mut current = surface.clone();
    loop {
        if current.vertex_count() <= 2 {
            if current.is_sphere_bigon() {
                counts.spheres += 1;
            } else {
                counts.crosscaps += 1;
            }
            break;
        }
        let mut applied = None;
        for rule in Rule::ORDER {
            let rewrite = rule.apply(&current, cfg)?;
            if !rewrite.is_unchanged() {
                applied = Some((rule, rewrite));
                break;
            }
        }
        let Some((rule, rewrite)) = applied else {
            return Err(AlgorithmFault::Stuck {
                vertex_count: current.vertex_count(),
            });
        };
        counts.record(rule);
        let next = rewrite.into_surface();
        if let Some(steps) = trace_steps.as_deref_mut() {
            steps.push(Step {
                rule,
                vertices_before: current.vertex_count(),
                result: next.clone(),
            });
        }
        match next {
            Some(s) => current = s,
            None => break,
        }
    }
    let (orientable, genus) = counts.invariant();
    trace!(orientable, genus, ?counts, "classified");
    Ok(Classification {
        orientable,
        genus,
        counts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reduce::TieBreak;
    use crate::word::parse_word;

    fn from_text(text: &str) -> Surface {
        Surface::from_word(&parse_word(text).unwrap()).unwrap()
    }

    #[test]
    fn end_to_end_examples() {
        let sphere = Surface::from_tuples(2, &[(0, 1)], &[((0, 1), (0, 1))]).unwrap();
        let c = classify(&sphere).unwrap();
        assert_eq!((c.orientable_flag(), c.genus), (1, 0));
        assert_eq!(c.name(), "This is a sphere");

        let rp2 = Surface::from_tuples(2, &[(0, 1), (1, 0)], &[((0, 1), (1, 0))]).unwrap();
        let c = classify(&rp2).unwrap();
        assert_eq!((c.orientable_flag(), c.genus), (0, 1));
        assert_eq!(c.name(), "This is a projective plane");

        let torus = Surface::from_tuples(
            4,
            &[(0, 1), (2, 1), (3, 2), (3, 0)],
            &[((0, 1), (3, 2)), ((2, 1), (3, 0))],
        )
        .unwrap();
        let c = classify(&torus).unwrap();
        assert_eq!((c.orientable_flag(), c.genus), (1, 1));
        assert_eq!(c.name(), "This is a torus");
        assert_eq!(c.counts, Counts { crosscaps: 0, handles: 1, spheres: 0 });

        let klein = Surface::from_tuples(
            4,
            &[(0, 1), (1, 2), (2, 3), (0, 3)],
            &[((0, 1), (2, 3)), ((1, 2), (0, 3))],
        )
        .unwrap();
        let c = classify(&klein).unwrap();
        assert_eq!((c.orientable_flag(), c.genus), (0, 2));
        assert_eq!(c.name(), "This is a Klein Bottle");
    }

    #[test]
    fn closure_rule_converts_handles() {
        let counts = Counts {
            crosscaps: 1,
            handles: 2,
            spheres: 3,
        };
        assert_eq!(counts.closed().crosscaps, 5);
        assert_eq!(counts.closed().handles, 0);
        assert_eq!(counts.invariant(), (false, 5));
        let only_handles = Counts {
            crosscaps: 0,
            handles: 2,
            spheres: 0,
        };
        assert_eq!(only_handles.closed(), only_handles);
        assert_eq!(only_handles.invariant(), (true, 2));
    }

    #[test]
    fn torus_plus_crosscap_equals_three_crosscaps() {
        let t_p = classify(&from_text("a b a^-1 b^-1 c c")).unwrap();
        let ppp = classify(&from_text("a a b b c c")).unwrap();
        assert_eq!((t_p.orientable, t_p.genus), (ppp.orientable, ppp.genus));
        assert_eq!((ppp.orientable, ppp.genus), (false, 3));
        assert_eq!(ppp.name(), "This is a connected sum of 3 projective planes");
    }

    #[test]
    fn sphere_summands_do_not_count() {
        let c = classify(&from_text("a a^-1 b b^-1 c d c^-1 d^-1")).unwrap();
        assert_eq!((c.orientable, c.genus), (true, 1));
        assert!(c.counts.spheres >= 1);
        let c = classify(&from_text("a b b^-1 a^-1")).unwrap();
        assert_eq!((c.orientable, c.genus), (true, 0));
    }

    #[test]
    fn genus_two_and_three() {
        let c = classify(&from_text("a b a^-1 b^-1 c d c^-1 d^-1")).unwrap();
        assert_eq!((c.orientable, c.genus), (true, 2));
        assert_eq!(c.name(), "This is a connected sum of 2 tori");
        let c = classify(&from_text("a b c a^-1 b^-1 c^-1")).unwrap();
        assert_eq!((c.orientable, c.genus), (true, 1));
        let c = classify(&from_text("a1 b1 A1 B1 a2 b2 A2 B2 a3 b3 A3 B3")).unwrap();
        assert_eq!((c.orientable, c.genus), (true, 3));
    }

    #[test]
    fn classification_is_repeatable_and_tie_break_free() {
        let s = from_text("a b c d a^-1 e c^-1 b^-1 f e^-1 d^-1 f^-1");
        let first = classify(&s).unwrap();
        assert_eq!(classify(&s).unwrap(), first);
        let last = classify_with(
            &s,
            ReductionCfg {
                crosscap: TieBreak::Last,
                handle: TieBreak::Last,
            },
        )
        .unwrap();
        assert_eq!((last.orientable, last.genus), (first.orientable, first.genus));
        assert_eq!((first.orientable, first.genus), s.euler_invariant());
    }

    #[test]
    fn trace_records_each_rewrite() {
        let s = from_text("a b a^-1 b^-1 c d c^-1 d^-1");
        let (class, steps) = classify_traced(&s, ReductionCfg::default()).unwrap();
        assert_eq!(class.genus, 2);
        assert_eq!(steps.len(), 2);
        assert!(steps.iter().all(|st| st.rule == Rule::Handle));
        assert_eq!(steps[0].vertices_before, 8);
        assert_eq!(steps[0].result.as_ref().map(Surface::vertex_count), Some(4));
        assert_eq!(steps[1].result, None);
    }
}
