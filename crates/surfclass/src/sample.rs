//! Random boundary words and surfaces (replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of polygon gluings for property
//!   tests, benchmarks and the CLI `sample` command.
//!
//! Model
//! - Draw the number of letters `k`, lay out the multiset `{0,0,1,1,…}` in a
//!   uniformly shuffled order, then pick an exponent per position. With
//!   `orientable_only`, the two occurrences of each letter get opposite
//!   exponents.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::WordError;
use crate::model::Surface;
use crate::word::Letter;

/// Letter count distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl LetterCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            LetterCount::Fixed(k) => k.max(1),
            LetterCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Sampler configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleCfg {
    pub letters: LetterCount,
    /// Only draw words where every letter appears once plain and once inverted.
    pub orientable_only: bool,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            letters: LetterCount::Uniform { min: 1, max: 8 },
            orientable_only: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer on seed and index.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        StdRng::seed_from_u64(mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15))))
    }
}

/// Draw a random boundary word; every label occurs exactly twice.
pub fn draw_word(cfg: SampleCfg, tok: ReplayToken) -> Vec<Letter> {
    let mut rng = tok.to_std_rng();
    let k = cfg.letters.sample(&mut rng);
    let mut labels: Vec<usize> = (0..k).flat_map(|l| [l, l]).collect();
    labels.shuffle(&mut rng);

    let mut first_inverse: Vec<Option<bool>> = vec![None; k];
    labels
        .into_iter()
        .map(|label| {
            let inverse = match (cfg.orientable_only, first_inverse[label]) {
                (true, Some(seen)) => !seen,
                _ => rng.gen_bool(0.5),
            };
            if first_inverse[label].is_none() {
                first_inverse[label] = Some(inverse);
            }
            Letter::new(label, inverse)
        })
        .collect()
}

/// Draw a random surface.
pub fn draw_surface(cfg: SampleCfg, tok: ReplayToken) -> Result<Surface, WordError> {
    Surface::from_word(&draw_word(cfg, tok))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_is_deterministic() {
        let cfg = SampleCfg::default();
        let tok = ReplayToken { seed: 7, index: 3 };
        assert_eq!(draw_word(cfg, tok), draw_word(cfg, tok));
        assert_eq!(draw_surface(cfg, tok), draw_surface(cfg, tok));
    }

    #[test]
    fn every_label_twice() {
        let cfg = SampleCfg {
            letters: LetterCount::Fixed(6),
            orientable_only: false,
        };
        let mut tok = ReplayToken { seed: 1, index: 0 };
        for _ in 0..50 {
            let word = draw_word(cfg, tok);
            assert_eq!(word.len(), 12);
            for l in 0..6 {
                assert_eq!(word.iter().filter(|x| x.label == l).count(), 2);
            }
            assert!(draw_surface(cfg, tok).is_ok());
            tok = tok.next();
        }
    }

    #[test]
    fn orientable_only_pairs_opposite_exponents() {
        let cfg = SampleCfg {
            letters: LetterCount::Uniform { min: 2, max: 7 },
            orientable_only: true,
        };
        let mut tok = ReplayToken { seed: 99, index: 0 };
        for _ in 0..50 {
            let s = draw_surface(cfg, tok).unwrap();
            assert!(s.is_orientable_gluing());
            tok = tok.next();
        }
    }
}
