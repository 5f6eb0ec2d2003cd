//! Rule-level tests: each rewrite on hand-built words, plus seeded random
//! words checked against the Euler characteristic.

use super::*;
use crate::model::{Edge, Surface};
use crate::sample::{draw_surface, LetterCount, ReplayToken, SampleCfg};
use crate::word::parse_word;

fn from_text(text: &str) -> Surface {
    Surface::from_word(&parse_word(text).unwrap()).unwrap()
}

fn sphere_bigon() -> Surface {
    Surface::from_tuples(2, &[(0, 1)], &[((0, 1), (0, 1))]).unwrap()
}

fn rp2_bigon() -> Surface {
    Surface::from_tuples(2, &[(0, 1), (1, 0)], &[((0, 1), (1, 0))]).unwrap()
}

fn torus() -> Surface {
    Surface::from_tuples(
        4,
        &[(0, 1), (2, 1), (3, 2), (3, 0)],
        &[((0, 1), (3, 2)), ((2, 1), (3, 0))],
    )
    .unwrap()
}

#[test]
fn fold_cancels_adjacent_pair() {
    let s = from_text("a a^-1 b b^-1");
    assert_eq!(find_fold(&s), Some(1));
    assert_eq!(remove_fold(&s).unwrap(), Rewrite::Reduced(sphere_bigon()));
}

#[test]
fn fold_across_wraparound_corner() {
    // a^-1 at the last position meets a at position 0 around corner 0.
    let s = from_text("a b b^-1 a^-1");
    assert_eq!(find_fold(&s), Some(0));
    assert_eq!(remove_fold(&s).unwrap(), Rewrite::Reduced(sphere_bigon()));
}

#[test]
fn fold_keeps_remaining_gluing() {
    let s = from_text("a b b^-1 c a^-1 c^-1");
    let next = remove_fold(&s).unwrap().into_surface().unwrap();
    assert_eq!(next.vertex_count(), 4);
    assert_eq!(next, from_text("a c a^-1 c^-1"));
}

#[test]
fn fold_absent() {
    assert_eq!(find_fold(&torus()), None);
    assert!(remove_fold(&torus()).unwrap().is_unchanged());
    // Same-direction neighbours are a crosscap, not a fold.
    assert!(remove_fold(&from_text("a a b b")).unwrap().is_unchanged());
    assert!(remove_fold(&sphere_bigon()).unwrap().is_unchanged());
}

#[test]
fn crosscap_on_klein_bottle() {
    let klein = Surface::from_tuples(
        4,
        &[(0, 1), (1, 2), (2, 3), (0, 3)],
        &[((0, 1), (2, 3)), ((1, 2), (0, 3))],
    )
    .unwrap();
    let cands = crosscap_candidates(&klein);
    assert_eq!(cands.len(), 1);
    assert_eq!(cands[0].positions, [0, 2]);
    assert_eq!(
        remove_crosscap(&klein, TieBreak::First).unwrap(),
        Rewrite::Reduced(rp2_bigon())
    );
}

#[test]
fn crosscap_tie_break() {
    let s = from_text("a a b b");
    let cands = crosscap_candidates(&s);
    assert_eq!(
        cands.iter().map(|c| c.positions).collect::<Vec<_>>(),
        vec![[0, 1], [2, 3]]
    );
    for choice in [TieBreak::First, TieBreak::Last] {
        assert_eq!(
            remove_crosscap(&s, choice).unwrap(),
            Rewrite::Reduced(rp2_bigon())
        );
    }
}

#[test]
fn crosscap_absent_or_mismatched() {
    assert!(remove_crosscap(&torus(), TieBreak::First)
        .unwrap()
        .is_unchanged());
    let opposite = CrosscapMarkers {
        positions: [0, 2],
        low: Edge::new(0, 1),
        high: Edge::new(3, 2),
    };
    assert!(remove_crosscap_at(&torus(), opposite).unwrap().is_unchanged());
}

#[test]
fn handle_collapses_torus() {
    let cands = handle_candidates(&torus());
    assert_eq!(cands.len(), 1);
    assert_eq!(cands[0].positions, [0, 1, 2, 3]);
    assert_eq!(
        remove_handle(&torus(), TieBreak::First).unwrap(),
        Rewrite::Collapsed
    );
}

#[test]
fn handle_splits_genus_two() {
    let s = from_text("a b a^-1 b^-1 c d c^-1 d^-1");
    let cands = handle_candidates(&s);
    assert_eq!(
        cands.iter().map(|c| c.positions).collect::<Vec<_>>(),
        vec![[0, 1, 2, 3], [4, 5, 6, 7]]
    );
    let expected = from_text("a b a^-1 b^-1");
    for choice in [TieBreak::First, TieBreak::Last] {
        assert_eq!(
            remove_handle(&s, choice).unwrap(),
            Rewrite::Reduced(expected.clone())
        );
    }
}

#[test]
fn handle_absent_when_nested() {
    let s = from_text("a b b^-1 a^-1");
    assert!(handle_candidates(&s).is_empty());
    assert!(remove_handle(&s, TieBreak::First).unwrap().is_unchanged());
}

#[test]
fn handle_markers_must_match_surface() {
    let s = from_text("a b a^-1 b^-1 c d c^-1 d^-1");
    let mut bogus = handle_candidates(&s)[0];
    bogus.edges.swap(1, 2);
    assert!(remove_handle_at(&s, bogus).unwrap().is_unchanged());
}

#[test]
fn handle_keeps_inner_arcs() {
    // Non-empty arcs between every marker.
    let s = from_text("a c b d a^-1 e b^-1 f c^-1 d^-1 e^-1 f^-1");
    let before = s.euler_characteristic();
    for m in handle_candidates(&s) {
        let next = remove_handle_at(&s, m).unwrap().into_surface().unwrap();
        assert_eq!(next.vertex_count(), s.vertex_count() - 4);
        assert_eq!(next.euler_characteristic(), before + 2);
        assert!(next.is_orientable_gluing());
    }
}

#[test]
fn rules_shrink_and_track_euler_characteristic() {
    let cfg = SampleCfg {
        letters: LetterCount::Uniform { min: 2, max: 9 },
        orientable_only: false,
    };
    let mut tok = ReplayToken { seed: 2024, index: 0 };
    for _ in 0..300 {
        let s = draw_surface(cfg, tok).unwrap();
        tok = tok.next();
        let (n, chi) = (s.vertex_count(), s.euler_characteristic());

        if let Some(next) = remove_fold(&s).unwrap().into_surface() {
            assert_eq!(next.vertex_count(), n - 2);
            assert_eq!(next.euler_characteristic(), chi);
        }
        for choice in [TieBreak::First, TieBreak::Last] {
            if let Some(next) = remove_crosscap(&s, choice).unwrap().into_surface() {
                assert_eq!(next.vertex_count(), n - 2);
                assert_eq!(next.euler_characteristic(), chi + 1);
            }
        }
        for m in handle_candidates(&s) {
            match remove_handle_at(&s, m).unwrap() {
                Rewrite::Reduced(next) => {
                    assert_eq!(next.vertex_count(), n - 4);
                    assert_eq!(next.euler_characteristic(), chi + 2);
                }
                Rewrite::Collapsed => {
                    assert_eq!(n, 4);
                    assert_eq!(chi, 0);
                }
                Rewrite::Unchanged => panic!("listed handle must apply"),
            }
        }
    }
}
