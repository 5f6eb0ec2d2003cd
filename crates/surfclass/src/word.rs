//! Boundary words: the same surface written as a cyclic word in which each
//! letter occurs exactly twice, `a` for an edge along the traversal and
//! `a^-1` for an edge against it.
//!
//! Accepted text forms (mixable): `a b a^-1 b^-1`, `aba^-1b^-1`, `a b A B`
//! (uppercase is the inverse), `a b a' b'`, `a1 b1 a1⁻¹ b1⁻¹`. Whitespace,
//! commas and `*` separate letters and are otherwise ignored.

use std::collections::BTreeMap;
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::WordError;
use crate::model::{Edge, GluedPair, Surface};

/// One boundary position: which pair it belongs to and its direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Letter {
    pub label: usize,
    pub inverse: bool,
}

impl Letter {
    #[inline]
    pub const fn new(label: usize, inverse: bool) -> Self {
        Self { label, inverse }
    }

    #[inline]
    pub fn inv(self) -> Self {
        Self::new(self.label, !self.inverse)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&letter_name(self.label))?;
        if self.inverse {
            f.write_str("^-1")?;
        }
        Ok(())
    }
}

fn letter_name(label: usize) -> String {
    match u8::try_from(label) {
        Ok(k) if k < 26 => char::from(b'a' + k).to_string(),
        _ => format!("x{label}"),
    }
}

/// Render a word as space-separated letters.
pub fn format_word(word: &[Letter]) -> String {
    word.iter()
        .map(Letter::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse boundary-word text. Labels are numbered by first appearance.
pub fn parse_word(text: &str) -> Result<Vec<Letter>, WordError> {
    let mut names: Vec<String> = Vec::new();
    let mut word = Vec::new();
    let mut chars = text.char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        if c.is_whitespace() || c == ',' || c == '*' {
            continue;
        }
        if !c.is_ascii_alphabetic() {
            return Err(WordError::BadToken { offset, found: c });
        }
        let mut name = c.to_ascii_lowercase().to_string();
        let mut inverse = c.is_ascii_uppercase();
        while let Some(&(_, d)) = chars.peek() {
            if !(d.is_ascii_digit() || d == '_') {
                break;
            }
            name.push(d);
            chars.next();
        }
        if parse_inverse_suffix(&mut chars, text.len())? {
            inverse = !inverse;
        }
        let label = match names.iter().position(|n| *n == name) {
            Some(k) => k,
            None => {
                names.push(name);
                names.len() - 1
            }
        };
        word.push(Letter::new(label, inverse));
    }
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    Ok(word)
}

/// Consume `'`, `⁻¹`, `^-1` or `^{-1}` if present.
fn parse_inverse_suffix(
    chars: &mut Peekable<CharIndices<'_>>,
    end: usize,
) -> Result<bool, WordError> {
    match chars.peek().map(|&(_, c)| c) {
        Some('\'') => {
            chars.next();
            Ok(true)
        }
        Some('⁻') => {
            chars.next();
            expect(chars, '¹', end)?;
            Ok(true)
        }
        Some('^') => {
            chars.next();
            let braced = chars.next_if(|&(_, c)| c == '{').is_some();
            expect(chars, '-', end)?;
            expect(chars, '1', end)?;
            if braced {
                expect(chars, '}', end)?;
            }
            Ok(true)
        }
        _ => Ok(false),
    }
}

fn expect(chars: &mut Peekable<CharIndices<'_>>, want: char, end: usize) -> Result<(), WordError> {
    match chars.next() {
        Some((_, c)) if c == want => Ok(()),
        Some((offset, found)) => Err(WordError::BadToken { offset, found }),
        None => Err(WordError::Truncated { offset: end }),
    }
}

impl Surface {
    /// Build the polygon-with-gluing spelled by `word`.
    ///
    /// Position `i` carries `(i, i+1)` for a plain letter and `(i+1, i)` for
    /// an inverse; the two positions of each label are glued.
    pub fn from_word(word: &[Letter]) -> Result<Self, WordError> {
        let n = word.len();
        if n == 0 {
            return Err(WordError::Empty);
        }
        let mut slots: BTreeMap<usize, Vec<Edge>> = BTreeMap::new();
        for (i, letter) in word.iter().enumerate() {
            slots
                .entry(letter.label)
                .or_default()
                .push(Edge::at(i, !letter.inverse, n));
        }
        let mut gluing = Vec::with_capacity(slots.len());
        for (&label, edges) in &slots {
            match edges.as_slice() {
                &[a, b] => gluing.push(GluedPair::new(a, b)),
                other => {
                    return Err(WordError::LetterCount {
                        letter: letter_name(label),
                        count: other.len(),
                    })
                }
            }
        }
        let edges: Vec<Edge> = slots.values().flatten().copied().collect();
        Ok(Self::new(n, edges, gluing)?)
    }

    /// Read the boundary in canonical order as a word, naming pairs by first appearance.
    pub fn to_word(&self) -> Vec<Letter> {
        if self.is_bigon() {
            let a = Letter::new(0, false);
            let second = if self.is_sphere_bigon() { a.inv() } else { a };
            return vec![a, second];
        }
        let mut labels: BTreeMap<GluedPair, usize> = BTreeMap::new();
        self.canonical_order()
            .into_iter()
            .filter_map(|e| {
                let pair = self.pair_of(e)?;
                let next = labels.len();
                let label = *labels.entry(pair).or_insert(next);
                Some(Letter::new(label, !e.is_forward()))
            })
            .collect()
    }
}
