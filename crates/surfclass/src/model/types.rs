//! Value types for boundary edges and gluing pairs.
//!
//! - `Edge`: oriented boundary edge `(tail, head)` between two cyclically
//!   adjacent polygon corners.
//! - `GluedPair`: unordered pair of edges identified by the gluing; stored
//!   normalized so that set equality ignores the order the pair was given in.

use std::fmt;

/// Oriented boundary edge `(tail, head)`.
///
/// Position convention (valid for polygons with more than two corners):
/// - A non-wrap edge joining `k` and `k+1` sits at boundary position `k`.
/// - The wrap edge joining `n-1` and `0` sits at position `n-1`.
/// - The edge is *forward* when it points along the traversal `0 → 1 → … → n-1 → 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub tail: usize,
    pub head: usize,
}

impl Edge {
    #[inline]
    pub const fn new(tail: usize, head: usize) -> Self {
        Self { tail, head }
    }

    /// Edge at boundary `position` of an `n`-gon, pointing along or against traversal.
    #[inline]
    pub fn at(position: usize, forward: bool, n: usize) -> Self {
        let (a, b) = (position % n, (position + 1) % n);
        if forward {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.head, self.tail)
    }

    #[inline]
    pub fn max_label(self) -> usize {
        self.tail.max(self.head)
    }

    /// The wraparound edge is the unique boundary edge whose labels differ by more than one.
    #[inline]
    pub fn is_wrap(self) -> bool {
        self.tail.abs_diff(self.head) > 1
    }

    #[inline]
    pub fn is_forward(self) -> bool {
        if self.is_wrap() {
            self.tail > self.head
        } else {
            self.tail < self.head
        }
    }

    /// Boundary position in an `n`-gon (`n > 2`).
    #[inline]
    pub fn position(self, n: usize) -> usize {
        if self.is_wrap() {
            n - 1
        } else {
            self.tail.min(self.head)
        }
    }
}

impl From<(usize, usize)> for Edge {
    fn from((tail, head): (usize, usize)) -> Self {
        Self::new(tail, head)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.tail, self.head)
    }
}

/// Unordered pair of glued edges. `first <= second` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GluedPair {
    first: Edge,
    second: Edge,
}

impl GluedPair {
    pub fn new(a: impl Into<Edge>, b: impl Into<Edge>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    #[inline]
    pub fn first(&self) -> Edge {
        self.first
    }

    #[inline]
    pub fn second(&self) -> Edge {
        self.second
    }

    #[inline]
    pub fn edges(&self) -> [Edge; 2] {
        [self.first, self.second]
    }

    #[inline]
    pub fn contains(&self, e: Edge) -> bool {
        self.first == e || self.second == e
    }

    /// The edge glued to `e`, if `e` belongs to this pair.
    pub fn partner(&self, e: Edge) -> Option<Edge> {
        if self.first == e {
            Some(self.second)
        } else if self.second == e {
            Some(self.first)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_self_paired(&self) -> bool {
        self.first == self.second
    }

    /// Both edges point the same way around the boundary (the `a … a` pattern).
    ///
    /// Meaningful only for polygons with more than two corners, where each
    /// edge record determines its position.
    #[inline]
    pub fn same_direction(&self) -> bool {
        self.first.is_forward() == self.second.is_forward()
    }
}

impl<A: Into<Edge>, B: Into<Edge>> From<(A, B)> for GluedPair {
    fn from((a, b): (A, B)) -> Self {
        Self::new(a, b)
    }
}

impl fmt::Display for GluedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
