//! Combinatorial invariants read directly off the gluing, independent of the
//! reduction engine: Euler characteristic of the quotient complex and
//! orientability of the gluing pattern.

use super::surface::Surface;

impl Surface {
    /// `V - E + F` of the quotient cell complex (one face, `n/2` edges).
    ///
    /// Corners are identified by matching tails with tails and heads with
    /// heads across every gluing pair.
    pub fn euler_characteristic(&self) -> i64 {
        let n = self.vertex_count();
        let mut classes = Corners::new(n);
        for pair in self.gluing() {
            let [a, b] = pair.edges();
            classes.union(a.tail, b.tail);
            classes.union(a.head, b.head);
        }
        classes.count() as i64 - self.pair_count() as i64 + 1
    }

    /// True iff every pair is glued against the boundary direction (`a … a^-1`).
    pub fn is_orientable_gluing(&self) -> bool {
        if self.is_bigon() {
            return self.is_sphere_bigon();
        }
        self.gluing().iter().all(|p| !p.same_direction())
    }

    /// `(orientable, genus)` predicted by the Euler characteristic.
    pub fn euler_invariant(&self) -> (bool, usize) {
        let deficit = (2 - self.euler_characteristic()).max(0) as usize;
        if self.is_orientable_gluing() {
            (true, deficit / 2)
        } else {
            (false, deficit)
        }
    }
}

/// Union-find over polygon corners.
struct Corners {
    parent: Vec<usize>,
}

impl Corners {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[ra] = rb;
        }
    }

    fn count(&mut self) -> usize {
        (0..self.parent.len()).filter(|&x| self.find(x) == x).count()
    }
}
