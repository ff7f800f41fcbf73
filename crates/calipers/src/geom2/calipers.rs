//! Rotating calipers over a convex hull: diameter and maximum-area quadrangle.
//!
//! Sweep
//! - Cursor `A` starts at the leftmost hull vertex and `B` at the rightmost; they
//!   walk counter-clockwise until `A` stands at the rightmost and `B` at the
//!   leftmost vertex. Every step advances the cursor whose outgoing edge turns
//!   less (`util::caliper_turn`), so `(A, B)` runs through all antipodal pairs.
//! - Parallel outgoing edges advance the cursor with the strictly longer edge
//!   (ties advance `A`); the skipped cross pair is never strictly farther apart
//!   than a visited one.
//! - Two auxiliary cursors chase the vertex farthest from the chord `A B` on each
//!   side. They only ever move forward, so the whole sweep is linear.
//!
//! Positions are kept unwrapped (`0..2n`) so that "ahead of" is a plain integer
//! comparison; the vertex index is `pos % n`.

use super::hull::ConvexHull;
use super::types::{Diameter, Point, Quadrangle};
use super::util::{caliper_turn, is_higher, is_longer, orientation, squared_distance};

/// Diameter and maximum-area inscribed quadrangle of `hull`.
///
/// Small hulls follow fixed conventions: empty gives `(None, None)`, one vertex
/// gives degenerate figures at that vertex, two vertices give the segment and
/// `(h0, h0, h1, h1)`, three vertices give the quadrangle `(h0, h1, h2, h2)`.
pub fn diameter_and_quadrangle(hull: &ConvexHull) -> (Option<Diameter>, Option<Quadrangle>) {
    match *hull.vertices() {
        [] => (None, None),
        [p] => (Some(Diameter::single(p)), Some(Quadrangle::single(p))),
        [a, b] => (Some(Diameter::new(a, b)), Some(Quadrangle::pair(a, b))),
        [a, b, c] => {
            let sweep = Sweep::run(hull.vertices());
            (Some(sweep.diameter), Some(Quadrangle::triple(a, b, c)))
        }
        _ => {
            let sweep = Sweep::run(hull.vertices());
            (Some(sweep.diameter), Some(sweep.quadrangle))
        }
    }
}

/// Diameter only. Same conventions as [`diameter_and_quadrangle`].
pub fn diameter(hull: &ConvexHull) -> Option<Diameter> {
    diameter_and_quadrangle(hull).0
}

/// Maximum-area quadrangle only. Same conventions as [`diameter_and_quadrangle`].
pub fn max_quadrangle(hull: &ConvexHull) -> Option<Quadrangle> {
    diameter_and_quadrangle(hull).1
}

struct Sweep<'a> {
    v: &'a [Point],
    pa: usize,
    pb: usize,
    pa_quad: usize,
    pb_quad: usize,
    diameter: Diameter,
    diameter_sq: i128,
    quadrangle: Quadrangle,
    quadrangle_area2: i128,
}

impl<'a> Sweep<'a> {
    /// Requires at least three strictly convex counter-clockwise vertices with
    /// the lexicographically smallest one first.
    fn run(v: &'a [Point]) -> Self {
        let n = v.len();
        let right = (0..n).max_by_key(|&i| v[i]).unwrap_or(0);
        let (a, b) = (v[0], v[right]);
        let mut s = Self {
            v,
            pa: 0,
            pb: right,
            pa_quad: 0,
            pb_quad: right,
            diameter: Diameter::new(a, b),
            diameter_sq: squared_distance(a, b),
            quadrangle: Quadrangle::pair(a, b),
            quadrangle_area2: 0,
        };
        s.observe();

        let (a_end, b_end) = (right, n);
        while s.pa < a_end || s.pb < b_end {
            let advance_a = if s.pa == a_end {
                false
            } else if s.pb == b_end {
                true
            } else {
                let (a, after_a) = (s.at(s.pa), s.at(s.pa + 1));
                let (b, after_b) = (s.at(s.pb), s.at(s.pb + 1));
                match caliper_turn(a, after_a, b, after_b).signum() {
                    1 => true,
                    -1 => false,
                    _ => !is_longer(b, after_b, a, after_a),
                }
            };
            if advance_a {
                s.pa += 1;
            } else {
                s.pb += 1;
            }
            s.observe();
        }
        s
    }

    #[inline]
    fn at(&self, pos: usize) -> Point {
        self.v[pos % self.v.len()]
    }

    fn observe(&mut self) {
        let (a, b) = (self.at(self.pa), self.at(self.pb));

        let d2 = squared_distance(a, b);
        if d2 > self.diameter_sq {
            self.diameter_sq = d2;
            self.diameter = Diameter::new(a, b);
        }

        // Farthest vertex right of `A -> B` (arc A..B), then left of it (arc B..A).
        self.pa_quad = self.pa_quad.max(self.pa);
        while self.pa_quad < self.pb
            && is_higher(b, a, self.at(self.pa_quad + 1), self.at(self.pa_quad))
        {
            self.pa_quad += 1;
        }
        self.pb_quad = self.pb_quad.max(self.pb);
        while self.pb_quad < self.pa + self.v.len()
            && is_higher(a, b, self.at(self.pb_quad + 1), self.at(self.pb_quad))
        {
            self.pb_quad += 1;
        }

        let (aq, bq) = (self.at(self.pa_quad), self.at(self.pb_quad));
        let area2 = orientation(a, aq, b) + orientation(a, b, bq);
        if area2 > self.quadrangle_area2 {
            self.quadrangle_area2 = area2;
            self.quadrangle = Quadrangle::new(a, aq, b, bq);
        }
    }
}
