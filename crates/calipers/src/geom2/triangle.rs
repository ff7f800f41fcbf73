//! Maximum-area triangle with vertices on a convex hull.
//!
//! For a fixed apex `a`, the best third vertex only moves forward as the second
//! vertex walks counter-clockwise, so each apex costs one linear pass. Every
//! hull vertex is tried as the apex: quadratic overall, exact.
//!
//! The second vertex walks the whole arc. Stopping it early, once neither it nor
//! the third vertex improves (the Dobkin-Snyder rule), is not guaranteed to reach
//! the maximum, so it is not used here.

use super::hull::ConvexHull;
use super::types::Triangle;
use super::util::orientation;

/// Largest triangle inscribed in `hull`, vertices in counter-clockwise order.
///
/// Empty hull gives `None`; one vertex gives the degenerate triangle at that
/// vertex; two vertices give `(h0, h0, h1)`.
pub fn max_triangle(hull: &ConvexHull) -> Option<Triangle> {
    let v = hull.vertices();
    let n = v.len();
    match *v {
        [] => return None,
        [p] => return Some(Triangle::single(p)),
        [a, b] => return Some(Triangle::pair(a, b)),
        _ => {}
    }

    let at = |i: usize| v[i % n];
    let mut best = Triangle::new(v[0], v[1], v[2]);
    let mut best_area2 = best.twice_area();

    for oa in 0..n {
        let a = at(oa);
        let mut oc = 2;
        for ob in 1..n - 1 {
            let b = at(oa + ob);
            if oc <= ob {
                oc = ob + 1;
            }
            while oc + 1 < n
                && orientation(a, b, at(oa + oc + 1)) > orientation(a, b, at(oa + oc))
            {
                oc += 1;
            }
            let c = at(oa + oc);
            let area2 = orientation(a, b, c);
            if area2 > best_area2 {
                best_area2 = area2;
                best = Triangle::new(a, b, c);
            }
        }
    }
    Some(best)
}
