//! Exact integer predicates shared by every hull algorithm.
//!
//! All arithmetic is widened to `i128`: inputs are full-range `i32`, probe
//! points built from three coordinates reach about `3 * 2^31`, and products of
//! two such differences stay far below `2^127`.

use super::types::Point;

/// Widened coordinate pair, used for probe points that may leave the `i32` range.
type Wide = (i128, i128);

#[inline]
fn wide(p: Point) -> Wide {
    (i128::from(p.x), i128::from(p.y))
}

#[inline]
fn orientation_wide(p: Wide, q: Wide, r: Wide) -> i128 {
    p.0 * (q.1 - r.1) + q.0 * (r.1 - p.1) + r.0 * (p.1 - q.1)
}

/// Signed twice-area of triangle `pqr`.
///
/// Positive: `r` lies left of the ray `p -> q` (counter-clockwise turn).
/// Zero: collinear. Negative: clockwise turn.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> i128 {
    orientation_wide(wide(p), wide(q), wide(r))
}

/// Exact squared Euclidean distance.
#[inline]
pub fn squared_distance(p: Point, q: Point) -> i128 {
    let dx = i128::from(p.x) - i128::from(q.x);
    let dy = i128::from(p.y) - i128::from(q.y);
    dx * dx + dy * dy
}

/// Caliper comparison of the edges `a -> after_a` and `b -> after_b`.
///
/// Builds the probe `c = b + a - after_b` (the `b` edge translated so that it
/// starts at `a`, reversed) and returns `orientation(a, after_a, c)`:
/// `> 0` the `a` edge turns less and `a` should advance, `< 0` the `b` edge
/// turns less, `0` the edges are parallel.
#[inline]
pub(crate) fn caliper_turn(a: Point, after_a: Point, b: Point, after_b: Point) -> i128 {
    let (a, after_a, b, after_b) = (wide(a), wide(after_a), wide(b), wide(after_b));
    let probe = (b.0 + a.0 - after_b.0, b.1 + a.1 - after_b.1);
    orientation_wide(a, after_a, probe)
}

/// True if `next` lies strictly farther than `current` from the line through
/// `base` and `toward`, on the side that is left of `base -> toward`.
///
/// Uses the parallel line through `current`: the probe
/// `e = base + current - toward` makes `e -> current` parallel to `base -> toward`,
/// and `next` is higher iff it turns counter-clockwise off that line.
#[inline]
pub(crate) fn is_higher(base: Point, toward: Point, next: Point, current: Point) -> bool {
    let (base, toward, next, current) = (wide(base), wide(toward), wide(next), wide(current));
    let probe = (base.0 + current.0 - toward.0, base.1 + current.1 - toward.1);
    orientation_wide(probe, current, next) > 0
}

/// True if edge `p -> after_p` is strictly longer than `q -> after_q`.
#[inline]
pub(crate) fn is_longer(p: Point, after_p: Point, q: Point, after_q: Point) -> bool {
    squared_distance(p, after_p) > squared_distance(q, after_q)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_sign_convention() {
        let o = Point::new(0, 0);
        let x = Point::new(1, 0);
        assert!(orientation(o, x, Point::new(0, 1)) > 0);
        assert!(orientation(o, x, Point::new(0, -1)) < 0);
        assert_eq!(orientation(o, x, Point::new(7, 0)), 0);
        assert_eq!(orientation(o, Point::new(4, 0), Point::new(0, 4)), 16);
        assert_eq!(orientation(o, Point::new(4, 0), Point::new(4, 4)), 16);
        assert_eq!(orientation(Point::new(4, 0), Point::new(4, 4), o), 16);
        assert_eq!(orientation(o, Point::new(0, 4), Point::new(4, 0)), -16);
    }

    #[test]
    fn no_overflow_at_extreme_coordinates() {
        let lo = Point::new(i32::MIN, i32::MIN);
        let hi = Point::new(i32::MAX, i32::MAX);
        let corner = Point::new(i32::MAX, i32::MIN);
        let span = i128::from(i32::MAX) - i128::from(i32::MIN);
        assert_eq!(orientation(lo, corner, hi), span * span);
        assert_eq!(squared_distance(lo, hi), 2 * span * span);
        assert_eq!(
            caliper_turn(lo, corner, hi, Point::new(i32::MIN, i32::MAX)),
            0
        );
        // Probe point lands near 3 * 2^31; still exact.
        assert_eq!(caliper_turn(hi, corner, hi, lo), span * span);
    }

    #[test]
    fn caliper_turn_matches_edge_cross_product() {
        // a-edge points right (0 deg), b-edge points up-left (135 deg, i.e. -45 once
        // reversed): the b edge turns less, so b advances.
        let a = Point::new(0, 0);
        let after_a = Point::new(4, 0);
        let b = Point::new(4, 4);
        let after_b = Point::new(2, 6);
        assert!(caliper_turn(a, after_a, b, after_b) < 0);
        // b-edge points slightly below left (about 14 deg once reversed): a advances.
        let after_b = Point::new(0, 3);
        assert!(caliper_turn(a, after_a, b, after_b) > 0);
        // Antiparallel edges.
        assert_eq!(caliper_turn(a, after_a, b, Point::new(0, 4)), 0);
    }

    #[test]
    fn higher_means_farther_from_base_line() {
        // Line from (8,8) toward (0,0); points below the diagonal are on the chased side.
        let base = Point::new(8, 8);
        let toward = Point::new(0, 0);
        assert!(is_higher(base, toward, Point::new(8, 0), Point::new(4, 2)));
        assert!(!is_higher(base, toward, Point::new(4, 2), Point::new(8, 0)));
        // Same distance: not strictly higher.
        assert!(!is_higher(base, toward, Point::new(5, 1), Point::new(6, 2)));
    }
}
