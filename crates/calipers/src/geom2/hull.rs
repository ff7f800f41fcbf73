//! Convex hull of an ordered point set (four-contour monotone chain).
//!
//! Construction
//! - One ascending and one descending pass over the sorted set split the points
//!   into four staircase contours: bottom-left, top-left (ascending) and
//!   bottom-right, top-right (descending). A point joins a contour when it sets
//!   a new running minimum (bottom) or maximum (top) of `y`.
//! - Each contour is cleaned independently by `clean_chain`, which drops every
//!   vertex whose turn is zero or reflex for that contour's direction.
//! - The cleaned contours are concatenated in boundary order and the shared
//!   junction vertices are dropped once.
//!
//! Conventions
//! - Vertices are stored counter-clockwise starting at `most_left`, without
//!   repeating the first vertex at the end.
//! - For three or more vertices, every cyclic triple turns strictly
//!   counter-clockwise (no collinear leftovers).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ordered::PointSet;
use super::types::Point;
use super::util::orientation;

/// A hull that breaks one of its invariants. Always a logic error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullDefect {
    /// `orientation(prev, vertex, next)` at `index` is zero or negative.
    Reflex {
        index: usize,
        vertex: Point,
        turn: i128,
    },
    /// A cached extremal point disagrees with the source set.
    Extremal {
        which: &'static str,
        cached: Option<Point>,
        expected: Option<Point>,
    },
}

impl fmt::Display for HullDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reflex {
                index,
                vertex,
                turn,
            } => write!(
                f,
                "hull vertex {vertex} at index {index} has non-convex turn {turn}"
            ),
            Self::Extremal {
                which,
                cached,
                expected,
            } => write!(
                f,
                "hull caches {which} = {cached:?}, source set gives {expected:?}"
            ),
        }
    }
}

impl std::error::Error for HullDefect {}

/// Cyclic hull polygon plus the extremal points of its source set.
///
/// Deserialization goes through `check_layout`, so a decoded hull satisfies the
/// same invariants as a built one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "HullRecord")]
pub struct ConvexHull {
    vertices: Vec<Point>,
    most_left: Option<Point>,
    most_right: Option<Point>,
    most_top: Option<Point>,
    most_bottom: Option<Point>,
}

/// Wire form of `ConvexHull`, validated on the way in.
#[derive(Deserialize)]
struct HullRecord {
    vertices: Vec<Point>,
    most_left: Option<Point>,
    most_right: Option<Point>,
    most_top: Option<Point>,
    most_bottom: Option<Point>,
}

impl TryFrom<HullRecord> for ConvexHull {
    type Error = HullDefect;

    fn try_from(r: HullRecord) -> Result<Self, Self::Error> {
        let hull = Self {
            vertices: r.vertices,
            most_left: r.most_left,
            most_right: r.most_right,
            most_top: r.most_top,
            most_bottom: r.most_bottom,
        };
        hull.check_layout()?;
        Ok(hull)
    }
}

impl ConvexHull {
    /// Build the hull of `points`. Total: the empty set gives the empty hull.
    pub fn build(points: &PointSet) -> Self {
        let (Some(min_p), Some(max_p)) = (points.first(), points.last()) else {
            return Self::default();
        };

        if points.len() <= 2 {
            let mut top = min_p;
            let mut bottom = min_p;
            for p in points.iter() {
                if p.y > top.y {
                    top = p;
                }
                if p.y < bottom.y {
                    bottom = p;
                }
            }
            return Self {
                vertices: points.iter().collect(),
                most_left: Some(min_p),
                most_right: Some(max_p),
                most_top: Some(top),
                most_bottom: Some(bottom),
            };
        }

        let left = Contours::collect(min_p, points.iter().skip(1));
        let right = Contours::collect(max_p, points.iter().rev().skip(1));
        let Contours {
            bottom: mut bottom_left,
            top: mut top_left,
            lowest,
            highest,
        } = left;
        let Contours {
            bottom: mut bottom_right,
            top: mut top_right,
            ..
        } = right;

        // `reject(p0, p2, p1)` sees the middle vertex last.
        clean_chain(&mut bottom_left, |a, b, c| orientation(a, b, c) >= 0);
        clean_chain(&mut bottom_right, |a, b, c| orientation(a, b, c) <= 0);
        clean_chain(&mut top_right, |a, b, c| orientation(a, b, c) >= 0);
        clean_chain(&mut top_left, |a, b, c| orientation(a, b, c) <= 0);

        let mut vertices = Vec::with_capacity(
            bottom_left.len() + bottom_right.len() + top_right.len() + top_left.len(),
        );
        vertices.extend(bottom_left.iter().copied());
        pop_if_last_is(&mut vertices, bottom_right.last());
        vertices.extend(bottom_right.iter().rev().copied());
        pop_if_last_is(&mut vertices, top_right.first());
        vertices.extend(top_right.iter().copied());
        pop_if_last_is(&mut vertices, top_left.last());
        vertices.extend(top_left.iter().rev().copied());
        pop_if_last_is(&mut vertices, bottom_left.first());

        Self {
            vertices,
            most_left: Some(min_p),
            most_right: Some(max_p),
            most_top: Some(highest),
            most_bottom: Some(lowest),
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertex at cyclic position `i` (wraps around); `None` on an empty hull.
    #[inline]
    pub fn get(&self, i: usize) -> Option<Point> {
        if self.vertices.is_empty() {
            return None;
        }
        Some(self.vertices[i % self.vertices.len()])
    }

    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.vertices.iter().position(|&v| v == p)
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        self.vertices.iter().copied()
    }

    /// All vertices once, starting at `start` and wrapping around.
    pub fn cyclic_from(&self, start: usize) -> impl Iterator<Item = Point> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |k| self.vertices[(start + k) % n])
    }

    /// Lexicographically smallest point of the source set.
    #[inline]
    pub fn most_left(&self) -> Option<Point> {
        self.most_left
    }

    /// Lexicographically largest point of the source set.
    #[inline]
    pub fn most_right(&self) -> Option<Point> {
        self.most_right
    }

    /// Maximum `y`; ties resolve to the lexicographically smallest candidate.
    #[inline]
    pub fn most_top(&self) -> Option<Point> {
        self.most_top
    }

    /// Minimum `y`; ties resolve to the lexicographically smallest candidate.
    #[inline]
    pub fn most_bottom(&self) -> Option<Point> {
        self.most_bottom
    }

    /// Twice the enclosed area (shoelace, exact). Zero below three vertices.
    pub fn twice_area(&self) -> i128 {
        let n = self.vertices.len();
        if n < 3 {
            return 0;
        }
        let o = self.vertices[0];
        (1..n - 1)
            .map(|k| orientation(o, self.vertices[k], self.vertices[k + 1]))
            .sum()
    }

    /// On or inside the hull.
    pub fn contains(&self, p: Point) -> bool {
        match self.vertices.as_slice() {
            [] => false,
            [a] => *a == p,
            [a, b] => {
                orientation(*a, *b, p) == 0
                    && p.x >= a.x.min(b.x)
                    && p.x <= a.x.max(b.x)
                    && p.y >= a.y.min(b.y)
                    && p.y <= a.y.max(b.y)
            }
            vs => (0..vs.len()).all(|k| orientation(vs[k], vs[(k + 1) % vs.len()], p) >= 0),
        }
    }

    /// Strict counter-clockwise turn at every vertex (hulls of three or more).
    pub fn check_convexity(&self) -> Result<(), HullDefect> {
        let n = self.vertices.len();
        if n < 3 {
            return Ok(());
        }
        for k in 0..n {
            let prev = self.vertices[(k + n - 1) % n];
            let vertex = self.vertices[k];
            let next = self.vertices[(k + 1) % n];
            let turn = orientation(prev, vertex, next);
            if turn <= 0 {
                return Err(HullDefect::Reflex {
                    index: k,
                    vertex,
                    turn,
                });
            }
        }
        Ok(())
    }

    /// Invariants the finders rely on, checked without the source set: caches
    /// agree with the vertices, the first vertex is `most_left`, two vertices
    /// are distinct and ascending, larger hulls are strictly convex.
    pub fn check_layout(&self) -> Result<(), HullDefect> {
        let own: PointSet = self.vertices.iter().copied().collect();
        self.check_extremes(&own)?;
        if let Some(&first) = self.vertices.first() {
            if Some(first) != self.most_left {
                return Err(HullDefect::Extremal {
                    which: "first vertex",
                    cached: Some(first),
                    expected: self.most_left,
                });
            }
        }
        if let [a, b] = *self.vertices.as_slice() {
            if a >= b {
                return Err(HullDefect::Reflex {
                    index: 1,
                    vertex: b,
                    turn: 0,
                });
            }
        }
        self.check_convexity()
    }

    /// Cached extremal points against a linear scan of `points`.
    pub fn check_extremes(&self, points: &PointSet) -> Result<(), HullDefect> {
        let max_y = points.iter().map(|p| p.y).max();
        let min_y = points.iter().map(|p| p.y).min();
        let checks = [
            ("most_left", self.most_left, points.first()),
            ("most_right", self.most_right, points.last()),
            (
                "most_top",
                self.most_top,
                points.iter().find(|p| Some(p.y) == max_y),
            ),
            (
                "most_bottom",
                self.most_bottom,
                points.iter().find(|p| Some(p.y) == min_y),
            ),
        ];
        for (which, cached, expected) in checks {
            if cached != expected {
                return Err(HullDefect::Extremal {
                    which,
                    cached,
                    expected,
                });
            }
        }
        Ok(())
    }
}

/// Staircase contours of one traversal direction.
struct Contours {
    bottom: Vec<Point>,
    top: Vec<Point>,
    lowest: Point,
    highest: Point,
}

impl Contours {
    fn collect(first: Point, rest: impl Iterator<Item = Point>) -> Self {
        let mut out = Self {
            bottom: vec![first],
            top: vec![first],
            lowest: first,
            highest: first,
        };
        for p in rest {
            if p.y < out.lowest.y {
                out.bottom.push(p);
                out.lowest = p;
            }
            if p.y > out.highest.y {
                out.top.push(p);
                out.highest = p;
            }
        }
        out
    }
}

/// Remove every vertex rejected by `reject(prev_prev, next, middle)`.
///
/// Single cursor over the chain stored in place: `chain[..kept]` is the cleaned
/// prefix and `read` walks forward. A rejection steps the cursor back by
/// dropping the middle vertex (`kept -= 1`) and re-tests against the vertex
/// before it, so each deletion is paid for by an earlier forward step and the
/// whole pass is linear in the chain length.
fn clean_chain<F>(chain: &mut Vec<Point>, reject: F)
where
    F: Fn(Point, Point, Point) -> bool,
{
    if chain.len() < 3 {
        return;
    }
    let mut kept = 2;
    for read in 2..chain.len() {
        let p = chain[read];
        while kept >= 2 && reject(chain[kept - 2], p, chain[kept - 1]) {
            kept -= 1;
        }
        chain[kept] = p;
        kept += 1;
    }
    chain.truncate(kept);
}

#[inline]
fn pop_if_last_is(vertices: &mut Vec<Point>, junction: Option<&Point>) {
    if vertices.last().is_some() && vertices.last() == junction {
        vertices.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(pts: &[(i32, i32)]) -> PointSet {
        pts.iter().map(|&p| Point::from(p)).collect()
    }

    fn pts(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|&p| Point::from(p)).collect()
    }

    #[test]
    fn empty_single_and_pair() {
        let h = ConvexHull::build(&PointSet::new());
        assert!(h.is_empty());
        assert_eq!(h.most_left(), None);

        let h = ConvexHull::build(&set(&[(5, 5)]));
        assert_eq!(h.vertices(), pts(&[(5, 5)]).as_slice());
        assert_eq!(h.most_top(), Some(Point::new(5, 5)));

        let h = ConvexHull::build(&set(&[(4, 0), (0, 0)]));
        assert_eq!(h.vertices(), pts(&[(0, 0), (4, 0)]).as_slice());
        assert_eq!(h.most_right(), Some(Point::new(4, 0)));
        // Tie on y: lexicographically smallest wins.
        assert_eq!(h.most_top(), Some(Point::new(0, 0)));
        assert_eq!(h.most_bottom(), Some(Point::new(0, 0)));
    }

    #[test]
    fn square_with_interior_point() {
        let h = ConvexHull::build(&set(&[(0, 0), (4, 0), (4, 4), (0, 4), (2, 2)]));
        assert_eq!(h.vertices(), pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]).as_slice());
        assert_eq!(h.most_left(), Some(Point::new(0, 0)));
        assert_eq!(h.most_right(), Some(Point::new(4, 4)));
        assert_eq!(h.most_top(), Some(Point::new(0, 4)));
        assert_eq!(h.most_bottom(), Some(Point::new(0, 0)));
        assert_eq!(h.twice_area(), 32);
        assert!(h.check_convexity().is_ok());
        assert!(h.contains(Point::new(2, 2)));
        assert!(h.contains(Point::new(4, 2)));
        assert!(!h.contains(Point::new(5, 2)));
    }

    #[test]
    fn collinear_sets_reduce_to_extremes() {
        let h = ConvexHull::build(&set(&[(0, 0), (1, 1), (2, 2), (3, 3)]));
        assert_eq!(h.vertices(), pts(&[(0, 0), (3, 3)]).as_slice());
        let h = ConvexHull::build(&set(&[(0, 0), (1, 0), (2, 0)]));
        assert_eq!(h.vertices(), pts(&[(0, 0), (2, 0)]).as_slice());
        let h = ConvexHull::build(&set(&[(7, -3), (7, 0), (7, 9)]));
        assert_eq!(h.vertices(), pts(&[(7, -3), (7, 9)]).as_slice());
        assert!(h.contains(Point::new(7, 4)));
        assert!(!h.contains(Point::new(7, 10)));
    }

    #[test]
    fn collinear_boundary_points_are_dropped() {
        // Midpoints on every edge of a square plus a vertical left edge.
        let h = ConvexHull::build(&set(&[
            (0, 0),
            (2, 0),
            (4, 0),
            (4, 2),
            (4, 4),
            (2, 4),
            (0, 4),
            (0, 2),
            (1, 1),
        ]));
        assert_eq!(h.vertices(), pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]).as_slice());
        assert!(h.check_convexity().is_ok());
    }

    #[test]
    fn triangle_with_shared_x() {
        let h = ConvexHull::build(&set(&[(0, 0), (0, 5), (3, 1)]));
        assert_eq!(h.vertices(), pts(&[(0, 0), (3, 1), (0, 5)]).as_slice());
    }

    #[test]
    fn clean_chain_removes_reflex_runs() {
        // Bottom-left staircase: (1,9) is a dent, (3,2) sits on the edge (2,3)-(4,1).
        let mut chain = pts(&[(0, 10), (1, 9), (2, 3), (3, 2), (4, 1), (8, 0)]);
        clean_chain(&mut chain, |a, b, c| orientation(a, b, c) >= 0);
        assert_eq!(chain, pts(&[(0, 10), (2, 3), (4, 1), (8, 0)]));
    }

    #[test]
    fn cyclic_traversal_wraps() {
        let h = ConvexHull::build(&set(&[(0, 0), (4, 0), (4, 4), (0, 4)]));
        let from2: Vec<_> = h.cyclic_from(2).collect();
        assert_eq!(from2, pts(&[(4, 4), (0, 4), (0, 0), (4, 0)]));
        assert_eq!(h.get(5), Some(Point::new(4, 0)));
        assert_eq!(ConvexHull::default().get(0), None);
        assert_eq!(h.index_of(Point::new(0, 4)), Some(3));
    }

    #[test]
    fn defect_is_reported() {
        let bad = ConvexHull {
            vertices: pts(&[(0, 0), (4, 4), (4, 0), (0, 4)]),
            ..ConvexHull::default()
        };
        let err = bad.check_convexity().unwrap_err();
        assert!(matches!(err, HullDefect::Reflex { index: 1, turn, .. } if turn < 0));
        assert!(err.to_string().contains("non-convex"));

        let points = PointSet::from_iter([Point::new(0, 0), Point::new(1, 1)]);
        let err = bad.check_extremes(&points).unwrap_err();
        assert!(matches!(err, HullDefect::Extremal { which: "most_left", .. }));
        let good = ConvexHull::build(&points);
        assert_eq!(good.check_extremes(&points), Ok(()));
        assert_eq!(good.check_layout(), Ok(()));
    }

    #[test]
    fn deserialize_validates_layout() {
        let built = ConvexHull::build(&set(&[(0, 0), (4, 0), (4, 4), (0, 4), (2, 2)]));
        let json = serde_json::to_string(&built).unwrap();
        let back: ConvexHull = serde_json::from_str(&json).unwrap();
        assert_eq!(back, built);

        let empty: ConvexHull = serde_json::from_str(
            r#"{"vertices":[],"most_left":null,"most_right":null,"most_top":null,"most_bottom":null}"#,
        )
        .unwrap();
        assert!(empty.is_empty());

        // Clockwise order of the same square.
        let clockwise = r#"{"vertices":[{"x":0,"y":0},{"x":0,"y":4},{"x":4,"y":4},{"x":4,"y":0}],
            "most_left":{"x":0,"y":0},"most_right":{"x":4,"y":4},
            "most_top":{"x":0,"y":4},"most_bottom":{"x":0,"y":0}}"#;
        let err = serde_json::from_str::<ConvexHull>(clockwise).unwrap_err();
        assert!(err.to_string().contains("non-convex"));

        // Counter-clockwise but not starting at the leftmost vertex.
        let rotated = r#"{"vertices":[{"x":4,"y":0},{"x":4,"y":4},{"x":0,"y":4},{"x":0,"y":0}],
            "most_left":{"x":0,"y":0},"most_right":{"x":4,"y":4},
            "most_top":{"x":0,"y":4},"most_bottom":{"x":0,"y":0}}"#;
        let err = serde_json::from_str::<ConvexHull>(rotated).unwrap_err();
        assert!(err.to_string().contains("first vertex"));

        // Caches that do not match the vertices.
        let stale = r#"{"vertices":[{"x":0,"y":0},{"x":4,"y":0}],
            "most_left":{"x":0,"y":0},"most_right":{"x":9,"y":9},
            "most_top":{"x":0,"y":0},"most_bottom":{"x":0,"y":0}}"#;
        assert!(serde_json::from_str::<ConvexHull>(stale).is_err());
    }
}
