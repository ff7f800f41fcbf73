//! Ordered point set: unique integer points kept in lexicographic order.
//!
//! Purpose
//! - Input of the hull builder, which needs the smallest/largest point and both
//!   an ascending and a descending traversal.
//! - Window queries for collaborators that hit-test points (closest point to a
//!   cursor within a radius).
//!
//! Invariants
//! - No two stored points are equal (duplicates collapse on insert).
//! - Iteration order is always `Point`'s `Ord` (ascending x, then y).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::types::Point;
use super::util::squared_distance;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointSet {
    points: BTreeSet<Point>,
}

impl PointSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `p`; returns false if it was already present.
    #[inline]
    pub fn insert(&mut self, p: Point) -> bool {
        self.points.insert(p)
    }

    #[inline]
    pub fn remove(&mut self, p: &Point) -> bool {
        self.points.remove(p)
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.points.contains(p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Lexicographically smallest point.
    #[inline]
    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Lexicographically largest point.
    #[inline]
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Ascending traversal; `.rev()` gives the descending one.
    #[inline]
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Point> + ExactSizeIterator + '_ {
        self.points.iter().copied()
    }

    /// Points with `min.x <= x <= max.x` and `min.y <= y <= max.y`, ascending.
    ///
    /// An inverted window (`min.x > max.x` or `min.y > max.y`) is empty.
    pub fn window(&self, min: Point, max: Point) -> Vec<Point> {
        if min.x > max.x || min.y > max.y {
            return Vec::new();
        }
        let lo = Point::new(min.x, i32::MIN);
        let hi = Point::new(max.x, i32::MAX);
        self.points
            .range(lo..=hi)
            .filter(|p| p.y >= min.y && p.y <= max.y)
            .copied()
            .collect()
    }

    /// Closest stored point to `center` within Euclidean distance `max_distance`.
    ///
    /// Candidates come from the square window around `center`; ties keep the
    /// lexicographically smallest point.
    pub fn nearest_within(&self, center: Point, max_distance: u32) -> Option<Point> {
        let d = i32::try_from(max_distance).unwrap_or(i32::MAX);
        let min = Point::new(center.x.saturating_sub(d), center.y.saturating_sub(d));
        let max = Point::new(center.x.saturating_add(d), center.y.saturating_add(d));
        let limit = i128::from(max_distance) * i128::from(max_distance);
        let mut best: Option<(Point, i128)> = None;
        for p in self.window(min, max) {
            let dist = squared_distance(p, center);
            if dist > limit {
                continue;
            }
            match best {
                Some((_, b)) if b <= dist => {}
                _ => best = Some((p, dist)),
            }
        }
        best.map(|(p, _)| p)
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = Point;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter().copied()
    }
}
