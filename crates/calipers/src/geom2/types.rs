//! Integer 2D value types: points and the inscribed figures derived from a hull.
//!
//! - `Point`: immutable integer coordinate pair, lexicographic total order.
//! - `Diameter`, `Quadrangle`, `Triangle`: vertex tuples produced by the finders,
//!   with constructors for the small-hull conventions (1, 2 or 3 hull points).
//!
//! Code cross-refs: `util::orientation`, `hull::ConvexHull`, `calipers`, `triangle`.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::util::{orientation, squared_distance};

/// Integer point. Ordering is lexicographic: ascending `x`, ties by ascending `y`.
///
/// Field order matters: the derived `Ord` compares `x` first, then `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Float view for collaborators working in screen or model space.
    #[inline]
    pub fn to_vec2(self) -> Vector2<f64> {
        Vector2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for Point {
    fn from(value: (i32, i32)) -> Self {
        Point::new(value.0, value.1)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Farthest pair of hull vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diameter {
    pub a: Point,
    pub b: Point,
}

impl Diameter {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// Single-point hull: both ends coincide.
    #[inline]
    pub fn single(p: Point) -> Self {
        Self { a: p, b: p }
    }

    #[inline]
    pub fn points(&self) -> [Point; 2] {
        [self.a, self.b]
    }

    /// Exact squared length.
    #[inline]
    pub fn squared_length(&self) -> i128 {
        squared_distance(self.a, self.b)
    }

    /// Euclidean length; derived, read-only value.
    pub fn length(&self) -> f64 {
        (self.b.to_vec2() - self.a.to_vec2()).norm()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> {
        self.points().into_iter()
    }
}

/// Inscribed quadrangle `(a, b, c, d)` in cyclic order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quadrangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
    pub d: Point,
}

impl Quadrangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point, d: Point) -> Self {
        Self { a, b, c, d }
    }

    /// Hull of one point: all four vertices equal.
    #[inline]
    pub fn single(p: Point) -> Self {
        Self::new(p, p, p, p)
    }

    /// Hull of two points: `a = b = first`, `c = d = second`.
    #[inline]
    pub fn pair(first: Point, second: Point) -> Self {
        Self::new(first, first, second, second)
    }

    /// Hull of three points: taken as given, `d = c`.
    #[inline]
    pub fn triple(a: Point, b: Point, c: Point) -> Self {
        Self::new(a, b, c, c)
    }

    #[inline]
    pub fn points(&self) -> [Point; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Twice the signed area (exact). Non-negative for counter-clockwise vertices.
    #[inline]
    pub fn twice_area(&self) -> i128 {
        orientation(self.a, self.b, self.c) + orientation(self.a, self.c, self.d)
    }

    pub fn area(&self) -> f64 {
        self.twice_area() as f64 / 2.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> {
        self.points().into_iter()
    }
}

/// Inscribed triangle `(a, b, c)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    #[inline]
    pub fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn single(p: Point) -> Self {
        Self::new(p, p, p)
    }

    /// Hull of two points: `a = b = first`, `c = second`.
    #[inline]
    pub fn pair(first: Point, second: Point) -> Self {
        Self::new(first, first, second)
    }

    #[inline]
    pub fn points(&self) -> [Point; 3] {
        [self.a, self.b, self.c]
    }

    #[inline]
    pub fn twice_area(&self) -> i128 {
        orientation(self.a, self.b, self.c)
    }

    pub fn area(&self) -> f64 {
        self.twice_area() as f64 / 2.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Point> {
        self.points().into_iter()
    }
}
