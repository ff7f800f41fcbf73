//! Exact 2D hull geometry over integer points.
//!
//! Purpose
//! - Build the strictly convex hull of an ordered point set and derive the
//!   diameter, the maximum-area inscribed quadrangle and the maximum-area
//!   inscribed triangle from it.
//! - Every comparison is an exact `i128` predicate (`util::orientation` and
//!   friends); floats only appear in derived read-only values (lengths, areas).
//!
//! Data flow
//! - `PointSet` -> `ConvexHull::build` -> {`diameter_and_quadrangle`, `max_triangle`}.
//!   Each stage is a pure function of its input.
//!
//! Code cross-refs: `engine::compute`, `Point`, `PointSet`, `ConvexHull`

mod calipers;
mod hull;
pub mod ordered;
pub mod rand;
mod triangle;
mod types;
mod util;

pub use calipers::{diameter, diameter_and_quadrangle, max_quadrangle};
pub use hull::{ConvexHull, HullDefect};
pub use ordered::PointSet;
pub use triangle::max_triangle;
pub use types::{Diameter, Point, Quadrangle, Triangle};
pub use util::{orientation, squared_distance};
