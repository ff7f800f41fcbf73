//! Exact convex hull engine over integer points.
//!
//! From a set of integer 2D points the engine derives the convex hull, its
//! diameter, the maximum-area inscribed quadrangle and the maximum-area
//! inscribed triangle. All comparisons are exact `i128` predicates.
//!
//! Layers
//! - `geom2`: value types, predicates, the ordered point set and the three
//!   hull algorithms (pure functions).
//! - `engine`: `compute` plus the snapshot-holding `Calculator`.
//! - `session`, `changes`, `point_file`: the thin mutation, undo/redo and
//!   persistence collaborators around the engine.

pub mod changes;
pub mod engine;
pub mod geom2;
pub mod point_file;
pub mod session;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Float view of points for rendering-side collaborators (`Point::to_vec2`).
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::changes::{
        AddPoint, AddPoints, Change, ChangeManager, MovePoint, Record, RemovePoint,
    };
    pub use crate::engine::{compute, Calculator, EngineCfg, Snapshot};
    pub use crate::geom2::rand::{
        draw_points, Bounds2i, GeneratorError, RandomPointsCfg, ReplayToken,
    };
    pub use crate::geom2::{
        diameter, diameter_and_quadrangle, max_quadrangle, max_triangle, orientation,
        squared_distance, ConvexHull, Diameter, HullDefect, Point, PointSet, Quadrangle,
        Triangle,
    };
    pub use crate::point_file::{
        format_points, parse_points, read_points, write_points, PointFileError,
    };
    pub use crate::session::{ChangeListener, HullSession};
    pub use nalgebra::Vector2 as Vec2;
}
