//! Recomputation engine: point set in, consistent snapshot out.
//!
//! Purpose
//! - `compute` is the pure `update` contract: hull, diameter, quadrangle and
//!   triangle rebuilt from scratch for a given point set.
//! - `Calculator` keeps the last snapshot behind an `Arc` so readers holding an
//!   older snapshot stay consistent while a new one is swapped in.
//!
//! Code cross-refs: `ConvexHull::build`, `diameter_and_quadrangle`, `max_triangle`,
//! `session::HullSession`

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::geom2::{
    diameter_and_quadrangle, max_triangle, ConvexHull, Diameter, PointSet, Quadrangle, Triangle,
};

/// Engine knobs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineCfg {
    /// Check every computed hull for strict convexity and correct extremal
    /// caches; a violation panics.
    pub verify_hull: bool,
}

impl Default for EngineCfg {
    fn default() -> Self {
        Self {
            verify_hull: cfg!(debug_assertions),
        }
    }
}

/// All derived structures of one point set. Replaced, never patched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub hull: ConvexHull,
    pub diameter: Option<Diameter>,
    pub quadrangle: Option<Quadrangle>,
    pub triangle: Option<Triangle>,
}

/// Recompute everything for `points`. Deterministic and total.
///
/// Panics if `cfg.verify_hull` is set and the hull breaks an invariant.
pub fn compute(points: &PointSet, cfg: EngineCfg) -> Snapshot {
    let hull = ConvexHull::build(points);
    if cfg.verify_hull {
        if let Err(defect) = hull
            .check_convexity()
            .and_then(|()| hull.check_extremes(points))
        {
            tracing::warn!(points = points.len(), hull = hull.len(), %defect, "hull defect");
            panic!("hull invariant violated: {defect}");
        }
    }
    let (diameter, quadrangle) = diameter_and_quadrangle(&hull);
    let triangle = max_triangle(&hull);
    Snapshot {
        hull,
        diameter,
        quadrangle,
        triangle,
    }
}

/// Holds the last computed snapshot.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    cfg: EngineCfg,
    snapshot: Arc<Snapshot>,
}

impl Calculator {
    pub fn new(cfg: EngineCfg) -> Self {
        Self {
            cfg,
            snapshot: Arc::new(Snapshot::default()),
        }
    }

    #[inline]
    pub fn cfg(&self) -> EngineCfg {
        self.cfg
    }

    /// Recompute from `points` and swap the new snapshot in.
    pub fn update(&mut self, points: &PointSet) -> Arc<Snapshot> {
        let snapshot = Arc::new(compute(points, self.cfg));
        tracing::debug!(
            points = points.len(),
            hull = snapshot.hull.len(),
            "recomputed"
        );
        self.snapshot = Arc::clone(&snapshot);
        snapshot
    }

    /// Last computed snapshot (empty before the first `update`).
    #[inline]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    #[inline]
    pub fn hull(&self) -> &ConvexHull {
        &self.snapshot.hull
    }

    #[inline]
    pub fn diameter(&self) -> Option<Diameter> {
        self.snapshot.diameter
    }

    #[inline]
    pub fn quadrangle(&self) -> Option<Quadrangle> {
        self.snapshot.quadrangle
    }

    #[inline]
    pub fn triangle(&self) -> Option<Triangle> {
        self.snapshot.triangle
    }
}
