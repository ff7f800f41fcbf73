//! Mutation boundary: owns the working point set and fans out snapshots.
//!
//! Every mutation that actually changes the set triggers exactly one
//! recomputation and one synchronous notification of each listener, in
//! subscription order. No-op mutations (inserting a present point, removing an
//! absent one) leave the snapshot untouched and notify nobody.
//!
//! Code cross-refs: `engine::Calculator`, `changes::ChangeManager`, `point_file`

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::engine::{Calculator, EngineCfg, Snapshot};
use crate::geom2::{ConvexHull, Diameter, Point, PointSet, Quadrangle, Triangle};
use crate::point_file::{self, PointFileError};

/// Receives every new snapshot.
pub trait ChangeListener {
    fn on_change(&mut self, snapshot: &Snapshot);
}

impl<F> ChangeListener for F
where
    F: FnMut(&Snapshot),
{
    fn on_change(&mut self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

pub struct HullSession {
    points: PointSet,
    calc: Calculator,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl fmt::Debug for HullSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HullSession")
            .field("points", &self.points.len())
            .field("hull", &self.calc.hull().len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for HullSession {
    fn default() -> Self {
        Self::new(EngineCfg::default())
    }
}

impl HullSession {
    pub fn new(cfg: EngineCfg) -> Self {
        Self {
            points: PointSet::new(),
            calc: Calculator::new(cfg),
            listeners: Vec::new(),
        }
    }

    /// Start from an existing set (computes once, nobody to notify yet).
    pub fn with_points(cfg: EngineCfg, points: PointSet) -> Self {
        let mut calc = Calculator::new(cfg);
        calc.update(&points);
        Self {
            points,
            calc,
            listeners: Vec::new(),
        }
    }

    #[inline]
    pub fn points(&self) -> &PointSet {
        &self.points
    }

    #[inline]
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.calc.snapshot()
    }

    #[inline]
    pub fn hull(&self) -> &ConvexHull {
        self.calc.hull()
    }

    #[inline]
    pub fn diameter(&self) -> Option<Diameter> {
        self.calc.diameter()
    }

    #[inline]
    pub fn quadrangle(&self) -> Option<Quadrangle> {
        self.calc.quadrangle()
    }

    #[inline]
    pub fn triangle(&self) -> Option<Triangle> {
        self.calc.triangle()
    }

    pub fn subscribe(&mut self, listener: impl ChangeListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn add_point(&mut self, p: Point) -> bool {
        let added = self.points.insert(p);
        if added {
            self.refresh();
        }
        added
    }

    /// Insert all of `points`; returns the ones that were not present yet.
    pub fn add_points(&mut self, points: impl IntoIterator<Item = Point>) -> Vec<Point> {
        let added: Vec<Point> = points
            .into_iter()
            .filter(|&p| self.points.insert(p))
            .collect();
        if !added.is_empty() {
            self.refresh();
        }
        added
    }

    pub fn remove_point(&mut self, p: Point) -> bool {
        let removed = self.points.remove(&p);
        if removed {
            self.refresh();
        }
        removed
    }

    /// Remove all of `points`; returns how many were present.
    pub fn remove_points(&mut self, points: impl IntoIterator<Item = Point>) -> usize {
        let removed = points
            .into_iter()
            .filter(|p| self.points.remove(p))
            .count();
        if removed > 0 {
            self.refresh();
        }
        removed
    }

    /// Relocate `from` to `to` with a single recomputation.
    ///
    /// Fails (returns false, no change) if `from` is absent, `to` is already
    /// occupied, or both are the same point.
    pub fn move_point(&mut self, from: Point, to: Point) -> bool {
        if from == to || !self.points.contains(&from) || self.points.contains(&to) {
            return false;
        }
        self.points.remove(&from);
        self.points.insert(to);
        self.refresh();
        true
    }

    pub fn clear(&mut self) {
        if !self.points.is_empty() {
            self.points.clear();
            self.refresh();
        }
    }

    /// Replace the set with the contents of `path`.
    ///
    /// The file is parsed into a fresh set first; on failure the current set
    /// and snapshot are kept as they are.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), PointFileError> {
        let path = path.as_ref();
        let points = point_file::read_points(path).map_err(|e| {
            tracing::warn!(error = %e, "load failed, keeping current points");
            e
        })?;
        self.points = points;
        self.refresh();
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PointFileError> {
        point_file::write_points(path, &self.points).map_err(|e| {
            tracing::warn!(error = %e, "save failed");
            e
        })
    }

    fn refresh(&mut self) {
        let snapshot = self.calc.update(&self.points);
        for listener in &mut self.listeners {
            listener.on_change(&snapshot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn recording(session: &mut HullSession) -> Rc<RefCell<Vec<usize>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |s: &Snapshot| sink.borrow_mut().push(s.hull.len()));
        seen
    }

    #[test]
    fn one_notification_per_effective_mutation() {
        let mut session = HullSession::new(EngineCfg { verify_hull: true });
        let seen = recording(&mut session);

        assert!(session.add_point(p(0, 0)));
        assert!(!session.add_point(p(0, 0)));
        let added = session.add_points([p(4, 0), p(4, 4), p(0, 0), p(0, 4), p(2, 2)]);
        assert_eq!(added, vec![p(4, 0), p(4, 4), p(0, 4), p(2, 2)]);
        assert!(session.add_points([p(4, 0)]).is_empty());
        assert!(!session.remove_point(p(9, 9)));
        assert!(session.remove_point(p(2, 2)));
        assert_eq!(session.remove_points([p(4, 4), p(7, 7)]), 1);
        session.clear();
        session.clear();

        assert_eq!(*seen.borrow(), vec![1, 4, 4, 3, 0]);
        assert!(session.hull().is_empty());
        assert_eq!(session.diameter(), None);
    }

    #[test]
    fn move_point_rejects_occupied_targets() {
        let mut session = HullSession::default();
        let seen = recording(&mut session);
        session.add_points([p(0, 0), p(6, 0), p(0, 6)]);
        assert!(!session.move_point(p(0, 0), p(6, 0)));
        assert!(!session.move_point(p(1, 1), p(2, 2)));
        assert!(!session.move_point(p(0, 0), p(0, 0)));
        assert!(session.move_point(p(0, 0), p(6, 6)));
        assert!(session.points().contains(&p(6, 6)));
        assert!(!session.points().contains(&p(0, 0)));
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(session.triangle().map(|t| t.twice_area()), Some(36));
    }

    #[test]
    fn load_failure_keeps_previous_state() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        std::fs::write(&good, "0 0\n4 0\nnot a point\n4 4\n0 4\n").unwrap();

        let mut session = HullSession::default();
        let seen = recording(&mut session);
        session.load(&good).unwrap();
        assert_eq!(session.points().len(), 4);
        let before = session.snapshot();

        assert!(session.load(dir.path().join("missing.txt")).is_err());
        assert_eq!(session.points().len(), 4);
        assert_eq!(*session.snapshot(), *before);
        assert_eq!(*seen.borrow(), vec![4]);

        let out = dir.path().join("out.txt");
        session.save(&out).unwrap();
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "0 0\n0 4\n4 0\n4 4\n"
        );
    }

    #[test]
    fn with_points_computes_up_front() {
        let set: PointSet = [p(0, 0), p(3, 0), p(0, 3)].into_iter().collect();
        let session = HullSession::with_points(EngineCfg::default(), set);
        assert_eq!(session.hull().len(), 3);
        assert!(session.quadrangle().is_some());
    }
}
