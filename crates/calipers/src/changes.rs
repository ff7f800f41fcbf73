//! Undo/redo over a `HullSession` (command stack of reversible changes).
//!
//! A change only goes on the undo stack if executing it actually changed the
//! session. Recording a new change drops the redo history.

use std::fmt;

use crate::geom2::Point;
use crate::session::HullSession;

/// A reversible edit of the session's point set.
pub trait Change: fmt::Debug {
    /// Apply; false means nothing changed.
    fn execute(&mut self, session: &mut HullSession) -> bool;
    /// Undo a previous successful `execute`; false means nothing changed.
    fn revert(&mut self, session: &mut HullSession) -> bool;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddPoint {
    pub point: Point,
}

impl Change for AddPoint {
    fn execute(&mut self, session: &mut HullSession) -> bool {
        session.add_point(self.point)
    }

    fn revert(&mut self, session: &mut HullSession) -> bool {
        session.remove_point(self.point)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemovePoint {
    pub point: Point,
}

impl Change for RemovePoint {
    fn execute(&mut self, session: &mut HullSession) -> bool {
        session.remove_point(self.point)
    }

    fn revert(&mut self, session: &mut HullSession) -> bool {
        session.add_point(self.point)
    }
}

/// Drag of one point; a move onto an occupied position does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MovePoint {
    pub origin: Point,
    pub destination: Point,
}

impl Change for MovePoint {
    fn execute(&mut self, session: &mut HullSession) -> bool {
        session.move_point(self.origin, self.destination)
    }

    fn revert(&mut self, session: &mut HullSession) -> bool {
        session.move_point(self.destination, self.origin)
    }
}

/// Bulk insert (e.g. a random cloud). Undo removes only the points that were new.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddPoints {
    pub points: Vec<Point>,
    added: Vec<Point>,
}

impl AddPoints {
    pub fn new(points: Vec<Point>) -> Self {
        Self {
            points,
            added: Vec::new(),
        }
    }

    /// Points inserted by the last `execute`.
    pub fn added(&self) -> &[Point] {
        &self.added
    }
}

impl Change for AddPoints {
    fn execute(&mut self, session: &mut HullSession) -> bool {
        self.added = session.add_points(self.points.iter().copied());
        !self.added.is_empty()
    }

    fn revert(&mut self, session: &mut HullSession) -> bool {
        session.remove_points(self.added.iter().copied()) > 0
    }
}

/// Whether an executed change goes on the undo stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Record {
    Save,
    Transient,
}

#[derive(Debug, Default)]
pub struct ChangeManager {
    undo: Vec<Box<dyn Change>>,
    redo: Vec<Box<dyn Change>>,
}

impl ChangeManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Execute `change` against `session`; returns whether the session changed.
    pub fn execute(
        &mut self,
        mut change: impl Change + 'static,
        session: &mut HullSession,
        record: Record,
    ) -> bool {
        if !change.execute(session) {
            tracing::debug!(?change, "change had no effect");
            return false;
        }
        if record == Record::Save {
            self.undo.push(Box::new(change));
            self.redo.clear();
        }
        true
    }

    pub fn undo(&mut self, session: &mut HullSession) -> bool {
        let Some(mut change) = self.undo.pop() else {
            return false;
        };
        let ok = change.revert(session);
        tracing::debug!(?change, ok, "undo");
        if ok {
            self.redo.push(change);
        }
        ok
    }

    pub fn redo(&mut self, session: &mut HullSession) -> bool {
        let Some(mut change) = self.redo.pop() else {
            return false;
        };
        let ok = change.execute(session);
        tracing::debug!(?change, ok, "redo");
        if ok {
            self.undo.push(change);
        }
        ok
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineCfg;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn session() -> HullSession {
        HullSession::new(EngineCfg { verify_hull: true })
    }

    #[test]
    fn undo_redo_add_and_remove() {
        let mut s = session();
        let mut m = ChangeManager::new();
        assert!(!m.can_undo() && !m.can_redo());

        assert!(m.execute(AddPoint { point: p(1, 1) }, &mut s, Record::Save));
        assert!(m.execute(AddPoint { point: p(5, 1) }, &mut s, Record::Save));
        assert!(!m.execute(AddPoint { point: p(5, 1) }, &mut s, Record::Save));
        assert!(m.execute(RemovePoint { point: p(1, 1) }, &mut s, Record::Save));
        assert_eq!(s.points().len(), 1);

        assert!(m.undo(&mut s));
        assert_eq!(s.points().len(), 2);
        assert!(m.undo(&mut s));
        assert!(m.undo(&mut s));
        assert!(s.points().is_empty());
        assert!(!m.undo(&mut s));

        assert!(m.redo(&mut s));
        assert!(m.redo(&mut s));
        assert_eq!(s.points().len(), 2);
        assert!(m.can_redo());

        // A new saved change drops the redo history.
        assert!(m.execute(AddPoint { point: p(9, 9) }, &mut s, Record::Save));
        assert!(!m.can_redo());
        assert!(!m.redo(&mut s));
    }

    #[test]
    fn move_onto_occupied_is_not_recorded() {
        let mut s = session();
        let mut m = ChangeManager::new();
        m.execute(AddPoints::new(vec![p(0, 0), p(3, 0)]), &mut s, Record::Transient);
        assert!(!m.can_undo());

        let blocked = MovePoint {
            origin: p(0, 0),
            destination: p(3, 0),
        };
        assert!(!m.execute(blocked, &mut s, Record::Save));
        assert!(!m.can_undo());

        let drag = MovePoint {
            origin: p(0, 0),
            destination: p(0, 4),
        };
        assert!(m.execute(drag, &mut s, Record::Save));
        assert!(s.points().contains(&p(0, 4)));
        assert!(m.undo(&mut s));
        assert!(s.points().contains(&p(0, 0)));
        assert!(!s.points().contains(&p(0, 4)));
    }

    #[test]
    fn bulk_undo_removes_only_new_points() {
        let mut s = session();
        let mut m = ChangeManager::new();
        m.execute(AddPoint { point: p(2, 2) }, &mut s, Record::Save);

        let bulk = AddPoints::new(vec![p(0, 0), p(2, 2), p(4, 0), p(0, 0)]);
        assert!(m.execute(bulk, &mut s, Record::Save));
        assert_eq!(s.points().len(), 3);

        assert!(m.undo(&mut s));
        let left: Vec<_> = s.points().iter().collect();
        assert_eq!(left, vec![p(2, 2)]);

        assert!(m.redo(&mut s));
        assert_eq!(s.points().len(), 3);

        m.clear();
        assert!(!m.can_undo() && !m.can_redo());
    }
}
