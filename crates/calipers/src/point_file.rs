//! Plain-text point files: one point per line, `x y` separated by whitespace.
//!
//! Reading is lenient: a line whose first two tokens are not both `i32` is
//! skipped (blank lines, comments, headers); tokens after the first two are
//! ignored. Writing emits the set in ascending order, one `x y` per line.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::geom2::{Point, PointSet};

/// Failure to read or write a point file.
#[derive(Debug)]
pub enum PointFileError {
    Io { path: PathBuf, source: io::Error },
}

impl PointFileError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl fmt::Display for PointFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "point file {}: {source}", path.display()),
        }
    }
}

impl std::error::Error for PointFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

fn parse_line(line: &str) -> Option<Point> {
    let mut tokens = line.split_whitespace();
    let x = tokens.next()?.parse().ok()?;
    let y = tokens.next()?.parse().ok()?;
    Some(Point::new(x, y))
}

/// Parse file contents into a fresh set. Never fails; bad lines are skipped.
pub fn parse_points(text: &str) -> PointSet {
    let mut set = PointSet::new();
    let mut skipped = 0usize;
    for (lineno, line) in text.lines().enumerate() {
        match parse_line(line) {
            Some(p) => {
                set.insert(p);
            }
            None => {
                skipped += 1;
                tracing::debug!(line = lineno + 1, content = line, "skipping malformed line");
            }
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, kept = set.len(), "parsed point file with skipped lines");
    }
    set
}

/// Render `points` ascending, one `x y` line each.
pub fn format_points(points: &PointSet) -> String {
    let mut out = String::with_capacity(points.len() * 12);
    for p in points {
        out.push_str(&p.x.to_string());
        out.push(' ');
        out.push_str(&p.y.to_string());
        out.push('\n');
    }
    out
}

pub fn read_points(path: impl AsRef<Path>) -> Result<PointSet, PointFileError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| PointFileError::io(path, e))?;
    let set = parse_points(&text);
    tracing::info!(path = %path.display(), count = set.len(), "loaded points");
    Ok(set)
}

pub fn write_points(path: impl AsRef<Path>, points: &PointSet) -> Result<(), PointFileError> {
    let path = path.as_ref();
    fs::write(path, format_points(points)).map_err(|e| PointFileError::io(path, e))?;
    tracing::info!(path = %path.display(), count = points.len(), "saved points");
    Ok(())
}
