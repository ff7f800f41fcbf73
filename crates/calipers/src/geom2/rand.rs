//! Random integer point clouds (uniform box + replay tokens).
//!
//! Purpose
//! - Feed the engine with reproducible clouds for interactive "add random
//!   points" actions, the CLI `random` command, benches and tests.
//!
//! Model
//! - `count` independent draws, uniform in the half-open box
//!   `[min.x, max.x) x [min.y, max.y)`. Duplicates are kept in the returned
//!   list; they collapse once inserted into a `PointSet`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `PointSet`, `changes::AddPoints`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::Point;

/// Error type for random point generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Integer sampling box; `min` inclusive, `max` exclusive on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds2i {
    pub min: Point,
    pub max: Point,
}

impl Bounds2i {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    fn validate(&self) -> Result<(), GeneratorError> {
        if self.min.x >= self.max.x {
            return Err(GeneratorError::invalid(format!(
                "empty x range [{}, {})",
                self.min.x, self.max.x
            )));
        }
        if self.min.y >= self.max.y {
            return Err(GeneratorError::invalid(format!(
                "empty y range [{}, {})",
                self.min.y, self.max.y
            )));
        }
        Ok(())
    }
}

/// Random cloud configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomPointsCfg {
    pub count: usize,
    pub bounds: Bounds2i,
}

impl Default for RandomPointsCfg {
    fn default() -> Self {
        Self {
            count: 100,
            bounds: Bounds2i::new(Point::new(0, 0), Point::new(1000, 1000)),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Same seed, next index.
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points uniformly from `cfg.bounds`.
///
/// The same `(cfg, tok)` always yields the same list. A zero count is valid and
/// yields an empty list; an empty range on either axis is not.
pub fn draw_points(cfg: RandomPointsCfg, tok: ReplayToken) -> Result<Vec<Point>, GeneratorError> {
    cfg.bounds.validate()?;
    let mut rng = tok.to_std_rng();
    let Bounds2i { min, max } = cfg.bounds;
    Ok((0..cfg.count)
        .map(|_| Point::new(rng.gen_range(min.x..max.x), rng.gen_range(min.y..max.y)))
        .collect())
}
