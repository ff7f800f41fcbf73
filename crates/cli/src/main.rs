use anyhow::{Context, Result};
use calipers::engine::{EngineCfg, Snapshot};
use calipers::geom2::rand::{draw_points, Bounds2i, RandomPointsCfg, ReplayToken};
use calipers::geom2::{Point, PointSet};
use calipers::point_file;
use calipers::session::HullSession;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hull, diameter and inscribed figures of integer point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute hull, diameter, quadrangle and triangle of a point file
    Compute {
        #[arg(long)]
        input: PathBuf,
        /// Write the JSON report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Check hull invariants (panics on a defect)
        #[arg(long)]
        verify: bool,
    },
    /// Write a reproducible random point file
    Random {
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        min_x: i32,
        #[arg(long, default_value_t = 0)]
        min_y: i32,
        #[arg(long, default_value_t = 1000)]
        max_x: i32,
        #[arg(long, default_value_t = 1000)]
        max_y: i32,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Compute { input, out, verify } => {
            let json = compute(&input, verify)?;
            match out {
                Some(out) => write_output(&out, json.as_bytes()),
                None => {
                    println!("{json}");
                    Ok(())
                }
            }
        }
        Action::Random {
            count,
            min_x,
            min_y,
            max_x,
            max_y,
            seed,
            out,
        } => {
            let cfg = RandomPointsCfg {
                count,
                bounds: Bounds2i::new(Point::new(min_x, min_y), Point::new(max_x, max_y)),
            };
            random(cfg, seed, &out)
        }
    }
}

#[derive(Serialize)]
struct Figure {
    points: Vec<Point>,
    value: f64,
}

/// JSON report of one computation.
#[derive(Serialize)]
struct Report {
    version: &'static str,
    point_count: usize,
    hull: Vec<Point>,
    most_left: Option<Point>,
    most_right: Option<Point>,
    most_top: Option<Point>,
    most_bottom: Option<Point>,
    /// `value` is the length.
    diameter: Option<Figure>,
    /// `value` is the area.
    quadrangle: Option<Figure>,
    /// `value` is the area.
    triangle: Option<Figure>,
}

impl Report {
    fn new(point_count: usize, s: &Snapshot) -> Self {
        Self {
            version: calipers::VERSION,
            point_count,
            hull: s.hull.vertices().to_vec(),
            most_left: s.hull.most_left(),
            most_right: s.hull.most_right(),
            most_top: s.hull.most_top(),
            most_bottom: s.hull.most_bottom(),
            diameter: s.diameter.map(|d| Figure {
                points: d.points().to_vec(),
                value: d.length(),
            }),
            quadrangle: s.quadrangle.map(|q| Figure {
                points: q.points().to_vec(),
                value: q.area(),
            }),
            triangle: s.triangle.map(|t| Figure {
                points: t.points().to_vec(),
                value: t.area(),
            }),
        }
    }
}

fn compute(input: &Path, verify: bool) -> Result<String> {
    tracing::info!(input = %input.display(), verify, "compute");
    let cfg = EngineCfg {
        verify_hull: verify,
    };
    let mut session = HullSession::new(cfg);
    session
        .load(input)
        .with_context(|| format!("loading points from {}", input.display()))?;
    let snapshot = session.snapshot();
    tracing::info!(
        points = session.points().len(),
        hull = snapshot.hull.len(),
        "computed"
    );
    let report = Report::new(session.points().len(), &snapshot);
    Ok(serde_json::to_string_pretty(&report)?)
}

fn random(cfg: RandomPointsCfg, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(
        count = cfg.count,
        min = %cfg.bounds.min,
        max = %cfg.bounds.max,
        seed,
        out = %out.display(),
        "random"
    );
    let points: PointSet = draw_points(cfg, ReplayToken::new(seed, 0))?
        .into_iter()
        .collect();
    ensure_parent(out)?;
    point_file::write_points(out, &points)
        .with_context(|| format!("writing points to {}", out.display()))?;
    Ok(())
}

fn write_output(out: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent(out)?;
    std::fs::write(out, bytes).with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}
