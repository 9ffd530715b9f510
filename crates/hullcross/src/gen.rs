//! Random integer point clouds (disk or ring) with replay tokens.
//!
//! Purpose
//! - Deterministic test cases for property tests, benches and the `gen` CLI
//!   command. A ring cloud has most points on its hull, which stresses the
//!   locator; a disk cloud has a small hull and many interior points.
//!
//! Model
//! - Draw a polar angle uniformly and a radius in `[inner, 1] · radius`, round to
//!   the integer grid, clamp to `±COORD_LIMIT`, then shift by `center`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use rand::Rng;

use crate::geom::{Point, COORD_LIMIT};
use crate::search::{Case, ReplayToken};

/// Point count distribution.
#[derive(Clone, Copy, Debug)]
pub enum PointCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl PointCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            PointCount::Fixed(n) => n.max(1),
            PointCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// One point cloud.
#[derive(Clone, Copy, Debug)]
pub struct CloudCfg {
    pub count: PointCount,
    pub center: (i64, i64),
    pub radius: i64,
    /// Inner radius as a fraction of `radius`, clamped to [0, 1]. `0` is a disk,
    /// values close to `1` give a thin ring.
    pub inner_frac: f64,
}

impl Default for CloudCfg {
    fn default() -> Self {
        Self {
            count: PointCount::Fixed(50),
            center: (0, 0),
            radius: 1_000,
            inner_frac: 0.0,
        }
    }
}

/// Two clouds, P then R.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScenarioCfg {
    pub p: CloudCfg,
    pub r: CloudCfg,
}

fn draw_cloud<R: Rng>(cfg: &CloudCfg, rng: &mut R) -> Vec<Point> {
    let n = cfg.count.sample(rng);
    let inner = cfg.inner_frac.clamp(0.0, 1.0);
    let radius = cfg.radius.clamp(0, COORD_LIMIT) as f64;
    let (cx, cy) = cfg.center;
    (0..n)
        .map(|i| {
            let th = rng.gen::<f64>() * std::f64::consts::TAU;
            // sqrt keeps a disk uniform by area
            let u: f64 = rng.gen_range(inner * inner..=1.0);
            let r = u.sqrt() * radius;
            let x = (cx as f64 + r * th.cos()).round() as i64;
            let y = (cy as f64 + r * th.sin()).round() as i64;
            Point::new(
                x.clamp(-COORD_LIMIT, COORD_LIMIT),
                y.clamp(-COORD_LIMIT, COORD_LIMIT),
                i + 1,
            )
        })
        .collect()
}

/// Draw one case; reproducible from `(cfg, tok)`.
pub fn draw_case(cfg: &ScenarioCfg, tok: ReplayToken) -> Case {
    let mut rng = tok.to_std_rng();
    let p = draw_cloud(&cfg.p, &mut rng);
    let r = draw_cloud(&cfg.r, &mut rng);
    Case::new(p, r)
}

/// Cases `0..count` for one seed.
pub fn draw_cases(cfg: &ScenarioCfg, seed: u64, count: usize) -> Vec<Case> {
    (0..count as u64)
        .map(|index| draw_case(cfg, ReplayToken { seed, index }))
        .collect()
}
