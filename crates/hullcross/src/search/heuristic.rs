//! Directed heuristic search with containment fallback.

use rand::rngs::StdRng;
use rand::Rng;

use crate::geom::{locate_crossing, Hull, Point};

use super::types::{Case, Crossing, Direction, ReplayToken, SearchCfg, Stage};

/// Search one case for a crossing, seeded by `(cfg.seed, index)`.
///
/// Order: P segments against hull(R), R segments against hull(P), then (if
/// enabled) the containment fallback. The first confirmed crossing wins.
pub fn solve_case(case: &Case, cfg: &SearchCfg, index: u64) -> Option<Crossing> {
    Solver::new(case, cfg, index).solve()
}

/// Convenience: default sampling policy, case index 0.
pub fn solve_with_defaults(case: &Case) -> Option<Crossing> {
    solve_case(case, &SearchCfg::default(), 0)
}

/// Solve cases in order; case `i` uses replay index `i`.
pub fn solve_all(cases: &[Case], cfg: &SearchCfg) -> Vec<Option<Crossing>> {
    cases
        .iter()
        .enumerate()
        .map(|(i, case)| solve_case(case, cfg, i as u64))
        .collect()
}

/// Offsets into the angular order tried for every source point.
///
/// Forward neighbours `1..=near`, the antipodal band around `n/2`, then
/// `random` draws from `0..n`. Entries may be negative or repeat.
pub(crate) fn candidate_offsets<R: Rng>(n: usize, cfg: &SearchCfg, rng: &mut R) -> Vec<isize> {
    if n == 0 {
        return Vec::new();
    }
    let half = (n / 2) as isize;
    let band = cfg.antipodal_band as isize;
    let mut offs: Vec<isize> = Vec::with_capacity(cfg.near + 2 * cfg.antipodal_band + 1 + cfg.random);
    offs.extend(1..=cfg.near as isize);
    offs.extend((0..=band).map(|k| half - k));
    offs.extend((1..=band).map(|k| half + k));
    offs.extend((0..cfg.random).map(|_| rng.gen_range(0..n) as isize));
    offs
}

/// `src` sorted by polar angle around `center` (stable, total order).
pub(crate) fn angular_order(src: &[Point], center: nalgebra::Vector2<f64>) -> Vec<Point> {
    let angle = |p: &Point| (p.y() as f64 - center.y).atan2(p.x() as f64 - center.x);
    let mut pts = src.to_vec();
    pts.sort_by(|a, b| angle(a).total_cmp(&angle(b)));
    pts
}

/// Per-case search state: both hulls and the case's RNG.
pub(crate) struct Solver<'a> {
    case: &'a Case,
    hp: Hull,
    hr: Hull,
    cfg: &'a SearchCfg,
    rng: StdRng,
}

impl<'a> Solver<'a> {
    pub(crate) fn new(case: &'a Case, cfg: &'a SearchCfg, index: u64) -> Self {
        let (hp, hr) = case.hulls();
        let rng = ReplayToken {
            seed: cfg.seed,
            index,
        }
        .to_std_rng();
        Self {
            case,
            hp,
            hr,
            cfg,
            rng,
        }
    }

    pub(crate) fn solve(&mut self) -> Option<Crossing> {
        let found = self.heuristic().or_else(|| {
            if self.cfg.fallback {
                self.containment()
            } else {
                None
            }
        });
        match &found {
            Some(c) => tracing::debug!(
                stage = ?c.stage,
                direction = ?c.direction,
                ids = %c,
                "crossing found"
            ),
            None => tracing::debug!(
                p = self.case.p.len(),
                r = self.case.r.len(),
                "no crossing found"
            ),
        }
        found
    }

    /// Both directed runs: P → hull(R), then R → hull(P).
    pub(crate) fn heuristic(&mut self) -> Option<Crossing> {
        let case = self.case;
        if let Some(c) = self.directed(&case.p, Direction::PToR) {
            return Some(c);
        }
        self.directed(&case.r, Direction::RToP)
    }

    fn target(&self, dir: Direction) -> &Hull {
        match dir {
            Direction::PToR => &self.hr,
            Direction::RToP => &self.hp,
        }
    }

    /// Segments between sampled pairs of `src` (in angular order around the
    /// target hull's centroid) against the target hull.
    fn directed(&mut self, src: &[Point], dir: Direction) -> Option<Crossing> {
        let center = self.target(dir).centroid()?;
        if self.target(dir).len() < 2 {
            return None;
        }
        let pts = angular_order(src, center);
        let n = pts.len();
        let offs = candidate_offsets(n, self.cfg, &mut self.rng);
        tracing::trace!(?dir, n, offsets = offs.len(), "directed run");

        let target = self.target(dir);
        for i in 0..n {
            for &k in &offs {
                let j = (i as isize + k).rem_euclid(n as isize) as usize;
                if i == j {
                    continue;
                }
                let (a, b) = (pts[i], pts[j]);
                if let Some(edge) = locate_crossing(a, b, target) {
                    return Some(Crossing {
                        a: a.id,
                        b: b.id,
                        edge,
                        direction: dir,
                        stage: Stage::Heuristic,
                    });
                }
            }
        }
        None
    }

    /// Fallback for nested configurations: the first P point inside hull(R) is
    /// joined to hull(P) vertices outside hull(R); then the same with roles swapped.
    pub(crate) fn containment(&self) -> Option<Crossing> {
        self.contained_to_exterior(Direction::PToR)
            .or_else(|| self.contained_to_exterior(Direction::RToP))
    }

    fn contained_to_exterior(&self, dir: Direction) -> Option<Crossing> {
        let (src, own_hull, target) = match dir {
            Direction::PToR => (&self.case.p, &self.hp, &self.hr),
            Direction::RToP => (&self.case.r, &self.hr, &self.hp),
        };
        // only the first contained point is tried
        let p = src.iter().copied().find(|&p| target.contains(p))?;
        own_hull
            .vertices()
            .iter()
            .copied()
            .filter(|&q| !target.contains(q))
            .find_map(|q| {
                locate_crossing(p, q, target).map(|edge| Crossing {
                    a: p.id,
                    b: q.id,
                    edge,
                    direction: dir,
                    stage: Stage::Containment,
                })
            })
    }
}
