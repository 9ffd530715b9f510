//! Data types for the pair search: cases, results, sampling policy, replay seeds.

use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::geom::{points_from_coords, segments_intersect, EdgeIds, Hull, Point};

/// One test case: the two point sets, ids `1..=len` in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Case {
    pub p: Vec<Point>,
    pub r: Vec<Point>,
}

impl Case {
    pub fn new(p: Vec<Point>, r: Vec<Point>) -> Self {
        Self { p, r }
    }
    pub fn from_coords(p: &[(i64, i64)], r: &[(i64, i64)]) -> Self {
        Self {
            p: points_from_coords(p),
            r: points_from_coords(r),
        }
    }
    /// `(HP, HR)`.
    pub fn hulls(&self) -> (Hull, Hull) {
        (Hull::from_points(&self.p), Hull::from_points(&self.r))
    }
}

/// Which set supplies the segment and which hull it crosses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Segment between two P points crosses an edge of hull(R).
    PToR,
    /// Segment between two R points crosses an edge of hull(P).
    RToP,
}

/// Search stage that produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Heuristic,
    Containment,
    Exhaustive,
}

/// Crossing result: segment endpoint ids, then the crossed hull edge's endpoint ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Crossing {
    pub a: usize,
    pub b: usize,
    pub edge: EdgeIds,
    pub direction: Direction,
    pub stage: Stage,
}

impl Crossing {
    /// `[a, b, e1, e2]`.
    #[inline]
    pub fn ids(&self) -> [usize; 4] {
        [self.a, self.b, self.edge.e1, self.edge.e2]
    }

    /// Ids grouped by set: `(P ids, R ids)` regardless of direction.
    pub fn by_set(&self) -> ([usize; 2], [usize; 2]) {
        let seg = [self.a, self.b];
        let edge = [self.edge.e1, self.edge.e2];
        match self.direction {
            Direction::PToR => (seg, edge),
            Direction::RToP => (edge, seg),
        }
    }

    /// Independent re-check against the case: ids resolve, the edge is an edge of
    /// the opposite hull, and the closed segments intersect.
    pub fn verify(&self, case: &Case) -> bool {
        let (src, dst): (&[Point], &[Point]) = match self.direction {
            Direction::PToR => (&case.p, &case.r),
            Direction::RToP => (&case.r, &case.p),
        };
        let get = |set: &[Point], id: usize| id.checked_sub(1).and_then(|i| set.get(i)).copied();
        let (Some(a), Some(b), Some(u), Some(v)) = (
            get(src, self.a),
            get(src, self.b),
            get(dst, self.edge.e1),
            get(dst, self.edge.e2),
        ) else {
            return false;
        };
        self.a != self.b
            && Hull::from_points(dst).has_edge(u.id, v.id)
            && segments_intersect(a, b, u, v)
    }
}

impl fmt::Display for Crossing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.a, self.b, self.edge.e1, self.edge.e2)
    }
}

/// Output line for one case: the four ids, or `-1`.
pub fn format_outcome(res: Option<&Crossing>) -> String {
    match res {
        Some(c) => c.to_string(),
        None => "-1".to_string(),
    }
}

/// Candidate sampling policy for the directed searches.
///
/// Defaults: 10 forward neighbours, a ±5 band around the antipode, 10 random
/// offsets, containment fallback on.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Offsets `1..=near` in angular order.
    pub near: usize,
    /// Offsets `n/2 - k` for `k in 0..=band` and `n/2 + k` for `k in 1..=band`.
    pub antipodal_band: usize,
    /// Random offsets in `0..n`, drawn once per directed run.
    pub random: usize,
    /// Base seed; mixed with the case index.
    pub seed: u64,
    /// Run the containment fallback when both directed searches fail.
    pub fallback: bool,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self {
            near: 10,
            antipodal_band: 5,
            random: 10,
            seed: 0,
            fallback: true,
        }
    }
}

/// Replay token: makes the random offsets of each case reproducible and
/// independent of how many cases precede it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
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
