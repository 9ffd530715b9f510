use crate::geom::{convex_hull, locate_crossing, Hull, Point};

use super::types::{Case, Crossing, Direction, Stage};

/// Quadratic baseline: every pair of P against hull(R), then every pair of R
/// against hull(P). Finds a crossing whenever one exists.
pub fn solve_exhaustive(case: &Case) -> Option<Crossing> {
    let (hp, hr) = (convex_hull(&case.p), convex_hull(&case.r));
    all_pairs(&case.p, &hr, Direction::PToR).or_else(|| all_pairs(&case.r, &hp, Direction::RToP))
}

fn all_pairs(src: &[Point], target: &Hull, dir: Direction) -> Option<Crossing> {
    if target.len() < 2 {
        return None;
    }
    src.iter().enumerate().find_map(|(i, &a)| {
        src[i + 1..].iter().find_map(|&b| {
            locate_crossing(a, b, target).map(|edge| Crossing {
                a: a.id,
                b: b.id,
                edge,
                direction: dir,
                stage: Stage::Exhaustive,
            })
        })
    })
}
