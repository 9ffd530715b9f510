//! Scenario tests for the pair search, plus soundness against the exhaustive baseline.

use super::heuristic::Solver;
use super::*;
use crate::gen::{draw_cases, CloudCfg, PointCount, ScenarioCfg};
use proptest::prelude::*;

fn overlapping_squares() -> Case {
    Case::from_coords(
        &[(0, 0), (4, 0), (4, 4), (0, 4)],
        &[(2, 2), (6, 2), (6, 6), (2, 6)],
    )
}

#[test]
fn overlapping_squares_cross() {
    let case = overlapping_squares();
    let c = solve_with_defaults(&case).expect("squares overlap");
    assert!(c.verify(&case));
    assert_eq!(c.direction, Direction::PToR);
    assert_eq!(c.stage, Stage::Heuristic);
    // angular order around (4,4) starts at (0,0); its diagonal reaches HR's corner
    assert_eq!((c.a, c.b), (1, 3));
    assert_eq!(format_outcome(Some(&c)).split(' ').count(), 4);
}

#[test]
fn far_apart_triangles_report_nothing() {
    let case = Case::from_coords(&[(0, 0), (1, 0), (0, 1)], &[(10, 10), (11, 10), (10, 11)]);
    assert_eq!(solve_with_defaults(&case), None);
    assert_eq!(solve_exhaustive(&case), None);
    assert_eq!(format_outcome(solve_with_defaults(&case).as_ref()), "-1");
}

#[test]
fn enclosing_hull_is_stabbed() {
    // R is a small triangle strictly inside P's square
    let case = Case::from_coords(
        &[(0, 0), (100, 0), (100, 100), (0, 100)],
        &[(50, 50), (52, 50), (50, 52)],
    );
    let c = solve_with_defaults(&case).expect("diagonal of P crosses R");
    assert!(c.verify(&case));
    assert_eq!(c.direction, Direction::PToR);
    assert_eq!((c.a, c.b), (1, 3));
}

#[test]
fn enclosed_set_is_reported_from_the_outer_set() {
    // P is tiny and inside R: no P segment reaches hull(R), so R's diagonals must
    let case = Case::from_coords(
        &[(50, 50), (52, 50), (50, 52)],
        &[(0, 0), (100, 0), (100, 100), (0, 100)],
    );
    let c = solve_with_defaults(&case).expect("diagonal of R crosses P");
    assert!(c.verify(&case));
    assert_eq!(c.direction, Direction::RToP);
    // segment ids come from R, edge ids from hull(P)
    let (p_ids, r_ids) = c.by_set();
    assert_eq!(r_ids, [c.a, c.b]);
    assert_eq!(p_ids, [c.edge.e1, c.edge.e2]);
}

#[test]
fn containment_fallback_joins_inner_point_to_outer_vertex() {
    let case = overlapping_squares();
    let cfg = SearchCfg::default();
    let solver = Solver::new(&case, &cfg, 0);
    let c = solver.containment().expect("P's (4,4) lies inside hull(R)");
    assert_eq!(c.stage, Stage::Containment);
    assert_eq!(c.direction, Direction::PToR);
    // first contained P point is id 3; first hull(P) vertex outside hull(R) is (0,0)
    assert_eq!((c.a, c.b), (3, 1));
    assert!(c.verify(&case));
}

#[test]
fn containment_fallback_swaps_roles() {
    // no P point inside hull(R), but R's (3,2) is inside hull(P)
    let case = Case::from_coords(
        &[(0, 0), (4, 0), (4, 4), (0, 4)],
        &[(3, 2), (9, 1), (9, 3)],
    );
    let cfg = SearchCfg::default();
    let solver = Solver::new(&case, &cfg, 0);
    let c = solver.containment().expect("segment from (3,2) leaves hull(P)");
    assert_eq!(c.direction, Direction::RToP);
    assert_eq!(c.a, 1);
    assert!(c.verify(&case));
}

#[test]
fn nested_without_exterior_vertex_has_no_fallback() {
    let case = Case::from_coords(
        &[(0, 0), (100, 0), (100, 100), (0, 100)],
        &[(50, 50), (52, 50), (50, 52)],
    );
    let cfg = SearchCfg::default();
    assert_eq!(Solver::new(&case, &cfg, 0).containment(), None);
}

#[test]
fn disabling_fallback_only_skips_containment() {
    let case = overlapping_squares();
    let cfg = SearchCfg {
        fallback: false,
        ..SearchCfg::default()
    };
    assert_eq!(solve_case(&case, &cfg, 0), solve_with_defaults(&case));
}

#[test]
fn degenerate_sets() {
    // single points and empty sets never cross anything
    let one = Case::from_coords(&[(0, 0)], &[(0, 0)]);
    assert_eq!(solve_with_defaults(&one), None);
    let empty = Case::from_coords(&[], &[(0, 0), (1, 1)]);
    assert_eq!(solve_with_defaults(&empty), None);
    // P segment crossing a 2-point R "hull"
    let seg = Case::from_coords(&[(0, 2), (2, 0)], &[(0, 0), (2, 2)]);
    let c = solve_with_defaults(&seg).expect("diagonals cross");
    assert!(c.verify(&seg));
}

#[test]
fn duplicate_positions_keep_distinct_ids() {
    let case = Case::from_coords(
        &[(0, 0), (0, 0), (10, 10), (10, 10)],
        &[(0, 10), (10, 0)],
    );
    let c = solve_with_defaults(&case).expect("P diagonal crosses R segment");
    assert!(c.verify(&case));
    assert_ne!(c.a, c.b);
}

#[test]
fn solve_all_is_reproducible() {
    let cfg = ScenarioCfg {
        p: CloudCfg {
            count: PointCount::Fixed(60),
            radius: 1_000,
            inner_frac: 0.8,
            ..CloudCfg::default()
        },
        r: CloudCfg {
            count: PointCount::Uniform { min: 3, max: 40 },
            center: (700, 300),
            radius: 400,
            ..CloudCfg::default()
        },
    };
    let cases = draw_cases(&cfg, 11, 25);
    let scfg = SearchCfg {
        seed: 5,
        ..SearchCfg::default()
    };
    let first = solve_all(&cases, &scfg);
    let second = solve_all(&cases, &scfg);
    assert_eq!(first, second);
    for (case, res) in cases.iter().zip(&first) {
        if let Some(c) = res {
            assert!(c.verify(case));
        }
    }
}

fn arb_case() -> impl Strategy<Value = Case> {
    let cloud = || prop::collection::vec((-40i64..40, -40i64..40), 1..25);
    (cloud(), cloud()).prop_map(|(p, r)| Case::from_coords(&p, &r))
}

proptest! {
    #[test]
    fn heuristic_is_sound(case in arb_case(), seed in any::<u64>()) {
        let cfg = SearchCfg { seed, ..SearchCfg::default() };
        let fast = solve_case(&case, &cfg, 0);
        let full = solve_exhaustive(&case);
        if let Some(c) = fast {
            prop_assert!(c.verify(&case), "{:?} fails verification", c);
            prop_assert!(full.is_some());
        }
        if full.is_none() {
            prop_assert!(fast.is_none());
        }
        if let Some(c) = full {
            prop_assert!(c.verify(&case));
        }
    }

    #[test]
    fn same_seed_same_result(case in arb_case(), seed in any::<u64>(), index in 0u64..100) {
        let cfg = SearchCfg { seed, ..SearchCfg::default() };
        prop_assert_eq!(solve_case(&case, &cfg, index), solve_case(&case, &cfg, index));
    }
}
