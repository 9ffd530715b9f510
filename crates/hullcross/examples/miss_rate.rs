//! Measure how often the sampled search misses a crossing the exhaustive
//! baseline finds, across cloud shapes and separations.
//!
//! Usage:
//!   cargo run -p hullcross --example miss_rate -- [cases-per-row]
//!
//! Prints one row per (shape, gap): found / baseline / missed.

use hullcross::gen::{draw_cases, CloudCfg, PointCount, ScenarioCfg};
use hullcross::search::{solve_all, solve_exhaustive, SearchCfg};

fn main() {
    let per_row = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(200);
    println!("{:>6} {:>6} {:>6} {:>8} {:>6}", "shape", "gap", "found", "baseline", "missed");
    for (shape, inner) in [("disk", 0.0), ("ring", 0.95)] {
        for gap in [0i64, 600, 1_200, 1_800, 2_400] {
            let cloud = |cx: i64| CloudCfg {
                count: PointCount::Uniform { min: 3, max: 60 },
                center: (cx, 0),
                radius: 1_000,
                inner_frac: inner,
            };
            let scenario = ScenarioCfg {
                p: cloud(0),
                r: cloud(gap),
            };
            let cases = draw_cases(&scenario, 2025, per_row);
            let fast = solve_all(&cases, &SearchCfg::default());
            let found = fast.iter().filter(|r| r.is_some()).count();
            let baseline = cases
                .iter()
                .filter(|c| solve_exhaustive(c).is_some())
                .count();
            println!(
                "{:>6} {:>6} {:>6} {:>8} {:>6}",
                shape,
                gap,
                found,
                baseline,
                baseline - found
            );
        }
    }
}
