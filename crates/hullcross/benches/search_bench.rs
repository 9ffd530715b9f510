//! Criterion benchmarks for the full pair search.
//! Cloud sizes n in {50, 500, 5000}: disjoint clouds (full heuristic sweep, no hit)
//! and overlapping clouds (early exit).

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hullcross::gen::{draw_case, CloudCfg, PointCount, ScenarioCfg};
use hullcross::search::{solve_case, ReplayToken, SearchCfg};

fn scenario(n: usize, gap: i64) -> ScenarioCfg {
    let cloud = |cx: i64| CloudCfg {
        count: PointCount::Fixed(n),
        center: (cx, 0),
        radius: 10_000,
        inner_frac: 0.5,
    };
    ScenarioCfg {
        p: cloud(0),
        r: cloud(gap),
    }
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(20);
    for &n in &[50usize, 500, 5000] {
        for (label, gap) in [("disjoint", 50_000i64), ("overlap", 5_000)] {
            let cfg = scenario(n, gap);
            group.bench_with_input(BenchmarkId::new(label, n), &n, |b, _| {
                b.iter_batched(
                    || draw_case(&cfg, ReplayToken { seed: 3, index: 0 }),
                    |case| {
                        let _res = solve_case(&case, &SearchCfg::default(), 0);
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
