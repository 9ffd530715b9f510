//! Pair search: find one segment of one point set crossing the other set's hull.
//!
//! Purpose
//! - Avoid testing all O(n·m) segment/hull pairs. Source points are ordered by
//!   angle around the target hull's centroid; each point is paired only with its
//!   next neighbours, an antipodal band, and a few random offsets.
//! - Run P → hull(R), then R → hull(P), then a containment fallback.
//!
//! Limits
//! - The sampling is a heuristic: a crossing that needs one specific unsampled
//!   pair can be missed. `solve_exhaustive` is the complete (quadratic) baseline.
//! - Every reported crossing is confirmed by an exact segment test, so results
//!   are always valid even when the search is incomplete.
//!
//! Code cross-refs: `geom::{locate_crossing, Hull::contains}`.

mod exhaustive;
mod heuristic;
mod types;

pub use exhaustive::solve_exhaustive;
pub use heuristic::{solve_all, solve_case, solve_with_defaults};
pub use types::{format_outcome, Case, Crossing, Direction, ReplayToken, SearchCfg, Stage};

#[cfg(test)]
mod tests;
