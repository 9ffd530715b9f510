//! Boundary conflicts between two point clouds.
//!
//! Given point sets P and R, find a segment between two points of one set that
//! crosses an edge of the other set's convex hull, and report the four ids.
//!
//! Layout
//! - `geom`: exact integer predicates, convex hulls, point-in-hull, and the
//!   O(log n) segment-vs-hull locator.
//! - `search`: angular pair sampling, containment fallback, exhaustive baseline.
//! - `gen`: reproducible random point clouds for tests and benches.

pub mod gen;
pub mod geom;
pub mod search;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::gen::{draw_case, draw_cases, CloudCfg, PointCount, ScenarioCfg};
    pub use crate::geom::{
        convex_hull, cross, locate_crossing, point_in_hull, points_from_coords,
        segments_intersect, EdgeIds, Hull, Point, COORD_LIMIT,
    };
    pub use crate::search::{
        format_outcome, solve_all, solve_case, solve_exhaustive, solve_with_defaults, Case,
        Crossing, Direction, ReplayToken, SearchCfg, Stage,
    };
}
