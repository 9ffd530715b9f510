//! Exact 2D geometry on integer points.
//!
//! Purpose
//! - Orientation and segment predicates without tolerances.
//! - Monotone-chain convex hulls (CCW, strictly convex).
//! - O(log n) point-in-hull and segment-vs-hull queries.
//!
//! Conventions
//! - Boundary contact is always inclusive (touching counts as intersecting/inside).
//! - Coordinates are bounded by `COORD_LIMIT` so every product fits in `i64`.

mod contains;
mod hull;
mod locate;
mod predicates;
mod types;

pub use contains::point_in_hull;
pub use hull::convex_hull;
pub use locate::{locate_crossing, locate_crossing_linear, EdgeIds};
pub use predicates::{cross, on_segment, segments_intersect, sign};
pub use types::{points_from_coords, Hull, Point, COORD_LIMIT};
