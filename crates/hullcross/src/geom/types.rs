//! Basic 2D types for exact integer geometry.
//!
//! - `Point`: integer coordinates plus the 1-based id from its input set.
//! - `Hull`: counter-clockwise, strictly convex vertex cycle built from a point set.
//!
//! Coordinate bound
//! - All predicates multiply coordinate differences in `i64`. Inputs must satisfy
//!   `|x|, |y| <= COORD_LIMIT`; then `cross` and the locator's projection stay
//!   below `8e18 < i64::MAX`. Debug builds assert the bound in `Point::new`.

use nalgebra::Vector2;

/// Largest admissible absolute coordinate value.
pub const COORD_LIMIT: i64 = 1_000_000_000;

/// Input point: integer position and its 1-based id in the originating set.
///
/// Identity for reporting is `id`; two points may share coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub pos: Vector2<i64>,
    pub id: usize,
}

impl Point {
    #[inline]
    pub fn new(x: i64, y: i64, id: usize) -> Self {
        debug_assert!(
            (-COORD_LIMIT..=COORD_LIMIT).contains(&x) && (-COORD_LIMIT..=COORD_LIMIT).contains(&y),
            "coordinate ({x}, {y}) exceeds COORD_LIMIT"
        );
        Self {
            pos: Vector2::new(x, y),
            id,
        }
    }
    #[inline]
    pub fn x(&self) -> i64 {
        self.pos.x
    }
    #[inline]
    pub fn y(&self) -> i64 {
        self.pos.y
    }
    /// Same position, ignoring ids.
    #[inline]
    pub fn same_pos(&self, other: &Point) -> bool {
        self.pos == other.pos
    }
}

/// Assign ids `1..=n` by input order.
pub fn points_from_coords(coords: &[(i64, i64)]) -> Vec<Point> {
    coords
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Point::new(x, y, i + 1))
        .collect()
}

/// Convex hull of a point set.
///
/// Invariants:
/// - Counter-clockwise order, no repeated closing vertex.
/// - Strictly convex turns (no redundant collinear vertices) once `len() >= 3`.
/// - `len() <= 2` is degenerate: the input set itself (empty, a point, or a segment).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hull {
    pub(crate) pts: Vec<Point>,
}

impl Hull {
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.pts
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }
    /// Vertex at cyclic index `i`; `None` for an empty hull.
    #[inline]
    pub fn at(&self, i: usize) -> Option<Point> {
        i.checked_rem(self.pts.len()).map(|k| self.pts[k])
    }
    /// Edges `(v_i, v_{i+1})` in cyclic order. A 2-vertex hull has one edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.pts.len();
        let count = match n {
            0 | 1 => 0,
            2 => 1,
            _ => n,
        };
        (0..count).map(move |i| (self.pts[i], self.pts[(i + 1) % n]))
    }
    /// Edge with the given endpoint ids, in either orientation.
    pub fn has_edge(&self, e1: usize, e2: usize) -> bool {
        self.edges()
            .any(|(u, v)| (u.id == e1 && v.id == e2) || (u.id == e2 && v.id == e1))
    }
    /// Mean of the vertex coordinates; `None` for an empty hull.
    pub fn centroid(&self) -> Option<Vector2<f64>> {
        if self.pts.is_empty() {
            return None;
        }
        let sum = self
            .pts
            .iter()
            .fold(Vector2::new(0.0, 0.0), |acc, p| {
                acc + Vector2::new(p.x() as f64, p.y() as f64)
            });
        Some(sum / self.pts.len() as f64)
    }
}
