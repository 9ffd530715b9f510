use super::predicates::cross;
use super::types::{Hull, Point};

/// Andrew’s monotone chain convex hull (returns hull in CCW order).
///
/// Sorts a copy by `(x, y)`; pops while the turn is not strictly left, so
/// collinear boundary points and duplicate positions are dropped. Inputs of
/// size <= 2 are returned unchanged.
pub fn convex_hull(points: &[Point]) -> Hull {
    if points.len() <= 2 {
        return Hull {
            pts: points.to_vec(),
        };
    }
    let mut pts: Vec<Point> = points.to_vec();
    pts.sort_by(|a, b| a.x().cmp(&b.x()).then(a.y().cmp(&b.y())));

    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    // only an all-equal input leaves a repeated position behind
    hull.dedup_by(|a, b| a.same_pos(b));
    Hull { pts: hull }
}

impl Hull {
    /// Shorthand for `convex_hull(points)`.
    #[inline]
    pub fn from_points(points: &[Point]) -> Hull {
        convex_hull(points)
    }
}
