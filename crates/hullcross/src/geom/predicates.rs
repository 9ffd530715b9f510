//! Exact orientation and segment predicates on integer points.
//!
//! All functions are exact for coordinates within `COORD_LIMIT`; there are no
//! tolerances anywhere. Boundary contact always counts (closed segments).

use super::types::Point;

/// Twice the signed area of triangle `o → a → b`.
///
/// Positive for a counter-clockwise turn, negative for clockwise, zero if collinear.
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> i64 {
    let oa = a.pos - o.pos;
    let ob = b.pos - o.pos;
    oa.x * ob.y - oa.y * ob.x
}

/// Sign of `v` as -1, 0 or 1.
#[inline]
pub fn sign(v: i64) -> i64 {
    v.signum()
}

#[inline]
fn boxes_overlap(a: Point, b: Point, c: Point, d: Point) -> bool {
    a.x().max(b.x()) >= c.x().min(d.x())
        && c.x().max(d.x()) >= a.x().min(b.x())
        && a.y().max(b.y()) >= c.y().min(d.y())
        && c.y().max(d.y()) >= a.y().min(b.y())
}

/// `c` and `d` lie on opposite sides of line `ab`, or one of them lies on it.
#[inline]
fn straddles(a: Point, b: Point, c: Point, d: Point) -> bool {
    let s1 = sign(cross(a, b, c));
    let s2 = sign(cross(a, b, d));
    s1 * s2 <= 0
}

/// Closed segments `ab` and `cd` share at least one point.
///
/// Includes endpoint touching and collinear overlap. Degenerate (zero-length)
/// segments behave as points.
pub fn segments_intersect(a: Point, b: Point, c: Point, d: Point) -> bool {
    if !boxes_overlap(a, b, c, d) {
        return false;
    }
    straddles(a, b, c, d) && straddles(c, d, a, b)
}

/// `p` lies on the closed segment `ab`.
pub fn on_segment(a: Point, b: Point, p: Point) -> bool {
    cross(a, b, p) == 0
        && a.x().min(b.x()) <= p.x()
        && p.x() <= a.x().max(b.x())
        && a.y().min(b.y()) <= p.y()
        && p.y() <= a.y().max(b.y())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: i64, y: i64) -> Point {
        Point::new(x, y, 0)
    }

    #[test]
    fn cross_orientation() {
        assert!(cross(pt(0, 0), pt(1, 0), pt(0, 1)) > 0);
        assert!(cross(pt(0, 0), pt(0, 1), pt(1, 0)) < 0);
        assert_eq!(cross(pt(0, 0), pt(1, 1), pt(3, 3)), 0);
        assert_eq!(cross(pt(1, 1), pt(4, 1), pt(1, 3)), 6);
    }

    #[test]
    fn cross_at_coordinate_limit() {
        use crate::geom::COORD_LIMIT;
        let l = COORD_LIMIT;
        let v = cross(pt(-l, -l), pt(l, -l), pt(-l, l));
        assert_eq!(v, 4 * l * l);
        let w = cross(pt(-l, -l), pt(l, l), pt(l, -l));
        assert_eq!(w, -4 * l * l);
    }

    #[test]
    fn sign_values() {
        assert_eq!(sign(-7), -1);
        assert_eq!(sign(0), 0);
        assert_eq!(sign(42), 1);
    }

    #[test]
    fn proper_crossing() {
        assert!(segments_intersect(pt(0, 0), pt(2, 2), pt(0, 2), pt(2, 0)));
    }

    #[test]
    fn touching_counts() {
        // endpoint on the other segment's interior
        assert!(segments_intersect(pt(0, 0), pt(2, 0), pt(1, 0), pt(1, 5)));
        // shared endpoint
        assert!(segments_intersect(pt(0, 0), pt(2, 0), pt(2, 0), pt(3, 3)));
    }

    #[test]
    fn collinear_overlap_and_gap() {
        assert!(segments_intersect(pt(0, 0), pt(4, 0), pt(2, 0), pt(6, 0)));
        assert!(!segments_intersect(pt(0, 0), pt(2, 0), pt(3, 0), pt(6, 0)));
    }

    #[test]
    fn line_hits_but_segment_does_not() {
        // c lies on the line through ab but beyond b
        assert!(!segments_intersect(pt(0, 0), pt(4, 0), pt(5, 0), pt(1, 3)));
        assert!(!segments_intersect(pt(0, 0), pt(1, 1), pt(3, 0), pt(0, 3)));
    }

    #[test]
    fn degenerate_point_segments() {
        assert!(segments_intersect(pt(1, 1), pt(1, 1), pt(0, 0), pt(2, 2)));
        assert!(!segments_intersect(pt(1, 2), pt(1, 2), pt(0, 0), pt(2, 2)));
        assert!(segments_intersect(pt(3, 3), pt(3, 3), pt(3, 3), pt(3, 3)));
    }

    #[test]
    fn on_segment_bounds() {
        assert!(on_segment(pt(0, 0), pt(4, 2), pt(2, 1)));
        assert!(on_segment(pt(0, 0), pt(4, 2), pt(4, 2)));
        assert!(!on_segment(pt(0, 0), pt(4, 2), pt(6, 3)));
        assert!(!on_segment(pt(0, 0), pt(4, 2), pt(2, 2)));
    }
}
