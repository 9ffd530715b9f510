use super::predicates::{cross, on_segment};
use super::types::{Hull, Point};

impl Hull {
    /// Membership test, boundary inclusive. O(log n).
    ///
    /// Degenerate hulls: empty contains nothing, a single vertex contains its own
    /// position, a segment contains its closed extent.
    pub fn contains(&self, p: Point) -> bool {
        let poly = &self.pts;
        let n = poly.len();
        match n {
            0 => return false,
            1 => return p.same_pos(&poly[0]),
            2 => return on_segment(poly[0], poly[1], p),
            _ => {}
        }
        // outside the wedge spanned at poly[0]
        if cross(poly[0], poly[1], p) < 0 || cross(poly[0], poly[n - 1], p) > 0 {
            return false;
        }
        // fan triangle (poly[0], poly[l], poly[r]) with r = l + 1
        let mut l = 1;
        let mut r = n - 1;
        while l + 1 < r {
            let mid = (l + r) / 2;
            if cross(poly[0], poly[mid], p) >= 0 {
                l = mid;
            } else {
                r = mid;
            }
        }
        cross(poly[l], poly[r], p) >= 0
    }
}

/// Free-function form of [`Hull::contains`].
#[inline]
pub fn point_in_hull(hull: &Hull, p: Point) -> bool {
    hull.contains(p)
}
