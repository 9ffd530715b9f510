//! Segment vs. convex hull: find one hull edge crossed by a segment.
//!
//! Model
//! - Project hull vertices onto the normal of `AB`: `dot(v) = -dy·v.x + dx·v.y`.
//!   On a convex cycle this is unimodal, and `cross(A, B, v) = dot(v) - dot(A)`,
//!   so the orientation w.r.t. line `AB` is monotone along each chain between
//!   the maximizer and the minimizer.
//! - Extremes: coarse stride sample, then hill-climb (capped at `n` steps).
//! - Each chain: binary search for the sign flip, then confirm the edge against
//!   the closed segment with `segments_intersect`.
//!
//! Only one crossed edge is reported, never all of them.

use super::predicates::{cross, segments_intersect, sign};
use super::types::{Hull, Point};

/// Hull edge reported by endpoint ids, in hull (CCW) order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeIds {
    pub e1: usize,
    pub e2: usize,
}

impl EdgeIds {
    #[inline]
    fn of(u: Point, v: Point) -> Self {
        Self { e1: u.id, e2: v.id }
    }
}

/// Coarse sampling stride is `max(1, n / SAMPLE_DIV)`.
const SAMPLE_DIV: usize = 20;

/// Locator for one segment against one hull.
struct Locator<'a> {
    a: Point,
    b: Point,
    poly: &'a [Point],
}

impl<'a> Locator<'a> {
    #[inline]
    fn n(&self) -> usize {
        self.poly.len()
    }
    #[inline]
    fn next(&self, i: usize) -> usize {
        (i + 1) % self.n()
    }
    #[inline]
    fn prev(&self, i: usize) -> usize {
        (i + self.n() - 1) % self.n()
    }
    #[inline]
    fn cp(&self, i: usize) -> i64 {
        cross(self.a, self.b, self.poly[i])
    }
    #[inline]
    fn dot(&self, i: usize) -> i64 {
        let d = self.b.pos - self.a.pos;
        let v = self.poly[i].pos;
        -d.y * v.x + d.x * v.y
    }

    /// Index of a global maximizer (or minimizer) of `dot`.
    fn extreme(&self, maximize: bool) -> usize {
        let n = self.n();
        let better = |v: i64, w: i64| if maximize { v > w } else { v < w };

        let step = (n / SAMPLE_DIV).max(1);
        let mut best = 0;
        let mut best_val = self.dot(0);
        for i in (0..n).step_by(step) {
            let v = self.dot(i);
            if better(v, best_val) {
                best_val = v;
                best = i;
            }
        }

        let mut curr = best;
        for _ in 0..n {
            let (next, prev) = (self.next(curr), self.prev(curr));
            let val = self.dot(curr);
            if better(self.dot(next), val) {
                curr = next;
            } else if better(self.dot(prev), val) {
                curr = prev;
            } else {
                // unimodal: local optimum is global
                return curr;
            }
        }
        curr
    }

    #[inline]
    fn confirm(&self, i: usize, j: usize) -> Option<EdgeIds> {
        let (u, v) = (self.poly[i], self.poly[j]);
        segments_intersect(self.a, self.b, u, v).then(|| EdgeIds::of(u, v))
    }

    /// Chain `start → end` in CCW order.
    fn check_chain(&self, start: usize, end: usize) -> Option<EdgeIds> {
        let n = self.n();
        let s0 = sign(self.cp(start));
        if s0 == 0 {
            // start vertex is on the line: only its two incident edges qualify
            return self
                .confirm(start, self.next(start))
                .or_else(|| self.confirm(self.prev(start), start));
        }
        if s0 == sign(self.cp(end)) {
            return None;
        }
        let len = (end + n - start) % n;
        let (mut lo, mut hi) = (0, len);
        while lo + 1 < hi {
            let mid = (lo + hi) / 2;
            if sign(self.cp((start + mid) % n)) == s0 {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        self.confirm((start + lo) % n, (start + lo + 1) % n)
    }

    fn locate(&self) -> Option<EdgeIds> {
        let max_idx = self.extreme(true);
        let min_idx = self.extreme(false);
        let (cp_max, cp_min) = (self.cp(max_idx), self.cp(min_idx));
        // line through AB misses the hull
        if (cp_max > 0 && cp_min > 0) || (cp_max < 0 && cp_min < 0) {
            return None;
        }
        self.check_chain(max_idx, min_idx)
            .or_else(|| self.check_chain(min_idx, max_idx))
    }
}

/// One hull edge that the closed segment `ab` intersects, if any.
///
/// Hulls with fewer than two vertices have no edges and never intersect.
/// O(log n) plus a short hill-climb.
///
/// A zero-length segment (both endpoints at one position, e.g. duplicate input
/// points) has no direction to project on. It is answered by
/// [`locate_crossing_linear`] over every edge, so a point lying anywhere on the
/// boundary reports the edge it lies on, not only the edges at vertex 0.
pub fn locate_crossing(a: Point, b: Point, hull: &Hull) -> Option<EdgeIds> {
    let poly = hull.vertices();
    match poly.len() {
        0 | 1 => None,
        2 => segments_intersect(a, b, poly[0], poly[1]).then(|| EdgeIds::of(poly[0], poly[1])),
        _ if a.same_pos(&b) => locate_crossing_linear(a, b, hull),
        _ => Locator { a, b, poly }.locate(),
    }
}

/// Reference O(n) scan over all hull edges; first hit in hull order.
pub fn locate_crossing_linear(a: Point, b: Point, hull: &Hull) -> Option<EdgeIds> {
    hull.edges()
        .find(|&(u, v)| segments_intersect(a, b, u, v))
        .map(|(u, v)| EdgeIds::of(u, v))
}
