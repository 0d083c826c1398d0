use super::Point2;

/// Turn direction of an ordered point triple.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Orientation {
    Colinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// Orientation of `r` relative to the directed line `p -> q`.
    #[inline]
    pub fn of(p: Point2, q: Point2, r: Point2) -> Self {
        let v = (q.y - p.y) as i64 * (r.x - q.x) as i64 - (q.x - p.x) as i64 * (r.y - q.y) as i64;
        match v {
            0 => Orientation::Colinear,
            v if v > 0 => Orientation::Clockwise,
            _ => Orientation::CounterClockwise,
        }
    }
}

/// Screen-space line segment between two pixel positions.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Segment2 {
    pub p0: Point2,
    pub p1: Point2,
}

impl Segment2 {
    #[inline]
    pub const fn new(p0: Point2, p1: Point2) -> Self {
        Self { p0, p1 }
    }

    /// Translates both endpoints by `offset`.
    #[inline]
    pub fn offset(self, offset: Point2) -> Self {
        Self::new(self.p0 + offset, self.p1 + offset)
    }

    /// Returns `true` when `p` lies inside the segment's bounding box (inclusive).
    #[inline]
    pub fn bounds_contain(self, p: Point2) -> bool {
        p.x <= self.p0.x.max(self.p1.x)
            && p.x >= self.p0.x.min(self.p1.x)
            && p.y <= self.p0.y.max(self.p1.y)
            && p.y >= self.p0.y.min(self.p1.y)
    }

    /// Returns `true` when `p` lies on the infinite line through this segment.
    #[inline]
    pub fn on_line(self, p: Point2) -> bool {
        let dxc = (p.x - self.p0.x) as i64;
        let dyc = (p.y - self.p0.y) as i64;
        let dxl = (self.p1.x - self.p0.x) as i64;
        let dyl = (self.p1.y - self.p0.y) as i64;
        dxc * dyl - dyc * dxl == 0
    }

    /// Proper crossing test.
    ///
    /// A segment whose endpoint sits on this segment's line never counts, so
    /// outlines sharing a corner or an edge line do not cross. Parallel and
    /// degenerate pairs therefore resolve to "no crossing".
    pub fn crosses(self, other: Segment2) -> bool {
        if self.on_line(other.p0) || self.on_line(other.p1) {
            return false;
        }

        let o1 = Orientation::of(self.p0, self.p1, other.p0);
        let o2 = Orientation::of(self.p0, self.p1, other.p1);
        let o3 = Orientation::of(other.p0, other.p1, self.p0);
        let o4 = Orientation::of(other.p0, other.p1, self.p1);

        if o1 != o2 && o3 != o4 {
            return true;
        }

        (o3 == Orientation::Colinear && other.bounds_contain(self.p0))
            || (o4 == Orientation::Colinear && other.bounds_contain(self.p1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x0: i32, y0: i32, x1: i32, y1: i32) -> Segment2 {
        Segment2::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    // ── orientation ───────────────────────────────────────────────────────

    #[test]
    fn orientation_of_triples() {
        let p = Point2::new(0, 0);
        let q = Point2::new(4, 0);
        assert_eq!(Orientation::of(p, q, Point2::new(8, 0)), Orientation::Colinear);
        // +Y is down, so a point below the line turns clockwise on screen.
        assert_eq!(Orientation::of(p, q, Point2::new(2, 3)), Orientation::CounterClockwise);
        assert_eq!(Orientation::of(p, q, Point2::new(2, -3)), Orientation::Clockwise);
    }

    // ── crosses ───────────────────────────────────────────────────────────

    #[test]
    fn crossing_diagonals() {
        assert!(seg(0, 0, 10, 10).crosses(seg(0, 10, 10, 0)));
        assert!(seg(0, 10, 10, 0).crosses(seg(0, 0, 10, 10)));
    }

    #[test]
    fn disjoint_segments_do_not_cross() {
        assert!(!seg(0, 0, 10, 0).crosses(seg(0, 5, 10, 5)));
        assert!(!seg(0, 0, 4, 4).crosses(seg(6, 0, 10, -4)));
    }

    #[test]
    fn shared_endpoint_is_not_a_crossing() {
        assert!(!seg(0, 0, 10, 0).crosses(seg(10, 0, 10, 10)));
        assert!(!seg(10, 0, 10, 10).crosses(seg(0, 0, 10, 0)));
    }

    #[test]
    fn t_junction_is_not_a_crossing() {
        // `other` ends on this segment's line.
        assert!(!seg(0, 0, 10, 0).crosses(seg(5, 0, 5, 10)));
    }

    #[test]
    fn colinear_overlap_is_not_a_crossing() {
        assert!(!seg(0, 0, 10, 0).crosses(seg(5, 0, 15, 0)));
    }

    #[test]
    fn offset_moves_both_ends() {
        let s = seg(1, 2, 3, 4).offset(Point2::new(10, -2));
        assert_eq!(s, seg(11, 0, 13, 2));
    }
}
