use crate::coords::{Point2, Point3, Segment2};
use crate::projection::Projection;
use crate::world::BoundingCuboid;

/// Projected hexagonal silhouette of a cuboid.
///
/// With `min = (x0, y0, z0)` and `max = (x1, y1, z1)` the six visible corners
/// are walked as:
///
/// ```text
///            top2 (x1,y0,z1)
///          /                \
///   top1 (x0,y0,z1)        max (x1,y1,z1)
///     |                        |
///   min (x0,y0,z0)         base2 (x1,y1,z0)
///          \                /
///            base1 (x0,y1,z0)
/// ```
///
/// - `top`: the two back edges of the roof
/// - `side`: the left and right vertical edges
/// - `base`: the two front edges of the floor
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Outline {
    pub top: [Segment2; 2],
    pub side: [Segment2; 2],
    pub base: [Segment2; 2],
    /// Top-left corner of the sprite that covers this outline.
    pub draw_coord: Point2,
}

impl Outline {
    pub fn project(bounds: &BoundingCuboid, projection: Projection) -> Self {
        let lo = bounds.min();
        let hi = bounds.max();
        let p = |x: f64, y: f64, z: f64| projection.project(Point3::new(x, y, z));

        let min = p(lo.x, lo.y, lo.z);
        let base1 = p(lo.x, hi.y, lo.z);
        let base2 = p(hi.x, hi.y, lo.z);
        let max = p(hi.x, hi.y, hi.z);
        let top1 = p(lo.x, lo.y, hi.z);
        let top2 = p(hi.x, lo.y, hi.z);

        Self {
            top: [Segment2::new(top1, top2), Segment2::new(top2, max)],
            side: [Segment2::new(min, top1), Segment2::new(base2, max)],
            base: [Segment2::new(min, base1), Segment2::new(base1, base2)],
            // Leftmost screen x is the min corner, topmost screen y is top2.
            draw_coord: Point2::new(min.x, top2.y),
        }
    }

    /// All six silhouette edges: top, side, then base.
    pub fn segments(&self) -> impl Iterator<Item = Segment2> + '_ {
        self.top.iter().chain(&self.side).chain(&self.base).copied()
    }

    /// Returns `true` when any of this outline's side or base edges crosses one
    /// of `other`'s roof edges.
    ///
    /// This is only the roof test, not a general separating-axis check; it is
    /// sufficient for the box shapes the scene models.
    pub fn intersects_top(&self, other: &Outline) -> bool {
        other.top.iter().any(|roof| {
            self.base
                .iter()
                .chain(&self.side)
                .any(|edge| edge.crosses(*roof))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Dimensions;

    const CUBE: Dimensions = Dimensions::new(72.0, 72.0, 97.0);

    fn outline_at(x: f64, y: f64, z: f64) -> Outline {
        let b = BoundingCuboid::from_min(Point3::new(x, y, z), CUBE);
        Outline::project(&b, Projection::TwoByOneIsometric)
    }

    fn seg(x0: i32, y0: i32, x1: i32, y1: i32) -> Segment2 {
        Segment2::new(Point2::new(x0, y0), Point2::new(x1, y1))
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn cube_at_origin() {
        let o = outline_at(0.0, 0.0, 0.0);
        assert_eq!(o.top, [seg(0, -108, 161, -189), seg(161, -189, 322, -108)]);
        assert_eq!(o.side, [seg(0, 0, 0, -108), seg(322, 0, 322, -108)]);
        assert_eq!(o.base, [seg(0, 0, 161, 80), seg(161, 80, 322, 0)]);
        assert_eq!(o.draw_coord, Point2::new(0, -189));
    }

    #[test]
    fn segments_walks_all_six() {
        let o = outline_at(0.0, 0.0, 0.0);
        let all: Vec<_> = o.segments().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0], o.top[0]);
        assert_eq!(all[5], o.base[1]);
    }

    // ── intersects_top ────────────────────────────────────────────────────

    #[test]
    fn row_neighbours_do_not_cross() {
        let a = outline_at(0.0, 0.0, 0.0);
        let b = outline_at(72.0, 0.0, 0.0);
        assert!(!a.intersects_top(&b));
        assert!(!b.intersects_top(&a));
    }

    #[test]
    fn raised_row_neighbour_crosses_the_lower_roof() {
        let a = outline_at(0.0, 0.0, 0.0);
        let b = outline_at(72.0, 1.0, 1.0);
        assert!(!a.intersects_top(&b));
        assert!(b.intersects_top(&a));
    }

    #[test]
    fn column_neighbours_do_not_cross() {
        let outlines: Vec<_> = (0..3).map(|i| outline_at(0.0, 72.0 * i as f64, 0.0)).collect();
        for (i, a) in outlines.iter().enumerate() {
            for (j, b) in outlines.iter().enumerate() {
                if i != j {
                    assert!(!a.intersects_top(b), "{i} vs {j}");
                }
            }
        }
    }

    #[test]
    fn unaligned_column_does_not_cross() {
        let outlines: Vec<_> = (0..3)
            .map(|i| outline_at(i as f64, 72.0 * i as f64, i as f64))
            .collect();
        assert!(!outlines[0].intersects_top(&outlines[1]));
        assert!(!outlines[1].intersects_top(&outlines[2]));
        assert!(!outlines[2].intersects_top(&outlines[1]));
        assert!(!outlines[1].intersects_top(&outlines[0]));
        assert!(!outlines[0].intersects_top(&outlines[2]));
    }

    #[test]
    fn diagonal_neighbours_do_not_cross() {
        let outlines: Vec<_> = (0..3)
            .map(|i| outline_at(72.0 * i as f64, 72.0 * i as f64, 0.0))
            .collect();
        assert!(!outlines[0].intersects_top(&outlines[1]));
        assert!(!outlines[1].intersects_top(&outlines[0]));
        assert!(!outlines[1].intersects_top(&outlines[2]));
        assert!(!outlines[0].intersects_top(&outlines[2]));
        assert!(!outlines[2].intersects_top(&outlines[0]));
    }
}
