use super::Point2;

/// Axis-aligned screen rectangle in pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rect {
    pub origin: Point2,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point2::new(x, y),
            width,
            height,
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Point2, width: i32, height: i32) -> Self {
        Self { origin, width, height }
    }

    #[inline]
    pub fn min(self) -> Point2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Point2 {
        Point2::new(self.origin.x + self.width, self.origin.y + self.height)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Point2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }

    /// Returns `true` when the two rectangles share a region of non-zero area.
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        let (a0, a1) = (self.min(), self.max());
        let (b0, b1) = (other.min(), other.max());
        a0.x < b1.x && b0.x < a1.x && a0.y < b1.y && b0.y < a1.y
    }
}
