use core::ops::{Add, Neg, Sub};

/// 2D point in screen pixels.
///
/// Projections round onto the pixel grid, so outline tests run on exact
/// integer arithmetic.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Point2 {
    pub x: i32,
    pub y: i32,
}

impl Point2 {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Rounds a real-valued screen position half-up onto the pixel grid.
    #[inline]
    pub fn round(x: f64, y: f64) -> Self {
        Self::new((x + 0.5).floor() as i32, (y + 0.5).floor() as i32)
    }
}

impl Add for Point2 {
    type Output = Point2;
    #[inline]
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;
    #[inline]
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point2 {
    type Output = Point2;
    #[inline]
    fn neg(self) -> Point2 {
        Point2::new(-self.x, -self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_is_half_up() {
        assert_eq!(Point2::round(0.5, -0.5), Point2::new(1, 0));
        assert_eq!(Point2::round(160.997, -80.498), Point2::new(161, -80));
        assert_eq!(Point2::round(-1.6, 2.4), Point2::new(-2, 2));
    }

    #[test]
    fn arithmetic() {
        let a = Point2::new(3, -4);
        let b = Point2::new(1, 1);
        assert_eq!(a + b, Point2::new(4, -3));
        assert_eq!(a - b, Point2::new(2, -5));
        assert_eq!(-a, Point2::new(-3, 4));
    }
}
