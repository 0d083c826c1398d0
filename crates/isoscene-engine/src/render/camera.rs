use crate::coords::{Point2, Point3, Rect};
use crate::projection::Projection;
use crate::world::SpriteSize;

/// Maps projected screen coordinates onto the host's viewport.
pub trait Camera {
    /// Returns `true` when a sprite whose top-left corner is at `coord`
    /// (projected screen space) would be at least partly visible.
    fn is_on_screen(&self, coord: Point2, size: SpriteSize) -> bool;

    /// Converts a projected screen coordinate to viewport pixels.
    fn to_viewport(&self, p: Point2) -> Point2;

    /// Converts viewport pixels back to projected screen space.
    fn to_screen(&self, p: Point2) -> Point2;
}

/// Fixed-size viewport window over projected screen space.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct ViewportCamera {
    /// Screen-space position of the viewport's top-left pixel.
    pub origin: Point2,
    pub width: u32,
    pub height: u32,
}

impl ViewportCamera {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            origin: Point2::zero(),
            width,
            height,
        }
    }

    /// Moves the viewport so `p` sits at its centre.
    pub fn centre_on(&mut self, p: Point2) {
        self.origin = Point2::new(p.x - half(self.width), p.y - half(self.height));
    }

    /// Centres the viewport on a world position.
    pub fn look_at(&mut self, p: Point3, projection: Projection) {
        self.centre_on(projection.project(p));
    }

    /// The visible region in projected screen space.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.origin, extent(self.width), extent(self.height))
    }
}

impl Camera for ViewportCamera {
    fn is_on_screen(&self, coord: Point2, size: SpriteSize) -> bool {
        let sprite = Rect::from_origin_size(coord, extent(size.width), extent(size.height));
        sprite.overlaps(self.bounds())
    }

    #[inline]
    fn to_viewport(&self, p: Point2) -> Point2 {
        p - self.origin
    }

    #[inline]
    fn to_screen(&self, p: Point2) -> Point2 {
        p + self.origin
    }
}

#[inline]
fn extent(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[inline]
fn half(v: u32) -> i32 {
    extent(v / 2)
}
