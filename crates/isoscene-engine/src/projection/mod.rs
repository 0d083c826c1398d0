//! World → screen mappings.
//!
//! Both variants are pure and stateless. The scene selects one at
//! construction and routes every projection through [`Projection`], so
//! outlines, draw coordinates and the camera always agree.
//!
//! Screen space is whole pixels, +Y down. Increasing world X moves up-right,
//! increasing world Y moves down-right and increasing Z moves straight up.

mod true_iso;
mod two_by_one;

use crate::coords::{Point2, Point3};
use crate::world::Dimensions;

/// Closed set of supported isometric projections.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Projection {
    /// Tiles whose short diagonal equals their side (120° corners).
    TrueIsometric,
    /// Pixel-art friendly tiles twice as wide as they are tall.
    #[default]
    TwoByOneIsometric,
}

impl Projection {
    /// Maps a world location onto the pixel grid.
    #[inline]
    pub fn project(self, p: Point3) -> Point2 {
        match self {
            Projection::TrueIsometric => true_iso::project(p),
            Projection::TwoByOneIsometric => two_by_one::project(p),
        }
    }

    /// Inverse mapping: the physical extents of a tile whose sprite is
    /// `sprite_width × sprite_height` pixels.
    #[inline]
    pub fn physical_dimensions(self, sprite_width: u32, sprite_height: u32) -> Dimensions {
        let (w, h) = (sprite_width as f64, sprite_height as f64);
        match self {
            Projection::TrueIsometric => true_iso::dimensions(w, h),
            Projection::TwoByOneIsometric => two_by_one::dimensions(w, h),
        }
    }

    /// Parses `"true"` / `"2:1"` style names, as used by host configuration.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "true" | "true-isometric" | "trueisometric" => Some(Projection::TrueIsometric),
            "2:1" | "2x1" | "two-by-one" | "twobyoneisometric" => Some(Projection::TwoByOneIsometric),
            _ => None,
        }
    }
}

/// Half-up rounding to whole physical units.
#[inline]
fn whole(v: f64) -> f64 {
    (v + 0.5).floor()
}
