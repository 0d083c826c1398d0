//! Coordinate and geometry types shared by the projection, scene and render layers.
//!
//! World space (`Point3`, `Vec3`):
//! - +X and +Y span the ground plane, +Z is up
//! - units are physical (sprite pixels mapped back through a projection)
//!
//! Screen space (`Point2`, `Rect`, `Segment2`):
//! - whole pixels, origin top-left
//! - +X right, +Y down

mod point2;
mod point3;
mod rect;
mod segment;

pub use point2::Point2;
pub use point3::{Point3, Vec3};
pub use rect::Rect;
pub use segment::{Orientation, Segment2};
