//! 2:1 isometric: a tile's screen width is twice its height.
//!
//! The ground diagonals make `atan(1/2)` with the horizontal, so one world
//! unit along X or Y covers `1 / cos(atan(1/2))` screen units along that
//! diagonal.

use crate::coords::{Point2, Point3};
use crate::world::Dimensions;

use super::whole;

/// `cos(atan(1/2)) = 2 / √5`.
const MAGIC_RATIO: f64 = 0.894_427_190_999_915_9;
/// `sin(atan(1/2)) = 1 / √5`.
const SIN_SLOPE: f64 = 0.447_213_595_499_957_9;
const ONE_OVER_MAGIC_RATIO: f64 = 1.0 / MAGIC_RATIO;

pub(super) fn project(p: Point3) -> Point2 {
    Point2::round(
        (p.x + p.y) * 2.0 * ONE_OVER_MAGIC_RATIO,
        (p.y - p.x - p.z) * ONE_OVER_MAGIC_RATIO,
    )
}

pub(super) fn dimensions(sprite_width: f64, sprite_height: f64) -> Dimensions {
    let one_unit = sprite_width * 0.25;
    let two_units = sprite_width * 0.5;
    Dimensions::new(
        whole(one_unit * MAGIC_RATIO),
        whole(two_units * SIN_SLOPE),
        whole((sprite_height - two_units) * MAGIC_RATIO),
    )
}
