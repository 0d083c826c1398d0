//! True isometric: the three visible axes meet at 120°.
//!
//! A unit tile has equal sides, a short diagonal of 1 and a long diagonal of
//! √3. Tiles overlap each other by half.

use crate::coords::{Point2, Point3};
use crate::world::Dimensions;

use super::whole;

const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;
const ONE_OVER_SQRT_3: f64 = 0.577_350_269_189_625_8;

pub(super) fn project(p: Point3) -> Point2 {
    Point2::round(HALF_SQRT_3 * (p.x + p.y), 0.5 * (p.y - p.x) - p.z)
}

/// Square-topped tiles: the long diagonal spans the sprite width and the
/// remaining sprite height above the top diamond is the solid's height.
pub(super) fn dimensions(sprite_width: f64, sprite_height: f64) -> Dimensions {
    let side = sprite_width * ONE_OVER_SQRT_3;
    Dimensions::new(whole(side), whole(side), whole(sprite_height - side))
}
