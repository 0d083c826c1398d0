use crate::coords::{Point3, Vec3};

/// Physical extents of a solid: `width` along X, `depth` along Y, `height` along Z.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl Dimensions {
    #[inline]
    pub const fn new(width: f64, depth: f64, height: f64) -> Self {
        Self { width, depth, height }
    }

    #[inline]
    fn as_vec(self) -> Vec3 {
        Vec3::new(self.width, self.depth, self.height)
    }
}

/// Axis-aligned bounds of an entity.
///
/// Invariants:
/// - `max == min + dims`
/// - `centre` is the midpoint of `min` and `max`
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoundingCuboid {
    min: Point3,
    max: Point3,
    centre: Point3,
    dims: Dimensions,
}

impl BoundingCuboid {
    /// Builds bounds from the minimum (back-left-bottom) corner.
    pub fn from_min(min: Point3, dims: Dimensions) -> Self {
        debug_assert!(
            dims.width >= 0.0 && dims.depth >= 0.0 && dims.height >= 0.0,
            "BoundingCuboid: negative dimensions {dims:?}"
        );
        Self {
            min,
            max: min + dims.as_vec(),
            centre: min + dims.as_vec() * 0.5,
            dims,
        }
    }

    /// Builds bounds around a centre point.
    pub fn from_centre(centre: Point3, dims: Dimensions) -> Self {
        Self::from_min(centre + dims.as_vec() * -0.5, dims)
    }

    #[inline] pub fn min(&self) -> Point3 { self.min }
    #[inline] pub fn max(&self) -> Point3 { self.max }
    #[inline] pub fn centre(&self) -> Point3 { self.centre }
    #[inline] pub fn dimensions(&self) -> Dimensions { self.dims }
    #[inline] pub fn width(&self) -> f64 { self.dims.width }
    #[inline] pub fn depth(&self) -> f64 { self.dims.depth }
    #[inline] pub fn height(&self) -> f64 { self.dims.height }

    /// Returns the bounds moved by `delta`, extents unchanged.
    #[inline]
    pub fn translated(&self, delta: Vec3) -> Self {
        Self::from_min(self.min + delta, self.dims)
    }

    /// Moves the bounds so the minimum corner sits at `min`.
    #[inline]
    pub fn moved_to(&self, min: Point3) -> Self {
        Self::from_min(min, self.dims)
    }

    // Open-interval overlap per axis: touching faces do not overlap.

    #[inline]
    pub fn overlaps_x(&self, other: &BoundingCuboid) -> bool {
        self.min.x < other.max.x && other.min.x < self.max.x
    }

    #[inline]
    pub fn overlaps_y(&self, other: &BoundingCuboid) -> bool {
        self.min.y < other.max.y && other.min.y < self.max.y
    }

    #[inline]
    pub fn overlaps_z(&self, other: &BoundingCuboid) -> bool {
        self.min.z < other.max.z && other.min.z < self.max.z
    }
}
