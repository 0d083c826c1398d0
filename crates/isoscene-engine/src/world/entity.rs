use core::fmt;

use crate::coords::{Point3, Vec3};

use super::{BoundingCuboid, Dimensions};

/// Stable integer identity of an entity.
///
/// Ids index the scene's node table directly, so hosts should hand them out
/// densely from zero.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct EntityId(pub u32);

impl EntityId {
    #[inline]
    pub const fn new(v: u32) -> Self {
        Self(v)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Pixel extent of an entity's sprite.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct SpriteSize {
    pub width: u32,
    pub height: u32,
}

impl SpriteSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Contract between the scene and the host's entity model.
pub trait SceneEntity {
    fn id(&self) -> EntityId;

    fn bounds(&self) -> BoundingCuboid;

    /// Sprite extent, or `None` for entities that take part in ordering but
    /// have nothing to draw.
    fn sprite(&self) -> Option<SpriteSize>;

    fn is_visible(&self) -> bool {
        true
    }
}

/// Minimal concrete entity: a solid block with one sprite.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub id: EntityId,
    pub bounds: BoundingCuboid,
    pub sprite: Option<SpriteSize>,
    pub visible: bool,
}

impl Block {
    pub fn new(id: EntityId, min: Point3, dims: Dimensions, sprite: SpriteSize) -> Self {
        Self {
            id,
            bounds: BoundingCuboid::from_min(min, dims),
            sprite: Some(sprite),
            visible: true,
        }
    }

    #[inline]
    pub fn translate(&mut self, delta: Vec3) {
        self.bounds = self.bounds.translated(delta);
    }

    #[inline]
    pub fn move_to(&mut self, min: Point3) {
        self.bounds = self.bounds.moved_to(min);
    }
}

impl SceneEntity for Block {
    fn id(&self) -> EntityId {
        self.id
    }

    fn bounds(&self) -> BoundingCuboid {
        self.bounds
    }

    fn sprite(&self) -> Option<SpriteSize> {
        self.sprite
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
