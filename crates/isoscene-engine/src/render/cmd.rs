use crate::coords::{Point2, Segment2};
use crate::paint::Color;
use crate::world::{EntityId, SpriteSize};

/// Draw a registered entity's sprite with its top-left corner at `at`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SpriteCmd {
    pub entity: EntityId,
    /// Viewport position of the sprite's top-left corner.
    pub at: Point2,
    pub size: SpriteSize,
}

/// Stroke an entity's projected silhouette (debug overlay).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct OutlineCmd {
    pub entity: EntityId,
    /// Viewport-space edges: roof, sides, base.
    pub segments: [Segment2; 6],
    pub color: Color,
}

/// Renderer-agnostic draw command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Sprite(SpriteCmd),
    Outline(OutlineCmd),
}
