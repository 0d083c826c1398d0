use crate::coords::{Point2, Point3, Rect};
use crate::scene::SceneGraph;
use crate::world::EntityId;

use super::Camera;

impl SceneGraph {
    /// Topmost drawable entity under a viewport pixel.
    ///
    /// Levels are searched top-down and each level front-to-back. A sprite
    /// whose rectangle contains the pixel is offered to `hit` together with
    /// the pixel's offset inside the sprite; returning `false` (for example on
    /// a transparent texel) lets the search continue behind it.
    pub fn entity_at<C, F>(&self, at: Point2, camera: &C, mut hit: F) -> Option<EntityId>
    where
        C: Camera + ?Sized,
        F: FnMut(EntityId, Point2) -> bool,
    {
        let p = camera.to_screen(at);
        let nodes = self.nodes();

        self.levels()
            .iter()
            .rev()
            .flat_map(|level| level.order().iter().copied())
            .find(|&id| {
                let node = &nodes[id];
                let Some(size) = node.sprite().filter(|_| node.is_drawable()) else {
                    return false;
                };
                let corner = node.draw_coord();
                let rect = Rect::from_origin_size(
                    corner,
                    i32::try_from(size.width).unwrap_or(i32::MAX),
                    i32::try_from(size.height).unwrap_or(i32::MAX),
                );
                rect.contains(p) && hit(id, p - corner)
            })
    }

    /// World position (min corner) of the entity under a viewport pixel.
    pub fn location_at<C, F>(&self, at: Point2, camera: &C, hit: F) -> Option<Point3>
    where
        C: Camera + ?Sized,
        F: FnMut(EntityId, Point2) -> bool,
    {
        let id = self.entity_at(at, camera, hit)?;
        Some(self.node(id)?.bounds().min())
    }
}
