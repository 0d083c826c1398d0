use crate::coords::Point2;
use crate::scene::SceneGraph;
use crate::world::{EntityId, SpriteSize};

use super::{Camera, DrawCmd, DrawList, SpriteCmd, ZIndex};

impl DrawList {
    /// Records one sprite blit.
    #[inline]
    pub fn push_sprite(&mut self, z: ZIndex, entity: EntityId, at: Point2, size: SpriteSize) {
        self.push(z, DrawCmd::Sprite(SpriteCmd { entity, at, size }));
    }
}

impl SceneGraph {
    /// Records this frame's sprites into `list` and returns how many were drawn.
    ///
    /// The first call places every registered entity; `force_rebuild`
    /// discards all levels and places everything again. Levels are walked in
    /// creation order, each back-to-front. Hidden or sprite-less nodes are
    /// skipped, as are off-screen ones when culling is enabled.
    ///
    /// `list` is appended to; clearing it between frames is up to the caller.
    pub fn render<C: Camera + ?Sized>(&mut self, camera: &C, force_rebuild: bool, list: &mut DrawList) -> usize {
        if force_rebuild {
            self.rebuild();
        } else if !self.is_initialised() {
            self.initialise();
        }

        let cull = self.config().cull_offscreen;
        let nodes = self.nodes();
        let mut drawn = 0;

        for level in self.levels() {
            let z = ZIndex::for_level(level.index());
            for id in level.paint_order() {
                let node = &nodes[id];
                let Some(size) = node.sprite().filter(|_| node.is_drawable()) else {
                    continue;
                };
                if cull && !camera.is_on_screen(node.draw_coord(), size) {
                    continue;
                }
                list.push_sprite(z, id, camera.to_viewport(node.draw_coord()), size);
                drawn += 1;
            }
        }

        log::trace!("render: {drawn} of {} sprites drawn", nodes.len());
        drawn
    }
}
