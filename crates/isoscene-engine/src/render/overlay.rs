use crate::coords::Point2;
use crate::paint::Color;
use crate::scene::SceneGraph;
use crate::world::EntityId;

use super::{Camera, DrawCmd, DrawList, OutlineCmd, ZIndex};

impl DrawList {
    /// Records a silhouette stroke on the overlay layer.
    #[inline]
    pub fn push_outline(&mut self, cmd: OutlineCmd) {
        self.push(ZIndex::OVERLAY, DrawCmd::Outline(cmd));
    }
}

impl SceneGraph {
    /// Records the projected outline of `id` for debugging.
    ///
    /// Returns `false` if `id` is not registered.
    pub fn push_outline<C: Camera + ?Sized>(
        &self,
        id: EntityId,
        camera: &C,
        color: Color,
        list: &mut DrawList,
    ) -> bool {
        let Some(node) = self.node(id) else {
            return false;
        };

        let shift = camera.to_viewport(Point2::zero());
        let o = node.outline();
        let segments = [o.top[0], o.top[1], o.side[0], o.side[1], o.base[0], o.base[1]].map(|s| s.offset(shift));

        list.push_outline(OutlineCmd {
            entity: id,
            segments,
            color,
        });
        true
    }
}
