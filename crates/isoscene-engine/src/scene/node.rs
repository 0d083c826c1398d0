use core::ops::Index;

use crate::coords::Point2;
use crate::projection::Projection;
use crate::world::{BoundingCuboid, EntityId, SceneEntity, SpriteSize};

use super::Outline;

/// Per-entity scene state: a snapshot of the entity plus its place in the
/// occlusion graph.
///
/// Invariants:
/// - a placed node belongs to exactly one level (`level`)
/// - `preds` / `succs` only name nodes in that same level and mirror each
///   other across the table
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    id: EntityId,
    bounds: BoundingCuboid,
    sprite: Option<SpriteSize>,
    visible: bool,
    outline: Outline,

    pub(crate) preds: Vec<EntityId>,
    pub(crate) succs: Vec<EntityId>,
    pub(crate) level: Option<usize>,
}

impl SceneNode {
    pub(crate) fn new<E: SceneEntity + ?Sized>(entity: &E, projection: Projection) -> Self {
        let bounds = entity.bounds();
        Self {
            id: entity.id(),
            bounds,
            sprite: entity.sprite(),
            visible: entity.is_visible(),
            outline: Outline::project(&bounds, projection),
            preds: Vec::new(),
            succs: Vec::new(),
            level: None,
        }
    }

    /// Re-reads the entity and recomputes the projected outline.
    pub(crate) fn refresh<E: SceneEntity + ?Sized>(&mut self, entity: &E, projection: Projection) {
        debug_assert_eq!(self.id, entity.id());
        self.bounds = entity.bounds();
        self.sprite = entity.sprite();
        self.visible = entity.is_visible();
        self.outline = Outline::project(&self.bounds, projection);
    }

    #[inline] pub fn id(&self) -> EntityId { self.id }
    #[inline] pub fn bounds(&self) -> &BoundingCuboid { &self.bounds }
    #[inline] pub fn outline(&self) -> &Outline { &self.outline }
    #[inline] pub fn sprite(&self) -> Option<SpriteSize> { self.sprite }
    #[inline] pub fn draw_coord(&self) -> Point2 { self.outline.draw_coord }
    #[inline] pub fn min_z(&self) -> f64 { self.bounds.min().z }
    #[inline] pub fn max_z(&self) -> f64 { self.bounds.max().z }

    /// Nodes that must be painted before this one.
    #[inline] pub fn preds(&self) -> &[EntityId] { &self.preds }
    /// Nodes that must be painted after this one.
    #[inline] pub fn succs(&self) -> &[EntityId] { &self.succs }
    /// Index of the owning level, once placed.
    #[inline] pub fn level(&self) -> Option<usize> { self.level }
    #[inline] pub fn is_root(&self) -> bool { self.preds.is_empty() }

    /// Visible and has a sprite.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        self.visible && self.sprite.is_some()
    }

    #[inline]
    pub fn intersects_top(&self, other: &SceneNode) -> bool {
        self.outline.intersects_top(&other.outline)
    }
}

/// Dense node storage indexed by [`EntityId`].
///
/// Also owns edge maintenance so both ends of an edge are always updated
/// together.
#[derive(Debug, Default)]
pub struct NodeTable {
    slots: Vec<Option<SceneNode>>,
    len: usize,
}

impl NodeTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&SceneNode> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: EntityId) -> Option<&mut SceneNode> {
        self.slots.get_mut(id.index()).and_then(Option::as_mut)
    }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates nodes in id order.
    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.slots.iter().flatten()
    }

    /// Stores `node` in its id slot, returning any node it displaced.
    pub(crate) fn insert(&mut self, node: SceneNode) -> Option<SceneNode> {
        let index = node.id.index();
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        let previous = self.slots[index].replace(node);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub(crate) fn remove(&mut self, id: EntityId) -> Option<SceneNode> {
        let node = self.slots.get_mut(id.index())?.take()?;
        self.len -= 1;
        Some(node)
    }

    /// Adds the draws-before edge `from -> to`. Duplicate edges are ignored.
    pub(crate) fn link(&mut self, from: EntityId, to: EntityId) {
        debug_assert_ne!(from, to, "self edge on {from}");
        if let Some(node) = self.get_mut(from) {
            if !node.succs.contains(&to) {
                node.succs.push(to);
            }
        }
        if let Some(node) = self.get_mut(to) {
            if !node.preds.contains(&from) {
                node.preds.push(from);
            }
        }
    }

    /// Drops the edge `from -> to` if present.
    pub(crate) fn unlink(&mut self, from: EntityId, to: EntityId) {
        if let Some(node) = self.get_mut(from) {
            node.succs.retain(|&s| s != to);
        }
        if let Some(node) = self.get_mut(to) {
            node.preds.retain(|&p| p != from);
        }
    }

    /// Drops every edge touching `id`, on both ends.
    pub(crate) fn detach(&mut self, id: EntityId) {
        let Some(node) = self.get_mut(id) else {
            return;
        };
        let preds = std::mem::take(&mut node.preds);
        let succs = std::mem::take(&mut node.succs);

        for p in preds {
            if let Some(pred) = self.get_mut(p) {
                pred.succs.retain(|&s| s != id);
            }
        }
        for s in succs {
            if let Some(succ) = self.get_mut(s) {
                succ.preds.retain(|&p| p != id);
            }
        }
    }
}

impl Index<EntityId> for NodeTable {
    type Output = SceneNode;

    /// # Panics
    /// Panics if `id` was never inserted.
    fn index(&self, id: EntityId) -> &SceneNode {
        match self.get(id) {
            Some(node) => node,
            None => panic!("no scene node registered for entity {id}"),
        }
    }
}
