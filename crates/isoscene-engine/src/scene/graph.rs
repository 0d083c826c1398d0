use crate::projection::Projection;
use crate::world::{EntityId, SceneEntity};

use super::{draw_order, NodeTable, RenderOrder, SceneError, SceneLevel, SceneNode};

/// Scene construction options.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneConfig {
    pub projection: Projection,
    /// Skip sprites the camera reports as off screen when rendering.
    pub cull_offscreen: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            projection: Projection::TwoByOneIsometric,
            cull_offscreen: true,
        }
    }
}

impl SceneConfig {
    pub fn projection(mut self, projection: Projection) -> Self {
        self.projection = projection;
        self
    }

    pub fn cull_offscreen(mut self, cull: bool) -> Self {
        self.cull_offscreen = cull;
        self
    }
}

/// Owns every scene node and the Z-banded levels that order them.
///
/// Lifecycle:
/// - entities registered before the first render are only recorded; the
///   first render places them all at once (sorted by base height) and builds
///   each level's graph in one pass
/// - afterwards inserts and moves update the affected level immediately, so
///   the next render always sees a consistent order
#[derive(Debug)]
pub struct SceneGraph {
    config: SceneConfig,
    nodes: NodeTable,
    levels: Vec<SceneLevel>,
    /// Registration order, used for batch placement.
    registered: Vec<EntityId>,
    initialised: bool,
}

impl SceneGraph {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            nodes: NodeTable::new(),
            levels: Vec::new(),
            registered: Vec::new(),
            initialised: false,
        }
    }

    #[inline]
    pub fn with_projection(projection: Projection) -> Self {
        Self::new(SceneConfig::default().projection(projection))
    }

    #[inline] pub fn config(&self) -> &SceneConfig { &self.config }
    #[inline] pub fn projection(&self) -> Projection { self.config.projection }
    #[inline] pub fn levels(&self) -> &[SceneLevel] { &self.levels }
    #[inline] pub fn nodes(&self) -> &NodeTable { &self.nodes }
    #[inline] pub fn node(&self, id: EntityId) -> Option<&SceneNode> { self.nodes.get(id) }
    #[inline] pub fn len(&self) -> usize { self.nodes.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.nodes.is_empty() }
    /// `true` once the first render has placed nodes into levels.
    #[inline] pub fn is_initialised(&self) -> bool { self.initialised }

    /// The level currently holding `id`.
    pub fn level_of(&self, id: EntityId) -> Option<&SceneLevel> {
        self.nodes.get(id)?.level().and_then(|l| self.levels.get(l))
    }

    /// Oracle verdict for two registered entities.
    pub fn draw_order(&self, a: EntityId, b: EntityId) -> Option<RenderOrder> {
        Some(draw_order(self.nodes.get(a)?, self.nodes.get(b)?))
    }

    /// Registers an entity with the scene.
    ///
    /// Re-registering a known id is treated as a move.
    pub fn insert_entity<E: SceneEntity + ?Sized>(&mut self, entity: &E) {
        let id = entity.id();
        if self.nodes.contains(id) {
            log::warn!("entity {id} inserted twice; treating as an update");
            self.update_entity(entity);
            return;
        }

        self.nodes.insert(SceneNode::new(entity, self.config.projection));
        self.registered.push(id);

        if self.initialised {
            self.place(id, true);
        }
    }

    /// Re-reads a moved entity and repairs its level's ordering.
    ///
    /// # Panics
    /// Panics if `entity` was never passed to [`insert_entity`](Self::insert_entity).
    pub fn update_entity<E: SceneEntity + ?Sized>(&mut self, entity: &E) {
        let id = entity.id();
        let projection = self.config.projection;
        let Some(node) = self.nodes.get_mut(id) else {
            panic!("update_entity: entity {id} was never inserted into the scene");
        };
        node.refresh(entity, projection);

        if !self.initialised {
            return;
        }

        let bounds = *node.bounds();
        match node.level() {
            Some(l) if self.levels[l].in_range(&bounds) => self.levels[l].update(id, &mut self.nodes),
            Some(l) => {
                log::debug!("entity {id} left level {l} (min z {})", bounds.min().z);
                self.levels[l].remove(id, &mut self.nodes);
                self.place(id, true);
            }
            None => self.place(id, true),
        }
    }

    /// Forgets an entity for good. Returns `false` if it was not registered.
    pub fn remove_entity(&mut self, id: EntityId) -> bool {
        let Some(node) = self.nodes.get(id) else {
            return false;
        };
        if let Some(l) = node.level() {
            self.levels[l].remove(id, &mut self.nodes);
        }
        self.nodes.remove(id);
        self.registered.retain(|&r| r != id);
        true
    }

    /// Places every registered node into levels and builds each level's graph.
    ///
    /// Nodes are placed in ascending base height; equal heights keep
    /// registration order.
    pub(crate) fn initialise(&mut self) {
        let mut pending = self.registered.clone();
        pending.sort_by(|&a, &b| self.nodes[a].min_z().total_cmp(&self.nodes[b].min_z()));

        for id in pending {
            self.place(id, false);
        }
        for level in &mut self.levels {
            level.build_graph(&mut self.nodes);
        }

        self.initialised = true;
        log::info!(
            "scene initialised: {} nodes in {} levels",
            self.nodes.len(),
            self.levels.len()
        );
    }

    /// Discards all levels and places every node again from scratch.
    pub fn rebuild(&mut self) {
        for id in self.registered.iter().copied() {
            self.nodes.detach(id);
            if let Some(node) = self.nodes.get_mut(id) {
                node.level = None;
            }
        }
        self.levels.clear();
        self.initialise();
    }

    /// Finds the first level whose band holds `id`, or opens a new one.
    ///
    /// With `connect` unset the node is only enrolled and the caller is
    /// expected to run [`SceneLevel::build_graph`] afterwards.
    fn place(&mut self, id: EntityId, connect: bool) {
        let bounds = *self.nodes[id].bounds();
        if let Some(level) = self.levels.iter_mut().find(|l| l.in_range(&bounds)) {
            if connect {
                level.add(id, &mut self.nodes);
            } else {
                level.enroll(id, &mut self.nodes);
            }
            return;
        }

        let index = self.levels.len();
        log::debug!(
            "opening level {index} at z [{}, {}) for entity {id}",
            bounds.min().z,
            bounds.max().z
        );
        self.levels.push(SceneLevel::new(index, id, &mut self.nodes));
    }

    /// All placed nodes back-to-front: levels bottom-up, each level's paint order.
    pub fn paint_order(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.levels.iter().flat_map(SceneLevel::paint_order)
    }

    /// Checks every structural invariant of the levels and their graphs.
    pub fn verify(&self) -> Result<(), SceneError> {
        if self.initialised {
            for &id in &self.registered {
                let node = &self.nodes[id];
                let Some(l) = node.level() else {
                    return Err(SceneError::Unplaced(id));
                };
                let level = self.levels.get(l).ok_or(SceneError::Membership { id, level: l })?;
                if !level.contains(id) {
                    return Err(SceneError::Membership { id, level: l });
                }
                if !level.in_range(node.bounds()) {
                    return Err(SceneError::OutOfBand { id, level: l, min_z: node.min_z() });
                }
            }
        }

        for level in &self.levels {
            for &id in level.members() {
                let node = &self.nodes[id];
                if node.level() != Some(level.index()) {
                    return Err(SceneError::Membership { id, level: level.index() });
                }
                for &succ in node.succs() {
                    if self.nodes[succ].level() != node.level() {
                        return Err(SceneError::CrossLevel { from: id, to: succ });
                    }
                    if !self.nodes[succ].preds().contains(&id) {
                        return Err(SceneError::OneSided { from: id, to: succ });
                    }
                }
                for &pred in node.preds() {
                    if !self.nodes[pred].succs().contains(&id) {
                        return Err(SceneError::OneSided { from: pred, to: id });
                    }
                }
            }

            let mut ordered = level.order().to_vec();
            let mut members = level.members().to_vec();
            ordered.sort_unstable();
            members.sort_unstable();
            if ordered != members {
                return Err(SceneError::OrderMembers {
                    level: level.index(),
                    members: members.len(),
                    ordered: level.order().len(),
                });
            }

            let painted: Vec<EntityId> = level.paint_order().collect();
            let rank = |id: EntityId| painted.iter().position(|&p| p == id);
            for (from, to) in level.edges(&self.nodes) {
                if rank(from) > rank(to) {
                    return Err(SceneError::OrderViolation { level: level.index(), from, to });
                }
            }
        }

        Ok(())
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new(SceneConfig::default())
    }
}
