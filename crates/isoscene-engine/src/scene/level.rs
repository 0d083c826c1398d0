use std::collections::HashMap;

use crate::world::{BoundingCuboid, EntityId};

use super::{draw_order, NodeTable, RenderOrder};

/// A Z band of nodes painted together, with its draws-before graph.
///
/// The band `[min_z, max_z)` is fixed by the node that created the level.
/// A node belongs here while its `min.z` falls inside the band.
///
/// `order` is a depth-first postorder over the graph: every node appears
/// after all of its successors, so reading it from the end gives the
/// back-to-front paint order.
#[derive(Debug, Clone)]
pub struct SceneLevel {
    index: usize,
    min_z: f64,
    max_z: f64,
    members: Vec<EntityId>,
    roots: Vec<EntityId>,
    order: Vec<EntityId>,
}

#[derive(Copy, Clone, Eq, PartialEq)]
enum Mark {
    Open,
    Done,
}

impl SceneLevel {
    /// Creates level `index` with its band taken from `seed`.
    pub(crate) fn new(index: usize, seed: EntityId, nodes: &mut NodeTable) -> Self {
        let bounds = nodes[seed].bounds();
        let min_z = bounds.min().z;
        // Flat solids still need a non-empty band to live in.
        let max_z = if bounds.max().z > min_z { bounds.max().z } else { min_z + 1.0 };

        let mut level = Self {
            index,
            min_z,
            max_z,
            members: Vec::new(),
            roots: Vec::new(),
            order: Vec::new(),
        };
        level.enroll(seed, nodes);
        level.refresh(nodes);
        level
    }

    #[inline] pub fn index(&self) -> usize { self.index }
    #[inline] pub fn min_z(&self) -> f64 { self.min_z }
    #[inline] pub fn max_z(&self) -> f64 { self.max_z }
    #[inline] pub fn members(&self) -> &[EntityId] { &self.members }
    /// Members with no predecessors, in membership order.
    #[inline] pub fn roots(&self) -> &[EntityId] { &self.roots }
    /// Postorder; see the type docs.
    #[inline] pub fn order(&self) -> &[EntityId] { &self.order }
    #[inline] pub fn len(&self) -> usize { self.members.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.members.is_empty() }

    #[inline]
    pub fn contains(&self, id: EntityId) -> bool {
        self.members.contains(&id)
    }

    /// Half-open band test on the solid's base: `min_z <= min.z < max_z`.
    #[inline]
    pub fn in_range(&self, bounds: &BoundingCuboid) -> bool {
        let z = bounds.min().z;
        z >= self.min_z && z < self.max_z
    }

    /// Members back-to-front.
    pub fn paint_order(&self) -> impl DoubleEndedIterator<Item = EntityId> + ExactSizeIterator + '_ {
        self.order.iter().rev().copied()
    }

    /// Every edge `(from, to)` among members, sorted.
    pub fn edges(&self, nodes: &NodeTable) -> Vec<(EntityId, EntityId)> {
        let mut edges: Vec<_> = self
            .members
            .iter()
            .flat_map(|&from| nodes[from].succs().iter().map(move |&to| (from, to)))
            .collect();
        edges.sort_unstable();
        edges
    }

    /// Records membership only; edges are left for [`build_graph`](Self::build_graph).
    pub(crate) fn enroll(&mut self, id: EntityId, nodes: &mut NodeTable) {
        debug_assert!(!self.contains(id), "{id} enrolled twice in level {}", self.index);
        if let Some(node) = nodes.get_mut(id) {
            node.level = Some(self.index);
        }
        self.members.push(id);
    }

    /// Adds `id` and connects it to every existing member.
    pub(crate) fn add(&mut self, id: EntityId, nodes: &mut NodeTable) {
        self.enroll(id, nodes);
        self.connect(id, nodes);
        self.refresh(nodes);
    }

    /// `id` moved but stayed in band.
    ///
    /// Existing edges are re-checked first and dropped when the relation
    /// reversed or vanished; then every other member is tested for new edges.
    pub(crate) fn update(&mut self, id: EntityId, nodes: &mut NodeTable) {
        debug_assert!(self.contains(id), "{id} is not in level {}", self.index);

        let preds = nodes[id].preds().to_vec();
        for pred in preds {
            if draw_order(&nodes[pred], &nodes[id]) != RenderOrder::Before {
                log::trace!("level {}: dropping stale edge {pred} -> {id}", self.index);
                nodes.unlink(pred, id);
            }
        }

        let succs = nodes[id].succs().to_vec();
        for succ in succs {
            if draw_order(&nodes[id], &nodes[succ]) != RenderOrder::Before {
                log::trace!("level {}: dropping stale edge {id} -> {succ}", self.index);
                nodes.unlink(id, succ);
            }
        }

        self.connect(id, nodes);
        self.refresh(nodes);
    }

    /// Detaches `id` from this level, pruning its edges on both ends.
    pub(crate) fn remove(&mut self, id: EntityId, nodes: &mut NodeTable) {
        let Some(pos) = self.members.iter().position(|&m| m == id) else {
            log::warn!("level {}: remove of non-member {id}", self.index);
            return;
        };
        self.members.remove(pos);
        nodes.detach(id);
        if let Some(node) = nodes.get_mut(id) {
            node.level = None;
        }
        self.refresh(nodes);
    }

    /// Full pairwise rebuild of the graph, used after batch enrolment.
    ///
    /// Produces the same edge set as adding the members one at a time.
    pub(crate) fn build_graph(&mut self, nodes: &mut NodeTable) {
        for &id in &self.members {
            nodes.detach(id);
        }

        for (i, &a) in self.members.iter().enumerate() {
            for &b in &self.members[i + 1..] {
                match draw_order(&nodes[a], &nodes[b]) {
                    RenderOrder::Before => nodes.link(a, b),
                    RenderOrder::After => nodes.link(b, a),
                    RenderOrder::Any => {}
                }
            }
        }

        log::debug!(
            "level {} [{}, {}): built graph over {} nodes",
            self.index,
            self.min_z,
            self.max_z,
            self.members.len()
        );
        self.refresh(nodes);
    }

    fn connect(&self, id: EntityId, nodes: &mut NodeTable) {
        for &other in &self.members {
            if other == id {
                continue;
            }
            let order = draw_order(&nodes[id], &nodes[other]);
            log::trace!("level {}: {id} vs {other}: {order:?}", self.index);
            match order {
                RenderOrder::Before => nodes.link(id, other),
                RenderOrder::After => nodes.link(other, id),
                RenderOrder::Any => {}
            }
        }
    }

    /// Recomputes roots and the topological order.
    pub(crate) fn refresh(&mut self, nodes: &NodeTable) {
        self.roots.clear();
        self.roots
            .extend(self.members.iter().copied().filter(|&id| nodes[id].is_root()));

        self.order.clear();
        let mut marks: HashMap<EntityId, Mark> = HashMap::with_capacity(self.members.len());
        let mut stack: Vec<(EntityId, usize)> = Vec::new();

        // Roots first; any member left undiscovered afterwards sits on a cycle.
        let starts = self.roots.iter().chain(self.members.iter());
        for &start in starts {
            if marks.contains_key(&start) {
                continue;
            }
            marks.insert(start, Mark::Open);
            stack.push((start, 0));

            while let Some((id, next)) = stack.last_mut() {
                let id = *id;
                if let Some(&succ) = nodes[id].succs().get(*next) {
                    *next += 1;
                    debug_assert_eq!(nodes[succ].level, Some(self.index), "edge {id} -> {succ} leaves level");
                    match marks.get(&succ) {
                        None => {
                            marks.insert(succ, Mark::Open);
                            stack.push((succ, 0));
                        }
                        Some(Mark::Open) => {
                            log::error!("level {}: ordering cycle through {id} -> {succ}", self.index);
                            debug_assert!(false, "ordering cycle through {id} -> {succ}");
                        }
                        Some(Mark::Done) => {}
                    }
                } else {
                    marks.insert(id, Mark::Done);
                    self.order.push(id);
                    stack.pop();
                }
            }
        }
    }
}
