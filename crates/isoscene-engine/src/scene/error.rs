use std::fmt;

use crate::world::EntityId;

/// A broken structural invariant found by [`SceneGraph::verify`](super::SceneGraph::verify).
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// A registered node is not a member of any level.
    Unplaced(EntityId),
    /// A node's recorded level does not list it as a member.
    Membership { id: EntityId, level: usize },
    /// A member's base lies outside its level's band.
    OutOfBand { id: EntityId, level: usize, min_z: f64 },
    /// An edge connects nodes in different levels.
    CrossLevel { from: EntityId, to: EntityId },
    /// An edge is recorded on only one of its ends.
    OneSided { from: EntityId, to: EntityId },
    /// A level's order is not a permutation of its members.
    OrderMembers { level: usize, members: usize, ordered: usize },
    /// A level's order paints `to` before `from` despite the edge `from -> to`.
    OrderViolation { level: usize, from: EntityId, to: EntityId },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Unplaced(id) => write!(f, "scene node {id} is not in any level"),
            SceneError::Membership { id, level } => {
                write!(f, "scene node {id} claims level {level}, which does not list it")
            }
            SceneError::OutOfBand { id, level, min_z } => {
                write!(f, "scene node {id} (min z {min_z}) lies outside level {level}")
            }
            SceneError::CrossLevel { from, to } => write!(f, "edge {from} -> {to} crosses levels"),
            SceneError::OneSided { from, to } => write!(f, "edge {from} -> {to} is only recorded on one end"),
            SceneError::OrderMembers { level, members, ordered } => write!(
                f,
                "level {level} orders {ordered} nodes but has {members} members"
            ),
            SceneError::OrderViolation { level, from, to } => {
                write!(f, "level {level} paints {to} before {from}, violating {from} -> {to}")
            }
        }
    }
}

impl std::error::Error for SceneError {}
