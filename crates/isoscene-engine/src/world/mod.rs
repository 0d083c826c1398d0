//! Read-only view of the entity/physics collaborator.
//!
//! The scene never owns entities. It snapshots what it needs (id, bounds,
//! sprite extent, visibility) whenever the host registers or moves one.

mod bounds;
mod entity;

pub use bounds::{BoundingCuboid, Dimensions};
pub use entity::{Block, EntityId, SceneEntity, SpriteSize};
