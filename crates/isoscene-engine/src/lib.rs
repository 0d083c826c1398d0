//! Isoscene engine crate.
//!
//! Keeps a scene of box-shaped entities in a correct back-to-front paint
//! order for isometric sprite rendering, and repairs that order
//! incrementally as entities move.
//!
//! Layers, bottom-up:
//! - `coords`, `world`: screen/world geometry and the entity contract
//! - `projection`: world → screen mapping
//! - `scene`: outlines, the pairwise draw-order oracle, Z-banded levels
//! - `render`: draw stream, camera, render pass, picking

pub mod logging;
pub mod coords;
pub mod world;
pub mod projection;
pub mod scene;
pub mod render;
pub mod paint;
