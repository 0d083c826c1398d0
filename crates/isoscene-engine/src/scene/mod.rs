//! Occlusion ordering.
//!
//! Responsibilities:
//! - snapshot each registered entity as a [`SceneNode`] with its projected outline
//! - decide pairwise draw order between overlapping solids ([`draw_order`])
//! - bucket nodes into Z bands ([`SceneLevel`]) and keep a draws-before graph
//!   plus its topological paint order per band
//! - route inserts/moves to the right band ([`SceneGraph`])
//!
//! Nodes live in a dense table indexed by entity id; edges are id lists on the
//! nodes themselves, so nothing here holds references into anything else.

mod error;
mod graph;
mod level;
mod node;
mod order;
mod outline;

#[cfg(test)]
mod tests;

pub use error::SceneError;
pub use graph::{SceneConfig, SceneGraph};
pub use level::SceneLevel;
pub use node::{NodeTable, SceneNode};
pub use order::{draw_order, RenderOrder};
pub use outline::Outline;
