//! Render integration.
//!
//! The scene does not rasterise anything. A render pass walks the levels
//! bottom-up, each level back-to-front, and records sprite draw commands into
//! a [`DrawList`] that the host's sprite renderer consumes.
//!
//! Convention:
//! - commands carry viewport coordinates (camera offset already applied)
//! - level index doubles as the [`ZIndex`] so the stream sorts stably

mod camera;
mod cmd;
mod key;
mod list;
mod overlay;
mod pass;
mod pick;
mod z_index;

pub use camera::{Camera, ViewportCamera};
pub use cmd::{DrawCmd, OutlineCmd, SpriteCmd};
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use z_index::ZIndex;
