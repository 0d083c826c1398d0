//! Colors for debug overlays.

pub mod color;

pub use color::Color;
