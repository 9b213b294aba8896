//! # sim_math
//!
//! Geometry types for the 2D simulation core. Re-exports [`glam`] for linear
//! algebra and defines the spatial leaves used by collision detection:
//! axis-aligned rectangles, collision shapes, and alignment anchors.

pub mod alignment;
pub mod rect;
pub mod shape;

// Re-export glam types for convenience.
pub use glam::Vec2;

pub use alignment::Alignment;
pub use rect::Rect;
pub use shape::Shape;
