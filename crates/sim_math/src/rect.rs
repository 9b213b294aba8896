//! Axis-aligned rectangle used as the broad-phase bounding volume.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle defined by its top-left corner and size.
///
/// This is the only volume the broad phase works with — every collision
/// shape is reduced to its world-space bounding `Rect` before testing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner in world space.
    pub position: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl Rect {
    /// Create a rect from its top-left corner and size.
    #[must_use]
    pub const fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// The bottom-right corner (`position + size`).
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    /// Returns `true` if the two rects overlap **strictly** on both axes.
    ///
    /// Edge-touching rects do not overlap. This keeps adjacent tiles and
    /// bodies resting exactly on a surface from reporting a collision every
    /// frame.
    #[must_use]
    pub fn intersects(&self, other: &Rect) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.position.x < b_max.x
            && other.position.x < a_max.x
            && self.position.y < b_max.y
            && other.position.y < a_max.y
    }
}
