//! Collision shapes.
//!
//! The shape set is closed: the broad phase only ever asks a shape for its
//! local bounding size, so adding a variant means deciding its bounding box
//! and nothing else. There is deliberately no narrow-phase resolver here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A local-space collision shape owned by a collider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned box with the given width and height.
    Aabb {
        /// Width and height of the box.
        size: Vec2,
    },
    /// Circle with the given radius.
    Circle {
        /// Circle radius.
        radius: f32,
    },
}

impl Shape {
    /// Convenience constructor for an axis-aligned box.
    #[must_use]
    pub const fn aabb(size: Vec2) -> Self {
        Self::Aabb { size }
    }

    /// Convenience constructor for a circle.
    #[must_use]
    pub const fn circle(radius: f32) -> Self {
        Self::Circle { radius }
    }

    /// Size of the local-space bounding rectangle of this shape.
    #[must_use]
    pub fn bounding_size(&self) -> Vec2 {
        match *self {
            Self::Aabb { size } => size,
            Self::Circle { radius } => Vec2::splat(radius * 2.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_bounding_size_is_its_size() {
        let s = Shape::aabb(Vec2::new(8.0, 12.0));
        assert_eq!(s.bounding_size(), Vec2::new(8.0, 12.0));
    }

    #[test]
    fn test_circle_bounding_size_is_diameter() {
        let s = Shape::circle(5.0);
        assert_eq!(s.bounding_size(), Vec2::new(10.0, 10.0));
    }
}
