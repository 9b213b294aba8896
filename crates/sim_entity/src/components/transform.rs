//! 2D transform component.
//!
//! [`Transform2D`] is the primary spatial component — position in world
//! space, per-axis scale, and a rotation scalar. The physics engine writes
//! `position` through [`translate`](Transform2D::translate); scale and
//! rotation are mutated by arbitrary external logic.

use serde::{Deserialize, Serialize};
use sim_math::Vec2;

use crate::component::{Capability, ComponentKind, ComponentSet};

/// Position, scale, and rotation in 2D.
///
/// Fields are public; there is nothing to protect here. One obligation to
/// know about: components that derive an alignment offset from this scale
/// ([`Collider`](crate::Collider), [`Sprite`](crate::Sprite)) must have their
/// `refresh_offset` called after `scale` changes — the transform has no way
/// to see its siblings and cannot do it for you.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// World-space position.
    pub position: Vec2,
    /// Per-axis scale factor.
    pub scale: Vec2,
    /// Rotation in radians.
    pub rotation: f32,
}

impl Transform2D {
    /// The identity transform: origin, unit scale, no rotation.
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        scale: Vec2::ONE,
        rotation: 0.0,
    };

    /// Create a transform with the given position, scale, and rotation.
    #[must_use]
    pub const fn new(position: Vec2, scale: Vec2, rotation: f32) -> Self {
        Self {
            position,
            scale,
            rotation,
        }
    }

    /// Create a transform at the given position with default scale/rotation.
    #[must_use]
    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Move the position by the given offset.
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Capability for Transform2D {
    const KIND: ComponentKind = ComponentKind::Transform;

    fn slot(set: &ComponentSet) -> &Option<Self> {
        &set.transform
    }

    fn slot_mut(set: &mut ComponentSet) -> &mut Option<Self> {
        &mut set.transform
    }
}
