//! Engine configuration.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Global physics configuration, mutable at runtime through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravity acceleration in world units per second². Positive y is down
    /// in screen space.
    pub gravity: Vec2,
    /// Componentwise speed limit; every body's velocity is clamped into
    /// `[-max_speed, +max_speed]` per axis after integration.
    pub max_speed: Vec2,
}

impl PhysicsConfig {
    /// Create a config with the given gravity and default speed limit.
    #[must_use]
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    /// Override the componentwise speed limit.
    #[must_use]
    pub fn with_max_speed(mut self, max_speed: Vec2) -> Self {
        self.max_speed = max_speed;
        self
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 980.0),
            max_speed: Vec2::new(500.0, 500.0),
        }
    }
}
