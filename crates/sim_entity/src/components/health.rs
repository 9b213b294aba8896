//! Health component.
//!
//! Hit points with an invincibility window: taking damage starts a timer
//! during which further damage is rejected. The timer ticks down in the
//! per-frame update hook.

use serde::{Deserialize, Serialize};

use crate::component::{Capability, ComponentKind, ComponentSet};

/// Hit points and invincibility frames.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    max: i32,
    current: i32,
    invincible: bool,
    invincibility_duration: f32,
    invincibility_timer: f32,
}

impl Health {
    /// Create a full-health component. `max` is clamped to at least 1;
    /// `invincibility_duration` is the window opened after each successful
    /// hit (0 disables the window).
    #[must_use]
    pub fn new(max: i32, invincibility_duration: f32) -> Self {
        let max = max.max(1);
        Self {
            max,
            current: max,
            invincible: false,
            invincibility_duration: invincibility_duration.max(0.0),
            invincibility_timer: 0.0,
        }
    }

    /// Apply damage. Rejected (returns `false`) while invincible or for a
    /// non-positive amount; on success the invincibility window opens if one
    /// is configured.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.invincible || amount <= 0 {
            return false;
        }
        self.current = (self.current - amount).max(0);
        if self.invincibility_duration > 0.0 {
            self.set_invincible(self.invincibility_duration);
        }
        true
    }

    /// Restore hit points, clamped to the maximum.
    pub fn heal(&mut self, amount: i32) {
        if amount > 0 {
            self.current = (self.current + amount).min(self.max);
        }
    }

    /// Whether any hit points remain.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Whether the invincibility window is open.
    #[must_use]
    pub fn is_invincible(&self) -> bool {
        self.invincible
    }

    /// Current hit points.
    #[must_use]
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Maximum hit points.
    #[must_use]
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Set current hit points, clamped into `0..=max`.
    pub fn set_current(&mut self, current: i32) {
        self.current = current.clamp(0, self.max);
    }

    /// Set the maximum (at least 1) and re-clamp current.
    pub fn set_max(&mut self, max: i32) {
        self.max = max.max(1);
        self.current = self.current.min(self.max);
    }

    /// Open the invincibility window for `duration` seconds.
    pub fn set_invincible(&mut self, duration: f32) {
        self.invincible = true;
        self.invincibility_timer = duration.max(0.0);
    }
}

impl Capability for Health {
    const KIND: ComponentKind = ComponentKind::Health;

    fn slot(set: &ComponentSet) -> &Option<Self> {
        &set.health
    }

    fn slot_mut(set: &mut ComponentSet) -> &mut Option<Self> {
        &mut set.health
    }

    fn on_update(&mut self, dt: f32) {
        if self.invincible {
            self.invincibility_timer -= dt;
            if self.invincibility_timer <= 0.0 {
                self.invincible = false;
                self.invincibility_timer = 0.0;
            }
        }
    }
}
