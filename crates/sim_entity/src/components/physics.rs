//! Physics body component.
//!
//! Holds the per-body simulation state the engine integrates each frame:
//! velocity, a force accumulator, mass, and the gravity/enabled switches.
//! Also carries the contact-side flags a narrow-phase/response step writes
//! for gameplay code to read.

use serde::{Deserialize, Serialize};
use sim_math::Vec2;

use crate::component::{Capability, ComponentKind, ComponentSet};

/// Which sides of a body made contact this frame.
///
/// Written by an external collision-response step after the broad phase,
/// cleared by the engine at the start of each physics update cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactState {
    /// Contact below the body (standing on something).
    pub below: bool,
    /// Contact above the body.
    pub above: bool,
    /// Contact on the left side.
    pub left: bool,
    /// Contact on the right side.
    pub right: bool,
    /// Overlapping a ladder.
    pub ladder: bool,
    /// Standing on the top tile of a ladder.
    pub ladder_top: bool,
}

impl ContactState {
    /// Reset every flag.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Velocity, force accumulator, mass, and simulation switches for one body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Physics {
    /// Current velocity. Public: the engine and gameplay code both write it.
    pub velocity: Vec2,
    force: Vec2,
    mass: f32,
    use_gravity: bool,
    enabled: bool,
    contacts: ContactState,
}

impl Physics {
    /// Mass substituted for non-positive input.
    pub const DEFAULT_MASS: f32 = 1.0;

    /// Create a body. A non-positive (or NaN) `mass` is silently replaced by
    /// [`Self::DEFAULT_MASS`] — invalid configuration is coerced, not
    /// rejected.
    #[must_use]
    pub fn new(use_gravity: bool, mass: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            force: Vec2::ZERO,
            mass: Self::sanitize_mass(mass),
            use_gravity,
            enabled: true,
            contacts: ContactState::default(),
        }
    }

    fn sanitize_mass(mass: f32) -> f32 {
        if mass > 0.0 { mass } else { Self::DEFAULT_MASS }
    }

    /// Accumulate a force for this frame. Ignored while the body is disabled.
    pub fn add_force(&mut self, force: Vec2) {
        if self.enabled {
            self.force += force;
        }
    }

    /// Zero the force accumulator. The engine calls this exactly once per
    /// frame, after the accumulated force has been consumed.
    pub fn clear_force(&mut self) {
        self.force = Vec2::ZERO;
    }

    /// The force accumulated so far this frame.
    #[must_use]
    pub fn force(&self) -> Vec2 {
        self.force
    }

    /// Body mass. Always positive.
    #[must_use]
    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Set the mass; non-positive input is coerced to [`Self::DEFAULT_MASS`].
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = Self::sanitize_mass(mass);
    }

    /// Whether gravity is applied to this body each frame.
    #[must_use]
    pub fn uses_gravity(&self) -> bool {
        self.use_gravity
    }

    /// Enable or disable gravity for this body.
    pub fn set_use_gravity(&mut self, use_gravity: bool) {
        self.use_gravity = use_gravity;
    }

    /// Whether the body participates in the simulation at all.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the body. A disabled body receives no forces, no
    /// integration, and no collision participation; re-enabling resumes all
    /// of it without re-registration.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// This frame's contact-side flags.
    #[must_use]
    pub fn contacts(&self) -> &ContactState {
        &self.contacts
    }

    /// Mutable contact flags, for the collision-response step.
    pub fn contacts_mut(&mut self) -> &mut ContactState {
        &mut self.contacts
    }

    /// Clear all contact flags. Called by the engine at the start of each
    /// update cycle.
    pub fn reset_contacts(&mut self) {
        self.contacts.clear();
    }
}

impl Default for Physics {
    fn default() -> Self {
        Self::new(true, Self::DEFAULT_MASS)
    }
}

impl Capability for Physics {
    const KIND: ComponentKind = ComponentKind::Physics;

    fn slot(set: &ComponentSet) -> &Option<Self> {
        &set.physics
    }

    fn slot_mut(set: &mut ComponentSet) -> &mut Option<Self> {
        &mut set.physics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_mass_is_coerced() {
        assert_eq!(Physics::new(true, 0.0).mass(), Physics::DEFAULT_MASS);
        assert_eq!(Physics::new(true, -3.0).mass(), Physics::DEFAULT_MASS);
        assert_eq!(Physics::new(true, f32::NAN).mass(), Physics::DEFAULT_MASS);
        assert_eq!(Physics::new(true, 2.5).mass(), 2.5);

        let mut p = Physics::default();
        p.set_mass(-1.0);
        assert_eq!(p.mass(), Physics::DEFAULT_MASS);
    }

    #[test]
    fn test_forces_accumulate_and_clear() {
        let mut p = Physics::default();
        p.add_force(Vec2::new(1.0, 0.0));
        p.add_force(Vec2::new(2.0, 5.0));
        assert_eq!(p.force(), Vec2::new(3.0, 5.0));
        p.clear_force();
        assert_eq!(p.force(), Vec2::ZERO);
    }

    #[test]
    fn test_disabled_body_ignores_forces() {
        let mut p = Physics::default();
        p.set_enabled(false);
        p.add_force(Vec2::new(10.0, 10.0));
        assert_eq!(p.force(), Vec2::ZERO);
    }

    #[test]
    fn test_contact_flags_clear() {
        let mut p = Physics::default();
        p.contacts_mut().below = true;
        p.contacts_mut().ladder = true;
        assert!(p.contacts().below);
        p.reset_contacts();
        assert_eq!(*p.contacts(), ContactState::default());
    }
}
