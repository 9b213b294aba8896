//! The physics engine: registry, integration, and the broad phase.

use glam::Vec2;
use sim_entity::{EntityId, EntityStore, Physics, Transform2D};
use sim_math::Rect;
use tracing::trace;

use crate::collision::{self, CollisionPair};
use crate::config::PhysicsConfig;

/// Process-wide physics driver.
///
/// Holds the global gravity/speed-limit configuration, the ordered registry
/// of body handles, and the current frame's collision-pair list. One call to
/// [`update`](Self::update) per frame performs integration and then
/// detection, synchronously, on the simulation thread.
#[derive(Debug, Default)]
pub struct PhysicsEngine {
    config: PhysicsConfig,
    /// Registered bodies, in registration order. The order is the de facto
    /// contract for pair enumeration and for mid-frame disable effects.
    bodies: Vec<EntityId>,
    pairs: Vec<CollisionPair>,
}

impl PhysicsEngine {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            pairs: Vec::new(),
        }
    }

    /// Current gravity acceleration.
    #[must_use]
    pub fn gravity(&self) -> Vec2 {
        self.config.gravity
    }

    /// Change the gravity acceleration.
    pub fn set_gravity(&mut self, gravity: Vec2) {
        self.config.gravity = gravity;
    }

    /// Current componentwise speed limit.
    #[must_use]
    pub fn max_speed(&self) -> Vec2 {
        self.config.max_speed
    }

    /// Change the componentwise speed limit.
    pub fn set_max_speed(&mut self, max_speed: Vec2) {
        self.config.max_speed = max_speed;
    }

    /// Register a body. O(1) append; the caller registers each body once.
    pub fn register(&mut self, body: EntityId) {
        self.bodies.push(body);
        trace!(entity = %body, "physics body registered");
    }

    /// Remove a body from the registry. Idempotent; unregistering a handle
    /// that was never registered is a no-op.
    pub fn unregister(&mut self, body: EntityId) {
        self.bodies.retain(|&b| b != body);
        trace!(entity = %body, "physics body unregistered");
    }

    /// Number of registered bodies (including currently disabled or stale
    /// ones — the registry is not pruned automatically).
    #[must_use]
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// The collision pairs produced by the most recent [`update`](Self::update).
    #[must_use]
    pub fn collision_pairs(&self) -> &[CollisionPair] {
        &self.pairs
    }

    /// Advance the simulation by `dt` seconds: integrate every registered
    /// body in registration order, then run the broad phase.
    ///
    /// A defective body — stale handle, missing physics component — is
    /// skipped for the frame; it never aborts the update.
    pub fn update(&mut self, store: &mut EntityStore, dt: f32) {
        self.pairs.clear();

        for &body in &self.bodies {
            self.step_body(store, body, dt);
        }

        self.detect_collisions(store);
    }

    /// Integrate one body: contact-flag reset, gravity force, velocity from
    /// force, force clear, position from velocity, velocity clamp — in that
    /// order.
    fn step_body(&self, store: &mut EntityStore, body: EntityId, dt: f32) {
        let Some(physics) = store.get_component_mut::<Physics>(body) else {
            trace!(entity = %body, "skipping body without live physics component");
            return;
        };
        if !physics.is_enabled() {
            return;
        }

        physics.reset_contacts();

        if physics.uses_gravity() {
            let gravity_force = self.config.gravity * physics.mass();
            physics.add_force(gravity_force);
        }

        // Semi-implicit Euler: v += (F / m) * dt, then the position moves
        // with the updated velocity.
        let acceleration = physics.force() / physics.mass();
        physics.velocity += acceleration * dt;
        // The accumulator is consumed; clear it exactly once per frame.
        physics.clear_force();
        let velocity = physics.velocity;

        if let Some(transform) = store.get_component_mut::<Transform2D>(body) {
            transform.translate(velocity * dt);
        }

        // Clamp after the translation: the position step sees the unclamped
        // velocity, the next frame starts from the clamped one.
        let max_speed = self.config.max_speed;
        if let Some(physics) = store.get_component_mut::<Physics>(body) {
            physics.velocity = physics.velocity.clamp(-max_speed, max_speed);
        }
    }

    /// All-pairs scan over the registry, O(n²). No spatial index — a known
    /// scalability ceiling. The i < j iteration over registration order
    /// prevents self-pairs and reciprocal duplicates and fixes the pair
    /// ordering.
    fn detect_collisions(&mut self, store: &EntityStore) {
        let candidates: Vec<(EntityId, Rect, bool)> = self
            .bodies
            .iter()
            .filter_map(|&body| {
                collision::candidate(store, body).map(|(rect, trigger)| (body, rect, trigger))
            })
            .collect();

        for (i, &(a, rect_a, trigger_a)) in candidates.iter().enumerate() {
            for &(b, rect_b, trigger_b) in &candidates[i + 1..] {
                if rect_a.intersects(&rect_b) {
                    self.pairs.push(CollisionPair {
                        a,
                        b,
                        trigger: trigger_a || trigger_b,
                    });
                }
            }
        }
    }
}
