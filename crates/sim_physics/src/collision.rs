//! Collision pairs and broad-phase eligibility.

use serde::{Deserialize, Serialize};
use sim_entity::{Collider, EntityId, EntityStore, Physics, Transform2D};
use sim_math::Rect;

/// One overlapping pair of entities, valid for the frame it was produced in.
///
/// Pairs are recomputed in full every frame and never persisted. Each
/// unordered pair appears at most once, with `a` the body registered earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionPair {
    /// The earlier-registered body.
    pub a: EntityId,
    /// The later-registered body.
    pub b: EntityId,
    /// `true` when either collider is a trigger, so the consumer can detect
    /// the overlap without applying a physical response.
    pub trigger: bool,
}

/// Resolve a registered body into its world-space bounding rect and trigger
/// flag, or `None` if it cannot participate in detection this frame: stale
/// owner, missing or disabled physics, missing or inactive collider, or no
/// transform to place the rect with.
pub(crate) fn candidate(store: &EntityStore, body: EntityId) -> Option<(Rect, bool)> {
    let physics = store.get_component::<Physics>(body)?;
    if !physics.is_enabled() {
        return None;
    }
    let collider = store.get_component::<Collider>(body)?;
    if !collider.is_active() {
        return None;
    }
    let transform = store.get_component::<Transform2D>(body)?;
    Some((collider.world_aabb(transform), collider.is_trigger()))
}
