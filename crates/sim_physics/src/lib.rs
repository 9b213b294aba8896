//! # sim_physics
//!
//! The per-frame simulation driver of the 2D core: semi-implicit Euler
//! integration over registered bodies, followed by all-pairs broad-phase
//! collision detection.
//!
//! The engine owns no entities. It holds a registry of [`EntityId`] handles
//! and resolves each body's [`Physics`]/[`Transform2D`]/[`Collider`]
//! components through the [`EntityStore`] every frame — a stale handle or a
//! missing component degrades that body for the frame, never the frame loop.
//!
//! [`EntityId`]: sim_entity::EntityId
//! [`EntityStore`]: sim_entity::EntityStore
//! [`Physics`]: sim_entity::Physics
//! [`Transform2D`]: sim_entity::Transform2D
//! [`Collider`]: sim_entity::Collider

pub mod collision;
pub mod config;
pub mod engine;

pub use collision::CollisionPair;
pub use config::PhysicsConfig;
pub use engine::PhysicsEngine;
