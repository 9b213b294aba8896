//! # sim_entity
//!
//! The entity/component composition model of the 2D simulation core.
//!
//! This crate provides:
//!
//! - [`EntityId`] — generational entity handles.
//! - [`EntityStore`] — slot-arena storage with deferred (mark/sweep) removal.
//! - [`Capability`] trait and [`ComponentKind`] — the closed set of component
//!   kinds an entity may own, at most one instance per kind.
//! - The concrete components: [`Transform2D`], [`Physics`], [`Collider`],
//!   [`Sprite`], [`Health`].
//!
//! Cross-component references are always [`EntityId`]s resolved through the
//! store, never pointers — a removed entity's handle goes stale and lookups
//! simply return `None`.

pub mod component;
pub mod components;
pub mod entity;
pub mod store;

pub use component::{Capability, ComponentKind, ComponentSet};
pub use components::{Collider, ContactState, Health, Physics, Sprite, Transform2D};
pub use entity::EntityId;
pub use store::{EntityStore, StoreError};
