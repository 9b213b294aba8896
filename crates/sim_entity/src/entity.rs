//! Generational entity handles.
//!
//! An [`EntityId`] is a slot index paired with a generation counter. The
//! store bumps a slot's generation when the entity in it is destroyed, so a
//! handle held past its entity's lifetime stops resolving instead of aliasing
//! whatever gets spawned into the slot next.

use serde::{Deserialize, Serialize};

/// A handle to an entity in an [`EntityStore`](crate::EntityStore).
///
/// Handles are cheap to copy and safe to hold across frames: resolving a
/// stale handle yields `None` rather than a different entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId {
    index: u32,
    generation: u32,
}

impl EntityId {
    pub(crate) const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// The slot index in the owning store.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// The generation this handle was issued at.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({}v{})", self.index, self.generation)
    }
}
