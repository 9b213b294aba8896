//! The entity composition store.
//!
//! A slot arena keyed by generational [`EntityId`]s. Each live slot holds one
//! entity: a name, a tag, a removal-pending flag, and its [`ComponentSet`].
//! Destruction is deferred — callers mark entities for removal and the
//! container layer runs [`EntityStore::sweep`] at a defined point in the
//! frame, never while iterating.

use thiserror::Error;
use tracing::{debug, trace};

use crate::component::{Capability, ComponentSet};
use crate::entity::EntityId;

/// Errors from container-level store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The handle does not resolve to a live entity (despawned or never
    /// issued by this store).
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),
}

#[derive(Debug, Default)]
struct Record {
    name: String,
    tag: String,
    pending_removal: bool,
    components: ComponentSet,
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    record: Option<Record>,
}

/// Arena storage for entities and their components.
#[derive(Debug, Default)]
pub struct EntityStore {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl EntityStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if no entities are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Spawn a new entity with the given name and tag.
    pub fn spawn(&mut self, name: impl Into<String>, tag: impl Into<String>) -> EntityId {
        let record = Record {
            name: name.into(),
            tag: tag.into(),
            pending_removal: false,
            components: ComponentSet::default(),
        };

        let id = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.record = Some(record);
                EntityId::new(index, slot.generation)
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    record: Some(record),
                });
                EntityId::new(index, 0)
            }
        };
        self.live += 1;
        debug!(entity = %id, "entity spawned");
        id
    }

    /// Returns `true` if the handle resolves to a live entity.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.record(id).is_some()
    }

    fn record(&self, id: EntityId) -> Option<&Record> {
        let slot = self.slots.get(id.index() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.record.as_ref()
    }

    fn record_mut(&mut self, id: EntityId) -> Option<&mut Record> {
        let slot = self.slots.get_mut(id.index() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.record.as_mut()
    }

    /// Iterate over all live entity handles, in slot order.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.record
                .as_ref()
                .map(|_| EntityId::new(index as u32, slot.generation))
        })
    }

    /// The entity's name, if it is live.
    #[must_use]
    pub fn name(&self, id: EntityId) -> Option<&str> {
        self.record(id).map(|r| r.name.as_str())
    }

    /// Rename the entity. No-op on a stale handle.
    pub fn set_name(&mut self, id: EntityId, name: impl Into<String>) {
        if let Some(record) = self.record_mut(id) {
            record.name = name.into();
        }
    }

    /// The entity's tag, if it is live.
    #[must_use]
    pub fn tag(&self, id: EntityId) -> Option<&str> {
        self.record(id).map(|r| r.tag.as_str())
    }

    /// Re-tag the entity. No-op on a stale handle.
    pub fn set_tag(&mut self, id: EntityId, tag: impl Into<String>) {
        if let Some(record) = self.record_mut(id) {
            record.tag = tag.into();
        }
    }

    // --- Deferred removal -------------------------------------------------

    /// Flag the entity for removal by the next [`sweep`](Self::sweep).
    pub fn mark_for_removal(&mut self, id: EntityId) {
        if let Some(record) = self.record_mut(id) {
            record.pending_removal = true;
        }
    }

    /// Whether the entity is flagged for removal.
    #[must_use]
    pub fn is_pending_removal(&self, id: EntityId) -> bool {
        self.record(id).is_some_and(|r| r.pending_removal)
    }

    /// Destroy every entity flagged for removal. Returns the number removed.
    ///
    /// The pending set is collected before any destruction happens, so the
    /// compaction never interleaves with iteration over live entities.
    pub fn sweep(&mut self) -> usize {
        let pending: Vec<EntityId> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                let record = slot.record.as_ref()?;
                record
                    .pending_removal
                    .then(|| EntityId::new(index as u32, slot.generation))
            })
            .collect();

        let count = pending.len();
        for id in pending {
            self.despawn(id);
        }
        count
    }

    /// Destroy the entity immediately: run every component's `on_clean`, free
    /// the slot, and bump its generation so outstanding handles go stale.
    ///
    /// Returns `true` if the entity was live.
    pub fn despawn(&mut self, id: EntityId) -> bool {
        let Some(slot) = self.slots.get_mut(id.index() as usize) else {
            return false;
        };
        if slot.generation != id.generation() || slot.record.is_none() {
            return false;
        }
        if let Some(mut record) = slot.record.take() {
            record.components.clean_all();
        }
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index());
        self.live -= 1;
        trace!(entity = %id, "entity despawned");
        true
    }

    /// Tear down the whole store, running `on_clean` on every component.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            if let Some(mut record) = slot.record.take() {
                record.components.clean_all();
                slot.generation = slot.generation.wrapping_add(1);
            }
        }
        self.free = (0..self.slots.len() as u32).rev().collect();
        self.live = 0;
    }

    // --- Component access -------------------------------------------------

    /// Attach a component, idempotent by kind.
    ///
    /// If the entity already owns a component of kind `T`, the existing
    /// instance is returned unchanged and `component` is dropped —
    /// construction arguments are ignored, there are no replace semantics.
    /// Otherwise the component's `on_init` runs exactly once, with a view of
    /// the siblings already attached, and the stored instance is returned.
    ///
    /// # Errors
    ///
    /// [`StoreError::EntityNotFound`] if the handle is stale.
    pub fn add_component<T: Capability>(
        &mut self,
        id: EntityId,
        mut component: T,
    ) -> Result<&mut T, StoreError> {
        let record = self.record_mut(id).ok_or(StoreError::EntityNotFound(id))?;
        if T::slot(&record.components).is_none() {
            component.on_init(&record.components);
            debug!(entity = %id, kind = %T::KIND, "component attached");
        }
        Ok(T::slot_mut(&mut record.components).get_or_insert(component))
    }

    /// Borrow the component of kind `T`, if the entity is live and owns one.
    #[must_use]
    pub fn get_component<T: Capability>(&self, id: EntityId) -> Option<&T> {
        T::slot(&self.record(id)?.components).as_ref()
    }

    /// Mutably borrow the component of kind `T`.
    #[must_use]
    pub fn get_component_mut<T: Capability>(&mut self, id: EntityId) -> Option<&mut T> {
        T::slot_mut(&mut self.record_mut(id)?.components).as_mut()
    }

    /// Returns `true` if the entity is live and owns a component of kind `T`.
    #[must_use]
    pub fn has_component<T: Capability>(&self, id: EntityId) -> bool {
        self.record(id).is_some_and(|r| T::slot(&r.components).is_some())
    }

    /// Detach the component of kind `T`, running its `on_clean` first.
    ///
    /// Returns `true` if a component was removed; an absent kind or a stale
    /// handle is a no-op returning `false`.
    pub fn remove_component<T: Capability>(&mut self, id: EntityId) -> bool {
        let Some(record) = self.record_mut(id) else {
            return false;
        };
        match T::slot_mut(&mut record.components).take() {
            Some(mut component) => {
                component.on_clean();
                trace!(entity = %id, kind = %T::KIND, "component removed");
                true
            }
            None => false,
        }
    }

    /// Borrow an entity's full component set.
    #[must_use]
    pub fn components(&self, id: EntityId) -> Option<&ComponentSet> {
        self.record(id).map(|r| &r.components)
    }

    // --- Per-frame fan-out ------------------------------------------------

    /// Dispatch the update hook to every component of every live entity.
    pub fn update(&mut self, dt: f32) {
        for slot in &mut self.slots {
            if let Some(record) = &mut slot.record {
                record.components.update_all(dt);
            }
        }
    }

    /// Dispatch the input hook to every component of every live entity.
    pub fn handle_input(&mut self) {
        for slot in &mut self.slots {
            if let Some(record) = &mut slot.record {
                record.components.input_all();
            }
        }
    }

    /// Dispatch the render hook to every component of every live entity.
    pub fn render(&mut self) {
        for slot in &mut self.slots {
            if let Some(record) = &mut slot.record {
                record.components.render_all();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sim_math::{Alignment, Shape, Vec2};

    use super::*;
    use crate::components::{Collider, Health, Physics, Transform2D};

    #[test]
    fn test_spawn_and_lookup() {
        let mut store = EntityStore::new();
        let id = store.spawn("player", "friendly");
        assert!(store.contains(id));
        assert_eq!(store.name(id), Some("player"));
        assert_eq!(store.tag(id), Some("friendly"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_component_is_idempotent_by_kind() {
        let mut store = EntityStore::new();
        let id = store.spawn("a", "");

        store
            .add_component(id, Physics::new(false, 5.0))
            .expect("live entity");
        // Second add: construction arguments are ignored, the first instance
        // survives untouched.
        let physics = store
            .add_component(id, Physics::new(true, 99.0))
            .expect("live entity");
        assert_eq!(physics.mass(), 5.0);
        assert!(!physics.uses_gravity());
    }

    #[test]
    fn test_add_component_init_runs_once_with_siblings() {
        let mut store = EntityStore::new();
        let id = store.spawn("a", "");
        store
            .add_component(
                id,
                Transform2D::new(Vec2::ZERO, Vec2::new(2.0, 2.0), 0.0),
            )
            .expect("live entity");

        let collider = store
            .add_component(
                id,
                Collider::new(Shape::aabb(Vec2::new(10.0, 10.0))).with_alignment(Alignment::Center),
            )
            .expect("live entity");
        // Offset resolved at attach against the sibling transform's scale.
        assert_eq!(collider.offset(), Vec2::new(-10.0, -10.0));

        // A second add with a different alignment changes nothing.
        let collider = store
            .add_component(
                id,
                Collider::new(Shape::aabb(Vec2::new(10.0, 10.0))).with_alignment(Alignment::TopLeft),
            )
            .expect("live entity");
        assert_eq!(collider.alignment(), Alignment::Center);
        assert_eq!(collider.offset(), Vec2::new(-10.0, -10.0));
    }

    #[test]
    fn test_add_component_on_stale_handle_errors() {
        let mut store = EntityStore::new();
        let id = store.spawn("a", "");
        store.despawn(id);
        let result = store.add_component(id, Physics::default());
        assert_eq!(result.unwrap_err(), StoreError::EntityNotFound(id));
    }

    #[test]
    fn test_remove_component_then_absent() {
        let mut store = EntityStore::new();
        let id = store.spawn("a", "");
        store
            .add_component(id, Transform2D::default())
            .expect("live entity");

        assert!(store.has_component::<Transform2D>(id));
        assert!(store.remove_component::<Transform2D>(id));
        assert!(!store.has_component::<Transform2D>(id));
        // Second removal is a no-op.
        assert!(!store.remove_component::<Transform2D>(id));
    }

    #[test]
    fn test_get_component_absent_is_none_not_error() {
        let mut store = EntityStore::new();
        let id = store.spawn("a", "");
        assert!(store.get_component::<Collider>(id).is_none());
        assert!(store.get_component_mut::<Collider>(id).is_none());
    }

    #[test]
    fn test_despawn_invalidates_handle_and_recycles_slot() {
        let mut store = EntityStore::new();
        let old = store.spawn("a", "");
        assert!(store.despawn(old));
        assert!(!store.contains(old));
        assert!(!store.despawn(old));

        // The slot is reused with a bumped generation; the old handle still
        // resolves to nothing.
        let new = store.spawn("b", "");
        assert_eq!(new.index(), old.index());
        assert_ne!(new.generation(), old.generation());
        assert!(!store.contains(old));
        assert_eq!(store.name(new), Some("b"));
    }

    #[test]
    fn test_mark_and_sweep() {
        let mut store = EntityStore::new();
        let keep = store.spawn("keep", "");
        let drop1 = store.spawn("drop1", "");
        let drop2 = store.spawn("drop2", "");

        store.mark_for_removal(drop1);
        store.mark_for_removal(drop2);
        assert!(store.is_pending_removal(drop1));
        assert!(!store.is_pending_removal(keep));

        assert_eq!(store.sweep(), 2);
        assert!(store.contains(keep));
        assert!(!store.contains(drop1));
        assert!(!store.contains(drop2));
        assert_eq!(store.len(), 1);

        // Nothing left pending.
        assert_eq!(store.sweep(), 0);
    }

    #[test]
    fn test_update_fans_out_to_components() {
        let mut store = EntityStore::new();
        let id = store.spawn("a", "");
        store
            .add_component(id, Health::new(10, 1.0))
            .expect("live entity");
        store
            .get_component_mut::<Health>(id)
            .expect("just added")
            .set_invincible(0.1);

        store.update(0.2);
        let health = store.get_component::<Health>(id).expect("still live");
        assert!(!health.is_invincible());
    }

    #[test]
    fn test_entities_iteration_order_is_slot_order() {
        let mut store = EntityStore::new();
        let a = store.spawn("a", "");
        let b = store.spawn("b", "");
        let c = store.spawn("c", "");
        store.despawn(b);
        let ids: Vec<EntityId> = store.entities().collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_clear_tears_everything_down() {
        let mut store = EntityStore::new();
        let a = store.spawn("a", "");
        let b = store.spawn("b", "");
        store.clear();
        assert!(store.is_empty());
        assert!(!store.contains(a));
        assert!(!store.contains(b));
        // Slots are reusable afterwards.
        let c = store.spawn("c", "");
        assert!(store.contains(c));
    }
}
