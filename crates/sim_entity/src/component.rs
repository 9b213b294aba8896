//! The closed component set and the [`Capability`] contract.
//!
//! Component storage is a compile-time table keyed by [`ComponentKind`]: one
//! `Option` slot per kind, at most one instance per kind per entity. There is
//! no open-ended type registry — adding a component kind means adding a
//! variant, a slot, and a [`Capability`] impl in this crate.

use crate::components::{Collider, Health, Physics, Sprite, Transform2D};

/// The closed set of component kinds an entity may own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    /// Position, scale, and rotation.
    Transform,
    /// Velocity, forces, mass, and contact flags.
    Physics,
    /// Collision geometry and alignment.
    Collider,
    /// Visual representation (texture id, size, flags).
    Sprite,
    /// Hit points and invincibility frames.
    Health,
}

impl ComponentKind {
    /// Every kind, in the (contractually unspecified) fan-out order used by
    /// the store's per-frame drivers.
    pub const ALL: [ComponentKind; 5] = [
        Self::Transform,
        Self::Physics,
        Self::Collider,
        Self::Sprite,
        Self::Health,
    ];

    /// Human-readable kind name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Transform => "Transform",
            Self::Physics => "Physics",
            Self::Collider => "Collider",
            Self::Sprite => "Sprite",
            Self::Health => "Health",
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One entity's components: one slot per [`ComponentKind`].
#[derive(Debug, Default)]
pub struct ComponentSet {
    pub(crate) transform: Option<Transform2D>,
    pub(crate) physics: Option<Physics>,
    pub(crate) collider: Option<Collider>,
    pub(crate) sprite: Option<Sprite>,
    pub(crate) health: Option<Health>,
}

impl ComponentSet {
    /// Borrow the component of kind `T`, if present.
    #[must_use]
    pub fn get<T: Capability>(&self) -> Option<&T> {
        T::slot(self).as_ref()
    }

    /// Returns `true` if a component of kind `T` is present.
    #[must_use]
    pub fn has<T: Capability>(&self) -> bool {
        T::slot(self).is_some()
    }

    /// The kinds currently present, in fan-out order.
    #[must_use]
    pub fn kinds(&self) -> Vec<ComponentKind> {
        let mut kinds = Vec::new();
        if self.transform.is_some() {
            kinds.push(ComponentKind::Transform);
        }
        if self.physics.is_some() {
            kinds.push(ComponentKind::Physics);
        }
        if self.collider.is_some() {
            kinds.push(ComponentKind::Collider);
        }
        if self.sprite.is_some() {
            kinds.push(ComponentKind::Sprite);
        }
        if self.health.is_some() {
            kinds.push(ComponentKind::Health);
        }
        kinds
    }

    // Per-frame fan-out across kinds. The order is fixed here but is not part
    // of the contract; sibling dependencies go through the store, never
    // through this ordering.

    pub(crate) fn update_all(&mut self, dt: f32) {
        if let Some(c) = &mut self.transform {
            c.on_update(dt);
        }
        if let Some(c) = &mut self.physics {
            c.on_update(dt);
        }
        if let Some(c) = &mut self.collider {
            c.on_update(dt);
        }
        if let Some(c) = &mut self.sprite {
            c.on_update(dt);
        }
        if let Some(c) = &mut self.health {
            c.on_update(dt);
        }
    }

    pub(crate) fn input_all(&mut self) {
        if let Some(c) = &mut self.transform {
            c.on_input();
        }
        if let Some(c) = &mut self.physics {
            c.on_input();
        }
        if let Some(c) = &mut self.collider {
            c.on_input();
        }
        if let Some(c) = &mut self.sprite {
            c.on_input();
        }
        if let Some(c) = &mut self.health {
            c.on_input();
        }
    }

    pub(crate) fn render_all(&mut self) {
        if let Some(c) = &mut self.transform {
            c.on_render();
        }
        if let Some(c) = &mut self.physics {
            c.on_render();
        }
        if let Some(c) = &mut self.collider {
            c.on_render();
        }
        if let Some(c) = &mut self.sprite {
            c.on_render();
        }
        if let Some(c) = &mut self.health {
            c.on_render();
        }
    }

    pub(crate) fn clean_all(&mut self) {
        if let Some(c) = &mut self.transform {
            c.on_clean();
        }
        if let Some(c) = &mut self.physics {
            c.on_clean();
        }
        if let Some(c) = &mut self.collider {
            c.on_clean();
        }
        if let Some(c) = &mut self.sprite {
            c.on_clean();
        }
        if let Some(c) = &mut self.health {
            c.on_clean();
        }
    }
}

/// The contract every component kind satisfies.
///
/// Lifecycle is one-directional: a component is constructed, [`on_init`] runs
/// exactly once at attach time (with a view of the siblings already present,
/// so it may cache derived state such as an alignment offset), the per-frame
/// hooks run while it is stored, and [`on_clean`] runs on explicit removal or
/// store teardown. Re-initialization is not supported.
///
/// [`on_init`]: Capability::on_init
/// [`on_clean`]: Capability::on_clean
pub trait Capability: Sized + Send + Sync + 'static {
    /// The kind tag this component occupies.
    const KIND: ComponentKind;

    /// Borrow this kind's slot in a component set.
    fn slot(set: &ComponentSet) -> &Option<Self>;

    /// Mutably borrow this kind's slot in a component set.
    fn slot_mut(set: &mut ComponentSet) -> &mut Option<Self>;

    /// Called exactly once, when the component is attached. `siblings` holds
    /// the components already present on the owning entity.
    fn on_init(&mut self, _siblings: &ComponentSet) {}

    /// Per-frame update hook.
    fn on_update(&mut self, _dt: f32) {}

    /// Per-frame input hook.
    fn on_input(&mut self) {}

    /// Per-frame render hook. Draw submission itself lives outside this core;
    /// the hook exists so the fan-out contract is complete.
    fn on_render(&mut self) {}

    /// Called on removal or teardown.
    fn on_clean(&mut self) {}
}
