//! Collider component.
//!
//! Owns one collision [`Shape`] plus the alignment anchor and local offset
//! that place it relative to the owning entity's transform origin. The broad
//! phase asks it for a world-space bounding rect; nothing here resolves
//! collisions.

use serde::{Deserialize, Serialize};
use sim_math::{Alignment, Rect, Shape, Vec2};

use crate::component::{Capability, ComponentKind, ComponentSet};
use crate::components::transform::Transform2D;

/// Collision geometry attached to an entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Collider {
    shape: Shape,
    alignment: Alignment,
    offset: Vec2,
    is_trigger: bool,
    is_active: bool,
}

impl Collider {
    /// Create an active, non-trigger collider with no alignment (manual
    /// offset, initially zero).
    #[must_use]
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            alignment: Alignment::None,
            offset: Vec2::ZERO,
            is_trigger: false,
            is_active: true,
        }
    }

    /// Set the alignment anchor. The offset is resolved when the collider is
    /// attached (it needs the Transform sibling's scale).
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Mark the collider as a trigger: it participates in detection but the
    /// resulting pairs are flagged so the consumer can skip physical response.
    #[must_use]
    pub fn with_trigger(mut self, is_trigger: bool) -> Self {
        self.is_trigger = is_trigger;
        self
    }

    /// The owned shape.
    #[must_use]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// The alignment anchor.
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// The local offset of the shape's bounding rect's top-left corner from
    /// the transform origin.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Set a manual offset. Only meaningful with [`Alignment::None`]; any
    /// later offset refresh for a real anchor overwrites it.
    pub fn set_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    /// Change the anchor and recompute the offset against the given owner
    /// scale.
    pub fn set_alignment(&mut self, alignment: Alignment, scale: Vec2) {
        self.alignment = alignment;
        self.refresh_offset(scale);
    }

    /// Recompute the offset from the current anchor, shape size, and owner
    /// scale. Must be called again whenever the owner's scale changes;
    /// [`Alignment::None`] leaves the offset untouched.
    pub fn refresh_offset(&mut self, scale: Vec2) {
        if let Some(offset) = self.alignment.offset_for(self.shape.bounding_size(), scale) {
            self.offset = offset;
        }
    }

    /// Whether this collider is a trigger.
    #[must_use]
    pub fn is_trigger(&self) -> bool {
        self.is_trigger
    }

    /// Set the trigger flag.
    pub fn set_trigger(&mut self, is_trigger: bool) {
        self.is_trigger = is_trigger;
    }

    /// Whether this collider participates in detection.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Activate or deactivate the collider. Inactive colliders are excluded
    /// from detection entirely.
    pub fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
    }

    /// The world-space bounding rectangle given the owner's transform:
    /// position plus local offset, extents scaled by the transform scale.
    #[must_use]
    pub fn world_aabb(&self, transform: &Transform2D) -> Rect {
        Rect::new(
            transform.position + self.offset,
            self.shape.bounding_size() * transform.scale,
        )
    }
}

impl Capability for Collider {
    const KIND: ComponentKind = ComponentKind::Collider;

    fn slot(set: &ComponentSet) -> &Option<Self> {
        &set.collider
    }

    fn slot_mut(set: &mut ComponentSet) -> &mut Option<Self> {
        &mut set.collider
    }

    fn on_init(&mut self, siblings: &ComponentSet) {
        let scale = siblings
            .get::<Transform2D>()
            .map_or(Vec2::ONE, |t| t.scale);
        self.refresh_offset(scale);
    }
}
