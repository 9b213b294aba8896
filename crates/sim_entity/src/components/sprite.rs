//! Sprite component.
//!
//! Visual state only: an opaque texture identifier supplied by the external
//! resource layer, the sprite's local size, and the same alignment/offset
//! resolution the collider uses. The draw layer reads this; nothing here
//! renders.

use serde::{Deserialize, Serialize};
use sim_math::{Alignment, Vec2};

use crate::component::{Capability, ComponentKind, ComponentSet};
use crate::components::transform::Transform2D;

/// Visual representation of an entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    texture_id: String,
    size: Vec2,
    alignment: Alignment,
    offset: Vec2,
    hidden: bool,
    flipped: bool,
}

impl Sprite {
    /// Create a visible, unflipped sprite with no alignment.
    #[must_use]
    pub fn new(texture_id: impl Into<String>, size: Vec2) -> Self {
        Self {
            texture_id: texture_id.into(),
            size,
            alignment: Alignment::None,
            offset: Vec2::ZERO,
            hidden: false,
            flipped: false,
        }
    }

    /// Set the alignment anchor; the offset is resolved at attach time.
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// The opaque texture identifier.
    #[must_use]
    pub fn texture_id(&self) -> &str {
        &self.texture_id
    }

    /// Swap the texture.
    pub fn set_texture_id(&mut self, texture_id: impl Into<String>) {
        self.texture_id = texture_id.into();
    }

    /// Local sprite size.
    #[must_use]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Rendering offset from the transform origin.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// The alignment anchor.
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    /// Change the anchor and recompute the offset against the owner scale.
    pub fn set_alignment(&mut self, alignment: Alignment, scale: Vec2) {
        self.alignment = alignment;
        self.refresh_offset(scale);
    }

    /// Recompute the offset; call again whenever the owner's scale changes.
    /// [`Alignment::None`] leaves the offset untouched.
    pub fn refresh_offset(&mut self, scale: Vec2) {
        if let Some(offset) = self.alignment.offset_for(self.size, scale) {
            self.offset = offset;
        }
    }

    /// Whether the sprite is currently hidden.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hide or show the sprite.
    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Whether the sprite is horizontally flipped.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Set the horizontal flip flag.
    pub fn set_flipped(&mut self, flipped: bool) {
        self.flipped = flipped;
    }
}

impl Capability for Sprite {
    const KIND: ComponentKind = ComponentKind::Sprite;

    fn slot(set: &ComponentSet) -> &Option<Self> {
        &set.sprite
    }

    fn slot_mut(set: &mut ComponentSet) -> &mut Option<Self> {
        &mut set.sprite
    }

    fn on_init(&mut self, siblings: &ComponentSet) {
        let scale = siblings
            .get::<Transform2D>()
            .map_or(Vec2::ONE, |t| t.scale);
        self.refresh_offset(scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sprite_defaults() {
        let s = Sprite::new("player", Vec2::new(16.0, 16.0));
        assert_eq!(s.texture_id(), "player");
        assert!(!s.is_hidden());
        assert!(!s.is_flipped());
        assert_eq!(s.offset(), Vec2::ZERO);
    }

    #[test]
    fn test_alignment_resolves_at_init() {
        let mut s = Sprite::new("player", Vec2::new(16.0, 32.0)).with_alignment(Alignment::BottomCenter);
        s.on_init(&ComponentSet::default());
        assert_eq!(s.offset(), Vec2::new(-8.0, -32.0));
    }
}
