//! Alignment anchors and offset resolution.
//!
//! An alignment names which point of a geometry should coincide with its
//! owner's transform origin. Resolving an alignment against the geometry's
//! size and the owner's scale yields a local offset for the geometry's
//! top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Anchor point of a geometry relative to its owner's transform origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    /// No anchor: the offset is a manual value and is never recomputed.
    #[default]
    None,
    /// Top-left corner at the origin.
    TopLeft,
    /// Top edge midpoint at the origin.
    TopCenter,
    /// Top-right corner at the origin.
    TopRight,
    /// Left edge midpoint at the origin.
    CenterLeft,
    /// Geometry center at the origin.
    Center,
    /// Right edge midpoint at the origin.
    CenterRight,
    /// Bottom-left corner at the origin.
    BottomLeft,
    /// Bottom edge midpoint at the origin.
    BottomCenter,
    /// Bottom-right corner at the origin.
    BottomRight,
}

impl Alignment {
    /// Normalised anchor position within the geometry, or `None` for
    /// [`Alignment::None`]. X runs left→right, Y top→bottom, both in `0..=1`.
    #[must_use]
    pub fn factors(self) -> Option<Vec2> {
        let f = match self {
            Self::None => return None,
            Self::TopLeft => Vec2::new(0.0, 0.0),
            Self::TopCenter => Vec2::new(0.5, 0.0),
            Self::TopRight => Vec2::new(1.0, 0.0),
            Self::CenterLeft => Vec2::new(0.0, 0.5),
            Self::Center => Vec2::new(0.5, 0.5),
            Self::CenterRight => Vec2::new(1.0, 0.5),
            Self::BottomLeft => Vec2::new(0.0, 1.0),
            Self::BottomCenter => Vec2::new(0.5, 1.0),
            Self::BottomRight => Vec2::new(1.0, 1.0),
        };
        Some(f)
    }

    /// Compute the top-left offset that places this anchor of a geometry of
    /// the given local `size`, scaled by `scale`, at the origin.
    ///
    /// Returns `None` for [`Alignment::None`] — the caller keeps whatever
    /// offset it already has.
    #[must_use]
    pub fn offset_for(self, size: Vec2, scale: Vec2) -> Option<Vec2> {
        self.factors().map(|f| -(size * scale) * f)
    }
}
