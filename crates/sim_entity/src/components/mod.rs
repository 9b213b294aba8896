//! The concrete components of the closed capability set.

pub mod collider;
pub mod health;
pub mod physics;
pub mod sprite;
pub mod transform;

pub use collider::Collider;
pub use health::Health;
pub use physics::{ContactState, Physics};
pub use sprite::Sprite;
pub use transform::Transform2D;
