//! # weft-math
//!
//! Vector primitives for the weft simulator.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec3`, `Vec2`)
//! - [`Direction`] — length + unit direction of a displacement, with a
//!   deterministic zero fallback for coincident points

pub mod direction;

pub use direction::Direction;

// Re-export glam types as the canonical math types for weft.
pub use glam::{Vec2, Vec3};
