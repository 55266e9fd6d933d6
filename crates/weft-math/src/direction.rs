//! Guarded normalization.
//!
//! `glam`'s `normalize` yields NaN for a zero vector. Spring and contact
//! code goes through [`Direction`] instead, which maps a degenerate
//! displacement to the zero direction so it contributes nothing.

use glam::Vec3;
use weft_types::constants::EPSILON;

/// Unit direction and length of a displacement vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    /// Unit vector along the displacement, or zero if degenerate.
    pub unit: Vec3,
    /// Euclidean length of the displacement.
    pub length: f32,
}

impl Direction {
    /// Decomposes `v` into length and direction.
    ///
    /// When `|v| <= EPSILON` the direction is the zero vector.
    #[inline]
    pub fn of(v: Vec3) -> Self {
        let length = v.length();
        let unit = if length > EPSILON { v / length } else { Vec3::ZERO };
        Self { unit, length }
    }

    /// True when the displacement was too short to carry a direction.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.unit == Vec3::ZERO
    }
}
