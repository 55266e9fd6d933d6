//! Analytical sphere collision.
//!
//! A static sphere that points cannot move into. Points already inside
//! are not pushed out; they only stop sinking.

use weft_math::{Direction, Vec3};
use weft_types::{WeftError, WeftResult};

use crate::response::Collider;

/// Static sphere obstacle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereCollider {
    /// Center of the sphere.
    pub center: Vec3,
    /// Radius of the sphere.
    pub radius: f32,
}

impl SphereCollider {
    /// Creates a sphere collider.
    ///
    /// Fails if the radius is not positive or any value is non-finite.
    pub fn new(center: Vec3, radius: f32) -> WeftResult<Self> {
        if !center.is_finite() {
            return Err(WeftError::InvalidConfig(format!(
                "Collider center must be finite, got {center}"
            )));
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(WeftError::InvalidConfig(format!(
                "Collider radius must be positive, got {radius}"
            )));
        }
        Ok(Self { center, radius })
    }

    /// True if `p` lies inside or on the sphere.
    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        (p - self.center).length() <= self.radius
    }

    /// Signed distance from `p` to the sphere surface (negative inside).
    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        (p - self.center).length() - self.radius
    }
}

impl Collider for SphereCollider {
    fn constrain_velocity(&self, position: Vec3, velocity: &mut Vec3) -> bool {
        let to_center = Direction::of(position - self.center);
        if to_center.length > self.radius {
            return false;
        }

        // At the exact center the normal is zero and nothing is removed.
        let n = to_center.unit;
        let inward = velocity.dot(n).min(0.0);
        *velocity -= inward * n;
        true
    }

    fn name(&self) -> &str {
        "sphere_collider"
    }
}
