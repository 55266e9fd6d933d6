//! Collider configuration.

use serde::{Deserialize, Serialize};
use weft_math::Vec3;
use weft_types::constants::DEFAULT_COLLIDER_RADIUS;
use weft_types::WeftResult;

use crate::sphere::SphereCollider;

/// Serializable description of the sphere collider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColliderConfig {
    /// Sphere center [x, y, z] in meters.
    pub center: [f32; 3],
    /// Sphere radius in meters.
    pub radius: f32,
}

impl Default for ColliderConfig {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0, 0.0],
            radius: DEFAULT_COLLIDER_RADIUS,
        }
    }
}

impl ColliderConfig {
    /// Builds the collider, validating radius and center.
    pub fn build(&self) -> WeftResult<SphereCollider> {
        SphereCollider::new(Vec3::from_array(self.center), self.radius)
    }

    pub fn validate(&self) -> WeftResult<()> {
        self.build().map(|_| ())
    }
}
