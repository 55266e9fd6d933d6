//! Contact response trait.

use weft_math::Vec3;

/// A static obstacle that constrains point velocities.
///
/// Implementations are immutable during a sweep and are called from many
/// worker threads at once.
///
/// # Implementations
/// - [`SphereCollider`](crate::sphere::SphereCollider) — analytical sphere
/// - [`NullCollider`] — no obstacle
pub trait Collider: Send + Sync {
    /// Clamp the velocity of a point at `position`.
    ///
    /// Returns `true` if the point is in contact with the obstacle.
    fn constrain_velocity(&self, position: Vec3, velocity: &mut Vec3) -> bool;

    /// Returns the collider name.
    fn name(&self) -> &str;
}

/// Collider that never reports contact.
pub struct NullCollider;

impl Collider for NullCollider {
    fn constrain_velocity(&self, _position: Vec3, _velocity: &mut Vec3) -> bool {
        false
    }

    fn name(&self) -> &str {
        "null_collider"
    }
}
