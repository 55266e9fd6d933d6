//! # weft-contact
//!
//! Collision response against static obstacles.
//!
//! Contact is resolved per point, on velocity only: a point inside an
//! obstacle loses the component of its velocity that points further in.
//! Tangential and outward motion is left untouched. There is no position
//! projection and no restitution.
//!
//! The solver talks to obstacles through the [`Collider`] trait, so every
//! point can be tested concurrently against the same read-only collider.

pub mod config;
pub mod response;
pub mod sphere;

pub use config::ColliderConfig;
pub use response::{Collider, NullCollider};
pub use sphere::SphereCollider;
