//! # weft-mesh
//!
//! Everything about the cloth grid that is fixed once the resolution is
//! chosen, plus the per-frame flattening of point positions into a
//! renderer-ready vertex buffer.
//!
//! ## Key Types
//!
//! - [`SpringTopology`] — the spring-neighbor offset set, built once.
//! - [`ClothMesh`] — vertex buffer, triangle/wireframe index buffers and
//!   static color buffers for one resolution.
//! - [`PointGrid`] — read access to a square grid of point positions.
//! - Index generators for solid and wireframe rendering.

pub mod generators;
pub mod mesh;
pub mod topology;

pub use mesh::{ClothMesh, Palette, PointGrid};
pub use topology::{SpringKind, SpringOffset, SpringTopology};
