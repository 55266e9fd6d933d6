//! Grid state — per-point buffers of one cloth.
//!
//! Points are stored row-major: point `(i, j)` lives at `i * resolution + j`.
//! The buffers are allocated once and never resized.

use weft_math::Vec3;
use weft_mesh::PointGrid;
use weft_types::GridCoord;

/// Position and velocity of every grid point.
#[derive(Debug, Clone)]
pub struct GridState {
    resolution: usize,

    /// World-space positions.
    pub position: Vec<Vec3>,

    /// Velocities.
    pub velocity: Vec<Vec3>,

    /// Per-point velocity increments of the spring pass.
    pub(crate) scratch: Vec<Vec3>,
}

impl GridState {
    /// Allocates a `resolution × resolution` grid at the origin, at rest.
    pub fn new(resolution: usize) -> Self {
        let n = resolution * resolution;
        Self {
            resolution,
            position: vec![Vec3::ZERO; n],
            velocity: vec![Vec3::ZERO; n],
            scratch: vec![Vec3::ZERO; n],
        }
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.position.len()
    }

    #[inline]
    pub fn index(&self, i: usize, j: usize) -> usize {
        GridCoord::new(i, j).flat(self.resolution)
    }

    #[inline]
    pub fn position_at(&self, i: usize, j: usize) -> Vec3 {
        self.position[self.index(i, j)]
    }

    #[inline]
    pub fn velocity_at(&self, i: usize, j: usize) -> Vec3 {
        self.velocity[self.index(i, j)]
    }

    /// Overwrites one point.
    pub fn set_point(&mut self, i: usize, j: usize, position: Vec3, velocity: Vec3) {
        let idx = self.index(i, j);
        self.position[idx] = position;
        self.velocity[idx] = velocity;
    }

    /// True if every position and velocity component is finite.
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|p| p.is_finite()) && self.velocity.iter().all(|v| v.is_finite())
    }
}

impl PointGrid for GridState {
    fn resolution(&self) -> usize {
        self.resolution
    }

    fn position(&self, i: usize, j: usize) -> Vec3 {
        self.position_at(i, j)
    }
}
