//! Render-side view of a cloth.
//!
//! [`ClothMesh`] owns the flat vertex buffer the renderer consumes, plus
//! the index and color buffers that never change after construction.
//! Only [`ClothMesh::extract_vertices`] runs per frame.

use rayon::prelude::*;
use weft_math::Vec3;
use weft_types::{WeftError, WeftResult};

use crate::generators::{triangle_indices, wireframe_indices};

/// Read access to a square grid of point positions.
///
/// Implemented by the solver's grid state; lets the mesh flatten a grid
/// without depending on the solver.
pub trait PointGrid: Sync {
    /// Points per side.
    fn resolution(&self) -> usize;

    /// World-space position of point `(i, j)`.
    fn position(&self, i: usize, j: usize) -> Vec3;
}

/// Static colors handed to the renderer.
pub struct Palette;

impl Palette {
    /// Solid sheet (slate blue).
    pub const SOLID: [f32; 3] = [106.0 / 255.0, 90.0 / 255.0, 205.0 / 255.0];
    /// Wireframe lines.
    pub const WIREFRAME: [f32; 3] = [1.0, 0.0, 0.0];
    /// Collider sphere (royal blue).
    pub const COLLIDER: [f32; 3] = [65.0 / 255.0, 105.0 / 255.0, 225.0 / 255.0];
}

/// Vertex, index and color buffers for one cloth resolution.
#[derive(Debug, Clone)]
pub struct ClothMesh {
    resolution: usize,
    /// Flattened positions, `vertices[i * resolution + j] = position(i, j)`.
    vertices: Vec<Vec3>,
    /// Two triangles per grid cell.
    triangle_indices: Vec<u32>,
    /// Six edges per grid cell.
    wireframe_indices: Vec<u32>,
    solid_colors: Vec<[f32; 3]>,
    wireframe_colors: Vec<[f32; 3]>,
}

impl ClothMesh {
    /// Allocates all buffers for a `resolution × resolution` grid.
    ///
    /// Vertices start at the origin until the first extraction.
    pub fn new(resolution: usize) -> WeftResult<Self> {
        if resolution < 2 {
            return Err(WeftError::InvalidResolution { resolution });
        }
        let n = resolution * resolution;

        let mesh = Self {
            resolution,
            vertices: vec![Vec3::ZERO; n],
            triangle_indices: triangle_indices(resolution),
            wireframe_indices: wireframe_indices(resolution),
            solid_colors: vec![Palette::SOLID; n],
            wireframe_colors: vec![Palette::WIREFRAME; n],
        };
        mesh.validate()?;

        tracing::debug!(
            resolution,
            vertices = n,
            triangles = mesh.triangle_count(),
            "cloth mesh buffers built"
        );
        Ok(mesh)
    }

    /// Copies every grid position into the flat vertex buffer.
    ///
    /// Rows are written in parallel; each worker owns one row slice.
    pub fn extract_vertices<G: PointGrid + ?Sized>(&mut self, grid: &G) {
        let n = self.resolution;
        debug_assert_eq!(grid.resolution(), n, "grid/mesh resolution mismatch");

        self.vertices
            .par_chunks_mut(n)
            .enumerate()
            .for_each(|(i, row)| {
                for (j, v) in row.iter_mut().enumerate() {
                    *v = grid.position(i, j);
                }
            });
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangle_indices.len() / 3
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.wireframe_indices.len() / 2
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// The vertex buffer as tightly packed `[x0, y0, z0, x1, ...]`.
    #[inline]
    pub fn vertex_data(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    #[inline]
    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangle_indices
    }

    #[inline]
    pub fn wireframe_indices(&self) -> &[u32] {
        &self.wireframe_indices
    }

    #[inline]
    pub fn solid_colors(&self) -> &[[f32; 3]] {
        &self.solid_colors
    }

    #[inline]
    pub fn wireframe_colors(&self) -> &[[f32; 3]] {
        &self.wireframe_colors
    }

    /// Checks buffer sizes and that every index addresses a vertex.
    pub fn validate(&self) -> WeftResult<()> {
        let n = self.vertices.len();

        if self.solid_colors.len() != n || self.wireframe_colors.len() != n {
            return Err(WeftError::InvalidConfig(
                "Color buffers do not match vertex count".into(),
            ));
        }
        if self.triangle_indices.len() % 3 != 0 {
            return Err(WeftError::InvalidConfig(
                "Triangle index count is not divisible by 3".into(),
            ));
        }
        if self.wireframe_indices.len() % 2 != 0 {
            return Err(WeftError::InvalidConfig(
                "Wireframe index count is not divisible by 2".into(),
            ));
        }

        let mut all = self.triangle_indices.iter().chain(&self.wireframe_indices);
        if let Some(&idx) = all.find(|&&idx| idx as usize >= n) {
            return Err(WeftError::InvalidConfig(format!(
                "Index {} is out of range (vertex count: {})",
                idx, n
            )));
        }

        Ok(())
    }
}
