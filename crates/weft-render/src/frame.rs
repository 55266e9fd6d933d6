//! Per-frame render view.
//!
//! A [`RenderFrame`] borrows the extracted vertex buffer and the static
//! index and color buffers of one [`ClothMesh`]. Which index and color
//! buffers it exposes depends on the [`DisplayMode`].

use serde::{Deserialize, Serialize};
use weft_math::Vec3;
use weft_mesh::{ClothMesh, Palette};

/// Draw scale of the collider sphere relative to its physical radius.
pub const COLLIDER_DRAW_SCALE: f32 = 0.95;

/// How the active cloth is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Filled triangles.
    #[default]
    Solid,
    /// Points joined by the spring skeleton lines.
    Wireframe,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Solid => Self::Wireframe,
            Self::Wireframe => Self::Solid,
        }
    }
}

/// Primitive type of the frame's index buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Index triples.
    Triangles,
    /// Index pairs.
    Lines,
}

/// Point and line sizes for wireframe display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireframeStyle {
    pub point_radius: f32,
    pub line_width: f32,
}

impl WireframeStyle {
    /// Sizes shrink with resolution: `0.1 / n` and `50 / n`.
    pub fn for_resolution(resolution: usize) -> Self {
        let n = resolution.max(1) as f32;
        Self {
            point_radius: 0.1 / n,
            line_width: 50.0 / n,
        }
    }
}

/// The collider as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderView {
    pub center: Vec3,
    /// Draw radius, slightly inside the physical one.
    pub radius: f32,
    pub color: [f32; 3],
}

impl ColliderView {
    /// View of a sphere with the given physical radius.
    pub fn sphere(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius * COLLIDER_DRAW_SCALE,
            color: Palette::COLLIDER,
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderFrame<'a> {
    /// Frame number since the driver was built.
    pub frame: u64,
    pub resolution: usize,
    pub mode: DisplayMode,
    /// Vertex positions, row-major `(i, j)`.
    pub vertices: &'a [Vec3],
    /// The same positions as a flat `[x0, y0, z0, x1, ...]` slice.
    pub vertex_data: &'a [f32],
    /// Triangle or line indices, per [`primitive`](Self::primitive).
    pub indices: &'a [u32],
    /// One RGB color per vertex.
    pub colors: &'a [[f32; 3]],
    pub collider: ColliderView,
    /// Present in wireframe mode only.
    pub wireframe: Option<WireframeStyle>,
}

impl<'a> RenderFrame<'a> {
    /// Builds the view of `mesh` for `mode`.
    pub fn from_mesh(
        frame: u64,
        mesh: &'a ClothMesh,
        mode: DisplayMode,
        collider: ColliderView,
    ) -> Self {
        let (indices, colors, wireframe) = match mode {
            DisplayMode::Solid => (mesh.triangle_indices(), mesh.solid_colors(), None),
            DisplayMode::Wireframe => (
                mesh.wireframe_indices(),
                mesh.wireframe_colors(),
                Some(WireframeStyle::for_resolution(mesh.resolution())),
            ),
        };
        Self {
            frame,
            resolution: mesh.resolution(),
            mode,
            vertices: mesh.vertices(),
            vertex_data: mesh.vertex_data(),
            indices,
            colors,
            collider,
            wireframe,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn primitive(&self) -> Primitive {
        match self.mode {
            DisplayMode::Solid => Primitive::Triangles,
            DisplayMode::Wireframe => Primitive::Lines,
        }
    }

    /// Number of triangles or lines in the index buffer.
    pub fn primitive_count(&self) -> usize {
        match self.primitive() {
            Primitive::Triangles => self.indices.len() / 3,
            Primitive::Lines => self.indices.len() / 2,
        }
    }

    /// Axis-aligned bounds of the vertices, or `None` for an empty frame.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(lo, hi), v| (lo.min(*v), hi.max(*v))),
        )
    }
}
