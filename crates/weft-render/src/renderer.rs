//! Renderer trait and HeadlessRenderer.
//!
//! The renderer is called once per frame to present the active cloth.
//! The headless renderer only keeps counts, serving benchmarks and CI.

use weft_mesh::ClothMesh;
use weft_types::WeftResult;

use crate::frame::{Primitive, RenderFrame};

/// Trait for rendering simulation output.
pub trait Renderer: Send {
    /// Initialize the renderer with the mesh of the active cloth.
    ///
    /// Called once before the first frame. Hosts that switch the active
    /// instance call it again with the new mesh.
    fn init(&mut self, mesh: &ClothMesh) -> WeftResult<()>;

    /// Submit a frame for rendering.
    fn submit_frame(&mut self, frame: &RenderFrame<'_>) -> WeftResult<()>;

    /// Finalize rendering (flush buffers, close windows, etc.).
    fn finalize(&mut self) -> WeftResult<()>;

    /// Returns the renderer name.
    fn name(&self) -> &str;

    /// Returns the number of frames submitted.
    fn frame_count(&self) -> u64;
}

/// Headless renderer: counts frames and primitives, draws nothing.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u64,
    triangles: u64,
    lines: u64,
    last_vertex_count: usize,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangles submitted across all solid frames.
    pub fn triangles_submitted(&self) -> u64 {
        self.triangles
    }

    /// Lines submitted across all wireframe frames.
    pub fn lines_submitted(&self) -> u64 {
        self.lines
    }

    /// Vertex count of the most recent frame (or of the mesh given to `init`).
    pub fn last_vertex_count(&self) -> usize {
        self.last_vertex_count
    }
}

impl Renderer for HeadlessRenderer {
    fn init(&mut self, mesh: &ClothMesh) -> WeftResult<()> {
        mesh.validate()?;
        self.last_vertex_count = mesh.vertex_count();
        tracing::debug!(resolution = mesh.resolution(), "headless renderer initialized");
        Ok(())
    }

    fn submit_frame(&mut self, frame: &RenderFrame<'_>) -> WeftResult<()> {
        self.frames += 1;
        self.last_vertex_count = frame.vertex_count();
        let count = frame.primitive_count() as u64;
        match frame.primitive() {
            Primitive::Triangles => self.triangles += count,
            Primitive::Lines => self.lines += count,
        }
        Ok(())
    }

    fn finalize(&mut self) -> WeftResult<()> {
        tracing::debug!(frames = self.frames, "headless renderer finalized");
        Ok(())
    }

    fn name(&self) -> &str {
        "headless"
    }

    fn frame_count(&self) -> u64 {
        self.frames
    }
}
