//! One cloth together with its render buffers.

use std::sync::Arc;

use weft_mesh::{ClothMesh, SpringTopology};
use weft_solver::{Cloth, ClothConfig};
use weft_types::WeftResult;

/// A cloth instance: simulation state plus the mesh it is drawn with.
pub struct ClothInstance {
    cloth: Cloth,
    mesh: ClothMesh,
}

impl ClothInstance {
    /// Builds and initializes the cloth, then fills the vertex buffer.
    pub fn new(
        config: ClothConfig,
        topology: Arc<SpringTopology>,
        seed: Option<u64>,
    ) -> WeftResult<Self> {
        let cloth = Cloth::new(config, topology, seed)?;
        let mesh = ClothMesh::new(cloth.resolution())?;
        let mut instance = Self { cloth, mesh };
        instance.extract();
        Ok(instance)
    }

    /// Puts the cloth back into a freshly jittered flat sheet.
    pub fn reinitialize(&mut self) {
        self.cloth.initialize();
        self.extract();
    }

    /// Copies current positions into the vertex buffer.
    pub fn extract(&mut self) {
        self.mesh.extract_vertices(self.cloth.state());
    }

    pub fn resolution(&self) -> usize {
        self.cloth.resolution()
    }

    pub fn cloth(&self) -> &Cloth {
        &self.cloth
    }

    pub fn cloth_mut(&mut self) -> &mut Cloth {
        &mut self.cloth
    }

    pub fn mesh(&self) -> &ClothMesh {
        &self.mesh
    }
}
