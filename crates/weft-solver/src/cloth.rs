//! Cloth instance and its initializer.
//!
//! A [`Cloth`] owns its grid state exclusively. Resetting rewrites every
//! position and velocity in place; the topology and buffers are untouched.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use weft_math::{Vec2, Vec3};
use weft_mesh::SpringTopology;
use weft_types::{GridCoord, WeftResult};

use crate::config::ClothConfig;
use crate::state::GridState;

/// One independently configured cloth sheet.
pub struct Cloth {
    config: ClothConfig,
    quad_size: f32,
    state: GridState,
    topology: Arc<SpringTopology>,
    rng: StdRng,
}

impl Cloth {
    /// Builds a cloth and seeds it to a flat sheet.
    ///
    /// With `seed = None` the jitter RNG is seeded from entropy.
    pub fn new(
        config: ClothConfig,
        topology: Arc<SpringTopology>,
        seed: Option<u64>,
    ) -> WeftResult<Self> {
        config.validate()?;

        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let mut cloth = Self {
            quad_size: config.quad_size(),
            state: GridState::new(config.resolution),
            config,
            topology,
            rng,
        };
        cloth.initialize();

        tracing::debug!(
            resolution = cloth.resolution(),
            quad_size = cloth.quad_size,
            springs = cloth.topology.active_pair_count(cloth.resolution()) / 2,
            "cloth created"
        );
        Ok(cloth)
    }

    /// Reseeds the sheet with a fresh random jitter.
    ///
    /// Returns the jitter that was applied.
    pub fn initialize(&mut self) -> Vec2 {
        let jitter = Vec2::new(self.rng.gen::<f32>() - 0.5, self.rng.gen::<f32>() - 0.5)
            * self.config.jitter;
        self.initialize_with(jitter);
        jitter
    }

    /// Lays the sheet flat at `height`, shifted horizontally by `jitter`, at rest.
    ///
    /// ```text
    /// position(i, j) = (i·q − L/2 + jitter.x, height, j·q − L/2 + jitter.y)
    /// ```
    pub fn initialize_with(&mut self, jitter: Vec2) {
        let n = self.config.resolution;
        let q = self.quad_size;
        let half = self.config.length / 2.0;
        let height = self.config.height;

        self.state
            .position
            .par_iter_mut()
            .zip(self.state.velocity.par_iter_mut())
            .enumerate()
            .for_each(|(idx, (p, v))| {
                let c = GridCoord::from_flat(idx, n);
                *p = Vec3::new(
                    c.i as f32 * q - half + jitter.x,
                    height,
                    c.j as f32 * q - half + jitter.y,
                );
                *v = Vec3::ZERO;
            });
    }

    /// Restarts the jitter stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    #[inline]
    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    #[inline]
    pub fn resolution(&self) -> usize {
        self.config.resolution
    }

    #[inline]
    pub fn quad_size(&self) -> f32 {
        self.quad_size
    }

    #[inline]
    pub fn mass(&self) -> f32 {
        self.config.mass
    }

    #[inline]
    pub fn topology(&self) -> &SpringTopology {
        &self.topology
    }

    #[inline]
    pub fn state(&self) -> &GridState {
        &self.state
    }

    #[inline]
    pub fn state_mut(&mut self) -> &mut GridState {
        &mut self.state
    }

    /// Shared topology and mutable state, borrowed together.
    pub(crate) fn parts_mut(&mut self) -> (&SpringTopology, &mut GridState) {
        (&self.topology, &mut self.state)
    }
}
