//! Whole-simulation configuration, loadable from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};
use weft_contact::ColliderConfig;
use weft_solver::{ClothConfig, SolverConfig};
use weft_types::constants::REFERENCE_RESOLUTIONS;
use weft_types::{WeftError, WeftResult};

use crate::input::KeyBindings;

/// Everything the driver needs at construction.
///
/// ```toml
/// seed = 7
///
/// [solver]
/// stiffness = 1000000.0
/// dt = 0.0002
///
/// [[cloths]]
/// resolution = 8
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Base RNG seed. Cloth `k` draws its jitter from `seed + k`.
    /// Without a seed every cloth is seeded from entropy.
    pub seed: Option<u64>,
    /// Resolution of the cloth active at startup. Defaults to the first cloth.
    pub initial_resolution: Option<usize>,
    pub solver: SolverConfig,
    pub collider: ColliderConfig,
    pub keys: KeyBindings,
    /// One entry per coexisting cloth instance.
    pub cloths: Vec<ClothConfig>,
}

impl Default for SimulationConfig {
    /// The reference set: four cloths of resolution 8, 24, 64 and 256.
    fn default() -> Self {
        Self {
            seed: None,
            initial_resolution: None,
            solver: SolverConfig::default(),
            collider: ColliderConfig::default(),
            keys: KeyBindings::default(),
            cloths: REFERENCE_RESOLUTIONS
                .into_iter()
                .map(ClothConfig::with_resolution)
                .collect(),
        }
    }
}

impl SimulationConfig {
    /// A single-cloth setup, handy for benchmarks and tests.
    pub fn single(resolution: usize) -> Self {
        let mut keys = KeyBindings::default();
        keys.select.retain(|binding| binding.resolution == resolution);
        Self {
            keys,
            cloths: vec![ClothConfig::with_resolution(resolution)],
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn from_toml_str(source: &str) -> WeftResult<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| WeftError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> WeftResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    pub fn to_toml_string(&self) -> WeftResult<String> {
        toml::to_string(self).map_err(|e| WeftError::Serialization(e.to_string()))
    }

    /// Resolution the driver starts on.
    pub fn startup_resolution(&self) -> Option<usize> {
        self.initial_resolution
            .or_else(|| self.cloths.first().map(|c| c.resolution))
    }

    /// Validates every section and their cross-references.
    pub fn validate(&self) -> WeftResult<()> {
        self.solver.validate()?;
        self.collider.validate()?;
        self.keys.validate()?;

        if self.cloths.is_empty() {
            return Err(WeftError::InvalidConfig(
                "At least one cloth is required".into(),
            ));
        }
        for (n, cloth) in self.cloths.iter().enumerate() {
            cloth.validate()?;
            if self.cloths[..n].iter().any(|c| c.resolution == cloth.resolution) {
                return Err(WeftError::InvalidConfig(format!(
                    "Duplicate cloth resolution {}",
                    cloth.resolution
                )));
            }
        }

        let known = |resolution: usize| self.cloths.iter().any(|c| c.resolution == resolution);
        if let Some(binding) = self.keys.select.iter().find(|b| !known(b.resolution)) {
            return Err(WeftError::UnknownInstance {
                resolution: binding.resolution,
            });
        }
        if let Some(resolution) = self.initial_resolution.filter(|r| !known(*r)) {
            return Err(WeftError::UnknownInstance { resolution });
        }
        Ok(())
    }
}
