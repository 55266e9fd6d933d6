//! Benchmark scenarios: a simulation config plus a frame budget.
//!
//! Two canonical scenarios, each run at any resolution:
//! 1. **Sphere drape** — the sheet falls onto the sphere and settles
//! 2. **Reset cycle** — a short reset time forces repeated reinitialization

use serde::{Deserialize, Serialize};
use weft_driver::SimulationConfig;
use weft_types::constants::REFERENCE_RESOLUTIONS;

/// Seed used by every scenario so runs are comparable.
pub const BENCH_SEED: u64 = 0x5eed;

/// Which benchmark scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenarioKind {
    /// Free fall onto the sphere with the reference reset time.
    SphereDrape,
    /// Reset every quarter second of simulated time.
    ResetCycle,
}

impl ScenarioKind {
    pub fn all() -> &'static [ScenarioKind] {
        &[ScenarioKind::SphereDrape, ScenarioKind::ResetCycle]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::SphereDrape => "sphere_drape",
            ScenarioKind::ResetCycle => "reset_cycle",
        }
    }
}

/// A fully specified benchmark scenario.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub kind: ScenarioKind,
    pub resolution: usize,
    /// Frames to advance.
    pub frames: u64,
    pub config: SimulationConfig,
}

impl Scenario {
    /// One cloth of `resolution` falling onto the default sphere for
    /// 2 seconds of simulated time at 60 frames per second.
    pub fn sphere_drape(resolution: usize) -> Self {
        Self {
            kind: ScenarioKind::SphereDrape,
            resolution,
            frames: 120,
            config: SimulationConfig::single(resolution).with_seed(BENCH_SEED),
        }
    }

    /// Like [`sphere_drape`](Self::sphere_drape), resetting every 0.25 s.
    pub fn reset_cycle(resolution: usize) -> Self {
        let mut config = SimulationConfig::single(resolution).with_seed(BENCH_SEED);
        config.solver.reset_time = 0.25;
        Self {
            kind: ScenarioKind::ResetCycle,
            resolution,
            frames: 120,
            config,
        }
    }

    pub fn from_kind(kind: ScenarioKind, resolution: usize) -> Self {
        match kind {
            ScenarioKind::SphereDrape => Self::sphere_drape(resolution),
            ScenarioKind::ResetCycle => Self::reset_cycle(resolution),
        }
    }

    /// `kind` at every reference resolution (8, 24, 64, 256).
    pub fn reference_set(kind: ScenarioKind) -> Vec<Self> {
        REFERENCE_RESOLUTIONS
            .into_iter()
            .map(|resolution| Self::from_kind(kind, resolution))
            .collect()
    }

    pub fn with_frames(mut self, frames: u64) -> Self {
        self.frames = frames;
        self
    }

    /// Label used in reports, e.g. `sphere_drape_64`.
    pub fn label(&self) -> String {
        format!("{}_{}", self.kind.name(), self.resolution)
    }
}
