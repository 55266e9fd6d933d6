//! Solver and cloth configuration.
//!
//! Every tunable of the simulation lives here and is handed to the
//! integrator or the cloth at construction. Nothing is global, so
//! differently tuned cloths can run side by side.

use serde::{Deserialize, Serialize};
use weft_math::Vec3;
use weft_types::constants::{
    DEFAULT_AIR_DRAG, DEFAULT_DAMPING, DEFAULT_DT, DEFAULT_JITTER_SCALE, DEFAULT_POINT_MASS,
    DEFAULT_RESET_TIME, DEFAULT_SHEET_HEIGHT, DEFAULT_SHEET_LENGTH, DEFAULT_STIFFNESS,
    FRAME_INTERVAL, GRAVITY,
};
use weft_types::{WeftError, WeftResult};

/// How the per-point sweeps are executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// Rayon `par_iter_mut` sweeps.
    #[default]
    Parallel,
    /// Single-threaded reference sweeps.
    Serial,
}

/// Configuration for the integrator and the frame loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Structural spring constant. Longer springs are scaled by
    /// `1 / |offset|` so all classes resist strain alike.
    pub stiffness: f32,

    /// Damping coefficient along each spring axis.
    pub damping: f32,

    /// Gravity vector [gx, gy, gz] in m/s².
    pub gravity: [f32; 3],

    /// Air drag rate. Velocity decays by `exp(-air_drag * dt)` per substep.
    pub air_drag: f32,

    /// Substep length in seconds.
    pub dt: f32,

    /// Simulated time covered by one rendered frame.
    pub frame_interval: f32,

    /// Simulated seconds after which the active cloth is reseeded.
    pub reset_time: f64,

    /// Parallel or serial sweeps.
    pub execution: ExecutionMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
            gravity: [0.0, -GRAVITY, 0.0],
            air_drag: DEFAULT_AIR_DRAG,
            dt: DEFAULT_DT,
            frame_interval: FRAME_INTERVAL,
            reset_time: DEFAULT_RESET_TIME,
            execution: ExecutionMode::Parallel,
        }
    }
}

impl SolverConfig {
    /// Springs only: no gravity, no air drag.
    pub fn springs_only() -> Self {
        Self {
            gravity: [0.0; 3],
            air_drag: 0.0,
            ..Default::default()
        }
    }

    /// Substeps per rendered frame, `floor(frame_interval / dt)`.
    pub fn substeps(&self) -> u32 {
        (self.frame_interval / self.dt).floor() as u32
    }

    #[inline]
    pub fn gravity_vec(&self) -> Vec3 {
        Vec3::from_array(self.gravity)
    }

    /// Checks every construction-time precondition.
    pub fn validate(&self) -> WeftResult<()> {
        non_negative("stiffness", self.stiffness)?;
        non_negative("damping", self.damping)?;
        non_negative("air_drag", self.air_drag)?;
        positive("dt", self.dt)?;
        positive("frame_interval", self.frame_interval)?;

        if !self.gravity.iter().all(|g| g.is_finite()) {
            return Err(WeftError::InvalidConfig(format!(
                "gravity must be finite, got {:?}",
                self.gravity
            )));
        }
        if !(self.reset_time.is_finite() && self.reset_time > 0.0) {
            return Err(WeftError::InvalidConfig(format!(
                "reset_time must be positive, got {}",
                self.reset_time
            )));
        }
        if self.substeps() == 0 {
            return Err(WeftError::InvalidConfig(format!(
                "frame_interval ({}) is shorter than dt ({}); a frame would run no substeps",
                self.frame_interval, self.dt
            )));
        }
        Ok(())
    }
}

/// Configuration for one cloth instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothConfig {
    /// Mass of every point (kg).
    pub mass: f32,
    /// Points per side.
    pub resolution: usize,
    /// Side length of the sheet (m).
    pub length: f32,
    /// Height of the sheet after (re)initialization (m).
    pub height: f32,
    /// Scale of the uniform [−0.5, 0.5] horizontal jitter drawn per reset.
    pub jitter: f32,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            mass: DEFAULT_POINT_MASS,
            resolution: 8,
            length: DEFAULT_SHEET_LENGTH,
            height: DEFAULT_SHEET_HEIGHT,
            jitter: DEFAULT_JITTER_SCALE,
        }
    }
}

impl ClothConfig {
    /// Reference cloth at the given resolution.
    pub fn with_resolution(resolution: usize) -> Self {
        Self {
            resolution,
            ..Default::default()
        }
    }

    /// Rest spacing between neighboring points, `length / (resolution − 1)`.
    pub fn quad_size(&self) -> f32 {
        self.length / self.resolution.saturating_sub(1).max(1) as f32
    }

    pub fn validate(&self) -> WeftResult<()> {
        if self.resolution < 2 {
            return Err(WeftError::InvalidResolution {
                resolution: self.resolution,
            });
        }
        positive("mass", self.mass)?;
        positive("length", self.length)?;
        non_negative("jitter", self.jitter)?;
        if !self.height.is_finite() {
            return Err(WeftError::InvalidConfig(format!(
                "height must be finite, got {}",
                self.height
            )));
        }
        Ok(())
    }
}

fn positive(name: &str, value: f32) -> WeftResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WeftError::InvalidConfig(format!(
            "{name} must be positive, got {value}"
        )))
    }
}

fn non_negative(name: &str, value: f32) -> WeftResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(WeftError::InvalidConfig(format!(
            "{name} must be non-negative, got {value}"
        )))
    }
}
