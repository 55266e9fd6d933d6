//! Reference configuration values.
//!
//! These are the defaults the configuration structs fall back to. Nothing
//! in the simulation reads them directly; every tunable travels through an
//! explicit config value.

/// Gravitational acceleration (m/s²), applied along −Y.
pub const GRAVITY: f32 = 9.8;

/// Integration substep (seconds).
pub const DEFAULT_DT: f32 = 1.0 / 5000.0;

/// Visual frame interval (seconds). One frame = `floor(FRAME_INTERVAL / dt)` substeps.
pub const FRAME_INTERVAL: f32 = 1.0 / 60.0;

/// Hookean spring constant for structural springs.
pub const DEFAULT_STIFFNESS: f32 = 1.0e6;

/// Spring damping coefficient, shared by all spring classes.
pub const DEFAULT_DAMPING: f32 = 1.0e2;

/// Exponential air-drag rate (1/s).
pub const DEFAULT_AIR_DRAG: f32 = 1.0;

/// Simulated seconds before the active cloth is reseeded.
pub const DEFAULT_RESET_TIME: f64 = 2.0;

/// Point mass (kg).
pub const DEFAULT_POINT_MASS: f32 = 1.0;

/// Side length of the square sheet (m).
pub const DEFAULT_SHEET_LENGTH: f32 = 1.25;

/// Height of the flat sheet at (re)initialization (m).
pub const DEFAULT_SHEET_HEIGHT: f32 = 0.6;

/// Scale applied to the uniform [−0.5, 0.5] jitter drawn on each reset.
pub const DEFAULT_JITTER_SCALE: f32 = 0.1;

/// Radius of the reference sphere collider (m).
pub const DEFAULT_COLLIDER_RADIUS: f32 = 0.3;

/// Resolutions of the four reference cloth instances.
pub const REFERENCE_RESOLUTIONS: [usize; 4] = [8, 24, 64, 256];

/// Below this length a displacement has no usable direction.
pub const EPSILON: f32 = 1.0e-7;
