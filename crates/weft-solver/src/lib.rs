//! # weft-solver
//!
//! Cloth state, (re)initialization, and time integration.
//!
//! ## Key Types
//!
//! - [`GridState`] — per-point position/velocity buffers of one cloth
//! - [`Cloth`] — a cloth instance: resolution, rest spacing, mass, state,
//!   shared spring topology and its own jitter RNG
//! - [`SolverStrategy`] — pluggable substep integrator
//! - [`SymplecticEuler`] — explicit mass-spring integrator with exponential
//!   air drag and sphere contact
//! - [`SolverConfig`] / [`ClothConfig`] — explicit, immutable tunables
//! - [`energy`] — kinetic and elastic energy diagnostics
//!
//! ## Stability
//!
//! The integrator is explicit. Stiff springs need a small `dt`; nothing
//! adapts it at runtime. Configure `dt` against stiffness, damping and mass
//! so that `dt * sqrt(stiffness / mass)` stays well below 1.

pub mod cloth;
pub mod config;
pub mod energy;
pub mod integrator;
pub mod state;
pub mod strategy;

pub use cloth::Cloth;
pub use config::{ClothConfig, ExecutionMode, SolverConfig};
pub use energy::EnergyReport;
pub use integrator::SymplecticEuler;
pub use state::GridState;
pub use strategy::{SolverStrategy, StepResult};
