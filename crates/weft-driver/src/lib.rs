//! # weft-driver
//!
//! The frame loop of the cloth simulation.
//!
//! [`SimulationDriver`] owns the reference set of cloth instances, the
//! simulation clock of the active one, the integrator and the collider.
//! Once per frame it either resets the active cloth (when the clock has
//! passed the reset time) or advances it by `floor(frame_interval / dt)`
//! substeps, then extracts the render vertices.
//!
//! Host input arrives as key presses, mapped by [`KeyBindings`] to
//! [`InputEvent`]s that select an instance, toggle wireframe display, or
//! request quit.

pub mod clock;
pub mod config;
pub mod driver;
pub mod input;
pub mod instance;

pub use clock::SimulationClock;
pub use config::SimulationConfig;
pub use driver::{ControlFlow, FrameOutcome, FrameReport, RunSummary, SimulationDriver};
pub use input::{InputEvent, KeyBindings, SelectBinding};
pub use instance::ClothInstance;
