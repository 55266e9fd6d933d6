//! # weft-telemetry
//!
//! Event bus for simulation telemetry. The driver emits structured events
//! (frame timing, resets, instance switches, contacts, energy) that are
//! consumed by pluggable sinks.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, ResetCause, SimulationEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
