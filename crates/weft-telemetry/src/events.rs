//! Simulation event types.
//!
//! Structured events emitted by the driver once per frame and on state
//! changes. Events are small value types carrying just enough data for
//! monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A simulation event emitted by the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationEvent {
    /// Frame number (0-indexed, counted since the driver was built).
    pub frame: u64,
    /// Event payload.
    pub kind: EventKind,
}

/// Why a cloth was put back into its initial configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetCause {
    /// The simulation clock passed the reset time.
    Timeout,
    /// Another instance became active.
    InstanceSwitch,
    /// Requested by the host.
    Manual,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Frame started.
    FrameBegin {
        /// Simulation clock at the start of the frame (seconds).
        sim_time: f64,
    },

    /// Frame completed.
    FrameEnd {
        /// Substeps taken this frame (0 on a reset frame).
        substeps: u32,
        /// Wall-clock time spent advancing the frame (seconds).
        wall_time: f64,
    },

    /// The active cloth was reinitialized.
    Reset {
        resolution: usize,
        cause: ResetCause,
    },

    /// A different cloth instance became active.
    InstanceSwitched { resolution: usize },

    /// Point-substep contacts with the collider during the frame.
    Contacts { count: u32 },

    /// Energy snapshot after the frame.
    Energy {
        /// Kinetic energy (Σ ½ m |v|²).
        kinetic: f64,
        /// Elastic spring energy.
        elastic: f64,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl SimulationEvent {
    /// Creates a new event for the given frame.
    pub fn new(frame: u64, kind: EventKind) -> Self {
        Self { frame, kind }
    }

    /// Creates a [`EventKind::Custom`] event with a JSON-encoded payload.
    pub fn custom<T: Serialize>(
        frame: u64,
        label: impl Into<String>,
        payload: &T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(
            frame,
            EventKind::Custom {
                label: label.into(),
                payload: serde_json::to_string(payload)?,
            },
        ))
    }

    /// Short name of the payload variant.
    pub fn name(&self) -> &'static str {
        match self.kind {
            EventKind::FrameBegin { .. } => "frame_begin",
            EventKind::FrameEnd { .. } => "frame_end",
            EventKind::Reset { .. } => "reset",
            EventKind::InstanceSwitched { .. } => "instance_switched",
            EventKind::Contacts { .. } => "contacts",
            EventKind::Energy { .. } => "energy",
            EventKind::Custom { .. } => "custom",
        }
    }
}
