//! Simulated time of the active cloth.

/// Seconds of simulated time since the active cloth was last initialized.
///
/// Accumulated in `f64` so thousands of `f32`-sized substeps do not drift.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimulationClock {
    elapsed: f64,
}

impl SimulationClock {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Adds one substep.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += f64::from(dt);
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// True once the clock has run strictly past `limit`.
    pub fn expired(&self, limit: f64) -> bool {
        self.elapsed > limit
    }
}
