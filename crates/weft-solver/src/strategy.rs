//! Solver strategy trait — the seam between the frame loop and integration.

use weft_contact::Collider;

use crate::cloth::Cloth;

/// Result of one substep.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepResult {
    /// Points found in contact with the collider.
    pub contact_count: u32,
}

/// Trait for substep integrators.
///
/// The frame loop calls `substep` repeatedly:
///
/// ```text
/// for _ in 0..config.substeps() {
///     solver.substep(&mut cloth, &collider);
/// }
/// ```
///
/// A substep cannot fail: every size and parameter was validated when the
/// solver and the cloth were built.
pub trait SolverStrategy: Send {
    /// Advance `cloth` by one fixed timestep.
    fn substep(&mut self, cloth: &mut Cloth, collider: &dyn Collider) -> StepResult;

    /// Fixed timestep in seconds.
    fn dt(&self) -> f32;

    /// Returns the solver's name.
    fn name(&self) -> &str;
}
