//! Energy diagnostics.
//!
//! Used to check that spring damping only ever removes energy, and
//! reported through telemetry. Accumulated in `f64`.

use weft_math::Direction;
use weft_types::GridCoord;

use crate::cloth::Cloth;

/// Kinetic and elastic energy of one cloth.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyReport {
    /// `½ Σ m |v|²`.
    pub kinetic: f64,
    /// `½ Σ k_s (|x_ij| − rest)²` over every spring, each counted once.
    pub elastic: f64,
}

impl EnergyReport {
    /// Measures `cloth` with spring constant `stiffness`.
    pub fn measure(cloth: &Cloth, stiffness: f32) -> Self {
        Self {
            kinetic: kinetic_energy(cloth),
            elastic: elastic_energy(cloth, stiffness),
        }
    }

    pub fn total(&self) -> f64 {
        self.kinetic + self.elastic
    }
}

/// Compute total kinetic energy: 0.5 * Σ m * ||v_i||².
pub fn kinetic_energy(cloth: &Cloth) -> f64 {
    let m = cloth.mass() as f64;
    cloth
        .state()
        .velocity
        .iter()
        .map(|v| 0.5 * m * v.as_dvec3().length_squared())
        .sum()
}

/// Elastic potential stored in all springs.
///
/// Every spring is seen from both endpoints, so the per-point sum is halved.
pub fn elastic_energy(cloth: &Cloth, stiffness: f32) -> f64 {
    let state = cloth.state();
    let n = cloth.resolution();
    let q = cloth.quad_size() as f64;

    let mut energy = 0.0f64;
    for (idx, &xi) in state.position.iter().enumerate() {
        let coord = GridCoord::from_flat(idx, n);
        for (offset, neighbor) in cloth.topology().neighbors(coord, n) {
            let len = Direction::of(xi - state.position[neighbor.flat(n)]).length as f64;
            let rest = q * offset.norm() as f64;
            let k_s = stiffness as f64 * (q / rest);
            energy += 0.5 * k_s * (len - rest) * (len - rest);
        }
    }
    0.5 * energy
}
