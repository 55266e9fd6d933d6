//! Symplectic Euler mass-spring integrator.
//!
//! One substep is three sweeps over all points, each finished before the
//! next begins:
//!
//! 1. **Environment** — `v += g·dt`, then `v *= exp(−drag·dt)`
//! 2. **Springs** — Hookean force plus axial damping from every in-bounds
//!    spring neighbor, `v += F/m · dt`
//! 3. **Contact & drift** — clamp inward velocity at the collider, then
//!    `x += v·dt`
//!
//! Within a sweep every point writes only its own slot. The spring sweep
//! reads positions and velocities as left by sweep 1 and stages its
//! increments in a scratch buffer, so no point observes a neighbor that
//! was already updated in the same sweep.

use rayon::prelude::*;
use weft_contact::Collider;
use weft_math::{Direction, Vec3};
use weft_mesh::SpringTopology;
use weft_types::{GridCoord, WeftResult};

use crate::cloth::Cloth;
use crate::config::{ExecutionMode, SolverConfig};
use crate::strategy::{SolverStrategy, StepResult};

/// Explicit mass-spring integrator with exponential drag and velocity-clamp contact.
pub struct SymplecticEuler {
    config: SolverConfig,
}

impl SymplecticEuler {
    /// Creates an integrator after validating `config`.
    pub fn new(config: SolverConfig) -> WeftResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

impl SolverStrategy for SymplecticEuler {
    fn substep(&mut self, cloth: &mut Cloth, collider: &dyn Collider) -> StepResult {
        let mode = self.config.execution;
        let dt = self.config.dt;

        let springs = SpringParams {
            resolution: cloth.resolution(),
            quad_size: cloth.quad_size(),
            stiffness: self.config.stiffness,
            damping: self.config.damping,
            impulse_scale: dt / cloth.mass(),
        };
        let (topology, state) = cloth.parts_mut();

        // ─── Pass 1: environment ───
        let gravity_dv = self.config.gravity_vec() * dt;
        let drag = (-self.config.air_drag * dt).exp();
        sweep(mode, &mut state.velocity, |_, v| {
            *v = (*v + gravity_dv) * drag;
        });

        // ─── Pass 2: springs ───
        {
            let position = &state.position;
            let velocity = &state.velocity;
            sweep(mode, &mut state.scratch, |idx, dv| {
                *dv = springs.velocity_increment(idx, topology, position, velocity);
            });
        }
        let scratch = &state.scratch;
        sweep(mode, &mut state.velocity, |idx, v| {
            *v += scratch[idx];
        });

        // ─── Pass 3: contact, then drift ───
        let contact_count = {
            let position = &state.position;
            sweep_count(mode, &mut state.velocity, |idx, v| {
                collider.constrain_velocity(position[idx], v)
            })
        };
        let velocity = &state.velocity;
        sweep(mode, &mut state.position, |idx, p| {
            *p += dt * velocity[idx];
        });

        tracing::trace!(contact_count, "substep complete");
        StepResult { contact_count }
    }

    fn dt(&self) -> f32 {
        self.config.dt
    }

    fn name(&self) -> &str {
        "symplectic_euler"
    }
}

/// Per-cloth constants of the spring pass.
struct SpringParams {
    resolution: usize,
    quad_size: f32,
    stiffness: f32,
    damping: f32,
    /// `dt / mass`: converts a force into a velocity increment.
    impulse_scale: f32,
}

impl SpringParams {
    /// Velocity increment of point `idx` from all of its springs.
    #[inline]
    fn velocity_increment(
        &self,
        idx: usize,
        topology: &SpringTopology,
        position: &[Vec3],
        velocity: &[Vec3],
    ) -> Vec3 {
        let n = self.resolution;
        let coord = GridCoord::from_flat(idx, n);
        let xi = position[idx];
        let vi = velocity[idx];

        let mut force = Vec3::ZERO;
        for (offset, neighbor) in topology.neighbors(coord, n) {
            let k = neighbor.flat(n);
            let x_ij = xi - position[k];
            let v_ij = vi - velocity[k];

            // Coincident points give a zero direction and no force.
            let e = Direction::of(x_ij);
            let rest = self.quad_size * offset.norm();
            let k_s = self.stiffness * (self.quad_size / rest);

            force += -k_s * e.unit * (e.length - rest);
            force += -self.damping * e.unit * v_ij.dot(e.unit);
        }

        force * self.impulse_scale
    }
}

/// Applies `kernel` to every element, in parallel or in order.
fn sweep<T, F>(mode: ExecutionMode, items: &mut [T], kernel: F)
where
    T: Send,
    F: Fn(usize, &mut T) + Sync + Send,
{
    match mode {
        ExecutionMode::Parallel => items
            .par_iter_mut()
            .enumerate()
            .for_each(|(idx, item)| kernel(idx, item)),
        ExecutionMode::Serial => items
            .iter_mut()
            .enumerate()
            .for_each(|(idx, item)| kernel(idx, item)),
    }
}

/// Like [`sweep`], counting the elements for which `kernel` returns `true`.
fn sweep_count<T, F>(mode: ExecutionMode, items: &mut [T], kernel: F) -> u32
where
    T: Send,
    F: Fn(usize, &mut T) -> bool + Sync + Send,
{
    match mode {
        ExecutionMode::Parallel => items
            .par_iter_mut()
            .enumerate()
            .map(|(idx, item)| u32::from(kernel(idx, item)))
            .sum(),
        ExecutionMode::Serial => items
            .iter_mut()
            .enumerate()
            .map(|(idx, item)| u32::from(kernel(idx, item)))
            .sum(),
    }
}
