//! The simulation driver: clock, reset policy, instance selection.
//!
//! Each frame is one of two transitions:
//!
//! - **Reset**: the clock has run past `reset_time`, so the active cloth is
//!   reinitialized and the clock restarts at zero. No substeps are taken.
//! - **Step**: `substeps` integrator calls, each advancing the clock by `dt`.
//!
//! Either way the vertex buffer is extracted once at the end of the frame.
//! Idle instances keep their state; selecting one reinitializes it.

use std::sync::Arc;
use std::time::Instant;

use weft_contact::SphereCollider;
use weft_mesh::SpringTopology;
use weft_render::{ColliderView, DisplayMode, RenderFrame, Renderer};
use weft_solver::{EnergyReport, SolverStrategy, SymplecticEuler};
use weft_telemetry::{EventBus, EventKind, ResetCause, SimulationEvent, TracingSink};
use weft_types::{InstanceId, WeftError, WeftResult};

use crate::clock::SimulationClock;
use crate::config::SimulationConfig;
use crate::input::InputEvent;
use crate::instance::ClothInstance;

/// Whether the host loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// What a frame did to the active cloth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Stepped { substeps: u32 },
    Reset,
}

/// Per-frame summary returned by [`SimulationDriver::advance_frame`].
#[derive(Debug, Clone, Copy)]
pub struct FrameReport {
    pub frame: u64,
    pub resolution: usize,
    pub outcome: FrameOutcome,
    /// Clock of the active cloth after the frame.
    pub sim_time: f64,
    /// Point-substep contacts with the collider.
    pub contacts: u32,
    pub energy: EnergyReport,
    /// Wall-clock seconds spent in the frame.
    pub wall_time: f64,
}

impl FrameReport {
    pub fn substeps(&self) -> u32 {
        match self.outcome {
            FrameOutcome::Stepped { substeps } => substeps,
            FrameOutcome::Reset => 0,
        }
    }

    pub fn is_reset(&self) -> bool {
        self.outcome == FrameOutcome::Reset
    }
}

/// Totals over a [`SimulationDriver::run`].
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub resolution: usize,
    pub frames: u64,
    pub resets: u32,
    pub substeps: u64,
    pub contacts: u64,
    /// Wall-clock seconds across all frames.
    pub wall_time: f64,
    pub final_energy: EnergyReport,
}

impl RunSummary {
    pub fn avg_frame_time(&self) -> f64 {
        if self.frames == 0 {
            0.0
        } else {
            self.wall_time / self.frames as f64
        }
    }
}

/// Owns every cloth instance and advances the active one frame by frame.
pub struct SimulationDriver {
    config: SimulationConfig,
    instances: Vec<ClothInstance>,
    active: InstanceId,
    clock: SimulationClock,
    display: DisplayMode,
    integrator: SymplecticEuler,
    collider: SphereCollider,
    substeps: u32,
    bus: EventBus,
    frame: u64,
}

impl SimulationDriver {
    /// Validates `config` and builds every cloth instance.
    ///
    /// Events are logged through a [`TracingSink`]; more sinks can be added
    /// with [`bus_mut`](Self::bus_mut).
    pub fn new(config: SimulationConfig) -> WeftResult<Self> {
        config.validate()?;

        let topology = Arc::new(SpringTopology::build());
        let instances = config
            .cloths
            .iter()
            .enumerate()
            .map(|(k, cloth)| {
                let seed = config.seed.map(|s| s.wrapping_add(k as u64));
                ClothInstance::new(cloth.clone(), Arc::clone(&topology), seed)
            })
            .collect::<WeftResult<Vec<_>>>()?;

        let startup = config
            .startup_resolution()
            .ok_or_else(|| WeftError::InvalidConfig("At least one cloth is required".into()))?;
        let active = find_instance(&instances, startup)?;

        let integrator = SymplecticEuler::new(config.solver.clone())?;
        let collider = config.collider.build()?;
        let substeps = config.solver.substeps();

        tracing::debug!(
            instances = instances.len(),
            active = startup,
            substeps,
            "simulation driver built"
        );

        Ok(Self {
            instances,
            active,
            clock: SimulationClock::new(),
            display: DisplayMode::default(),
            integrator,
            collider,
            substeps,
            bus: EventBus::new().with_sink(Box::new(TracingSink::new())),
            frame: 0,
            config,
        })
    }

    /// Advances the active cloth by one frame.
    pub fn advance_frame(&mut self) -> FrameReport {
        let start = Instant::now();
        let frame = self.frame;
        self.bus.emit(SimulationEvent::new(
            frame,
            EventKind::FrameBegin {
                sim_time: self.clock.elapsed(),
            },
        ));

        let mut contacts = 0;
        let outcome = if self.clock.expired(self.config.solver.reset_time) {
            self.reset(ResetCause::Timeout);
            FrameOutcome::Reset
        } else {
            let dt = self.integrator.dt();
            let instance = &mut self.instances[self.active.index()];
            for _ in 0..self.substeps {
                contacts += self
                    .integrator
                    .substep(instance.cloth_mut(), &self.collider)
                    .contact_count;
                self.clock.advance(dt);
            }
            instance.extract();
            FrameOutcome::Stepped {
                substeps: self.substeps,
            }
        };

        let wall_time = start.elapsed().as_secs_f64();
        let instance = self.active();
        let energy = EnergyReport::measure(instance.cloth(), self.config.solver.stiffness);
        let report = FrameReport {
            frame,
            resolution: instance.resolution(),
            outcome,
            sim_time: self.clock.elapsed(),
            contacts,
            energy,
            wall_time,
        };

        self.bus.emit(SimulationEvent::new(frame, EventKind::Contacts { count: contacts }));
        self.bus.emit(SimulationEvent::new(
            frame,
            EventKind::Energy {
                kinetic: energy.kinetic,
                elastic: energy.elastic,
            },
        ));
        self.bus.emit(SimulationEvent::new(
            frame,
            EventKind::FrameEnd {
                substeps: report.substeps(),
                wall_time,
            },
        ));
        self.bus.flush();
        self.frame += 1;

        tracing::trace!(frame, sim_time = report.sim_time, contacts, "frame advanced");
        report
    }

    /// Makes the instance with `resolution` active, reinitializing it and
    /// restarting the clock. Selecting the active instance also restarts it.
    pub fn select(&mut self, resolution: usize) -> WeftResult<()> {
        self.active = find_instance(&self.instances, resolution)?;
        self.bus.emit(SimulationEvent::new(
            self.frame,
            EventKind::InstanceSwitched { resolution },
        ));
        self.reset(ResetCause::InstanceSwitch);
        self.bus.flush();
        tracing::info!(resolution, "active cloth switched");
        Ok(())
    }

    /// Reinitializes the active cloth and restarts the clock.
    pub fn reset_active(&mut self) {
        self.reset(ResetCause::Manual);
        self.bus.flush();
    }

    /// Flips between solid and wireframe display.
    pub fn toggle_wireframe(&mut self) -> DisplayMode {
        self.display = self.display.toggled();
        tracing::debug!(mode = ?self.display, "display mode toggled");
        self.display
    }

    pub fn handle_input(&mut self, event: InputEvent) -> WeftResult<ControlFlow> {
        match event {
            InputEvent::Select { resolution } => self.select(resolution)?,
            InputEvent::ToggleWireframe => {
                self.toggle_wireframe();
            }
            InputEvent::Quit => return Ok(ControlFlow::Quit),
        }
        Ok(ControlFlow::Continue)
    }

    /// Decodes a key press through the configured bindings. Unbound keys
    /// are ignored.
    pub fn handle_key(&mut self, key: char) -> WeftResult<ControlFlow> {
        match self.config.keys.resolve(key) {
            Some(event) => self.handle_input(event),
            None => {
                tracing::trace!(%key, "unbound key ignored");
                Ok(ControlFlow::Continue)
            }
        }
    }

    /// Borrowed view of the active cloth for the renderer.
    pub fn render_frame(&self) -> RenderFrame<'_> {
        RenderFrame::from_mesh(
            self.frame,
            self.active().mesh(),
            self.display,
            ColliderView::sphere(self.collider.center, self.collider.radius),
        )
    }

    /// Advances `frames` frames, submitting each one to `renderer`.
    pub fn run(&mut self, frames: u64, renderer: &mut dyn Renderer) -> WeftResult<RunSummary> {
        renderer.init(self.active().mesh())?;

        let mut summary = RunSummary {
            resolution: self.active_resolution(),
            frames: 0,
            resets: 0,
            substeps: 0,
            contacts: 0,
            wall_time: 0.0,
            final_energy: EnergyReport::measure(
                self.active().cloth(),
                self.config.solver.stiffness,
            ),
        };
        for _ in 0..frames {
            let report = self.advance_frame();
            renderer.submit_frame(&self.render_frame())?;

            summary.frames += 1;
            summary.resets += u32::from(report.is_reset());
            summary.substeps += u64::from(report.substeps());
            summary.contacts += u64::from(report.contacts);
            summary.wall_time += report.wall_time;
            summary.final_energy = report.energy;
        }
        renderer.finalize()?;

        tracing::debug!(
            frames = summary.frames,
            resets = summary.resets,
            wall_time = summary.wall_time,
            "run complete"
        );
        Ok(summary)
    }

    /// Delivers pending events and finalizes every sink.
    pub fn finish(&mut self) {
        self.bus.finalize();
    }

    fn reset(&mut self, cause: ResetCause) {
        let instance = &mut self.instances[self.active.index()];
        instance.reinitialize();
        self.clock.reset();
        let resolution = instance.resolution();
        self.bus.emit(SimulationEvent::new(
            self.frame,
            EventKind::Reset { resolution, cause },
        ));
        tracing::debug!(resolution, ?cause, "cloth reinitialized");
    }

    // ─── Accessors ───────────────────────────────────────────

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn active_id(&self) -> InstanceId {
        self.active
    }

    pub fn active(&self) -> &ClothInstance {
        &self.instances[self.active.index()]
    }

    pub fn active_resolution(&self) -> usize {
        self.active().resolution()
    }

    pub fn instance(&self, resolution: usize) -> Option<&ClothInstance> {
        self.instances.iter().find(|inst| inst.resolution() == resolution)
    }

    pub fn resolutions(&self) -> Vec<usize> {
        self.instances.iter().map(ClothInstance::resolution).collect()
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display
    }

    /// Substeps per stepped frame.
    pub fn substeps_per_frame(&self) -> u32 {
        self.substeps
    }

    /// Frames advanced since construction.
    pub fn frame_index(&self) -> u64 {
        self.frame
    }

    pub fn collider(&self) -> &SphereCollider {
        &self.collider
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }
}

fn find_instance(instances: &[ClothInstance], resolution: usize) -> WeftResult<InstanceId> {
    instances
        .iter()
        .position(|inst| inst.resolution() == resolution)
        .map(|idx| InstanceId(idx as u32))
        .ok_or(WeftError::UnknownInstance { resolution })
}
