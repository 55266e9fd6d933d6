//! Benchmark runner: drives a scenario headless and collects metrics.

use weft_driver::SimulationDriver;
use weft_render::{HeadlessRenderer, Renderer};
use weft_types::WeftResult;

use crate::metrics::BenchmarkMetrics;
use crate::scenarios::{Scenario, ScenarioKind};

/// Runs benchmark scenarios and collects metrics.
pub struct BenchmarkRunner;

impl BenchmarkRunner {
    /// Run a single scenario to completion.
    pub fn run(scenario: &Scenario) -> WeftResult<BenchmarkMetrics> {
        let mut driver = SimulationDriver::new(scenario.config.clone())?;
        let mut renderer = HeadlessRenderer::new();
        renderer.init(driver.active().mesh())?;

        let mut frame_times = Vec::with_capacity(scenario.frames as usize);
        let mut substeps = 0u64;
        let mut resets = 0u32;
        let mut contacts = 0u64;
        let mut last = None;

        for _ in 0..scenario.frames {
            let report = driver.advance_frame();
            renderer.submit_frame(&driver.render_frame())?;

            frame_times.push(report.wall_time);
            substeps += u64::from(report.substeps());
            resets += u32::from(report.is_reset());
            contacts += u64::from(report.contacts);
            last = Some(report);
        }
        renderer.finalize()?;
        driver.finish();

        let total_wall_time: f64 = frame_times.iter().sum();
        let avg_frame_time = if frame_times.is_empty() {
            0.0
        } else {
            total_wall_time / frame_times.len() as f64
        };
        let min_frame_time = frame_times.iter().copied().fold(f64::MAX, f64::min);
        let max_frame_time = frame_times.iter().copied().fold(0.0, f64::max);
        let energy = last.map(|r| r.energy).unwrap_or_default();

        let metrics = BenchmarkMetrics {
            scenario: scenario.label(),
            resolution: scenario.resolution,
            vertex_count: driver.active().mesh().vertex_count(),
            frames: renderer.frame_count(),
            substeps,
            resets,
            total_wall_time,
            avg_frame_time,
            min_frame_time: if frame_times.is_empty() { 0.0 } else { min_frame_time },
            max_frame_time,
            final_kinetic_energy: energy.kinetic,
            final_elastic_energy: energy.elastic,
            contacts,
        };
        tracing::info!(
            scenario = %metrics.scenario,
            avg_frame_ms = metrics.avg_frame_time * 1000.0,
            "benchmark complete"
        );
        Ok(metrics)
    }

    /// Run each of `kinds` at each of `resolutions`, kind-major.
    pub fn run_kinds(
        kinds: &[ScenarioKind],
        resolutions: &[usize],
        frames: u64,
    ) -> WeftResult<Vec<BenchmarkMetrics>> {
        let mut results = Vec::with_capacity(kinds.len() * resolutions.len());
        for &kind in kinds {
            for &resolution in resolutions {
                let scenario = Scenario::from_kind(kind, resolution).with_frames(frames);
                results.push(Self::run(&scenario)?);
            }
        }
        Ok(results)
    }

    /// Run every scenario kind at the given resolutions.
    pub fn run_all(resolutions: &[usize], frames: u64) -> WeftResult<Vec<BenchmarkMetrics>> {
        Self::run_kinds(ScenarioKind::all(), resolutions, frames)
    }
}
