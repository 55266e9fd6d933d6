//! Integration tests for weft-bench.

use weft_bench::metrics::BenchmarkMetrics;
use weft_bench::runner::BenchmarkRunner;
use weft_bench::scenarios::{Scenario, ScenarioKind};

fn sample_metrics(scenario: &str) -> BenchmarkMetrics {
    BenchmarkMetrics {
        scenario: scenario.into(),
        resolution: 24,
        vertex_count: 576,
        frames: 10,
        substeps: 830,
        resets: 0,
        total_wall_time: 0.5,
        avg_frame_time: 0.05,
        min_frame_time: 0.04,
        max_frame_time: 0.07,
        final_kinetic_energy: 1e-3,
        final_elastic_energy: 2e-4,
        contacts: 123,
    }
}

// ─── Scenario Tests ───────────────────────────────────────────

#[test]
fn sphere_drape_setup() {
    let s = Scenario::sphere_drape(24);
    assert_eq!(s.kind, ScenarioKind::SphereDrape);
    assert_eq!(s.frames, 120);
    assert_eq!(s.config.cloths.len(), 1);
    assert_eq!(s.config.cloths[0].resolution, 24);
    assert!(s.config.seed.is_some());
    assert_eq!(s.label(), "sphere_drape_24");
    assert!(s.config.validate().is_ok());
}

#[test]
fn reset_cycle_shortens_reset_time() {
    let s = Scenario::reset_cycle(8);
    assert_eq!(s.kind, ScenarioKind::ResetCycle);
    assert_eq!(s.config.solver.reset_time, 0.25);
}

#[test]
fn reference_set_covers_all_resolutions() {
    let set = Scenario::reference_set(ScenarioKind::SphereDrape);
    let resolutions: Vec<usize> = set.iter().map(|s| s.resolution).collect();
    assert_eq!(resolutions, vec![8, 24, 64, 256]);
    assert_eq!(ScenarioKind::all().len(), 2);
}

// ─── Runner Tests ─────────────────────────────────────────────

#[test]
fn run_sphere_drape() {
    let scenario = Scenario::sphere_drape(8).with_frames(30);
    let metrics = BenchmarkRunner::run(&scenario).unwrap();

    assert_eq!(metrics.scenario, "sphere_drape_8");
    assert_eq!(metrics.frames, 30);
    assert_eq!(metrics.vertex_count, 64);
    assert_eq!(metrics.substeps, 30 * 83);
    assert_eq!(metrics.resets, 0);
    assert!(metrics.total_wall_time > 0.0);
    assert!(metrics.min_frame_time <= metrics.max_frame_time);
    assert!(metrics.contacts > 0, "sheet should reach the sphere");
    assert!(metrics.final_kinetic_energy.is_finite());
}

#[test]
fn run_reset_cycle_counts_resets() {
    // 83 substeps of 2e-4 s: the 17th frame finds the clock past 0.25 s.
    let scenario = Scenario::reset_cycle(8).with_frames(20);
    let metrics = BenchmarkRunner::run(&scenario).unwrap();
    assert_eq!(metrics.resets, 1);
    assert_eq!(metrics.substeps, 19 * 83);
}

#[test]
fn run_all_small() {
    let results = BenchmarkRunner::run_all(&[8], 2).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].scenario, "sphere_drape_8");
    assert_eq!(results[1].scenario, "reset_cycle_8");
}

#[test]
fn run_kinds_is_kind_major() {
    let kinds = [ScenarioKind::ResetCycle];
    let results = BenchmarkRunner::run_kinds(&kinds, &[4, 6], 1).unwrap();
    let labels: Vec<&str> = results.iter().map(|m| m.scenario.as_str()).collect();
    assert_eq!(labels, ["reset_cycle_4", "reset_cycle_6"]);
    assert!(results.iter().all(|m| m.frames == 1));

    assert!(BenchmarkRunner::run_kinds(&[], &[8], 1).unwrap().is_empty());
}

// ─── Metrics Tests ────────────────────────────────────────────

#[test]
fn metrics_csv_output() {
    let csv_row = sample_metrics("test").to_csv_row();
    assert!(csv_row.starts_with("test,24,576,10,830,0,"));
    assert!(csv_row.ends_with(",123"));
    assert_eq!(
        csv_row.split(',').count(),
        BenchmarkMetrics::to_csv_header().split(',').count()
    );
}

#[test]
fn metrics_csv_multi() {
    let csv = BenchmarkMetrics::to_csv(&[sample_metrics("a"), sample_metrics("b")]);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("scenario,"));
}

#[test]
fn metrics_realtime_factor() {
    let metrics = sample_metrics("rt");
    // 830 substeps × 2e-4 s = 0.166 s simulated in 0.5 s
    assert!((metrics.realtime_factor(2e-4) - 0.332).abs() < 1e-6);
}

#[test]
fn metrics_json_round_trip() {
    let metrics = sample_metrics("test");
    let json = serde_json::to_string(&metrics).unwrap();
    let recovered: BenchmarkMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(recovered, metrics);
}
