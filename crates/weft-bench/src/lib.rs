//! # weft-bench
//!
//! Benchmark suite for the weft cloth simulation.
//!
//! Runs the driver headless for a fixed number of frames at each reference
//! resolution and reports per-frame timing, energy and contact counts as CSV.

pub mod metrics;
pub mod runner;
pub mod scenarios;

pub use metrics::BenchmarkMetrics;
pub use runner::BenchmarkRunner;
pub use scenarios::{Scenario, ScenarioKind};
