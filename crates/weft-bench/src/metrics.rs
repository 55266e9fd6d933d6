//! Benchmark metrics: data collected during a benchmark run.

use serde::{Deserialize, Serialize};

/// Metrics collected from a benchmark scenario run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkMetrics {
    /// Scenario label.
    pub scenario: String,
    pub resolution: usize,
    pub vertex_count: usize,
    pub frames: u64,
    /// Integrator substeps across all frames.
    pub substeps: u64,
    pub resets: u32,
    /// Total wall-clock time (seconds).
    pub total_wall_time: f64,
    /// Average wall-clock time per frame (seconds).
    pub avg_frame_time: f64,
    pub min_frame_time: f64,
    pub max_frame_time: f64,
    /// Kinetic energy after the last frame.
    pub final_kinetic_energy: f64,
    /// Elastic energy after the last frame.
    pub final_elastic_energy: f64,
    /// Point-substep contacts across all frames.
    pub contacts: u64,
}

impl BenchmarkMetrics {
    pub fn to_csv_header() -> String {
        "scenario,resolution,vertex_count,frames,substeps,resets,total_wall_time_s,avg_frame_ms,min_frame_ms,max_frame_ms,final_ke,final_elastic,contacts".to_string()
    }

    /// Format this metrics instance as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{:.6},{:.4},{:.4},{:.4},{:.6e},{:.6e},{}",
            self.scenario,
            self.resolution,
            self.vertex_count,
            self.frames,
            self.substeps,
            self.resets,
            self.total_wall_time,
            self.avg_frame_time * 1000.0,
            self.min_frame_time * 1000.0,
            self.max_frame_time * 1000.0,
            self.final_kinetic_energy,
            self.final_elastic_energy,
            self.contacts,
        )
    }

    /// Header plus one row per metrics entry.
    pub fn to_csv(metrics: &[BenchmarkMetrics]) -> String {
        let mut csv = Self::to_csv_header();
        for m in metrics {
            csv.push('\n');
            csv.push_str(&m.to_csv_row());
        }
        csv
    }

    /// Simulated seconds per wall-clock second, given the substep length.
    pub fn realtime_factor(&self, dt: f32) -> f64 {
        if self.total_wall_time <= 0.0 {
            return 0.0;
        }
        self.substeps as f64 * f64::from(dt) / self.total_wall_time
    }
}
