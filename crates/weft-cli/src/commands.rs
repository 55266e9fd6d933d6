//! CLI command implementations.

use weft_bench::metrics::BenchmarkMetrics;
use weft_bench::runner::BenchmarkRunner;
use weft_bench::scenarios::ScenarioKind;
use weft_driver::{ControlFlow, SimulationConfig, SimulationDriver};
use weft_mesh::{SpringKind, SpringTopology};
use weft_render::{HeadlessRenderer, Renderer};
use weft_types::constants::REFERENCE_RESOLUTIONS;

type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Run the simulation headless, optionally replaying key presses.
pub fn simulate(
    config_path: Option<&str>,
    frames: u64,
    resolution: Option<usize>,
    seed: Option<u64>,
    keys: Option<&str>,
) -> CliResult {
    println!("weft simulation");
    println!("───────────────");

    let mut config = match config_path {
        Some(path) => {
            println!("Config:      {path}");
            SimulationConfig::load(path)?
        }
        None => {
            println!("Config:      reference defaults");
            SimulationConfig::default()
        }
    };
    if seed.is_some() {
        config.seed = seed;
    }
    if resolution.is_some() {
        config.initial_resolution = resolution;
    }

    let mut driver = SimulationDriver::new(config)?;
    let mut renderer = HeadlessRenderer::new();
    renderer.init(driver.active().mesh())?;

    println!("Instances:   {:?}", driver.resolutions());
    println!("Substeps:    {} per frame", driver.substeps_per_frame());
    println!();

    let mut presses = keys.unwrap_or("").chars();
    let mut resets = 0u32;
    let mut contacts = 0u64;
    let mut last = None;

    for _ in 0..frames {
        if let Some(key) = presses.next() {
            let active = driver.active_resolution();
            if driver.handle_key(key)? == ControlFlow::Quit {
                println!("Quit requested at frame {}", driver.frame_index());
                break;
            }
            if driver.active_resolution() != active {
                renderer.init(driver.active().mesh())?;
            }
        }
        let report = driver.advance_frame();
        renderer.submit_frame(&driver.render_frame())?;

        resets += u32::from(report.is_reset());
        contacts += u64::from(report.contacts);
        last = Some(report);
    }
    renderer.finalize()?;
    driver.finish();

    println!("Frames:      {}", renderer.frame_count());
    println!("Active:      {} ({:?})", driver.active_resolution(), driver.display_mode());
    println!("Resets:      {resets}");
    println!("Contacts:    {contacts}");
    if let Some(report) = last {
        println!("Sim time:    {:.4}s", report.sim_time);
        println!("Kinetic E:   {:.6e}", report.energy.kinetic);
        println!("Elastic E:   {:.6e}", report.energy.elastic);
        println!("Last frame:  {:.3}ms", report.wall_time * 1000.0);
    }
    if let Some((lo, hi)) = driver.render_frame().bounds() {
        println!("Y range:     [{:.4}, {:.4}]", lo.y, hi.y);
    }

    Ok(())
}

/// Run benchmark scenarios.
pub fn benchmark(
    scenario_name: &str,
    resolutions: &[usize],
    frames: u64,
    output_path: Option<&str>,
) -> CliResult {
    println!("weft benchmark suite");
    println!("════════════════════");
    println!();

    let kinds: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        let kind = ScenarioKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name() == scenario_name)
            .ok_or_else(|| {
                format!("Unknown scenario: '{scenario_name}'. Available: sphere_drape, reset_cycle, all")
            })?;
        vec![kind]
    };
    let resolutions = if resolutions.is_empty() {
        REFERENCE_RESOLUTIONS.to_vec()
    } else {
        resolutions.to_vec()
    };

    println!(
        "Running {} scenario(s) at {} resolution(s), {} frames each",
        kinds.len(),
        resolutions.len(),
        frames
    );
    println!();

    let all_metrics = BenchmarkRunner::run_kinds(&kinds, &resolutions, frames)
        .map_err(|e| format!("Benchmark failed: {e}"))?;

    for metrics in &all_metrics {
        println!("{} ({} verts)", metrics.scenario, metrics.vertex_count);
        println!("  Wall time:   {:.3}s", metrics.total_wall_time);
        println!("  Avg frame:   {:.3}ms", metrics.avg_frame_time * 1000.0);
        println!("  Final KE:    {:.6e}", metrics.final_kinetic_energy);
        println!("  Contacts:    {}", metrics.contacts);
        println!();
    }

    let csv = BenchmarkMetrics::to_csv(&all_metrics);
    if let Some(path) = output_path {
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{csv}");
    }

    Ok(())
}

/// Validate a simulation config.
pub fn validate(path: &str) -> CliResult {
    println!("weft validator");
    println!("──────────────");
    println!();

    if !path.ends_with(".toml") {
        return Err(format!("Unsupported file format: {path}. Use a .toml config.").into());
    }
    println!("Validating config: {path}");
    match SimulationConfig::load(path) {
        Ok(config) => {
            let resolutions: Vec<usize> = config.cloths.iter().map(|c| c.resolution).collect();
            println!(
                "✅ Config is valid ({} cloths {:?}, {} substeps per frame).",
                config.cloths.len(),
                resolutions,
                config.solver.substeps()
            );
            Ok(())
        }
        Err(e) => {
            println!("❌ Config validation failed: {e}");
            Err(e.into())
        }
    }
}

/// List spring offsets by class.
pub fn topology(resolution: Option<usize>) -> CliResult {
    let topology = SpringTopology::build();
    println!("Spring offsets ({} total)", topology.len());
    println!("────────────────────────");

    for kind in [SpringKind::Structural, SpringKind::Shear, SpringKind::Bend] {
        let offsets: Vec<String> = topology
            .of_kind(kind)
            .map(|o| format!("({:+},{:+})", o.di, o.dj))
            .collect();
        println!("{:<11} {:>2}  {}", kind.name(), offsets.len(), offsets.join(" "));
    }

    if let Some(n) = resolution {
        let pairs = topology.active_pair_count(n);
        println!();
        println!("Resolution {n}: {} points, {} springs", n * n, pairs / 2);
    }
    Ok(())
}

/// Print or write the default configuration.
pub fn default_config(output_path: Option<&str>) -> CliResult {
    let toml = SimulationConfig::default().to_toml_string()?;
    match output_path {
        Some(path) => {
            std::fs::write(path, &toml)?;
            println!("Default config written to: {path}");
        }
        None => print!("{toml}"),
    }
    Ok(())
}
