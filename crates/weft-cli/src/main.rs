//! weft CLI: headless simulation, benchmarking, and config tooling.

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

mod commands;

#[derive(Parser)]
#[command(name = "weft")]
#[command(version, about = "weft — mass-spring cloth falling onto a sphere")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation headless and print a summary.
    Simulate {
        /// Path to simulation config (TOML). Defaults to the reference setup.
        #[arg(short, long)]
        config: Option<String>,

        /// Number of frames to advance.
        #[arg(short, long, default_value_t = 120)]
        frames: u64,

        /// Resolution of the cloth to start on.
        #[arg(short, long)]
        resolution: Option<usize>,

        /// RNG seed for the initial jitter.
        #[arg(short, long)]
        seed: Option<u64>,

        /// Key presses to replay, one per frame from the first (e.g. "ucy").
        #[arg(short, long)]
        keys: Option<String>,
    },

    /// Run benchmark scenarios and report CSV.
    Benchmark {
        /// Which scenario to run (sphere_drape, reset_cycle, all).
        #[arg(short, long, default_value = "all")]
        scenario: String,

        /// Resolutions to run. Defaults to 8, 24, 64 and 256.
        #[arg(short, long, value_delimiter = ',')]
        resolution: Vec<usize>,

        /// Frames per run.
        #[arg(short, long, default_value_t = 120)]
        frames: u64,

        /// Output CSV file path.
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Validate a simulation config (TOML).
    Validate {
        /// Path to config file.
        path: String,
    },

    /// List the spring offsets by class.
    Topology {
        /// Also count active spring pairs for this resolution.
        #[arg(short, long)]
        resolution: Option<usize>,
    },

    /// Print the default configuration as TOML.
    DefaultConfig {
        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Simulate {
            config,
            frames,
            resolution,
            seed,
            keys,
        } => commands::simulate(config.as_deref(), frames, resolution, seed, keys.as_deref()),
        Commands::Benchmark {
            scenario,
            resolution,
            frames,
            output,
        } => commands::benchmark(&scenario, &resolution, frames, output.as_deref()),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Topology { resolution } => commands::topology(resolution),
        Commands::DefaultConfig { output } => commands::default_config(output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
