//! GridIt CLI - silhouette grid generation from the command line.
//!
//! Usage: gridit <COMMAND> [OPTIONS] <INPUT> [OUTPUT]
//!
//! Set `RUST_LOG` (or pass `--verbose`) to see pipeline logs on stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use config::constants::{GridConfig, DEFAULT_STEP, MAX_FACE_SIDES};
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod io;

use error::CliResult;

#[derive(Parser)]
#[command(name = "gridit")]
#[command(version, about = "Fill a planar silhouette with a regular quad grid")]
struct Cli {
    /// Log pipeline stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a grid mesh and write it as JSON
    Generate {
        /// Input mesh (JSON)
        input: PathBuf,

        /// Output grid (JSON)
        output: PathBuf,

        /// Grid spacing in world units
        #[arg(short, long, default_value_t = DEFAULT_STEP)]
        step: f64,

        /// Largest face the fill may emit
        #[arg(long, default_value_t = MAX_FACE_SIDES)]
        max_sides: usize,
    },

    /// Print boundary and lattice statistics
    Inspect {
        /// Input mesh (JSON)
        input: PathBuf,

        /// Grid spacing in world units
        #[arg(short, long, default_value_t = DEFAULT_STEP)]
        step: f64,
    },
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(command: Commands) -> CliResult<()> {
    match command {
        Commands::Generate {
            input,
            output,
            step,
            max_sides,
        } => {
            let config = GridConfig::new(step, max_sides)?;
            commands::generate(&input, &output, &config)
        }
        Commands::Inspect { input, step } => {
            let config = GridConfig::with_step(step)?;
            commands::inspect(&input, &config)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
