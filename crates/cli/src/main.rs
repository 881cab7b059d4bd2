//! Operating-system simulator CLI.
//!
//! This binary is the single entry point for running a simulation. It performs:
//! 1. **Load:** Read the configuration file (classic line format or JSON).
//! 2. **Initialize:** Parse and validate the metadata operation stream.
//! 3. **Run:** Execute every program against the wall clock.
//! 4. **Report:** Write the rendered report to the monitor, the configured log
//!    file, or both, as the configuration directs.

use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use osmium_core::config::LogTarget;
use osmium_core::sim::loader;
use osmium_core::Simulator;

#[derive(Parser, Debug)]
#[command(
    name = "osim",
    author,
    version,
    about = "Operating-system simulator",
    long_about = "Execute a metadata operation stream against a simulated machine.\n\n\
        The configuration file names the metadata file, cycle times, device\n\
        quantities, and the report destination.\n\n\
        Examples:\n  osim config/test_2e.cnf\n  osim config/sim.json -m programs/three_apps.mdf"
)]
struct Cli {
    /// Configuration file (classic line format, or JSON with a .json extension).
    config: PathBuf,

    /// Metadata file, overriding the path named in the configuration.
    #[arg(short, long)]
    metadata: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(error) = run(&cli) {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let mut simulator = Simulator::from_config_file(&cli.config)?;

    match &cli.metadata {
        Some(path) => {
            let text = loader::load_metadata(path)?;
            simulator.load_metadata_str(&text)?;
        }
        None => simulator.initialize()?,
    }

    info!(config = %cli.config.display(), "starting simulation");
    let outcome = simulator.run();
    let report = simulator.report(&outcome);
    emit(&simulator, &report)?;

    // The report already carries the failure line; the exit status mirrors it.
    outcome.result.map_err(Into::into)
}

/// Writes the report to the destination(s) the configuration names.
fn emit(simulator: &Simulator, report: &str) -> Result<(), Box<dyn Error>> {
    let log = &simulator.config().log;
    if matches!(log.target, LogTarget::Monitor | LogTarget::Both) {
        print!("{report}");
    }
    if matches!(log.target, LogTarget::File | LogTarget::Both) {
        let path = log
            .file_path
            .as_deref()
            .ok_or("log target names a file but no log file path is configured")?;
        fs::write(path, report)?;
    }
    Ok(())
}
