//! Top-level simulation driver.
//!
//! A [`Simulator`] is built from a [`Config`], loads its operation stream
//! (from the configured metadata file or directly from text), and runs the
//! scheduler against a fresh machine. Each call to `run` starts its own clock
//! and its own machine, so repeated runs of one simulator are independent.

use std::path::Path;

use tracing::info;

use crate::common::clock::{Clock, WallClock};
use crate::common::error::{SimError, SimResult};
use crate::config::Config;
use crate::exec::{RunOutcome, Scheduler};
use crate::meta::{self, Operation};
use crate::report;
use crate::sim::loader;
use crate::system::System;
use crate::trace::Trace;

/// Owns the configuration and validated operation stream for one simulation.
#[derive(Debug)]
pub struct Simulator {
    config: Config,
    operations: Vec<Operation>,
    initialized: bool,
}

impl Simulator {
    /// Creates a simulator with no operation stream loaded.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            operations: Vec::new(),
            initialized: false,
        }
    }

    /// Creates a simulator from a configuration file on disk.
    pub fn from_config_file(path: &Path) -> SimResult<Self> {
        Ok(Self::new(loader::load_config(path)?))
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the validated operation stream.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Loads the metadata file named by the configuration.
    ///
    /// Fails if the configuration names no metadata path, the file cannot be
    /// read, or the stream does not validate against the catalog.
    pub fn initialize(&mut self) -> SimResult<()> {
        let path = self
            .config
            .general
            .metadata_path
            .clone()
            .ok_or(SimError::MissingMetaPath)?;
        let text = loader::load_metadata(Path::new(&path))?;
        self.load_metadata_str(&text)
    }

    /// Parses and validates an operation stream from metadata text.
    ///
    /// On success the stream replaces any previously loaded one. On failure
    /// the simulator keeps its prior stream and stays runnable only if it was
    /// runnable before.
    pub fn load_metadata_str(&mut self, text: &str) -> SimResult<()> {
        let metadata = meta::parse_metadata(text)?;
        let operations = meta::build_operations(&metadata, &self.config)?;
        info!(operations = operations.len(), "metadata stream validated");
        self.operations = operations;
        self.initialized = true;
        Ok(())
    }

    /// Runs the simulation against the wall clock.
    pub fn run(&self) -> RunOutcome {
        let clock = WallClock::start_now();
        self.run_with_clock(&clock)
    }

    /// Runs the simulation against the given clock.
    ///
    /// Builds a fresh machine from the configuration, so device pools and the
    /// allocator never carry state between runs.
    pub fn run_with_clock(&self, clock: &dyn Clock) -> RunOutcome {
        if !self.initialized {
            return RunOutcome {
                trace: Trace::new(),
                result: Err(SimError::NotInitialized),
            };
        }
        let scheduler = match Scheduler::load(&self.operations) {
            Ok(scheduler) => scheduler,
            Err(error) => {
                return RunOutcome {
                    trace: Trace::new(),
                    result: Err(error),
                };
            }
        };
        let mut system = System::from_config(&self.config);
        scheduler.run(&mut system, clock)
    }

    /// Renders the full report for a finished run.
    pub fn report(&self, outcome: &RunOutcome) -> String {
        report::render(
            &self.config,
            &self.operations,
            &outcome.trace,
            outcome.result.as_ref().err(),
        )
    }
}
