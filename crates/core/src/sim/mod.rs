//! Simulation front end.
//!
//! Ties the rest of the crate together:
//! 1. **Loader:** Reads configuration files (classic line format or JSON) and
//!    metadata files from disk.
//! 2. **Driver:** The [`simulator::Simulator`] owns the configuration and the
//!    validated operation stream, runs the scheduler, and renders the report.

/// Configuration and metadata file loading.
pub mod loader;

/// Top-level simulation driver.
pub mod simulator;

pub use simulator::Simulator;
