//! Operating-system simulator library.
//!
//! This crate executes "programs" written in a small declarative metadata language
//! against a simulated machine. It provides the following:
//! 1. **Meta:** The operation language (codes, descriptors, parser, catalog).
//! 2. **System:** Shared hardware state (device resource pools, block memory allocator).
//! 3. **Exec:** Per-program executors with process control blocks and the scheduler loop.
//! 4. **Trace:** Timestamped execution events, rendered in execution order.
//! 5. **Simulation:** Configuration, loader, report formatting, and the top-level driver.

/// Common types (errors, clocks, block addresses).
pub mod common;
/// Simulator configuration (cycle times, memory sizing, device quantities, logging).
pub mod config;
/// Program executors, process control blocks, and the scheduler loop.
pub mod exec;
/// Operation metadata language (codes, descriptors, parser, catalog).
pub mod meta;
/// Report formatting for configuration, metrics, and the execution trace.
pub mod report;
/// Configuration loader and the top-level simulator driver.
pub mod sim;
/// Shared machine state: device resource pools and the memory allocator.
pub mod system;
/// Timestamped execution trace.
pub mod trace;

/// Simulation error type; every failure path produces exactly one of these.
pub use crate::common::error::SimError;
/// Root configuration type; deserialize from JSON or parse the classic config file format.
pub use crate::config::Config;
/// Top-level driver; construct with `Simulator::new`, then `initialize` and `run`.
pub use crate::sim::Simulator;
/// Shared machine state (pools + allocator); construct with `System::from_config`.
pub use crate::system::System;
/// Ordered, timestamped execution trace.
pub use crate::trace::Trace;
