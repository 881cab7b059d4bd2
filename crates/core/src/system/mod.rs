//! Shared machine state.
//!
//! This module holds the pieces of the simulated machine that all programs
//! share:
//! 1. **Resource pools:** Fixed-capacity pools of interchangeable device units
//!    (printers, hard drives, keyboards, monitors) with ownership tracking.
//! 2. **Allocator:** A monotonic bump allocator over a bounded address space,
//!    reset between program runs.
//!
//! Execution is strictly sequential, so no locking is needed here, but every
//! mutation is a single self-contained call (`reserve`, `assign`, `release`,
//! `allocate`, `reset`) so a concurrent scheduler could wrap the state in a
//! mutex without changing the contract.

/// Bump allocator over the configured memory space.
pub mod memory;

/// Fixed-capacity device resource pools.
pub mod resource;

use crate::config::Config;

pub use memory::Allocator;
pub use resource::{ResourceKind, ResourcePool};

/// The shared machine: one pool per device category plus the allocator.
#[derive(Debug)]
pub struct System {
    /// Printer pool.
    pub printers: ResourcePool,
    /// Hard drive pool.
    pub harddrives: ResourcePool,
    /// Keyboard pool.
    pub keyboards: ResourcePool,
    /// Monitor pool.
    pub monitors: ResourcePool,
    /// Block memory allocator.
    pub allocator: Allocator,
}

impl System {
    /// Builds the machine from configured quantities and memory sizing.
    pub fn from_config(config: &Config) -> Self {
        Self {
            printers: ResourcePool::new(ResourceKind::Printer, config.resources.printers),
            harddrives: ResourcePool::new(ResourceKind::HardDrive, config.resources.harddrives),
            keyboards: ResourcePool::new(ResourceKind::Keyboard, config.resources.keyboards),
            monitors: ResourcePool::new(ResourceKind::Monitor, config.resources.monitors),
            allocator: Allocator::new(config.memory.system_kbytes, config.memory.block_kbytes),
        }
    }

    /// Returns the pool for a device category.
    pub fn pool_mut(&mut self, kind: ResourceKind) -> &mut ResourcePool {
        match kind {
            ResourceKind::Printer => &mut self.printers,
            ResourceKind::HardDrive => &mut self.harddrives,
            ResourceKind::Keyboard => &mut self.keyboards,
            ResourceKind::Monitor => &mut self.monitors,
        }
    }
}
