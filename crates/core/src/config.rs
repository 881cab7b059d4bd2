//! Configuration system for the simulator.
//!
//! This module defines all configuration structures used to parameterize a
//! run. It provides:
//! 1. **Defaults:** Baseline values for cycle times, memory sizing, and device quantities.
//! 2. **Structures:** Hierarchical config for general, timing, memory, resource, and log settings.
//! 3. **Enums:** Log target selection (monitor, file, both).
//!
//! Configuration is supplied as JSON, built in code, or parsed from the classic
//! line-oriented configuration file format by [`crate::sim::loader`].

use serde::Deserialize;

/// Default configuration constants for the simulator.
///
/// These values define the baseline run configuration when not explicitly
/// overridden by a configuration file.
mod defaults {
    /// Processor cycle time in milliseconds.
    pub const PROCESSOR_MS: u32 = 10;

    /// Monitor display time in milliseconds per cycle.
    pub const MONITOR_MS: u32 = 20;

    /// Hard drive cycle time in milliseconds.
    pub const HARD_DRIVE_MS: u32 = 15;

    /// Printer cycle time in milliseconds.
    pub const PRINTER_MS: u32 = 25;

    /// Keyboard cycle time in milliseconds.
    pub const KEYBOARD_MS: u32 = 50;

    /// Memory cycle time in milliseconds.
    pub const MEMORY_MS: u32 = 30;

    /// Total simulated system memory in kilobytes.
    pub const SYSTEM_KBYTES: u32 = 1024;

    /// Memory block size in kilobytes.
    ///
    /// Allocation addresses are always multiples of this value.
    pub const BLOCK_KBYTES: u32 = 128;

    /// Device quantity used for every pool not named in the configuration.
    pub const DEVICE_QUANTITY: usize = 1;
}

/// Cycle-time category, used for catalog lookups and error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleCategory {
    /// Processor cycle time.
    Processor,
    /// Monitor display time.
    Monitor,
    /// Hard drive cycle time.
    HardDrive,
    /// Printer cycle time.
    Printer,
    /// Keyboard cycle time.
    Keyboard,
    /// Memory cycle time.
    Memory,
}

/// Destination(s) for the rendered report.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum LogTarget {
    /// Write the report to standard output only.
    #[default]
    Monitor,
    /// Write the report to the configured log file only.
    File,
    /// Write the report to both standard output and the log file.
    Both,
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// ```
/// use osmium_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.timing.processor_ms, 10);
/// assert_eq!(config.memory.block_kbytes, 128);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    /// General settings (version, metadata file path).
    #[serde(default)]
    pub general: GeneralConfig,
    /// Cycle-time settings in milliseconds per cycle.
    #[serde(default)]
    pub timing: TimingConfig,
    /// Simulated memory sizing in kilobytes.
    #[serde(default)]
    pub memory: MemoryConfig,
    /// Shared device quantities.
    #[serde(default)]
    pub resources: ResourceConfig,
    /// Report destination settings.
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Returns the configured milliseconds-per-cycle for a category.
    pub fn cycle_time(&self, category: CycleCategory) -> u32 {
        match category {
            CycleCategory::Processor => self.timing.processor_ms,
            CycleCategory::Monitor => self.timing.monitor_ms,
            CycleCategory::HardDrive => self.timing.harddrive_ms,
            CycleCategory::Printer => self.timing.printer_ms,
            CycleCategory::Keyboard => self.timing.keyboard_ms,
            CycleCategory::Memory => self.timing.memory_ms,
        }
    }
}

/// General simulation settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneralConfig {
    /// Version/phase string carried from the configuration file.
    #[serde(default)]
    pub version: Option<String>,

    /// Path of the metadata file holding the operation stream.
    #[serde(default)]
    pub metadata_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            version: None,
            metadata_path: None,
        }
    }
}

/// Cycle-time configuration, milliseconds per cycle.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimingConfig {
    /// Processor cycle time.
    #[serde(default = "TimingConfig::default_processor")]
    pub processor_ms: u32,

    /// Monitor display time.
    #[serde(default = "TimingConfig::default_monitor")]
    pub monitor_ms: u32,

    /// Hard drive cycle time.
    #[serde(default = "TimingConfig::default_harddrive")]
    pub harddrive_ms: u32,

    /// Printer cycle time.
    #[serde(default = "TimingConfig::default_printer")]
    pub printer_ms: u32,

    /// Keyboard cycle time.
    #[serde(default = "TimingConfig::default_keyboard")]
    pub keyboard_ms: u32,

    /// Memory cycle time.
    #[serde(default = "TimingConfig::default_memory")]
    pub memory_ms: u32,
}

impl TimingConfig {
    /// Returns the default processor cycle time.
    fn default_processor() -> u32 {
        defaults::PROCESSOR_MS
    }

    /// Returns the default monitor display time.
    fn default_monitor() -> u32 {
        defaults::MONITOR_MS
    }

    /// Returns the default hard drive cycle time.
    fn default_harddrive() -> u32 {
        defaults::HARD_DRIVE_MS
    }

    /// Returns the default printer cycle time.
    fn default_printer() -> u32 {
        defaults::PRINTER_MS
    }

    /// Returns the default keyboard cycle time.
    fn default_keyboard() -> u32 {
        defaults::KEYBOARD_MS
    }

    /// Returns the default memory cycle time.
    fn default_memory() -> u32 {
        defaults::MEMORY_MS
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            processor_ms: defaults::PROCESSOR_MS,
            monitor_ms: defaults::MONITOR_MS,
            harddrive_ms: defaults::HARD_DRIVE_MS,
            printer_ms: defaults::PRINTER_MS,
            keyboard_ms: defaults::KEYBOARD_MS,
            memory_ms: defaults::MEMORY_MS,
        }
    }
}

/// Simulated memory sizing, in kilobytes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemoryConfig {
    /// Total system memory.
    #[serde(default = "MemoryConfig::default_system")]
    pub system_kbytes: u32,

    /// Allocation block size.
    #[serde(default = "MemoryConfig::default_block")]
    pub block_kbytes: u32,
}

impl MemoryConfig {
    /// Returns the default total system memory.
    fn default_system() -> u32 {
        defaults::SYSTEM_KBYTES
    }

    /// Returns the default allocation block size.
    fn default_block() -> u32 {
        defaults::BLOCK_KBYTES
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            system_kbytes: defaults::SYSTEM_KBYTES,
            block_kbytes: defaults::BLOCK_KBYTES,
        }
    }
}

/// Shared device quantities; each becomes a fixed-capacity resource pool.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResourceConfig {
    /// Number of printers.
    #[serde(default = "ResourceConfig::default_quantity")]
    pub printers: usize,

    /// Number of hard drives.
    #[serde(default = "ResourceConfig::default_quantity")]
    pub harddrives: usize,

    /// Number of keyboards.
    #[serde(default = "ResourceConfig::default_quantity")]
    pub keyboards: usize,

    /// Number of monitors.
    #[serde(default = "ResourceConfig::default_quantity")]
    pub monitors: usize,
}

impl ResourceConfig {
    /// Returns the default quantity for an unnamed device pool.
    fn default_quantity() -> usize {
        defaults::DEVICE_QUANTITY
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            printers: defaults::DEVICE_QUANTITY,
            harddrives: defaults::DEVICE_QUANTITY,
            keyboards: defaults::DEVICE_QUANTITY,
            monitors: defaults::DEVICE_QUANTITY,
        }
    }
}

/// Report destination settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LogConfig {
    /// Where the rendered report goes.
    #[serde(default)]
    pub target: LogTarget,

    /// Log file path, required when the target includes a file.
    #[serde(default)]
    pub file_path: Option<String>,
}
