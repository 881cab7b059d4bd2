//! Configuration and metadata file loading.
//!
//! Two configuration formats are accepted:
//! 1. **Classic:** The line-oriented format bracketed by
//!    `Start Simulator Configuration File` / `End Simulator Configuration
//!    File`, with one `category: value` pair per line and units carried in
//!    braces (`Processor cycle time {msec}: 10`).
//! 2. **JSON:** A [`Config`] document, selected by a `.json` file extension.
//!
//! Every category is optional; unnamed categories keep their defaults.
//! Unknown categories and wrong units are hard errors, not warnings.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::error::{SimError, SimResult};
use crate::config::{Config, LogTarget};

/// Opening bracket line of the classic configuration format.
pub const CONFIG_START_SYNTAX: &str = "Start Simulator Configuration File";

/// Closing bracket line of the classic configuration format.
pub const CONFIG_END_SYNTAX: &str = "End Simulator Configuration File";

/// Reads and parses a configuration file.
///
/// Files ending in `.json` are deserialized as a [`Config`] document; anything
/// else is parsed as the classic line format.
pub fn load_config(path: &Path) -> SimResult<Config> {
    let text = read_file(path)?;
    debug!(path = %path.display(), "loaded configuration file");
    if path.extension().is_some_and(|ext| ext == "json") {
        serde_json::from_str(&text).map_err(|err| SimError::InvalidValue {
            category: "JSON configuration".to_string(),
            value: err.to_string(),
        })
    } else {
        parse_config(&text)
    }
}

/// Reads a metadata file into memory.
pub fn load_metadata(path: &Path) -> SimResult<String> {
    let text = read_file(path)?;
    debug!(path = %path.display(), "loaded metadata file");
    Ok(text)
}

fn read_file(path: &Path) -> SimResult<String> {
    fs::read_to_string(path).map_err(|_| SimError::FileNotFound {
        path: path.display().to_string(),
    })
}

/// Parses the classic configuration format.
///
/// The bracket lines are mandatory; everything between them must be a known
/// `category: value` pair. Text before the opening bracket and after the
/// closing bracket is ignored, as with the metadata format.
pub fn parse_config(text: &str) -> SimResult<Config> {
    let mut config = Config::default();
    let mut started = false;
    let mut ended = false;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if !started {
            if line == CONFIG_START_SYNTAX {
                started = true;
            }
            continue;
        }
        if line == CONFIG_END_SYNTAX {
            ended = true;
            break;
        }
        apply_line(&mut config, line, index + 1)?;
    }

    if !(started && ended) {
        return Err(SimError::ConfigBracketing);
    }
    Ok(config)
}

/// Applies one `category: value` line to the configuration under construction.
fn apply_line(config: &mut Config, line: &str, number: usize) -> SimResult<()> {
    let (key, value) = line.split_once(':').ok_or_else(|| SimError::UnknownConfig {
        text: line.to_string(),
        line: number,
    })?;
    let value = value.trim();
    let (category, units) = split_units(key);

    match category.as_str() {
        "Version/Phase" => config.general.version = Some(value.to_string()),
        "File Path" => config.general.metadata_path = Some(value.to_string()),
        "Processor cycle time" => {
            config.timing.processor_ms = parse_number(&category, units, "msec", value)?;
        }
        "Monitor display time" => {
            config.timing.monitor_ms = parse_number(&category, units, "msec", value)?;
        }
        "Hard drive cycle time" => {
            config.timing.harddrive_ms = parse_number(&category, units, "msec", value)?;
        }
        "Printer cycle time" => {
            config.timing.printer_ms = parse_number(&category, units, "msec", value)?;
        }
        "Keyboard cycle time" => {
            config.timing.keyboard_ms = parse_number(&category, units, "msec", value)?;
        }
        "Memory cycle time" => {
            config.timing.memory_ms = parse_number(&category, units, "msec", value)?;
        }
        "System memory" => {
            config.memory.system_kbytes = parse_number(&category, units, "kbytes", value)?;
        }
        "Memory block size" => {
            config.memory.block_kbytes = parse_number(&category, units, "kbytes", value)?;
        }
        "Printer quantity" => config.resources.printers = parse_quantity(&category, units, value)?,
        "Hard drive quantity" => {
            config.resources.harddrives = parse_quantity(&category, units, value)?;
        }
        "Keyboard quantity" => {
            config.resources.keyboards = parse_quantity(&category, units, value)?;
        }
        "Monitor quantity" => config.resources.monitors = parse_quantity(&category, units, value)?,
        "Log" => config.log.target = parse_log_target(value)?,
        "Log File Path" => config.log.file_path = Some(value.to_string()),
        _ => {
            return Err(SimError::UnknownConfig {
                text: line.to_string(),
                line: number,
            });
        }
    }
    Ok(())
}

/// Splits a raw category key into its name and braced units, normalizing
/// interior whitespace in the name.
fn split_units(key: &str) -> (String, Option<String>) {
    let (name, units) = match (key.find('{'), key.rfind('}')) {
        (Some(open), Some(close)) if open < close => {
            let units = key[open + 1..close].trim().to_string();
            let name = format!("{} {}", &key[..open], &key[close + 1..]);
            (name, Some(units))
        }
        _ => (key.to_string(), None),
    };
    let name = name.split_whitespace().collect::<Vec<_>>().join(" ");
    (name, units)
}

/// Parses a numeric category value, requiring its exact units.
fn parse_number<T: std::str::FromStr>(
    category: &str,
    units: Option<String>,
    expected_units: &str,
    value: &str,
) -> SimResult<T> {
    match units {
        Some(units) if units == expected_units => {}
        units => {
            return Err(SimError::InvalidUnits {
                units: units.unwrap_or_default(),
                category: category.to_string(),
            });
        }
    }
    value.parse().map_err(|_| SimError::InvalidValue {
        category: category.to_string(),
        value: value.to_string(),
    })
}

/// Parses a device quantity, which carries no units.
fn parse_quantity(category: &str, units: Option<String>, value: &str) -> SimResult<usize> {
    if let Some(units) = units {
        return Err(SimError::InvalidUnits {
            units,
            category: category.to_string(),
        });
    }
    value.parse().map_err(|_| SimError::InvalidValue {
        category: category.to_string(),
        value: value.to_string(),
    })
}

fn parse_log_target(value: &str) -> SimResult<LogTarget> {
    match value {
        "Log to Monitor" => Ok(LogTarget::Monitor),
        "Log to File" => Ok(LogTarget::File),
        "Log to Both" => Ok(LogTarget::Both),
        _ => Err(SimError::InvalidValue {
            category: "Log".to_string(),
            value: value.to_string(),
        }),
    }
}
