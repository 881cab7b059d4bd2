//! Report formatting.
//!
//! Renders the human-readable run report: the configuration section, the
//! metadata metrics section (total simulated duration per timed operation),
//! and the execution trace, concatenated in that order. On a failed run the
//! trace ends at the point of failure and the error string is appended.

use std::fmt::Write as _;

use crate::common::error::SimError;
use crate::config::{Config, LogTarget};
use crate::meta::Operation;
use crate::trace::Trace;

/// Renders the configuration section.
///
/// Cycle-time categories are listed as `<category> = <n> ms/cycle`, device
/// quantities as `<category> quantity = <n>`, followed by the log destination.
pub fn render_config(config: &Config) -> String {
    let mut out = String::new();
    out.push_str("Configuration File Data\n");

    let cycle_lines = [
        ("Processor", config.timing.processor_ms),
        ("Monitor", config.timing.monitor_ms),
        ("Hard drive", config.timing.harddrive_ms),
        ("Printer", config.timing.printer_ms),
        ("Keyboard", config.timing.keyboard_ms),
        ("Memory", config.timing.memory_ms),
    ];
    for (category, ms) in cycle_lines {
        let _ = writeln!(out, "{category} = {ms} ms/cycle");
    }

    let quantity_lines = [
        ("Printer", config.resources.printers),
        ("Hard drive", config.resources.harddrives),
        ("Keyboard", config.resources.keyboards),
        ("Monitor", config.resources.monitors),
    ];
    for (category, quantity) in quantity_lines {
        let _ = writeln!(out, "{category} quantity = {quantity}");
    }

    let file_path = config.log.file_path.as_deref().unwrap_or("");
    match config.log.target {
        LogTarget::Monitor => out.push_str("Logged to: monitor\n"),
        LogTarget::File => {
            let _ = writeln!(out, "Logged to: {file_path}");
        }
        LogTarget::Both => {
            let _ = writeln!(out, "Logged to: monitor and {file_path}");
        }
    }
    out.push('\n');
    out
}

/// Renders the metadata metrics section.
///
/// Each operation with a nonzero cycle count is listed with its total
/// simulated duration, e.g. `P(run)6 - 60 ms`.
pub fn render_metrics(operations: &[Operation]) -> String {
    let mut out = String::new();
    out.push_str("Meta-Data Metrics\n");
    for op in operations {
        if op.meta.cycles != 0 {
            let _ = writeln!(out, "{} - {} ms", op.meta, op.duration_ms());
        }
    }
    out.push('\n');
    out
}

/// Renders the full report: configuration, metrics, trace, and error if any.
pub fn render(
    config: &Config,
    operations: &[Operation],
    trace: &Trace,
    error: Option<&SimError>,
) -> String {
    let mut out = String::new();
    out.push_str(&render_config(config));
    out.push_str(&render_metrics(operations));
    out.push_str(&trace.render());
    if let Some(error) = error {
        let _ = writeln!(out, "Simulator failed to run properly: {error}");
    }
    out
}
