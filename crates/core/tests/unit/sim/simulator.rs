//! # Simulator Driver Tests
//!
//! Initialization ordering, metadata loading from disk, repeated runs, and
//! report assembly.

use std::io::Write;

use osmium_core::common::clock::VirtualClock;
use osmium_core::{Config, SimError, Simulator};

use crate::common::wrap_metadata;

const STREAM: &str = "S(start)0; A(start)0; P(run)2; A(end)0; S(end)0.";

#[test]
fn test_run_before_initialize_fails() {
    let simulator = Simulator::new(Config::default());
    let clock = VirtualClock::new();

    let outcome = simulator.run_with_clock(&clock);
    assert_eq!(outcome.result, Err(SimError::NotInitialized));
    assert!(outcome.trace.events().is_empty());
}

#[test]
fn test_initialize_requires_a_metadata_path() {
    let mut simulator = Simulator::new(Config::default());
    assert_eq!(simulator.initialize(), Err(SimError::MissingMetaPath));
}

#[test]
fn test_initialize_reads_the_configured_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(wrap_metadata(STREAM).as_bytes()).unwrap();

    let mut config = Config::default();
    config.general.metadata_path = Some(file.path().display().to_string());

    let mut simulator = Simulator::new(config);
    simulator.initialize().unwrap();
    assert_eq!(simulator.operations().len(), 5);
}

#[test]
fn test_initialize_missing_file() {
    let mut config = Config::default();
    config.general.metadata_path = Some("no_such_file.mdf".to_string());

    let mut simulator = Simulator::new(config);
    assert_eq!(
        simulator.initialize(),
        Err(SimError::FileNotFound {
            path: "no_such_file.mdf".to_string(),
        })
    );
}

#[test]
fn test_successful_run_produces_a_trace() {
    let mut simulator = Simulator::new(Config::default());
    simulator.load_metadata_str(&wrap_metadata(STREAM)).unwrap();

    let clock = VirtualClock::new();
    let outcome = simulator.run_with_clock(&clock);

    outcome.result.unwrap();
    let rendered = outcome.trace.render();
    assert!(rendered.contains("Simulator program starting"));
    assert!(rendered.contains("processing action: end"));
}

#[test]
fn test_runs_are_independent() {
    let mut simulator = Simulator::new(Config::default());
    simulator.load_metadata_str(&wrap_metadata(
        "S(start)0; A(start)0; M(allocate)1; O(printer)1; A(end)0; S(end)0.",
    ))
    .unwrap();

    for _ in 0..2 {
        let clock = VirtualClock::new();
        let outcome = simulator.run_with_clock(&clock);
        outcome.result.unwrap();
        assert!(outcome
            .trace
            .render()
            .contains("memory allocated at 0x00000000"));
    }
}

#[test]
fn test_invalid_metadata_is_rejected_at_load() {
    let mut simulator = Simulator::new(Config::default());
    let result = simulator.load_metadata_str(&wrap_metadata("S(start)0; I(printer)3; S(end)0."));
    assert!(result.is_err());
}

#[test]
fn test_report_contains_all_sections() {
    let mut simulator = Simulator::new(Config::default());
    simulator.load_metadata_str(&wrap_metadata(STREAM)).unwrap();

    let clock = VirtualClock::new();
    let outcome = simulator.run_with_clock(&clock);
    let report = simulator.report(&outcome);

    assert!(report.starts_with("Configuration File Data\n"));
    assert!(report.contains("Meta-Data Metrics\n"));
    assert!(report.contains("P(run)2 - 20 ms"));
    assert!(report.contains("Simulator program starting"));
    assert!(!report.contains("Simulator failed to run properly"));
}

#[test]
fn test_report_ends_with_the_failure_line() {
    let mut config = Config::default();
    config.resources.keyboards = 0;

    let mut simulator = Simulator::new(config);
    simulator
        .load_metadata_str(&wrap_metadata(
            "S(start)0; A(start)0; I(keyboard)3; A(end)0; S(end)0.",
        ))
        .unwrap();

    let clock = VirtualClock::new();
    let outcome = simulator.run_with_clock(&clock);
    assert!(outcome.result.is_err());

    let report = simulator.report(&outcome);
    assert!(report.ends_with(
        "Simulator failed to run properly: \
         application 1 failed to execute instructions \"out of keyboards\"\n"
    ));
}
