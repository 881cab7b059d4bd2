//! # Scheduler Tests
//!
//! Stream structure validation, trace ordering across programs, per-program
//! memory reset, and failure propagation.

use osmium_core::common::clock::VirtualClock;
use osmium_core::exec::{ProgramId, Scheduler};
use osmium_core::system::ResourceKind;
use osmium_core::trace::TraceEvent;
use osmium_core::{Config, SimError, System};

use crate::common::{build_operations, program_lines, run_virtual};

fn load(entries: &str) -> Result<Scheduler, SimError> {
    Scheduler::load(&build_operations(entries, &Config::default()))
}

#[test]
fn test_empty_stream_is_not_started() {
    assert!(matches!(
        Scheduler::load(&[]),
        Err(SimError::OsNotStarted)
    ));
}

#[test]
fn test_stream_must_open_with_system_start() {
    let result = load("A(start)0; A(end)0; S(end)0.");
    assert!(matches!(result, Err(SimError::OsNotStarted)));
}

#[test]
fn test_stream_must_close_with_system_end() {
    let result = load("S(start)0; A(start)0; A(end)0.");
    assert!(matches!(result, Err(SimError::OsNotEnded)));
}

#[test]
fn test_lone_system_start_is_not_ended() {
    let result = load("S(start)0.");
    assert!(matches!(result, Err(SimError::OsNotEnded)));
}

#[test]
fn test_interior_system_start_is_rejected() {
    let result = load("S(start)0; S(start)0; S(end)0.");
    assert!(matches!(result, Err(SimError::OsRestarted)));
}

#[test]
fn test_interior_system_end_is_rejected() {
    let result = load("S(start)0; S(end)0; A(start)0; A(end)0; S(end)0.");
    assert!(matches!(result, Err(SimError::OsEndedEarly)));
}

#[test]
fn test_work_outside_a_program_is_rejected() {
    let result = load("S(start)0; P(run)3; S(end)0.");
    assert_eq!(
        result.err(),
        Some(SimError::NoOpenProgram {
            op: "P(run)3".to_string(),
        })
    );
}

#[test]
fn test_work_after_program_end_is_rejected() {
    let result = load("S(start)0; A(start)0; A(end)0; P(run)3; S(end)0.");
    assert_eq!(
        result.err(),
        Some(SimError::NoOpenProgram {
            op: "P(run)3".to_string(),
        })
    );
}

#[test]
fn test_rejection_is_idempotent() {
    let entries = "S(start)0; A(start)0; A(end)0.";
    let first = load(entries).err();
    let second = load(entries).err();
    assert_eq!(first, Some(SimError::OsNotEnded));
    assert_eq!(first, second);
}

#[test]
fn test_programs_are_numbered_in_stream_order() {
    let scheduler = load(
        "S(start)0; A(start)0; A(end)0; A(start)0; A(end)0; A(start)0; A(end)0; S(end)0.",
    )
    .unwrap();
    assert_eq!(scheduler.program_count(), 3);
}

#[test]
fn test_trace_orders_loading_then_run_then_programs() {
    let (_, outcome) = run_virtual(
        "S(start)0; A(start)0; P(run)1; A(end)0; A(start)0; P(run)1; A(end)0; S(end)0.",
        Config::default(),
    );
    outcome.result.unwrap();

    let lines: Vec<String> = outcome
        .trace
        .events()
        .iter()
        .map(ToString::to_string)
        .collect();

    assert_eq!(lines[0], "OS: loading application 1");
    assert_eq!(lines[1], "OS: loading application 2");
    assert_eq!(lines[2], "0.000000 - Simulator program starting");
    assert_eq!(lines[3], "0.000000 - OS: starting application 1");
    assert_eq!(lines[4], "0.009200 - OS: terminating application 1");
    assert_eq!(lines[5], "0.000000 - Application 1: processing action: start");
    assert_eq!(lines[6], "0.009200 - Application 1: processing action: end");
    assert_eq!(lines[7], "0.009200 - OS: starting application 2");
    assert_eq!(lines[8], "0.018400 - OS: terminating application 2");
    assert_eq!(lines[9], "0.009200 - Application 2: processing action: start");
    assert_eq!(lines[10], "0.018400 - Application 2: processing action: end");
    assert_eq!(lines.len(), 11);
}

#[test]
fn test_each_program_gets_fresh_memory() {
    let (_, outcome) = run_virtual(
        "S(start)0; A(start)0; M(allocate)1; A(end)0; A(start)0; M(allocate)1; A(end)0; S(end)0.",
        Config::default(),
    );
    outcome.result.as_ref().unwrap();

    let allocations: Vec<String> = program_lines(&outcome)
        .into_iter()
        .filter(|line| line.starts_with("memory allocated"))
        .collect();

    assert_eq!(
        allocations,
        vec![
            "memory allocated at 0x00000000",
            "memory allocated at 0x00000000",
        ]
    );
}

#[test]
fn test_failure_names_the_program_and_keeps_partial_trace() {
    let mut config = Config::default();
    config.resources.harddrives = 0;
    let (_, outcome) = run_virtual(
        "S(start)0; A(start)0; P(run)1; A(end)0; A(start)0; I(hard drive)2; A(end)0; S(end)0.",
        config,
    );

    assert_eq!(
        outcome.result,
        Err(SimError::PoolExhausted {
            kind: ResourceKind::HardDrive,
        }
        .in_program(ProgramId(2)))
    );

    let lines = program_lines(&outcome);
    assert_eq!(
        lines,
        vec![
            "processing action: start",
            "processing action: end",
            "hard drive input: start",
        ]
    );
    // No terminating line for the failed program.
    let rendered = outcome.trace.render();
    assert!(rendered.contains("terminating application 1"));
    assert!(!rendered.contains("terminating application 2"));
}

#[test]
fn test_failure_stops_later_programs() {
    let mut config = Config::default();
    config.memory.system_kbytes = 0;
    let (_, outcome) = run_virtual(
        "S(start)0; A(start)0; M(allocate)1; A(end)0; A(start)0; P(run)1; A(end)0; S(end)0.",
        config,
    );

    assert_eq!(
        outcome.result,
        Err(SimError::OutOfMemory.in_program(ProgramId(1)))
    );
    let rendered = outcome.trace.render();
    assert!(!rendered.contains("starting application 2"));
}

#[test]
fn test_run_consumes_the_scheduler_once() {
    let config = Config::default();
    let scheduler = load("S(start)0; A(start)0; P(run)1; A(end)0; S(end)0.").unwrap();
    let mut system = System::from_config(&config);
    let clock = VirtualClock::new();

    let outcome = scheduler.run(&mut system, &clock);
    outcome.result.unwrap();
    assert!(matches!(
        outcome.trace.events().first(),
        Some(TraceEvent::OsAction { at: None, .. })
    ));
}
