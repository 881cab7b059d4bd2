//! Sequential scheduler loop.
//!
//! The scheduler walks the validated operation stream once to build a program
//! executor per `A(start)`/`A(end)` pair, then runs the executors to
//! completion in creation order. Programs never run concurrently; a program's
//! failure aborts the remaining schedule and surfaces as a single error
//! wrapped with the program's id.

use tracing::info;

use crate::common::clock::Clock;
use crate::common::error::{SimError, SimResult};
use crate::exec::{ProgramExecutor, ProgramId};
use crate::meta::{Descriptor, OpCode, Operation};
use crate::system::System;
use crate::trace::{Trace, TraceEvent};

/// Result of a scheduler run: the trace up to the point the run stopped, and
/// whether it stopped by completing or by failing.
///
/// On failure the trace still contains every line emitted before the failure
/// point, including the failing program's partial log.
#[derive(Debug)]
pub struct RunOutcome {
    /// Ordered trace of the whole run.
    pub trace: Trace,
    /// `Ok(())` on completion, or the first error encountered.
    pub result: SimResult<()>,
}

/// Builds and runs the per-program executors for one operation stream.
#[derive(Debug)]
pub struct Scheduler {
    programs: Vec<ProgramExecutor>,
    load_events: Vec<TraceEvent>,
}

impl Scheduler {
    /// Splits the operation stream into program queues.
    ///
    /// The stream must be bracketed by `S(start)` and `S(end)`; interior
    /// system operations and work operations outside a program are structure
    /// violations that reject the stream before anything executes. Rejection
    /// is pure: loading the same stream twice yields the identical error.
    pub fn load(operations: &[Operation]) -> SimResult<Self> {
        let first = operations.first().ok_or(SimError::OsNotStarted)?;
        if !(first.meta.code == OpCode::System && first.meta.descriptor == Descriptor::Start) {
            return Err(SimError::OsNotStarted);
        }
        let last = operations.last().ok_or(SimError::OsNotEnded)?;
        if operations.len() < 2
            || !(last.meta.code == OpCode::System && last.meta.descriptor == Descriptor::End)
        {
            return Err(SimError::OsNotEnded);
        }

        let mut programs: Vec<ProgramExecutor> = Vec::new();
        let mut load_events = Vec::new();
        let mut current: Option<usize> = None;

        for op in &operations[1..operations.len() - 1] {
            match op.meta.code {
                OpCode::System => {
                    return Err(match op.meta.descriptor {
                        Descriptor::Start => SimError::OsRestarted,
                        _ => SimError::OsEndedEarly,
                    });
                }
                OpCode::Program => match op.meta.descriptor {
                    Descriptor::Start => {
                        let pid = ProgramId(programs.len() as u32 + 1);
                        programs.push(ProgramExecutor::new(pid));
                        current = Some(programs.len() - 1);
                        info!(pid = pid.0, "loading application");
                        load_events.push(TraceEvent::OsAction {
                            at: None,
                            pid,
                            action: "loading application",
                        });
                    }
                    _ => current = None,
                },
                OpCode::Process | OpCode::Input | OpCode::Output | OpCode::Memory => match current {
                    Some(index) => programs[index].enqueue(*op),
                    None => {
                        return Err(SimError::NoOpenProgram {
                            op: op.meta.to_string(),
                        });
                    }
                },
            }
        }

        Ok(Self {
            programs,
            load_events,
        })
    }

    /// Number of programs the stream defined.
    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Runs every program to completion in creation order.
    ///
    /// The clock is the run's single shared start reference; every timestamp
    /// in the trace is relative to it. Each program gets fresh memory (the
    /// allocator is reset before its first operation). A program failure
    /// stops the loop; its partial log stays in the trace.
    pub fn run(mut self, system: &mut System, clock: &dyn Clock) -> RunOutcome {
        let mut trace = Trace::new();
        trace.append(self.load_events);
        trace.record(TraceEvent::RunStart {
            at: clock.elapsed_secs(),
        });

        for program in &mut self.programs {
            let pid = program.pid();
            program.make_ready();
            trace.record(TraceEvent::OsAction {
                at: Some(clock.elapsed_secs()),
                pid,
                action: "starting application",
            });
            info!(pid = pid.0, "starting application");

            system.allocator.reset();
            match program.run(system, clock) {
                Ok(()) => {
                    trace.record(TraceEvent::OsAction {
                        at: Some(clock.elapsed_secs()),
                        pid,
                        action: "terminating application",
                    });
                    program.exit();
                    trace.append(program.take_events());
                    info!(pid = pid.0, "terminating application");
                }
                Err(error) => {
                    program.exit();
                    trace.append(program.take_events());
                    return RunOutcome {
                        trace,
                        result: Err(error.in_program(pid)),
                    };
                }
            }
        }

        RunOutcome {
            trace,
            result: Ok(()),
        }
    }
}
