//! Timestamped execution trace.
//!
//! Every observable action in a run is recorded as a [`TraceEvent`] with the
//! seconds elapsed since the run's single shared start reference. Each program
//! buffers its own immutable event sequence; the scheduler concatenates the
//! sequences in execution order. There is no shared mutable log buffer and no
//! reordering for formatting.

use std::fmt;

use crate::exec::ProgramId;

/// A single trace event produced by the run.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// The run's opening line, stamped at (near) zero elapsed time.
    RunStart {
        /// Seconds since the start reference.
        at: f64,
    },
    /// A system-level action on a program (loading, starting, terminating).
    ///
    /// Loading happens before the start reference exists and carries no stamp.
    OsAction {
        /// Seconds since the start reference, when stamped.
        at: Option<f64>,
        /// The program acted upon.
        pid: ProgramId,
        /// Action text, e.g. `starting application`.
        action: &'static str,
    },
    /// A line emitted by a program executor as an operation progresses.
    Program {
        /// Seconds since the start reference.
        at: f64,
        /// The emitting program.
        pid: ProgramId,
        /// Event text, e.g. `processing action: start`.
        text: String,
    },
}

impl fmt::Display for TraceEvent {
    /// Renders one newline-less trace line, e.g.
    /// `0.000216 - Application 1: processing action: start`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::RunStart { at } => {
                write!(f, "{at:.6} - Simulator program starting")
            }
            TraceEvent::OsAction { at, pid, action } => {
                if let Some(at) = at {
                    write!(f, "{at:.6} - ")?;
                }
                write!(f, "OS: {action} {pid}")
            }
            TraceEvent::Program { at, pid, text } => {
                write!(f, "{at:.6} - Application {pid}: {text}")
            }
        }
    }
}

/// A complete run trace: all events in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one event.
    pub fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }

    /// Appends a program's buffered event sequence, preserving its order.
    pub fn append(&mut self, events: Vec<TraceEvent>) {
        self.events.extend(events);
    }

    /// All events in execution order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Renders the trace as newline-terminated text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for event in &self.events {
            out.push_str(&event.to_string());
            out.push('\n');
        }
        out
    }
}
