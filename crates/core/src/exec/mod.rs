//! Program execution.
//!
//! This module drives parsed operation streams through their lifecycle:
//! 1. **Process control:** Program identifiers, process states, and the PCB.
//! 2. **Executor:** One [`program::ProgramExecutor`] per program, draining its
//!    FIFO operation queue against the shared machine.
//! 3. **Scheduler:** The [`scheduler::Scheduler`] loop that builds executors
//!    from the stream and runs them to completion in creation order.

/// Per-program operation execution.
pub mod program;

/// Sequential scheduler loop.
pub mod scheduler;

use std::fmt;

pub use program::ProgramExecutor;
pub use scheduler::{RunOutcome, Scheduler};

/// Identifier of a simulated program, assigned sequentially from 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProgramId(pub u32);

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a program.
///
/// Transitions are strictly monotonic: `New → Ready → Running → Exit`, each
/// state visited exactly once, never backward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProcessState {
    /// Created; not yet given the shared start-time reference.
    New,
    /// Queued for execution.
    Ready,
    /// Currently draining its operation queue.
    Running,
    /// Finished, successfully or not.
    Exit,
}

/// Per-program state record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessControlBlock {
    /// Program identifier.
    pub pid: ProgramId,
    /// Count of operations completed.
    pub counter: u32,
    /// Carried but unused by the sequential scheduler.
    pub priority: u32,
    /// Current lifecycle state.
    pub state: ProcessState,
}

impl ProcessControlBlock {
    /// Creates a PCB in the `New` state with a zeroed program counter.
    pub fn new(pid: ProgramId) -> Self {
        Self {
            pid,
            counter: 0,
            priority: 0,
            state: ProcessState::New,
        }
    }

    /// Moves to `next`, which must be strictly later in the lifecycle.
    pub fn advance(&mut self, next: ProcessState) {
        debug_assert!(next > self.state, "state transition must be monotonic");
        self.state = next;
    }
}
