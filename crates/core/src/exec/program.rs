//! Per-program operation execution.
//!
//! A `ProgramExecutor` owns one program's PCB and FIFO operation queue. It
//! executes against the shared machine handed to `run`, holding for each
//! operation's full simulated duration and buffering its own trace events.
//! The first failing operation stops the drain; queued operations behind it
//! are never executed.

use std::collections::VecDeque;

use tracing::debug;

use crate::common::clock::{hold_target, Clock};
use crate::common::error::{SimError, SimResult};
use crate::exec::{ProcessControlBlock, ProcessState, ProgramId};
use crate::meta::{Descriptor, OpCode, Operation};
use crate::system::{ResourceKind, System};
use crate::trace::TraceEvent;

/// Executes one program's operation queue against the shared machine.
#[derive(Debug)]
pub struct ProgramExecutor {
    pcb: ProcessControlBlock,
    queue: VecDeque<Operation>,
    events: Vec<TraceEvent>,
}

impl ProgramExecutor {
    /// Creates an executor in the `New` state with an empty queue.
    pub fn new(pid: ProgramId) -> Self {
        Self {
            pcb: ProcessControlBlock::new(pid),
            queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Returns this program's identifier.
    pub fn pid(&self) -> ProgramId {
        self.pcb.pid
    }

    /// Returns the process control block.
    pub fn pcb(&self) -> &ProcessControlBlock {
        &self.pcb
    }

    /// Appends an operation to the back of the queue.
    pub fn enqueue(&mut self, op: Operation) {
        self.queue.push_back(op);
    }

    /// Marks the program ready once the shared start reference exists.
    pub fn make_ready(&mut self) {
        self.pcb.advance(ProcessState::Ready);
    }

    /// Marks the program exited; valid after both success and failure.
    pub fn exit(&mut self) {
        self.pcb.advance(ProcessState::Exit);
    }

    /// Takes the buffered trace events, leaving the buffer empty.
    pub fn take_events(&mut self) -> Vec<TraceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drains the operation queue front to back.
    ///
    /// Each completed operation increments the program counter and is popped.
    /// The first error stops execution immediately and is returned; the
    /// remaining queue is left untouched so the caller can inspect it.
    pub fn run(&mut self, system: &mut System, clock: &dyn Clock) -> SimResult<()> {
        self.pcb.advance(ProcessState::Running);

        while let Some(op) = self.queue.front().copied() {
            self.execute(&op, system, clock)?;
            self.pcb.counter += 1;
            let _ = self.queue.pop_front();
        }
        Ok(())
    }

    /// Dispatches one operation by its (code, descriptor) pair.
    fn execute(&mut self, op: &Operation, system: &mut System, clock: &dyn Clock) -> SimResult<()> {
        match (op.meta.code, op.meta.descriptor) {
            (OpCode::Process, Descriptor::Run) => {
                self.log(clock, "processing action: start".to_string());
                self.hold(clock, op.duration_ms());
                self.log(clock, "processing action: end".to_string());
                Ok(())
            }
            (OpCode::Input, Descriptor::Keyboard) => {
                self.run_io(op, ResourceKind::Keyboard, "keyboard input", system, clock)
            }
            (OpCode::Input, Descriptor::HardDrive) => self.run_io(
                op,
                ResourceKind::HardDrive,
                "hard drive input",
                system,
                clock,
            ),
            (OpCode::Output, Descriptor::Printer) => {
                self.run_io(op, ResourceKind::Printer, "printer output", system, clock)
            }
            (OpCode::Output, Descriptor::HardDrive) => self.run_io(
                op,
                ResourceKind::HardDrive,
                "hard drive output",
                system,
                clock,
            ),
            (OpCode::Output, Descriptor::Monitor) => {
                self.run_io(op, ResourceKind::Monitor, "monitor output", system, clock)
            }
            (OpCode::Memory, Descriptor::Allocate) => {
                self.log(clock, "allocating memory".to_string());
                let address = system.allocator.allocate()?;
                self.hold(clock, op.duration_ms());
                self.log(clock, format!("memory allocated at {address}"));
                Ok(())
            }
            (OpCode::Memory, Descriptor::Cache) => {
                self.log(clock, "memory caching: start".to_string());
                self.hold(clock, op.duration_ms());
                self.log(clock, "memory caching: end".to_string());
                Ok(())
            }
            // The catalog rejects every other pairing at load time; reaching
            // here is an internal-consistency defect.
            _ => Err(SimError::UnhandledOperation {
                op: op.meta.to_string(),
            }),
        }
    }

    /// Runs a device operation: reserve, assign, hold, release.
    ///
    /// Pool exhaustion aborts the program; the pool never queues waiters.
    /// The end line names the slot that was granted (`... end - HDD 0`).
    fn run_io(
        &mut self,
        op: &Operation,
        kind: ResourceKind,
        label: &str,
        system: &mut System,
        clock: &dyn Clock,
    ) -> SimResult<()> {
        self.log(clock, format!("{label}: start"));

        let pool = system.pool_mut(kind);
        if !pool.reserve() {
            return Err(SimError::PoolExhausted { kind });
        }
        let slot = pool.assign(self.pcb.pid)?;

        self.hold(clock, op.duration_ms());

        system.pool_mut(kind).release(self.pcb.pid);
        self.log(clock, format!("{label}: end - {} {slot}", kind.tag()));
        Ok(())
    }

    /// Holds until the operation's target completion time.
    fn hold(&self, clock: &dyn Clock, duration_ms: u64) {
        clock.hold_until(hold_target(clock, duration_ms));
    }

    /// Buffers one trace event stamped at the current elapsed time.
    fn log(&mut self, clock: &dyn Clock, text: String) {
        debug!(pid = self.pcb.pid.0, "{text}");
        self.events.push(TraceEvent::Program {
            at: clock.elapsed_secs(),
            pid: self.pcb.pid,
            text,
        });
    }
}
