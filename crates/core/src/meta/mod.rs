//! Operation metadata language.
//!
//! Programs are described by a flat stream of metadata entries such as
//! `S(start)0; A(start)0; P(run)6; A(end)0; S(end)0`. This module defines:
//! 1. **Codes and descriptors:** The six operation codes and nine descriptors.
//! 2. **Metadata:** A parsed entry (code, descriptor, cycle count, source line).
//! 3. **Parser:** Tokenizer for the line-oriented metadata file format.
//! 4. **Catalog:** Validation of code/descriptor pairings and attachment of
//!    per-cycle time costs from configuration.

/// Code/descriptor pairing validation and operation construction.
pub mod catalog;

/// Tokenizer for the metadata file format.
pub mod parser;

use std::fmt;

pub use catalog::build_operations;
pub use parser::parse_metadata;

/// Operation code: the single-letter class of a metadata entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpCode {
    /// `S` — operating-system bracketing (start/end of the whole stream).
    System,
    /// `A` — program (application) bracketing.
    Program,
    /// `P` — processor work.
    Process,
    /// `I` — input on a shared device.
    Input,
    /// `O` — output on a shared device.
    Output,
    /// `M` — memory operation.
    Memory,
}

impl OpCode {
    /// Long-form name of the code, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            OpCode::System => "system",
            OpCode::Program => "program",
            OpCode::Process => "process",
            OpCode::Input => "input",
            OpCode::Output => "output",
            OpCode::Memory => "memory",
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            OpCode::System => "S",
            OpCode::Program => "A",
            OpCode::Process => "P",
            OpCode::Input => "I",
            OpCode::Output => "O",
            OpCode::Memory => "M",
        };
        f.write_str(letter)
    }
}

/// Operation descriptor: the parenthesized action of a metadata entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Descriptor {
    /// `(start)` — legal with `S` and `A`.
    Start,
    /// `(run)` — legal with `P` only.
    Run,
    /// `(end)` — legal with `S` and `A`.
    End,
    /// `(allocate)` — legal with `M`.
    Allocate,
    /// `(printer)` — legal with `O`.
    Printer,
    /// `(keyboard)` — legal with `I`.
    Keyboard,
    /// `(hard drive)` — legal with `I` and `O`.
    HardDrive,
    /// `(monitor)` — legal with `O`.
    Monitor,
    /// `(cache)` — legal with `M`.
    Cache,
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Descriptor::Start => "start",
            Descriptor::Run => "run",
            Descriptor::End => "end",
            Descriptor::Allocate => "allocate",
            Descriptor::Printer => "printer",
            Descriptor::Keyboard => "keyboard",
            Descriptor::HardDrive => "hard drive",
            Descriptor::Monitor => "monitor",
            Descriptor::Cache => "cache",
        };
        f.write_str(text)
    }
}

/// One parsed metadata entry.
///
/// The source line is carried through so load-time errors can name it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metadata {
    /// Operation code.
    pub code: OpCode,
    /// Operation descriptor.
    pub descriptor: Descriptor,
    /// Cycle count for the operation.
    pub cycles: u32,
    /// Line number of the entry in the metadata file (1-based).
    pub line: usize,
}

impl fmt::Display for Metadata {
    /// Renders the entry in its source form, e.g. `P(run)6`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}){}", self.code, self.descriptor, self.cycles)
    }
}

/// A runnable operation: a metadata entry plus its per-cycle time cost.
///
/// Constructed once by the catalog and immutable thereafter; consumed in FIFO
/// order by exactly one program executor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    /// The metadata entry this operation was built from.
    pub meta: Metadata,
    /// Milliseconds of simulated time per cycle.
    pub time_per_cycle: u32,
}

impl Operation {
    /// Total simulated duration of the operation in milliseconds.
    #[inline]
    pub fn duration_ms(&self) -> u64 {
        u64::from(self.meta.cycles) * u64::from(self.time_per_cycle)
    }
}
