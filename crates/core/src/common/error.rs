//! Simulation error definitions.
//!
//! One error type covers every failure path in the crate. The policy is
//! short-circuit: the first error encountered stops the current program,
//! aborts the remaining schedule, and is surfaced to the caller as a single
//! descriptive message. Nothing is retried and nothing is swallowed.

use thiserror::Error;

use crate::exec::ProgramId;
use crate::system::resource::ResourceKind;

/// A type alias for `Result<T, SimError>`.
pub type SimResult<T> = Result<T, SimError>;

/// Errors raised while loading, validating, or executing a simulation.
///
/// Load-time variants (pairing, parsing, configuration) abort before any
/// program executes. Runtime variants (pool exhaustion, out of memory) abort
/// the owning program and, through [`SimError::Program`], the whole run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// A metadata entry paired a descriptor with a code that does not accept it.
    #[error("metadata descriptor \"{descriptor}\" is not valid for metadata code \"{}\" at line {line}", .code.name())]
    InvalidPairing {
        /// The operation code of the offending entry.
        code: crate::meta::OpCode,
        /// The descriptor that is not legal for `code`.
        descriptor: crate::meta::Descriptor,
        /// Source line of the entry in the metadata file.
        line: usize,
    },

    /// A metadata entry began with a letter that is not a known code.
    #[error("unknown metadata code in entry \"{entry}\" at line {line}")]
    UnknownCode {
        /// The raw entry text.
        entry: String,
        /// Source line of the entry.
        line: usize,
    },

    /// A metadata entry's parenthesized descriptor is not recognized.
    #[error("unknown metadata descriptor in entry \"{entry}\" at line {line}")]
    UnknownDescriptor {
        /// The raw entry text.
        entry: String,
        /// Source line of the entry.
        line: usize,
    },

    /// A metadata entry's trailing cycle count did not parse as an integer.
    #[error("invalid metadata cycle number in entry \"{entry}\" at line {line}")]
    InvalidCycles {
        /// The raw entry text.
        entry: String,
        /// Source line of the entry.
        line: usize,
    },

    /// The metadata file is missing its start or end bracketing line.
    #[error("invalid start/end metadata syntax")]
    MetaBracketing,

    /// The configuration file is missing its start or end bracketing line.
    #[error("invalid start/end configuration syntax")]
    ConfigBracketing,

    /// A configuration line did not match any known category.
    #[error("unknown configuration \"{text}\" -- line {line}")]
    UnknownConfig {
        /// The raw line text.
        text: String,
        /// Line number within the configuration file.
        line: usize,
    },

    /// A configuration category carried units other than the ones it requires.
    #[error("invalid units \"{units}\" not recognized for \"{category}\"")]
    InvalidUnits {
        /// The units found in the file.
        units: String,
        /// The category they were attached to.
        category: String,
    },

    /// A configuration value failed to parse for its category.
    #[error("failed to parse {category}: \"{value}\"")]
    InvalidValue {
        /// The category being parsed.
        category: String,
        /// The raw value text.
        value: String,
    },

    /// The configuration named no metadata file to execute.
    #[error("no file path specified in configuration file")]
    MissingMetaPath,

    /// A referenced file could not be opened.
    #[error("file not found \"{path}\"")]
    FileNotFound {
        /// The path that failed to open.
        path: String,
    },

    /// `run` was called before the metadata stream was loaded.
    #[error("simulator not initialized")]
    NotInitialized,

    /// The operation stream did not begin with `S(start)`.
    #[error("operating system not started in metadata")]
    OsNotStarted,

    /// The operation stream did not end with `S(end)`.
    #[error("operating system not ended in metadata")]
    OsNotEnded,

    /// A second `S(start)` appeared inside the stream.
    #[error("operating system can not be started again in metadata")]
    OsRestarted,

    /// An `S(end)` appeared before the end of the stream.
    #[error("operating system can not be ended until end of metadata")]
    OsEndedEarly,

    /// A process/input/output/memory operation appeared with no open program.
    #[error("no application to assign operation \"{op}\"")]
    NoOpenProgram {
        /// The rendered operation entry (e.g. `P(run)6`).
        op: String,
    },

    /// A device pool had no free units for a reserve request.
    #[error("out of {kind}s")]
    PoolExhausted {
        /// The exhausted pool.
        kind: ResourceKind,
    },

    /// A slot assignment was attempted without a prior successful reserve.
    ///
    /// `reserve` gates entry to `assign`; hitting this is an accounting defect
    /// in the caller, not a recoverable condition.
    #[error("no free {kind} slot to assign without a prior reserve")]
    AssignWithoutReserve {
        /// The pool whose accounting was violated.
        kind: ResourceKind,
    },

    /// The allocator's bounded address space is exhausted.
    #[error("out of memory")]
    OutOfMemory,

    /// An operation reached the executor that the catalog should have rejected.
    #[error("operation \"{op}\" reached the executor with no handler")]
    UnhandledOperation {
        /// The rendered operation entry.
        op: String,
    },

    /// A program's execution failed; wraps the underlying error with its id.
    #[error("application {pid} failed to execute instructions \"{source}\"")]
    Program {
        /// Identifier of the failing program.
        pid: ProgramId,
        /// The error that stopped it.
        #[source]
        source: Box<SimError>,
    },
}

impl SimError {
    /// Wraps an execution error with the id of the program it stopped.
    pub fn in_program(self, pid: ProgramId) -> Self {
        SimError::Program {
            pid,
            source: Box::new(self),
        }
    }
}
