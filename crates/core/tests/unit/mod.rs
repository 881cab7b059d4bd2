//! # Unit Components
//!
//! This module serves as the central hub for the unit test tree. It mirrors
//! the library's module layout: common types, configuration, the metadata
//! language, shared machine state, execution, the simulation front end, the
//! trace, and report formatting.



/// Unit tests for program execution.
///
/// This module aggregates tests for:
/// - Process control blocks and lifecycle transitions.
/// - The per-program executor and its operation dispatch.
/// - The scheduler loop, stream structure validation, and trace ordering.
pub mod exec;




/// Unit tests for shared machine state (resource pools and the allocator).
pub mod system;
