//! Unit tests for program execution.



/// Tests for the scheduler loop and stream structure validation.
pub mod scheduler;
