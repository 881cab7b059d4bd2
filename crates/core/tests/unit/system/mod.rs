//! Unit tests for shared machine state.


/// Tests for fixed-capacity resource pools.
pub mod resource;
