//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared across all components:
//! 1. **Addresses:** A strong type for block-granular memory addresses.
//! 2. **Clocks:** Wall-clock and virtual-clock implementations of the hold/elapse capability.
//! 3. **Errors:** The single simulation error type and result alias.

/// Block address type for allocator results.
pub mod addr;

/// Clock capability for timed operation holds.
pub mod clock;

/// Simulation error definitions.
pub mod error;

pub use addr::BlockAddr;
pub use clock::{Clock, VirtualClock, WallClock};
pub use error::{SimError, SimResult};
