//! Block-granular memory address type.
//!
//! The allocator hands out addresses that are always multiples of the configured
//! block size. The strong type keeps them from being confused with cycle counts
//! or slot indices, and carries the fixed-width hexadecimal rendering used in
//! the execution trace.

use std::fmt;

/// An address in the simulated memory space, in kilobytes from the base.
///
/// Rendered as a fixed-width hexadecimal string (`0x00000080`), matching the
/// form the trace uses for allocation events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct BlockAddr(pub u32);

impl BlockAddr {
    /// Creates a new block address from a raw offset.
    #[inline]
    pub fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw offset value.
    #[inline]
    pub fn val(self) -> u32 {
        self.0
    }
}

impl fmt::Display for BlockAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}
