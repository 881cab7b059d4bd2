//! Monotonic bump allocator over the configured memory space.
//!
//! Addresses are handed out in block-size strides from zero. Memory is never
//! freed piecemeal: the whole space is reclaimed by `reset` at the start of
//! each program run, because programs do not share memory in this model.

use crate::common::addr::BlockAddr;
use crate::common::error::{SimError, SimResult};

/// Bump allocator state: sizing plus the count of blocks issued since reset.
#[derive(Debug)]
pub struct Allocator {
    total_kbytes: u32,
    block_kbytes: u32,
    blocks_issued: u32,
}

impl Allocator {
    /// Creates an allocator over `total_kbytes` of memory in `block_kbytes` strides.
    pub fn new(total_kbytes: u32, block_kbytes: u32) -> Self {
        Self {
            total_kbytes,
            block_kbytes,
            blocks_issued: 0,
        }
    }

    /// Returns the number of blocks issued since the last reset.
    pub fn blocks_issued(&self) -> u32 {
        self.blocks_issued
    }

    /// Zeroes the issued-block count; called at the start of every program run.
    pub fn reset(&mut self) {
        self.blocks_issued = 0;
    }

    /// Issues the next block address, `blocks_issued * block_size`.
    ///
    /// Fails with [`SimError::OutOfMemory`], issuing nothing, once the block
    /// no longer fits: the call fails when `address + block_size` exceeds the
    /// total capacity. Arithmetic is checked before the comparison so overflow
    /// cannot masquerade as a small address.
    pub fn allocate(&mut self) -> SimResult<BlockAddr> {
        let address = self
            .blocks_issued
            .checked_mul(self.block_kbytes)
            .ok_or(SimError::OutOfMemory)?;
        let end = address
            .checked_add(self.block_kbytes)
            .ok_or(SimError::OutOfMemory)?;
        if end > self.total_kbytes {
            return Err(SimError::OutOfMemory);
        }
        self.blocks_issued += 1;
        Ok(BlockAddr::new(address))
    }
}
