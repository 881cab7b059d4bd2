//! Fixed-capacity device resource pools.
//!
//! A pool models N interchangeable units of one device category. Units are
//! fungible: a program reserves *a* slot, not a particular one. Acquisition is
//! two-phase — `reserve` takes a unit out of the availability count, `assign`
//! binds the caller to a concrete slot — mirroring a counting semaphore
//! guarding a slot table. Exhaustion is terminal for the requesting operation:
//! the pool never queues waiters.

use std::fmt;

use crate::common::error::{SimError, SimResult};
use crate::exec::ProgramId;

/// Device category identity for a pool.
///
/// A slot is fungible within its pool; the kind is an identity tag only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Printer devices.
    Printer,
    /// Hard drive devices.
    HardDrive,
    /// Keyboard devices.
    Keyboard,
    /// Monitor devices.
    Monitor,
}

impl ResourceKind {
    /// Short device tag used in trace lines (`PRNT 0`, `HDD 1`, ...).
    pub fn tag(self) -> &'static str {
        match self {
            ResourceKind::Printer => "PRNT",
            ResourceKind::HardDrive => "HDD",
            ResourceKind::Keyboard => "KBD",
            ResourceKind::Monitor => "MOTR",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Printer => "printer",
            ResourceKind::HardDrive => "hard drive",
            ResourceKind::Keyboard => "keyboard",
            ResourceKind::Monitor => "monitor",
        };
        f.write_str(name)
    }
}

/// A pool of N interchangeable device units with ownership tracking.
///
/// Invariants: the availability count always equals the number of free slots,
/// stays within `[0, capacity]`, and an owner occupies at most one slot.
#[derive(Debug)]
pub struct ResourcePool {
    kind: ResourceKind,
    slots: Vec<Option<ProgramId>>,
    available: usize,
}

impl ResourcePool {
    /// Creates a pool of `capacity` free units.
    pub fn new(kind: ResourceKind, capacity: usize) -> Self {
        Self {
            kind,
            slots: vec![None; capacity],
            available: capacity,
        }
    }

    /// Returns the device category of this pool.
    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns the fixed capacity of the pool.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the current availability count.
    pub fn available(&self) -> usize {
        self.available
    }

    /// True iff at least one unit is free.
    pub fn is_available(&self) -> bool {
        self.available > 0
    }

    /// Takes one unit out of the availability count.
    ///
    /// Returns `false` without mutating anything when the pool is exhausted;
    /// the caller turns that into a [`SimError::PoolExhausted`] and aborts.
    /// No owner is bound yet — follow up with [`ResourcePool::assign`].
    pub fn reserve(&mut self) -> bool {
        if self.available > 0 {
            self.available -= 1;
            return true;
        }
        false
    }

    /// Binds `owner` to the first free slot and returns its index.
    ///
    /// Idempotent for an owner that already holds a slot (no double-count;
    /// the held index is returned). Calling without a prior successful
    /// [`ResourcePool::reserve`] is an accounting defect and fails rather
    /// than silently doing nothing.
    pub fn assign(&mut self, owner: ProgramId) -> SimResult<usize> {
        if let Some(index) = self.index_of(owner) {
            return Ok(index);
        }
        match self.slots.iter().position(Option::is_none) {
            Some(index) => {
                self.slots[index] = Some(owner);
                Ok(index)
            }
            None => Err(SimError::AssignWithoutReserve { kind: self.kind }),
        }
    }

    /// Frees the slot held by `owner` and returns the unit to availability.
    ///
    /// No-op when the owner holds nothing.
    pub fn release(&mut self, owner: ProgramId) {
        if let Some(index) = self.index_of(owner) {
            self.slots[index] = None;
            self.available += 1;
        }
    }

    /// Returns the slot index held by `owner`, if any.
    pub fn index_of(&self, owner: ProgramId) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(owner))
    }
}
