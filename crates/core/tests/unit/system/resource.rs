//! # Resource Pool Tests
//!
//! Two-phase acquisition (reserve then assign), availability accounting, and
//! the pool invariants under arbitrary action sequences.

use std::collections::BTreeSet;

use proptest::prelude::*;

use osmium_core::exec::ProgramId;
use osmium_core::system::{ResourceKind, ResourcePool};
use osmium_core::SimError;

#[test]
fn test_new_pool_is_fully_available() {
    let pool = ResourcePool::new(ResourceKind::Printer, 3);
    assert_eq!(pool.capacity(), 3);
    assert_eq!(pool.available(), 3);
    assert!(pool.is_available());
}

#[test]
fn test_zero_capacity_pool_is_never_available() {
    let mut pool = ResourcePool::new(ResourceKind::Monitor, 0);
    assert!(!pool.is_available());
    assert!(!pool.reserve());
}

#[test]
fn test_reserve_decrements_until_exhausted() {
    let mut pool = ResourcePool::new(ResourceKind::Keyboard, 2);

    assert!(pool.reserve());
    assert_eq!(pool.available(), 1);
    assert!(pool.reserve());
    assert_eq!(pool.available(), 0);
    assert!(!pool.reserve());
    assert_eq!(pool.available(), 0);
}

#[test]
fn test_assign_binds_first_free_slot() {
    let mut pool = ResourcePool::new(ResourceKind::HardDrive, 2);

    assert!(pool.reserve());
    assert_eq!(pool.assign(ProgramId(1)).unwrap(), 0);
    assert!(pool.reserve());
    assert_eq!(pool.assign(ProgramId(2)).unwrap(), 1);
}

#[test]
fn test_assign_is_idempotent_for_a_holder() {
    let mut pool = ResourcePool::new(ResourceKind::Printer, 2);

    assert!(pool.reserve());
    let first = pool.assign(ProgramId(1)).unwrap();
    let second = pool.assign(ProgramId(1)).unwrap();

    assert_eq!(first, second);
    assert_eq!(pool.index_of(ProgramId(1)), Some(first));
}

#[test]
fn test_assign_without_reserve_fails_when_full() {
    let mut pool = ResourcePool::new(ResourceKind::Monitor, 1);

    assert!(pool.reserve());
    pool.assign(ProgramId(1)).unwrap();
    assert_eq!(
        pool.assign(ProgramId(2)),
        Err(SimError::AssignWithoutReserve {
            kind: ResourceKind::Monitor,
        })
    );
}

#[test]
fn test_release_returns_the_unit() {
    let mut pool = ResourcePool::new(ResourceKind::Printer, 1);

    assert!(pool.reserve());
    pool.assign(ProgramId(1)).unwrap();
    assert_eq!(pool.available(), 0);

    pool.release(ProgramId(1));
    assert_eq!(pool.available(), 1);
    assert_eq!(pool.index_of(ProgramId(1)), None);
    assert!(pool.reserve());
}

#[test]
fn test_release_of_non_holder_is_a_no_op() {
    let mut pool = ResourcePool::new(ResourceKind::Keyboard, 1);

    assert!(pool.reserve());
    pool.assign(ProgramId(1)).unwrap();
    pool.release(ProgramId(9));

    assert_eq!(pool.available(), 0);
    assert_eq!(pool.index_of(ProgramId(1)), Some(0));
}

#[test]
fn test_slot_is_reused_after_release() {
    let mut pool = ResourcePool::new(ResourceKind::Printer, 1);

    assert!(pool.reserve());
    assert_eq!(pool.assign(ProgramId(1)).unwrap(), 0);
    pool.release(ProgramId(1));

    assert!(pool.reserve());
    assert_eq!(pool.assign(ProgramId(2)).unwrap(), 0);
}

proptest! {
    /// Under arbitrary acquire/release sequences the availability count stays
    /// within `[0, capacity]` and always equals capacity minus held slots.
    #[test]
    fn prop_pool_accounting_invariants(
        capacity in 0usize..6,
        actions in proptest::collection::vec((any::<bool>(), 0u32..4), 0..40),
    ) {
        let mut pool = ResourcePool::new(ResourceKind::HardDrive, capacity);
        let mut holders: BTreeSet<u32> = BTreeSet::new();

        for (acquire, owner) in actions {
            if acquire {
                if !holders.contains(&owner) && pool.reserve() {
                    pool.assign(ProgramId(owner)).unwrap();
                    holders.insert(owner);
                }
            } else {
                pool.release(ProgramId(owner));
                holders.remove(&owner);
            }

            prop_assert!(pool.available() <= pool.capacity());
            prop_assert_eq!(pool.available(), pool.capacity() - holders.len());
            for holder in &holders {
                prop_assert!(pool.index_of(ProgramId(*holder)).is_some());
            }
        }
    }
}
