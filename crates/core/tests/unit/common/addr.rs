//! # Block Address Tests
//!
//! Formatting and value accessors for allocator-issued block addresses.

use osmium_core::common::BlockAddr;

#[test]
fn test_block_addr_display_is_zero_padded_hex() {
    assert_eq!(format!("{}", BlockAddr::new(0)), "0x00000000");
    assert_eq!(format!("{}", BlockAddr::new(0x80)), "0x00000080");
    assert_eq!(format!("{}", BlockAddr::new(1024)), "0x00000400");
}

#[test]
fn test_block_addr_val_round_trips() {
    let addr = BlockAddr::new(384);
    assert_eq!(addr.val(), 384);
}

#[test]
fn test_block_addr_equality() {
    assert_eq!(BlockAddr::new(128), BlockAddr::new(128));
    assert_ne!(BlockAddr::new(128), BlockAddr::new(256));
}
