//! Integration tests for Sender and MaterialTable
//!
//! Tests the player/console distinction, target-block lookup, and
//! material registration.

use palisade_foundation::{Material, MaterialTable, Position, Sender};

// =============================================================================
// Senders
// =============================================================================

#[test]
fn player_has_name_and_position() {
    let sender = Sender::player("alice", Position::new(10.0, 64.0, -5.0));
    assert!(sender.is_player());
    assert_eq!(sender.name(), "alice");
    assert_eq!(sender.position(), Some(Position::new(10.0, 64.0, -5.0)));
}

#[test]
fn console_has_no_position() {
    let sender = Sender::Console;
    assert!(!sender.is_player());
    assert_eq!(sender.position(), None);
    assert_eq!(sender.target_block(), None);
}

#[test]
fn player_target_block() {
    let sender =
        Sender::player("bob", Position::new(0.0, 0.0, 0.0)).aiming_at(Material::block("dirt"));
    let block = sender.target_block().unwrap();
    assert_eq!(&*block.name, "dirt");
}

#[test]
fn player_aiming_at_nothing() {
    let sender = Sender::player("bob", Position::new(0.0, 0.0, 0.0));
    assert_eq!(sender.target_block(), None);
}

// =============================================================================
// Materials
// =============================================================================

#[test]
fn table_lookup_by_name() {
    let mut table = MaterialTable::new();
    table.register(Material::block("stone"));
    table.register(Material::item("stick"));

    assert!(table.get("stone").unwrap().is_block);
    assert!(table.get("stick").unwrap().is_item);
    assert!(table.get("bedrock").is_none());
    assert_eq!(table.len(), 2);
}

#[test]
fn reregistration_replaces() {
    let mut table = MaterialTable::new();
    table.register(Material::block("clay"));
    table.register(Material::new("clay"));

    assert!(table.get("clay").unwrap().is_item);
    assert_eq!(table.len(), 1);
}

#[test]
fn dual_capability_material() {
    let material = Material::new("oak_log");
    assert!(material.is_block);
    assert!(material.is_item);
}
