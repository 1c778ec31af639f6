//! Integration tests for ArgValue
//!
//! Tests variant accessors, From conversions, declared-type reporting,
//! and display.

use palisade_foundation::{ArgValue, Material, ParamType, Position};

// =============================================================================
// Accessors
// =============================================================================

#[test]
fn bool_accessor() {
    let v = ArgValue::Bool(true);
    assert_eq!(v.as_bool(), Some(true));
    assert_eq!(v.as_int(), None);
}

#[test]
fn int_accessor() {
    let v = ArgValue::Int(42);
    assert_eq!(v.as_int(), Some(42));
    assert_eq!(v.as_float(), None);
}

#[test]
fn float_accessor() {
    let v = ArgValue::Float(1.5);
    assert_eq!(v.as_float(), Some(1.5));
    assert_eq!(v.as_int(), None);
}

#[test]
fn string_accessor() {
    let v = ArgValue::from("hello");
    assert_eq!(v.as_str(), Some("hello"));
}

#[test]
fn material_accessor() {
    let v = ArgValue::from(Material::block("stone"));
    let material = v.as_material().unwrap();
    assert_eq!(&*material.name, "stone");
    assert!(material.is_block);
    assert!(!material.is_item);
}

#[test]
fn position_accessor() {
    let v = ArgValue::from(Position::new(1.0, 64.0, -3.5));
    let position = v.as_position().unwrap();
    assert_eq!(position.y, 64.0);
}

#[test]
fn slot_accessor() {
    let v = ArgValue::Slot(9);
    assert_eq!(v.as_slot(), Some(9));
    assert_eq!(v.as_int(), None);
}

// =============================================================================
// Declared types
// =============================================================================

#[test]
fn value_type_matches_variant() {
    assert_eq!(ArgValue::Bool(false).value_type(), ParamType::Bool);
    assert_eq!(ArgValue::Int(0).value_type(), ParamType::Int);
    assert_eq!(ArgValue::Float(0.0).value_type(), ParamType::Float);
    assert_eq!(ArgValue::from("x").value_type(), ParamType::String);
    assert_eq!(ArgValue::Slot(0).value_type(), ParamType::Slot);
}

#[test]
fn user_input_types() {
    assert!(ParamType::Int.is_user_input());
    assert!(ParamType::GreedyString.is_user_input());
    assert!(!ParamType::Sender.is_user_input());
    assert!(!ParamType::Exception.is_user_input());
    assert!(!ParamType::Context.is_user_input());
    assert!(!ParamType::TargetBlock.is_user_input());
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn int_display() {
    assert_eq!(ArgValue::Int(7).to_string(), "7");
}

#[test]
fn string_display() {
    assert_eq!(ArgValue::from("word").to_string(), "word");
}
