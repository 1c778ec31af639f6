//! Integration tests for runtime argument resolution
//!
//! Tests ordered resolution against the execution chain and the
//! abort-on-first-failure rule.

use palisade_dispatch::resolve_arguments;
use palisade_foundation::{
    ArgValue, InvocationContext, Marker, ParamType, ParameterDescriptor, Position, Sender,
};
use palisade_resolver::default_execution_chain;

fn player_ctx() -> InvocationContext {
    InvocationContext::new(Sender::player("alice", Position::new(0.0, 64.0, 0.0)))
}

fn give_descriptors() -> Vec<ParameterDescriptor> {
    vec![
        ParameterDescriptor::new("sender", ParamType::Sender, 0),
        ParameterDescriptor::new("amount", ParamType::Int, 1)
            .with_marker(Marker::NumericRange { min: 1, max: 64 }),
    ]
}

#[test]
fn values_come_back_in_descriptor_order() {
    let chain = default_execution_chain().freeze().unwrap();
    let ctx = player_ctx().with_arg("amount", ArgValue::Int(3));

    let args = resolve_arguments(&give_descriptors(), &chain, &ctx).unwrap();
    assert_eq!(args.len(), 2);
    assert_eq!(args[0].as_sender().unwrap().name(), "alice");
    assert_eq!(args[1], ArgValue::Int(3));
}

#[test]
fn first_failure_aborts_the_invocation() {
    let chain = default_execution_chain().freeze().unwrap();
    let ctx = player_ctx().with_arg("amount", ArgValue::Int(128));

    let err = resolve_arguments(&give_descriptors(), &chain, &ctx).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.to_string(), "128 is out of range [1, 64]");
}

#[test]
fn missing_host_value_is_a_framework_error() {
    let chain = default_execution_chain().freeze().unwrap();
    let ctx = player_ctx();

    let err = resolve_arguments(&give_descriptors(), &chain, &ctx).unwrap_err();
    assert!(!err.is_syntax());
}

#[test]
fn unclaimed_descriptor_is_a_framework_error() {
    let chain = palisade_resolver::ExecutionChainBuilder::new()
        .freeze()
        .unwrap();
    let descriptors = [ParameterDescriptor::new("amount", ParamType::Int, 0)];

    let err = resolve_arguments(&descriptors, &chain, &player_ctx()).unwrap_err();
    assert!(!err.is_syntax());
    assert!(!err.is_configuration());
}

#[test]
fn empty_descriptor_list_resolves_to_nothing() {
    let chain = default_execution_chain().freeze().unwrap();
    let args = resolve_arguments(&[], &chain, &player_ctx()).unwrap();
    assert!(args.is_empty());
}
