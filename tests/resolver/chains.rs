//! Integration tests for resolver chains
//!
//! Tests registration order, freeze-time override application, and
//! first-match selection.

use std::sync::Arc;

use palisade_foundation::{ParamType, ParameterDescriptor, Result};
use palisade_grammar::{ArgumentType, GrammarNodeSpec};
use palisade_resolver::{
    GrammarChainBuilder, GrammarResolver, Resolver, ResolverIdentity, default_grammar_chain,
};
use proptest::prelude::*;

/// Grammar resolver that claims every integer parameter and emits a
/// fixed node.
struct FixedIntResolver {
    identity: ResolverIdentity,
    min: i64,
}

impl Resolver for FixedIntResolver {
    fn identity(&self) -> ResolverIdentity {
        self.identity
    }

    fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
        descriptor.declared_type == ParamType::Int
    }
}

impl GrammarResolver for FixedIntResolver {
    fn build(&self, descriptor: &ParameterDescriptor) -> Result<GrammarNodeSpec> {
        Ok(GrammarNodeSpec::argument(
            descriptor.name.clone(),
            ArgumentType::Integer {
                min: self.min,
                max: i64::MAX,
            },
        ))
    }
}

fn int_descriptor() -> ParameterDescriptor {
    ParameterDescriptor::new("amount", ParamType::Int, 0)
}

// =============================================================================
// Selection
// =============================================================================

#[test]
fn first_registered_match_wins() {
    let mut builder = GrammarChainBuilder::new();
    builder.register(Arc::new(FixedIntResolver {
        identity: ResolverIdentity::new("ext/first"),
        min: 1,
    }));
    builder.register(Arc::new(FixedIntResolver {
        identity: ResolverIdentity::new("ext/second"),
        min: 2,
    }));
    let chain = builder.freeze().unwrap();

    let selected = chain.select_for(&int_descriptor()).unwrap();
    assert_eq!(selected.identity().as_str(), "ext/first");
}

#[test]
fn matches_for_reports_all_applicable_in_order() {
    let mut builder = GrammarChainBuilder::new();
    builder.register(Arc::new(FixedIntResolver {
        identity: ResolverIdentity::new("ext/first"),
        min: 1,
    }));
    builder.register(Arc::new(FixedIntResolver {
        identity: ResolverIdentity::new("ext/second"),
        min: 2,
    }));
    let chain = builder.freeze().unwrap();

    let matches = chain.matches_for(&int_descriptor());
    assert_eq!(
        matches,
        vec![
            ResolverIdentity::new("ext/first"),
            ResolverIdentity::new("ext/second"),
        ]
    );
}

#[test]
fn no_applicable_entry_selects_nothing() {
    let chain = GrammarChainBuilder::new().freeze().unwrap();
    assert!(chain.select_for(&int_descriptor()).is_none());
}

// =============================================================================
// Overrides
// =============================================================================

#[test]
fn replacement_keeps_the_ordinal_slot() {
    let mut builder = GrammarChainBuilder::new();
    builder.register(Arc::new(FixedIntResolver {
        identity: ResolverIdentity::new("ext/first"),
        min: 1,
    }));
    builder.register(Arc::new(FixedIntResolver {
        identity: ResolverIdentity::new("ext/second"),
        min: 2,
    }));
    builder.override_entry(
        ResolverIdentity::new("ext/first"),
        Some(Arc::new(FixedIntResolver {
            identity: ResolverIdentity::new("ext/replacement"),
            min: 10,
        })),
    );
    let chain = builder.freeze().unwrap();

    // The replacement sits where "ext/first" sat, ahead of "ext/second".
    let selected = chain.select_for(&int_descriptor()).unwrap();
    assert_eq!(selected.identity().as_str(), "ext/replacement");
    assert_eq!(chain.len(), 2);
}

#[test]
fn removal_makes_the_next_entry_win() {
    let mut builder = GrammarChainBuilder::new();
    builder.register(Arc::new(FixedIntResolver {
        identity: ResolverIdentity::new("ext/first"),
        min: 1,
    }));
    builder.register(Arc::new(FixedIntResolver {
        identity: ResolverIdentity::new("ext/second"),
        min: 2,
    }));
    builder.override_entry(ResolverIdentity::new("ext/first"), None);
    let chain = builder.freeze().unwrap();

    let selected = chain.select_for(&int_descriptor()).unwrap();
    assert_eq!(selected.identity().as_str(), "ext/second");
    assert_eq!(chain.len(), 1);
}

#[test]
fn unknown_override_is_ignored() {
    let mut builder = default_grammar_chain();
    let before = builder.len();
    builder.override_entry(ResolverIdentity::new("ext/not-registered"), None);
    let chain = builder.freeze().unwrap();
    assert_eq!(chain.len(), before);
}

#[test]
fn duplicate_identity_fails_at_freeze() {
    let mut builder = GrammarChainBuilder::new();
    builder.register(Arc::new(FixedIntResolver {
        identity: ResolverIdentity::new("ext/dup"),
        min: 1,
    }));
    builder.register(Arc::new(FixedIntResolver {
        identity: ResolverIdentity::new("ext/dup"),
        min: 2,
    }));

    let err = builder.freeze().unwrap_err();
    assert!(err.is_configuration());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn frozen_order_matches_registration_order(count in 1usize..8) {
        // Identities must be 'static; index into a fixed pool.
        const NAMES: [&str; 8] = [
            "ext/r0", "ext/r1", "ext/r2", "ext/r3",
            "ext/r4", "ext/r5", "ext/r6", "ext/r7",
        ];

        let mut builder = GrammarChainBuilder::new();
        for &name in &NAMES[..count] {
            builder.register(Arc::new(FixedIntResolver {
                identity: ResolverIdentity::new(name),
                min: 0,
            }));
        }
        let chain = builder.freeze().unwrap();

        let identities: Vec<&str> =
            chain.identities().iter().map(|id| id.as_str()).collect();
        prop_assert_eq!(identities, NAMES[..count].to_vec());
    }
}
