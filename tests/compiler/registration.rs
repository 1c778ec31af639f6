//! Integration tests for tree registration
//!
//! Tests literal-prefix merging, idempotent re-registration, executor
//! conflicts, and the all-or-nothing guarantee.

use std::sync::Arc;

use palisade_compiler::{CommandCompiler, HandlerBinding, HandlerFn};
use palisade_foundation::ParamType;
use palisade_grammar::CommandTree;
use palisade_resolver::{FrozenGrammarChain, default_grammar_chain};
use proptest::prelude::*;

fn noop() -> HandlerFn {
    Arc::new(|_args| Ok(()))
}

fn chain() -> FrozenGrammarChain {
    default_grammar_chain().freeze().unwrap()
}

fn register(tree: &mut CommandTree, binding: &HandlerBinding) {
    CommandCompiler::compile_into(binding, &chain(), tree).unwrap();
}

// =============================================================================
// Prefix merging
// =============================================================================

#[test]
fn sibling_subcommands_share_the_prefix_node() {
    let mut tree = CommandTree::new();
    register(
        &mut tree,
        &HandlerBinding::new("team create", noop()).with_param("name", ParamType::String),
    );
    register(
        &mut tree,
        &HandlerBinding::new("team delete", noop()).with_param("name", ParamType::String),
    );

    // One "team" root with two children, not two "team" roots.
    assert_eq!(tree.roots().len(), 1);
    let team = tree.find(&["team"]).unwrap();
    assert_eq!(team.children().len(), 2);
    assert!(tree.find(&["team", "create"]).is_some());
    assert!(tree.find(&["team", "delete"]).is_some());
}

#[test]
fn distinct_commands_get_distinct_roots() {
    let mut tree = CommandTree::new();
    register(&mut tree, &HandlerBinding::new("give", noop()));
    register(&mut tree, &HandlerBinding::new("home", noop()));

    assert_eq!(tree.roots().len(), 2);
}

#[test]
fn deep_prefix_merging_reuses_every_shared_node() {
    let mut tree = CommandTree::new();
    register(&mut tree, &HandlerBinding::new("region flag set", noop()));
    register(&mut tree, &HandlerBinding::new("region flag clear", noop()));

    let before = tree.node_count();
    // "region" and "flag" shared; only the leaves differ.
    assert_eq!(before, 4);
}

#[test]
fn executors_land_on_terminal_nodes_only() {
    let mut tree = CommandTree::new();
    register(
        &mut tree,
        &HandlerBinding::new("team create", noop()).with_param("name", ParamType::String),
    );

    assert!(tree.find(&["team"]).unwrap().executor().is_none());
    assert!(tree.find(&["team", "create"]).unwrap().executor().is_none());
    // The terminal is the argument node below "create".
    let create = tree.find(&["team", "create"]).unwrap();
    assert_eq!(create.children().len(), 1);
    assert!(create.children()[0].executor().is_some());
}

// =============================================================================
// Re-registration
// =============================================================================

#[test]
fn reregistering_the_same_command_is_idempotent() {
    let mut tree = CommandTree::new();
    let binding = HandlerBinding::new("give", noop()).with_param("amount", ParamType::Int);

    register(&mut tree, &binding);
    let count = tree.node_count();
    register(&mut tree, &binding);

    assert_eq!(tree.node_count(), count);
}

#[test]
fn conflicting_executor_on_one_terminal_is_rejected() {
    use palisade_grammar::{ExecutorId, GrammarNodeSpec};

    let mut tree = CommandTree::new();
    tree.insert(
        vec![GrammarNodeSpec::literal("spawn")],
        ExecutorId::new("spawn"),
    )
    .unwrap();

    let err = tree
        .insert(
            vec![GrammarNodeSpec::literal("spawn")],
            ExecutorId::new("spawn-two"),
        )
        .unwrap_err();
    assert!(err.is_configuration());
}

#[test]
fn failed_compilation_leaves_the_tree_untouched() {
    let mut tree = CommandTree::new();
    register(&mut tree, &HandlerBinding::new("give", noop()));
    let count = tree.node_count();

    let bad = HandlerBinding::new("tell", noop())
        .with_param("message", ParamType::GreedyString)
        .with_param("loud", ParamType::Bool);
    assert!(CommandCompiler::compile_into(&bad, &chain(), &mut tree).is_err());

    assert_eq!(tree.node_count(), count);
    assert!(tree.find(&["tell"]).is_none());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn recompiling_a_binding_is_structurally_stable(
        literal in "[a-z]{1,8}",
        sub in "[a-z]{1,8}",
    ) {
        let path = format!("{literal} {sub}");
        let binding = HandlerBinding::new(path.as_str(), noop())
            .with_param("amount", ParamType::Int);

        let first = CommandCompiler::compile(&binding, &chain()).unwrap();
        let second = CommandCompiler::compile(&binding, &chain()).unwrap();

        prop_assert_eq!(first.specs(), second.specs());
        prop_assert_eq!(first.executor(), second.executor());
    }

    #[test]
    fn node_count_never_exceeds_the_sum_of_inserted_chains(
        suffixes in proptest::collection::hash_set("[a-z]{1,6}", 1..5),
    ) {
        let mut tree = CommandTree::new();
        let mut total = 0usize;
        for suffix in &suffixes {
            let path = format!("base {suffix}");
            let binding = HandlerBinding::new(path.as_str(), noop());
            CommandCompiler::compile_into(&binding, &chain(), &mut tree).unwrap();
            total += 2;
        }

        // Shared "base" collapses; merging never duplicates nodes.
        prop_assert!(tree.node_count() <= total);
        prop_assert_eq!(tree.roots().len(), 1);
    }
}
