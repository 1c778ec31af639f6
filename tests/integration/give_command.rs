//! End-to-end tests for a typed `give` command
//!
//! The canonical scenario: sender injection, material lookup, and a
//! range-checked amount, with validation ahead of the handler body.

use std::sync::{Arc, Mutex};

use palisade_compiler::{HandlerBinding, HandlerFn};
use palisade_dispatch::{CollectingNotifier, CommandEngine, MessageStyle};
use palisade_foundation::{
    ArgValue, ExceptionTypes, InvocationContext, Marker, Material, MaterialTable, ParamType,
    Position, Sender,
};
use palisade_resolver::ConfigurerLoader;

fn engine() -> CommandEngine {
    CommandEngine::new(
        ConfigurerLoader::load_defaults().unwrap(),
        ExceptionTypes::new(),
    )
}

fn player_ctx() -> InvocationContext {
    let mut materials = MaterialTable::new();
    materials.register(Material::new("stone"));
    materials.register(Material::item("stick"));
    InvocationContext::new(Sender::player("alice", Position::new(0.0, 64.0, 0.0)))
        .with_materials(materials)
}

type GiveLog = Arc<Mutex<Vec<(String, String, i64)>>>;

fn give_binding(log: GiveLog) -> HandlerBinding {
    let handler: HandlerFn = Arc::new(move |args| {
        let sender = args[0].as_sender().unwrap().name().to_string();
        let what = args[1].as_material().unwrap().name.to_string();
        let amount = args[2].as_int().unwrap();
        if let Ok(mut entries) = log.lock() {
            entries.push((sender, what, amount));
        }
        Ok(())
    });
    HandlerBinding::new("give", handler)
        .with_param("sender", ParamType::Sender)
        .with_tagged_param("what", ParamType::Material, [Marker::ItemOnly])
        .with_tagged_param(
            "amount",
            ParamType::Int,
            [Marker::NumericRange { min: 1, max: 64 }],
        )
}

#[test]
fn grammar_has_two_argument_nodes() {
    let log: GiveLog = Arc::default();
    let mut engine = engine();
    engine.register(give_binding(log)).unwrap();

    // "give" literal plus the two user-facing arguments; the sender
    // emits no grammar.
    assert_eq!(engine.tree().node_count(), 3);
    assert!(engine.warnings().is_empty());
}

#[test]
fn valid_invocation_runs_the_handler_with_typed_values() {
    let log: GiveLog = Arc::default();
    let mut engine = engine();
    engine.register(give_binding(log.clone())).unwrap();

    let notifier = CollectingNotifier::new();
    let ctx = player_ctx()
        .with_arg("what", ArgValue::from("stick"))
        .with_arg("amount", ArgValue::Int(5));
    engine.invoke("give", &ctx, &notifier).unwrap();

    assert_eq!(
        log.lock().unwrap().clone(),
        vec![("alice".to_string(), "stick".to_string(), 5)]
    );
    assert!(notifier.messages().is_empty());
}

#[test]
fn out_of_range_amount_warns_and_skips_the_handler() {
    let log: GiveLog = Arc::default();
    let mut engine = engine();
    engine.register(give_binding(log.clone())).unwrap();

    let notifier = CollectingNotifier::new();
    let ctx = player_ctx()
        .with_arg("what", ArgValue::from("stick"))
        .with_arg("amount", ArgValue::Int(128));
    engine.invoke("give", &ctx, &notifier).unwrap();

    assert!(log.lock().unwrap().is_empty());
    assert_eq!(
        notifier.take_messages(),
        vec![(
            "128 is out of range [1, 64]".to_string(),
            MessageStyle::Warning
        )]
    );
}

#[test]
fn non_item_material_warns_and_skips_the_handler() {
    let log: GiveLog = Arc::default();
    let mut engine = engine();
    engine.register(give_binding(log.clone())).unwrap();

    let notifier = CollectingNotifier::new();
    // "barrier" is not registered at all.
    let ctx = player_ctx()
        .with_arg("what", ArgValue::from("barrier"))
        .with_arg("amount", ArgValue::Int(1));
    engine.invoke("give", &ctx, &notifier).unwrap();

    assert!(log.lock().unwrap().is_empty());
    assert_eq!(notifier.messages().len(), 1);
}

#[test]
fn console_blocked_command_rejects_the_console() {
    let ran = Arc::new(Mutex::new(false));
    let ran_in_handler = ran.clone();
    let handler: HandlerFn = Arc::new(move |_args| {
        if let Ok(mut flag) = ran_in_handler.lock() {
            *flag = true;
        }
        Ok(())
    });

    let mut engine = engine();
    engine
        .register(HandlerBinding::new("home", handler).with_tagged_param(
            "sender",
            ParamType::Sender,
            [Marker::ConsoleBlocked],
        ))
        .unwrap();

    let notifier = CollectingNotifier::new();
    let ctx = InvocationContext::new(Sender::Console);
    engine.invoke("home", &ctx, &notifier).unwrap();

    assert!(!*ran.lock().unwrap());
    assert_eq!(notifier.messages().len(), 1);
}

#[test]
fn target_block_is_injected_from_the_sender() {
    let seen = Arc::new(Mutex::new(None));
    let seen_in_handler = seen.clone();
    let handler: HandlerFn = Arc::new(move |args| {
        if let Ok(mut slot) = seen_in_handler.lock() {
            *slot = args[0].as_material().map(|m| m.name.to_string());
        }
        Ok(())
    });

    let mut engine = engine();
    engine
        .register(
            HandlerBinding::new("analyze", handler).with_param("block", ParamType::TargetBlock),
        )
        .unwrap();

    let notifier = CollectingNotifier::new();
    let ctx = InvocationContext::new(
        Sender::player("bob", Position::new(0.0, 0.0, 0.0)).aiming_at(Material::block("dirt")),
    );
    engine.invoke("analyze", &ctx, &notifier).unwrap();

    assert_eq!(seen.lock().unwrap().as_deref(), Some("dirt"));
}
