//! Runtime dispatch for the Palisade engine.
//!
//! The host dispatcher calls back in here once per live invocation:
//! arguments are resolved through the frozen execution chain, the
//! handler runs, and any raised domain exception routes through the
//! exception dispatcher. All failures are normalized before they cross
//! back to the host.
//!
//! - [`resolve_arguments`] - descriptors + context to ordered values
//! - [`CommandEngine`] - registration and invocation facade
//! - [`ExceptionDispatcher`] - subtype-aware exception routing
//! - [`Notifier`] - the host's "notify sender" primitive

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod engine;
pub mod exception;
pub mod execute;
pub mod notify;

pub use engine::CommandEngine;
pub use exception::{DispatchOutcome, ExceptionDispatcher, ExceptionHandlerBinding};
pub use execute::resolve_arguments;
pub use notify::{CollectingNotifier, MessageStyle, Notifier};
