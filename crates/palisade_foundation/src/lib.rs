//! Core types for the Palisade command engine.
//!
//! This crate provides:
//! - [`ArgValue`] - The runtime argument value handed to command handlers
//! - [`ParamType`] - Declared-type descriptors for handler parameters
//! - [`ParameterDescriptor`] - Normalized view of one handler parameter
//! - [`Error`] - The three-class error taxonomy (configuration, syntax, framework)
//! - [`CommandException`] - Domain exceptions raised by handlers
//! - [`Sender`] / [`Material`] / [`Position`] - Platform boundary types
//! - [`InvocationContext`] - Per-invocation state supplied by the host dispatcher

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod descriptor;
pub mod error;
pub mod exception;
pub mod invocation;
pub mod sender;
pub mod types;
pub mod value;

pub use descriptor::{Marker, ParameterDescriptor};
pub use error::{ConfigErrorKind, Error, FrameworkErrorKind, Result, SyntaxErrorKind};
pub use exception::{CommandException, ExceptionTypeId, ExceptionTypes};
pub use invocation::InvocationContext;
pub use sender::{Material, MaterialTable, Position, Sender};
pub use types::ParamType;
pub use value::ArgValue;
