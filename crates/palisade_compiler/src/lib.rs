//! Command compilation for the Palisade engine.
//!
//! - [`HandlerBinding`] - a declared command: path, ordered parameter
//!   descriptors, and the handler callable
//! - [`CommandCompiler`] - walks one binding's descriptors against the
//!   frozen build chain and produces the command's grammar chain

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod binding;
pub mod compile;

pub use binding::{HandlerBinding, HandlerFn};
pub use compile::{CommandCompiler, CompileWarning, CompiledCommand};
