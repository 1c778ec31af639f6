//! Grammar-node specs and the command tree for the Palisade engine.
//!
//! This crate models the boundary to the host command dispatcher: the
//! node/argument-type vocabulary the host understands, and the parse
//! tree the engine registers into it.
//!
//! - [`GrammarNodeSpec`] - one literal or typed-argument node, produced
//!   by a build-time resolver
//! - [`CommandNode`] / [`CommandTree`] - the registered parse tree with
//!   shared literal prefixes and executable terminal nodes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod node;
pub mod tree;

pub use node::{ArgumentType, GrammarNodeSpec, NodeKind, SuggestionsFn};
pub use tree::{CommandNode, CommandTree, ExecutorId};
