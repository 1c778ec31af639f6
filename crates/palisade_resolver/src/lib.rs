//! Resolver capabilities and chains for the Palisade engine.
//!
//! Parameter kinds form an open set: anything a descriptor can describe,
//! a resolver can claim. There is no resolver hierarchy; both capabilities
//! are single traits stored in ordered, override-aware chains where the
//! first applicable entry wins.
//!
//! - [`GrammarResolver`] - build phase: descriptor to grammar node spec
//! - [`ExecutionResolver`] - runtime phase: descriptor + context to value
//! - [`ChainBuilder`] / [`FrozenChain`] - assembly and frozen selection
//! - [`Configurer`] / [`ConfigurerLoader`] - the plugin extension surface

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builtins;
pub mod chain;
pub mod configurer;
pub mod traits;

pub use builtins::{default_execution_chain, default_grammar_chain};
pub use chain::{
    ChainBuilder, ExecutionChainBuilder, FrozenChain, FrozenExecutionChain, FrozenGrammarChain,
    GrammarChainBuilder,
};
pub use configurer::{ChainOverride, Configurer, ConfigurerFactory, ConfigurerLoader, EngineChains};
pub use traits::{ExecutionResolver, GrammarResolver, Resolver, ResolverIdentity};
