//! The plugin extension surface: configurers and the loader.
//!
//! A configurer is an externally declared unit contributing resolvers
//! and chain overrides on top of the built-in defaults. The loader
//! instantiates each discovered unit through its no-argument factory,
//! collects all four kinds of contribution, applies overrides, and
//! freezes both chains. After [`ConfigurerLoader::load`] returns, chain
//! membership never changes again.

use std::fmt;
use std::sync::Arc;

use palisade_foundation::Result;

use crate::builtins::{default_execution_chain, default_grammar_chain};
use crate::chain::{FrozenExecutionChain, FrozenGrammarChain};
use crate::traits::{ExecutionResolver, GrammarResolver, ResolverIdentity};

/// An override submitted by a configurer.
pub struct ChainOverride<R: ?Sized> {
    /// The identity of the entry to override.
    pub identity: ResolverIdentity,
    /// `None` removes the entry; `Some` replaces it in place.
    pub replacement: Option<Arc<R>>,
}

impl<R: ?Sized> ChainOverride<R> {
    /// Removes the entry with the given identity.
    #[must_use]
    pub fn remove(identity: ResolverIdentity) -> Self {
        Self {
            identity,
            replacement: None,
        }
    }

    /// Replaces the entry with the given identity in place.
    #[must_use]
    pub fn replace(identity: ResolverIdentity, replacement: Arc<R>) -> Self {
        Self {
            identity,
            replacement: Some(replacement),
        }
    }
}

/// An externally declared configuration unit.
///
/// All four hooks default to contributing nothing. Contributions from
/// different configurers are appended in load order; configurers must
/// not rely on any ordering between units, since the discovery
/// mechanism that finds them does not guarantee one.
pub trait Configurer {
    /// Build-phase resolvers to append after the defaults.
    fn grammar_resolvers(&self) -> Vec<Arc<dyn GrammarResolver>> {
        Vec::new()
    }

    /// Runtime resolvers to append after the defaults.
    fn execution_resolvers(&self) -> Vec<Arc<dyn ExecutionResolver>> {
        Vec::new()
    }

    /// Overrides against the build chain.
    fn grammar_overrides(&self) -> Vec<ChainOverride<dyn GrammarResolver>> {
        Vec::new()
    }

    /// Overrides against the runtime chain.
    fn execution_overrides(&self) -> Vec<ChainOverride<dyn ExecutionResolver>> {
        Vec::new()
    }
}

/// The no-argument construction path a configuration unit must expose.
///
/// A factory failure is fatal at startup.
pub type ConfigurerFactory = fn() -> Result<Box<dyn Configurer>>;

/// Both frozen chains, produced once at startup.
pub struct EngineChains {
    /// The frozen build-phase chain.
    pub grammar: FrozenGrammarChain,
    /// The frozen runtime chain.
    pub execution: FrozenExecutionChain,
}

impl fmt::Debug for EngineChains {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineChains")
            .field("grammar", &self.grammar)
            .field("execution", &self.execution)
            .finish()
    }
}

/// Builds the frozen chains from defaults plus discovered configurers.
pub struct ConfigurerLoader;

impl ConfigurerLoader {
    /// Loads every configurer and produces the frozen chains.
    ///
    /// Defaults register first, then each configurer's resolvers in the
    /// order the factories are given; overrides from all units apply
    /// after every contribution is collected, just before freezing.
    ///
    /// # Errors
    /// Returns a configuration error if a factory fails or a resolver
    /// identity is registered twice.
    pub fn load(factories: &[ConfigurerFactory]) -> Result<EngineChains> {
        let mut configurers = Vec::with_capacity(factories.len());
        for factory in factories {
            configurers.push(factory()?);
        }

        let mut grammar = default_grammar_chain();
        let mut execution = default_execution_chain();

        for configurer in &configurers {
            for resolver in configurer.grammar_resolvers() {
                grammar.register(resolver);
            }
            for resolver in configurer.execution_resolvers() {
                execution.register(resolver);
            }
        }

        for configurer in &configurers {
            for submitted in configurer.grammar_overrides() {
                grammar.override_entry(submitted.identity, submitted.replacement);
            }
            for submitted in configurer.execution_overrides() {
                execution.override_entry(submitted.identity, submitted.replacement);
            }
        }

        Ok(EngineChains {
            grammar: grammar.freeze()?,
            execution: execution.freeze()?,
        })
    }

    /// Loads with no configurers at all: the built-in defaults only.
    ///
    /// # Errors
    /// Never fails in practice; the default chains carry no duplicate
    /// identities.
    pub fn load_defaults() -> Result<EngineChains> {
        Self::load(&[])
    }
}
