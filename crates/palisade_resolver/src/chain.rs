//! Ordered, override-aware resolver chains.
//!
//! A chain is assembled once at startup and then frozen. The split into
//! [`ChainBuilder`] and [`FrozenChain`] makes the assembly contract a
//! type-state: selection only exists on the frozen form, so selecting
//! from a half-assembled chain is a compile-time usage error rather than
//! a runtime one.
//!
//! Selection is strictly first-match in registration order after
//! overrides apply: built-in defaults first, then each configurer's
//! contributions in load order.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use palisade_foundation::{Error, ParameterDescriptor, Result};

use crate::traits::{ExecutionResolver, GrammarResolver, Resolver, ResolverIdentity};

/// Chain builder for either resolver kind.
pub struct ChainBuilder<R: Resolver + ?Sized> {
    entries: Vec<Arc<R>>,
    overrides: HashMap<ResolverIdentity, Option<Arc<R>>>,
}

/// Build-phase chain builder.
pub type GrammarChainBuilder = ChainBuilder<dyn GrammarResolver>;
/// Runtime chain builder.
pub type ExecutionChainBuilder = ChainBuilder<dyn ExecutionResolver>;

impl<R: Resolver + ?Sized> Default for ChainBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resolver + ?Sized> ChainBuilder<R> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            overrides: HashMap::new(),
        }
    }

    /// Appends a resolver entry.
    pub fn register(&mut self, resolver: Arc<R>) {
        self.entries.push(resolver);
    }

    /// Submits an override for the entry with the given identity.
    ///
    /// `None` removes the entry; `Some` substitutes the replacement at
    /// the original's ordinal slot, preserving the priority extensions
    /// depend on. A later override for the same identity supersedes an
    /// earlier one. Overrides naming an identity that is never
    /// registered are ignored.
    pub fn override_entry(&mut self, identity: ResolverIdentity, replacement: Option<Arc<R>>) {
        self.overrides.insert(identity, replacement);
    }

    /// Number of registered entries, before overrides apply.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Applies overrides and freezes the chain.
    ///
    /// # Errors
    /// Returns a configuration error if one identity was registered more
    /// than once.
    pub fn freeze(self) -> Result<FrozenChain<R>> {
        let mut seen: Vec<ResolverIdentity> = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let identity = entry.identity();
            if seen.contains(&identity) {
                return Err(Error::duplicate_resolver(identity.as_str()));
            }
            seen.push(identity);
        }

        let mut frozen = im::Vector::new();
        for entry in self.entries {
            match self.overrides.get(&entry.identity()) {
                Some(None) => {}
                Some(Some(replacement)) => frozen.push_back(replacement.clone()),
                None => frozen.push_back(entry),
            }
        }
        Ok(FrozenChain { entries: frozen })
    }
}

/// A frozen chain: immutable, safe for unsynchronized concurrent reads,
/// O(1) to clone.
#[derive(Clone)]
pub struct FrozenChain<R: ?Sized> {
    entries: im::Vector<Arc<R>>,
}

/// Frozen build-phase chain.
pub type FrozenGrammarChain = FrozenChain<dyn GrammarResolver>;
/// Frozen runtime chain.
pub type FrozenExecutionChain = FrozenChain<dyn ExecutionResolver>;

impl<R: Resolver + ?Sized> FrozenChain<R> {
    /// Selects the first entry applicable to the descriptor.
    ///
    /// Later applicable entries are silently shadowed; use
    /// [`matches_for`](Self::matches_for) to detect that at compile time.
    #[must_use]
    pub fn select_for(&self, descriptor: &ParameterDescriptor) -> Option<Arc<R>> {
        self.entries
            .iter()
            .find(|e| e.is_applicable(descriptor))
            .cloned()
    }

    /// Identities of every entry applicable to the descriptor, in chain
    /// order.
    #[must_use]
    pub fn matches_for(&self, descriptor: &ParameterDescriptor) -> Vec<ResolverIdentity> {
        self.entries
            .iter()
            .filter(|e| e.is_applicable(descriptor))
            .map(|e| e.identity())
            .collect()
    }

    /// Identities of all entries, in chain order.
    #[must_use]
    pub fn identities(&self) -> Vec<ResolverIdentity> {
        self.entries.iter().map(|e| e.identity()).collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the chain has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<R: Resolver + ?Sized> fmt::Debug for FrozenChain<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrozenChain")
            .field("entries", &self.identities())
            .finish()
    }
}
