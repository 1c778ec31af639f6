//! The two resolver capabilities.
//!
//! A build-time [`GrammarResolver`] turns a matching descriptor into a
//! grammar node spec. A runtime [`ExecutionResolver`] extracts a typed
//! value for a matching descriptor from the invocation context. Both
//! report failures as [`Error`](palisade_foundation::Error) values;
//! syntax-class errors carry the user-facing message.

use std::fmt;

use palisade_foundation::{ArgValue, InvocationContext, ParameterDescriptor, Result};
use palisade_grammar::GrammarNodeSpec;

/// Unique key identifying one resolver entry in a chain.
///
/// Override and removal are keyed by identity, so extensions must pick
/// names that cannot collide with the built-ins (`builtin/...`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ResolverIdentity(&'static str);

impl ResolverIdentity {
    /// Creates an identity from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The identity's name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ResolverIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Common surface of both resolver kinds: identity plus applicability.
pub trait Resolver: Send + Sync {
    /// This entry's unique key.
    fn identity(&self) -> ResolverIdentity;

    /// Whether this resolver claims the given descriptor.
    fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool;
}

/// Build-phase capability: produce a grammar node for a descriptor.
pub trait GrammarResolver: Resolver {
    /// Builds the node spec, folding the descriptor's marker constraints
    /// into it.
    ///
    /// # Errors
    /// Returns a configuration error when the descriptor's markers are
    /// inconsistent with the declared type.
    fn build(&self, descriptor: &ParameterDescriptor) -> Result<GrammarNodeSpec>;
}

/// Runtime capability: extract a typed value for a descriptor.
pub trait ExecutionResolver: Resolver {
    /// Resolves the value from the invocation context.
    ///
    /// # Errors
    /// Returns a syntax error for invalid user input (the message is
    /// shown to the sender), or a framework error when a value the host
    /// should have supplied is missing or ill-typed.
    fn resolve(
        &self,
        descriptor: &ParameterDescriptor,
        ctx: &InvocationContext,
    ) -> Result<ArgValue>;
}
