//! Runtime argument resolution.

use palisade_foundation::{ArgValue, Error, InvocationContext, ParameterDescriptor, Result};
use palisade_resolver::FrozenExecutionChain;

/// Resolves every descriptor to a value, in declaration order.
///
/// A missing resolver should have been caught at compile time; it is
/// re-checked here defensively and reported as a framework error. The
/// first failure aborts resolution, before any handler side effects.
///
/// # Errors
/// Returns the first resolver failure: a syntax error for invalid user
/// input, or a framework error for broken invariants.
pub fn resolve_arguments(
    descriptors: &[ParameterDescriptor],
    chain: &FrozenExecutionChain,
    ctx: &InvocationContext,
) -> Result<Vec<ArgValue>> {
    let mut args = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        let resolver = chain
            .select_for(descriptor)
            .ok_or_else(|| Error::no_execution_resolver(descriptor))?;
        args.push(resolver.resolve(descriptor, ctx)?);
    }
    Ok(args)
}
