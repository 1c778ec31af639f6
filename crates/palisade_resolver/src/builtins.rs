//! Built-in default resolvers and the default chain builders.
//!
//! The default chain order is fixed and documented here; configurer
//! contributions append after it. Both chains place the more specific
//! claims (slot before plain int, injected kinds first on the execution
//! side) ahead of the general ones, since selection is first-match.
//!
//! Build chain order: slot, int, float, bool, string, material, position.
//! Execution chain order: sender, exception, context, target-block, then
//! the same seven user-input resolvers.

use std::sync::Arc;

use palisade_foundation::{
    ArgValue, Error, InvocationContext, Marker, ParamType, ParameterDescriptor, Result,
};
use palisade_grammar::{ArgumentType, GrammarNodeSpec};

use crate::chain::{ExecutionChainBuilder, GrammarChainBuilder};
use crate::traits::{ExecutionResolver, GrammarResolver, Resolver, ResolverIdentity};

/// Highest valid player inventory slot (main inventory, armor, offhand).
pub const MAX_SLOT: i64 = 40;

fn claims_slot(descriptor: &ParameterDescriptor) -> bool {
    descriptor.declared_type == ParamType::Slot
        || (descriptor.declared_type == ParamType::Int
            && descriptor.has_marker(Marker::InventorySlot))
}

/// Fetches the host-parsed value for a descriptor, or the framework
/// error mandated for a missing one.
fn parsed<'a>(
    descriptor: &ParameterDescriptor,
    ctx: &'a InvocationContext,
) -> Result<&'a ArgValue> {
    ctx.arg(&descriptor.name)
        .ok_or_else(|| Error::missing_argument(descriptor.name.to_string()))
}

fn mismatch(descriptor: &ParameterDescriptor) -> Error {
    Error::argument_type_mismatch(descriptor.name.to_string(), descriptor.declared_type)
}

// =============================================================================
// Build-phase resolvers
// =============================================================================

/// Build-phase resolvers producing grammar node specs.
pub mod grammar {
    use super::{
        ArgumentType, GrammarNodeSpec, GrammarResolver, ParamType, ParameterDescriptor, Resolver,
        ResolverIdentity, Result, claims_slot,
    };

    /// Emits bounded integer nodes; folds the numeric-range marker.
    pub struct IntResolver;

    impl Resolver for IntResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/int")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            descriptor.declared_type == ParamType::Int
        }
    }

    impl GrammarResolver for IntResolver {
        fn build(&self, descriptor: &ParameterDescriptor) -> Result<GrammarNodeSpec> {
            let (min, max) = descriptor.numeric_range().unwrap_or((i64::MIN, i64::MAX));
            Ok(GrammarNodeSpec::argument(
                descriptor.name.clone(),
                ArgumentType::Integer { min, max },
            ))
        }
    }

    /// Emits bounded float nodes; folds the numeric-range marker.
    pub struct FloatResolver;

    impl Resolver for FloatResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/float")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            descriptor.declared_type == ParamType::Float
        }
    }

    impl GrammarResolver for FloatResolver {
        fn build(&self, descriptor: &ParameterDescriptor) -> Result<GrammarNodeSpec> {
            let (min, max) = descriptor
                .numeric_range()
                .map_or((f64::MIN, f64::MAX), |(lo, hi)| (lo as f64, hi as f64));
            Ok(GrammarNodeSpec::argument(
                descriptor.name.clone(),
                ArgumentType::Float { min, max },
            ))
        }
    }

    /// Emits boolean nodes.
    pub struct BoolResolver;

    impl Resolver for BoolResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/bool")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            descriptor.declared_type == ParamType::Bool
        }
    }

    impl GrammarResolver for BoolResolver {
        fn build(&self, descriptor: &ParameterDescriptor) -> Result<GrammarNodeSpec> {
            Ok(GrammarNodeSpec::argument(
                descriptor.name.clone(),
                ArgumentType::Bool,
            ))
        }
    }

    /// Emits quoted-string nodes, or a greedy suffix for greedy strings.
    pub struct StringResolver;

    impl Resolver for StringResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/string")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            matches!(
                descriptor.declared_type,
                ParamType::String | ParamType::GreedyString
            )
        }
    }

    impl GrammarResolver for StringResolver {
        fn build(&self, descriptor: &ParameterDescriptor) -> Result<GrammarNodeSpec> {
            let argument_type = if descriptor.declared_type == ParamType::GreedyString {
                ArgumentType::GreedyString
            } else {
                ArgumentType::QuotedString
            };
            Ok(GrammarNodeSpec::argument(
                descriptor.name.clone(),
                argument_type,
            ))
        }
    }

    /// Emits material-id nodes; folds block-only / item-only markers.
    pub struct MaterialResolver;

    impl Resolver for MaterialResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/material")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            descriptor.declared_type == ParamType::Material
        }
    }

    impl GrammarResolver for MaterialResolver {
        fn build(&self, descriptor: &ParameterDescriptor) -> Result<GrammarNodeSpec> {
            Ok(GrammarNodeSpec::argument(
                descriptor.name.clone(),
                ArgumentType::MaterialId {
                    blocks_only: descriptor.block_only(),
                    items_only: descriptor.item_only(),
                },
            ))
        }
    }

    /// Emits coordinate-vector nodes.
    pub struct PositionResolver;

    impl Resolver for PositionResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/position")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            descriptor.declared_type == ParamType::Position
        }
    }

    impl GrammarResolver for PositionResolver {
        fn build(&self, descriptor: &ParameterDescriptor) -> Result<GrammarNodeSpec> {
            Ok(GrammarNodeSpec::argument(
                descriptor.name.clone(),
                ArgumentType::Position,
            ))
        }
    }

    /// Emits inventory-slot nodes. Registered ahead of the int resolver
    /// so that slot-tagged ints resolve here.
    pub struct SlotResolver;

    impl Resolver for SlotResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/slot")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            claims_slot(descriptor)
        }
    }

    impl GrammarResolver for SlotResolver {
        fn build(&self, descriptor: &ParameterDescriptor) -> Result<GrammarNodeSpec> {
            Ok(GrammarNodeSpec::argument(
                descriptor.name.clone(),
                ArgumentType::Slot,
            ))
        }
    }
}

// =============================================================================
// Runtime resolvers
// =============================================================================

/// Runtime resolvers extracting typed values from the invocation context.
pub mod execution {
    use super::{
        ArgValue, Error, ExecutionResolver, InvocationContext, MAX_SLOT, ParamType,
        ParameterDescriptor, Resolver, ResolverIdentity, Result, claims_slot, mismatch, parsed,
    };

    /// Injects the invoking sender; enforces the console-blocked marker.
    pub struct SenderResolver;

    impl Resolver for SenderResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/sender")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            descriptor.declared_type == ParamType::Sender
        }
    }

    impl ExecutionResolver for SenderResolver {
        fn resolve(
            &self,
            descriptor: &ParameterDescriptor,
            ctx: &InvocationContext,
        ) -> Result<ArgValue> {
            if descriptor.console_blocked() && !ctx.sender().is_player() {
                return Err(Error::console_blocked());
            }
            Ok(ArgValue::Sender(ctx.sender().clone()))
        }
    }

    /// Injects the raised exception inside exception dispatch.
    pub struct ExceptionResolver;

    impl Resolver for ExceptionResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/exception")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            descriptor.declared_type == ParamType::Exception
        }
    }

    impl ExecutionResolver for ExceptionResolver {
        fn resolve(
            &self,
            _descriptor: &ParameterDescriptor,
            ctx: &InvocationContext,
        ) -> Result<ArgValue> {
            ctx.exception()
                .cloned()
                .map(ArgValue::Exception)
                .ok_or_else(Error::no_raised_exception)
        }
    }

    /// Injects a container-scoped object looked up by parameter name.
    pub struct ContextResolver;

    impl Resolver for ContextResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/context")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            descriptor.declared_type == ParamType::Context
        }
    }

    impl ExecutionResolver for ContextResolver {
        fn resolve(
            &self,
            descriptor: &ParameterDescriptor,
            ctx: &InvocationContext,
        ) -> Result<ArgValue> {
            ctx.object(&descriptor.name)
                .cloned()
                .ok_or_else(|| Error::missing_context_object(descriptor.name.to_string()))
        }
    }

    /// Derived platform lookup: the block the sender is aiming at.
    pub struct TargetBlockResolver;

    impl Resolver for TargetBlockResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/target-block")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            descriptor.declared_type == ParamType::TargetBlock
        }
    }

    impl ExecutionResolver for TargetBlockResolver {
        fn resolve(
            &self,
            _descriptor: &ParameterDescriptor,
            ctx: &InvocationContext,
        ) -> Result<ArgValue> {
            ctx.sender()
                .target_block()
                .cloned()
                .map(ArgValue::Material)
                .ok_or_else(Error::no_target_block)
        }
    }

    /// Validates slot indices into the player inventory range.
    pub struct SlotResolver;

    impl Resolver for SlotResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/slot")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            claims_slot(descriptor)
        }
    }

    impl ExecutionResolver for SlotResolver {
        fn resolve(
            &self,
            descriptor: &ParameterDescriptor,
            ctx: &InvocationContext,
        ) -> Result<ArgValue> {
            match parsed(descriptor, ctx)? {
                ArgValue::Slot(s) => Ok(ArgValue::Slot(*s)),
                ArgValue::Int(n) => {
                    if (0..=MAX_SLOT).contains(n) {
                        // Range check keeps the cast in u8
                        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                        Ok(ArgValue::Slot(*n as u8))
                    } else {
                        Err(Error::invalid_slot(*n))
                    }
                }
                _ => Err(mismatch(descriptor)),
            }
        }
    }

    /// Extracts integers; re-checks the numeric-range marker.
    pub struct IntResolver;

    impl Resolver for IntResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/int")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            descriptor.declared_type == ParamType::Int
        }
    }

    impl ExecutionResolver for IntResolver {
        fn resolve(
            &self,
            descriptor: &ParameterDescriptor,
            ctx: &InvocationContext,
        ) -> Result<ArgValue> {
            let ArgValue::Int(n) = parsed(descriptor, ctx)? else {
                return Err(mismatch(descriptor));
            };
            if let Some((min, max)) = descriptor.numeric_range() {
                if !(min..=max).contains(n) {
                    #[allow(clippy::cast_precision_loss)]
                    return Err(Error::out_of_range(*n as f64, min, max));
                }
            }
            Ok(ArgValue::Int(*n))
        }
    }

    /// Extracts floats; re-checks the numeric-range marker. Accepts an
    /// integer token where the host parsed one.
    pub struct FloatResolver;

    impl Resolver for FloatResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/float")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            descriptor.declared_type == ParamType::Float
        }
    }

    impl ExecutionResolver for FloatResolver {
        fn resolve(
            &self,
            descriptor: &ParameterDescriptor,
            ctx: &InvocationContext,
        ) -> Result<ArgValue> {
            #[allow(clippy::cast_precision_loss)]
            let value = match parsed(descriptor, ctx)? {
                ArgValue::Float(x) => *x,
                ArgValue::Int(n) => *n as f64,
                _ => return Err(mismatch(descriptor)),
            };
            if let Some((min, max)) = descriptor.numeric_range() {
                #[allow(clippy::cast_precision_loss)]
                if value < min as f64 || value > max as f64 {
                    return Err(Error::out_of_range(value, min, max));
                }
            }
            Ok(ArgValue::Float(value))
        }
    }

    /// Extracts booleans.
    pub struct BoolResolver;

    impl Resolver for BoolResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/bool")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            descriptor.declared_type == ParamType::Bool
        }
    }

    impl ExecutionResolver for BoolResolver {
        fn resolve(
            &self,
            descriptor: &ParameterDescriptor,
            ctx: &InvocationContext,
        ) -> Result<ArgValue> {
            match parsed(descriptor, ctx)? {
                ArgValue::Bool(b) => Ok(ArgValue::Bool(*b)),
                _ => Err(mismatch(descriptor)),
            }
        }
    }

    /// Extracts strings, plain or greedy.
    pub struct StringResolver;

    impl Resolver for StringResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/string")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            matches!(
                descriptor.declared_type,
                ParamType::String | ParamType::GreedyString
            )
        }
    }

    impl ExecutionResolver for StringResolver {
        fn resolve(
            &self,
            descriptor: &ParameterDescriptor,
            ctx: &InvocationContext,
        ) -> Result<ArgValue> {
            match parsed(descriptor, ctx)? {
                ArgValue::String(s) => Ok(ArgValue::String(s.clone())),
                _ => Err(mismatch(descriptor)),
            }
        }
    }

    /// Looks up the typed material name; enforces capability markers.
    pub struct MaterialResolver;

    impl Resolver for MaterialResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/material")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            descriptor.declared_type == ParamType::Material
        }
    }

    impl ExecutionResolver for MaterialResolver {
        fn resolve(
            &self,
            descriptor: &ParameterDescriptor,
            ctx: &InvocationContext,
        ) -> Result<ArgValue> {
            let material = match parsed(descriptor, ctx)? {
                ArgValue::Material(m) => m.clone(),
                ArgValue::String(name) => ctx
                    .materials()
                    .get(name)
                    .cloned()
                    .ok_or_else(|| Error::unknown_material(name.to_string()))?,
                _ => return Err(mismatch(descriptor)),
            };
            if descriptor.block_only() && !material.is_block {
                return Err(Error::not_a_block(material.name.to_string()));
            }
            if descriptor.item_only() && !material.is_item {
                return Err(Error::not_an_item(material.name.to_string()));
            }
            Ok(ArgValue::Material(material))
        }
    }

    /// Extracts coordinate vectors.
    pub struct PositionResolver;

    impl Resolver for PositionResolver {
        fn identity(&self) -> ResolverIdentity {
            ResolverIdentity::new("builtin/position")
        }

        fn is_applicable(&self, descriptor: &ParameterDescriptor) -> bool {
            descriptor.declared_type == ParamType::Position
        }
    }

    impl ExecutionResolver for PositionResolver {
        fn resolve(
            &self,
            descriptor: &ParameterDescriptor,
            ctx: &InvocationContext,
        ) -> Result<ArgValue> {
            match parsed(descriptor, ctx)? {
                ArgValue::Position(p) => Ok(ArgValue::Position(*p)),
                _ => Err(mismatch(descriptor)),
            }
        }
    }
}

// =============================================================================
// Default chain builders
// =============================================================================

/// Builds the default build-phase chain in its documented order.
#[must_use]
pub fn default_grammar_chain() -> GrammarChainBuilder {
    let mut builder = GrammarChainBuilder::new();
    builder.register(Arc::new(grammar::SlotResolver));
    builder.register(Arc::new(grammar::IntResolver));
    builder.register(Arc::new(grammar::FloatResolver));
    builder.register(Arc::new(grammar::BoolResolver));
    builder.register(Arc::new(grammar::StringResolver));
    builder.register(Arc::new(grammar::MaterialResolver));
    builder.register(Arc::new(grammar::PositionResolver));
    builder
}

/// Builds the default runtime chain in its documented order.
#[must_use]
pub fn default_execution_chain() -> ExecutionChainBuilder {
    let mut builder = ExecutionChainBuilder::new();
    builder.register(Arc::new(execution::SenderResolver));
    builder.register(Arc::new(execution::ExceptionResolver));
    builder.register(Arc::new(execution::ContextResolver));
    builder.register(Arc::new(execution::TargetBlockResolver));
    builder.register(Arc::new(execution::SlotResolver));
    builder.register(Arc::new(execution::IntResolver));
    builder.register(Arc::new(execution::FloatResolver));
    builder.register(Arc::new(execution::BoolResolver));
    builder.register(Arc::new(execution::StringResolver));
    builder.register(Arc::new(execution::MaterialResolver));
    builder.register(Arc::new(execution::PositionResolver));
    builder
}
