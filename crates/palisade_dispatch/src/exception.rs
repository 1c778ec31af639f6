//! Subtype-aware exception dispatch.
//!
//! When a handler raises a [`CommandException`], dispatch searches the
//! registered exception-handler bindings for the one whose declared
//! type is the nearest supertype of the raised type, most specific
//! first. A matched handler's own failure is terminal and never
//! re-dispatched; the unmatched path delivers a default message and
//! never fails.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use palisade_foundation::{
    ArgValue, CommandException, Error, ExceptionTypeId, ExceptionTypes, InvocationContext, Marker,
    ParamType, ParameterDescriptor, Result,
};
use palisade_resolver::FrozenExecutionChain;

use crate::execute::resolve_arguments;
use crate::notify::{MessageStyle, Notifier};

/// The exception-handler callable.
pub type ExceptionHandlerFn =
    Arc<dyn Fn(&[ArgValue]) -> std::result::Result<(), CommandException> + Send + Sync>;

/// One declared exception handler.
///
/// At most one binding may exist per exception type.
#[derive(Clone)]
pub struct ExceptionHandlerBinding {
    exception_type: ExceptionTypeId,
    descriptors: Vec<ParameterDescriptor>,
    handler: ExceptionHandlerFn,
}

impl ExceptionHandlerBinding {
    /// Creates a binding for the given declared exception type.
    #[must_use]
    pub fn new(exception_type: ExceptionTypeId, handler: ExceptionHandlerFn) -> Self {
        Self {
            exception_type,
            descriptors: Vec::new(),
            handler,
        }
    }

    /// Declares the next handler parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<Arc<str>>, declared_type: ParamType) -> Self {
        let position = self.descriptors.len();
        self.descriptors
            .push(ParameterDescriptor::new(name, declared_type, position));
        self
    }

    /// Declares the next handler parameter with markers attached.
    #[must_use]
    pub fn with_tagged_param(
        mut self,
        name: impl Into<Arc<str>>,
        declared_type: ParamType,
        markers: impl IntoIterator<Item = Marker>,
    ) -> Self {
        let position = self.descriptors.len();
        let mut descriptor = ParameterDescriptor::new(name, declared_type, position);
        for marker in markers {
            descriptor = descriptor.with_marker(marker);
        }
        self.descriptors.push(descriptor);
        self
    }

    /// The declared exception type.
    #[must_use]
    pub const fn exception_type(&self) -> ExceptionTypeId {
        self.exception_type
    }

    /// The handler's parameter descriptors.
    #[must_use]
    pub fn descriptors(&self) -> &[ParameterDescriptor] {
        &self.descriptors
    }
}

impl fmt::Debug for ExceptionHandlerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExceptionHandlerBinding")
            .field("exception_type", &self.exception_type)
            .field("descriptors", &self.descriptors)
            .finish_non_exhaustive()
    }
}

/// Which of the two dispatch states a raised exception took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A registered handler matched and ran.
    Matched,
    /// No handler matched; the default message went to the sender.
    Unmatched,
}

/// Routes raised exceptions to their registered handlers.
pub struct ExceptionDispatcher {
    types: ExceptionTypes,
    handlers: HashMap<ExceptionTypeId, ExceptionHandlerBinding>,
}

impl ExceptionDispatcher {
    /// Creates a dispatcher over the given declared exception types.
    #[must_use]
    pub fn new(types: ExceptionTypes) -> Self {
        Self {
            types,
            handlers: HashMap::new(),
        }
    }

    /// The declared exception types.
    #[must_use]
    pub fn types(&self) -> &ExceptionTypes {
        &self.types
    }

    /// Registers an exception handler.
    ///
    /// # Errors
    /// Returns a configuration error if a handler is already registered
    /// for the same exception type.
    pub fn register(&mut self, binding: ExceptionHandlerBinding) -> Result<()> {
        let type_id = binding.exception_type();
        if self.handlers.contains_key(&type_id) {
            return Err(Error::duplicate_exception_handler(self.types.name(type_id)));
        }
        self.handlers.insert(type_id, binding);
        Ok(())
    }

    /// Dispatches a raised exception.
    ///
    /// Searches the raised type's supertype chain, most specific first,
    /// for a registered handler. A match resolves the handler's
    /// parameters against the exception-restricted context and invokes
    /// it. Without a match, the built-in default message carrying the
    /// exception's text goes to the sender; that path cannot fail.
    ///
    /// # Errors
    /// Returns a framework error if the matched handler's parameters
    /// fail to resolve or the handler itself raises. Such a failure is
    /// terminal; it is never re-dispatched.
    pub fn dispatch(
        &self,
        exception: &CommandException,
        ctx: &InvocationContext,
        chain: &FrozenExecutionChain,
        notifier: &dyn Notifier,
    ) -> Result<DispatchOutcome> {
        let matched = self
            .types
            .supertype_chain(exception.type_id)
            .find_map(|type_id| self.handlers.get(&type_id));

        let Some(binding) = matched else {
            notifier.notify(ctx.sender(), &exception.message, MessageStyle::Warning);
            return Ok(DispatchOutcome::Unmatched);
        };

        let handled_as = self.types.name(binding.exception_type());
        let restricted = ctx.for_exception(exception.clone());
        let args = resolve_arguments(binding.descriptors(), chain, &restricted)
            .map_err(|e| Error::exception_handler_failed(handled_as, e.to_string()))?;
        (binding.handler)(&args)
            .map_err(|raised| Error::exception_handler_failed(handled_as, raised.message))?;
        Ok(DispatchOutcome::Matched)
    }
}

impl fmt::Debug for ExceptionDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExceptionDispatcher")
            .field("types", &self.types)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
