//! Per-invocation state supplied by the host dispatcher.

use std::sync::Arc;

use crate::exception::CommandException;
use crate::sender::{MaterialTable, Sender};
use crate::value::ArgValue;

/// The live, per-execution state of one command invocation.
///
/// Holds the parsed token values the host's grammar engine produced
/// (keyed by parameter name), the invoking sender, container-scoped
/// objects, and the raised exception when resolving an exception
/// handler's parameters.
///
/// Contexts are cheap to clone; the argument and object maps share
/// structure with their clones.
#[derive(Clone, Debug)]
pub struct InvocationContext {
    sender: Sender,
    args: im::HashMap<Arc<str>, ArgValue>,
    objects: im::HashMap<Arc<str>, ArgValue>,
    materials: MaterialTable,
    exception: Option<CommandException>,
}

impl InvocationContext {
    /// Creates a context for the given sender with no parsed values.
    #[must_use]
    pub fn new(sender: Sender) -> Self {
        Self {
            sender,
            args: im::HashMap::new(),
            objects: im::HashMap::new(),
            materials: MaterialTable::new(),
            exception: None,
        }
    }

    /// Adds a parsed token value under its parameter name.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<Arc<str>>, value: ArgValue) -> Self {
        self.args.insert(name.into(), value);
        self
    }

    /// Adds a container-scoped object under a name.
    #[must_use]
    pub fn with_object(mut self, name: impl Into<Arc<str>>, value: ArgValue) -> Self {
        self.objects.insert(name.into(), value);
        self
    }

    /// Supplies the host's material table.
    #[must_use]
    pub fn with_materials(mut self, materials: MaterialTable) -> Self {
        self.materials = materials;
        self
    }

    /// The invoking sender.
    #[must_use]
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// The parsed token value for a parameter, if the host supplied one.
    #[must_use]
    pub fn arg(&self, name: &str) -> Option<&ArgValue> {
        self.args.get(name)
    }

    /// A container-scoped object by name.
    #[must_use]
    pub fn object(&self, name: &str) -> Option<&ArgValue> {
        self.objects.get(name)
    }

    /// The host's material table.
    #[must_use]
    pub fn materials(&self) -> &MaterialTable {
        &self.materials
    }

    /// The raised exception, when resolving an exception handler.
    #[must_use]
    pub fn exception(&self) -> Option<&CommandException> {
        self.exception.as_ref()
    }

    /// Derives the exception-restricted context: the sender and
    /// container-scoped objects survive, parsed token values do not.
    #[must_use]
    pub fn for_exception(&self, exception: CommandException) -> Self {
        Self {
            sender: self.sender.clone(),
            args: im::HashMap::new(),
            objects: self.objects.clone(),
            materials: self.materials.clone(),
            exception: Some(exception),
        }
    }
}
