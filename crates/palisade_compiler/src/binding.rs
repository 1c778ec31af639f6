//! Handler bindings.
//!
//! A [`HandlerBinding`] is the normalized form of one declared command:
//! the literal path, the ordered parameter descriptors, and the handler
//! callable itself. Bindings are created during discovery and immutable
//! for the process lifetime.

use std::fmt;
use std::sync::Arc;

use palisade_foundation::{ArgValue, CommandException, Marker, ParamType, ParameterDescriptor};
use palisade_grammar::ExecutorId;

/// The handler callable. Receives the fully-resolved arguments in
/// declaration order; a raised [`CommandException`] routes through the
/// exception dispatcher.
pub type HandlerFn =
    Arc<dyn Fn(&[ArgValue]) -> std::result::Result<(), CommandException> + Send + Sync>;

/// One declared command bound to its handler.
#[derive(Clone)]
pub struct HandlerBinding {
    path: Arc<str>,
    descriptors: Vec<ParameterDescriptor>,
    handler: HandlerFn,
}

impl HandlerBinding {
    /// Creates a binding for the given command path.
    ///
    /// The path may contain several literal tokens ("team create").
    #[must_use]
    pub fn new(path: impl Into<Arc<str>>, handler: HandlerFn) -> Self {
        Self {
            path: path.into(),
            descriptors: Vec::new(),
            handler,
        }
    }

    /// Declares the next parameter. Ordinal positions follow declaration
    /// order.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<Arc<str>>, declared_type: ParamType) -> Self {
        let position = self.descriptors.len();
        self.descriptors
            .push(ParameterDescriptor::new(name, declared_type, position));
        self
    }

    /// Declares the next parameter with markers attached.
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

    /// The declared command path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path's literal tokens in order.
    pub fn path_tokens(&self) -> impl Iterator<Item = &str> {
        self.path.split_whitespace()
    }

    /// The ordered parameter descriptors.
    #[must_use]
    pub fn descriptors(&self) -> &[ParameterDescriptor] {
        &self.descriptors
    }

    /// The executor key this binding registers under.
    #[must_use]
    pub fn executor_id(&self) -> ExecutorId {
        ExecutorId::new(self.path.clone())
    }

    /// Invokes the handler with resolved arguments.
    ///
    /// # Errors
    /// Propagates the domain exception the handler raised.
    pub fn invoke(&self, args: &[ArgValue]) -> std::result::Result<(), CommandException> {
        (self.handler)(args)
    }
}

impl fmt::Debug for HandlerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerBinding")
            .field("path", &self.path)
            .field("descriptors", &self.descriptors)
            .finish_non_exhaustive()
    }
}
