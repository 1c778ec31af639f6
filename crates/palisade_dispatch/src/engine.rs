//! The registration and invocation facade.
//!
//! Ties the frozen chains, the command tree, the handler bindings, and
//! the exception dispatcher together into the surface the host
//! dispatcher talks to: register everything at startup, then invoke
//! once per live command.

use std::collections::HashMap;
use std::fmt;

use palisade_compiler::{CommandCompiler, CompileWarning, HandlerBinding};
use palisade_foundation::{Error, ExceptionTypes, InvocationContext, Result};
use palisade_grammar::CommandTree;
use palisade_resolver::EngineChains;

use crate::exception::{ExceptionDispatcher, ExceptionHandlerBinding};
use crate::execute::resolve_arguments;
use crate::notify::{MessageStyle, Notifier};

/// Generic notice for framework-class failures; details go to the
/// host's log, never to the sender.
const INTERNAL_FAILURE_NOTICE: &str = "an internal error occurred while running this command";

/// The assembled engine.
pub struct CommandEngine {
    chains: EngineChains,
    tree: CommandTree,
    bindings: HashMap<String, HandlerBinding>,
    exceptions: ExceptionDispatcher,
    warnings: Vec<CompileWarning>,
}

impl CommandEngine {
    /// Creates an engine from frozen chains and declared exception
    /// types.
    #[must_use]
    pub fn new(chains: EngineChains, exception_types: ExceptionTypes) -> Self {
        Self {
            chains,
            tree: CommandTree::new(),
            bindings: HashMap::new(),
            exceptions: ExceptionDispatcher::new(exception_types),
            warnings: Vec::new(),
        }
    }

    /// Compiles a binding and registers its grammar into the tree.
    ///
    /// A path registers exactly once for the process lifetime. On
    /// failure nothing is registered: the tree, the binding table, and
    /// the warning list are untouched.
    ///
    /// # Errors
    /// Returns a configuration error when the path is already bound, and
    /// propagates compilation and registration configuration errors.
    pub fn register(&mut self, binding: HandlerBinding) -> Result<()> {
        if self.bindings.contains_key(binding.path()) {
            return Err(Error::duplicate_command(binding.path()));
        }
        let compiled = CommandCompiler::compile(&binding, &self.chains.grammar)?;
        let mut warnings = compiled.register_into(&mut self.tree)?;
        self.warnings.append(&mut warnings);
        self.bindings.insert(binding.path().to_string(), binding);
        Ok(())
    }

    /// Registers an exception handler.
    ///
    /// # Errors
    /// Returns a configuration error on duplicate registration for one
    /// exception type.
    pub fn register_exception_handler(&mut self, binding: ExceptionHandlerBinding) -> Result<()> {
        self.exceptions.register(binding)
    }

    /// The registered grammar tree, for the host to mirror into its own
    /// dispatcher.
    #[must_use]
    pub fn tree(&self) -> &CommandTree {
        &self.tree
    }

    /// Warnings gathered across all registrations.
    #[must_use]
    pub fn warnings(&self) -> &[CompileWarning] {
        &self.warnings
    }

    /// The exception dispatcher.
    #[must_use]
    pub fn exceptions(&self) -> &ExceptionDispatcher {
        &self.exceptions
    }

    /// Runs one live invocation.
    ///
    /// Arguments resolve through the execution chain before the handler
    /// body runs; a syntax failure therefore aborts with no partial
    /// side effects, and its message reaches the sender as a warning.
    /// A raised domain exception routes through the exception
    /// dispatcher.
    ///
    /// # Errors
    /// Returns framework errors for the host to log; the sender has
    /// already received a generic failure notice by then. Syntax
    /// failures are fully handled here and return `Ok`.
    pub fn invoke(
        &self,
        path: &str,
        ctx: &InvocationContext,
        notifier: &dyn Notifier,
    ) -> Result<()> {
        let Some(binding) = self.bindings.get(path) else {
            notifier.notify(ctx.sender(), INTERNAL_FAILURE_NOTICE, MessageStyle::Warning);
            return Err(Error::unknown_command(path));
        };

        let args = match resolve_arguments(binding.descriptors(), &self.chains.execution, ctx) {
            Ok(args) => args,
            Err(err) if err.is_syntax() => {
                notifier.notify(ctx.sender(), &format!("{err}"), MessageStyle::Warning);
                return Ok(());
            }
            Err(err) => {
                notifier.notify(ctx.sender(), INTERNAL_FAILURE_NOTICE, MessageStyle::Warning);
                return Err(err);
            }
        };

        if let Err(exception) = binding.invoke(&args) {
            match self
                .exceptions
                .dispatch(&exception, ctx, &self.chains.execution, notifier)
            {
                Ok(_) => {}
                Err(err) => {
                    notifier.notify(ctx.sender(), INTERNAL_FAILURE_NOTICE, MessageStyle::Warning);
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CommandEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandEngine")
            .field("commands", &self.bindings.len())
            .field("tree_nodes", &self.tree.node_count())
            .field("warnings", &self.warnings.len())
            .finish()
    }
}
