//! Error types for the Palisade engine.
//!
//! Every failure crossing the engine boundary is normalized into one of
//! three classes:
//!
//! - [`Error::Configuration`] - fatal at startup; a command or module is
//!   mis-declared and cannot be registered.
//! - [`Error::Syntax`] - recoverable, per-invocation; the user typed
//!   something invalid. The display text is shown to the sender verbatim.
//! - [`Error::Framework`] - fatal, per-invocation; an internal invariant
//!   that should have been validated at compile time was broken.

use thiserror::Error;

use crate::descriptor::ParameterDescriptor;
use crate::types::ParamType;

/// Result alias used throughout Palisade.
pub type Result<T> = std::result::Result<T, Error>;

/// The engine error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Startup-time mis-declaration. Aborts registration of the affected
    /// command or module.
    #[error("configuration error: {0}")]
    Configuration(ConfigErrorKind),

    /// Invalid user input. The message is user-facing.
    #[error("{0}")]
    Syntax(SyntaxErrorKind),

    /// Broken internal invariant during an invocation.
    #[error("framework error: {0}")]
    Framework(FrameworkErrorKind),
}

impl Error {
    /// True for recoverable per-invocation syntax errors.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    /// True for fatal startup configuration errors.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Creates a no-matching-resolver configuration error naming the
    /// offending descriptor.
    #[must_use]
    pub fn no_resolver(descriptor: &ParameterDescriptor) -> Self {
        Self::Configuration(ConfigErrorKind::NoResolver {
            parameter: descriptor.name.to_string(),
            declared_type: descriptor.declared_type,
            position: descriptor.position,
        })
    }

    /// Creates a duplicate-resolver-identity configuration error.
    #[must_use]
    pub fn duplicate_resolver(identity: &'static str) -> Self {
        Self::Configuration(ConfigErrorKind::DuplicateResolver { identity })
    }

    /// Creates a duplicate-exception-handler configuration error.
    #[must_use]
    pub fn duplicate_exception_handler(exception: impl Into<String>) -> Self {
        Self::Configuration(ConfigErrorKind::DuplicateExceptionHandler {
            exception: exception.into(),
        })
    }

    /// Creates a configurer-construction configuration error.
    #[must_use]
    pub fn configurer_construction(reason: impl Into<String>) -> Self {
        Self::Configuration(ConfigErrorKind::ConfigurerConstruction {
            reason: reason.into(),
        })
    }

    /// Creates a duplicate-command configuration error.
    #[must_use]
    pub fn duplicate_command(path: impl Into<String>) -> Self {
        Self::Configuration(ConfigErrorKind::DuplicateCommand { path: path.into() })
    }

    /// Creates a greedy-string-not-last configuration error.
    #[must_use]
    pub fn greedy_not_last(parameter: impl Into<String>) -> Self {
        Self::Configuration(ConfigErrorKind::GreedyNotLast {
            parameter: parameter.into(),
        })
    }

    /// Creates a conflicting-executor configuration error.
    #[must_use]
    pub fn conflicting_executor(path: impl Into<String>) -> Self {
        Self::Configuration(ConfigErrorKind::ConflictingExecutor { path: path.into() })
    }

    /// Creates an empty-command-path configuration error.
    #[must_use]
    pub fn empty_command_path(path: impl Into<String>) -> Self {
        Self::Configuration(ConfigErrorKind::EmptyCommandPath { path: path.into() })
    }

    /// Creates an out-of-range syntax error.
    #[must_use]
    pub fn out_of_range(value: f64, min: i64, max: i64) -> Self {
        Self::Syntax(SyntaxErrorKind::OutOfRange { value, min, max })
    }

    /// Creates an unknown-material syntax error.
    #[must_use]
    pub fn unknown_material(name: impl Into<String>) -> Self {
        Self::Syntax(SyntaxErrorKind::UnknownMaterial { name: name.into() })
    }

    /// Creates a not-a-block syntax error.
    #[must_use]
    pub fn not_a_block(name: impl Into<String>) -> Self {
        Self::Syntax(SyntaxErrorKind::NotABlock { name: name.into() })
    }

    /// Creates a not-an-item syntax error.
    #[must_use]
    pub fn not_an_item(name: impl Into<String>) -> Self {
        Self::Syntax(SyntaxErrorKind::NotAnItem { name: name.into() })
    }

    /// Creates a console-blocked syntax error.
    #[must_use]
    pub const fn console_blocked() -> Self {
        Self::Syntax(SyntaxErrorKind::ConsoleBlocked)
    }

    /// Creates a no-target-block syntax error.
    #[must_use]
    pub const fn no_target_block() -> Self {
        Self::Syntax(SyntaxErrorKind::NoTargetBlock)
    }

    /// Creates an invalid-slot syntax error.
    #[must_use]
    pub const fn invalid_slot(value: i64) -> Self {
        Self::Syntax(SyntaxErrorKind::InvalidSlot { value })
    }

    /// Creates a free-form syntax error for extension resolvers.
    #[must_use]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax(SyntaxErrorKind::Other {
            message: message.into(),
        })
    }

    /// Creates a missing-execution-resolver framework error.
    #[must_use]
    pub fn no_execution_resolver(descriptor: &ParameterDescriptor) -> Self {
        Self::Framework(FrameworkErrorKind::NoExecutionResolver {
            parameter: descriptor.name.to_string(),
            declared_type: descriptor.declared_type,
        })
    }

    /// Creates a missing-argument framework error.
    #[must_use]
    pub fn missing_argument(parameter: impl Into<String>) -> Self {
        Self::Framework(FrameworkErrorKind::MissingArgument {
            parameter: parameter.into(),
        })
    }

    /// Creates an argument-type-mismatch framework error.
    #[must_use]
    pub fn argument_type_mismatch(parameter: impl Into<String>, expected: ParamType) -> Self {
        Self::Framework(FrameworkErrorKind::ArgumentTypeMismatch {
            parameter: parameter.into(),
            expected,
        })
    }

    /// Creates a no-raised-exception framework error.
    #[must_use]
    pub const fn no_raised_exception() -> Self {
        Self::Framework(FrameworkErrorKind::NoRaisedException)
    }

    /// Creates a missing-context-object framework error.
    #[must_use]
    pub fn missing_context_object(name: impl Into<String>) -> Self {
        Self::Framework(FrameworkErrorKind::MissingContextObject { name: name.into() })
    }

    /// Creates an exception-handler-failed framework error.
    #[must_use]
    pub fn exception_handler_failed(
        exception: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Framework(FrameworkErrorKind::ExceptionHandlerFailed {
            exception: exception.into(),
            message: message.into(),
        })
    }

    /// Creates an unknown-command framework error.
    #[must_use]
    pub fn unknown_command(path: impl Into<String>) -> Self {
        Self::Framework(FrameworkErrorKind::UnknownCommand { path: path.into() })
    }
}

/// Startup configuration error kinds.
#[derive(Debug, Error)]
pub enum ConfigErrorKind {
    /// No build-time resolver matched a parameter descriptor.
    #[error("no resolver matches parameter `{parameter}` ({declared_type}) at position {position}")]
    NoResolver {
        /// Declared parameter name.
        parameter: String,
        /// Declared parameter type.
        declared_type: ParamType,
        /// Ordinal position in the parameter list.
        position: usize,
    },

    /// A resolver identity was registered twice in one chain.
    #[error("resolver `{identity}` registered twice")]
    DuplicateResolver {
        /// The duplicated identity.
        identity: &'static str,
    },

    /// Two exception handlers were registered for one exception type.
    #[error("duplicate exception handler for `{exception}`")]
    DuplicateExceptionHandler {
        /// The exception type name.
        exception: String,
    },

    /// A configurer could not be constructed.
    #[error("configurer construction failed: {reason}")]
    ConfigurerConstruction {
        /// Why construction failed.
        reason: String,
    },

    /// A greedy string parameter was not the final user-input parameter.
    #[error("greedy string parameter `{parameter}` must be last")]
    GreedyNotLast {
        /// Declared parameter name.
        parameter: String,
    },

    /// Two commands compiled to the same terminal node.
    #[error("command path `{path}` already has an executor")]
    ConflictingExecutor {
        /// The conflicting command path.
        path: String,
    },

    /// A command was declared with no path tokens at all.
    #[error("command path `{path}` contains no tokens")]
    EmptyCommandPath {
        /// The declared path.
        path: String,
    },

    /// A second handler binding was registered for one command path.
    #[error("command `{path}` is already registered")]
    DuplicateCommand {
        /// The declared path.
        path: String,
    },
}

/// Recoverable per-invocation syntax error kinds.
///
/// Display text is user-facing and shown to the sender without a stack
/// trace.
#[derive(Debug, Error)]
pub enum SyntaxErrorKind {
    /// Numeric value outside its declared range.
    #[error("{value} is out of range [{min}, {max}]")]
    OutOfRange {
        /// The value the user entered.
        value: f64,
        /// Lower bound, inclusive.
        min: i64,
        /// Upper bound, inclusive.
        max: i64,
    },

    /// Material name not known to the server.
    #[error("unknown material `{name}`")]
    UnknownMaterial {
        /// The name the user entered.
        name: String,
    },

    /// Material exists but is not placeable as a block.
    #[error("`{name}` is not a block")]
    NotABlock {
        /// The material name.
        name: String,
    },

    /// Material exists but is not holdable as an item.
    #[error("`{name}` is not an item")]
    NotAnItem {
        /// The material name.
        name: String,
    },

    /// A player-only command was issued from the console.
    #[error("this command can only be used by a player")]
    ConsoleBlocked,

    /// The sender is not aiming at any block.
    #[error("you are not looking at a block")]
    NoTargetBlock,

    /// Inventory slot index outside the valid range.
    #[error("{value} is not a valid inventory slot")]
    InvalidSlot {
        /// The value the user entered.
        value: i64,
    },

    /// Free-form syntax failure from an extension resolver.
    #[error("{message}")]
    Other {
        /// User-facing message.
        message: String,
    },
}

/// Fatal per-invocation framework error kinds.
#[derive(Debug, Error)]
pub enum FrameworkErrorKind {
    /// No execution resolver matched a descriptor expected to be
    /// pre-validated at compile time.
    #[error("no execution resolver for parameter `{parameter}` ({declared_type})")]
    NoExecutionResolver {
        /// Declared parameter name.
        parameter: String,
        /// Declared parameter type.
        declared_type: ParamType,
    },

    /// The host supplied no parsed value for a grammar-emitting parameter.
    #[error("missing parsed value for parameter `{parameter}`")]
    MissingArgument {
        /// Declared parameter name.
        parameter: String,
    },

    /// The host supplied a parsed value of the wrong type.
    #[error("parameter `{parameter}` expected a {expected} value")]
    ArgumentTypeMismatch {
        /// Declared parameter name.
        parameter: String,
        /// The declared type.
        expected: ParamType,
    },

    /// An exception-typed parameter was resolved outside exception
    /// dispatch.
    #[error("no exception was raised in this context")]
    NoRaisedException,

    /// A container-scoped object was not provided.
    #[error("no context object named `{name}`")]
    MissingContextObject {
        /// The requested object name.
        name: String,
    },

    /// An exception handler itself failed. Terminal; never re-dispatched.
    #[error("exception handler for `{exception}` failed: {message}")]
    ExceptionHandlerFailed {
        /// The exception type being handled.
        exception: String,
        /// Why the handler failed.
        message: String,
    },

    /// The host invoked a command path the engine never registered.
    #[error("unknown command path `{path}`")]
    UnknownCommand {
        /// The invoked path.
        path: String,
    },
}
