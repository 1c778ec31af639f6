//! Declared-type descriptors for handler parameters.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The declared type of one handler-function parameter.
///
/// User-input types correspond to a token the player types and emit a
/// grammar node at compile time. Injected types (sender, exception,
/// container-scoped objects, derived lookups) are satisfied purely by
/// runtime resolution and emit no grammar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParamType {
    /// Boolean flag (`true` / `false`).
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// Single-word or quoted string.
    String,
    /// String consuming the remainder of the input line.
    GreedyString,
    /// A material (block or item) named by the player.
    Material,
    /// A world position (x, y, z).
    Position,
    /// An inventory slot index.
    Slot,
    /// The invoking sender. Injected, never typed by the player.
    Sender,
    /// The raised domain exception. Only valid in exception handlers.
    Exception,
    /// A container-scoped object looked up by parameter name. Injected.
    Context,
    /// The block the sender is aiming at. Derived platform lookup, injected.
    TargetBlock,
}

impl ParamType {
    /// Returns true if this parameter corresponds to a token the player
    /// types, and therefore emits a grammar node.
    #[must_use]
    pub const fn is_user_input(self) -> bool {
        !matches!(
            self,
            Self::Sender | Self::Exception | Self::Context | Self::TargetBlock
        )
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::GreedyString => "greedy-string",
            Self::Material => "material",
            Self::Position => "position",
            Self::Slot => "slot",
            Self::Sender => "sender",
            Self::Exception => "exception",
            Self::Context => "context",
            Self::TargetBlock => "target-block",
        };
        write!(f, "{name}")
    }
}
