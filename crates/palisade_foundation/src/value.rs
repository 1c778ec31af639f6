//! Runtime argument values handed to command handlers.

use std::fmt;
use std::sync::Arc;

use crate::exception::CommandException;
use crate::sender::{Material, Position, Sender};
use crate::types::ParamType;

/// A fully-resolved argument value.
///
/// Produced by execution resolvers, one per declared handler parameter,
/// in declaration order. Values are cheap to clone.
#[derive(Clone, Debug, PartialEq)]
pub enum ArgValue {
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(Arc<str>),
    /// A resolved material.
    Material(Material),
    /// A world position.
    Position(Position),
    /// An inventory slot index.
    Slot(u8),
    /// The invoking sender.
    Sender(Sender),
    /// The raised domain exception (exception handlers only).
    Exception(CommandException),
}

impl ArgValue {
    /// Returns the declared type this value satisfies.
    #[must_use]
    pub const fn value_type(&self) -> ParamType {
        match self {
            Self::Bool(_) => ParamType::Bool,
            Self::Int(_) => ParamType::Int,
            Self::Float(_) => ParamType::Float,
            Self::String(_) => ParamType::String,
            Self::Material(_) => ParamType::Material,
            Self::Position(_) => ParamType::Position,
            Self::Slot(_) => ParamType::Slot,
            Self::Sender(_) => ParamType::Sender,
            Self::Exception(_) => ParamType::Exception,
        }
    }

    /// Attempts to extract a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a float.
    #[must_use]
    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract a string slice.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a material.
    #[must_use]
    pub const fn as_material(&self) -> Option<&Material> {
        match self {
            Self::Material(m) => Some(m),
            _ => None,
        }
    }

    /// Attempts to extract a position.
    #[must_use]
    pub const fn as_position(&self) -> Option<Position> {
        match self {
            Self::Position(p) => Some(*p),
            _ => None,
        }
    }

    /// Attempts to extract a slot index.
    #[must_use]
    pub const fn as_slot(&self) -> Option<u8> {
        match self {
            Self::Slot(s) => Some(*s),
            _ => None,
        }
    }

    /// Attempts to extract the sender.
    #[must_use]
    pub const fn as_sender(&self) -> Option<&Sender> {
        match self {
            Self::Sender(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract the exception.
    #[must_use]
    pub const fn as_exception(&self) -> Option<&CommandException> {
        match self {
            Self::Exception(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Material(m) => write!(f, "{}", m.name),
            Self::Position(p) => write!(f, "{p}"),
            Self::Slot(s) => write!(f, "slot {s}"),
            Self::Sender(s) => write!(f, "{}", s.name()),
            Self::Exception(e) => write!(f, "{e}"),
        }
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for ArgValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for ArgValue {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        Self::String(Arc::from(s))
    }
}

impl From<Material> for ArgValue {
    fn from(m: Material) -> Self {
        Self::Material(m)
    }
}

impl From<Position> for ArgValue {
    fn from(p: Position) -> Self {
        Self::Position(p)
    }
}
