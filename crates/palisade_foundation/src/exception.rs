//! Domain exceptions raised by command handlers.
//!
//! The source domain routes failures through an exception class hierarchy.
//! Here subtyping is explicit: each exception type is declared in an
//! [`ExceptionTypes`] registry with at most one parent, and dispatch walks
//! the supertype chain from the concrete type upward.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier of a declared exception type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExceptionTypeId(u32);

/// Registry of declared exception types with single-parent subtyping.
#[derive(Clone, Debug, Default)]
pub struct ExceptionTypes {
    entries: Vec<ExceptionTypeEntry>,
}

#[derive(Clone, Debug)]
struct ExceptionTypeEntry {
    name: Arc<str>,
    parent: Option<ExceptionTypeId>,
}

impl ExceptionTypes {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares an exception type with an optional parent type.
    ///
    /// Declaring a name twice returns the id of the first declaration.
    pub fn declare(
        &mut self,
        name: impl Into<Arc<str>>,
        parent: Option<ExceptionTypeId>,
    ) -> ExceptionTypeId {
        let name = name.into();
        if let Some(existing) = self.lookup(&name) {
            return existing;
        }
        let id = ExceptionTypeId(u32::try_from(self.entries.len()).unwrap_or(u32::MAX));
        self.entries.push(ExceptionTypeEntry { name, parent });
        id
    }

    /// Looks up a declared type by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<ExceptionTypeId> {
        self.entries
            .iter()
            .position(|e| e.name.as_ref() == name)
            .map(|i| ExceptionTypeId(u32::try_from(i).unwrap_or(u32::MAX)))
    }

    /// Returns the name of a declared type.
    #[must_use]
    pub fn name(&self, id: ExceptionTypeId) -> &str {
        self.entries
            .get(id.0 as usize)
            .map_or("<undeclared>", |e| e.name.as_ref())
    }

    /// Returns the declared parent of a type, if any.
    #[must_use]
    pub fn parent(&self, id: ExceptionTypeId) -> Option<ExceptionTypeId> {
        self.entries.get(id.0 as usize).and_then(|e| e.parent)
    }

    /// Iterates from the given type up through its declared supertypes,
    /// most specific first, starting with the type itself.
    pub fn supertype_chain(
        &self,
        id: ExceptionTypeId,
    ) -> impl Iterator<Item = ExceptionTypeId> + '_ {
        std::iter::successors(Some(id), |current| self.parent(*current))
    }

    /// Number of declared types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no types are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A domain exception raised during handler execution.
///
/// Carries a user-facing message; never a low-level fault.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandException {
    /// The declared type of this exception.
    pub type_id: ExceptionTypeId,
    /// User-facing message text.
    pub message: String,
}

impl CommandException {
    /// Creates an exception of the given declared type.
    #[must_use]
    pub fn new(type_id: ExceptionTypeId, message: impl Into<String>) -> Self {
        Self {
            type_id,
            message: message.into(),
        }
    }
}

impl fmt::Display for CommandException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}
