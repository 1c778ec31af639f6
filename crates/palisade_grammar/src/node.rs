//! Grammar node specifications.
//!
//! A [`GrammarNodeSpec`] is produced once per user-input parameter by a
//! build-time resolver, with marker constraints already folded in.
//! Ownership transfers to the tree when the node is inserted; the engine
//! keeps no live reference afterward.

use std::fmt;
use std::sync::Arc;

/// The host dispatcher's argument-node vocabulary.
///
/// Grammar shapes are constrained to what the host supports: literal
/// tokens, single typed arguments, and greedy suffixes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArgumentType {
    /// A single unquoted word.
    Word,
    /// A word or quoted string.
    QuotedString,
    /// The remainder of the input line. Only valid as the final node.
    GreedyString,
    /// An integer with inclusive bounds.
    Integer {
        /// Lower bound, inclusive.
        min: i64,
        /// Upper bound, inclusive.
        max: i64,
    },
    /// A float with inclusive bounds.
    Float {
        /// Lower bound, inclusive.
        min: f64,
        /// Upper bound, inclusive.
        max: f64,
    },
    /// `true` / `false`.
    Bool,
    /// An x y z coordinate vector.
    Position,
    /// A material identifier, optionally restricted by capability.
    MaterialId {
        /// Only block materials are accepted.
        blocks_only: bool,
        /// Only item materials are accepted.
        items_only: bool,
    },
    /// An inventory slot index.
    Slot,
}

impl ArgumentType {
    /// True for the greedy suffix shape.
    #[must_use]
    pub const fn is_greedy(self) -> bool {
        matches!(self, Self::GreedyString)
    }
}

/// Completion callback for one argument node. The host calls it with the
/// partial token the user has typed so far.
pub type SuggestionsFn = fn(partial: &str) -> Vec<String>;

/// What kind of node a spec describes.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// A literal token that must be typed verbatim.
    Literal(Arc<str>),
    /// A single typed argument bound to a parameter name.
    Argument {
        /// The parameter name the parsed value is keyed under.
        name: Arc<str>,
        /// The host-vocabulary argument type, constraints folded in.
        argument_type: ArgumentType,
    },
}

/// Specification of one grammar node.
#[derive(Clone, Debug)]
pub struct GrammarNodeSpec {
    /// Literal or typed-argument.
    pub kind: NodeKind,
    /// Optional completion provider.
    pub suggestions: Option<SuggestionsFn>,
}

/// Equality is by [`NodeKind`] alone; suggestion providers are opaque
/// callbacks and two specs that parse identically merge identically.
impl PartialEq for GrammarNodeSpec {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl GrammarNodeSpec {
    /// Creates a literal node spec.
    #[must_use]
    pub fn literal(token: impl Into<Arc<str>>) -> Self {
        Self {
            kind: NodeKind::Literal(token.into()),
            suggestions: None,
        }
    }

    /// Creates a typed-argument node spec.
    #[must_use]
    pub fn argument(name: impl Into<Arc<str>>, argument_type: ArgumentType) -> Self {
        Self {
            kind: NodeKind::Argument {
                name: name.into(),
                argument_type,
            },
            suggestions: None,
        }
    }

    /// Attaches a completion provider.
    #[must_use]
    pub fn with_suggestions(mut self, suggestions: SuggestionsFn) -> Self {
        self.suggestions = Some(suggestions);
        self
    }

    /// True for literal nodes.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self.kind, NodeKind::Literal(_))
    }

    /// The literal token, for literal nodes.
    #[must_use]
    pub fn literal_token(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Literal(token) => Some(token),
            NodeKind::Argument { .. } => None,
        }
    }

    /// True for greedy-suffix argument nodes.
    #[must_use]
    pub const fn is_greedy(&self) -> bool {
        matches!(
            self.kind,
            NodeKind::Argument {
                argument_type: ArgumentType::GreedyString,
                ..
            }
        )
    }
}

impl fmt::Display for GrammarNodeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Literal(token) => write!(f, "{token}"),
            NodeKind::Argument { name, .. } => write!(f, "<{name}>"),
        }
    }
}
