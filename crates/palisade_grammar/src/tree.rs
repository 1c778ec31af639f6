//! The registered command tree.
//!
//! Commands compile to strictly linear chains of nodes. Registration
//! merges chains into the tree, sharing literal prefix segments as the
//! host dispatcher requires: "team create" and "team delete" produce one
//! "team" node with two child subtrees.

use std::fmt;
use std::sync::Arc;

use palisade_foundation::{Error, Result};

use crate::node::{GrammarNodeSpec, NodeKind};

/// Key identifying the executor bound to a terminal node.
///
/// The engine keys executors by the command's declared path; the host
/// hands the key back when the terminal node is reached.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExecutorId(Arc<str>);

impl ExecutorId {
    /// Creates an executor key from a command path.
    #[must_use]
    pub fn new(path: impl Into<Arc<str>>) -> Self {
        Self(path.into())
    }

    /// The command path this key was created from.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExecutorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One node of the registered tree.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandNode {
    spec: GrammarNodeSpec,
    children: Vec<CommandNode>,
    executor: Option<ExecutorId>,
}

impl CommandNode {
    /// Creates a node from a spec, taking ownership of it.
    #[must_use]
    pub fn new(spec: GrammarNodeSpec) -> Self {
        Self {
            spec,
            children: Vec::new(),
            executor: None,
        }
    }

    /// Creates an executable node with its executor already bound.
    #[must_use]
    pub fn executable(spec: GrammarNodeSpec, executor: ExecutorId) -> Self {
        Self {
            spec,
            children: Vec::new(),
            executor: Some(executor),
        }
    }

    /// Adds a prebuilt child subtree.
    #[must_use]
    pub fn with_child(mut self, child: CommandNode) -> Self {
        self.children.push(child);
        self
    }

    /// The node's spec.
    #[must_use]
    pub fn spec(&self) -> &GrammarNodeSpec {
        &self.spec
    }

    /// Child nodes.
    #[must_use]
    pub fn children(&self) -> &[CommandNode] {
        &self.children
    }

    /// The executor key, for executable terminal nodes.
    #[must_use]
    pub fn executor(&self) -> Option<&ExecutorId> {
        self.executor.as_ref()
    }

    /// Finds a direct literal child by token.
    #[must_use]
    pub fn find_literal(&self, token: &str) -> Option<&CommandNode> {
        self.children
            .iter()
            .find(|c| c.spec.literal_token() == Some(token))
    }

    /// Number of nodes in this subtree, including this node.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(CommandNode::node_count).sum::<usize>()
    }

    /// Marks this node executable.
    ///
    /// # Errors
    /// Returns a configuration error if a different executor is already
    /// bound here.
    pub fn bind_executor(&mut self, executor: ExecutorId) -> Result<()> {
        match &self.executor {
            Some(existing) if *existing != executor => {
                Err(Error::conflicting_executor(executor.path()))
            }
            _ => {
                self.executor = Some(executor);
                Ok(())
            }
        }
    }

    /// Merges a chain of specs below this node, sharing equal prefixes,
    /// and binds the executor at the chain's terminal node.
    fn merge_chain(&mut self, mut specs: std::vec::IntoIter<GrammarNodeSpec>, executor: ExecutorId) -> Result<()> {
        let Some(spec) = specs.next() else {
            return self.bind_executor(executor);
        };

        if let Some(index) = self.children.iter().position(|c| c.spec == spec) {
            return self.children[index].merge_chain(specs, executor);
        }

        let mut child = CommandNode::new(spec);
        child.merge_chain(specs, executor)?;
        self.children.push(child);
        Ok(())
    }
}

/// The full registered tree: one root node per distinct leading token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommandTree {
    roots: Vec<CommandNode>,
}

impl CommandTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Root nodes.
    #[must_use]
    pub fn roots(&self) -> &[CommandNode] {
        &self.roots
    }

    /// Inserts a compiled chain, merging shared prefixes.
    ///
    /// The chain must be non-empty; its terminal node becomes executable
    /// with the given key. Re-inserting an identical chain with the same
    /// key is a no-op.
    ///
    /// # Errors
    /// Returns a configuration error if the terminal node already carries
    /// a different executor.
    pub fn insert(&mut self, specs: Vec<GrammarNodeSpec>, executor: ExecutorId) -> Result<()> {
        let mut iter = specs.into_iter();
        let Some(first) = iter.next() else {
            return Err(Error::empty_command_path(executor.path()));
        };

        if let Some(index) = self.roots.iter().position(|r| *r.spec() == first) {
            return self.roots[index].merge_chain(iter, executor);
        }

        let mut root = CommandNode::new(first);
        root.merge_chain(iter, executor)?;
        self.roots.push(root);
        Ok(())
    }

    /// Finds a node by walking literal tokens from the roots.
    #[must_use]
    pub fn find(&self, tokens: &[&str]) -> Option<&CommandNode> {
        let (first, rest) = tokens.split_first()?;
        let mut node = self
            .roots
            .iter()
            .find(|r| r.spec().literal_token() == Some(*first))?;
        for token in rest {
            node = node.find_literal(token)?;
        }
        Some(node)
    }

    /// Total node count across all roots.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(CommandNode::node_count).sum()
    }

    /// True if no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
