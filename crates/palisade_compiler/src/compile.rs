//! The command compiler.
//!
//! Walks one handler binding's parameter descriptors in declared order
//! against the frozen build chain and produces the command's grammar
//! chain: literal path segments first, then one typed-argument node per
//! user-facing parameter, strictly linear, terminal node executable.
//!
//! Compilation either succeeds completely or registers nothing.

use std::fmt;

use palisade_foundation::{Error, Result};
use palisade_grammar::{CommandNode, CommandTree, ExecutorId, GrammarNodeSpec};
use palisade_resolver::{FrozenGrammarChain, ResolverIdentity};

use crate::binding::HandlerBinding;

/// A non-fatal finding surfaced during compilation for the embedder to
/// report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompileWarning {
    /// More than one chain entry claimed a descriptor. First-match wins
    /// deterministically; the rest are shadowed.
    AmbiguousResolvers {
        /// The descriptor's parameter name.
        parameter: String,
        /// The entry that won.
        selected: ResolverIdentity,
        /// The shadowed entries, in chain order.
        shadowed: Vec<ResolverIdentity>,
    },
}

impl fmt::Display for CompileWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmbiguousResolvers {
                parameter,
                selected,
                shadowed,
            } => {
                write!(
                    f,
                    "parameter `{parameter}`: resolver {selected} shadows {}",
                    shadowed
                        .iter()
                        .map(|i| i.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }
        }
    }
}

/// A successfully compiled command, not yet registered.
///
/// Holds the linear chain of node specs; registering moves them into
/// the tree, after which the engine retains no reference to them.
#[derive(Debug)]
pub struct CompiledCommand {
    specs: Vec<GrammarNodeSpec>,
    executor: ExecutorId,
    warnings: Vec<CompileWarning>,
}

impl CompiledCommand {
    /// The compiled node specs, path literals first.
    #[must_use]
    pub fn specs(&self) -> &[GrammarNodeSpec] {
        &self.specs
    }

    /// The executor key bound at the terminal node.
    #[must_use]
    pub fn executor(&self) -> &ExecutorId {
        &self.executor
    }

    /// Warnings gathered during compilation.
    #[must_use]
    pub fn warnings(&self) -> &[CompileWarning] {
        &self.warnings
    }

    /// Number of typed-argument nodes (one per user-facing parameter).
    #[must_use]
    pub fn argument_node_count(&self) -> usize {
        self.specs.iter().filter(|s| !s.is_literal()).count()
    }

    /// Builds the standalone linear subtree for this command.
    ///
    /// Useful for inspecting the grammar before registration; the specs
    /// stay owned by this compilation.
    #[must_use]
    pub fn root(&self) -> CommandNode {
        let mut iter = self.specs.iter().rev();
        // compile() guarantees at least one path literal
        let terminal = iter
            .next()
            .cloned()
            .unwrap_or_else(|| GrammarNodeSpec::literal(self.executor.path()));
        let mut node = CommandNode::executable(terminal, self.executor.clone());
        for spec in iter {
            node = CommandNode::new(spec.clone()).with_child(node);
        }
        node
    }

    /// Registers this command into the tree, merging shared literal
    /// prefixes. Consumes the compilation; node ownership transfers to
    /// the tree.
    ///
    /// # Errors
    /// Returns a configuration error if the terminal node already
    /// carries a different executor.
    pub fn register_into(self, tree: &mut CommandTree) -> Result<Vec<CompileWarning>> {
        tree.insert(self.specs, self.executor)?;
        Ok(self.warnings)
    }
}

/// Compiles handler bindings against a frozen build chain.
pub struct CommandCompiler;

impl CommandCompiler {
    /// Compiles one binding.
    ///
    /// Parameters that are not user-facing input (the sender, injected
    /// context objects, derived lookups) emit no grammar; the runtime
    /// chain satisfies them instead.
    ///
    /// # Errors
    /// Returns a configuration error when the path is empty, a
    /// user-facing descriptor matches no chain entry, or a greedy
    /// string is followed by further user input.
    pub fn compile(
        binding: &HandlerBinding,
        chain: &FrozenGrammarChain,
    ) -> Result<CompiledCommand> {
        let mut specs: Vec<GrammarNodeSpec> =
            binding.path_tokens().map(GrammarNodeSpec::literal).collect();
        if specs.is_empty() {
            return Err(Error::empty_command_path(binding.path()));
        }

        let mut warnings = Vec::new();
        let mut greedy_param: Option<String> = None;

        for descriptor in binding.descriptors() {
            if !descriptor.is_user_input() {
                continue;
            }
            if let Some(parameter) = greedy_param.take() {
                return Err(Error::greedy_not_last(parameter));
            }

            let matches = chain.matches_for(descriptor);
            let Some(selected) = matches.first().copied() else {
                return Err(Error::no_resolver(descriptor));
            };
            if matches.len() > 1 {
                warnings.push(CompileWarning::AmbiguousResolvers {
                    parameter: descriptor.name.to_string(),
                    selected,
                    shadowed: matches[1..].to_vec(),
                });
            }

            let resolver = chain
                .select_for(descriptor)
                .ok_or_else(|| Error::no_resolver(descriptor))?;
            let spec = resolver.build(descriptor)?;
            if spec.is_greedy() {
                greedy_param = Some(descriptor.name.to_string());
            }
            specs.push(spec);
        }

        Ok(CompiledCommand {
            specs,
            executor: binding.executor_id(),
            warnings,
        })
    }

    /// Compiles one binding and registers it into the tree.
    ///
    /// Nothing is inserted if compilation fails.
    ///
    /// # Errors
    /// Propagates compilation and registration errors.
    pub fn compile_into(
        binding: &HandlerBinding,
        chain: &FrozenGrammarChain,
        tree: &mut CommandTree,
    ) -> Result<Vec<CompileWarning>> {
        Self::compile(binding, chain)?.register_into(tree)
    }
}
