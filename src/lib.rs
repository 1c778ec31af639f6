//! Palisade - Declarative command registration and argument resolution
//!
//! This crate re-exports all layers of the Palisade system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: palisade_dispatch   — Engine facade, execution, exception routing
//! Layer 3: palisade_compiler   — Handler bindings, grammar compilation
//! Layer 2: palisade_resolver   — Resolver chains, configurers, builtins
//! Layer 1: palisade_grammar    — Grammar node specs, command tree
//! Layer 0: palisade_foundation — Core types (ArgValue, Sender, Error)
//! ```

pub use palisade_compiler as compiler;
pub use palisade_dispatch as dispatch;
pub use palisade_foundation as foundation;
pub use palisade_grammar as grammar;
pub use palisade_resolver as resolver;
