//! Platform boundary types: senders, positions, and materials.
//!
//! These model the hosting server's own types only as far as the engine's
//! boundary requires. The host owns the real implementations.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A world position.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    /// East-west coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// North-south coordinate.
    pub z: f64,
}

impl Position {
    /// Creates a position.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A material known to the server, with its block/item capabilities.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Material {
    /// Canonical material name (e.g. `"stone"`).
    pub name: Arc<str>,
    /// True if this material can be placed as a block.
    pub is_block: bool,
    /// True if this material can be held as an inventory item.
    pub is_item: bool,
}

impl Material {
    /// Creates a material that is both a block and an item.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            is_block: true,
            is_item: true,
        }
    }

    /// Creates a block-only material.
    #[must_use]
    pub fn block(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            is_block: true,
            is_item: false,
        }
    }

    /// Creates an item-only material.
    #[must_use]
    pub fn item(name: impl Into<Arc<str>>) -> Self {
        Self {
            name: name.into(),
            is_block: false,
            is_item: true,
        }
    }
}

/// Name-keyed material lookup supplied by the host.
///
/// Cloning is O(1); the table shares structure with its clones.
#[derive(Clone, Debug, Default)]
pub struct MaterialTable {
    by_name: im::HashMap<Arc<str>, Material>,
}

impl MaterialTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a material under its canonical name.
    pub fn register(&mut self, material: Material) {
        self.by_name.insert(material.name.clone(), material);
    }

    /// Looks up a material by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.by_name.get(name)
    }

    /// Returns the number of registered materials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Returns true if no materials are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// The entity that entered a command.
#[derive(Clone, Debug, PartialEq)]
pub enum Sender {
    /// A connected player.
    Player {
        /// Player name.
        name: Arc<str>,
        /// Current position.
        position: Position,
        /// Block the player is aiming at, if any.
        target_block: Option<Material>,
    },
    /// The server console.
    Console,
}

impl Sender {
    /// Creates a player sender at the given position.
    #[must_use]
    pub fn player(name: impl Into<Arc<str>>, position: Position) -> Self {
        Self::Player {
            name: name.into(),
            position,
            target_block: None,
        }
    }

    /// Sets the block the player is aiming at.
    #[must_use]
    pub fn aiming_at(mut self, material: Material) -> Self {
        if let Self::Player { target_block, .. } = &mut self {
            *target_block = Some(material);
        }
        self
    }

    /// Returns true for player senders.
    #[must_use]
    pub const fn is_player(&self) -> bool {
        matches!(self, Self::Player { .. })
    }

    /// The sender's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Player { name, .. } => name,
            Self::Console => "console",
        }
    }

    /// The sender's position, if it has one.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Player { position, .. } => Some(*position),
            Self::Console => None,
        }
    }

    /// The block the sender is aiming at, if any.
    #[must_use]
    pub fn target_block(&self) -> Option<&Material> {
        match self {
            Self::Player { target_block, .. } => target_block.as_ref(),
            Self::Console => None,
        }
    }
}
