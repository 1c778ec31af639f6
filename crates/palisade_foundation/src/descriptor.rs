//! Parameter descriptors and metadata markers.
//!
//! A [`ParameterDescriptor`] is the normalized view of one handler-function
//! parameter: its declared type, attached markers, name, and ordinal
//! position. Resolvers match against descriptors and nothing else.

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::ParamType;

/// A metadata tag attached to a handler parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Marker {
    /// Numeric value must lie within `[min, max]` inclusive.
    NumericRange {
        /// Lower bound, inclusive.
        min: i64,
        /// Upper bound, inclusive.
        max: i64,
    },
    /// Material must be placeable as a block.
    BlockOnly,
    /// Material must be holdable as an item.
    ItemOnly,
    /// Position is entered as a coordinate vector.
    VectorPosition,
    /// Integer denotes an inventory slot.
    InventorySlot,
    /// The command cannot be issued from the console.
    ConsoleBlocked,
}

/// Normalized view of one handler-function parameter.
///
/// Immutable; scoped to one compilation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParameterDescriptor {
    /// Declared value type.
    pub declared_type: ParamType,
    /// Attached metadata markers.
    pub markers: Vec<Marker>,
    /// Declared parameter name.
    pub name: Arc<str>,
    /// Ordinal position in the handler's parameter list.
    pub position: usize,
}

impl ParameterDescriptor {
    /// Creates a descriptor with no markers.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, declared_type: ParamType, position: usize) -> Self {
        Self {
            declared_type,
            markers: Vec::new(),
            name: name.into(),
            position,
        }
    }

    /// Attaches a marker.
    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    /// Returns true if the given marker is attached.
    #[must_use]
    pub fn has_marker(&self, marker: Marker) -> bool {
        self.markers.contains(&marker)
    }

    /// The numeric range marker bounds, if attached.
    #[must_use]
    pub fn numeric_range(&self) -> Option<(i64, i64)> {
        self.markers.iter().find_map(|m| match m {
            Marker::NumericRange { min, max } => Some((*min, *max)),
            _ => None,
        })
    }

    /// True if the material must be a block.
    #[must_use]
    pub fn block_only(&self) -> bool {
        self.has_marker(Marker::BlockOnly)
    }

    /// True if the material must be an item.
    #[must_use]
    pub fn item_only(&self) -> bool {
        self.has_marker(Marker::ItemOnly)
    }

    /// True if console senders are rejected.
    #[must_use]
    pub fn console_blocked(&self) -> bool {
        self.has_marker(Marker::ConsoleBlocked)
    }

    /// True if this parameter emits a grammar node.
    #[must_use]
    pub fn is_user_input(&self) -> bool {
        self.declared_type.is_user_input()
    }
}
