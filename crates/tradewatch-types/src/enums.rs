//! Enumeration types reported by the host event source.
//!
//! Variant names serialize in the host's `SCREAMING_SNAKE_CASE` spelling
//! so replayed event streams can use the host identifiers verbatim.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Interaction hand
// ---------------------------------------------------------------------------

/// The hand an actor used for an entity interaction.
///
/// A single right-click is reported once per hand by the host, so only
/// [`Hand::Hand`] interactions are meaningful for session tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Hand {
    /// The main (primary) hand.
    Hand,
    /// The off hand (secondary modifier).
    OffHand,
}

impl Hand {
    /// Whether this is the primary hand.
    pub const fn is_primary(self) -> bool {
        matches!(self, Self::Hand)
    }
}

// ---------------------------------------------------------------------------
// Inventory kinds
// ---------------------------------------------------------------------------

/// The kind of an open inventory view.
///
/// Only [`InventoryKind::Merchant`] matters here; every other kind is
/// collapsed into [`InventoryKind::Other`] on ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InventoryKind {
    /// A trading-agent merchant interface.
    Merchant,
    /// A player's own inventory.
    Player,
    /// A chest or other storage container.
    Chest,
    /// A crafting table or crafting grid.
    Crafting,
    /// Any other inventory type.
    #[serde(other)]
    Other,
}

impl InventoryKind {
    /// Whether this inventory is the trading interface.
    pub const fn is_merchant(self) -> bool {
        matches!(self, Self::Merchant)
    }
}

// ---------------------------------------------------------------------------
// Slot roles
// ---------------------------------------------------------------------------

/// The role of the slot that was clicked inside an inventory view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotRole {
    /// The output slot of a trade or craft.
    Result,
    /// An input slot of a crafting or trading grid.
    Crafting,
    /// A regular container slot.
    Container,
    /// A hotbar slot.
    Quickbar,
    /// An armor slot.
    Armor,
    /// A click outside the inventory window.
    Outside,
    /// Any other slot type.
    #[serde(other)]
    Other,
}
