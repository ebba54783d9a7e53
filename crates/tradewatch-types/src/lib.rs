//! Shared type definitions for Tradewatch.
//!
//! This crate is the single source of truth for the data the host event
//! source hands to the audit core. Every type is a plain snapshot with
//! `serde` derives, so event streams can be recorded and replayed as JSON.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for entity and record identifiers
//! - [`enums`] -- Interaction hand, inventory kind, and slot role
//! - [`entity`] -- Entity snapshots, entity classes, and locations
//! - [`item`] -- Item stacks and materials
//! - [`events`] -- The consumed events and the [`WorldEvent`] envelope

pub mod entity;
pub mod enums;
pub mod events;
pub mod ids;
pub mod item;

// Re-export all public types at crate root for convenience.
pub use entity::{Entity, EntityClass, EntityType, Location, UNKNOWN_WORLD};
pub use enums::{Hand, InventoryKind, SlotRole};
pub use events::{
    ActorDisconnected, DamageCause, EntityDied, InteractionBegin, InventorySlotClicked,
    TradeUiClosed, WorldEvent,
};
pub use ids::{EntityId, RecordId};
pub use item::{ItemStack, Material};
