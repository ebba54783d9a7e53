//! Events consumed from the host event source.
//!
//! Each struct carries only the fields the audit core needs. [`WorldEvent`]
//! is the wire envelope: one JSON object per event, discriminated by an
//! `event` tag, e.g.
//!
//! ```text
//! {"event":"actor_disconnected","actor_id":"0192..."}
//! ```

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::enums::{Hand, InventoryKind, SlotRole};
use crate::ids::EntityId;
use crate::item::ItemStack;

/// An actor began interacting with (right-clicked) an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionBegin {
    /// The interacting actor.
    pub actor_id: EntityId,
    /// The entity that was interacted with.
    pub target: Entity,
    /// The hand used for the interaction.
    pub hand: Hand,
}

/// An inventory view was closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeUiClosed {
    /// The entity that was viewing the inventory.
    pub viewer: Entity,
    /// Kind of the inventory that was closed.
    pub inventory: InventoryKind,
}

/// An actor left the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorDisconnected {
    /// The departing actor.
    pub actor_id: EntityId,
}

/// A slot was clicked in an open inventory view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySlotClicked {
    /// The entity that clicked.
    pub clicker: Entity,
    /// Whether an earlier handler already cancelled the click.
    #[serde(default)]
    pub cancelled: bool,
    /// Kind of the top inventory of the view.
    pub top_inventory: InventoryKind,
    /// Role of the clicked slot.
    pub slot_role: SlotRole,
    /// The item in the clicked slot.
    #[serde(default)]
    pub result_item: Option<ItemStack>,
    /// Merchant offer slot 0 (first payment).
    #[serde(default)]
    pub offer_slot_0: Option<ItemStack>,
    /// Merchant offer slot 1 (second payment).
    #[serde(default)]
    pub offer_slot_1: Option<ItemStack>,
}

/// The recorded event that last damaged an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum DamageCause {
    /// Damage with no damaging entity (fall, fire, drowning, ...).
    Environmental {
        /// Host damage-cause identifier, e.g. `FALL`.
        cause: String,
    },
    /// Damage dealt directly by an entity.
    Entity {
        /// The damaging entity.
        damager: Box<Entity>,
    },
    /// Damage dealt by a projectile.
    Projectile {
        /// The projectile itself.
        projectile: Box<Entity>,
        /// Whoever fired it; `None` for dispensers and other non-entity sources.
        #[serde(default)]
        shooter: Option<Box<Entity>>,
    },
}

/// An entity died.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityDied {
    /// The entity, as it was at the moment of death.
    pub entity: Entity,
    /// The last recorded damage cause, if any.
    #[serde(default)]
    pub last_damage_cause: Option<DamageCause>,
}

/// Envelope for every event the host can push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WorldEvent {
    /// See [`InteractionBegin`].
    InteractionBegin(Box<InteractionBegin>),
    /// See [`TradeUiClosed`].
    TradeUiClosed(Box<TradeUiClosed>),
    /// See [`ActorDisconnected`].
    ActorDisconnected(ActorDisconnected),
    /// See [`InventorySlotClicked`].
    InventorySlotClicked(Box<InventorySlotClicked>),
    /// See [`EntityDied`].
    EntityDied(Box<EntityDied>),
}

impl WorldEvent {
    /// Short name of the event kind, for logging.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InteractionBegin(_) => "interaction_begin",
            Self::TradeUiClosed(_) => "trade_ui_closed",
            Self::ActorDisconnected(_) => "actor_disconnected",
            Self::InventorySlotClicked(_) => "inventory_slot_clicked",
            Self::EntityDied(_) => "entity_died",
        }
    }
}
