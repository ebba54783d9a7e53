//! World entities and their positions.
//!
//! An [`Entity`] is a point-in-time snapshot of a host entity: the host
//! builds one per event, and nothing here holds a live reference back into
//! the world. Sessions may therefore keep an [`Entity`]'s [`Location`]
//! after the entity has moved or died.

use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

/// World label used when an entity's world cannot be resolved.
pub const UNKNOWN_WORLD: &str = "unknown_world";

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// A world identifier plus a three-axis coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Name of the world, if the host could resolve it.
    #[serde(default)]
    pub world: Option<String>,
    /// East/west coordinate.
    pub x: f64,
    /// Height coordinate.
    pub y: f64,
    /// North/south coordinate.
    pub z: f64,
}

impl Location {
    /// Create a location in a named world.
    pub fn new(world: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            world: Some(world.into()),
            x,
            y,
            z,
        }
    }

    /// Create a location whose world is unknown.
    pub const fn detached(x: f64, y: f64, z: f64) -> Self {
        Self {
            world: None,
            x,
            y,
            z,
        }
    }

    /// The world name, or [`UNKNOWN_WORLD`] if unresolved.
    pub fn world_label(&self) -> &str {
        self.world.as_deref().unwrap_or(UNKNOWN_WORLD)
    }

    /// Render the coordinates with one decimal place, e.g. `x=1.0 y=64.0 z=-3.5`.
    pub fn coordinates(&self) -> String {
        format!("x={:.1} y={:.1} z={:.1}", self.x, self.y, self.z)
    }
}

// ---------------------------------------------------------------------------
// Entity type identifier
// ---------------------------------------------------------------------------

/// Raw entity-type identifier as reported by the host (e.g. `VILLAGER`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityType(String);

impl EntityType {
    /// Wrap a host entity-type identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for EntityType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// Category of an entity, as far as auditing cares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityClass {
    /// The common trading agent, with its profession identifier
    /// (e.g. `farmer`, `librarian`, `none`).
    Villager {
        /// Profession key without namespace.
        profession: String,
    },
    /// The itinerant trading agent.
    WanderingTrader,
    /// Any other trading-agent subtype the host may add.
    Merchant,
    /// A player-controlled actor.
    Player {
        /// The player's account name.
        name: String,
    },
    /// Everything else: mobs, projectiles, golems, etc.
    Other,
}

/// Snapshot of a host entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable unique identifier.
    pub id: EntityId,
    /// Raw type identifier.
    pub entity_type: EntityType,
    /// Explicitly assigned custom name, if any.
    #[serde(default)]
    pub custom_name: Option<String>,
    /// Position at the time of the snapshot.
    pub location: Location,
    /// Category of the entity.
    pub class: EntityClass,
}

impl Entity {
    /// Whether this entity is a player-controlled actor.
    pub const fn is_player(&self) -> bool {
        matches!(self.class, EntityClass::Player { .. })
    }

    /// Whether this entity can conduct trades.
    pub const fn is_trading_agent(&self) -> bool {
        matches!(
            self.class,
            EntityClass::Villager { .. } | EntityClass::WanderingTrader | EntityClass::Merchant
        )
    }

    /// The player name, if this entity is a player.
    pub fn player_name(&self) -> Option<&str> {
        match &self.class {
            EntityClass::Player { name } => Some(name),
            _ => None,
        }
    }
}
