//! Audit records and their text layout.
//!
//! Records are derived, never stored: a handler builds one, hands it to the
//! [`AuditSink`](crate::sink::AuditSink), and drops it. The [`Display`]
//! impls define the human-readable line; the `Serialize` impls back the
//! JSON-lines sink format.
//!
//! [`Display`]: core::fmt::Display

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap as _;
use serde::{Serialize, Serializer};
use tradewatch_types::{Entity, EntityId, EntityType, RecordId};

use crate::naming::{self, UNKNOWN};

/// Literal shown when a trade cannot be correlated to an agent.
pub const UNKNOWN_AGENT: &str = "unknown agent";

// ---------------------------------------------------------------------------
// Trade
// ---------------------------------------------------------------------------

/// The trading agent a trade is attributed to.
///
/// Serializes as a map tagged by `resolution` (`known` or `unknown`) that
/// always carries the rendered `description`, so JSON lines read
/// `unknown agent` exactly like text lines do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentDescriptor {
    /// Resolved from the actor's session.
    Known {
        /// Agent identifier.
        id: EntityId,
        /// Agent display name.
        name: String,
        /// Agent raw type.
        agent_type: EntityType,
    },
    /// The actor had no session at trade time.
    Unknown,
}

impl core::fmt::Display for AgentDescriptor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Known {
                id,
                name,
                agent_type,
            } => write!(f, "Villager '{name}' (type={agent_type}, uuid={id})"),
            Self::Unknown => f.write_str(UNKNOWN_AGENT),
        }
    }
}

impl Serialize for AgentDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Self::Known {
                id,
                name,
                agent_type,
            } => {
                map.serialize_entry("resolution", "known")?;
                map.serialize_entry("id", id)?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("agent_type", agent_type)?;
            }
            Self::Unknown => map.serialize_entry("resolution", "unknown")?,
        }
        map.serialize_entry("description", &self.to_string())?;
        map.end()
    }
}

/// One completed trade between an actor and a trading agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TradeRecord {
    /// Identifier of this record.
    pub record_id: RecordId,
    /// When the record was built.
    pub recorded_at: DateTime<Utc>,
    /// The trading actor.
    pub actor_id: EntityId,
    /// The actor's player name.
    pub actor_name: String,
    /// The agent traded with.
    pub agent: AgentDescriptor,
    /// World label (agent's snapshot, or the actor's when unknown).
    pub world: String,
    /// Formatted coordinates matching `world`.
    pub coordinates: String,
    /// What the actor paid, e.g. `2x STICK, 1x EMERALD`.
    pub paid: String,
    /// What the actor received, e.g. `1x EMERALD`.
    pub received: String,
}

impl core::fmt::Display for TradeRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[VillagerTrade] Player '{}' traded with {} at {} ({}) - PAID [{}] - RECEIVED [{}]",
            self.actor_name, self.agent, self.world, self.coordinates, self.paid, self.received
        )
    }
}

// ---------------------------------------------------------------------------
// Death
// ---------------------------------------------------------------------------

/// Who killed a trading agent, as far as it could be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KillerInfo {
    /// Raw type of the killer, if resolved.
    #[serde(serialize_with = "type_or_unknown")]
    pub entity_type: Option<EntityType>,
    /// Killer name (see [`naming::killer_name`]).
    pub name: String,
    /// Identifier of the killer, if resolved.
    #[serde(serialize_with = "id_or_unknown")]
    pub id: Option<EntityId>,
}

// `serialize_with` fixes these signatures.
#[allow(clippy::ref_option)]
fn type_or_unknown<S: Serializer>(
    entity_type: &Option<EntityType>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(entity_type.as_ref().map_or(UNKNOWN, EntityType::as_str))
}

#[allow(clippy::ref_option)]
fn id_or_unknown<S: Serializer>(id: &Option<EntityId>, serializer: S) -> Result<S::Ok, S::Error> {
    match id {
        Some(id) => id.serialize(serializer),
        None => serializer.serialize_str(UNKNOWN),
    }
}

impl KillerInfo {
    /// Describe a resolved or unresolved killer.
    pub fn describe(killer: Option<&Entity>) -> Self {
        Self {
            entity_type: killer.map(|k| k.entity_type.clone()),
            name: naming::killer_name(killer).to_owned(),
            id: killer.map(|k| k.id),
        }
    }

    /// Killer type, or `UNKNOWN`.
    pub fn type_label(&self) -> &str {
        self.entity_type.as_ref().map_or(UNKNOWN, EntityType::as_str)
    }

    /// Killer identifier, or `UNKNOWN`.
    pub fn id_label(&self) -> String {
        self.id.map_or_else(|| UNKNOWN.to_owned(), |id| id.to_string())
    }
}

/// The death of a trading agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeathRecord {
    /// Identifier of this record.
    pub record_id: RecordId,
    /// When the record was built.
    pub recorded_at: DateTime<Utc>,
    /// The agent that died.
    pub agent_id: EntityId,
    /// Agent display name.
    pub agent_name: String,
    /// Agent raw type.
    pub agent_type: EntityType,
    /// World label where the agent died.
    pub world: String,
    /// Formatted coordinates of the death.
    pub coordinates: String,
    /// The resolved killer.
    pub killer: KillerInfo,
}

impl core::fmt::Display for DeathRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "[VillagerDeath] Villager '{}' (type={}, uuid={}) died at {} ({}). \
             Killer: type={}, name={}, uuid={}",
            self.agent_name,
            self.agent_type,
            self.agent_id,
            self.world,
            self.coordinates,
            self.killer.type_label(),
            self.killer.name,
            self.killer.id_label()
        )
    }
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Any record handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "record", rename_all = "snake_case")]
pub enum AuditRecord {
    /// A completed trade.
    Trade(TradeRecord),
    /// A trading agent's death.
    Death(DeathRecord),
}

impl AuditRecord {
    /// Identifier of the wrapped record.
    pub const fn record_id(&self) -> RecordId {
        match self {
            Self::Trade(trade) => trade.record_id,
            Self::Death(death) => death.record_id,
        }
    }

    /// Short name of the record kind, for logging.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Trade(_) => "trade",
            Self::Death(_) => "death",
        }
    }
}

impl core::fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Trade(trade) => trade.fmt(f),
            Self::Death(death) => death.fmt(f),
        }
    }
}

impl From<TradeRecord> for AuditRecord {
    fn from(record: TradeRecord) -> Self {
        Self::Trade(record)
    }
}

impl From<DeathRecord> for AuditRecord {
    fn from(record: DeathRecord) -> Self {
        Self::Death(record)
    }
}
