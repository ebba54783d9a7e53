//! Human-readable names for agents and killers.

use tradewatch_types::{Entity, EntityClass};

/// Fixed label for the itinerant trading agent.
pub const WANDERING_TRADER_LABEL: &str = "WANDERING_TRADER";

/// Placeholder for any unresolved killer field.
pub const UNKNOWN: &str = "UNKNOWN";

/// Resolve an agent's display name.
///
/// Precedence: custom name, then profession for the common trading agent,
/// then [`WANDERING_TRADER_LABEL`] for the itinerant one, then the raw
/// entity type.
pub fn display_name(entity: &Entity) -> &str {
    if let Some(name) = entity.custom_name.as_deref() {
        return name;
    }
    match &entity.class {
        EntityClass::Villager { profession } => profession,
        EntityClass::WanderingTrader => WANDERING_TRADER_LABEL,
        EntityClass::Merchant | EntityClass::Player { .. } | EntityClass::Other => {
            entity.entity_type.as_str()
        }
    }
}

/// Resolve a killer's name.
///
/// Players report their player name. Everything else reports its custom
/// name, else its raw type. An unresolved killer is [`UNKNOWN`].
pub fn killer_name(killer: Option<&Entity>) -> &str {
    let Some(killer) = killer else {
        return UNKNOWN;
    };
    match &killer.class {
        EntityClass::Player { name } => name,
        _ => killer
            .custom_name
            .as_deref()
            .unwrap_or(killer.entity_type.as_str()),
    }
}
