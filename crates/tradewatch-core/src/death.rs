//! Death attribution for trading agents.
//!
//! The killer is taken from the agent's last recorded damage cause. A
//! projectile is resolved to whoever fired it, exactly one level deep:
//! a projectile fired by a dispenser (no entity shooter) stays unresolved,
//! and nothing further up a causal chain is followed.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};
use tradewatch_types::{DamageCause, Entity, EntityDied, RecordId};

use crate::naming;
use crate::record::{AuditRecord, DeathRecord, KillerInfo};
use crate::sink::AuditSink;

/// Resolve the true killer from a damage cause.
///
/// Returns `None` when there is no cause, the cause has no damaging entity,
/// or a projectile has no entity shooter.
pub fn resolve_killer(cause: Option<&DamageCause>) -> Option<&Entity> {
    match cause? {
        DamageCause::Environmental { .. } => None,
        DamageCause::Entity { damager } => Some(&**damager),
        DamageCause::Projectile { shooter, .. } => shooter.as_deref(),
    }
}

/// Builds and emits death records for trading agents.
#[derive(Clone)]
pub struct DeathAttributor {
    sink: Arc<dyn AuditSink>,
}

impl DeathAttributor {
    /// Create an attributor writing to `sink`.
    pub const fn new(sink: Arc<dyn AuditSink>) -> Self {
        Self { sink }
    }

    /// Build the record for a death without emitting it.
    ///
    /// Returns `None` if the deceased is not a trading agent.
    pub fn attribute(&self, event: &EntityDied) -> Option<DeathRecord> {
        let agent = &event.entity;
        if !agent.is_trading_agent() {
            return None;
        }

        let killer = resolve_killer(event.last_damage_cause.as_ref());
        Some(DeathRecord {
            record_id: RecordId::new(),
            recorded_at: Utc::now(),
            agent_id: agent.id,
            agent_name: naming::display_name(agent).to_owned(),
            agent_type: agent.entity_type.clone(),
            world: agent.location.world_label().to_owned(),
            coordinates: agent.location.coordinates(),
            killer: KillerInfo::describe(killer),
        })
    }

    /// Handle a death: attribute it and, for trading agents, emit it.
    pub fn on_entity_died(&self, event: &EntityDied) -> Option<DeathRecord> {
        let Some(record) = self.attribute(event) else {
            debug!(entity = %event.entity.id, "Death of non-trading entity ignored");
            return None;
        };

        if let Err(e) = self.sink.emit(&AuditRecord::Death(record.clone())) {
            warn!(error = %e, record_id = %record.record_id, "Failed to emit death record");
        }
        Some(record)
    }
}

impl core::fmt::Debug for DeathAttributor {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeathAttributor").finish_non_exhaustive()
    }
}
