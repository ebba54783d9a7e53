//! The audit service: one session store and the three handlers around it.
//!
//! [`AuditService`] owns the only mutable shared state, scoped to its own
//! lifetime: [`start`](AuditService::start) creates an empty store and
//! [`shutdown`](AuditService::shutdown) discards it. The service is
//! `Send + Sync`; the host may call [`handle`](AuditService::handle) from
//! any number of dispatch threads.

use std::sync::Arc;

use tracing::info;
use tradewatch_types::WorldEvent;

use crate::death::DeathAttributor;
use crate::record::AuditRecord;
use crate::session::SessionStore;
use crate::sink::AuditSink;
use crate::trade::TradeCorrelator;
use crate::tracker::InteractionTracker;

/// Routes host events to the tracker, correlator, and attributor.
#[derive(Debug)]
pub struct AuditService {
    sessions: Arc<SessionStore>,
    tracker: InteractionTracker,
    trades: TradeCorrelator,
    deaths: DeathAttributor,
}

impl AuditService {
    /// Start a service with a fresh session store, writing to `sink`.
    pub fn start(sink: Arc<dyn AuditSink>) -> Self {
        let sessions = Arc::new(SessionStore::new());
        let service = Self {
            tracker: InteractionTracker::new(Arc::clone(&sessions)),
            trades: TradeCorrelator::new(Arc::clone(&sessions), Arc::clone(&sink)),
            deaths: DeathAttributor::new(sink),
            sessions,
        };
        info!("tradewatch enabled");
        service
    }

    /// Handle one event. Returns the record it produced, if any.
    pub fn handle(&self, event: &WorldEvent) -> Option<AuditRecord> {
        match event {
            WorldEvent::InteractionBegin(begin) => {
                self.tracker.on_interaction_begin(begin);
                None
            }
            WorldEvent::TradeUiClosed(closed) => {
                self.tracker.on_trade_ui_closed(closed);
                None
            }
            WorldEvent::ActorDisconnected(quit) => {
                self.tracker.on_actor_disconnected(quit);
                None
            }
            WorldEvent::InventorySlotClicked(click) => {
                self.trades.on_slot_clicked(click).map(AuditRecord::Trade)
            }
            WorldEvent::EntityDied(death) => {
                self.deaths.on_entity_died(death).map(AuditRecord::Death)
            }
        }
    }

    /// The session store backing this service.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Stop the service, discarding every open session.
    ///
    /// Returns the number of sessions that were still open.
    pub fn shutdown(self) -> usize {
        let discarded = self.sessions.clear();
        info!(sessions_discarded = discarded, "tradewatch disabled");
        discarded
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use tradewatch_types::{
        ActorDisconnected, Entity, EntityClass, EntityDied, EntityId, EntityType, Hand,
        InteractionBegin, InventoryKind, InventorySlotClicked, ItemStack, Location, SlotRole,
    };

    use super::*;
    use crate::record::AgentDescriptor;
    use crate::sink::MemorySink;

    fn player(id: EntityId) -> Entity {
        Entity {
            id,
            entity_type: EntityType::new("PLAYER"),
            custom_name: None,
            location: Location::new("world", 0.0, 64.0, 0.0),
            class: EntityClass::Player {
                name: String::from("Alex"),
            },
        }
    }

    fn shepherd() -> Entity {
        Entity {
            id: EntityId::new(),
            entity_type: EntityType::new("VILLAGER"),
            custom_name: Some(String::from("Woolly")),
            location: Location::new("world", 3.0, 64.0, 3.0),
            class: EntityClass::Villager {
                profession: String::from("shepherd"),
            },
        }
    }

    fn click(actor: EntityId) -> WorldEvent {
        WorldEvent::InventorySlotClicked(Box::new(InventorySlotClicked {
            clicker: player(actor),
            cancelled: false,
            top_inventory: InventoryKind::Merchant,
            slot_role: SlotRole::Result,
            result_item: Some(ItemStack::new("WHITE_WOOL", 1)),
            offer_slot_0: Some(ItemStack::new("EMERALD", 1)),
            offer_slot_1: None,
        }))
    }

    fn service() -> (Arc<MemorySink>, AuditService) {
        let sink = Arc::new(MemorySink::new());
        let service = AuditService::start(Arc::clone(&sink) as Arc<dyn AuditSink>);
        (sink, service)
    }

    #[test]
    fn interaction_then_click_produces_correlated_trade() {
        let (sink, service) = service();
        let actor = EntityId::new();
        let agent = shepherd();

        let begin = WorldEvent::InteractionBegin(Box::new(InteractionBegin {
            actor_id: actor,
            target: agent.clone(),
            hand: Hand::Hand,
        }));
        assert!(service.handle(&begin).is_none());

        let record = service.handle(&click(actor));
        let Some(AuditRecord::Trade(trade)) = record else {
            panic!("expected a trade record");
        };
        assert_eq!(
            trade.agent,
            AgentDescriptor::Known {
                id: agent.id,
                name: String::from("Woolly"),
                agent_type: EntityType::new("VILLAGER"),
            }
        );
        assert_eq!(trade.paid, "1x EMERALD");
        assert_eq!(trade.received, "1x WHITE_WOOL");
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn disconnect_then_click_is_unknown_agent() {
        let (_sink, service) = service();
        let actor = EntityId::new();
        service.handle(&WorldEvent::InteractionBegin(Box::new(InteractionBegin {
            actor_id: actor,
            target: shepherd(),
            hand: Hand::Hand,
        })));
        service.handle(&WorldEvent::ActorDisconnected(ActorDisconnected {
            actor_id: actor,
        }));

        let record = service.handle(&click(actor));
        assert!(matches!(
            record,
            Some(AuditRecord::Trade(ref t)) if t.agent == AgentDescriptor::Unknown
        ));
    }

    #[test]
    fn death_routes_to_attributor() {
        let (sink, service) = service();
        let record = service.handle(&WorldEvent::EntityDied(Box::new(EntityDied {
            entity: shepherd(),
            last_damage_cause: None,
        })));
        assert!(matches!(record, Some(AuditRecord::Death(_))));
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn shutdown_discards_sessions() {
        let (_sink, service) = service();
        for _ in 0..3 {
            service.handle(&WorldEvent::InteractionBegin(Box::new(InteractionBegin {
                actor_id: EntityId::new(),
                target: shepherd(),
                hand: Hand::Hand,
            })));
        }
        assert_eq!(service.sessions().len(), 3);
        assert_eq!(service.shutdown(), 3);
    }
}
