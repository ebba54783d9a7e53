//! Actor-to-agent session correlation.
//!
//! A trade click carries no reference to the agent being traded with; the
//! only place that information exists is the interaction event that opened
//! the trade UI. [`SessionStore`] keeps the most recent [`SessionContext`]
//! per actor so the later click can be attributed.
//!
//! # Concurrency
//!
//! The host dispatches events for different actors on arbitrary threads.
//! The map is sharded, so operations on different actors do not contend
//! on a shared lock. Every operation replaces or removes a whole entry,
//! so per-key operations are linearizable and a reader can never see a
//! half-written context. No operation spans two keys.

use dashmap::DashMap;
use tradewatch_types::{Entity, EntityId, EntityType, Location};

use crate::naming;

/// The most recent trading-agent interaction for one actor.
///
/// Captured as a snapshot at interaction time. The agent may move or die
/// afterwards; the context keeps describing it as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    /// Identifier of the trading agent.
    pub agent_id: EntityId,
    /// Resolved display name (see [`naming::display_name`]).
    pub display_name: String,
    /// Raw type identifier of the agent.
    pub agent_type: EntityType,
    /// Where the agent stood when the interaction began.
    pub location: Location,
}

impl SessionContext {
    /// Snapshot a trading agent into a new context.
    pub fn capture(agent: &Entity) -> Self {
        Self {
            agent_id: agent.id,
            display_name: naming::display_name(agent).to_owned(),
            agent_type: agent.entity_type.clone(),
            location: agent.location.clone(),
        }
    }
}

/// Concurrent map from actor identity to that actor's current session.
///
/// A missing entry is a valid state meaning "no known active session".
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<EntityId, SessionContext>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `context` as the actor's session, replacing any previous one.
    ///
    /// Returns the replaced context, if there was one.
    pub fn open(&self, actor: EntityId, context: SessionContext) -> Option<SessionContext> {
        self.sessions.insert(actor, context)
    }

    /// Look up the actor's current session.
    pub fn get(&self, actor: EntityId) -> Option<SessionContext> {
        self.sessions.get(&actor).map(|entry| entry.value().clone())
    }

    /// Remove the actor's session. Removing an absent session is a no-op.
    pub fn close(&self, actor: EntityId) -> Option<SessionContext> {
        self.sessions.remove(&actor).map(|(_, context)| context)
    }

    /// Number of actors with an open session.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no actor has an open session.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop every session, returning how many were discarded.
    pub fn clear(&self) -> usize {
        let mut discarded: usize = 0;
        self.sessions.retain(|_, _| {
            discarded = discarded.saturating_add(1);
            false
        });
        discarded
    }
}
