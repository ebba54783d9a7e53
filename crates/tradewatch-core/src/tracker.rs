//! Opens and closes sessions from interaction lifecycle events.

use std::sync::Arc;

use tracing::debug;
use tradewatch_types::{ActorDisconnected, EntityId, InteractionBegin, TradeUiClosed};

use crate::session::{SessionContext, SessionStore};

/// What an interaction event did to the session store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// A session was opened for the actor.
    Opened {
        /// The agent of the session that was overwritten, if any.
        replaced: Option<EntityId>,
    },
    /// The off-hand echo of an interaction; ignored.
    SecondaryHand,
    /// The target cannot trade; ignored.
    NotTradingAgent,
}

/// Populates and evicts [`SessionStore`] entries.
#[derive(Debug, Clone)]
pub struct InteractionTracker {
    sessions: Arc<SessionStore>,
}

impl InteractionTracker {
    /// Create a tracker writing into `sessions`.
    pub const fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    /// Open a session when an actor right-clicks a trading agent.
    ///
    /// Unconditionally replaces the actor's previous session. Off-hand
    /// interactions and non-trading targets leave the store untouched.
    pub fn on_interaction_begin(&self, event: &InteractionBegin) -> InteractionOutcome {
        if !event.hand.is_primary() {
            return InteractionOutcome::SecondaryHand;
        }
        if !event.target.is_trading_agent() {
            return InteractionOutcome::NotTradingAgent;
        }

        let context = SessionContext::capture(&event.target);
        let replaced = self
            .sessions
            .open(event.actor_id, context)
            .map(|previous| previous.agent_id);

        debug!(
            actor = %event.actor_id,
            agent = %event.target.id,
            replaced = ?replaced,
            "Trade session opened"
        );
        InteractionOutcome::Opened { replaced }
    }

    /// Close the viewer's session when a merchant UI closes.
    ///
    /// Returns the removed session, if any. Non-merchant inventories and
    /// non-player viewers are ignored.
    pub fn on_trade_ui_closed(&self, event: &TradeUiClosed) -> Option<SessionContext> {
        if !event.inventory.is_merchant() || !event.viewer.is_player() {
            return None;
        }
        self.end(event.viewer.id, "trade_ui_closed")
    }

    /// Close the actor's session when they disconnect.
    pub fn on_actor_disconnected(&self, event: &ActorDisconnected) -> Option<SessionContext> {
        self.end(event.actor_id, "disconnected")
    }

    fn end(&self, actor: EntityId, reason: &'static str) -> Option<SessionContext> {
        let removed = self.sessions.close(actor);
        if removed.is_some() {
            debug!(actor = %actor, reason, "Trade session closed");
        }
        removed
    }
}
