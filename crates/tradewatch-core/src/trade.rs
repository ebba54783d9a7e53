//! Trade correlation: turning a result-slot click into a [`TradeRecord`].
//!
//! A click in the merchant UI says what was paid and what was received,
//! but not who the merchant was. The acting player's session, opened by
//! [`InteractionTracker`](crate::tracker::InteractionTracker), fills that
//! gap. With no session the record is still emitted, attributed to an
//! unknown agent at the player's own position.
//!
//! Every qualifying click is an independent trade; a player who completes
//! several trades in one UI session produces several records.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, warn};
use tradewatch_types::{InventorySlotClicked, ItemStack, RecordId, SlotRole};

use crate::record::{AgentDescriptor, AuditRecord, TradeRecord};
use crate::session::SessionStore;
use crate::sink::AuditSink;

/// Rendering of an empty payment or result.
pub const NOTHING: &str = "nothing";

/// Why a slot click did not produce a trade record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickFilter {
    /// Another handler already cancelled the click.
    Cancelled,
    /// The clicker is not a player.
    NotPlayer,
    /// The top inventory is not a merchant UI.
    NotMerchant,
    /// The clicked slot is not the trade result slot.
    NotResultSlot,
    /// The result slot is empty or holds air.
    EmptyResult,
}

/// Render one stack as `<amount>x <label>`, or [`NOTHING`].
pub fn format_item(stack: Option<&ItemStack>) -> String {
    match stack {
        Some(stack) if stack.is_present() => format!("{}x {}", stack.amount, stack.label()),
        _ => NOTHING.to_owned(),
    }
}

/// Render the two merchant offer slots, in slot order.
///
/// Empty, air, and non-positive stacks are skipped; if nothing remains
/// the payment is [`NOTHING`].
pub fn format_payment(first: Option<&ItemStack>, second: Option<&ItemStack>) -> String {
    let parts: Vec<String> = [first, second]
        .into_iter()
        .flatten()
        .filter(|stack| stack.is_present())
        .map(|stack| format_item(Some(stack)))
        .collect();

    if parts.is_empty() {
        NOTHING.to_owned()
    } else {
        parts.join(", ")
    }
}

/// Apply the click filters in order, returning the result stack on success.
fn qualifying_result(click: &InventorySlotClicked) -> Result<&ItemStack, ClickFilter> {
    if click.cancelled {
        return Err(ClickFilter::Cancelled);
    }
    if !click.clicker.is_player() {
        return Err(ClickFilter::NotPlayer);
    }
    if !click.top_inventory.is_merchant() {
        return Err(ClickFilter::NotMerchant);
    }
    if click.slot_role != SlotRole::Result {
        return Err(ClickFilter::NotResultSlot);
    }
    match click.result_item.as_ref() {
        Some(result) if !result.material.is_air() => Ok(result),
        _ => Err(ClickFilter::EmptyResult),
    }
}

/// Builds and emits trade records from merchant result-slot clicks.
#[derive(Clone)]
pub struct TradeCorrelator {
    sessions: Arc<SessionStore>,
    sink: Arc<dyn AuditSink>,
}

impl TradeCorrelator {
    /// Create a correlator reading `sessions` and writing to `sink`.
    pub const fn new(sessions: Arc<SessionStore>, sink: Arc<dyn AuditSink>) -> Self {
        Self { sessions, sink }
    }

    /// Build the record for a click without emitting it.
    pub fn correlate(&self, click: &InventorySlotClicked) -> Result<TradeRecord, ClickFilter> {
        let result = qualifying_result(click)?;
        let actor = &click.clicker;

        let (agent, location) = match self.sessions.get(actor.id) {
            Some(session) => (
                AgentDescriptor::Known {
                    id: session.agent_id,
                    name: session.display_name,
                    agent_type: session.agent_type,
                },
                session.location,
            ),
            None => (AgentDescriptor::Unknown, actor.location.clone()),
        };

        Ok(TradeRecord {
            record_id: RecordId::new(),
            recorded_at: Utc::now(),
            actor_id: actor.id,
            actor_name: actor.player_name().unwrap_or_default().to_owned(),
            agent,
            world: location.world_label().to_owned(),
            coordinates: location.coordinates(),
            paid: format_payment(click.offer_slot_0.as_ref(), click.offer_slot_1.as_ref()),
            received: format_item(Some(result)),
        })
    }

    /// Handle a slot click: correlate it and, if it qualifies, emit it.
    ///
    /// Returns the emitted record. A sink failure is logged and the record
    /// is still returned.
    pub fn on_slot_clicked(&self, click: &InventorySlotClicked) -> Option<TradeRecord> {
        let record = match self.correlate(click) {
            Ok(record) => record,
            Err(filter) => {
                debug!(clicker = %click.clicker.id, ?filter, "Slot click ignored");
                return None;
            }
        };

        if let Err(e) = self.sink.emit(&AuditRecord::Trade(record.clone())) {
            warn!(error = %e, record_id = %record.record_id, "Failed to emit trade record");
        }
        Some(record)
    }
}

impl core::fmt::Debug for TradeCorrelator {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TradeCorrelator")
            .field("sessions", &self.sessions)
            .finish_non_exhaustive()
    }
}
