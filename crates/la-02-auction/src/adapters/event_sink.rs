//! # Event Sinks

use crate::events::AuctionEvent;
use crate::ports::outbound::EventSink;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// Records published events. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<RwLock<Vec<AuctionEvent>>>,
}

impl EventLog {
    /// Empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything published so far.
    #[must_use]
    pub fn events(&self) -> Vec<AuctionEvent> {
        self.events.read().clone()
    }

    /// Names of the published events, in order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.events.read().iter().map(AuctionEvent::name).collect()
    }

    /// Number of published events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Whether nothing was published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for EventLog {
    fn publish(&mut self, event: AuctionEvent) {
        self.events.write().push(event);
    }
}

/// Emits every event as a structured `tracing` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn publish(&mut self, event: AuctionEvent) {
        match &event {
            AuctionEvent::HighestBidIncreased { bidder, amount } => {
                info!(event = event.name(), %bidder, %amount, "[la-02] event");
            }
            AuctionEvent::AssetCreated { owner, asset_id } => {
                info!(event = event.name(), %owner, %asset_id, "[la-02] event");
            }
            AuctionEvent::OwnershipTransferred { from, to, asset_id } => {
                info!(event = event.name(), %from, %to, %asset_id, "[la-02] event");
            }
            AuctionEvent::AuctionEnded { winner, amount } => {
                info!(event = event.name(), %winner, %amount, "[la-02] event");
            }
            AuctionEvent::FundsWithdrawn {
                participant,
                amount,
            } => {
                info!(event = event.name(), %participant, %amount, "[la-02] event");
            }
        }
    }
}
