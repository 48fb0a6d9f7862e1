//! # In-Memory Funds Transfer
//!
//! Records every payout leaving escrow custody.

use crate::errors::TransferError;
use crate::ports::outbound::FundsTransfer;
use parking_lot::RwLock;
use shared_types::{Address, U256};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default)]
struct Payouts {
    received: HashMap<Address, U256>,
    history: Vec<(Address, U256)>,
    rejected: Vec<Address>,
}

/// In-memory payout recorder. Clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFunds {
    inner: Arc<RwLock<Payouts>>,
}

impl InMemoryFunds {
    /// No payouts yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total paid to `recipient`.
    #[must_use]
    pub fn received(&self, recipient: &Address) -> U256 {
        self.inner
            .read()
            .received
            .get(recipient)
            .copied()
            .unwrap_or_default()
    }

    /// Every payout in order.
    #[must_use]
    pub fn history(&self) -> Vec<(Address, U256)> {
        self.inner.read().history.clone()
    }

    /// Refuse every payout to `recipient` until [`accept`](Self::accept).
    pub fn reject(&self, recipient: Address) {
        self.inner.write().rejected.push(recipient);
    }

    /// Accept payouts to `recipient` again.
    pub fn accept(&self, recipient: &Address) {
        self.inner.write().rejected.retain(|r| r != recipient);
    }
}

impl FundsTransfer for InMemoryFunds {
    fn send(&mut self, recipient: Address, amount: U256) -> Result<(), TransferError> {
        let mut payouts = self.inner.write();
        if payouts.rejected.contains(&recipient) {
            return Err(TransferError::Rejected {
                recipient,
                reason: "recipient refused payment".to_string(),
            });
        }

        let total = payouts.received.entry(recipient).or_default();
        *total = total.saturating_add(amount);
        payouts.history.push((recipient, amount));
        debug!(%recipient, %amount, "[la-02] funds sent");
        Ok(())
    }
}
