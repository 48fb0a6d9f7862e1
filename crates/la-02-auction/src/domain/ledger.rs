//! # Escrow Ledger
//!
//! Per-participant pending balances held by the auction.
//!
//! A participant's entry accumulates across bids and is only ever reduced by
//! settlement (`debit`) or withdrawal (`drain`). Entries are never removed, so
//! "never bid" and "bid then withdrew everything" both read as zero.

use crate::errors::LedgerError;
use shared_types::{Address, U256};
use std::collections::HashMap;

/// Mapping from participant to escrowed funds, with running totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EscrowLedger {
    balances: HashMap<Address, U256>,
    total_credited: U256,
    total_debited: U256,
    total_drained: U256,
}

impl EscrowLedger {
    /// Empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the participant's balance. Returns the new balance.
    pub fn credit(&mut self, participant: Address, amount: U256) -> Result<U256, LedgerError> {
        let current = self.balance_of(&participant);
        let updated = current.checked_add(amount).ok_or(LedgerError::Overflow)?;
        let total = self
            .total_credited
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.balances.insert(participant, updated);
        self.total_credited = total;
        Ok(updated)
    }

    /// Remove `amount` from the participant's balance. Returns the new balance.
    pub fn debit(&mut self, participant: Address, amount: U256) -> Result<U256, LedgerError> {
        let available = self.balance_of(&participant);
        if amount > available {
            return Err(LedgerError::InsufficientBalance {
                participant,
                requested: amount,
                available,
            });
        }
        let total = self
            .total_debited
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        let remaining = available - amount;
        self.balances.insert(participant, remaining);
        self.total_debited = total;
        Ok(remaining)
    }

    /// Zero the participant's balance and return what it held.
    pub fn drain(&mut self, participant: Address) -> Result<U256, LedgerError> {
        let held = self.balance_of(&participant);
        let total = self
            .total_drained
            .checked_add(held)
            .ok_or(LedgerError::Overflow)?;

        if let Some(balance) = self.balances.get_mut(&participant) {
            *balance = U256::zero();
        }
        self.total_drained = total;
        Ok(held)
    }

    /// Pending balance (zero for unknown participants).
    #[must_use]
    pub fn balance_of(&self, participant: &Address) -> U256 {
        self.balances.get(participant).copied().unwrap_or_default()
    }

    /// Sum of all pending balances.
    #[must_use]
    pub fn total_escrowed(&self) -> U256 {
        self.balances
            .values()
            .fold(U256::zero(), |acc, b| acc.saturating_add(*b))
    }

    /// Everything ever credited.
    #[must_use]
    pub fn total_credited(&self) -> U256 {
        self.total_credited
    }

    /// Everything consumed by settlement.
    #[must_use]
    pub fn total_debited(&self) -> U256 {
        self.total_debited
    }

    /// Everything paid back out through withdrawals.
    #[must_use]
    pub fn total_drained(&self) -> U256 {
        self.total_drained
    }

    /// Participants that ever held an entry.
    pub fn participants(&self) -> impl Iterator<Item = &Address> {
        self.balances.keys()
    }
}
