//! # Domain Invariants
//!
//! Properties that must hold between any two auction operations.
//!
//! - Escrow conservation: pending balances equal credits minus settlement
//!   minus withdrawals.
//! - Highest bid consistency: a highest bid exists iff a highest bidder and a
//!   winning voucher exist.
//! - Settled winner: once ended, the winner's escrow no longer contains the
//!   winning bid.
//! - Settlement progress: external steps happen in order and only for an
//!   auction with a winner.

use crate::domain::entities::AuctionState;
use crate::domain::ledger::EscrowLedger;
use shared_types::U256;

/// An invariant that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// `Σ balances != credited - debited - drained`.
    EscrowNotConserved {
        /// Sum of pending balances.
        escrowed: U256,
        /// Credits minus settlement minus withdrawals.
        expected: U256,
    },
    /// Highest bid, bidder and voucher disagree.
    InconsistentHighestBid,
    /// Settlement total does not match the winning bid.
    SettlementMismatch {
        /// Total consumed by settlement.
        debited: U256,
        /// Winning bid.
        highest_bid: U256,
    },
    /// Settlement steps recorded out of order or without a winner.
    InconsistentSettlementProgress,
}

/// Escrow conservation.
pub fn check_escrow_conservation(ledger: &EscrowLedger) -> Result<(), InvariantViolation> {
    let expected = ledger
        .total_credited()
        .saturating_sub(ledger.total_debited())
        .saturating_sub(ledger.total_drained());
    let escrowed = ledger.total_escrowed();

    if escrowed == expected {
        Ok(())
    } else {
        Err(InvariantViolation::EscrowNotConserved { escrowed, expected })
    }
}

/// Highest bid consistency.
pub fn check_highest_bid_consistency(state: &AuctionState) -> Result<(), InvariantViolation> {
    let has_bid = !state.highest_bid.is_zero();
    if has_bid == state.highest_bidder.is_some() && has_bid == state.winning_voucher.is_some() {
        Ok(())
    } else {
        Err(InvariantViolation::InconsistentHighestBid)
    }
}

/// Settled winner: only the winning bid is ever debited, and only after end.
pub fn check_settlement(
    state: &AuctionState,
    ledger: &EscrowLedger,
) -> Result<(), InvariantViolation> {
    let debited = ledger.total_debited();
    let expected = if state.ended {
        state.highest_bid
    } else {
        U256::zero()
    };

    if debited == expected {
        Ok(())
    } else {
        Err(InvariantViolation::SettlementMismatch {
            debited,
            highest_bid: state.highest_bid,
        })
    }
}

/// Settlement progress: transfer implies mint, and either implies a winner.
pub fn check_settlement_progress(state: &AuctionState) -> Result<(), InvariantViolation> {
    let progress = state.settlement;
    let ordered = !progress.transferred || progress.minted;
    let has_winner = !progress.is_started() || state.highest_bidder.is_some();
    if ordered && has_winner {
        Ok(())
    } else {
        Err(InvariantViolation::InconsistentSettlementProgress)
    }
}

/// Run every check.
pub fn check_all_invariants(
    state: &AuctionState,
    ledger: &EscrowLedger,
) -> Result<(), InvariantViolation> {
    check_escrow_conservation(ledger)?;
    check_highest_bid_consistency(state)?;
    check_settlement(state, ledger)?;
    check_settlement_progress(state)
}
