//! # Domain Entities
//!
//! The singleton auction state and the values returned by its operations.

use la_01_voucher_verification::Voucher;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Timestamp, U256};

// =============================================================================
// AUCTION PHASE
// =============================================================================

/// Lifecycle phase of the auction at a given instant.
///
/// `Open → Ended` is the only state transition; `Expired` is `Open` observed
/// after the deadline and is derived from the clock, not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuctionPhase {
    /// Accepting bids.
    Open,
    /// Deadline passed; waiting for `auction_end`.
    Expired,
    /// Finalized. Terminal.
    Ended,
}

// =============================================================================
// SETTLEMENT PROGRESS
// =============================================================================

/// External settlement steps that have already been committed.
///
/// The asset issuer cannot be rolled back, so these flags survive a failed
/// `auction_end` and a retry skips the steps already done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SettlementProgress {
    /// The asset was minted to the issuer.
    pub minted: bool,
    /// The asset was handed to the winner.
    pub transferred: bool,
}

impl SettlementProgress {
    /// Whether any external step has been committed.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.minted || self.transferred
    }
}

// =============================================================================
// AUCTION STATE
// =============================================================================

/// Persistent auction state. One per deployment, never destroyed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionState {
    /// Identity allowed to sign vouchers; receives the winning payment.
    pub issuer: Address,
    /// First instant at which bidding is closed.
    pub deadline: Timestamp,
    /// Highest accepted payment (0 before the first bid).
    pub highest_bid: U256,
    /// Participant that placed `highest_bid`.
    pub highest_bidder: Option<Address>,
    /// Set once by `auction_end`; irreversible.
    pub ended: bool,
    /// Voucher presented with the highest bid; settlement mints from it.
    pub winning_voucher: Option<Voucher>,
    /// Committed settlement steps. Once started, the winner is frozen.
    pub settlement: SettlementProgress,
}

impl AuctionState {
    /// Fresh state for an auction closing at `deadline`.
    #[must_use]
    pub fn new(issuer: Address, deadline: Timestamp) -> Self {
        Self {
            issuer,
            deadline,
            highest_bid: U256::zero(),
            highest_bidder: None,
            ended: false,
            winning_voucher: None,
            settlement: SettlementProgress::default(),
        }
    }

    /// Phase at time `now`. An explicit end takes precedence over the clock.
    #[must_use]
    pub fn phase(&self, now: Timestamp) -> AuctionPhase {
        if self.ended {
            AuctionPhase::Ended
        } else if now >= self.deadline {
            AuctionPhase::Expired
        } else {
            AuctionPhase::Open
        }
    }

    /// Record a new highest bid.
    pub fn raise(&mut self, bidder: Address, amount: U256, voucher: Voucher) {
        self.highest_bid = amount;
        self.highest_bidder = Some(bidder);
        self.winning_voucher = Some(voucher);
    }

    /// Whether `participant` currently holds the highest bid.
    #[must_use]
    pub fn is_highest_bidder(&self, participant: &Address) -> bool {
        self.highest_bidder.as_ref() == Some(participant)
    }
}

// =============================================================================
// OPERATION RESULTS
// =============================================================================

/// Result of an accepted bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidReceipt {
    /// Participant that placed the bid.
    pub bidder: Address,
    /// New highest bid.
    pub amount: U256,
    /// Participant's total escrow after the bid.
    pub escrowed: U256,
}

/// Result of a successful settlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionOutcome {
    /// New owner of the asset.
    pub winner: Address,
    /// Payment released to the issuer.
    pub amount: U256,
    /// Minted asset.
    pub asset_id: U256,
    /// Metadata reference the asset was minted with.
    pub metadata_uri: String,
}
