//! # Event Schema
//!
//! Notifications published by the auction. Per call they are emitted in the
//! order listed:
//!
//! | Operation | Events |
//! |-----------|--------|
//! | `bid` | `HighestBidIncreased` |
//! | `auction_end` | `AssetCreated`, `OwnershipTransferred`, `AuctionEnded` |
//! | `withdraw_funds_after_auction_end` | `FundsWithdrawn` |
//!
//! Failed calls publish nothing.

use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

/// An observable auction notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum AuctionEvent {
    /// A bid became the new highest bid.
    HighestBidIncreased {
        /// Participant holding the highest bid.
        bidder: Address,
        /// New highest bid.
        amount: U256,
    },
    /// The asset was minted under issuer ownership.
    AssetCreated {
        /// Initial owner (the issuer).
        owner: Address,
        /// Minted asset.
        asset_id: U256,
    },
    /// The asset changed hands.
    OwnershipTransferred {
        /// Previous owner.
        from: Address,
        /// New owner.
        to: Address,
        /// Transferred asset.
        asset_id: U256,
    },
    /// The auction was finalized.
    AuctionEnded {
        /// Winning participant.
        winner: Address,
        /// Winning bid, released to the issuer.
        amount: U256,
    },
    /// A losing participant withdrew their escrow.
    FundsWithdrawn {
        /// Participant paid back.
        participant: Address,
        /// Amount paid back.
        amount: U256,
    },
}

impl AuctionEvent {
    /// Event name as used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::HighestBidIncreased { .. } => "HighestBidIncreased",
            Self::AssetCreated { .. } => "AssetCreated",
            Self::OwnershipTransferred { .. } => "OwnershipTransferred",
            Self::AuctionEnded { .. } => "AuctionEnded",
            Self::FundsWithdrawn { .. } => "FundsWithdrawn",
        }
    }
}
