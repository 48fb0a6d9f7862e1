//! # Error Types
//!
//! Every failure of the auction engine is a named condition surfaced to the
//! caller of the failing operation. None are retried internally and none
//! leave auction state or the escrow ledger partially updated.

use la_01_voucher_verification::SignatureError;
use shared_types::{Address, Timestamp, U256};
use thiserror::Error;

// =============================================================================
// AUCTION ERRORS
// =============================================================================

/// Errors returned by the auction operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuctionError {
    /// The bidding deadline has passed.
    #[error("auction has already ended (deadline {deadline}, now {now})")]
    AuctionHasAlreadyEnded {
        /// First instant at which bidding is closed.
        deadline: Timestamp,
        /// Clock reading when the bid arrived.
        now: Timestamp,
    },

    /// `auction_end` was already called successfully.
    #[error("auction end has already been called")]
    AuctionEndAlreadyCalled,

    /// The auction has not been finalized yet.
    #[error("auction is still going on")]
    AuctionIsStillGoingOn,

    /// Finalization was requested but no bid was ever accepted.
    #[error("nobody participated in the bid but auction ended")]
    NobodyParticipatedInBid,

    /// The voucher was not signed by the authorized issuer.
    #[error("invalid voucher signature: {0}")]
    InvalidSignature(#[from] SignatureError),

    /// The payment is below the voucher's floor price.
    #[error("bid {bid} is less than the minimum price {minimum} of the asset")]
    BidIsLessThanMinimumPriceOfNFT {
        /// Offered payment.
        bid: U256,
        /// Floor price signed into the voucher.
        minimum: U256,
    },

    /// The payment does not exceed the current highest bid.
    #[error("bid {bid} is not higher than the highest bid {highest}")]
    BidIsNotHigher {
        /// Offered payment.
        bid: U256,
        /// Current highest bid.
        highest: U256,
    },

    /// The winner tried to withdraw the consumed winning bid.
    #[error("winner cannot reclaim the bid amount")]
    WinnerCannotReclaimBid,

    /// The participant holds no escrowed funds.
    #[error("bidder {0:?} has not participated in the auction")]
    BidderHasNotParticipatedInAuction(Address),

    /// The asset issuer failed to mint or transfer; the call was rolled back.
    #[error("asset issuance failed: {0}")]
    AssetIssuance(#[from] AssetError),

    /// Paying funds out failed; the call was rolled back.
    #[error("payout failed: {0}")]
    Payout(#[from] TransferError),

    /// Escrow bookkeeping failed.
    #[error("escrow ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Coarse classification of [`AuctionError`] for callers and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Deadline-based rejection.
    Timing,
    /// Rejection due to the auction lifecycle.
    State,
    /// Voucher authenticity.
    Authorization,
    /// Bid amount rules.
    BidValidation,
    /// Withdrawal eligibility.
    Participant,
    /// An external collaborator failed.
    Collaborator,
    /// Escrow arithmetic.
    Ledger,
}

impl AuctionError {
    /// Category of this error.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AuctionHasAlreadyEnded { .. } => ErrorCategory::Timing,
            Self::AuctionEndAlreadyCalled
            | Self::AuctionIsStillGoingOn
            | Self::NobodyParticipatedInBid => ErrorCategory::State,
            Self::InvalidSignature(_) => ErrorCategory::Authorization,
            Self::BidIsLessThanMinimumPriceOfNFT { .. } | Self::BidIsNotHigher { .. } => {
                ErrorCategory::BidValidation
            }
            Self::WinnerCannotReclaimBid | Self::BidderHasNotParticipatedInAuction(_) => {
                ErrorCategory::Participant
            }
            Self::AssetIssuance(_) | Self::Payout(_) => ErrorCategory::Collaborator,
            Self::Ledger(_) => ErrorCategory::Ledger,
        }
    }
}

// =============================================================================
// LEDGER ERRORS
// =============================================================================

/// Errors from escrow ledger operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Debit larger than the held balance.
    #[error("insufficient escrow for {participant:?}: requested {requested}, available {available}")]
    InsufficientBalance {
        /// Participant being debited.
        participant: Address,
        /// Amount asked for.
        requested: U256,
        /// Amount held.
        available: U256,
    },

    /// A balance or running total would exceed `U256::MAX`.
    #[error("escrow arithmetic overflow")]
    Overflow,
}

// =============================================================================
// COLLABORATOR ERRORS
// =============================================================================

/// Errors from the asset issuer (mint/transfer primitives).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AssetError {
    /// An asset with this id was already minted.
    #[error("asset {0} already exists")]
    AlreadyExists(U256),

    /// No asset with this id exists.
    #[error("asset {0} not found")]
    NotFound(U256),

    /// Transfer source is not the current owner.
    #[error("asset {asset_id} is owned by {owner:?}, not {from:?}")]
    NotOwner {
        /// Asset being moved.
        asset_id: U256,
        /// Actual owner.
        owner: Address,
        /// Claimed owner.
        from: Address,
    },

    /// The issuer backend could not be reached.
    #[error("asset issuer unavailable: {0}")]
    Unavailable(String),
}

/// Errors from the funds transfer collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// The recipient refused the payment.
    #[error("transfer to {recipient:?} rejected: {reason}")]
    Rejected {
        /// Intended recipient.
        recipient: Address,
        /// Reason given by the payment rail.
        reason: String,
    },

    /// The payment rail could not be reached.
    #[error("funds transfer unavailable: {0}")]
    Unavailable(String),
}

// =============================================================================
// CONFIG ERRORS
// =============================================================================

/// Errors from validating or loading [`crate::config::AuctionConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The bidding window must be at least one second.
    #[error("bidding duration must be greater than zero")]
    ZeroBiddingDuration,

    /// The issuer must be a real identity.
    #[error("issuer address must not be zero")]
    ZeroIssuer,

    /// The verifying contract must be a real identity.
    #[error("verifying contract address must not be zero")]
    ZeroVerifyingContract,

    /// A required environment variable is missing.
    #[error("missing environment variable {0}")]
    MissingEnv(&'static str),

    /// An environment variable could not be parsed.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// Parse failure.
        reason: String,
    },
}
