//! # Driving Ports (API - Inbound)
//!
//! The operations a participant (or anyone, for `auction_end`) can invoke.
//! Every operation runs to completion before the next is observed.

use crate::domain::entities::{AuctionOutcome, AuctionPhase, BidReceipt};
use crate::errors::AuctionError;
use la_01_voucher_verification::Voucher;
use shared_types::{Address, Hash, Timestamp, U256};

/// Lazy-mint auction API.
pub trait AuctionApi {
    /// Place a bid of `payment` for `participant` under `voucher`.
    ///
    /// # Errors
    ///
    /// Checked in order:
    /// 1. `AuctionEndAlreadyCalled` / `AuctionHasAlreadyEnded`
    /// 2. `InvalidSignature`
    /// 3. `BidIsLessThanMinimumPriceOfNFT`
    /// 4. `BidIsNotHigher`
    fn bid(
        &mut self,
        participant: Address,
        voucher: Voucher,
        payment: U256,
    ) -> Result<BidReceipt, AuctionError>;

    /// Finalize: mint to the issuer, transfer to the winner, pay the issuer.
    /// A retry after a failure resumes after the steps already committed.
    ///
    /// # Errors
    ///
    /// `AuctionEndAlreadyCalled`, `AuctionIsStillGoingOn` (early close
    /// disabled), `NobodyParticipatedInBid`, or a rolled-back collaborator failure.
    fn auction_end(&mut self) -> Result<AuctionOutcome, AuctionError>;

    /// Pay back a losing participant's full escrow. Available once bidding
    /// has closed, before or after `auction_end`.
    ///
    /// # Errors
    ///
    /// `AuctionIsStillGoingOn` (bidding open), `WinnerCannotReclaimBid`,
    /// `BidderHasNotParticipatedInAuction`, or a rolled-back payout failure.
    fn withdraw_funds_after_auction_end(&mut self, participant: Address)
        -> Result<U256, AuctionError>;

    /// Authorized voucher issuer.
    fn issuer(&self) -> Address;

    /// First instant at which bidding is closed.
    fn deadline(&self) -> Timestamp;

    /// Current highest bid.
    fn highest_bid(&self) -> U256;

    /// Current highest bidder.
    fn highest_bidder(&self) -> Option<Address>;

    /// Whether `auction_end` has succeeded.
    fn is_ended(&self) -> bool;

    /// Phase at the current clock reading.
    fn phase(&self) -> AuctionPhase;

    /// Escrowed funds of `participant`.
    fn pending_returns(&self, participant: &Address) -> U256;

    /// Domain separator vouchers must be signed under.
    fn domain_separator(&self) -> Hash;
}
