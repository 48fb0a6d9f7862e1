//! # Auction Service
//!
//! Application service that implements `AuctionApi`.
//!
//! Every operation validates first, then updates auction state and the escrow
//! ledger, and only then calls out to collaborators. If a collaborator fails,
//! state and ledger are restored from a snapshot taken before the first write
//! and nothing is published. Settlement steps the asset issuer already
//! committed are kept in `SettlementProgress` across that restore, so a retried
//! `auction_end` resumes after them. Events of a successful call are published
//! after the last collaborator call returned.

use crate::config::AuctionConfig;
use crate::domain::entities::{AuctionOutcome, AuctionPhase, AuctionState, BidReceipt};
use crate::domain::invariants::{check_all_invariants, InvariantViolation};
use crate::domain::ledger::EscrowLedger;
use crate::errors::{AuctionError, ConfigError};
use crate::events::AuctionEvent;
use crate::ports::inbound::AuctionApi;
use crate::ports::outbound::{AssetIssuer, Clock, EventSink, FundsTransfer};
use la_01_voucher_verification::{
    Secp256k1Recovery, SignerRecovery, Voucher, VoucherVerificationApi, VoucherVerifier,
};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash, Timestamp, U256};
use tracing::{debug, info, instrument, warn};

/// Counters over the lifetime of one auction.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionStats {
    /// Bids that became the highest bid.
    pub bids_accepted: u64,
    /// Bids refused for any reason.
    pub bids_rejected: u64,
    /// Successful withdrawals.
    pub withdrawals: u64,
    /// Refused or failed withdrawals.
    pub withdrawals_rejected: u64,
    /// Whether settlement completed.
    pub settled: bool,
}

/// The lazy-mint auction.
///
/// Owns the auction state and the escrow ledger exclusively. Operations take
/// `&mut self`, so no collaborator can re-enter the auction while one of its
/// operations is in progress.
pub struct AuctionService<C, I, F, E, R = Secp256k1Recovery>
where
    C: Clock,
    I: AssetIssuer,
    F: FundsTransfer,
    E: EventSink,
    R: SignerRecovery,
{
    config: AuctionConfig,
    verifier: VoucherVerifier<R>,
    state: AuctionState,
    ledger: EscrowLedger,
    clock: C,
    assets: I,
    funds: F,
    events: E,
    stats: AuctionStats,
}

impl<C, I, F, E> AuctionService<C, I, F, E, Secp256k1Recovery>
where
    C: Clock,
    I: AssetIssuer,
    F: FundsTransfer,
    E: EventSink,
{
    /// Create an auction whose deadline is `clock.now() + bidding_duration_secs`.
    pub fn new(
        config: AuctionConfig,
        clock: C,
        assets: I,
        funds: F,
        events: E,
    ) -> Result<Self, ConfigError> {
        Self::with_recovery(config, clock, assets, funds, events, Secp256k1Recovery)
    }
}

impl<C, I, F, E, R> AuctionService<C, I, F, E, R>
where
    C: Clock,
    I: AssetIssuer,
    F: FundsTransfer,
    E: EventSink,
    R: SignerRecovery,
{
    /// Create an auction with a custom signer recovery backend.
    pub fn with_recovery(
        config: AuctionConfig,
        clock: C,
        assets: I,
        funds: F,
        events: E,
        recovery: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let deadline = clock.now().saturating_add(config.bidding_duration_secs);
        let verifier =
            VoucherVerifier::with_recovery(config.issuer, config.voucher_domain(), recovery);

        info!(
            issuer = %config.issuer,
            deadline,
            chain_id = config.chain_id,
            "[la-02] auction created"
        );

        Ok(Self {
            state: AuctionState::new(config.issuer, deadline),
            ledger: EscrowLedger::new(),
            config,
            verifier,
            clock,
            assets,
            funds,
            events,
            stats: AuctionStats::default(),
        })
    }

    /// Configuration the auction was created with.
    #[must_use]
    pub fn config(&self) -> &AuctionConfig {
        &self.config
    }

    /// Current auction state.
    #[must_use]
    pub fn state(&self) -> &AuctionState {
        &self.state
    }

    /// Current escrow ledger.
    #[must_use]
    pub fn ledger(&self) -> &EscrowLedger {
        &self.ledger
    }

    /// Sum of all escrowed funds.
    #[must_use]
    pub fn total_escrowed(&self) -> U256 {
        self.ledger.total_escrowed()
    }

    /// Lifetime counters.
    #[must_use]
    pub fn stats(&self) -> AuctionStats {
        self.stats.clone()
    }

    /// Check the domain invariants against the current state.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        check_all_invariants(&self.state, &self.ledger)
    }

    fn place_bid(
        &mut self,
        participant: Address,
        voucher: Voucher,
        payment: U256,
    ) -> Result<BidReceipt, AuctionError> {
        let now = self.clock.now();
        if self.state.settlement.is_started() {
            return Err(AuctionError::AuctionEndAlreadyCalled);
        }
        match self.state.phase(now) {
            AuctionPhase::Ended => return Err(AuctionError::AuctionEndAlreadyCalled),
            AuctionPhase::Expired => {
                return Err(AuctionError::AuctionHasAlreadyEnded {
                    deadline: self.state.deadline,
                    now,
                })
            }
            AuctionPhase::Open => {}
        }

        let signer = self.verifier.verify(&voucher)?;
        debug!(%signer, asset_id = %voucher.asset_id, "[la-02] voucher verified");

        if payment < voucher.minimum_price {
            return Err(AuctionError::BidIsLessThanMinimumPriceOfNFT {
                bid: payment,
                minimum: voucher.minimum_price,
            });
        }
        if payment <= self.state.highest_bid {
            return Err(AuctionError::BidIsNotHigher {
                bid: payment,
                highest: self.state.highest_bid,
            });
        }

        let escrowed = self.ledger.credit(participant, payment)?;
        self.state.raise(participant, payment, voucher);

        self.events.publish(AuctionEvent::HighestBidIncreased {
            bidder: participant,
            amount: payment,
        });

        Ok(BidReceipt {
            bidder: participant,
            amount: payment,
            escrowed,
        })
    }

    fn settle(&mut self) -> Result<AuctionOutcome, AuctionError> {
        match self.state.phase(self.clock.now()) {
            AuctionPhase::Ended => return Err(AuctionError::AuctionEndAlreadyCalled),
            AuctionPhase::Open
                if !self.config.allow_early_close && !self.state.settlement.is_started() =>
            {
                return Err(AuctionError::AuctionIsStillGoingOn)
            }
            AuctionPhase::Open | AuctionPhase::Expired => {}
        }

        let (Some(winner), Some(voucher)) = (
            self.state.highest_bidder,
            self.state.winning_voucher.clone(),
        ) else {
            return Err(AuctionError::NobodyParticipatedInBid);
        };
        let amount = self.state.highest_bid;

        let snapshot = (self.state.clone(), self.ledger.clone());
        if let Err(err) = self.apply_settlement(winner, amount, &voucher) {
            let progress = self.state.settlement;
            (self.state, self.ledger) = snapshot;
            self.state.settlement = progress;
            warn!(
                minted = progress.minted,
                transferred = progress.transferred,
                "[la-02] settlement interrupted"
            );
            return Err(err);
        }

        let issuer = self.state.issuer;
        self.events.publish(AuctionEvent::AssetCreated {
            owner: issuer,
            asset_id: voucher.asset_id,
        });
        self.events.publish(AuctionEvent::OwnershipTransferred {
            from: issuer,
            to: winner,
            asset_id: voucher.asset_id,
        });
        self.events
            .publish(AuctionEvent::AuctionEnded { winner, amount });

        Ok(AuctionOutcome {
            winner,
            amount,
            asset_id: voucher.asset_id,
            metadata_uri: voucher.metadata_uri,
        })
    }

    fn apply_settlement(
        &mut self,
        winner: Address,
        amount: U256,
        voucher: &Voucher,
    ) -> Result<(), AuctionError> {
        self.state.ended = true;
        self.ledger.debit(winner, amount)?;

        let issuer = self.state.issuer;
        if !self.state.settlement.minted {
            self.assets
                .create(issuer, voucher.asset_id, &voucher.metadata_uri)?;
            self.state.settlement.minted = true;
        }
        if !self.state.settlement.transferred {
            self.assets.transfer(issuer, winner, voucher.asset_id)?;
            self.state.settlement.transferred = true;
        }
        self.funds.send(issuer, amount)?;
        Ok(())
    }

    fn withdraw(&mut self, participant: Address) -> Result<U256, AuctionError> {
        let bidding_open = self.state.phase(self.clock.now()) == AuctionPhase::Open;
        if bidding_open && !self.state.settlement.is_started() {
            return Err(AuctionError::AuctionIsStillGoingOn);
        }
        if self.state.is_highest_bidder(&participant) {
            return Err(AuctionError::WinnerCannotReclaimBid);
        }
        if self.ledger.balance_of(&participant).is_zero() {
            return Err(AuctionError::BidderHasNotParticipatedInAuction(
                participant,
            ));
        }

        let snapshot = self.ledger.clone();
        let amount = self.ledger.drain(participant)?;
        if let Err(err) = self.funds.send(participant, amount) {
            self.ledger = snapshot;
            return Err(err.into());
        }

        self.events.publish(AuctionEvent::FundsWithdrawn {
            participant,
            amount,
        });
        Ok(amount)
    }
}

impl<C, I, F, E, R> AuctionApi for AuctionService<C, I, F, E, R>
where
    C: Clock,
    I: AssetIssuer,
    F: FundsTransfer,
    E: EventSink,
    R: SignerRecovery,
{
    #[instrument(skip(self, voucher))]
    fn bid(
        &mut self,
        participant: Address,
        voucher: Voucher,
        payment: U256,
    ) -> Result<BidReceipt, AuctionError> {
        let result = self.place_bid(participant, voucher, payment);
        match &result {
            Ok(receipt) => {
                self.stats.bids_accepted += 1;
                info!(
                    bidder = %receipt.bidder,
                    amount = %receipt.amount,
                    escrowed = %receipt.escrowed,
                    "[la-02] highest bid increased"
                );
            }
            Err(err) => {
                self.stats.bids_rejected += 1;
                warn!(error = %err, category = ?err.category(), "[la-02] bid rejected");
            }
        }
        result
    }

    #[instrument(skip(self))]
    fn auction_end(&mut self) -> Result<AuctionOutcome, AuctionError> {
        let result = self.settle();
        match &result {
            Ok(outcome) => {
                self.stats.settled = true;
                info!(
                    winner = %outcome.winner,
                    amount = %outcome.amount,
                    asset_id = %outcome.asset_id,
                    "[la-02] auction settled"
                );
            }
            Err(err) => {
                warn!(error = %err, category = ?err.category(), "[la-02] auction end refused");
            }
        }
        result
    }

    #[instrument(skip(self))]
    fn withdraw_funds_after_auction_end(
        &mut self,
        participant: Address,
    ) -> Result<U256, AuctionError> {
        let result = self.withdraw(participant);
        match &result {
            Ok(amount) => {
                self.stats.withdrawals += 1;
                info!(%participant, %amount, "[la-02] funds withdrawn");
            }
            Err(err) => {
                self.stats.withdrawals_rejected += 1;
                warn!(error = %err, category = ?err.category(), "[la-02] withdrawal refused");
            }
        }
        result
    }

    fn issuer(&self) -> Address {
        self.state.issuer
    }

    fn deadline(&self) -> Timestamp {
        self.state.deadline
    }

    fn highest_bid(&self) -> U256 {
        self.state.highest_bid
    }

    fn highest_bidder(&self) -> Option<Address> {
        self.state.highest_bidder
    }

    fn is_ended(&self) -> bool {
        self.state.ended
    }

    fn phase(&self) -> AuctionPhase {
        self.state.phase(self.clock.now())
    }

    fn pending_returns(&self, participant: &Address) -> U256 {
        self.ledger.balance_of(participant)
    }

    fn domain_separator(&self) -> Hash {
        self.verifier.domain_separator()
    }
}
