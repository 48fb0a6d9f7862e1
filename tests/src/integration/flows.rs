//! # Integration Test Flows
//!
//! ## Flows Tested:
//!
//! 1. **Single bidder raising its own bid**: bid, raise, settle, double settle
//! 2. **Competing bidders**: losers withdraw exactly once, the winner cannot
//! 3. **Rejected calls**: below floor, no bids, expiry, early withdrawal
//! 4. **Collaborator failures**: rollback, and settlement resuming after committed steps

#[cfg(test)]
mod tests {
    use crate::fixtures::{participant, random_participant, AuctionFixture, ASSET_ID, METADATA_URI};
    use la_02_auction::prelude::*;

    fn wei(v: u64) -> U256 {
        U256::from(v)
    }

    // =============================================================================
    // FLOW 1: SINGLE BIDDER
    // =============================================================================

    #[test]
    fn test_single_bidder_raises_and_wins() {
        let mut fx = AuctionFixture::new();
        let alice = participant(0xA1);
        let voucher = fx.voucher(2);

        fx.auction.bid(alice, voucher.clone(), wei(4)).unwrap();
        assert_eq!(fx.auction.highest_bid(), wei(4));
        assert_eq!(fx.auction.highest_bidder(), Some(alice));

        fx.auction.bid(alice, voucher.clone(), wei(6)).unwrap();
        assert_eq!(fx.auction.highest_bid(), wei(6));
        assert_eq!(fx.auction.pending_returns(&alice), wei(10));

        fx.expire();
        let outcome = fx.auction.auction_end().unwrap();
        assert_eq!(outcome.winner, alice);
        assert_eq!(outcome.amount, wei(6));
        assert_eq!(outcome.metadata_uri, METADATA_URI);

        assert_eq!(fx.assets.owner_of(U256::from(ASSET_ID)), Some(alice));
        assert_eq!(fx.funds.received(&fx.issuer()), wei(6));
        assert_eq!(fx.auction.pending_returns(&alice), wei(4));

        assert_eq!(
            fx.auction.auction_end(),
            Err(AuctionError::AuctionEndAlreadyCalled)
        );
        assert_eq!(
            fx.auction.bid(alice, voucher, wei(7)),
            Err(AuctionError::AuctionEndAlreadyCalled)
        );
        assert_eq!(fx.auction.check_invariants(), Ok(()));
    }

    #[test]
    fn test_settlement_publishes_exactly_once() {
        let mut fx = AuctionFixture::new();
        fx.auction
            .bid(participant(0xA1), fx.voucher(2), wei(4))
            .unwrap();
        fx.expire();
        fx.auction.auction_end().unwrap();
        let _ = fx.auction.auction_end();

        let events = fx.events.events();
        let issuer = fx.issuer();
        assert_eq!(
            events,
            vec![
                AuctionEvent::HighestBidIncreased {
                    bidder: participant(0xA1),
                    amount: wei(4),
                },
                AuctionEvent::AssetCreated {
                    owner: issuer,
                    asset_id: U256::from(ASSET_ID),
                },
                AuctionEvent::OwnershipTransferred {
                    from: issuer,
                    to: participant(0xA1),
                    asset_id: U256::from(ASSET_ID),
                },
                AuctionEvent::AuctionEnded {
                    winner: participant(0xA1),
                    amount: wei(4),
                },
            ]
        );
    }

    // =============================================================================
    // FLOW 2: COMPETING BIDDERS
    // =============================================================================

    #[test]
    fn test_losers_withdraw_winner_cannot() {
        let mut fx = AuctionFixture::new();
        let (b, c, d) = (participant(0xB0), participant(0xC0), participant(0xD0));

        fx.auction.bid(b, fx.voucher(2), wei(4)).unwrap();
        fx.auction.bid(c, fx.voucher(2), wei(5)).unwrap();
        fx.auction.bid(d, fx.voucher(2), wei(6)).unwrap();
        fx.expire();
        fx.auction.auction_end().unwrap();

        assert_eq!(fx.auction.withdraw_funds_after_auction_end(b), Ok(wei(4)));
        assert_eq!(fx.auction.withdraw_funds_after_auction_end(c), Ok(wei(5)));
        assert_eq!(
            fx.auction.withdraw_funds_after_auction_end(d),
            Err(AuctionError::WinnerCannotReclaimBid)
        );

        assert_eq!(fx.funds.received(&b), wei(4));
        assert_eq!(fx.funds.received(&c), wei(5));
        assert_eq!(fx.funds.received(&d), U256::zero());

        assert_eq!(
            fx.auction.withdraw_funds_after_auction_end(b),
            Err(AuctionError::BidderHasNotParticipatedInAuction(b))
        );
        assert_eq!(fx.auction.total_escrowed(), U256::zero());
        assert_eq!(fx.auction.check_invariants(), Ok(()));

        let stats = fx.auction.stats();
        assert_eq!(stats.bids_accepted, 3);
        assert_eq!(stats.withdrawals, 2);
        assert!(stats.settled);
    }

    #[test]
    fn test_outbid_participant_keeps_escrow_until_close() {
        let mut fx = AuctionFixture::new();
        let (b, c) = (participant(0xB0), participant(0xC0));

        fx.auction.bid(b, fx.voucher(2), wei(4)).unwrap();
        fx.auction.bid(c, fx.voucher(2), wei(9)).unwrap();

        assert_eq!(fx.auction.pending_returns(&b), wei(4));
        assert_eq!(
            fx.auction.withdraw_funds_after_auction_end(b),
            Err(AuctionError::AuctionIsStillGoingOn)
        );
        assert_eq!(fx.auction.total_escrowed(), wei(13));
    }

    #[test]
    fn test_many_random_bidders_conserve_escrow() {
        let mut fx = AuctionFixture::new();
        let bidders: Vec<Address> = (0..10).map(|_| random_participant()).collect();

        for (i, bidder) in bidders.iter().enumerate() {
            fx.auction
                .bid(*bidder, fx.voucher(1), wei(10 + i as u64))
                .unwrap();
        }
        fx.expire();
        let outcome = fx.auction.auction_end().unwrap();
        assert_eq!(outcome.winner, bidders[9]);

        let mut refunded = U256::zero();
        for bidder in &bidders[..9] {
            refunded += fx.auction.withdraw_funds_after_auction_end(*bidder).unwrap();
        }
        let expected: u64 = (10..19).sum();
        assert_eq!(refunded, wei(expected));
        assert_eq!(fx.auction.check_invariants(), Ok(()));
    }

    // =============================================================================
    // FLOW 3: REJECTED CALLS
    // =============================================================================

    #[test]
    fn test_bid_below_floor_leaves_no_trace() {
        let mut fx = AuctionFixture::new();
        let err = fx
            .auction
            .bid(participant(0xA1), fx.voucher(5), wei(4))
            .unwrap_err();
        assert_eq!(
            err,
            AuctionError::BidIsLessThanMinimumPriceOfNFT {
                bid: wei(4),
                minimum: wei(5),
            }
        );
        assert_eq!(err.category(), ErrorCategory::BidValidation);
        assert!(fx.events.is_empty());
        assert_eq!(fx.auction.total_escrowed(), U256::zero());
    }

    #[test]
    fn test_auction_without_bids_cannot_end() {
        let mut fx = AuctionFixture::new();
        fx.expire();
        assert_eq!(
            fx.auction.auction_end(),
            Err(AuctionError::NobodyParticipatedInBid)
        );
        assert!(fx.assets.is_empty());
        assert!(fx.funds.history().is_empty());
    }

    #[test]
    fn test_expired_auction_rejects_bids() {
        let mut fx = AuctionFixture::new();
        fx.auction
            .bid(participant(0xA1), fx.voucher(2), wei(4))
            .unwrap();
        fx.expire();

        assert_eq!(fx.auction.phase(), AuctionPhase::Expired);
        let err = fx
            .auction
            .bid(participant(0xB0), fx.voucher(2), wei(8))
            .unwrap_err();
        assert!(matches!(err, AuctionError::AuctionHasAlreadyEnded { .. }));
        assert_eq!(err.category(), ErrorCategory::Timing);

        assert_eq!(
            fx.auction
                .withdraw_funds_after_auction_end(participant(0xA1)),
            Err(AuctionError::WinnerCannotReclaimBid)
        );
    }

    #[test]
    fn test_losers_refunded_after_deadline_without_auction_end() {
        let mut fx = AuctionFixture::new();
        let (b, c, d) = (participant(0xB0), participant(0xC0), participant(0xD0));
        fx.auction.bid(b, fx.voucher(2), wei(4)).unwrap();
        fx.auction.bid(c, fx.voucher(2), wei(5)).unwrap();
        fx.auction.bid(d, fx.voucher(2), wei(6)).unwrap();
        fx.expire();

        assert_eq!(fx.auction.withdraw_funds_after_auction_end(b), Ok(wei(4)));
        assert_eq!(fx.auction.withdraw_funds_after_auction_end(c), Ok(wei(5)));
        assert_eq!(
            fx.auction.withdraw_funds_after_auction_end(d),
            Err(AuctionError::WinnerCannotReclaimBid)
        );
        let stranger = participant(0x55);
        assert_eq!(
            fx.auction.withdraw_funds_after_auction_end(stranger),
            Err(AuctionError::BidderHasNotParticipatedInAuction(stranger))
        );
        assert!(!fx.auction.is_ended());
        assert_eq!(fx.auction.check_invariants(), Ok(()));
    }

    #[test]
    fn test_non_bidder_cannot_withdraw() {
        let mut fx = AuctionFixture::new();
        fx.auction
            .bid(participant(0xA1), fx.voucher(2), wei(4))
            .unwrap();
        fx.auction.auction_end().unwrap();

        let stranger = participant(0x55);
        assert_eq!(
            fx.auction.withdraw_funds_after_auction_end(stranger),
            Err(AuctionError::BidderHasNotParticipatedInAuction(stranger))
        );
    }

    #[test]
    fn test_strict_deadline_config() {
        let mut fx = AuctionFixture::with_config(|c| c.with_early_close(false));
        fx.auction
            .bid(participant(0xA1), fx.voucher(2), wei(4))
            .unwrap();
        assert_eq!(
            fx.auction.auction_end(),
            Err(AuctionError::AuctionIsStillGoingOn)
        );
        fx.expire();
        assert!(fx.auction.auction_end().is_ok());
    }

    // =============================================================================
    // FLOW 4: COLLABORATOR FAILURES
    // =============================================================================

    #[test]
    fn test_mint_failure_rolls_back_settlement() {
        let mut fx = AuctionFixture::new();
        let alice = participant(0xA1);
        fx.auction.bid(alice, fx.voucher(2), wei(4)).unwrap();
        fx.expire();

        fx.assets
            .fail_next(AssetError::Unavailable("registry offline".into()));
        let err = fx.auction.auction_end().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Collaborator);
        assert!(!fx.auction.is_ended());
        assert_eq!(fx.auction.pending_returns(&alice), wei(4));
        assert_eq!(fx.events.len(), 1);
        assert_eq!(fx.auction.check_invariants(), Ok(()));

        fx.auction.auction_end().unwrap();
        assert_eq!(fx.assets.owner_of(U256::from(ASSET_ID)), Some(alice));
    }

    #[test]
    fn test_refused_refund_can_be_retried() {
        let mut fx = AuctionFixture::new();
        let (b, d) = (participant(0xB0), participant(0xD0));
        fx.auction.bid(b, fx.voucher(2), wei(4)).unwrap();
        fx.auction.bid(d, fx.voucher(2), wei(6)).unwrap();
        fx.auction.auction_end().unwrap();

        fx.funds.reject(b);
        assert!(matches!(
            fx.auction.withdraw_funds_after_auction_end(b),
            Err(AuctionError::Payout(TransferError::Rejected { .. }))
        ));
        assert_eq!(fx.auction.pending_returns(&b), wei(4));

        fx.funds.accept(&b);
        assert_eq!(fx.auction.withdraw_funds_after_auction_end(b), Ok(wei(4)));
        assert_eq!(fx.auction.stats().withdrawals_rejected, 1);
    }

    #[test]
    fn test_settlement_resumes_after_refused_payout() {
        let mut fx = AuctionFixture::new();
        let (b, d) = (participant(0xB0), participant(0xD0));
        fx.auction.bid(b, fx.voucher(2), wei(4)).unwrap();
        fx.auction.bid(d, fx.voucher(2), wei(6)).unwrap();
        fx.expire();

        let issuer = fx.issuer();
        fx.funds.reject(issuer);
        assert!(matches!(
            fx.auction.auction_end(),
            Err(AuctionError::Payout(TransferError::Rejected { .. }))
        ));
        assert_eq!(fx.assets.owner_of(U256::from(ASSET_ID)), Some(d));
        assert_eq!(fx.auction.withdraw_funds_after_auction_end(b), Ok(wei(4)));

        fx.funds.accept(&issuer);
        let outcome = fx.auction.auction_end().unwrap();
        assert_eq!(outcome.winner, d);
        assert_eq!(fx.funds.received(&issuer), wei(6));
        assert_eq!(
            fx.events.names(),
            vec![
                "HighestBidIncreased",
                "HighestBidIncreased",
                "FundsWithdrawn",
                "AssetCreated",
                "OwnershipTransferred",
                "AuctionEnded"
            ]
        );
        assert_eq!(fx.auction.check_invariants(), Ok(()));
    }

    #[test]
    fn test_settlement_resumes_after_failed_handover() {
        let mut fx = AuctionFixture::new();
        let alice = participant(0xA1);
        fx.auction.bid(alice, fx.voucher(2), wei(4)).unwrap();
        fx.expire();

        fx.assets
            .fail_next_transfer(AssetError::Unavailable("registry offline".into()));
        assert!(matches!(
            fx.auction.auction_end(),
            Err(AuctionError::AssetIssuance(AssetError::Unavailable(_)))
        ));
        assert_eq!(fx.assets.owner_of(U256::from(ASSET_ID)), Some(fx.issuer()));
        assert!(fx.auction.state().settlement.minted);

        fx.auction.auction_end().unwrap();
        assert_eq!(fx.assets.owner_of(U256::from(ASSET_ID)), Some(alice));
        assert_eq!(fx.assets.len(), 1);
        assert_eq!(fx.funds.received(&fx.issuer()), wei(4));
        assert_eq!(
            fx.auction.auction_end(),
            Err(AuctionError::AuctionEndAlreadyCalled)
        );
    }
}
