//! # Voucher Attacks
//!
//! | Attack | Expected rejection |
//! |--------|--------------------|
//! | Self-signed voucher | `SignerMismatch` |
//! | Lowered floor price | signer no longer matches |
//! | Swapped metadata URI | signer no longer matches |
//! | Replay against another auction instance | signer no longer matches |
//! | High-S twin of a valid signature | `MalleableSignature` |
//! | Garbage recovery id | `InvalidRecoveryId` |

#[cfg(test)]
mod tests {
    use crate::fixtures::{participant, AuctionFixture, DURATION};
    use la_01_voucher_verification::domain::ecdsa::invert_s;
    use la_01_voucher_verification::{SignatureError, VoucherSigner};
    use la_02_auction::prelude::*;

    fn assert_invalid_signature(err: &AuctionError) {
        assert!(
            matches!(err, AuctionError::InvalidSignature(_)),
            "expected InvalidSignature, got {err:?}"
        );
        assert_eq!(err.category(), ErrorCategory::Authorization);
    }

    #[test]
    fn test_self_signed_voucher() {
        let mut fx = AuctionFixture::new();
        let attacker = VoucherSigner::random(fx.auction.config().voucher_domain());
        let forged = attacker
            .create_voucher(U256::from(1u64), "ipfs://forged", U256::one())
            .unwrap();

        let err = fx
            .auction
            .bid(attacker.address(), forged, U256::from(2u64))
            .unwrap_err();
        assert!(matches!(
            err,
            AuctionError::InvalidSignature(SignatureError::SignerMismatch { .. })
        ));
    }

    #[test]
    fn test_lowered_floor_price() {
        let mut fx = AuctionFixture::new();
        let mut voucher = fx.voucher(100);
        voucher.minimum_price = U256::one();

        let err = fx
            .auction
            .bid(participant(0xA1), voucher, U256::from(2u64))
            .unwrap_err();
        assert_invalid_signature(&err);
    }

    #[test]
    fn test_swapped_metadata_uri() {
        let mut fx = AuctionFixture::new();
        let mut voucher = fx.voucher(1);
        voucher.metadata_uri = "ipfs://attacker-content".to_string();

        let err = fx
            .auction
            .bid(participant(0xA1), voucher, U256::from(2u64))
            .unwrap_err();
        assert_invalid_signature(&err);
    }

    #[test]
    fn test_replay_against_other_instance() {
        let mut target = AuctionFixture::with_config(|c| {
            c.with_verifying_contract(Address::new([0x42; 20]))
        });
        let other_domain = AuctionConfig::new(target.issuer(), DURATION)
            .with_verifying_contract(Address::new([0x43; 20]))
            .voucher_domain();

        // Same issuer key, but the voucher was signed for a sibling auction.
        let sibling_signer = VoucherSigner::new(target.issuer_key.clone(), other_domain);
        assert_eq!(sibling_signer.address(), target.issuer());
        assert_ne!(
            sibling_signer.domain_separator(),
            target.auction.domain_separator()
        );
        let replayed = sibling_signer
            .create_voucher(U256::one(), "ipfs://asset", U256::one())
            .unwrap();

        let err = target
            .auction
            .bid(participant(0xA1), replayed, U256::from(2u64))
            .unwrap_err();
        assert_invalid_signature(&err);
    }

    #[test]
    fn test_high_s_twin_rejected() {
        let mut fx = AuctionFixture::new();
        let mut voucher = fx.voucher(1);
        voucher.signature.s = invert_s(&voucher.signature.s);
        voucher.signature.v = if voucher.signature.v == 27 { 28 } else { 27 };

        let err = fx
            .auction
            .bid(participant(0xA1), voucher, U256::from(2u64))
            .unwrap_err();
        assert_eq!(
            err,
            AuctionError::InvalidSignature(SignatureError::MalleableSignature)
        );
    }

    #[test]
    fn test_garbage_recovery_id() {
        let mut fx = AuctionFixture::new();
        let mut voucher = fx.voucher(1);
        voucher.signature.v = 99;

        let err = fx
            .auction
            .bid(participant(0xA1), voucher, U256::from(2u64))
            .unwrap_err();
        assert_eq!(
            err,
            AuctionError::InvalidSignature(SignatureError::InvalidRecoveryId(99))
        );
    }

    #[test]
    fn test_rejected_forgeries_do_not_block_honest_bids() {
        let mut fx = AuctionFixture::new();
        let mut forged = fx.voucher(1);
        forged.asset_id = U256::from(999u64);
        assert!(fx
            .auction
            .bid(participant(0xA1), forged, U256::from(50u64))
            .is_err());

        assert!(fx
            .auction
            .bid(participant(0xB0), fx.voucher(1), U256::from(2u64))
            .is_ok());
        assert_eq!(fx.auction.stats().bids_rejected, 1);
    }
}
