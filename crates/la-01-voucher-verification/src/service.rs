//! # Voucher Verification Service
//!
//! Application service that implements `VoucherVerificationApi`.
//!
//! The separator is computed once at construction; each call rebuilds the
//! struct hash from the voucher fields and hands the digest to the configured
//! `SignerRecovery`.

use crate::adapters::Secp256k1Recovery;
use crate::domain::entities::{Voucher, VoucherDomain};
use crate::domain::errors::SignatureError;
use crate::domain::typed_data::{domain_separator, voucher_digest, voucher_struct_hash};
use crate::ports::inbound::VoucherVerificationApi;
use crate::ports::outbound::SignerRecovery;
use shared_types::{Address, Hash};
use tracing::debug;

/// Verifies vouchers against one issuer within one domain.
#[derive(Debug, Clone)]
pub struct VoucherVerifier<R: SignerRecovery = Secp256k1Recovery> {
    issuer: Address,
    domain: VoucherDomain,
    separator: Hash,
    recovery: R,
}

impl VoucherVerifier<Secp256k1Recovery> {
    /// Create a verifier using secp256k1 recovery.
    #[must_use]
    pub fn new(issuer: Address, domain: VoucherDomain) -> Self {
        Self::with_recovery(issuer, domain, Secp256k1Recovery)
    }
}

impl<R: SignerRecovery> VoucherVerifier<R> {
    /// Create a verifier with a custom signature scheme.
    #[must_use]
    pub fn with_recovery(issuer: Address, domain: VoucherDomain, recovery: R) -> Self {
        let separator = domain_separator(&domain);
        Self {
            issuer,
            domain,
            separator,
            recovery,
        }
    }

    /// The domain vouchers must be signed under.
    #[must_use]
    pub fn domain(&self) -> &VoucherDomain {
        &self.domain
    }
}

impl<R: SignerRecovery> VoucherVerificationApi for VoucherVerifier<R> {
    fn verify(&self, voucher: &Voucher) -> Result<Address, SignatureError> {
        let digest = self.digest(voucher);
        let signer = self.recovery.recover(&digest, &voucher.signature)?;

        if signer != self.issuer {
            debug!(expected = %self.issuer, actual = %signer, "Voucher signed by unauthorized key");
            return Err(SignatureError::SignerMismatch {
                expected: self.issuer,
                actual: signer,
            });
        }

        Ok(signer)
    }

    fn digest(&self, voucher: &Voucher) -> Hash {
        voucher_digest(
            &self.separator,
            &voucher_struct_hash(voucher.asset_id, &voucher.metadata_uri, voucher.minimum_price),
        )
    }

    fn domain_separator(&self) -> Hash {
        self.separator
    }

    fn issuer(&self) -> Address {
        self.issuer
    }
}
