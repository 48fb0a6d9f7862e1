//! # Voucher Signer
//!
//! Off-line issuer side: turns `(asset_id, metadata_uri, minimum_price)` into a
//! signed [`Voucher`] bound to a [`VoucherDomain`].

use super::ecdsa::{address_from_pubkey, invert_s, is_low_s};
use super::entities::{EcdsaSignature, Voucher, VoucherDomain};
use super::errors::SignatureError;
use super::typed_data::{domain_separator, voucher_digest, voucher_struct_hash};
use k256::ecdsa::SigningKey;
use shared_types::{Address, Hash, U256};
use zeroize::Zeroize;

/// Holds the issuer key and the domain vouchers are signed under.
pub struct VoucherSigner {
    key: SigningKey,
    domain: VoucherDomain,
    separator: Hash,
}

impl VoucherSigner {
    /// Create a signer from an existing key.
    #[must_use]
    pub fn new(key: SigningKey, domain: VoucherDomain) -> Self {
        let separator = domain_separator(&domain);
        Self {
            key,
            domain,
            separator,
        }
    }

    /// Create a signer with a freshly generated key.
    #[must_use]
    pub fn random(domain: VoucherDomain) -> Self {
        Self::new(SigningKey::random(&mut rand::thread_rng()), domain)
    }

    /// Create a signer from a raw 32-byte secret. The caller's copy is wiped.
    pub fn from_secret_bytes(
        secret: &mut [u8; 32],
        domain: VoucherDomain,
    ) -> Result<Self, SignatureError> {
        let key = SigningKey::from_slice(secret.as_slice());
        secret.zeroize();
        Ok(Self::new(
            key.map_err(|_| SignatureError::InvalidSigningKey)?,
            domain,
        ))
    }

    /// Address of the issuer key.
    #[must_use]
    pub fn address(&self) -> Address {
        address_from_pubkey(self.key.verifying_key())
    }

    /// Domain the signer is bound to.
    #[must_use]
    pub fn domain(&self) -> &VoucherDomain {
        &self.domain
    }

    /// Separator of [`domain`](Self::domain).
    #[must_use]
    pub fn domain_separator(&self) -> Hash {
        self.separator
    }

    /// Sign a voucher for one asset at a floor price.
    pub fn create_voucher(
        &self,
        asset_id: U256,
        metadata_uri: impl Into<String>,
        minimum_price: U256,
    ) -> Result<Voucher, SignatureError> {
        let metadata_uri = metadata_uri.into();
        let digest = voucher_digest(
            &self.separator,
            &voucher_struct_hash(asset_id, &metadata_uri, minimum_price),
        );

        Ok(Voucher {
            asset_id,
            metadata_uri,
            minimum_price,
            signature: self.sign_digest(&digest)?,
        })
    }

    /// Sign a prehashed digest, normalized to low S with `v` in {27, 28}.
    pub fn sign_digest(&self, digest: &Hash) -> Result<EcdsaSignature, SignatureError> {
        let (sig, recid) = self
            .key
            .sign_prehash_recoverable(digest)
            .map_err(|e| SignatureError::SigningFailed(e.to_string()))?;

        let sig_bytes = sig.to_bytes();
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&sig_bytes[..32]);
        s.copy_from_slice(&sig_bytes[32..]);

        // Normalize S to low value (EIP-2); flipping S flips the recovery parity
        let mut parity = recid.to_byte() & 1;
        if !is_low_s(&s) {
            s = invert_s(&s);
            parity ^= 1;
        }

        Ok(EcdsaSignature { r, s, v: 27 + parity })
    }
}

impl std::fmt::Debug for VoucherSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoucherSigner")
            .field("address", &self.address())
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}
