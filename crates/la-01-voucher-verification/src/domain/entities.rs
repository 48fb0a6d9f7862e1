//! # Domain Entities
//!
//! The voucher an issuer signs off-line, its signature, and the domain that
//! binds it to one auction instance on one chain.

use super::errors::SignatureError;
use serde::{Deserialize, Serialize};
use shared_types::{Address, U256};

/// Default EIP-712 domain name for auction vouchers.
pub const DEFAULT_DOMAIN_NAME: &str = "LazyMintAuction-Voucher";

/// Default EIP-712 domain version.
pub const DEFAULT_DOMAIN_VERSION: &str = "1";

// =============================================================================
// ECDSA Types (secp256k1)
// =============================================================================

/// ECDSA signature on the secp256k1 curve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EcdsaSignature {
    /// R component (32 bytes)
    pub r: [u8; 32],
    /// S component (32 bytes)
    pub s: [u8; 32],
    /// Recovery ID (0, 1, 27, or 28)
    pub v: u8,
}

impl EcdsaSignature {
    /// Length of the compact `r || s || v` encoding.
    pub const LEN: usize = 65;

    /// Parse the 65-byte `r || s || v` encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != Self::LEN {
            return Err(SignatureError::InvalidFormat);
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..64]);
        Ok(Self { r, s, v: bytes[64] })
    }

    /// Encode as `r || s || v`.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 65] {
        let mut out = [0u8; 65];
        out[..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }
}

// =============================================================================
// Voucher
// =============================================================================

/// Issuer-signed authorization to sell one not-yet-minted asset.
///
/// The signature covers `(asset_id, metadata_uri, minimum_price)` under a
/// [`VoucherDomain`]; see [`crate::domain::typed_data`] for the exact bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voucher {
    /// Identifier the asset will be minted under.
    pub asset_id: U256,
    /// Metadata reference (typically an `ipfs://` URI).
    pub metadata_uri: String,
    /// Floor price in base currency units.
    pub minimum_price: U256,
    /// Issuer signature over the typed-data digest.
    pub signature: EcdsaSignature,
}

/// Domain separator inputs binding a voucher to one auction on one chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoucherDomain {
    /// Human readable signing domain.
    pub name: String,
    /// Version of the voucher schema.
    pub version: String,
    /// Chain the auction runs on.
    pub chain_id: u64,
    /// Identity of the auction instance that accepts the voucher.
    pub verifying_contract: Address,
}

impl VoucherDomain {
    /// Domain with the default name and version.
    #[must_use]
    pub fn new(chain_id: u64, verifying_contract: Address) -> Self {
        Self {
            name: DEFAULT_DOMAIN_NAME.to_string(),
            version: DEFAULT_DOMAIN_VERSION.to_string(),
            chain_id,
            verifying_contract,
        }
    }

    /// Builder-style method to override the domain name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder-style method to override the domain version.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}
