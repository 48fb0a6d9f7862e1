//! # Voucher Verification Subsystem (LA-01)
//!
//! Signs and verifies lazy-mint vouchers: issuer-signed authorizations to sell
//! one not-yet-minted asset at a floor price.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): typed-data encoding, secp256k1 recovery, signer
//! - **Ports Layer** (`ports/`): `VoucherVerificationApi` and the pluggable `SignerRecovery`
//! - **Adapters Layer** (`adapters/`): `Secp256k1Recovery`
//! - **Service Layer** (`service.rs`): `VoucherVerifier`
//!
//! ## Security Notes
//!
//! - **Domain Separation**: the digest binds name, version, chain id and the
//!   verifying auction, so a voucher cannot be replayed against another instance
//! - **Malleability Prevention (EIP-2)**: signatures with high S values are rejected
//! - **Stateless**: vouchers are never cached; every call re-derives the digest

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use adapters::Secp256k1Recovery;
pub use domain::ecdsa::{address_from_pubkey, keccak256};
pub use domain::entities::{
    EcdsaSignature, Voucher, VoucherDomain, DEFAULT_DOMAIN_NAME, DEFAULT_DOMAIN_VERSION,
};
pub use domain::errors::SignatureError;
pub use domain::signer::VoucherSigner;
pub use ports::inbound::VoucherVerificationApi;
pub use ports::outbound::SignerRecovery;
pub use service::VoucherVerifier;
