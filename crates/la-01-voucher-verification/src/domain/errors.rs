//! # Signature Errors
//!
//! Error types for voucher signing and verification.

use shared_types::Address;
use thiserror::Error;

/// Errors that can occur while signing or verifying a voucher.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The signature format is invalid (wrong length, zero or out-of-range scalar)
    #[error("Invalid signature format")]
    InvalidFormat,

    /// Signature has high S value (EIP-2 malleability protection)
    #[error("Malleable signature (high S value)")]
    MalleableSignature,

    /// Invalid recovery ID (v must be 0, 1, 27, or 28)
    #[error("Invalid recovery ID: {0}")]
    InvalidRecoveryId(u8),

    /// Failed to recover public key from signature
    #[error("Failed to recover public key")]
    RecoveryFailed,

    /// Recovered signer is not the authorized issuer
    #[error("Signer mismatch: expected {expected:?}, got {actual:?}")]
    SignerMismatch { expected: Address, actual: Address },

    /// The issuer key is not a valid secp256k1 scalar
    #[error("Invalid signing key")]
    InvalidSigningKey,

    /// Producing a signature failed
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}
