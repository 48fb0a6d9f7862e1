//! # Outbound Ports (Driven Ports / SPI)
//!
//! The signature scheme is pluggable: anything that can map a digest and a
//! signature to a signer address can back the verifier.

use crate::domain::entities::EcdsaSignature;
use crate::domain::errors::SignatureError;
use shared_types::{Address, Hash};

/// Recovers the identity that produced `signature` over `digest`.
pub trait SignerRecovery: Send + Sync {
    /// Recover the signer address.
    ///
    /// # Errors
    /// Fails when the signature is malformed or no key can be recovered.
    fn recover(&self, digest: &Hash, signature: &EcdsaSignature) -> Result<Address, SignatureError>;
}
