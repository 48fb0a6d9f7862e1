//! # secp256k1 Recovery Adapter
//!
//! Default `SignerRecovery` backed by k256 (ecrecover semantics plus EIP-2).

use crate::domain::ecdsa;
use crate::domain::entities::EcdsaSignature;
use crate::domain::errors::SignatureError;
use crate::ports::outbound::SignerRecovery;
use shared_types::{Address, Hash};

/// Ethereum-style ECDSA public key recovery.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Recovery;

impl SignerRecovery for Secp256k1Recovery {
    fn recover(&self, digest: &Hash, signature: &EcdsaSignature) -> Result<Address, SignatureError> {
        ecdsa::recover_address(digest, &signature.r, &signature.s, signature.v)
    }
}
