//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::entities::Voucher;
use crate::domain::errors::SignatureError;
use shared_types::{Address, Hash};

/// Voucher Verification API.
///
/// Implementations are side-effect free: verifying the same voucher any number
/// of times yields the same result.
pub trait VoucherVerificationApi: Send + Sync {
    /// Recover the voucher signer and check it is the authorized issuer.
    ///
    /// # Errors
    /// * `SignatureError::SignerMismatch` - a valid signature by someone else
    /// * any other variant - the signature is malformed or unrecoverable
    fn verify(&self, voucher: &Voucher) -> Result<Address, SignatureError>;

    /// The digest that was (or should have been) signed for this voucher.
    fn digest(&self, voucher: &Voucher) -> Hash;

    /// The domain separator this verifier binds vouchers to.
    fn domain_separator(&self) -> Hash;

    /// The authorized issuer.
    fn issuer(&self) -> Address;
}
