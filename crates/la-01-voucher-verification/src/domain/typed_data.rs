//! # Typed-Data Encoding
//!
//! Reconstructs the exact digest an issuer signs for a voucher, in the
//! EIP-712 layout:
//!
//! ```text
//! separator   = keccak(DOMAIN_TYPEHASH ‖ keccak(name) ‖ keccak(version) ‖ chainId ‖ verifyingContract)
//! struct_hash = keccak(VOUCHER_TYPEHASH ‖ assetId ‖ keccak(metadataUri) ‖ minimumPrice)
//! digest      = keccak(0x19 ‖ 0x01 ‖ separator ‖ struct_hash)
//! ```
//!
//! Every integer is a 32-byte big-endian word, addresses are left-padded.

use super::ecdsa::keccak256;
use super::entities::VoucherDomain;
use shared_types::{Hash, U256};

/// Canonical type string of the signing domain.
pub const DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// Canonical type string of the voucher struct.
pub const VOUCHER_TYPE: &str = "Voucher(uint256 assetId,string metadataUri,uint256 minimumPrice)";

/// Encode a `U256` as a 32-byte big-endian word.
#[must_use]
pub fn u256_word(value: U256) -> [u8; 32] {
    let mut word = [0u8; 32];
    value.to_big_endian(&mut word);
    word
}

/// Hash of the domain separator inputs.
#[must_use]
pub fn domain_separator(domain: &VoucherDomain) -> Hash {
    let mut encoded = Vec::with_capacity(32 * 5);
    encoded.extend_from_slice(&keccak256(DOMAIN_TYPE.as_bytes()));
    encoded.extend_from_slice(&keccak256(domain.name.as_bytes()));
    encoded.extend_from_slice(&keccak256(domain.version.as_bytes()));
    encoded.extend_from_slice(&u256_word(U256::from(domain.chain_id)));
    encoded.extend_from_slice(&domain.verifying_contract.to_word());
    keccak256(&encoded)
}

/// Hash of the signed voucher fields (the signature itself is not covered).
#[must_use]
pub fn voucher_struct_hash(asset_id: U256, metadata_uri: &str, minimum_price: U256) -> Hash {
    let mut encoded = Vec::with_capacity(32 * 4);
    encoded.extend_from_slice(&keccak256(VOUCHER_TYPE.as_bytes()));
    encoded.extend_from_slice(&u256_word(asset_id));
    encoded.extend_from_slice(&keccak256(metadata_uri.as_bytes()));
    encoded.extend_from_slice(&u256_word(minimum_price));
    keccak256(&encoded)
}

/// The digest the issuer signs.
#[must_use]
pub fn voucher_digest(separator: &Hash, struct_hash: &Hash) -> Hash {
    let mut encoded = [0u8; 66];
    encoded[0] = 0x19;
    encoded[1] = 0x01;
    encoded[2..34].copy_from_slice(separator);
    encoded[34..].copy_from_slice(struct_hash);
    keccak256(&encoded)
}
