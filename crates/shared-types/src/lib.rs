//! # Shared Types Crate
//!
//! Primitive types shared by every subsystem of the lazy-mint auction.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: identities, hashes and amounts are defined here
//!   and re-exported by the subsystem crates.
//! - **Ethereum-compatible identities**: an `Address` is the last 20 bytes of
//!   the Keccak-256 hash of an uncompressed secp256k1 public key.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
