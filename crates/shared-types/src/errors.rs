//! # Error Types
//!
//! Errors raised while parsing shared primitives.

use thiserror::Error;

/// Errors that can occur when parsing an `Address` from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressParseError {
    /// The input is not valid hexadecimal.
    #[error("Invalid hex encoding: {0}")]
    InvalidHex(String),

    /// The decoded input is not exactly 20 bytes.
    #[error("Invalid address length: expected 20 bytes, got {0}")]
    InvalidLength(usize),
}
