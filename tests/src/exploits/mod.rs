//! # Exploit Simulations
//!
//! Attempts to bid without a genuine issuer authorization.

pub mod voucher_attacks;
