//! # Lazy-Mint Auction Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Wired auction + issuer key + shared adapter handles
//! ├── exploits/         # Voucher forgery, replay and malleability attempts
//! └── integration/      # End-to-end auction flows across LA-01 and LA-02
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p la-tests
//!
//! # By category
//! cargo test -p la-tests integration::
//! cargo test -p la-tests exploits::
//!
//! # With logs
//! RUST_LOG=la_02_auction=debug cargo test -p la-tests -- --nocapture
//! ```

pub mod exploits;
pub mod integration;
