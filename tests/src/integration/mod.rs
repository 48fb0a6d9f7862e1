//! # Integration Tests
//!
//! End-to-end auction flows: voucher signed by LA-01, bids escrowed and
//! settled by LA-02, side effects observed through the in-memory adapters.

pub mod flows;
