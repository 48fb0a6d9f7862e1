//! # Ports Layer
//!
//! - **Inbound (Driving)**: `AuctionApi`, what participants call
//! - **Outbound (Driven)**: clock, asset issuer, funds transfer and event sink

pub mod inbound;
pub mod outbound;
