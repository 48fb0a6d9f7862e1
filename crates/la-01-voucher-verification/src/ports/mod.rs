//! # Ports Layer
//!
//! Trait definitions for the hexagonal architecture.
//! - **Inbound (Driving)**: API that the auction engine calls
//! - **Outbound (Driven)**: The signature scheme this subsystem relies on

pub mod inbound;
pub mod outbound;
