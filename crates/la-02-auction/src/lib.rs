//! # LA-02 Auction - Lazy-Mint Auction Engine
//!
//! **Subsystem ID:** 2
//!
//! ## Purpose
//!
//! Runs a single time-boxed auction for one not-yet-minted asset. Bids are
//! authorized by issuer-signed vouchers (LA-01), held in escrow, and settled
//! by minting the asset to the issuer, transferring it to the highest bidder
//! and releasing the winning payment to the issuer. Losing participants pull
//! their escrow back after settlement.
//!
//! ## Lifecycle
//!
//! ```text
//! Open ──(deadline)──▶ Expired
//!   │                     │
//!   └────(auction_end)────┴──▶ Ended (terminal)
//! ```
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement Location |
//! |-----------|---------------------|
//! | Escrow conservation | `domain/invariants.rs` - `check_escrow_conservation()` |
//! | Highest bid consistency | `domain/invariants.rs` - `check_highest_bid_consistency()` |
//! | Single settlement of the winning bid | `domain/invariants.rs` - `check_settlement()` |
//! | Strictly increasing highest bid | `service.rs` - `place_bid()` |
//! | No partial state on collaborator failure | `service.rs` - `settle()`, `withdraw()` |
//! | Committed settlement steps never replayed | `domain/invariants.rs` - `check_settlement_progress()` |
//!
//! ## Outbound Dependencies
//!
//! | Collaborator | Trait | Purpose |
//! |--------------|-------|---------|
//! | LA-01 (Voucher Verification) | `SignerRecovery` | Recover voucher signers |
//! | Asset ledger | `AssetIssuer` | Mint and transfer the asset |
//! | Payment rail | `FundsTransfer` | Pay the issuer and refunds |
//! | Time | `Clock` | Deadline checks |
//! | Observers | `EventSink` | Auction notifications |
//!
//! ## Usage Example
//!
//! ```ignore
//! use la_02_auction::prelude::*;
//!
//! let config = AuctionConfig::new(issuer, 120);
//! let mut auction = AuctionService::new(
//!     config,
//!     SystemClock,
//!     InMemoryAssetRegistry::new(),
//!     InMemoryFunds::new(),
//!     TracingEventSink,
//! )?;
//!
//! auction.bid(alice, voucher, U256::from(4u64))?;
//! let outcome = auction.auction_end()?;
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain
    pub use crate::domain::entities::{
        AuctionOutcome, AuctionPhase, AuctionState, BidReceipt, SettlementProgress,
    };
    pub use crate::domain::invariants::{check_all_invariants, InvariantViolation};
    pub use crate::domain::ledger::EscrowLedger;

    // Ports
    pub use crate::ports::inbound::AuctionApi;
    pub use crate::ports::outbound::{AssetIssuer, Clock, EventSink, FundsTransfer};

    // Events
    pub use crate::events::AuctionEvent;

    // Errors
    pub use crate::errors::{
        AssetError, AuctionError, ConfigError, ErrorCategory, LedgerError, TransferError,
    };

    // Adapters
    pub use crate::adapters::{
        EventLog, InMemoryAssetRegistry, InMemoryFunds, ManualClock, SystemClock,
        TracingEventSink,
    };

    // Configuration and service
    pub use crate::config::AuctionConfig;
    pub use crate::service::{AuctionService, AuctionStats};

    // Shared primitives
    pub use shared_types::{Address, Timestamp, U256};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subsystem ID.
pub const SUBSYSTEM_ID: u8 = 2;

/// Subsystem name.
pub const SUBSYSTEM_NAME: &str = "Auction";

// =============================================================================
// TESTS
// =============================================================================
