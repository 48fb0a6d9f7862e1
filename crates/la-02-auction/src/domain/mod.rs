//! # Domain Layer
//!
//! Pure auction logic: lifecycle state, escrow bookkeeping and the invariants
//! tying them together. No I/O.

pub mod entities;
pub mod invariants;
pub mod ledger;

pub use entities::{
    AuctionOutcome, AuctionPhase, AuctionState, BidReceipt, SettlementProgress,
};
pub use invariants::{check_all_invariants, InvariantViolation};
pub use ledger::EscrowLedger;
