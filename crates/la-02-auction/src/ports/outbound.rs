//! # Driven Ports (SPI - Outbound)
//!
//! Collaborators the auction depends on. Calls into them are the only points
//! where control leaves the engine during an operation; the service updates
//! its own state before making them.

use crate::errors::{AssetError, TransferError};
use crate::events::AuctionEvent;
use shared_types::{Address, Timestamp, U256};

/// Time source.
pub trait Clock {
    /// Current time in seconds since the Unix epoch.
    fn now(&self) -> Timestamp;
}

/// Asset ownership ledger (mint/transfer primitives).
pub trait AssetIssuer {
    /// Mint `asset_id` with `metadata_uri` owned by `owner`.
    fn create(&mut self, owner: Address, asset_id: U256, metadata_uri: &str)
        -> Result<(), AssetError>;

    /// Move `asset_id` from `from` to `to`.
    fn transfer(&mut self, from: Address, to: Address, asset_id: U256) -> Result<(), AssetError>;
}

/// Moves funds out of escrow custody.
pub trait FundsTransfer {
    /// Send `amount` to `recipient`.
    fn send(&mut self, recipient: Address, amount: U256) -> Result<(), TransferError>;
}

/// Receives the notifications of successful operations.
pub trait EventSink {
    /// Publish one event. Events of a call arrive in emission order.
    fn publish(&mut self, event: AuctionEvent);
}
