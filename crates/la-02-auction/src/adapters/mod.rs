//! # Adapters Layer
//!
//! Implementations of the driven ports.
//!
//! - `clock`: wall clock and a settable clock for tests
//! - `asset_registry`: in-memory asset ownership ledger
//! - `funds`: in-memory payout recorder
//! - `event_sink`: recording sink and a `tracing` sink
//!
//! The in-memory adapters are cheap clonable handles over shared state so a
//! test can keep one handle while the service owns another.

pub mod asset_registry;
pub mod clock;
pub mod event_sink;
pub mod funds;

pub use asset_registry::InMemoryAssetRegistry;
pub use clock::{ManualClock, SystemClock};
pub use event_sink::{EventLog, TracingEventSink};
pub use funds::InMemoryFunds;
