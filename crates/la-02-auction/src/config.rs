//! # Auction Configuration
//!
//! Construction-time parameters of one auction deployment.
//!
//! # Example
//!
//! ```ignore
//! let config = AuctionConfig::new(issuer, 120)
//!     .with_chain_id(31337)
//!     .with_verifying_contract(auction_address);
//! config.validate()?;
//! ```

use crate::errors::ConfigError;
use la_01_voucher_verification::{VoucherDomain, DEFAULT_DOMAIN_NAME, DEFAULT_DOMAIN_VERSION};
use serde::{Deserialize, Serialize};
use shared_types::Address;
use std::env;

/// Default chain id (local development network).
pub const DEFAULT_CHAIN_ID: u64 = 31337;

/// Default identity of the auction instance in voucher domains.
pub const DEFAULT_VERIFYING_CONTRACT: Address = Address::new([
    0x5F, 0xbD, 0xB2, 0x31, 0x56, 0x78, 0xaf, 0xec, 0xb3, 0x67, 0xf0, 0x32, 0xd9, 0x3F, 0x64, 0x2f,
    0x64, 0x18, 0x0a, 0xa3,
]);

/// Auction configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionConfig {
    /// Identity whose vouchers are accepted and who receives the winning bid.
    pub issuer: Address,
    /// Seconds from construction to the bidding deadline.
    pub bidding_duration_secs: u64,
    /// Chain id mixed into the voucher domain.
    pub chain_id: u64,
    /// Identity of this auction instance mixed into the voucher domain.
    pub verifying_contract: Address,
    /// Voucher domain name.
    pub domain_name: String,
    /// Voucher domain version.
    pub domain_version: String,
    /// Whether `auction_end` may finalize before the deadline.
    pub allow_early_close: bool,
}

impl AuctionConfig {
    /// Configuration with default domain parameters.
    #[must_use]
    pub fn new(issuer: Address, bidding_duration_secs: u64) -> Self {
        Self {
            issuer,
            bidding_duration_secs,
            chain_id: DEFAULT_CHAIN_ID,
            verifying_contract: DEFAULT_VERIFYING_CONTRACT,
            domain_name: DEFAULT_DOMAIN_NAME.to_string(),
            domain_version: DEFAULT_DOMAIN_VERSION.to_string(),
            allow_early_close: true,
        }
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bidding_duration_secs == 0 {
            return Err(ConfigError::ZeroBiddingDuration);
        }
        if self.issuer.is_zero() {
            return Err(ConfigError::ZeroIssuer);
        }
        if self.verifying_contract.is_zero() {
            return Err(ConfigError::ZeroVerifyingContract);
        }
        Ok(())
    }

    /// The voucher domain this auction verifies against.
    #[must_use]
    pub fn voucher_domain(&self) -> VoucherDomain {
        VoucherDomain::new(self.chain_id, self.verifying_contract)
            .with_name(self.domain_name.clone())
            .with_version(self.domain_version.clone())
    }

    /// Builder-style method to set the chain id
    #[must_use]
    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    /// Builder-style method to set the verifying contract
    #[must_use]
    pub fn with_verifying_contract(mut self, contract: Address) -> Self {
        self.verifying_contract = contract;
        self
    }

    /// Builder-style method to set the voucher domain name and version
    #[must_use]
    pub fn with_domain(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.domain_name = name.into();
        self.domain_version = version.into();
        self
    }

    /// Builder-style method to allow or forbid finalizing before the deadline
    #[must_use]
    pub fn with_early_close(mut self, allow: bool) -> Self {
        self.allow_early_close = allow;
        self
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `LA_ISSUER`: issuer address, hex (required)
    /// - `LA_BIDDING_DURATION_SECS`: bidding window (required)
    /// - `LA_CHAIN_ID`: chain id (default: 31337)
    /// - `LA_VERIFYING_CONTRACT`: auction identity, hex
    /// - `LA_DOMAIN_NAME` / `LA_DOMAIN_VERSION`: voucher domain
    /// - `LA_ALLOW_EARLY_CLOSE`: `true`/`false` (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        let issuer = required("LA_ISSUER")?
            .parse::<Address>()
            .map_err(|e| invalid("LA_ISSUER", e))?;
        let duration = required("LA_BIDDING_DURATION_SECS")?
            .parse::<u64>()
            .map_err(|e| invalid("LA_BIDDING_DURATION_SECS", e))?;

        let mut config = Self::new(issuer, duration);

        if let Ok(v) = env::var("LA_CHAIN_ID") {
            config.chain_id = v.parse().map_err(|e| invalid("LA_CHAIN_ID", e))?;
        }
        if let Ok(v) = env::var("LA_VERIFYING_CONTRACT") {
            config.verifying_contract = v.parse().map_err(|e| invalid("LA_VERIFYING_CONTRACT", e))?;
        }
        if let Ok(v) = env::var("LA_DOMAIN_NAME") {
            config.domain_name = v;
        }
        if let Ok(v) = env::var("LA_DOMAIN_VERSION") {
            config.domain_version = v;
        }
        if let Ok(v) = env::var("LA_ALLOW_EARLY_CLOSE") {
            config.allow_early_close = v.to_lowercase() != "false" && v != "0";
        }

        config.validate()?;
        Ok(config)
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    env::var(var).map_err(|_| ConfigError::MissingEnv(var))
}

fn invalid(var: &'static str, err: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidEnv {
        var,
        reason: err.to_string(),
    }
}
