//! # In-Memory Asset Registry
//!
//! Minimal ownership ledger standing in for the external asset issuer.

use crate::errors::AssetError;
use crate::ports::outbound::AssetIssuer;
use parking_lot::RwLock;
use shared_types::{Address, U256};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default)]
struct Registry {
    owners: HashMap<U256, Address>,
    uris: HashMap<U256, String>,
    fail_next: Option<AssetError>,
    fail_transfer: Option<AssetError>,
}

/// In-memory asset ledger. Clones share the same registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssetRegistry {
    inner: Arc<RwLock<Registry>>,
}

impl InMemoryAssetRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current owner of `asset_id`.
    #[must_use]
    pub fn owner_of(&self, asset_id: U256) -> Option<Address> {
        self.inner.read().owners.get(&asset_id).copied()
    }

    /// Metadata reference `asset_id` was minted with.
    #[must_use]
    pub fn token_uri(&self, asset_id: U256) -> Option<String> {
        self.inner.read().uris.get(&asset_id).cloned()
    }

    /// Number of minted assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().owners.len()
    }

    /// Whether nothing has been minted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make the next `create` or `transfer` fail with `error`.
    pub fn fail_next(&self, error: AssetError) {
        self.inner.write().fail_next = Some(error);
    }

    /// Make the next `transfer` fail with `error`; mints still succeed.
    pub fn fail_next_transfer(&self, error: AssetError) {
        self.inner.write().fail_transfer = Some(error);
    }
}

impl AssetIssuer for InMemoryAssetRegistry {
    fn create(
        &mut self,
        owner: Address,
        asset_id: U256,
        metadata_uri: &str,
    ) -> Result<(), AssetError> {
        let mut registry = self.inner.write();
        if let Some(err) = registry.fail_next.take() {
            return Err(err);
        }
        if registry.owners.contains_key(&asset_id) {
            return Err(AssetError::AlreadyExists(asset_id));
        }

        registry.owners.insert(asset_id, owner);
        registry.uris.insert(asset_id, metadata_uri.to_string());
        debug!(%asset_id, %owner, "[la-02] asset minted");
        Ok(())
    }

    fn transfer(&mut self, from: Address, to: Address, asset_id: U256) -> Result<(), AssetError> {
        let mut registry = self.inner.write();
        if let Some(err) = registry.fail_next.take().or_else(|| registry.fail_transfer.take()) {
            return Err(err);
        }
        let owner = registry
            .owners
            .get_mut(&asset_id)
            .ok_or(AssetError::NotFound(asset_id))?;
        if *owner != from {
            return Err(AssetError::NotOwner {
                asset_id,
                owner: *owner,
                from,
            });
        }

        *owner = to;
        debug!(%asset_id, %from, %to, "[la-02] asset transferred");
        Ok(())
    }
}
