// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Persistent caching of the expression list
//!
//! The whole list is stored as one JSON array under a single key. Once
//! written it is reused until the store is cleared; there is no TTL.

use std::sync::Arc;
use tracing::{debug, info, warn};

use super::source::DictionarySource;
use super::types::ExpressionError;
use crate::store::KeyValueStore;

/// Wraps a [`DictionarySource`] with a persistent list cache
pub struct ExpressionListCache {
    source: Arc<dyn DictionarySource>,
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl ExpressionListCache {
    pub fn new(
        source: Arc<dyn DictionarySource>,
        store: Arc<dyn KeyValueStore>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            source,
            store,
            key: key.into(),
        }
    }

    /// Return the cached list, or fetch and cache it on a miss
    ///
    /// Store failures never fail the read path: an unreadable or corrupt
    /// entry counts as a miss, and a failed write is logged and skipped.
    pub async fn fetch_expressions_list(&self) -> Result<Vec<String>, ExpressionError> {
        if let Some(cached) = self.read_cached().await {
            debug!("Expression list cache hit ({} entries)", cached.len());
            return Ok(cached);
        }

        debug!("Expression list cache miss, asking {}", self.source.name());
        let all = self.source.fetch_all_expressions().await?;

        match serde_json::to_string(&all) {
            Ok(json) => {
                if let Err(e) = self.store.set(&self.key, &json).await {
                    warn!("Failed to cache expression list under '{}': {}", self.key, e);
                } else {
                    info!("Cached {} expressions under '{}'", all.len(), self.key);
                }
            }
            Err(e) => warn!("Failed to serialize expression list: {}", e),
        }

        Ok(all)
    }

    /// Drop the cached list so the next read goes to the network
    pub async fn clear(&self) -> anyhow::Result<bool> {
        self.store.remove(&self.key).await
    }

    /// Store key used for the list
    pub fn key(&self) -> &str {
        &self.key
    }

    async fn read_cached(&self) -> Option<Vec<String>> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return None,
            Err(e) => {
                warn!("Failed to read cached expression list: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(list) => Some(list),
            Err(e) => {
                warn!("Ignoring corrupt cached expression list: {}", e);
                None
            }
        }
    }
}
