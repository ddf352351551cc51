// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Persistent key-value store
//!
//! A string-keyed, string-valued slot that survives restarts. The file
//! backend keeps every key in one JSON object; the memory backend is used
//! by tests and `--ephemeral` runs.

pub mod file;
pub mod memory;

use anyhow::Result;
use async_trait::async_trait;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Capability interface for the persistent cache
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; returns whether it was present
    async fn remove(&self, key: &str) -> Result<bool>;
}
