// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the expression viewer
//!
//! Every default matches the fixed French Wiktionary setup, so the viewer
//! runs without any environment variables.

use std::env;
use std::path::PathBuf;
use url::Url;

/// MediaWiki API endpoint
pub const DEFAULT_API_URL: &str = "https://fr.wiktionary.org/w/api.php";
/// Category whose members are the candidate expressions
pub const DEFAULT_CATEGORY: &str = "Catégorie:Métaphores_en_russe";
/// Key under which the serialized expression list is stored
pub const DEFAULT_CACHE_KEY: &str = "expressionsAll";
/// Maximum members fetched in the single listing request
pub const MAX_CATEGORY_MEMBERS: u32 = 500;

/// Configuration for the expression viewer
#[derive(Debug, Clone)]
pub struct ExpressionConfig {
    /// MediaWiki `api.php` URL (default: fr.wiktionary.org)
    pub api_url: String,
    /// Category listed by the list fetcher
    pub category: String,
    /// `cmlimit` for the listing request (default: 500, capped at 500)
    pub list_limit: u32,
    /// Persistent store key for the expression list
    pub cache_key: String,
    /// Directory holding the persistent store file
    pub data_dir: PathBuf,
    /// Timeout per HTTP request in seconds (default: 10)
    pub request_timeout_secs: u64,
    /// Address the HTTP front-end listens on
    pub listen_addr: String,
}

impl ExpressionConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("WIKTIONARY_API_URL").unwrap_or(defaults.api_url),
            category: env::var("WIKTIONARY_CATEGORY").unwrap_or(defaults.category),
            list_limit: env::var("EXPRESSIONS_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(MAX_CATEGORY_MEMBERS)
                .min(MAX_CATEGORY_MEMBERS),
            cache_key: env::var("EXPRESSIONS_CACHE_KEY").unwrap_or(defaults.cache_key),
            data_dir: env::var("EXPRESSIONS_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            request_timeout_secs: env::var("EXPRESSIONS_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            listen_addr: env::var("EXPRESSIONS_LISTEN_ADDR").unwrap_or(defaults.listen_addr),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.api_url).map_err(|e| format!("Invalid api_url: {}", e))?;
        if !["http", "https"].contains(&url.scheme()) {
            return Err("api_url must use http or https".to_string());
        }
        if self.category.trim().is_empty() {
            return Err("category cannot be empty".to_string());
        }
        if self.list_limit == 0 || self.list_limit > MAX_CATEGORY_MEMBERS {
            return Err(format!(
                "list_limit must be between 1 and {}",
                MAX_CATEGORY_MEMBERS
            ));
        }
        if self.cache_key.is_empty() {
            return Err("cache_key cannot be empty".to_string());
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be at least 1".to_string());
        }
        Ok(())
    }

    /// Path of the persistent store file
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("store.json")
    }
}

impl Default for ExpressionConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            category: DEFAULT_CATEGORY.to_string(),
            list_limit: MAX_CATEGORY_MEMBERS,
            cache_key: DEFAULT_CACHE_KEY.to_string(),
            data_dir: PathBuf::from("./data"),
            request_timeout_secs: 10,
            listen_addr: "127.0.0.1:8080".to_string(),
        }
    }
}
