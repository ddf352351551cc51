// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Dictionary access: category listing, page fetching, list caching
//!
//! ## Architecture
//!
//! ```text
//! ExpressionListCache ──miss──→ DictionarySource::fetch_all_expressions
//!        │                              (one request, cmlimit=500)
//!        └──hit──→ KeyValueStore["expressionsAll"]
//!
//! DictionarySource::fetch_full_page(title) → raw HTML
//! ```

pub mod config;
pub mod list_cache;
pub mod source;
pub mod types;

pub use config::ExpressionConfig;
pub use list_cache::ExpressionListCache;
pub use source::{DictionarySource, WiktionaryClient};
pub use types::ExpressionError;
