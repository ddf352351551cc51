// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod dictionary;
pub mod expression;
pub mod render;
pub mod sanitize;
pub mod store;

pub use dictionary::{
    DictionarySource, ExpressionConfig, ExpressionError, ExpressionListCache, WiktionaryClient,
};
pub use expression::{ExpressionService, ShowOutcome};
pub use render::{OutputSurface, Presenter, ViewState};
pub use sanitize::clean_definition_html;
pub use store::{FileStore, KeyValueStore, MemoryStore};
