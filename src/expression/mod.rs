// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Random expression selection
//!
//! ```text
//! show_random_expression
//!   → ExpressionListCache (store hit, or one listing request)
//!   → uniform pick
//!   → DictionarySource::fetch_full_page
//!   → Presenter (clean + compose + install)
//!   ↘ any error → Presenter::render_error
//! ```

pub mod service;

pub use service::{ExpressionService, ShowOutcome};
