// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Random expression orchestration
//!
//! Ties the list cache, detail fetcher and presenter together. This is the
//! only place pipeline errors are caught: every failure ends up on the
//! surface as the error layout.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

use crate::dictionary::{
    DictionarySource, ExpressionConfig, ExpressionError, ExpressionListCache, WiktionaryClient,
};
use crate::render::{OutputSurface, Presenter};
use crate::store::KeyValueStore;

/// Result of one `show_random_expression` call
#[derive(Debug, Clone, PartialEq)]
pub enum ShowOutcome {
    /// The expression is now on the surface
    Displayed { title: String },
    /// The error layout is now on the surface
    Errored { description: String },
    /// A newer call started meanwhile; the surface was left to it
    Superseded,
}

/// Picks, fetches and presents random expressions
pub struct ExpressionService {
    source: Arc<dyn DictionarySource>,
    list_cache: ExpressionListCache,
    presenter: Presenter,
    rng: Mutex<StdRng>,
}

impl ExpressionService {
    pub fn new(
        source: Arc<dyn DictionarySource>,
        store: Arc<dyn KeyValueStore>,
        cache_key: impl Into<String>,
        surface: Arc<OutputSurface>,
    ) -> Self {
        let list_cache = ExpressionListCache::new(source.clone(), store, cache_key);
        Self {
            source,
            list_cache,
            presenter: Presenter::new(surface),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Build the service against the configured Wiktionary endpoint
    pub fn from_config(
        config: &ExpressionConfig,
        store: Arc<dyn KeyValueStore>,
        surface: Arc<OutputSurface>,
    ) -> Result<Self, ExpressionError> {
        let source = Arc::new(WiktionaryClient::new(config)?);
        Ok(Self::new(source, store, config.cache_key.clone(), surface))
    }

    /// Replace the random generator, e.g. with a seeded one
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = Mutex::new(rng);
        self
    }

    pub fn surface(&self) -> &Arc<OutputSurface> {
        self.presenter.surface()
    }

    pub fn list_cache(&self) -> &ExpressionListCache {
        &self.list_cache
    }

    /// Uniform index in `[0, len)`, or `None` for an empty list
    pub fn pick_index(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        Some(rng.gen_range(0..len))
    }

    /// List → pick → fetch, returning the chosen title and its raw markup
    pub async fn select_random_expression(&self) -> Result<(String, String), ExpressionError> {
        let expressions = self.list_cache.fetch_expressions_list().await?;
        let index = self
            .pick_index(expressions.len())
            .ok_or(ExpressionError::EmptyList)?;

        let title = expressions[index].clone();
        debug!(
            "Picked expression {}/{}: {}",
            index + 1,
            expressions.len(),
            title
        );

        let raw_html = self.source.fetch_full_page(&title).await?;
        Ok((title, raw_html))
    }

    /// Show a random expression, or the error layout on any failure
    pub async fn show_random_expression(&self) -> ShowOutcome {
        let generation = self.surface().begin_load();

        match self.select_random_expression().await {
            Ok((title, raw_html)) => {
                if self
                    .presenter
                    .render_expression(generation, &title, &raw_html)
                {
                    info!("Displaying expression: {}", title);
                    ShowOutcome::Displayed { title }
                } else {
                    ShowOutcome::Superseded
                }
            }
            Err(e) => {
                warn!("Failed to load expression: {}", e);
                let description = e.to_string();
                if self.presenter.render_error(generation, &description) {
                    ShowOutcome::Errored { description }
                } else {
                    ShowOutcome::Superseded
                }
            }
        }
    }
}
