// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! The mount point holding the currently displayed markup

use serde::{Deserialize, Serialize};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

use super::page::DOCUMENT_STYLE;

/// Per-surface view state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewState {
    Idle,
    Loading,
    Displayed,
    Errored,
}

/// Point-in-time view of the surface for health reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceSnapshot {
    pub state: ViewState,
    pub generation: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

struct SurfaceInner {
    content: String,
    state: ViewState,
    generation: u64,
    title: Option<String>,
    // Set once the installed content has been served to a client
    viewed: bool,
}

/// Output surface, fully replaced on every install
///
/// Each load takes a generation number from [`OutputSurface::begin_load`].
/// Only the most recently issued generation may install content, so a slow
/// response finishing after a newer reload is dropped.
pub struct OutputSurface {
    inner: RwLock<SurfaceInner>,
}

impl OutputSurface {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(SurfaceInner {
                content: String::new(),
                state: ViewState::Idle,
                generation: 0,
                title: None,
                viewed: false,
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SurfaceInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SurfaceInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Enter `Loading` and return the generation owning the next install
    pub fn begin_load(&self) -> u64 {
        let mut inner = self.write();
        inner.generation += 1;
        inner.state = ViewState::Loading;
        inner.generation
    }

    /// Replace the surface content if `generation` is still current
    ///
    /// Returns false when a newer load has started since.
    pub fn install(
        &self,
        generation: u64,
        content: String,
        state: ViewState,
        title: Option<String>,
    ) -> bool {
        let mut inner = self.write();
        if generation != inner.generation {
            debug!(
                "Dropping stale render (generation {}, current {})",
                generation, inner.generation
            );
            return false;
        }
        inner.content = content;
        inner.state = state;
        inner.title = title;
        inner.viewed = false;
        true
    }

    /// Record that the current content was served; returns whether it
    /// had already been served before this call
    pub fn mark_viewed(&self) -> bool {
        let mut inner = self.write();
        std::mem::replace(&mut inner.viewed, true)
    }

    /// Markup currently mounted
    pub fn content(&self) -> String {
        self.read().content.clone()
    }

    pub fn state(&self) -> ViewState {
        self.read().state
    }

    pub fn generation(&self) -> u64 {
        self.read().generation
    }

    pub fn snapshot(&self) -> SurfaceSnapshot {
        let inner = self.read();
        SurfaceSnapshot {
            state: inner.state,
            generation: inner.generation,
            title: inner.title.clone(),
        }
    }

    /// Full HTML document with the current content inside `#app`
    pub fn document(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="fr">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Expression Russe</title>
    <script src="https://cdn.tailwindcss.com?plugins=typography"></script>
    <style>
{style}
    </style>
  </head>
  <body>
    <div id="app">
{content}
    </div>
  </body>
</html>
"#,
            style = DOCUMENT_STYLE,
            content = self.content()
        )
    }
}

impl Default for OutputSurface {
    fn default() -> Self {
        Self::new()
    }
}
