// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page templates and the presenter installing them

use std::sync::Arc;
use tracing::{debug, warn};

use super::icons::Icon;
use super::surface::{OutputSurface, ViewState};
use crate::sanitize::clean_definition_html;

const TITLE_ICON_CLASS: &str = "w-6 h-6 text-indigo-300 inline-block mr-2 -mt-1 drop-shadow-glow";
const RELOAD_ICON_CLASS: &str = "w-4 h-4 text-white inline-block mr-2 -mt-1";

/// Route the reload control posts to
pub const RELOAD_ACTION: &str = "/reload";

/// Styles the utility classes above don't cover
pub const DOCUMENT_STYLE: &str = r#"      @keyframes fadeIn { from { opacity: 0; transform: translateY(8px); } to { opacity: 1; transform: none; } }
      .animate-fadeIn { animation: fadeIn 0.6s ease-out both; }
      .drop-shadow-glow { filter: drop-shadow(0 0 6px #6366f1); }"#;

/// Escape text for interpolation into HTML content or attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Compose the expression layout around already-cleaned definition markup
pub fn compose_expression(title: &str, definition_html: &str) -> String {
    let icon_title = Icon::BookOpen.render(TITLE_ICON_CLASS);
    let icon_reload = Icon::RefreshCcw.render(RELOAD_ICON_CLASS);

    format!(
        r#"<div class="min-h-screen bg-gradient-to-br from-black via-gray-900 to-black flex items-center justify-center px-4 py-6 sm:px-6 sm:py-10">
  <div class="w-full max-w-3xl max-h-[90vh] overflow-y-auto scroll-smooth rounded-3xl border border-gray-700 shadow-[0_0_60px_rgba(99,102,241,0.3)] bg-gradient-to-tr from-gray-800/60 to-gray-900/60 backdrop-blur-md p-6 sm:p-8 md:p-10 animate-fadeIn flex flex-col">

    <h1 class="text-3xl sm:text-4xl md:text-5xl font-extrabold text-center text-white mb-4 drop-shadow-[0_0_10px_#6366f1] flex items-center justify-center gap-3">
      {icon_title}
      <span class="tracking-tight animate-pulse">Expression Russe</span>
    </h1>

    <h2 class="text-xl sm:text-2xl md:text-3xl font-semibold text-center text-indigo-300 mb-6 tracking-wide uppercase drop-shadow">
      {title}
    </h2>

    <div class="prose prose-invert max-w-none text-white/90 mb-8 text-justify leading-relaxed">
      {definition}
    </div>

    <form method="post" action="{action}" class="flex justify-center">
      <button id="reload" type="submit"
        class="px-6 py-3 rounded-full bg-indigo-600 hover:bg-indigo-500 text-white font-semibold shadow-xl ring-1 ring-indigo-400/30 transition-all duration-300 hover:scale-105 hover:shadow-[0_0_20px_#6366f1] flex items-center gap-2">
        {icon_reload} Voir une autre expression
      </button>
    </form>

    <footer class="mt-8 text-center text-sm text-gray-500 tracking-wider opacity-70 select-none">
      MARTIN. 2025
    </footer>
  </div>
</div>"#,
        icon_title = icon_title,
        title = escape_html(title),
        definition = definition_html,
        action = RELOAD_ACTION,
        icon_reload = icon_reload
    )
}

/// Compose the fixed error layout
pub fn compose_error(description: &str) -> String {
    format!(
        r#"<div class="min-h-screen flex items-center justify-center bg-red-900 text-red-400 font-semibold p-6 text-center">
  Erreur de chargement : {description}
</div>"#,
        description = escape_html(description)
    )
}

/// Cleans definitions and installs composed layouts on the output surface
#[derive(Clone)]
pub struct Presenter {
    surface: Arc<OutputSurface>,
}

impl Presenter {
    pub fn new(surface: Arc<OutputSurface>) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &Arc<OutputSurface> {
        &self.surface
    }

    /// Clean `raw_html` and display it under `title`
    ///
    /// Returns false when `generation` was superseded and nothing changed.
    pub fn render_expression(&self, generation: u64, title: &str, raw_html: &str) -> bool {
        let definition = clean_definition_html(raw_html);
        debug!(
            "Rendering '{}' ({} bytes raw, {} bytes cleaned)",
            title,
            raw_html.len(),
            definition.len()
        );

        let page = compose_expression(title, &definition);
        self.surface.install(
            generation,
            page,
            ViewState::Displayed,
            Some(title.to_string()),
        )
    }

    /// Replace the surface with the error layout
    pub fn render_error(&self, generation: u64, description: &str) -> bool {
        warn!("Rendering error layout: {}", description);
        self.surface
            .install(generation, compose_error(description), ViewState::Errored, None)
    }
}
