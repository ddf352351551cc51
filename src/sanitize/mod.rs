// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Definition HTML cleaning
//!
//! Wiktionary pages rendered through `action=parse` carry editing chrome
//! (section edit links, citation markers, inflection tables) and French
//! "exemple d'utilisation manquant" placeholders. Cleaning runs in two
//! passes: structural removal on the parsed tree, then textual removal of
//! leftover placeholder phrases on the serialized markup.

mod patterns;

use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

pub use patterns::strip_boilerplate;

/// Container wrapping the rendered page content
const CONTENT_SELECTOR: &str = ".mw-parser-output";

/// Removed wherever they appear inside the content container
const UNWANTED_SELECTORS: [&str; 4] = [".mw-editsection", "table", ".reference", "sup"];

/// Clean the raw HTML of a Wiktionary page
///
/// Returns the inner HTML of the `.mw-parser-output` container after
/// removing editing chrome and missing-example placeholders. When the
/// container is absent the input is returned unchanged.
pub fn clean_definition_html(raw_html: &str) -> String {
    let mut document = Html::parse_document(raw_html);

    let content_id = match find_content(&document) {
        Some(id) => id,
        None => {
            debug!("No {} container, leaving markup untouched", CONTENT_SELECTOR);
            return raw_html.to_string();
        }
    };

    for selector in UNWANTED_SELECTORS {
        let ids = select_ids(&document, content_id, selector, |_| true);
        detach_all(&mut document, ids);
    }

    let links = select_ids(&document, content_id, "a", |link| {
        let href = link.value().attr("href").unwrap_or("");
        mentions_usage_example(&visible_text(link)) || href.contains("action=edit")
    });
    detach_all(&mut document, links);

    let emphasis = select_ids(&document, content_id, "i, em", |el| {
        visible_text(el).contains("manquant")
    });
    detach_all(&mut document, emphasis);

    let inner = document
        .tree
        .get(content_id)
        .and_then(ElementRef::wrap)
        .map(|content| content.inner_html())
        .unwrap_or_default();

    strip_boilerplate(&inner).trim().to_string()
}

fn find_content(document: &Html) -> Option<NodeId> {
    let selector = Selector::parse(CONTENT_SELECTOR).ok()?;
    document.select(&selector).next().map(|el| el.id())
}

/// Ids of the elements under `root` matching `selector` and `keep`
fn select_ids<F>(document: &Html, root: NodeId, selector: &str, keep: F) -> Vec<NodeId>
where
    F: Fn(&ElementRef) -> bool,
{
    let selector = match Selector::parse(selector) {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };
    let root = match document.tree.get(root).and_then(ElementRef::wrap) {
        Some(el) => el,
        None => return Vec::new(),
    };

    root.select(&selector)
        .filter(|el| keep(el))
        .map(|el| el.id())
        .collect()
}

fn detach_all(document: &mut Html, ids: Vec<NodeId>) {
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Trimmed, lowercased text content of an element
fn visible_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_lowercase()
}

/// Matches both the typographic and the ASCII apostrophe
fn mentions_usage_example(text: &str) -> bool {
    text.contains("exemple d’utilisation") || text.contains("exemple d'utilisation")
}
