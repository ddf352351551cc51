// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Textual fallback for placeholder phrases left as bare text

use regex::Regex;
use std::sync::OnceLock;

/// Applied in order; the long form must run before its suffixes
const BOILERPLATE_PATTERNS: [&str; 4] = [
    r"(?i)exemple d[’']utilisation\s+manquant\.?\s*\(ajouter\)",
    r"(?i)manquant\.?\s*\(ajouter\)",
    r"(?i)manquant\.\s*\(\s*\)",
    r"(?i)manquant\s*\(\s*\)",
];

fn boilerplate_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        BOILERPLATE_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("boilerplate pattern is valid"))
            .collect()
    })
}

/// Remove "… manquant (ajouter)" style placeholders from serialized markup
pub fn strip_boilerplate(html: &str) -> String {
    boilerplate_patterns()
        .iter()
        .fold(html.to_string(), |text, pattern| {
            pattern.replace_all(&text, "").into_owned()
        })
}
