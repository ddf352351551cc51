// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Inline Lucide icons

/// Icons used by the expression page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    BookOpen,
    RefreshCcw,
}

impl Icon {
    fn slug(self) -> &'static str {
        match self {
            Icon::BookOpen => "book-open",
            Icon::RefreshCcw => "refresh-ccw",
        }
    }

    fn paths(self) -> &'static str {
        match self {
            Icon::BookOpen => concat!(
                r#"<path d="M12 7v14"></path>"#,
                r#"<path d="M3 18a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1h5a4 4 0 0 1 4 4 4 4 0 0 1 4-4h5a1 1 0 0 1 1 1v13a1 1 0 0 1-1 1h-6a3 3 0 0 0-3 3 3 3 0 0 0-3-3z"></path>"#,
            ),
            Icon::RefreshCcw => concat!(
                r#"<path d="M21 12a9 9 0 0 0-9-9 9.75 9.75 0 0 0-6.74 2.74L3 8"></path>"#,
                r#"<path d="M3 3v5h5"></path>"#,
                r#"<path d="M3 12a9 9 0 0 0 9 9 9.75 9.75 0 0 0 6.74-2.74L21 16"></path>"#,
                r#"<path d="M16 16h5v5"></path>"#,
            ),
        }
    }

    /// Render the icon as embeddable SVG markup with extra CSS classes
    pub fn render(self, class: &str) -> String {
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="lucide lucide-{slug} {class}">{paths}</svg>"#,
            slug = self.slug(),
            class = class,
            paths = self.paths()
        )
    }
}
