// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Dictionary source trait and the Wiktionary HTTP client

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use super::config::ExpressionConfig;
use super::types::{CategoryMembersResponse, ExpressionError, ParseResponse};

/// Remote source of dictionary entries
///
/// Implementations issue at most one request per call; nothing is retried
/// and errors propagate to the caller untouched.
#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// List every entry identifier of the configured category
    async fn fetch_all_expressions(&self) -> Result<Vec<String>, ExpressionError>;

    /// Fetch the rendered HTML body of one entry
    async fn fetch_full_page(&self, title: &str) -> Result<String, ExpressionError>;

    /// Source name for logging
    fn name(&self) -> &'static str;
}

/// MediaWiki `api.php` client
pub struct WiktionaryClient {
    client: Client,
    api_url: String,
    category: String,
    list_limit: u32,
}

impl WiktionaryClient {
    /// Create a new client from configuration
    pub fn new(config: &ExpressionConfig) -> Result<Self, ExpressionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(format!(
                "wiktionary-expressions/{} (rust; {})",
                env!("CARGO_PKG_VERSION"),
                std::env::consts::OS
            ))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            category: config.category.clone(),
            list_limit: config.list_limit,
        })
    }

    /// GET `api_url` with the given query and return the body text
    async fn get_json_text(&self, query: &[(&str, &str)]) -> Result<String, ExpressionError> {
        let response = self
            .client
            .get(&self.api_url)
            .query(query)
            .query(&[("format", "json"), ("origin", "*")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExpressionError::HttpStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl DictionarySource for WiktionaryClient {
    async fn fetch_all_expressions(&self) -> Result<Vec<String>, ExpressionError> {
        debug!("Listing category members of {}", self.category);

        let limit = self.list_limit.to_string();
        let body = self
            .get_json_text(&[
                ("action", "query"),
                ("list", "categorymembers"),
                ("cmtitle", self.category.as_str()),
                ("cmlimit", limit.as_str()),
            ])
            .await?;

        let titles = parse_category_members(&body)?;
        info!("Fetched {} expressions from {}", titles.len(), self.category);
        Ok(titles)
    }

    async fn fetch_full_page(&self, title: &str) -> Result<String, ExpressionError> {
        debug!("Fetching page: {}", title);

        let body = self
            .get_json_text(&[("action", "parse"), ("page", title), ("prop", "text")])
            .await?;

        let html = parse_page_html(&body)?;
        debug!("Fetched {} bytes of markup for {}", html.len(), title);
        Ok(html)
    }

    fn name(&self) -> &'static str {
        "wiktionary"
    }
}

/// Extract `query.categorymembers[].title` from a listing response
pub fn parse_category_members(body: &str) -> Result<Vec<String>, ExpressionError> {
    let response: CategoryMembersResponse = serde_json::from_str(body)
        .map_err(|e| ExpressionError::MalformedResponse(format!("category members: {}", e)))?;

    Ok(response
        .query
        .categorymembers
        .into_iter()
        .map(|member| member.title)
        .collect())
}

/// Extract `parse.text["*"]` from a page-render response
pub fn parse_page_html(body: &str) -> Result<String, ExpressionError> {
    let response: ParseResponse = serde_json::from_str(body)
        .map_err(|e| ExpressionError::MalformedResponse(format!("parsed page: {}", e)))?;

    Ok(response.parse.text.html)
}
