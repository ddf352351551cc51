// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for the dictionary pipeline

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while fetching expressions from the dictionary service
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ExpressionError {
    /// Request could not complete (offline, timeout, refused connection)
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("HTTP {status} for: {url}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Requested URL
        url: String,
    },

    /// Response body was received but the expected fields are missing
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The category listing returned no members
    #[error("No expressions available")]
    EmptyList,
}

impl ExpressionError {
    /// True for failures where the request never produced a usable response
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_) | Self::HttpStatus { .. })
    }
}

impl From<reqwest::Error> for ExpressionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::MalformedResponse(e.to_string())
        } else {
            Self::Network(e.to_string())
        }
    }
}

/// `action=query&list=categorymembers` envelope
#[derive(Debug, Deserialize)]
pub(crate) struct CategoryMembersResponse {
    pub query: CategoryMembersQuery,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryMembersQuery {
    pub categorymembers: Vec<CategoryMember>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CategoryMember {
    pub title: String,
}

/// `action=parse&prop=text` envelope
#[derive(Debug, Deserialize)]
pub(crate) struct ParseResponse {
    pub parse: ParsedPage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ParsedPage {
    pub text: ParsedText,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ParsedText {
    #[serde(rename = "*")]
    pub html: String,
}
