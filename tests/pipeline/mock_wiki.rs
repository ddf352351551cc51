// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Local stand-in for the MediaWiki `api.php` endpoint

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub struct MockWiki {
    pub titles: Vec<String>,
    pub pages: HashMap<String, String>,
    /// Answer every `action=parse` with HTTP 500
    pub fail_pages: bool,
    pub list_requests: AtomicUsize,
    pub page_requests: AtomicUsize,
    pub seen: Mutex<Vec<HashMap<String, String>>>,
}

impl MockWiki {
    pub fn with_pages(pages: &[(&str, &str)]) -> Self {
        Self {
            titles: pages.iter().map(|(t, _)| t.to_string()).collect(),
            pages: pages
                .iter()
                .map(|(t, html)| (t.to_string(), html.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    pub fn list_requests(&self) -> usize {
        self.list_requests.load(Ordering::SeqCst)
    }

    pub fn page_requests(&self) -> usize {
        self.page_requests.load(Ordering::SeqCst)
    }

    pub fn last_params(&self) -> HashMap<String, String> {
        self.seen.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

pub struct MockWikiServer {
    pub api_url: String,
    pub wiki: Arc<MockWiki>,
}

pub async fn spawn(wiki: MockWiki) -> MockWikiServer {
    let wiki = Arc::new(wiki);
    let app = Router::new()
        .route("/w/api.php", get(api_handler))
        .with_state(wiki.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    MockWikiServer {
        api_url: format!("http://{}/w/api.php", addr),
        wiki,
    }
}

async fn api_handler(
    State(wiki): State<Arc<MockWiki>>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    wiki.seen.lock().unwrap().push(params.clone());

    match params.get("action").map(String::as_str) {
        Some("query") => {
            wiki.list_requests.fetch_add(1, Ordering::SeqCst);
            let members: Vec<_> = wiki
                .titles
                .iter()
                .enumerate()
                .map(|(i, title)| json!({"pageid": i + 1, "ns": 0, "title": title}))
                .collect();
            Json(json!({"batchcomplete": "", "query": {"categorymembers": members}}))
                .into_response()
        }
        Some("parse") => {
            wiki.page_requests.fetch_add(1, Ordering::SeqCst);
            if wiki.fail_pages {
                return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
            }
            let page = params.get("page").cloned().unwrap_or_default();
            match wiki.pages.get(&page) {
                Some(html) => {
                    Json(json!({"parse": {"title": page, "pageid": 1, "text": {"*": html}}}))
                        .into_response()
                }
                None => Json(json!({"error": {"code": "missingtitle", "info": "missing"}}))
                    .into_response(),
            }
        }
        _ => (StatusCode::BAD_REQUEST, "unknown action").into_response(),
    }
}
