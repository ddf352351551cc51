// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP front-end routes

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`
use wiktionary_expressions::{
    api::{create_app, AppState, ExpressionsResponse, HealthResponse},
    DictionarySource, ExpressionError, ExpressionService, MemoryStore, OutputSurface, ViewState,
};

struct ToggleSource {
    down: AtomicBool,
    list_error: Option<ExpressionError>,
}

#[async_trait]
impl DictionarySource for ToggleSource {
    async fn fetch_all_expressions(&self) -> Result<Vec<String>, ExpressionError> {
        if let Some(e) = &self.list_error {
            return Err(e.clone());
        }
        Ok(vec!["вешать лапшу на уши".to_string(), "B".to_string()])
    }

    async fn fetch_full_page(&self, title: &str) -> Result<String, ExpressionError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(ExpressionError::Network("connection refused".to_string()));
        }
        Ok(format!(
            r#"<div class="mw-parser-output"><p>Définition de {}</p></div>"#,
            title
        ))
    }

    fn name(&self) -> &'static str {
        "toggle"
    }
}

fn setup(down: bool) -> (Router, Arc<ToggleSource>, Arc<ExpressionService>) {
    setup_with(ToggleSource {
        down: AtomicBool::new(down),
        list_error: None,
    })
}

fn setup_with(source: ToggleSource) -> (Router, Arc<ToggleSource>, Arc<ExpressionService>) {
    let source = Arc::new(source);
    let service = Arc::new(ExpressionService::new(
        source.clone(),
        Arc::new(MemoryStore::new()),
        "expressionsAll",
        Arc::new(OutputSurface::new()),
    ));
    (create_app(AppState::new(service.clone())), source, service)
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_health_reports_idle_surface() {
    let (app, _, _) = setup(false);

    let (status, body) = send(&app, Method::GET, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let health: HealthResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.view.state, ViewState::Idle);
    assert_eq!(health.view.generation, 0);
}

#[tokio::test]
async fn test_first_visit_loads_expression() {
    let (app, _, service) = setup(false);

    let (status, body) = send(&app, Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains("Expression Russe"));
    assert!(body.contains("Définition de"));
    assert!(body.contains(r#"<button id="reload""#));
    assert_eq!(service.surface().state(), ViewState::Displayed);

    // Revisiting shows the same page without a new selection
    let (_, again) = send(&app, Method::GET, "/").await;
    assert_eq!(again, body);
    assert_eq!(service.surface().generation(), 1);
}

async fn post_reload(app: &Router) -> (StatusCode, Option<String>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/reload")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    (response.status(), location)
}

#[tokio::test]
async fn test_reload_redirects_to_new_selection() {
    let (app, _, service) = setup(false);

    send(&app, Method::GET, "/").await;
    let (status, location) = post_reload(&app).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(location.as_deref(), Some("/"));
    assert_eq!(service.surface().generation(), 2);

    // Following the redirect shows the new page without another selection
    let (status, body) = send(&app, Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Définition de"));
    assert_eq!(service.surface().generation(), 2);
}

#[tokio::test]
async fn test_failed_reload_shows_error_once_then_retries() {
    let (app, source, service) = setup(false);

    send(&app, Method::GET, "/").await;
    source.down.store(true, Ordering::SeqCst);
    post_reload(&app).await;
    assert_eq!(service.surface().state(), ViewState::Errored);

    // The redirect target displays the error rather than loading again
    let (_, body) = send(&app, Method::GET, "/").await;
    assert!(body.contains("Erreur de chargement : Network error: connection refused"));
    assert_eq!(service.surface().generation(), 2);

    source.down.store(false, Ordering::SeqCst);
    let (_, body) = send(&app, Method::GET, "/").await;
    assert!(body.contains("Définition de"));
    assert_eq!(service.surface().generation(), 3);
}

#[tokio::test]
async fn test_reload_requires_post() {
    let (app, _, _) = setup(false);
    let (status, _) = send(&app, Method::GET, "/reload").await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_error_page_then_recovery() {
    let (app, source, service) = setup(true);

    let (status, body) = send(&app, Method::GET, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Erreur de chargement : Network error: connection refused"));
    assert_eq!(service.surface().state(), ViewState::Errored);

    source.down.store(false, Ordering::SeqCst);
    let (_, body) = send(&app, Method::GET, "/").await;
    assert!(body.contains("Définition de"));
    assert_eq!(service.surface().generation(), 2);
}

#[tokio::test]
async fn test_expressions_endpoint_lists_cached_titles() {
    let (app, _, _) = setup(false);

    let (status, body) = send(&app, Method::GET, "/v1/expressions").await;
    assert_eq!(status, StatusCode::OK);

    let response: ExpressionsResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(response.count, 2);
    assert_eq!(response.expressions[0], "вешать лапшу на уши");
}

#[tokio::test]
async fn test_expressions_endpoint_upstream_failures() {
    let (app, _, _) = setup_with(ToggleSource {
        down: AtomicBool::new(false),
        list_error: Some(ExpressionError::Network("connection refused".to_string())),
    });
    let (status, _) = send(&app, Method::GET, "/v1/expressions").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (app, _, _) = setup_with(ToggleSource {
        down: AtomicBool::new(false),
        list_error: Some(ExpressionError::MalformedResponse("no query".to_string())),
    });
    let (status, _) = send(&app, Method::GET, "/v1/expressions").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
}
