// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::http_server::AppState;
use crate::render::{SurfaceSnapshot, ViewState};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub view: SurfaceSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionsResponse {
    pub count: usize,
    pub expressions: Vec<String>,
}

/// GET / - current page
///
/// Loads an expression on the first visit, and again when an error page
/// that was already shown is requested once more.
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let surface = state.service.surface();
    let seen = surface.mark_viewed();
    let load = match surface.state() {
        ViewState::Idle => true,
        ViewState::Errored => seen,
        ViewState::Loading | ViewState::Displayed => false,
    };

    if load {
        debug!("Surface is {:?}, loading an expression", surface.state());
        state.service.show_random_expression().await;
        surface.mark_viewed();
    }
    Html(surface.document())
}

/// POST /reload - pick another expression, then redirect to the page
pub async fn reload_handler(State(state): State<AppState>) -> Redirect {
    state.service.show_random_expression().await;
    Redirect::to("/")
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        view: state.service.surface().snapshot(),
    })
}

/// GET /v1/expressions - the cached expression list
pub async fn expressions_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.service.list_cache().fetch_expressions_list().await {
        Ok(expressions) => Json(ExpressionsResponse {
            count: expressions.len(),
            expressions,
        })
        .into_response(),
        Err(e) => {
            warn!("Expression list unavailable: {}", e);
            let status = if e.is_network() {
                StatusCode::SERVICE_UNAVAILABLE
            } else {
                StatusCode::BAD_GATEWAY
            };
            (status, e.to_string()).into_response()
        }
    }
}
