// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers::{expressions_handler, health_handler, index_handler, reload_handler};
use crate::expression::ExpressionService;
use crate::render::RELOAD_ACTION;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ExpressionService>,
}

impl AppState {
    pub fn new(service: Arc<ExpressionService>) -> Self {
        Self { service }
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route(RELOAD_ACTION, post(reload_handler))
        .route("/health", get(health_handler))
        .route("/v1/expressions", get(expressions_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the app until Ctrl+C
pub async fn start_server(state: AppState, listen_addr: &str) -> Result<()> {
    let addr: SocketAddr = listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Expression server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_app(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutting down expression server");
        })
        .await?;

    Ok(())
}
