// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP front-end serving the expression page

pub mod handlers;
pub mod http_server;

pub use handlers::{ExpressionsResponse, HealthResponse};
pub use http_server::{create_app, start_server, AppState};
