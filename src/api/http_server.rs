// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server: router, shared state, and the health endpoint

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::api::analyze::analyze_handler;
use crate::api::use_cases::{single_use_case_handler, use_cases_handler};
use crate::config::NodeConfig;
use crate::sizing::SizeEstimator;
use crate::usecases::UseCaseService;
use crate::version;

/// Shared per-process state: read-only configuration and services.
///
/// Everything request-scoped (detection lists, frames) stays inside the
/// handlers, so concurrent requests never race on this state.
#[derive(Clone)]
pub struct AppState {
    pub estimator: Arc<SizeEstimator>,
    pub use_cases: Arc<UseCaseService>,
}

impl AppState {
    pub fn new(estimator: Arc<SizeEstimator>, use_cases: Arc<UseCaseService>) -> Self {
        Self {
            estimator,
            use_cases,
        }
    }

    /// State with default configuration and no text generator, for tests.
    pub fn new_for_test() -> Self {
        let config = NodeConfig::default();
        let estimator =
            SizeEstimator::from_config(&config).expect("default config is loadable");
        let use_cases =
            UseCaseService::from_settings(&config.use_cases).expect("default settings are valid");
        Self::new(Arc::new(estimator), Arc::new(use_cases))
    }
}

/// Build the API router over the given state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/v1/analyze", post(analyze_handler))
        .route("/v1/use-cases", post(use_cases_handler))
        .route("/v1/use-case", post(single_use_case_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(config: &NodeConfig, state: AppState) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("API server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    axum::Json(json!({
        "status": "healthy",
        "version": version::VERSION_NUMBER,
        "generatorAvailable": state.use_cases.generator_available(),
        "cachedObjects": state.use_cases.cached_entries().await,
        "knownClasses": state.estimator.known_sizes().len(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
