// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use std::env;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use sizewise_node::api::{start_server, AppState};
use sizewise_node::config::NodeConfig;
use sizewise_node::sizing::SizeEstimator;
use sizewise_node::usecases::UseCaseService;
use sizewise_node::version;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    info!("Starting {}", version::get_version_string());

    let config = NodeConfig::load()?;
    info!(
        "Reference object: {} ({} x {} cm)",
        config.reference.class_label, config.reference.width_cm, config.reference.height_cm
    );

    let estimator = SizeEstimator::from_config(&config)?;
    info!(
        "Known-size table loaded: {} classes",
        estimator.known_sizes().len()
    );

    let use_cases = UseCaseService::from_settings(&config.use_cases)?;
    match &config.use_cases.endpoint {
        Some(endpoint) => info!("Use-case generator: {}", endpoint),
        None => info!("Use-case generator disabled, serving fallback descriptions"),
    }

    let state = AppState::new(Arc::new(estimator), Arc::new(use_cases));
    start_server(&config, state).await
}
