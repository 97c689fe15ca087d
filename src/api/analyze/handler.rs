// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze endpoint handler

use axum::{extract::State, Json};
use tracing::info;

use super::request::AnalyzeRequest;
use super::response::AnalyzeResponse;
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /v1/analyze - estimate real-world sizes for one image's detections
///
/// Enriches every detection with estimated physical dimensions and the
/// strategy that produced them, then generates the frame summaries.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    request.validate()?;

    let frame = request.frame();
    let mut records = request.into_records();
    state.estimator.estimate_frame(&mut records, frame);

    let sized = records.iter().filter(|r| r.size_method.is_success()).count();
    info!(
        "Analyzed frame {}x{}: {} detections, {} sized",
        frame.width_px,
        frame.height_px,
        records.len(),
        sized
    );

    Ok(Json(AnalyzeResponse::new(records)))
}
