// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Use-case endpoint handlers

use axum::{extract::State, Json};
use tracing::info;

use super::request::{SingleUseCaseRequest, UseCasesRequest};
use super::response::{SingleUseCaseResponse, UseCasesResponse};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;

/// POST /v1/use-cases - use-case text for a batch of detected classes
pub async fn use_cases_handler(
    State(state): State<AppState>,
    Json(request): Json<UseCasesRequest>,
) -> Result<Json<UseCasesResponse>, ApiError> {
    request.validate()?;

    info!("Use-case request for {} objects", request.objects.len());
    let use_cases = state.use_cases.describe_batch(&request.objects).await;

    Ok(Json(UseCasesResponse::new(
        use_cases,
        state.use_cases.source(),
    )))
}

/// POST /v1/use-case - use-case text for a single class
pub async fn single_use_case_handler(
    State(state): State<AppState>,
    Json(request): Json<SingleUseCaseRequest>,
) -> Result<Json<SingleUseCaseResponse>, ApiError> {
    request.validate()?;

    let use_case = state.use_cases.describe(&request.object).await;

    Ok(Json(SingleUseCaseResponse::new(
        request.object,
        use_case,
        state.use_cases.source(),
    )))
}
