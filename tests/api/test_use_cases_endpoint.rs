// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Use-case endpoint tests for POST /v1/use-cases and /v1/use-case

use axum::{extract::State, Json};
use sizewise_node::api::{
    single_use_case_handler, use_cases_handler, ApiError, AppState, SingleUseCaseRequest,
    UseCasesRequest,
};

#[tokio::test]
async fn test_batch_returns_text_per_unique_class() {
    let state = AppState::new_for_test();
    let body = UseCasesRequest {
        objects: vec![
            "FireExtinguisher".to_string(),
            "OxygenTank".to_string(),
            "FireExtinguisher".to_string(),
        ],
    };

    let Json(response) = use_cases_handler(State(state), Json(body)).await.unwrap();

    assert_eq!(response.total_objects, 2);
    assert!(response.use_cases["OxygenTank"].contains("oxygen"));
    // No generator configured in tests
    assert_eq!(response.source, "fallback");
}

#[tokio::test]
async fn test_batch_unknown_class_gets_generic_text() {
    let state = AppState::new_for_test();
    let body = UseCasesRequest {
        objects: vec!["WarpCore".to_string()],
    };

    let Json(response) = use_cases_handler(State(state), Json(body)).await.unwrap();
    assert!(response.use_cases["WarpCore"].starts_with("A WarpCore is used"));
}

#[tokio::test]
async fn test_batch_rejects_empty_objects() {
    let state = AppState::new_for_test();
    let result =
        use_cases_handler(State(state), Json(UseCasesRequest { objects: vec![] })).await;
    assert!(matches!(result, Err(ApiError::ValidationError { .. })));
}

#[tokio::test]
async fn test_single_use_case() {
    let state = AppState::new_for_test();
    let body = SingleUseCaseRequest {
        object: "FireHydrant".to_string(),
    };

    let Json(response) = single_use_case_handler(State(state), Json(body))
        .await
        .unwrap();

    assert_eq!(response.object, "FireHydrant");
    assert!(response.use_case.contains("firefighters"));
}

#[tokio::test]
async fn test_single_rejects_missing_object() {
    let state = AppState::new_for_test();
    let result = single_use_case_handler(
        State(state),
        Json(SingleUseCaseRequest {
            object: String::new(),
        }),
    )
    .await;
    assert!(matches!(result, Err(ApiError::ValidationError { .. })));
}

#[tokio::test]
async fn test_answers_are_cached_across_requests() {
    let state = AppState::new_for_test();

    let body = SingleUseCaseRequest {
        object: "SafetyVest".to_string(),
    };
    let Json(first) = single_use_case_handler(State(state.clone()), Json(body.clone()))
        .await
        .unwrap();
    let Json(second) = single_use_case_handler(State(state.clone()), Json(body))
        .await
        .unwrap();

    assert_eq!(first.use_case, second.use_case);
    assert_eq!(state.use_cases.cached_entries().await, 1);
}
