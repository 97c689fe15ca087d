// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Analyze endpoint tests for POST /v1/analyze
//!
//! These tests verify that the analyze_handler correctly:
//! - Validates requests and returns appropriate errors
//! - Runs the size-estimation precedence chain per detection
//! - Builds the frame summaries and response envelope

use axum::{extract::State, Json};
use sizewise_node::{
    api::{analyze_handler, AnalyzeRequest, ApiError, AppState, DetectionInput},
    SizeMethod,
};

fn input(class: &str, confidence: f32, bbox: [f64; 4]) -> DetectionInput {
    DetectionInput {
        class_label: class.to_string(),
        confidence,
        bbox,
        relative_depth: None,
    }
}

fn request(detections: Vec<DetectionInput>) -> AnalyzeRequest {
    AnalyzeRequest {
        detections,
        image_width_px: 1000,
        image_height_px: 800,
    }
}

#[tokio::test]
async fn test_full_precedence_chain_in_one_frame() {
    let state = AppState::new_for_test();

    let mut tank = input("OxygenTank", 0.8, [0.0, 0.0, 500.0, 400.0]);
    tank.relative_depth = Some(5.0);
    let body = AnalyzeRequest {
        detections: vec![
            tank,
            input("Person", 0.9, [0.0, 0.0, 100.0, 250.0]),
            input("Unicorn", 0.4, [0.0, 0.0, 10.0, 10.0]),
        ],
        image_width_px: 1000,
        image_height_px: 800,
    };

    let Json(response) = analyze_handler(State(state), Json(body)).await.unwrap();

    // No reference in frame: depth wins where available, class average next,
    // unknown class resolves to nothing
    assert_eq!(response.detections[0].size_method, SizeMethod::DepthBased);
    assert_eq!(response.detections[1].size_method, SizeMethod::KnownAverage);
    assert_eq!(response.detections[2].size_method, SizeMethod::None);
    assert!(response.detections[2].estimated_width_cm.is_none());

    assert_eq!(response.summary.total_objects, 3);
    assert_eq!(response.summary.unique_classes, 3);
}

#[tokio::test]
async fn test_reference_object_calibrates_the_frame() {
    let state = AppState::new_for_test();
    let body = request(vec![
        input("ToolBox", 0.85, [0.0, 0.0, 200.0, 120.0]),
        input("CreditCard", 0.95, [600.0, 600.0, 700.0, 660.0]),
    ]);

    let Json(response) = analyze_handler(State(state), Json(body)).await.unwrap();

    assert_eq!(
        response.detections[0].size_method,
        SizeMethod::ReferenceObject
    );
    assert_eq!(response.detections[0].estimated_width_cm, Some(17.12));
    assert_eq!(response.detections[0].estimated_height_cm, Some(10.8));
}

#[tokio::test]
async fn test_summary_description_grammar() {
    let state = AppState::new_for_test();
    let body = request(vec![
        input("Person", 0.9, [0.0, 0.0, 100.0, 250.0]),
        input("Person", 0.95, [200.0, 0.0, 300.0, 250.0]),
        input("Vehicle", 0.5, [0.0, 300.0, 600.0, 700.0]),
    ]);

    let Json(response) = analyze_handler(State(state), Json(body)).await.unwrap();

    assert!(response
        .summary
        .description
        .starts_with("The image contains 2 Persons and a Vehicle."));
    assert!(response
        .summary
        .description
        .contains("The most confident detections include 2 Persons."));
    assert!(response
        .summary
        .detailed_analysis
        .lines()
        .next()
        .unwrap()
        .contains("2 Person(s)"));
}

#[tokio::test]
async fn test_empty_detections_list() {
    let state = AppState::new_for_test();
    let Json(response) = analyze_handler(State(state), Json(request(vec![])))
        .await
        .unwrap();

    assert!(response.detections.is_empty());
    assert_eq!(
        response.summary.description,
        "No objects detected in the image."
    );
    assert_eq!(
        response.summary.detailed_analysis,
        "No objects were detected with sufficient confidence."
    );
}

#[tokio::test]
async fn test_rejects_inverted_bbox() {
    let state = AppState::new_for_test();
    let body = request(vec![input("Person", 0.9, [200.0, 0.0, 100.0, 50.0])]);

    let result = analyze_handler(State(state), Json(body)).await;
    match result {
        Err(ApiError::ValidationError { field, .. }) => {
            assert_eq!(field, "detections[0].bbox")
        }
        other => panic!("expected validation error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn test_rejects_zero_frame() {
    let state = AppState::new_for_test();
    let body = AnalyzeRequest {
        detections: vec![],
        image_width_px: 0,
        image_height_px: 800,
    };

    let result = analyze_handler(State(state), Json(body)).await;
    assert!(matches!(result, Err(ApiError::ValidationError { .. })));
}

#[tokio::test]
async fn test_degenerate_bbox_flows_through() {
    let state = AppState::new_for_test();
    let body = request(vec![input("FireAlarm", 0.6, [30.0, 30.0, 30.0, 30.0])]);

    let Json(response) = analyze_handler(State(state), Json(body)).await.unwrap();
    // Zero-area box has no occupancy signal, so the raw class average is used
    assert_eq!(response.detections[0].size_method, SizeMethod::KnownAverage);
    assert_eq!(response.detections[0].estimated_width_cm, Some(15.0));
}
