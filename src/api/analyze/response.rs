// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze response types

use serde::{Deserialize, Serialize};

use crate::describe;
use crate::detection::DetectionRecord;

/// Whole-frame summary of the enriched detection list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameSummary {
    pub total_objects: usize,
    pub unique_classes: usize,
    /// One-sentence natural-language description.
    pub description: String,
    /// Per-class counts and mean confidences.
    pub detailed_analysis: String,
}

/// Response from size estimation: the same detections, enriched, plus the
/// generated frame summaries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub detections: Vec<DetectionRecord>,
    pub summary: FrameSummary,
    /// ISO-8601 response time.
    pub timestamp: String,
}

impl AnalyzeResponse {
    /// Build the response from the enriched detection list.
    pub fn new(detections: Vec<DetectionRecord>) -> Self {
        let mut classes: Vec<&str> = detections.iter().map(|d| d.class_label.as_str()).collect();
        classes.sort_unstable();
        classes.dedup();

        let summary = FrameSummary {
            total_objects: detections.len(),
            unique_classes: classes.len(),
            description: describe::short_description(&detections),
            detailed_analysis: describe::detailed_description(&detections),
        };

        Self {
            detections,
            summary,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
