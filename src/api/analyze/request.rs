// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Analyze request types and validation
//!
//! Malformed geometry is the only fatal condition for the sizing core, so it
//! is rejected here, before the core ever runs.

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::detection::{BoundingBox, DetectionRecord, ImageFrame};

/// One detection as the detector collaborator reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionInput {
    pub class_label: String,
    /// Detector confidence in [0, 1].
    pub confidence: f32,
    /// Pixel bbox `[x1, y1, x2, y2]`.
    pub bbox: [f64; 4],
    /// Relative depth for the crop, if the depth collaborator produced one.
    #[serde(default)]
    pub relative_depth: Option<f64>,
}

/// Request for size estimation over one image's detections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// May be empty - an image with no detections is a legal frame.
    #[serde(default)]
    pub detections: Vec<DetectionInput>,
    pub image_width_px: u32,
    pub image_height_px: u32,
}

impl AnalyzeRequest {
    /// Validate the analyze request.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.image_width_px == 0 || self.image_height_px == 0 {
            return Err(ApiError::ValidationError {
                field: "imageWidthPx".to_string(),
                message: "image dimensions must be positive".to_string(),
            });
        }

        for (i, det) in self.detections.iter().enumerate() {
            if det.class_label.is_empty() {
                return Err(ApiError::ValidationError {
                    field: format!("detections[{}].classLabel", i),
                    message: "class label must not be empty".to_string(),
                });
            }
            if !det.confidence.is_finite() || !(0.0..=1.0).contains(&det.confidence) {
                return Err(ApiError::ValidationError {
                    field: format!("detections[{}].confidence", i),
                    message: format!("confidence must be in [0, 1], got {}", det.confidence),
                });
            }
            let bbox = BoundingBox::from(det.bbox);
            if !bbox.is_well_formed() {
                return Err(ApiError::ValidationError {
                    field: format!("detections[{}].bbox", i),
                    message: "bbox must be finite with x2 >= x1 and y2 >= y1".to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn frame(&self) -> ImageFrame {
        ImageFrame::new(self.image_width_px, self.image_height_px)
    }

    /// Convert the validated inputs into fresh pipeline records.
    pub fn into_records(self) -> Vec<DetectionRecord> {
        self.detections
            .into_iter()
            .map(|det| {
                let mut record = DetectionRecord::new(
                    det.class_label,
                    det.confidence,
                    BoundingBox::from(det.bbox),
                );
                record.relative_depth = det.relative_depth;
                record
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(bbox: [f64; 4], confidence: f32) -> DetectionInput {
        DetectionInput {
            class_label: "Person".to_string(),
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

    #[test]
    fn test_valid_request() {
        let req = request(vec![input([0.0, 0.0, 100.0, 200.0], 0.9)]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_detections_are_legal() {
        let req = request(vec![]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_zero_frame_dimension_rejected() {
        let mut req = request(vec![]);
        req.image_height_px = 0;
        assert!(matches!(
            req.validate(),
            Err(ApiError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_inverted_bbox_rejected() {
        let req = request(vec![input([100.0, 0.0, 50.0, 50.0], 0.9)]);
        let err = req.validate().unwrap_err();
        match err {
            ApiError::ValidationError { field, .. } => {
                assert_eq!(field, "detections[0].bbox")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_bbox_is_legal() {
        let req = request(vec![input([50.0, 50.0, 50.0, 50.0], 0.9)]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_out_of_range_confidence_rejected() {
        let req = request(vec![input([0.0, 0.0, 10.0, 10.0], 1.5)]);
        assert!(req.validate().is_err());
        let req = request(vec![input([0.0, 0.0, 10.0, 10.0], f32::NAN)]);
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_into_records_carries_depth() {
        let mut det = input([0.0, 0.0, 10.0, 10.0], 0.9);
        det.relative_depth = Some(0.4);
        let records = request(vec![det]).into_records();
        assert_eq!(records[0].relative_depth, Some(0.4));
        assert!(records[0].estimated_width_cm.is_none());
    }

    #[test]
    fn test_deserializes_wire_format() {
        let req: AnalyzeRequest = serde_json::from_str(
            r#"{
                "detections": [
                    {"classLabel": "FireExtinguisher", "confidence": 0.92,
                     "bbox": [10.0, 20.0, 110.0, 270.0], "relativeDepth": 0.5}
                ],
                "imageWidthPx": 1000,
                "imageHeightPx": 800
            }"#,
        )
        .unwrap();
        assert_eq!(req.detections.len(), 1);
        assert_eq!(req.detections[0].class_label, "FireExtinguisher");
        assert_eq!(req.detections[0].relative_depth, Some(0.5));
    }
}
