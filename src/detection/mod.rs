// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Detection data model shared by the sizing pipeline and the HTTP API

use serde::{Deserialize, Serialize};

/// Axis-aligned pixel rectangle `(x1, y1, x2, y2)` delimiting a detected object.
///
/// Invariant: `x2 >= x1` and `y2 >= y1`. Degenerate zero-area boxes are legal
/// input; callers reject inverted boxes before the sizing core runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Pixel width of the box.
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Pixel height of the box.
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Pixel area of the box.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// True when the box satisfies the ordering invariant and all
    /// coordinates are finite.
    pub fn is_well_formed(&self) -> bool {
        [self.x1, self.y1, self.x2, self.y2]
            .iter()
            .all(|c| c.is_finite())
            && self.x2 >= self.x1
            && self.y2 >= self.y1
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<BoundingBox> for [f64; 4] {
    fn from(b: BoundingBox) -> Self {
        [b.x1, b.y1, b.x2, b.y2]
    }
}

/// Pixel dimensions of the source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFrame {
    pub width_px: u32,
    pub height_px: u32,
}

impl ImageFrame {
    pub fn new(width_px: u32, height_px: u32) -> Self {
        Self { width_px, height_px }
    }

    pub fn area(&self) -> f64 {
        self.width_px as f64 * self.height_px as f64
    }
}

/// Which strategy produced (or failed to produce) a size estimate.
///
/// Failure tags are data, not errors: an estimator reports why it could not
/// produce an estimate and the orchestrator falls through to the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeMethod {
    /// Calibrated against an in-frame object of known physical size.
    ReferenceObject,
    /// Pinhole projection driven by a monocular relative-depth scalar.
    DepthBased,
    /// Class-average dimensions scaled by frame occupancy.
    KnownAverage,
    /// Every strategy fell through; dimensions stay unset.
    #[default]
    None,
    /// No detection of the reference class in the frame.
    NoReference,
    /// Reference detection present but unusable (zero-size bbox).
    ReferenceError,
    /// Detection carries no relative-depth value.
    DepthFailed,
    /// Depth projection produced a non-finite result.
    DepthError,
    /// Class has no entry in the known-size table.
    UnknownObject,
    /// Occupancy scaling produced a non-finite result.
    AverageError,
}

impl SizeMethod {
    /// True for the three tags that carry dimensions with them.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            SizeMethod::ReferenceObject | SizeMethod::DepthBased | SizeMethod::KnownAverage
        )
    }
}

/// Rough physical shape of an object class, carried by the known-size table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeCategory {
    Box,
    Cylinder,
    Cone,
    Cloth,
    Card,
    Person,
    Vehicle,
}

/// One detected object instance flowing through the pipeline.
///
/// Created per detector invocation, enriched in place by the size
/// orchestrator, consumed once by the description generator. No cross-request
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRecord {
    /// Object category; must match the known-size table key space for the
    /// average-size path to apply.
    pub class_label: String,
    /// Detector confidence in [0, 1].
    pub confidence: f32,
    /// Pixel-space bounding box, serialized as `[x1, y1, x2, y2]`.
    pub bbox: BoundingBox,
    /// Unitless monocular depth signal for the crop, if the depth
    /// collaborator produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_depth: Option<f64>,
    /// Estimated physical width in cm; `null` until a strategy succeeds.
    #[serde(default)]
    pub estimated_width_cm: Option<f64>,
    /// Estimated physical height in cm; `null` until a strategy succeeds.
    #[serde(default)]
    pub estimated_height_cm: Option<f64>,
    /// Which strategy produced the estimate.
    #[serde(default)]
    pub size_method: SizeMethod,
}

impl DetectionRecord {
    /// A fresh, un-enriched record as the detector collaborator hands it over.
    pub fn new(class_label: impl Into<String>, confidence: f32, bbox: BoundingBox) -> Self {
        Self {
            class_label: class_label.into(),
            confidence,
            bbox,
            relative_depth: None,
            estimated_width_cm: None,
            estimated_height_cm: None,
            size_method: SizeMethod::None,
        }
    }

    pub fn with_depth(mut self, relative_depth: f64) -> Self {
        self.relative_depth = Some(relative_depth);
        self
    }
}
