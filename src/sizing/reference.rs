// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Reference-object calibration: pixel-to-cm ratios from an in-frame object
//! of exactly known physical size
//!
//! The most trustworthy of the three strategies - it uses no camera
//! assumptions at all, only the ratio between the reference object's known
//! dimensions and its pixel footprint in the same frame.

use crate::config::ReferenceObject;
use crate::detection::{DetectionRecord, SizeMethod};

/// Pixel-to-cm conversion ratios derived from one reference detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceCalibration {
    pub width_ratio: f64,
    pub height_ratio: f64,
}

impl ReferenceCalibration {
    /// Scale a target's pixel dimensions to physical centimeters.
    pub fn apply(&self, pixel_width: f64, pixel_height: f64) -> (f64, f64) {
        (
            pixel_width * self.width_ratio,
            pixel_height * self.height_ratio,
        )
    }
}

/// Derive calibration ratios from the first detection matching the reference
/// class.
///
/// Fails with `no_reference` when the frame contains no reference-class
/// detection, and with `reference_error` when the reference bbox has zero
/// pixel width or height (dividing by it would poison every target).
pub fn calibrate(
    detections: &[DetectionRecord],
    reference: &ReferenceObject,
) -> Result<ReferenceCalibration, SizeMethod> {
    let found = detections
        .iter()
        .find(|d| d.class_label == reference.class_label)
        .ok_or(SizeMethod::NoReference)?;

    let ref_pixel_width = found.bbox.width();
    let ref_pixel_height = found.bbox.height();
    if ref_pixel_width <= 0.0 || ref_pixel_height <= 0.0 {
        return Err(SizeMethod::ReferenceError);
    }

    let width_ratio = reference.width_cm / ref_pixel_width;
    let height_ratio = reference.height_cm / ref_pixel_height;
    if !width_ratio.is_finite() || !height_ratio.is_finite() {
        return Err(SizeMethod::ReferenceError);
    }

    Ok(ReferenceCalibration {
        width_ratio,
        height_ratio,
    })
}
