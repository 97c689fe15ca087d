// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Camera-geometry constants and sizing heuristics
//!
//! Every number here is configuration, not code. The depth-to-distance
//! conversion and the typical-occupancy fraction are uncalibrated heuristics
//! inherited from the deployed system; absolute accuracy is not guaranteed.

use serde::{Deserialize, Serialize};

fn default_sensor_width_cm() -> f64 {
    3.2
}

fn default_sensor_height_cm() -> f64 {
    2.4
}

fn default_focal_length_px() -> f64 {
    1000.0
}

fn default_depth_scale() -> f64 {
    10.0
}

fn default_min_distance_m() -> f64 {
    0.5
}

/// Pinhole-camera approximation constants used by the depth-based estimator.
///
/// `depth_scale` turns the unitless relative-depth scalar into an approximate
/// distance in meters; `min_distance_m` floors that distance. Neither is
/// derived from a calibration - they are preserved heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraGeometry {
    #[serde(default = "default_sensor_width_cm")]
    pub sensor_width_cm: f64,
    #[serde(default = "default_sensor_height_cm")]
    pub sensor_height_cm: f64,
    #[serde(default = "default_focal_length_px")]
    pub focal_length_px: f64,
    #[serde(default = "default_depth_scale")]
    pub depth_scale: f64,
    #[serde(default = "default_min_distance_m")]
    pub min_distance_m: f64,
}

impl Default for CameraGeometry {
    fn default() -> Self {
        Self {
            sensor_width_cm: default_sensor_width_cm(),
            sensor_height_cm: default_sensor_height_cm(),
            focal_length_px: default_focal_length_px(),
            depth_scale: default_depth_scale(),
            min_distance_m: default_min_distance_m(),
        }
    }
}

fn default_typical_occupancy() -> f64 {
    0.2
}

fn default_scale_factor_range() -> (f64, f64) {
    (0.3, 3.0)
}

fn default_average_clamp_cm() -> (f64, f64) {
    (5.0, 500.0)
}

fn default_depth_clamp_cm() -> (f64, f64) {
    (1.0, 1000.0)
}

/// Clamps and scaling constants for the heuristic estimators.
///
/// `typical_occupancy` is the fraction of frame area an average-size object
/// is assumed to cover in a well-composed shot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingTunables {
    #[serde(default = "default_typical_occupancy")]
    pub typical_occupancy: f64,
    /// Bounds on the occupancy-derived scale factor.
    #[serde(default = "default_scale_factor_range")]
    pub scale_factor_range: (f64, f64),
    /// Bounds on the average-size estimator output, in cm.
    #[serde(default = "default_average_clamp_cm")]
    pub average_clamp_cm: (f64, f64),
    /// Bounds on the depth-based estimator output, in cm.
    #[serde(default = "default_depth_clamp_cm")]
    pub depth_clamp_cm: (f64, f64),
}

impl Default for SizingTunables {
    fn default() -> Self {
        Self {
            typical_occupancy: default_typical_occupancy(),
            scale_factor_range: default_scale_factor_range(),
            average_clamp_cm: default_average_clamp_cm(),
            depth_clamp_cm: default_depth_clamp_cm(),
        }
    }
}

/// The in-frame reference object used for pixel-to-cm calibration.
///
/// Defaults to a payment card, whose physical dimensions are fixed by
/// ISO/IEC 7810.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceObject {
    #[serde(default = "default_reference_class")]
    pub class_label: String,
    #[serde(default = "default_reference_width_cm")]
    pub width_cm: f64,
    #[serde(default = "default_reference_height_cm")]
    pub height_cm: f64,
}

fn default_reference_class() -> String {
    "CreditCard".to_string()
}

fn default_reference_width_cm() -> f64 {
    8.56
}

fn default_reference_height_cm() -> f64 {
    5.4
}

impl Default for ReferenceObject {
    fn default() -> Self {
        Self {
            class_label: default_reference_class(),
            width_cm: default_reference_width_cm(),
            height_cm: default_reference_height_cm(),
        }
    }
}
