// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Depth-based size estimation via a pinhole-camera approximation
//!
//! The monocular depth network emits a relative, unitless scalar. Converting
//! it to meters with `depth_scale` and flooring at `min_distance_m` is an
//! uncalibrated heuristic, not a physical law; the output clamp rejects the
//! physically absurd results the heuristic can produce.

use crate::config::{CameraGeometry, SizingTunables};
use crate::detection::{ImageFrame, SizeMethod};

/// Project a target's pixel size to physical centimeters using its relative
/// depth.
///
/// Fails with `depth_failed` when no depth value is available and with
/// `depth_error` when the projection produces a non-finite value.
pub fn estimate(
    relative_depth: Option<f64>,
    pixel_width: f64,
    pixel_height: f64,
    frame: ImageFrame,
    camera: &CameraGeometry,
    tunables: &SizingTunables,
) -> Result<(f64, f64), SizeMethod> {
    let depth = relative_depth.ok_or(SizeMethod::DepthFailed)?;
    // f64::max ignores NaN, so a poisoned depth value must be caught here
    // rather than after the floor.
    if !depth.is_finite() {
        return Err(SizeMethod::DepthError);
    }

    let distance_m = (depth * camera.depth_scale).max(camera.min_distance_m);

    // Similar triangles: real size = pixel size * sensor size * distance
    // over focal length * image size. The * 100 turns meters into cm.
    let width_cm = (pixel_width * camera.sensor_width_cm * distance_m * 100.0)
        / (camera.focal_length_px * frame.width_px as f64);
    let height_cm = (pixel_height * camera.sensor_height_cm * distance_m * 100.0)
        / (camera.focal_length_px * frame.height_px as f64);

    if !width_cm.is_finite() || !height_cm.is_finite() {
        return Err(SizeMethod::DepthError);
    }

    let (lo, hi) = tunables.depth_clamp_cm;
    Ok((width_cm.clamp(lo, hi), height_cm.clamp(lo, hi)))
}
