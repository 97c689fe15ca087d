// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Average-size estimation: class averages scaled by frame occupancy
//!
//! An object occupying less of the frame than the typical fraction is
//! inferred to be farther away and scaled up relative to its class average,
//! and vice versa. Both the scale factor and the final dimensions are
//! clamped to keep the extrapolation bounded.

use crate::config::{KnownSizeTable, SizingTunables};
use crate::detection::{ImageFrame, SizeMethod};

/// Estimate physical size from the class's known average dimensions.
///
/// Fails with `unknown_object` when the class has no table entry and with
/// `average_error` when the scaling produces a non-finite value.
pub fn estimate(
    class_label: &str,
    pixel_width: f64,
    pixel_height: f64,
    frame: ImageFrame,
    table: &KnownSizeTable,
    tunables: &SizingTunables,
) -> Result<(f64, f64), SizeMethod> {
    let entry = table.get(class_label).ok_or(SizeMethod::UnknownObject)?;

    let area_ratio = (pixel_width * pixel_height) / frame.area();

    // Zero-area boxes are legal input; they carry no occupancy signal, so
    // the class average is used unscaled.
    let scale_factor = if area_ratio > 0.0 {
        (tunables.typical_occupancy / area_ratio).sqrt()
    } else {
        1.0
    };
    if !scale_factor.is_finite() {
        return Err(SizeMethod::AverageError);
    }

    let (scale_min, scale_max) = tunables.scale_factor_range;
    let scale_factor = scale_factor.clamp(scale_min, scale_max);

    let (lo, hi) = tunables.average_clamp_cm;
    let width_cm = (entry.avg_width_cm * scale_factor).clamp(lo, hi);
    let height_cm = (entry.avg_height_cm * scale_factor).clamp(lo, hi);
    if !width_cm.is_finite() || !height_cm.is_finite() {
        return Err(SizeMethod::AverageError);
    }

    Ok((width_cm, height_cm))
}
