// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Size estimation orchestrator: fixed per-detection precedence chain
//!
//! reference object -> depth-based -> known average. The chain is evaluated
//! independently for every detection because depth availability can differ
//! per object; one detection failing never affects its siblings.

use std::sync::Arc;

use tracing::debug;

use crate::config::{
    CameraGeometry, ConfigError, KnownSizeTable, NodeConfig, ReferenceObject, SizingTunables,
};
use crate::detection::{DetectionRecord, ImageFrame, SizeMethod};
use crate::sizing::reference::ReferenceCalibration;
use crate::sizing::{average, depth, reference};

/// Round to 2 decimals, matching the wire precision of the deployed system.
fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Applies the three estimation strategies in fixed precedence and records
/// which one produced each detection's estimate.
///
/// Holds only read-only configuration; every method is pure with respect to
/// its explicit inputs, so one instance can be shared across concurrent
/// requests without locking.
#[derive(Debug, Clone)]
pub struct SizeEstimator {
    reference: ReferenceObject,
    camera: CameraGeometry,
    tunables: SizingTunables,
    known_sizes: Arc<KnownSizeTable>,
}

impl SizeEstimator {
    pub fn new(
        reference: ReferenceObject,
        camera: CameraGeometry,
        tunables: SizingTunables,
        known_sizes: Arc<KnownSizeTable>,
    ) -> Self {
        Self {
            reference,
            camera,
            tunables,
            known_sizes,
        }
    }

    /// Build an estimator from node configuration, resolving the known-size
    /// table from its configured path.
    pub fn from_config(config: &NodeConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.reference.clone(),
            config.camera,
            config.tunables,
            Arc::new(config.known_size_table()?),
        ))
    }

    pub fn known_sizes(&self) -> &KnownSizeTable {
        &self.known_sizes
    }

    /// Enrich every detection in the frame with an estimated physical size.
    ///
    /// Calibration against the reference object is derived once per frame
    /// (its ratios are frame-global), then the precedence chain runs per
    /// detection.
    pub fn estimate_frame(&self, detections: &mut [DetectionRecord], frame: ImageFrame) {
        let calibration = reference::calibrate(detections, &self.reference);
        if let Err(tag) = &calibration {
            debug!(?tag, "reference calibration unavailable for frame");
        }

        for det in detections.iter_mut() {
            let (dims, method) = self.resolve(&calibration, det, frame);
            det.estimated_width_cm = dims.map(|(w, _)| round2(w));
            det.estimated_height_cm = dims.map(|(_, h)| round2(h));
            det.size_method = method;
        }
    }

    /// Run the precedence chain for one detection.
    fn resolve(
        &self,
        calibration: &Result<ReferenceCalibration, SizeMethod>,
        det: &DetectionRecord,
        frame: ImageFrame,
    ) -> (Option<(f64, f64)>, SizeMethod) {
        let pixel_width = det.bbox.width();
        let pixel_height = det.bbox.height();

        if let Ok(cal) = calibration {
            let (w, h) = cal.apply(pixel_width, pixel_height);
            if w.is_finite() && h.is_finite() {
                return (Some((w, h)), SizeMethod::ReferenceObject);
            }
        }

        match depth::estimate(
            det.relative_depth,
            pixel_width,
            pixel_height,
            frame,
            &self.camera,
            &self.tunables,
        ) {
            Ok(dims) => return (Some(dims), SizeMethod::DepthBased),
            Err(tag) => {
                debug!(class = %det.class_label, ?tag, "depth estimation fell through");
            }
        }

        match average::estimate(
            &det.class_label,
            pixel_width,
            pixel_height,
            frame,
            &self.known_sizes,
            &self.tunables,
        ) {
            Ok(dims) => (Some(dims), SizeMethod::KnownAverage),
            Err(tag) => {
                debug!(class = %det.class_label, ?tag, "no sizing strategy applied");
                (None, SizeMethod::None)
            }
        }
    }
}
