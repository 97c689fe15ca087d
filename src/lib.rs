// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod config;
pub mod describe;
pub mod detection;
pub mod sizing;
pub mod usecases;
pub mod version;

// Re-export the core types
pub use config::{
    CameraGeometry, ConfigError, KnownObjectSize, KnownSizeTable, NodeConfig, ReferenceObject,
    SizingTunables, UseCaseSettings,
};
pub use describe::{detailed_description, short_description};
pub use detection::{
    BoundingBox, DetectionRecord, ImageFrame, ShapeCategory, SizeMethod,
};
pub use sizing::{ReferenceCalibration, SizeEstimator};
pub use usecases::{UseCaseCache, UseCaseGenerator, UseCaseService};
