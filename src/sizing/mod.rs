// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Multi-strategy real-world size estimation
//!
//! Three estimators in fixed precedence: reference-object calibration,
//! depth-based pinhole projection, and occupancy-scaled class averages.
//! All of them are pure with respect to their explicit inputs; failure is
//! reported as a [`SizeMethod`](crate::detection::SizeMethod) tag, never as
//! a panic or an error that escapes the orchestrator.

pub mod average;
pub mod depth;
pub mod orchestrator;
pub mod reference;

pub use orchestrator::SizeEstimator;
pub use reference::ReferenceCalibration;
