// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /v1/analyze - size estimation over one image's detections

pub mod handler;
pub mod request;
pub mod response;

pub use handler::analyze_handler;
pub use request::{AnalyzeRequest, DetectionInput};
pub use response::{AnalyzeResponse, FrameSummary};
