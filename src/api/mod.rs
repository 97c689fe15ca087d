// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod analyze;
pub mod errors;
pub mod http_server;
pub mod use_cases;

pub use analyze::{analyze_handler, AnalyzeRequest, AnalyzeResponse, DetectionInput, FrameSummary};
pub use errors::{ApiError, ErrorResponse};
pub use http_server::{build_router, start_server, AppState};
pub use use_cases::{
    single_use_case_handler, use_cases_handler, SingleUseCaseRequest, SingleUseCaseResponse,
    UseCasesRequest, UseCasesResponse,
};
