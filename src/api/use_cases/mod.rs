// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /v1/use-cases and /v1/use-case - cached object descriptions

pub mod handler;
pub mod request;
pub mod response;

pub use handler::{single_use_case_handler, use_cases_handler};
pub use request::{SingleUseCaseRequest, UseCasesRequest};
pub use response::{SingleUseCaseResponse, UseCasesResponse};
