// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Use-case request types and validation

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;

/// Upper bound on classes per batch request.
const MAX_OBJECTS: usize = 50;

/// Request for use-case text for several object classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCasesRequest {
    #[serde(default)]
    pub objects: Vec<String>,
}

impl UseCasesRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.objects.is_empty() {
            return Err(ApiError::ValidationError {
                field: "objects".to_string(),
                message: "objects must be a non-empty list".to_string(),
            });
        }
        if self.objects.len() > MAX_OBJECTS {
            return Err(ApiError::ValidationError {
                field: "objects".to_string(),
                message: format!("at most {} objects per request", MAX_OBJECTS),
            });
        }
        if self.objects.iter().any(|o| o.is_empty()) {
            return Err(ApiError::ValidationError {
                field: "objects".to_string(),
                message: "object names must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Request for use-case text for a single object class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleUseCaseRequest {
    #[serde(default)]
    pub object: String,
}

impl SingleUseCaseRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.object.is_empty() {
            return Err(ApiError::ValidationError {
                field: "object".to_string(),
                message: "object is required".to_string(),
            });
        }
        Ok(())
    }
}
