// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Use-case response types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Response for a batch of object classes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UseCasesResponse {
    /// Class label -> use-case text.
    pub use_cases: HashMap<String, String>,
    pub total_objects: usize,
    /// Where fresh text comes from: "generator" or "fallback".
    pub source: String,
    pub timestamp: String,
}

impl UseCasesResponse {
    pub fn new(use_cases: HashMap<String, String>, source: &str) -> Self {
        Self {
            total_objects: use_cases.len(),
            use_cases,
            source: source.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response for a single object class.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleUseCaseResponse {
    pub object: String,
    pub use_case: String,
    pub source: String,
    pub timestamp: String,
}

impl SingleUseCaseResponse {
    pub fn new(object: String, use_case: String, source: &str) -> Self {
        Self {
            object,
            use_case,
            source: source.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_response_counts_entries() {
        let mut use_cases = HashMap::new();
        use_cases.insert("Person".to_string(), "text".to_string());
        use_cases.insert("Vehicle".to_string(), "text".to_string());
        let response = UseCasesResponse::new(use_cases, "fallback");
        assert_eq!(response.total_objects, 2);
        assert_eq!(response.source, "fallback");
    }

    #[test]
    fn test_serializes_camel_case() {
        let response =
            SingleUseCaseResponse::new("Person".to_string(), "text".to_string(), "generator");
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["useCase"], "text");
        assert_eq!(value["source"], "generator");
    }
}
