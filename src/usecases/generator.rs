// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Use-case text generation via an OpenAI-compatible sidecar

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

// --- OpenAI-compatible serde structs ---

#[derive(serde::Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(serde::Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(serde::Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(serde::Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(serde::Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Free-text use-case generation for a detected object class.
///
/// The production implementation talks to a sidecar LLM; tests inject stubs.
#[async_trait]
pub trait UseCaseGenerator: Send + Sync {
    async fn generate(&self, class_label: &str) -> Result<String>;
}

const USE_CASE_PROMPT: &str = "Provide a comprehensive but concise description of a {object} focusing on:\n1. What it is and its primary function\n2. Common industrial or safety use cases\n3. Key features and applications\n4. Safety considerations if applicable\n\nKeep it under 200 words and focused on practical industrial/safety applications:";

/// Client for an OpenAI-compatible chat-completion sidecar.
pub struct SidecarGenerator {
    client: Client,
    endpoint: String,
    model_name: String,
}

impl SidecarGenerator {
    pub fn new(endpoint: &str, model_name: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        let endpoint = endpoint.trim_end_matches('/').to_string();
        info!(
            "Use-case generator configured: endpoint={}, model={}",
            endpoint, model_name
        );

        Ok(Self {
            client,
            endpoint,
            model_name: model_name.to_string(),
        })
    }
}

#[async_trait]
impl UseCaseGenerator for SidecarGenerator {
    async fn generate(&self, class_label: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model_name.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: USE_CASE_PROMPT.replace("{object}", class_label),
            }],
            max_tokens: 300,
            temperature: 0.7,
        };

        let url = format!("{}/v1/chat/completions", self.endpoint);
        debug!("Requesting use-case text for {} from {}", class_label, url);

        let response = self.client.post(&url).json(&request).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!(
                "use-case sidecar returned {} for {}",
                response.status(),
                class_label
            ));
        }

        let body: ChatResponse = response.json().await?;
        let text = body
            .choices
            .first()
            .map(|c| c.message.content.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("empty response from use-case sidecar"))?;

        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_mentions_object() {
        let prompt = USE_CASE_PROMPT.replace("{object}", "FireExtinguisher");
        assert!(prompt.contains("description of a FireExtinguisher"));
        assert!(prompt.contains("under 200 words"));
    }

    #[test]
    fn test_endpoint_trailing_slash_is_trimmed() {
        let generator = SidecarGenerator::new("http://localhost:9999/", "test-model").unwrap();
        assert_eq!(generator.endpoint, "http://localhost:9999");
    }

    #[test]
    fn test_chat_request_shape() {
        let request = ChatRequest {
            model: "m".to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
            max_tokens: 300,
            temperature: 0.7,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["max_tokens"], 300);
    }
}
