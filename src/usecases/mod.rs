// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Use-case description service for detected object classes
//!
//! Wraps the (external) text generator behind a trait, an injected LRU cache,
//! and a built-in fallback table. Generator failures degrade to fallback
//! text; they are never surfaced to API clients as errors.

pub mod cache;
pub mod fallback;
pub mod generator;

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, warn};

use crate::config::UseCaseSettings;

pub use cache::UseCaseCache;
pub use fallback::fallback_description;
pub use generator::{SidecarGenerator, UseCaseGenerator};

/// Serves use-case text for object classes, caching every answer.
pub struct UseCaseService {
    generator: Option<Arc<dyn UseCaseGenerator>>,
    cache: UseCaseCache,
}

impl UseCaseService {
    pub fn new(generator: Option<Arc<dyn UseCaseGenerator>>, cache: UseCaseCache) -> Self {
        Self { generator, cache }
    }

    /// Build the service from node settings; no endpoint means fallback-only
    /// operation.
    pub fn from_settings(settings: &UseCaseSettings) -> Result<Self> {
        let generator: Option<Arc<dyn UseCaseGenerator>> = match &settings.endpoint {
            Some(endpoint) => Some(Arc::new(SidecarGenerator::new(endpoint, &settings.model)?)),
            None => None,
        };
        Ok(Self::new(generator, UseCaseCache::new(settings.cache_capacity)))
    }

    /// Whether a text generator is configured (reported by `/health`).
    pub fn generator_available(&self) -> bool {
        self.generator.is_some()
    }

    /// Where fresh descriptions come from.
    pub fn source(&self) -> &'static str {
        if self.generator.is_some() {
            "generator"
        } else {
            "fallback"
        }
    }

    /// Number of cached descriptions (reported by `/health`).
    pub async fn cached_entries(&self) -> usize {
        self.cache.len().await
    }

    /// Use-case text for one class: cache, then generator, then fallback.
    /// Fallback text is cached too so a flapping generator is not hammered.
    pub async fn describe(&self, class_label: &str) -> String {
        if let Some(text) = self.cache.get(class_label).await {
            debug!("Use-case cache hit for {}", class_label);
            return text;
        }

        let text = match &self.generator {
            Some(generator) => match generator.generate(class_label).await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Use-case generation failed for {}: {}", class_label, e);
                    fallback_description(class_label)
                }
            },
            None => fallback_description(class_label),
        };

        self.cache.put(class_label, text.clone()).await;
        text
    }

    /// Use-case text for several classes, deduplicated by label.
    pub async fn describe_batch(&self, class_labels: &[String]) -> HashMap<String, String> {
        let mut results = HashMap::new();
        for label in class_labels {
            if !results.contains_key(label) {
                let text = self.describe(label).await;
                results.insert(label.clone(), text);
            }
        }
        results
    }
}
