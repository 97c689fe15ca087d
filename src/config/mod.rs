// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Node configuration: TOML file plus environment-variable overrides
//!
//! Everything the estimators consume (camera geometry, sizing heuristics,
//! reference object, known-size table) is loaded here once at startup and
//! passed around read-only. The estimation core never touches ambient state.

pub mod camera;
pub mod known_sizes;

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

pub use camera::{CameraGeometry, ReferenceObject, SizingTunables};
pub use known_sizes::{KnownObjectSize, KnownSizeTable};

/// Environment variable naming the TOML config file.
pub const CONFIG_PATH_ENV: &str = "SIZEWISE_CONFIG";

fn default_api_port() -> u16 {
    8080
}

fn default_use_case_model() -> String {
    "gemini-2.5-flash-lite".to_string()
}

fn default_cache_capacity() -> usize {
    256
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("known-size table contains no classes")]
    EmptyKnownSizeTable,
}

/// Settings for the use-case text generation sidecar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UseCaseSettings {
    /// OpenAI-compatible chat endpoint; `None` disables the generator and
    /// serves fallback descriptions only.
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default = "default_use_case_model")]
    pub model: String,
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for UseCaseSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            model: default_use_case_model(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

/// Top-level node configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeConfig {
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    #[serde(default)]
    pub reference: ReferenceObject,
    #[serde(default)]
    pub camera: CameraGeometry,
    #[serde(default)]
    pub tunables: SizingTunables,
    /// Optional path to a known-size table TOML file; the built-in table is
    /// used when unset.
    #[serde(default)]
    pub known_sizes_path: Option<String>,
    #[serde(default)]
    pub use_cases: UseCaseSettings,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            api_port: default_api_port(),
            reference: ReferenceObject::default(),
            camera: CameraGeometry::default(),
            tunables: SizingTunables::default(),
            known_sizes_path: None,
            use_cases: UseCaseSettings::default(),
        }
    }
}

impl NodeConfig {
    /// Load configuration: `SIZEWISE_CONFIG` TOML file if set, then
    /// environment-variable overrides for the common knobs.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match env::var(CONFIG_PATH_ENV) {
            Ok(path) => {
                info!("Loading config from {}", path);
                Self::from_file(&path)?
            }
            Err(_) => Self::default(),
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse a config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&text)?)
    }

    /// Environment variables win over the file, matching how the node is
    /// deployed in containers.
    pub fn apply_env_overrides(&mut self) {
        if let Some(port) = env::var("API_PORT").ok().and_then(|v| v.parse().ok()) {
            self.api_port = port;
        }
        if let Ok(path) = env::var("SIZEWISE_KNOWN_SIZES") {
            self.known_sizes_path = Some(path);
        }
        if let Ok(class) = env::var("SIZEWISE_REFERENCE_CLASS") {
            self.reference.class_label = class;
        }
        if let Ok(endpoint) = env::var("USE_CASE_ENDPOINT") {
            self.use_cases.endpoint = Some(endpoint);
        }
        if let Ok(model) = env::var("USE_CASE_MODEL") {
            self.use_cases.model = model;
        }
    }

    /// Resolve the known-size table: configured file or built-in defaults.
    pub fn known_size_table(&self) -> Result<KnownSizeTable, ConfigError> {
        match &self.known_sizes_path {
            Some(path) => KnownSizeTable::load(path),
            None => Ok(KnownSizeTable::default()),
        }
    }
}
