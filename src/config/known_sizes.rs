// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Known-size table: per-class average physical dimensions
//!
//! Loaded once at startup and shared read-only. New object classes are added
//! through configuration, never through code changes.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::detection::ShapeCategory;

/// Average physical dimensions and rough shape for one object class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KnownObjectSize {
    pub avg_width_cm: f64,
    pub avg_height_cm: f64,
    pub shape: ShapeCategory,
}

impl KnownObjectSize {
    pub const fn new(avg_width_cm: f64, avg_height_cm: f64, shape: ShapeCategory) -> Self {
        Self {
            avg_width_cm,
            avg_height_cm,
            shape,
        }
    }
}

/// Immutable lookup of per-class average sizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnownSizeTable {
    classes: HashMap<String, KnownObjectSize>,
}

impl KnownSizeTable {
    /// Build a table from explicit entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, KnownObjectSize)>,
        S: Into<String>,
    {
        Self {
            classes: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Parse a table from TOML text with `[classes.<Label>]` sections.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let table: KnownSizeTable = toml::from_str(text)?;
        if table.classes.is_empty() {
            return Err(ConfigError::EmptyKnownSizeTable);
        }
        Ok(table)
    }

    /// Load a table from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn get(&self, class_label: &str) -> Option<&KnownObjectSize> {
        self.classes.get(class_label)
    }

    pub fn contains(&self, class_label: &str) -> bool {
        self.classes.contains_key(class_label)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for KnownSizeTable {
    /// Built-in table covering the industrial-safety classes the deployed
    /// detector is trained on.
    fn default() -> Self {
        use ShapeCategory::*;
        Self::from_entries([
            // Gas cylinders and tanks
            ("NitrogenTank", KnownObjectSize::new(30.0, 150.0, Cylinder)),
            ("OxygenTank", KnownObjectSize::new(25.0, 90.0, Cylinder)),
            ("GasCylinder", KnownObjectSize::new(30.0, 120.0, Cylinder)),
            ("PropaneTank", KnownObjectSize::new(40.0, 60.0, Cylinder)),
            // Fire safety equipment
            ("FireExtinguisher", KnownObjectSize::new(20.0, 50.0, Cylinder)),
            ("FireHydrant", KnownObjectSize::new(40.0, 120.0, Cylinder)),
            ("FireAlarm", KnownObjectSize::new(15.0, 15.0, Box)),
            // Safety equipment
            ("FirstAidBox", KnownObjectSize::new(30.0, 40.0, Box)),
            ("FirstAidKit", KnownObjectSize::new(30.0, 40.0, Box)),
            ("SafetyCone", KnownObjectSize::new(30.0, 45.0, Cone)),
            ("SafetyVest", KnownObjectSize::new(50.0, 60.0, Cloth)),
            ("SafetySwitchPanel", KnownObjectSize::new(50.0, 70.0, Box)),
            ("EmergencyPhone", KnownObjectSize::new(20.0, 30.0, Box)),
            // Industrial equipment
            ("Compressor", KnownObjectSize::new(60.0, 90.0, Box)),
            ("Generator", KnownObjectSize::new(80.0, 60.0, Box)),
            ("ToolBox", KnownObjectSize::new(40.0, 25.0, Box)),
            // General objects
            ("Person", KnownObjectSize::new(50.0, 170.0, Person)),
            ("Vehicle", KnownObjectSize::new(200.0, 150.0, Vehicle)),
            ("Computer", KnownObjectSize::new(40.0, 30.0, Box)),
            ("CreditCard", KnownObjectSize::new(8.56, 5.4, Card)),
        ])
    }
}
