//! Application configuration. JSON on disk; every field has a default.

use crate::report::DisplayMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Reference dataset used to build the category code tables
    pub dataset_path: PathBuf,
    /// Pre-trained classifier
    pub model: ModelConfig,
    /// Default display mode when the caller does not pick one
    pub display: DisplayMode,
    /// Logging
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub enabled: bool,
    /// Path to ONNX classifier
    pub model_path: PathBuf,
    /// Path to column manifest (JSON)
    pub manifest_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("data/stroke_reference.csv"),
            model: ModelConfig::default(),
            display: DisplayMode::Summary,
            log: LogConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            model_path: PathBuf::from("stroke_model.onnx"),
            manifest_path: PathBuf::from("model_columns.json"),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load from JSON file if present; otherwise return default
    pub fn load(path: &std::path::Path) -> Self {
        if path.exists() {
            if let Ok(data) = std::fs::read_to_string(path) {
                if let Ok(c) = serde_json::from_str::<AppConfig>(&data) {
                    return c;
                }
            }
        }
        Self::default()
    }
}
