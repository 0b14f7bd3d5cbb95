use std::path::Path;

use serde::Deserialize;

use crate::error::{RectGridError, Result};

const MIN_CELL_SIZE: i32 = 20;
const MAX_TABLE_WIDTH: i32 = 500;
const MAX_GAP: i32 = 10;

/// Sizing knobs for the adjuster and the renderer.
///
/// `min_cell_size` is the largest pixel size a cell may take; the name is
/// kept from the format's historical constant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_min_cell_size")]
    pub min_cell_size: i32,
    #[serde(default = "default_max_table_width")]
    pub max_table_width: i32,
    #[serde(default = "default_max_gap")]
    pub max_gap: i32,
}

fn default_min_cell_size() -> i32 {
    MIN_CELL_SIZE
}
fn default_max_table_width() -> i32 {
    MAX_TABLE_WIDTH
}
fn default_max_gap() -> i32 {
    MAX_GAP
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            min_cell_size: MIN_CELL_SIZE,
            max_table_width: MAX_TABLE_WIDTH,
            max_gap: MAX_GAP,
        }
    }
}

impl GridConfig {
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: GridConfig = toml::from_str(content)
            .map_err(|e| RectGridError::Config(format!("Failed to parse TOML: {}", e)))?;
        config.validate()
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: GridConfig = serde_yaml::from_str(content)
            .map_err(|e| RectGridError::Config(format!("Failed to parse YAML: {}", e)))?;
        config.validate()
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: GridConfig = serde_json::from_str(content)
            .map_err(|e| RectGridError::Config(format!("Failed to parse JSON: {}", e)))?;
        config.validate()
    }

    /// Load from a file, picking the format by extension. Unknown extensions
    /// try TOML first, then YAML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(RectGridError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| RectGridError::Config(format!("Failed to read config file: {}", e)))?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("toml") => Self::from_toml(&content),
            Some("yaml") | Some("yml") => Self::from_yaml(&content),
            Some("json") => Self::from_json(&content),
            _ => Self::from_toml(&content).or_else(|_| Self::from_yaml(&content)),
        }
    }

    pub fn validate(self) -> Result<Self> {
        if self.min_cell_size < 1 {
            return Err(RectGridError::Config(format!(
                "min_cell_size must be at least 1, got {}",
                self.min_cell_size
            )));
        }
        if self.max_table_width < 1 {
            return Err(RectGridError::Config(format!(
                "max_table_width must be at least 1, got {}",
                self.max_table_width
            )));
        }
        if self.max_gap < 0 {
            return Err(RectGridError::Config(format!(
                "max_gap must not be negative, got {}",
                self.max_gap
            )));
        }
        Ok(self)
    }
}
