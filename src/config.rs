//! Configuration file support
//!
//! Loads configuration from `.boolretrc.toml` in the current directory or
//! `<config dir>/boolret/config.toml`.

use crate::error::RetrievalError;
use crate::index::types::IndexConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

const APP_NAME: &str = "boolret";
const LOCAL_CONFIG: &str = ".boolretrc.toml";
const CONFIG_FILE: &str = "config.toml";

/// Result output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colored output (auto-detected when unset)
    pub color: Option<bool>,
    /// Default output format (text or json)
    pub format: Option<String>,
    /// Print matched sentences instead of their source documents
    pub show_units: Option<bool>,
    /// Tokenization overrides
    pub index: IndexConfig,
}

impl Config {
    /// Load configuration from files
    ///
    /// Precedence (highest to lowest):
    /// 1. .boolretrc.toml in current directory
    /// 2. <config dir>/boolret/config.toml
    ///
    /// Files that exist but fail to load are handed back instead of logged,
    /// so the caller can set up logging from the loaded config first.
    pub fn discover() -> (Self, Vec<RetrievalError>) {
        let mut problems = Vec::new();
        let mut candidates = vec![PathBuf::from(LOCAL_CONFIG)];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(APP_NAME).join(CONFIG_FILE));
        }

        for path in candidates {
            match Self::load_from_path(&path) {
                Ok(Some(config)) => return (config, problems),
                Ok(None) => {}
                Err(e) => problems.push(e),
            }
        }

        (Self::default(), problems)
    }

    /// Read one config file. A missing file is `Ok(None)`.
    pub fn load_from_path(path: &Path) -> Result<Option<Self>, RetrievalError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map(Some)
            .map_err(|e| RetrievalError::Config {
                path: PathBuf::from(path),
                message: e.to_string(),
            })
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_ref()
            .and_then(|s| match s.to_lowercase().as_str() {
                "json" => Some(OutputFormat::Json),
                "text" => Some(OutputFormat::Text),
                _ => {
                    warn!("Unknown output format '{}' in config, using text", s);
                    None
                }
            })
    }

    /// Merge CLI flags with config (CLI wins)
    pub fn merge_format(&self, json_flag: bool) -> OutputFormat {
        if json_flag {
            OutputFormat::Json
        } else {
            self.output_format().unwrap_or_default()
        }
    }

    pub fn merge_color(&self, no_color_flag: bool) -> bool {
        !no_color_flag && self.color.unwrap_or(true)
    }

    pub fn merge_show_units(&self, units_flag: bool) -> bool {
        units_flag || self.show_units.unwrap_or(false)
    }
}
