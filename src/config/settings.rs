//! User settings for Trackify
//!
//! Manages user preferences such as the currency symbol, the default view
//! and the default export format.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::paths::TrackifyPaths;
use crate::error::TrackifyError;

/// The two mutually exclusive presentation modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Statistics, budgets and the filtered expense list
    #[default]
    Overview,
    /// Charts and the full expense list
    Analytics,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overview => write!(f, "overview"),
            Self::Analytics => write!(f, "analytics"),
        }
    }
}

/// Export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Spreadsheet-compatible CSV
    #[default]
    Csv,
    /// JSON document with export metadata
    Json,
    /// YAML document with export metadata
    Yaml,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// User settings for Trackify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when displaying amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// View shown when no view is requested explicitly
    #[serde(default)]
    pub default_view: ViewMode,

    /// Format used by `export` when none is given
    #[serde(default)]
    pub export_format: ExportFormat,

    /// Width in characters of the longest chart bar
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Maximum number of rows printed by `list`
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_chart_width() -> usize {
    40
}

fn default_list_limit() -> usize {
    50
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_view: ViewMode::default(),
            export_format: ExportFormat::default(),
            chart_width: default_chart_width(),
            list_limit: default_list_limit(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackifyPaths) -> Result<Self, TrackifyError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TrackifyError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| TrackifyError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackifyPaths) -> Result<(), TrackifyError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TrackifyError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackifyError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
