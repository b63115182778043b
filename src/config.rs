use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::model::DEFAULT_PREVIEW_ROWS;
use crate::state::Page;

/// Optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "rusty-dash.json";

/// Startup settings. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Rows shown in the data preview.
    pub preview_rows: usize,
    pub start_page: Page,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 1200.0,
            window_height: 800.0,
            preview_rows: DEFAULT_PREVIEW_ROWS,
            start_page: Page::Dashboard,
        }
    }
}

impl AppConfig {
    /// Parse a JSON settings document.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing settings JSON")
    }

    /// Read settings from `path`. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("loading {}", path.display()))
    }

    /// Like [`AppConfig::load`], but logs problems and keeps the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring settings file: {e:#}");
                Self::default()
            }
        }
    }
}
