//! Slide configuration file handling
//!
//! `slide.toml` holds the panel tuning (`[panel]`, see [`PanelConfig`]) and
//! the simulated screen (`[screen]`). Every key is optional.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use slide_core::PanelConfig;
use std::fs;
use std::path::Path;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "slide.toml";

/// Top-level contents of `slide.toml`
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SlideConfig {
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub panel: PanelConfig,
}

/// Simulated screen the panel lives on
#[derive(Debug, Deserialize, Serialize)]
pub struct ScreenConfig {
    /// Container height in points
    #[serde(default = "default_container_height")]
    pub container_height: f32,
    /// Animation frames per second
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
}

fn default_container_height() -> f32 {
    844.0
}

fn default_frame_rate() -> u32 {
    60
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            container_height: default_container_height(),
            frame_rate: default_frame_rate(),
        }
    }
}

impl SlideConfig {
    /// Load from an explicit file, or `slide.toml` in the working directory
    ///
    /// Falls back to defaults when no path is given and no file exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None if Path::new(CONFIG_FILE).exists() => Self::load_file(Path::new(CONFIG_FILE)),
            None => {
                tracing::debug!("No {} found, using defaults", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Parse and validate TOML contents
    pub fn parse(content: &str) -> Result<Self> {
        let config: SlideConfig = toml::from_str(content)?;
        config.panel.validate()?;
        if config.screen.frame_rate == 0 {
            anyhow::bail!("screen.frame_rate must be at least 1");
        }
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize slide config")
    }
}
