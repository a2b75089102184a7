//! Configuration file support for aicanvas.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/aicanvas/config.toml`. Settings include canvas sizing rules,
//! drawing defaults, the menu breakpoint, and the export destination.
//!
//! If no config file exists, the defaults match the classic 800×600 canvas with a
//! black 5px pen.

pub mod enums;
pub mod types;

pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, ExportConfig, UiConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::layout::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};

/// Largest base dimension accepted from the config file.
const MAX_BASE_DIMENSION: u32 = 8192;

/// Main configuration structure containing all user settings.
///
/// All fields have defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// base_width = 800
/// base_height = 600
/// max_width_fraction = 0.9
/// max_height_fraction = 0.8
///
/// [drawing]
/// default_tool = "pen"
/// default_color = "#000000"
/// default_brush_size = 5
///
/// [ui]
/// mobile_breakpoint = 768
///
/// [export]
/// directory = "~/Pictures"
/// default_format = "png"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas sizing rules
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Tool, color and brush size defaults
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// UI presentation preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Export destination
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `canvas.base_width`, `canvas.base_height`: 1 - 8192
    /// - `canvas.max_width_fraction`, `canvas.max_height_fraction`: 0.1 - 1.0
    /// - `drawing.default_brush_size`: 1 - 50
    pub fn validate_and_clamp(&mut self) {
        if !(1..=MAX_BASE_DIMENSION).contains(&self.canvas.base_width) {
            log::warn!(
                "Invalid base_width {}, clamping to 1-{} range",
                self.canvas.base_width,
                MAX_BASE_DIMENSION
            );
            self.canvas.base_width = self.canvas.base_width.clamp(1, MAX_BASE_DIMENSION);
        }

        if !(1..=MAX_BASE_DIMENSION).contains(&self.canvas.base_height) {
            log::warn!(
                "Invalid base_height {}, clamping to 1-{} range",
                self.canvas.base_height,
                MAX_BASE_DIMENSION
            );
            self.canvas.base_height = self.canvas.base_height.clamp(1, MAX_BASE_DIMENSION);
        }

        // NaN fails the range check and clamps to the lower bound via max/min.
        if !(0.1..=1.0).contains(&self.canvas.max_width_fraction) {
            log::warn!(
                "Invalid max_width_fraction {:.2}, clamping to 0.1-1.0 range",
                self.canvas.max_width_fraction
            );
            self.canvas.max_width_fraction = self.canvas.max_width_fraction.max(0.1).min(1.0);
        }

        if !(0.1..=1.0).contains(&self.canvas.max_height_fraction) {
            log::warn!(
                "Invalid max_height_fraction {:.2}, clamping to 0.1-1.0 range",
                self.canvas.max_height_fraction
            );
            self.canvas.max_height_fraction = self.canvas.max_height_fraction.max(0.1).min(1.0);
        }

        if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&self.drawing.default_brush_size) {
            log::warn!(
                "Invalid default_brush_size {}, clamping to {}-{} range",
                self.drawing.default_brush_size,
                MIN_BRUSH_SIZE,
                MAX_BRUSH_SIZE
            );
            self.drawing.default_brush_size = self
                .drawing
                .default_brush_size
                .clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/aicanvas/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("aicanvas");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or if the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses a TOML document without validation.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Returns the JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
