//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::export::ExportFormat;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Canvas sizing rules.
///
/// The canvas keeps the aspect ratio of the base size and shrinks to fit the
/// given fractions of the viewport.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Preferred canvas width in pixels when the viewport is large enough
    #[serde(default = "default_base_width")]
    pub base_width: u32,

    /// Preferred canvas height in pixels when the viewport is large enough
    #[serde(default = "default_base_height")]
    pub base_height: u32,

    /// Largest share of the viewport width the canvas may occupy (0.1 - 1.0)
    #[serde(default = "default_max_width_fraction")]
    pub max_width_fraction: f64,

    /// Largest share of the viewport height the canvas may occupy (0.1 - 1.0)
    #[serde(default = "default_max_height_fraction")]
    pub max_height_fraction: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            base_width: default_base_width(),
            base_height: default_base_height(),
            max_width_fraction: default_max_width_fraction(),
            max_height_fraction: default_max_height_fraction(),
        }
    }
}

/// Drawing defaults applied when the canvas is mounted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Initial tool (pen or eraser)
    #[serde(default)]
    pub default_tool: Tool,

    /// Initial pen color - a named color, a hex string like `"#000000"`,
    /// or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Initial brush size in pixels (valid range: 1 - 50)
    #[serde(default = "default_brush_size")]
    pub default_brush_size: u32,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: Tool::default(),
            default_color: default_color(),
            default_brush_size: default_brush_size(),
        }
    }
}

/// UI presentation preferences.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Viewport width (inclusive) at or below which tool controls move into
    /// the overlay menu
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
        }
    }
}

/// Export destination settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported images are written to.
    /// Defaults to the user's download directory, or the working directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Format used when an export is requested without one
    #[serde(default)]
    pub default_format: ExportFormat,
}

impl ExportConfig {
    /// Resolves the export directory, expanding a leading `~/`.
    pub fn resolved_directory(&self) -> PathBuf {
        match &self.directory {
            Some(dir) => crate::export::expand_tilde(&dir.to_string_lossy()),
            None => dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

// Default value functions

fn default_base_width() -> u32 {
    800
}

fn default_base_height() -> u32 {
    600
}

fn default_max_width_fraction() -> f64 {
    0.9
}

fn default_max_height_fraction() -> f64 {
    0.8
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#000000".to_string())
}

fn default_brush_size() -> u32 {
    5
}

fn default_mobile_breakpoint() -> u32 {
    768
}
