//! Owns user-facing tool configuration and canvas sizing.

use std::path::{Path, PathBuf};

use log::{debug, info};

use super::menu::{MenuPresentation, MenuState};
use super::sizing::{CanvasSize, Viewport, fit_canvas};
use crate::config::{CanvasConfig, Config};
use crate::draw::Color;
use crate::export::{self, ExportError, ExportFormat};
use crate::input::Tool;
use crate::surface::{DrawingSurface, SurfaceConfig};
use crate::util;

/// Smallest brush size the controls allow.
pub const MIN_BRUSH_SIZE: u32 = 1;
/// Largest brush size the controls allow.
pub const MAX_BRUSH_SIZE: u32 = 50;

/// Layout controller state.
///
/// Holds the selected tool, color, brush size and the canvas size derived from
/// the last viewport. It never holds the raster store; it hands a
/// [`SurfaceConfig`] to the surface and issues clear/export against it.
#[derive(Debug, Clone)]
pub struct LayoutController {
    canvas_config: CanvasConfig,
    mobile_breakpoint: u32,
    export_dir: PathBuf,
    default_format: ExportFormat,
    viewport: Option<Viewport>,
    canvas_size: CanvasSize,
    tool: Tool,
    color: Color,
    brush_size: u32,
    menu: MenuState,
}

impl LayoutController {
    /// Creates a controller from configuration defaults.
    ///
    /// Until the first [`resize`](Self::resize) the canvas has the base size.
    pub fn new(config: &Config) -> Self {
        Self {
            canvas_config: config.canvas.clone(),
            mobile_breakpoint: config.ui.mobile_breakpoint,
            export_dir: config.export.resolved_directory(),
            default_format: config.export.default_format,
            viewport: None,
            canvas_size: CanvasSize::new(config.canvas.base_width, config.canvas.base_height),
            tool: config.drawing.default_tool,
            color: config.drawing.default_color.to_color(),
            brush_size: config
                .drawing
                .default_brush_size
                .clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE),
            menu: MenuState::default(),
        }
    }

    /// Recomputes the canvas size for a new viewport and returns it.
    pub fn resize(&mut self, viewport: Viewport) -> CanvasSize {
        let size = fit_canvas(viewport, &self.canvas_config);
        if size != self.canvas_size {
            debug!(
                "Viewport {}x{} -> canvas {} (was {})",
                viewport.width, viewport.height, size, self.canvas_size
            );
        }
        self.viewport = Some(viewport);
        self.canvas_size = size;
        size
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            debug!("Tool: {} -> {}", self.tool, tool);
        }
        self.tool = tool;
    }

    pub fn set_color(&mut self, color: Color) {
        debug!("Color set to {} ({})", color, util::color_to_name(&color));
        self.color = color;
    }

    /// Sets the brush size, clamped to 1-50 as the slider control does.
    /// Returns the size actually applied.
    pub fn set_brush_size(&mut self, size: u32) -> u32 {
        let clamped = size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE);
        if clamped != size {
            debug!("Brush size {} clamped to {}", size, clamped);
        }
        self.brush_size = clamped;
        clamped
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// The color selected in the controls, regardless of tool.
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas_size
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    pub fn set_export_dir(&mut self, dir: impl Into<PathBuf>) {
        self.export_dir = dir.into();
    }

    /// Format used for exports that don't name one.
    pub fn default_format(&self) -> ExportFormat {
        self.default_format
    }

    /// Color strokes are painted with: the background for the eraser,
    /// otherwise the selected color.
    pub fn effective_color(&self) -> Color {
        self.tool.stroke_color(self.color)
    }

    /// Configuration handed down to the drawing surface.
    pub fn surface_config(&self) -> SurfaceConfig {
        SurfaceConfig {
            width: self.canvas_size.width,
            height: self.canvas_size.height,
            tool: self.tool,
            color: self.effective_color(),
            brush_size: self.brush_size,
        }
    }

    /// Fills the surface with white, discarding every stroke.
    pub fn clear(&self, surface: &mut DrawingSurface) {
        surface.clear();
    }

    /// Encodes the surface and saves it as `canvas.<ext>` in the export
    /// directory.
    ///
    /// Returns `Ok(None)` without writing anything when the surface has no
    /// raster store yet.
    pub fn export(
        &self,
        surface: &DrawingSurface,
        format: ExportFormat,
    ) -> Result<Option<PathBuf>, ExportError> {
        let Some(store) = surface.store() else {
            debug!("Export requested before the raster store exists; ignoring");
            return Ok(None);
        };

        let bytes = export::encode(store, format)?;
        let path = export::save_export(&bytes, &self.export_dir, format)?;
        info!("Exported canvas {} to {}", store.size(), path.display());
        Ok(Some(path))
    }

    /// Flips the overlay menu open/closed and returns the new state.
    pub fn toggle_menu(&mut self) -> bool {
        let open = self.menu.toggle();
        debug!("Menu {}", if open { "opened" } else { "closed" });
        open
    }

    pub fn dismiss_menu(&mut self) {
        self.menu.dismiss();
    }

    /// Presentation of the tool controls for the last known viewport.
    ///
    /// Before any viewport is known the sidebar is assumed.
    pub fn menu_presentation(&self) -> MenuPresentation {
        match self.viewport {
            Some(viewport) => self
                .menu
                .presentation(viewport.width, self.mobile_breakpoint),
            None => MenuPresentation::Sidebar,
        }
    }
}
