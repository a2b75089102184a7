//! Composition of the layout controller and the drawing surface.
//!
//! The controller's [`SurfaceConfig`](crate::surface::SurfaceConfig) is pushed
//! down to the surface after every change, so the surface always renders with
//! the current tool, color and brush size.

use std::path::PathBuf;

use log::info;

use crate::config::Config;
use crate::draw::Color;
use crate::export::{ExportError, ExportFormat};
use crate::input::{PointerEvent, Tool};
use crate::layout::{CanvasSize, LayoutController, MenuPresentation, Viewport};
use crate::surface::DrawingSurface;

/// One canvas session: a controller and the surface it drives.
#[derive(Debug)]
pub struct App {
    controller: LayoutController,
    surface: DrawingSurface,
}

impl App {
    /// Creates an app whose surface is not mounted yet.
    pub fn new(config: &Config) -> Self {
        Self {
            controller: LayoutController::new(config),
            surface: DrawingSurface::new(),
        }
    }

    /// Sizes the canvas for the initial viewport and allocates the surface.
    pub fn mount(&mut self, viewport: Viewport) -> CanvasSize {
        let size = self.resize(viewport);
        info!("Canvas mounted at {}", size);
        size
    }

    /// Handles a viewport change. The surface is reset only if the canvas
    /// dimensions actually change.
    pub fn resize(&mut self, viewport: Viewport) -> CanvasSize {
        let size = self.controller.resize(viewport);
        self.sync();
        size
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.controller.set_tool(tool);
        self.sync();
    }

    pub fn set_color(&mut self, color: Color) {
        self.controller.set_color(color);
        self.sync();
    }

    pub fn set_brush_size(&mut self, size: u32) -> u32 {
        let applied = self.controller.set_brush_size(size);
        self.sync();
        applied
    }

    /// Places the surface's top-left corner in client coordinates.
    pub fn set_surface_origin(&mut self, left: f64, top: f64) {
        self.surface.set_origin(left, top);
    }

    pub fn pointer(&mut self, event: PointerEvent) {
        self.surface.handle_pointer(event);
    }

    pub fn clear(&mut self) {
        self.controller.clear(&mut self.surface);
    }

    pub fn export(&self, format: ExportFormat) -> Result<Option<PathBuf>, ExportError> {
        self.controller.export(&self.surface, format)
    }

    /// Exports in the configured default format.
    pub fn export_default(&self) -> Result<Option<PathBuf>, ExportError> {
        self.export(self.controller.default_format())
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.controller.toggle_menu()
    }

    pub fn dismiss_menu(&mut self) {
        self.controller.dismiss_menu();
    }

    pub fn menu_presentation(&self) -> MenuPresentation {
        self.controller.menu_presentation()
    }

    pub fn controller(&self) -> &LayoutController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut LayoutController {
        &mut self.controller
    }

    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    fn sync(&mut self) {
        // Configuration only reaches a mounted surface; before the first
        // viewport there is nothing to draw on.
        if self.controller.viewport().is_some() {
            self.surface.configure(self.controller.surface_config());
        }
    }
}
