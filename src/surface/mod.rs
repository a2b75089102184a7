//! Drawing surface: owns the raster store and turns pointer input into strokes.
//!
//! The surface is configured from the layout controller through
//! [`SurfaceConfig`] and reacts to pointer events with a two-state machine
//! ([`DrawingState`]). Every operation is synchronous and a missing raster
//! store turns any request into a no-op.

mod raster;

pub use raster::RasterStore;

use log::{debug, warn};

use crate::draw::{self, Color, Stroke, StrokeStyle};
use crate::input::{PointerEvent, PointerKind, SurfaceBounds, Tool};
use crate::layout::CanvasSize;

/// Configuration the layout controller passes to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
    pub tool: Tool,
    pub color: Color,
    pub brush_size: u32,
}

impl SurfaceConfig {
    pub fn size(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }

    /// Stroke style for segments rendered under this configuration.
    pub fn stroke_style(&self) -> StrokeStyle {
        StrokeStyle {
            color: self.tool.stroke_color(self.color),
            width: self.brush_size,
        }
    }
}

/// Pointer state machine.
#[derive(Debug, Clone, Default)]
pub enum DrawingState {
    /// No stroke in progress
    #[default]
    Idle,
    /// Pointer is down inside the surface; holds the open polyline
    Stroking { stroke: Stroke },
}

/// The drawing surface and its raster store.
#[derive(Debug, Default)]
pub struct DrawingSurface {
    store: Option<RasterStore>,
    style: Option<StrokeStyle>,
    origin: (f64, f64),
    state: DrawingState,
}

impl DrawingSurface {
    /// Creates an unmounted surface with no raster store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies configuration from the layout controller.
    ///
    /// The first call allocates the raster store. A change of dimensions
    /// discards the store, including any stroke in progress, and allocates a
    /// blank white one. Tool, color and brush size only affect segments
    /// rendered afterward.
    pub fn configure(&mut self, config: SurfaceConfig) {
        let size = config.size();
        if self.store.as_ref().map(RasterStore::size) != Some(size) {
            self.reallocate(size);
        }
        self.style = Some(config.stroke_style());
    }

    /// Sets the on-screen position of the surface's top-left corner.
    pub fn set_origin(&mut self, left: f64, top: f64) {
        self.origin = (left, top);
    }

    /// On-screen rectangle of the surface, if it has a raster store.
    pub fn bounds(&self) -> Option<SurfaceBounds> {
        let size = self.store.as_ref()?.size();
        Some(SurfaceBounds::new(
            self.origin.0,
            self.origin.1,
            size.width as f64,
            size.height as f64,
        ))
    }

    pub fn store(&self) -> Option<&RasterStore> {
        self.store.as_ref()
    }

    pub fn size(&self) -> Option<CanvasSize> {
        self.store.as_ref().map(RasterStore::size)
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_stroking(&self) -> bool {
        matches!(self.state, DrawingState::Stroking { .. })
    }

    /// Current stroke style, once configured.
    pub fn style(&self) -> Option<StrokeStyle> {
        self.style
    }

    /// Dispatches a pointer event to the state machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event.kind {
            PointerKind::Down => self.pointer_down(event.client_x, event.client_y),
            PointerKind::Move => self.pointer_move(event.client_x, event.client_y),
            PointerKind::Up | PointerKind::Leave => self.end_stroke(),
        }
    }

    /// Starts a stroke at the pointer position if it lies inside the surface.
    ///
    /// No mark is made until the pointer moves.
    pub fn pointer_down(&mut self, client_x: f64, client_y: f64) {
        let Some(bounds) = self.bounds() else {
            debug!("Pointer down before the raster store exists; ignoring");
            return;
        };
        if !bounds.contains(client_x, client_y) {
            return;
        }

        let start = bounds.to_local(client_x, client_y);
        self.state = DrawingState::Stroking {
            stroke: Stroke::begin(start),
        };
    }

    /// Extends the open stroke and renders the new segment immediately.
    ///
    /// A move outside the surface bounds ends the stroke, as leaving the
    /// surface does.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) {
        if !self.is_stroking() {
            return;
        }
        let (Some(bounds), Some(style)) = (self.bounds(), self.style) else {
            return;
        };
        if !bounds.contains(client_x, client_y) {
            self.end_stroke();
            return;
        }

        let point = bounds.to_local(client_x, client_y);
        let DrawingState::Stroking { stroke } = &mut self.state else {
            return;
        };
        if let Some((from, to)) = stroke.extend(point)
            && let Some(ctx) = self.store.as_ref().and_then(RasterStore::context)
        {
            draw::render_segment(&ctx, from, to, style);
        }
    }

    /// Closes the open stroke. Harmless when no stroke is in progress.
    pub fn end_stroke(&mut self) {
        if let DrawingState::Stroking { stroke } = &self.state {
            debug!("Stroke finished with {} points", stroke.len());
        }
        self.state = DrawingState::Idle;
    }

    /// Fills the raster store with white. A no-op without a store.
    pub fn clear(&mut self) {
        match &self.store {
            Some(store) => store.clear(),
            None => debug!("Clear requested before the raster store exists; ignoring"),
        }
    }

    /// Drops the raster store, as when the surface is unmounted.
    pub fn unmount(&mut self) {
        self.state = DrawingState::Idle;
        self.store = None;
    }

    fn reallocate(&mut self, size: CanvasSize) {
        if self.is_stroking() {
            debug!("Resize to {} interrupted the current stroke", size);
        }
        self.state = DrawingState::Idle;
        self.store = match RasterStore::new(size) {
            Ok(store) => Some(store),
            Err(err) => {
                warn!("Could not allocate {} raster store: {}", size, err);
                None
            }
        };
    }
}
