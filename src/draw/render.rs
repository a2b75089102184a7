//! Cairo-based rendering for the raster store.

use super::color::Color;
use super::stroke::{Point, StrokeStyle};

/// Fills the entire target with an opaque color, replacing every pixel.
///
/// Uses the `Source` operator so prior content is discarded rather than
/// blended over.
pub fn fill_background(ctx: &cairo::Context, color: Color) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_rgb(color.r, color.g, color.b);
    if let Err(err) = ctx.paint() {
        log::debug!("Background fill failed: {err}");
    }
    let _ = ctx.restore();
}

/// Renders one straight segment of a freehand stroke.
///
/// Round caps make consecutive segments meet exactly as a round-joined
/// polyline would, so strokes can be drawn one segment per pointer sample.
pub fn render_segment(ctx: &cairo::Context, from: Point, to: Point, style: StrokeStyle) {
    let color = style.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(style.width as f64);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);

    if let Err(err) = ctx.stroke() {
        log::debug!("Segment stroke failed: {err}");
    }
}

