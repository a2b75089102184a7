//! Stroke style and the open-stroke point accumulator.

use super::color::Color;

/// A position in surface-local coordinates (pixels from the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Style applied when a segment is rendered.
///
/// Caps and joins are always round, so only color and width vary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke color (already resolved for the eraser)
    pub color: Color,
    /// Line width in pixels
    pub width: u32,
}

/// The polyline of the stroke currently in progress.
///
/// Points are raw pointer samples; consecutive points are joined by straight
/// segments with no interpolation.
#[derive(Debug, Clone, Default)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    /// Starts a stroke at `start`.
    pub fn begin(start: Point) -> Self {
        Self {
            points: vec![start],
        }
    }

    /// Appends a sample and returns the segment it closes, `(previous, point)`.
    pub fn extend(&mut self, point: Point) -> Option<(Point, Point)> {
        let previous = self.points.last().copied();
        self.points.push(point);
        previous.map(|prev| (prev, point))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
