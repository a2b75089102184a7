//! Pointer event types delivered to the drawing surface.

use crate::draw::Point;

/// Kind of pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Primary button pressed
    Down,
    /// Pointer moved (button state is not tracked here)
    Move,
    /// Primary button released
    Up,
    /// Pointer left the surface bounds
    Leave,
}

/// A pointer event in client (screen-space) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerEvent {
    pub fn new(kind: PointerKind, client_x: f64, client_y: f64) -> Self {
        Self {
            kind,
            client_x,
            client_y,
        }
    }

    pub fn down(client_x: f64, client_y: f64) -> Self {
        Self::new(PointerKind::Down, client_x, client_y)
    }

    pub fn moved(client_x: f64, client_y: f64) -> Self {
        Self::new(PointerKind::Move, client_x, client_y)
    }

    pub fn up(client_x: f64, client_y: f64) -> Self {
        Self::new(PointerKind::Up, client_x, client_y)
    }

    pub fn leave() -> Self {
        Self::new(PointerKind::Leave, 0.0, 0.0)
    }
}

/// On-screen rectangle occupied by the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceBounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Translates client coordinates into surface-local coordinates.
    pub fn to_local(&self, client_x: f64, client_y: f64) -> Point {
        Point::new(client_x - self.left, client_y - self.top)
    }

    /// Returns true if the client position lies inside the rectangle
    /// (right and bottom edges excluded).
    pub fn contains(&self, client_x: f64, client_y: f64) -> bool {
        client_x >= self.left
            && client_y >= self.top
            && client_x < self.left + self.width
            && client_y < self.top + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_local_subtracts_origin() {
        let bounds = SurfaceBounds::new(100.0, 40.0, 800.0, 600.0);
        assert_eq!(bounds.to_local(110.0, 50.0), Point::new(10.0, 10.0));
    }

    #[test]
    fn contains_excludes_far_edges() {
        let bounds = SurfaceBounds::new(0.0, 0.0, 10.0, 10.0);
        assert!(bounds.contains(0.0, 0.0));
        assert!(bounds.contains(9.5, 9.5));
        assert!(!bounds.contains(10.0, 5.0));
        assert!(!bounds.contains(-0.1, 5.0));
    }
}
