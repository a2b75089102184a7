//! Viewport-driven canvas sizing.

use crate::config::CanvasConfig;
use std::fmt;

/// Size of the display area the canvas is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Canvas dimensions in device pixels. Never smaller than 1×1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Truncates fractional dimensions the way a raster canvas does when
    /// assigned a non-integer size.
    pub fn from_f64(width: f64, height: f64) -> Self {
        // Absorb float noise such as 269.99999999999997 before truncating.
        let truncate = |v: f64| {
            if v.is_finite() && v > 0.0 {
                (v + 1e-9).floor().min(u32::MAX as f64) as u32
            } else {
                0
            }
        };
        Self::new(truncate(width), truncate(height))
    }
}

impl fmt::Display for CanvasSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Computes the canvas size for a viewport.
///
/// Starts from the base size, then applies the width limit and afterwards the
/// height limit. Each step scales both dimensions by the same ratio, so the
/// base aspect ratio is kept and both limits hold once the second step runs.
pub fn fit_canvas(viewport: Viewport, config: &CanvasConfig) -> CanvasSize {
    let max_width = viewport.width * config.max_width_fraction;
    let max_height = viewport.height * config.max_height_fraction;

    let mut width = config.base_width as f64;
    let mut height = config.base_height as f64;

    if max_width < width {
        let ratio = max_width / width;
        width = max_width;
        height *= ratio;
    }

    if max_height < height {
        let ratio = max_height / height;
        height = max_height;
        width *= ratio;
    }

    CanvasSize::from_f64(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fit(width: f64, height: f64) -> CanvasSize {
        fit_canvas(Viewport::new(width, height), &CanvasConfig::default())
    }

    #[test]
    fn large_viewports_keep_base_size() {
        assert_eq!(fit(1920.0, 1080.0), CanvasSize::new(800, 600));
        // Exactly at both limits: 0.9 * 889 >= 800 and 0.8 * 750 == 600
        assert_eq!(fit(889.0, 750.0), CanvasSize::new(800, 600));
        assert_eq!(fit(5000.0, 5000.0), CanvasSize::new(800, 600));
    }

    #[test]
    fn narrow_viewport_binds_width_first() {
        assert_eq!(fit(400.0, 1000.0), CanvasSize::new(360, 270));
    }

    #[test]
    fn short_viewport_binds_height() {
        assert_eq!(fit(1920.0, 500.0), CanvasSize::new(533, 400));
    }

    #[test]
    fn both_limits_bind_in_sequence() {
        // Width step: 0.9 * 600 = 540 -> 540x405. Height step: 0.8 * 400 = 320
        // -> ratio 320/405 -> 426.67x320.
        assert_eq!(fit(600.0, 400.0), CanvasSize::new(426, 320));
    }

    #[test]
    fn result_respects_both_limits_for_extreme_viewports() {
        let viewports = [
            (320.0, 100.0),
            (3000.0, 40.0),
            (50.0, 4000.0),
            (768.0, 1024.0),
            (1024.0, 300.0),
            (2.0, 2.0),
        ];
        for (vw, vh) in viewports {
            let size = fit(vw, vh);
            assert!(size.width as f64 <= (vw * 0.9).max(1.0), "{vw}x{vh} -> {size}");
            assert!(size.height as f64 <= (vh * 0.8).max(1.0), "{vw}x{vh} -> {size}");
        }
    }

    #[test]
    fn degenerate_viewport_yields_minimum_size() {
        assert_eq!(fit(0.0, 0.0), CanvasSize::new(1, 1));
    }

    #[test]
    fn custom_base_size_is_respected() {
        let config = CanvasConfig {
            base_width: 1024,
            base_height: 768,
            ..CanvasConfig::default()
        };
        assert_eq!(
            fit_canvas(Viewport::new(4000.0, 4000.0), &config),
            CanvasSize::new(1024, 768)
        );
    }
}
