//! Scripted canvas sessions.
//!
//! A script is a list of UI events (viewport changes, pointer input, control
//! changes, clear and export) replayed against an [`App`]. Scripts are TOML or
//! JSON, chosen by file extension.
//!
//! ```toml
//! viewport = [1280.0, 800.0]
//!
//! [[steps]]
//! action = "set-color"
//! color = "#ff0000"
//!
//! [[steps]]
//! action = "stroke"
//! points = [[10.0, 10.0], [50.0, 50.0]]
//!
//! [[steps]]
//! action = "export"
//! format = "png"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::app::App;
use crate::config::ColorSpec;
use crate::export::ExportFormat;
use crate::input::{PointerEvent, Tool};
use crate::layout::Viewport;

/// A replayable session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    /// Viewport applied before the first step, as `[width, height]`
    #[serde(default)]
    pub viewport: Option<[f64; 2]>,

    /// Client position of the surface's top-left corner, as `[left, top]`
    #[serde(default)]
    pub surface_origin: Option<[f64; 2]>,

    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One UI event. Pointer coordinates are client coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum Step {
    Resize { width: f64, height: f64 },
    SetOrigin { x: f64, y: f64 },
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    PointerLeave,
    /// Press at the first point, move through the rest, release at the last.
    Stroke { points: Vec<[f64; 2]> },
    SetTool { tool: Tool },
    SetColor { color: ColorSpec },
    SetBrushSize { size: u32 },
    Clear,
    /// Without a format, the configured default is used.
    Export {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<ExportFormat>,
    },
    ToggleMenu,
    DismissMenu,
}

/// What a replay produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplayReport {
    /// Steps executed
    pub steps: usize,
    /// Files written by export steps, in order
    pub exported: Vec<PathBuf>,
}

impl Script {
    /// Reads a script, parsing JSON for `.json` files and TOML otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let script = if is_json {
            serde_json::from_str(&source)
                .with_context(|| format!("Failed to parse JSON script {}", path.display()))?
        } else {
            toml::from_str(&source)
                .with_context(|| format!("Failed to parse TOML script {}", path.display()))?
        };

        Ok(script)
    }

    /// Replays every step against `app`.
    ///
    /// Stops at the first export that fails; drawing steps never fail.
    pub fn run(&self, app: &mut App) -> Result<ReplayReport> {
        if let Some([left, top]) = self.surface_origin {
            app.set_surface_origin(left, top);
        }
        if let Some([width, height]) = self.viewport {
            app.resize(Viewport::new(width, height));
        }

        let mut report = ReplayReport::default();
        for (index, step) in self.steps.iter().enumerate() {
            debug!("Step {}: {:?}", index + 1, step);
            if let Some(path) = apply_step(app, step)
                .with_context(|| format!("Step {} ({:?}) failed", index + 1, step))?
            {
                report.exported.push(path);
            }
            report.steps += 1;
        }

        info!(
            "Replayed {} steps, {} exports",
            report.steps,
            report.exported.len()
        );
        Ok(report)
    }
}

fn apply_step(app: &mut App, step: &Step) -> Result<Option<PathBuf>> {
    match step {
        Step::Resize { width, height } => {
            app.resize(Viewport::new(*width, *height));
        }
        Step::SetOrigin { x, y } => app.set_surface_origin(*x, *y),
        Step::PointerDown { x, y } => app.pointer(PointerEvent::down(*x, *y)),
        Step::PointerMove { x, y } => app.pointer(PointerEvent::moved(*x, *y)),
        Step::PointerUp { x, y } => app.pointer(PointerEvent::up(*x, *y)),
        Step::PointerLeave => app.pointer(PointerEvent::leave()),
        Step::Stroke { points } => {
            if let Some(([x0, y0], rest)) = points.split_first() {
                app.pointer(PointerEvent::down(*x0, *y0));
                for [x, y] in rest {
                    app.pointer(PointerEvent::moved(*x, *y));
                }
                let [x, y] = points.last().copied().unwrap_or([*x0, *y0]);
                app.pointer(PointerEvent::up(x, y));
            }
        }
        Step::SetTool { tool } => app.set_tool(*tool),
        Step::SetColor { color } => app.set_color(color.to_color()),
        Step::SetBrushSize { size } => {
            app.set_brush_size(*size);
        }
        Step::Clear => app.clear(),
        Step::Export { format: Some(format) } => return Ok(app.export(*format)?),
        Step::Export { format: None } => return Ok(app.export_default()?),
        Step::ToggleMenu => {
            app.toggle_menu();
        }
        Step::DismissMenu => app.dismiss_menu(),
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::layout::{CanvasSize, MenuPresentation};

    fn app_in(dir: &Path) -> App {
        let mut app = App::new(&Config::default());
        app.controller_mut().set_export_dir(dir);
        app
    }

    #[test]
    fn parses_toml_steps() {
        let script: Script = toml::from_str(
            r##"
            viewport = [400.0, 1000.0]

            [[steps]]
            action = "set-tool"
            tool = "eraser"

            [[steps]]
            action = "set-color"
            color = "#00ff00"

            [[steps]]
            action = "pointer-leave"

            [[steps]]
            action = "export"
            format = "jpeg"
            "##,
        )
        .unwrap();

        assert_eq!(script.viewport, Some([400.0, 1000.0]));
        assert_eq!(
            script.steps,
            vec![
                Step::SetTool { tool: Tool::Eraser },
                Step::SetColor {
                    color: ColorSpec::Name("#00ff00".into())
                },
                Step::PointerLeave,
                Step::Export {
                    format: Some(ExportFormat::Jpeg)
                },
            ]
        );
    }

    #[test]
    fn parses_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(
            &path,
            r#"{"steps": [{"action": "set-brush-size", "size": 12}, {"action": "clear"}]}"#,
        )
        .unwrap();

        let script = Script::load(&path).unwrap();
        assert_eq!(
            script.steps,
            vec![Step::SetBrushSize { size: 12 }, Step::Clear]
        );
    }

    #[test]
    fn run_draws_and_exports() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());

        let script = Script {
            viewport: Some([1920.0, 1080.0]),
            surface_origin: Some([20.0, 20.0]),
            steps: vec![
                Step::SetColor {
                    color: ColorSpec::Name("red".into()),
                },
                Step::Stroke {
                    points: vec![[30.0, 30.0], [120.0, 30.0]],
                },
                Step::Export {
                    format: Some(ExportFormat::Png),
                },
            ],
        };

        let report = script.run(&mut app).unwrap();
        assert_eq!(report.steps, 3);
        assert_eq!(report.exported, vec![dir.path().canonicalize().unwrap().join("canvas.png")]);

        let image = image::open(&report.exported[0]).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (800, 600));
        assert_eq!(image.get_pixel(50, 10).0, [255, 0, 0]);
        assert_eq!(image.get_pixel(50, 100).0, [255, 255, 255]);
    }

    #[test]
    fn resize_and_menu_steps_reach_the_app() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());

        let script = Script {
            viewport: None,
            surface_origin: None,
            steps: vec![
                Step::Resize {
                    width: 400.0,
                    height: 1000.0,
                },
                Step::ToggleMenu,
            ],
        };
        script.run(&mut app).unwrap();

        assert_eq!(app.surface().size(), Some(CanvasSize::new(360, 270)));
        assert_eq!(
            app.menu_presentation(),
            MenuPresentation::Overlay { open: true }
        );
    }

    #[test]
    fn export_without_format_uses_configured_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.export.default_format = ExportFormat::Webp;
        let mut app = App::new(&config);
        app.controller_mut().set_export_dir(dir.path());

        let script: Script = toml::from_str(
            r#"
            viewport = [1920.0, 1080.0]

            [[steps]]
            action = "export"
            "#,
        )
        .unwrap();
        assert_eq!(script.steps, vec![Step::Export { format: None }]);

        let report = script.run(&mut app).unwrap();
        assert_eq!(
            report.exported,
            vec![dir.path().canonicalize().unwrap().join("canvas.webp")]
        );
        let image = image::open(&report.exported[0]).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (800, 600));
    }

    #[test]
    fn export_before_mount_produces_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(dir.path());
        let script = Script {
            steps: vec![Step::Export {
                format: Some(ExportFormat::Webp),
            }],
            ..Script::default()
        };

        let report = script.run(&mut app).unwrap();
        assert_eq!(report.steps, 1);
        assert!(report.exported.is_empty());
    }
}
