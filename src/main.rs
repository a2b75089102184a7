use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use aicanvas::export::ExportFormat;
use aicanvas::layout::{Viewport, fit_canvas};
use aicanvas::replay::Script;
use aicanvas::{App, Config};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("AICANVAS_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "aicanvas")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Freehand drawing canvas with pen, eraser and raster export"
)]
struct Cli {
    /// Config file to use instead of ~/.config/aicanvas/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Viewport the canvas is laid out in
    #[arg(long, value_name = "WxH", default_value = "1920x1080", value_parser = parse_viewport)]
    viewport: Viewport,

    /// Session script to replay (TOML, or JSON with a .json extension)
    #[arg(long, short = 's', value_name = "PATH")]
    script: Option<PathBuf>,

    /// Export the canvas when done (png, jpeg or webp; repeatable).
    /// Without a value the configured default format is used.
    #[arg(
        long,
        short = 'e',
        value_name = "FORMAT",
        num_args = 0..=1,
        default_missing_value = "default",
        value_parser = parse_format
    )]
    export: Vec<Option<ExportFormat>>,

    /// Directory exports are written to (overrides the config file)
    #[arg(long, short = 'o', value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Print the canvas size fitted to the viewport and exit
    #[arg(long, action = ArgAction::SetTrue)]
    print_size: bool,
}

fn parse_viewport(value: &str) -> Result<Viewport, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{value}'"))?;
    let width: f64 = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid viewport width '{width}'"))?;
    let height: f64 = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid viewport height '{height}'"))?;
    if !(width > 0.0 && height > 0.0) {
        return Err(format!("viewport must be positive, got '{value}'"));
    }
    Ok(Viewport::new(width, height))
}

/// `None` stands for the bare `--export` form.
fn parse_format(value: &str) -> Result<Option<ExportFormat>, String> {
    if value.eq_ignore_ascii_case("default") {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|err: aicanvas::export::ExportError| err.to_string())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if cli.print_size {
        println!("{}", fit_canvas(cli.viewport, &config.canvas));
        return Ok(());
    }

    if cli.script.is_none() && cli.export.is_empty() {
        println!("aicanvas: Freehand drawing canvas with pen, eraser and raster export");
        println!();
        println!("Usage:");
        println!("  aicanvas --script session.toml          Replay a drawing session");
        println!("  aicanvas --script session.toml -e png   Replay, then export canvas.png");
        println!("  aicanvas --export                       Export a blank canvas in the default format");
        println!("  aicanvas --viewport 1280x800 --print-size");
        println!("  aicanvas --help                         Show all options");
        return Ok(());
    }

    let mut app = App::new(&config);
    if let Some(dir) = &cli.out_dir {
        app.controller_mut().set_export_dir(dir);
    }

    let size = app.mount(cli.viewport);
    log::info!(
        "Viewport {}x{} -> canvas {}",
        cli.viewport.width,
        cli.viewport.height,
        size
    );

    let mut exported = Vec::new();

    if let Some(path) = &cli.script {
        let script = Script::load(path)?;
        let report = script
            .run(&mut app)
            .with_context(|| format!("Replay of {} failed", path.display()))?;
        exported.extend(report.exported);
    }

    for requested in &cli.export {
        let format = requested.unwrap_or_else(|| app.controller().default_format());
        match app
            .export(format)
            .with_context(|| format!("Failed to export {format}"))?
        {
            Some(path) => exported.push(path),
            None => log::warn!("Nothing to export as {format}; canvas is not mounted"),
        }
    }

    for path in exported {
        println!("{}", path.display());
    }

    Ok(())
}
