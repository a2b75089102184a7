use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn aicanvas_cmd() -> Command {
    let mut cmd = Command::cargo_bin("aicanvas").expect("binary exists");
    // Keep any user config out of the way.
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("aicanvas-cli-tests"));
    cmd
}

#[test]
fn help_prints_usage() {
    aicanvas_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Freehand drawing canvas with pen, eraser and raster export",
        ));
}

#[test]
fn print_size_reports_fitted_canvas() {
    aicanvas_cmd()
        .args(["--viewport", "1920x500", "--print-size"])
        .assert()
        .success()
        .stdout("533x400\n");
}

#[test]
fn malformed_viewport_is_rejected() {
    aicanvas_cmd()
        .args(["--viewport", "wide", "--print-size"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected WIDTHxHEIGHT"));
}

#[test]
fn unknown_export_format_is_rejected() {
    aicanvas_cmd()
        .args(["--export", "gif"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported export format"));
}

#[test]
fn export_writes_blank_canvas() {
    let temp = TempDir::new().unwrap();

    aicanvas_cmd()
        .args(["--viewport", "400x1000", "--export", "png", "--out-dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("canvas.png"));

    let image = image::open(temp.path().join("canvas.png")).unwrap().to_rgb8();
    assert_eq!(image.dimensions(), (360, 270));
    assert!(image.pixels().all(|p| p.0 == [255, 255, 255]));
}

#[test]
fn bare_export_uses_configured_format() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    std::fs::write(
        &config,
        r#"
        [export]
        default_format = "webp"
        "#,
    )
    .unwrap();

    aicanvas_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--export", "--out-dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("canvas.webp"));

    assert!(temp.path().join("canvas.webp").exists());
    assert!(!temp.path().join("canvas.png").exists());
}

#[test]
fn script_replay_exports_every_requested_format() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("session.toml");
    std::fs::write(
        &script,
        r##"
        [[steps]]
        action = "set-color"
        color = "#0000ff"

        [[steps]]
        action = "set-brush-size"
        size = 8

        [[steps]]
        action = "stroke"
        points = [[10.0, 10.0], [200.0, 10.0]]

        [[steps]]
        action = "export"
        format = "jpeg"
        "##,
    )
    .unwrap();

    let out = temp.path().join("out");
    aicanvas_cmd()
        .arg("--script")
        .arg(&script)
        .args(["--export", "webp", "--out-dir"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("canvas.jpeg"))
        .stdout(predicate::str::contains("canvas.webp"));

    let webp = image::open(out.join("canvas.webp")).unwrap().to_rgb8();
    assert_eq!(webp.dimensions(), (800, 600));
    // WebP output is lossless.
    assert_eq!(webp.get_pixel(100, 10).0, [0, 0, 255]);
    assert!(out.join("canvas.jpeg").exists());
}

#[test]
fn missing_script_fails_with_path() {
    aicanvas_cmd()
        .args(["--script", "/nonexistent/session.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}
