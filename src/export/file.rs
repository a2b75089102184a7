//! Writing encoded exports to disk.

use super::format::ExportFormat;
use super::types::ExportError;
use std::fs;
use std::path::{Path, PathBuf};

/// Ensure the export directory exists, creating it if necessary.
///
/// Returns the canonicalized path when it can be resolved.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Saves encoded image bytes as `canvas.<ext>` inside `directory`.
///
/// An existing file with the same name is overwritten.
pub fn save_export(
    image_data: &[u8],
    directory: &Path,
    format: ExportFormat,
) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(directory)?;
    let file_path = directory.join(format.filename());

    log::info!(
        "Saving {} export to: {} ({} bytes)",
        format.mime_type(),
        file_path.display(),
        image_data.len()
    );

    fs::write(&file_path, image_data)?;

    let written_size = fs::metadata(&file_path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(file_path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_export_uses_canvas_filename() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("downloads");

        let path = save_export(b"data", &nested, ExportFormat::Webp).unwrap();

        assert_eq!(path.file_name().unwrap(), "canvas.webp");
        assert_eq!(fs::read(&path).unwrap(), b"data");
    }

    #[test]
    fn save_export_overwrites_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        save_export(b"first", dir.path(), ExportFormat::Png).unwrap();
        let path = save_export(b"second", dir.path(), ExportFormat::Png).unwrap();
        assert_eq!(fs::read(path).unwrap(), b"second");
    }

    #[test]
    fn test_expand_tilde() {
        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));

        if dirs::home_dir().is_some() {
            let expanded = expand_tilde("~/Pictures");
            assert!(!expanded.to_string_lossy().starts_with('~'));
        }
    }
}
