//! Writing downloaded artifacts to disk

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Create `path` and any missing parents. An existing directory is fine.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Write `bytes` to `<dir>/<stem>.<extension>`, creating `dir` first
pub fn write_artifact(dir: &Path, stem: &str, extension: &str, bytes: &[u8]) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(format!("{}.{}", stem, extension));
    std::fs::write(&path, bytes)?;
    Ok(path)
}

/// File extension for a MIME type, `bin` when unknown
pub fn extension_for(content_type: Option<&str>) -> &'static str {
    let mime = content_type
        .and_then(|c| c.split(';').next())
        .map(str::trim)
        .unwrap_or_default();
    match mime {
        "image/jpeg" | "image/jpg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "application/pdf" => "pdf",
        "video/mp4" => "mp4",
        _ => "bin",
    }
}
