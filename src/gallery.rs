//! Gallery export
//!
//! Saves rendered wallpapers as PNG files into the user's picture
//! directory (or a configured override), with timestamped names that
//! never overwrite an existing export.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use image::RgbaImage;
use tracing::debug;

/// Subdirectory of the picture folder that exports land in
const GALLERY_SUBDIR: &str = "Waller";

/// The default export directory: `<pictures>/Waller`, falling back to
/// `./Waller` when the platform has no picture directory.
pub fn default_gallery_dir() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(GALLERY_SUBDIR)
}

/// Write `image` into `dir` as `<stem>_<date>_<time>.png`, appending a
/// counter when the name is taken. Returns the path written.
pub fn save_png(image: &RgbaImage, dir: &Path, stem: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory {}", dir.display()))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let base = format!("{stem}_{timestamp}");

    let path = unique_path(dir, &base);
    image
        .save(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    debug!(path = %path.display(), "saved wallpaper");
    Ok(path)
}

fn unique_path(dir: &Path, base: &str) -> PathBuf {
    let candidate = dir.join(format!("{base}.png"));
    if !candidate.exists() {
        return candidate;
    }

    let mut counter = 1u32;
    loop {
        let candidate = dir.join(format!("{base}_{counter}.png"));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}
