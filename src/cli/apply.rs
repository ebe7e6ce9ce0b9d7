//! Apply command implementation

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::Rng;

use waller::config::{Config, waller_dir};
use waller::domain::{Wallpaper, WallpaperTarget};
use waller::favorites::FavoritesStore;
use waller::generator::generate_one;
use waller::gradient::{RenderOptions, render};
use waller::platform;

use super::GenerationFlags;

/// Render one wallpaper (or take an existing file) and apply it
pub fn apply_command(
    config: &Config,
    flags: &GenerationFlags,
    target: Option<String>,
    favorite: Option<usize>,
    file: Option<PathBuf>,
) -> Result<()> {
    let target = match target {
        Some(raw) => WallpaperTarget::parse(&raw)
            .with_context(|| format!("Unknown target: {raw:?} (home, lock, both)"))?,
        None => WallpaperTarget::Home,
    };

    let path = match file {
        Some(path) => path,
        None => {
            let mut rng = flags.rng();
            let (wallpaper, render_options) = pick_wallpaper(config, flags, favorite, &mut rng)?;
            let image = render(&mut rng, &wallpaper, &render_options);

            let path = waller_dir().join("wallpaper.png");
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            image
                .save(&path)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            println!("Rendered {}", wallpaper.describe());
            path
        }
    };

    platform::set_wallpaper(&path, target)
        .with_context(|| format!("Failed to set the {target} wallpaper"))?;

    println!("Wallpaper set ({target}).");
    Ok(())
}

/// The wallpaper to render: a stored favorite, or one built from flags.
/// Favorites carry their own effect snapshot, which wins over the
/// config defaults.
pub(super) fn pick_wallpaper(
    config: &Config,
    flags: &GenerationFlags,
    favorite: Option<usize>,
    rng: &mut impl Rng,
) -> Result<(Wallpaper, RenderOptions)> {
    let mut render_options = flags.render_options(config);

    match favorite {
        Some(index) => {
            let store = FavoritesStore::load(&FavoritesStore::default_path())?;
            let entry = store.get(index).with_context(|| {
                format!("No favorite #{index} (have {})", store.len())
            })?;

            render_options.noise = entry.noise || flags.noise;
            render_options.stripes = entry.stripes || flags.stripes;
            Ok((entry.wallpaper, render_options))
        }
        None => {
            let batch_options = flags.batch_options(config)?;
            Ok((generate_one(rng, &batch_options), render_options))
        }
    }
}
