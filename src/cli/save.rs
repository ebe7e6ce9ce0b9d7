//! Save command implementation

use anyhow::Result;

use waller::config::Config;
use waller::gallery;
use waller::gradient::render;

use super::GenerationFlags;
use super::apply::pick_wallpaper;

/// Render one wallpaper and export it to the picture gallery
pub fn save_command(
    config: &Config,
    flags: &GenerationFlags,
    favorite: Option<usize>,
) -> Result<()> {
    let mut rng = flags.rng();
    let (wallpaper, render_options) = pick_wallpaper(config, flags, favorite, &mut rng)?;
    let image = render(&mut rng, &wallpaper, &render_options);

    let dir = config
        .render
        .output_dir
        .clone()
        .unwrap_or_else(gallery::default_gallery_dir);

    let path = gallery::save_png(&image, &dir, "waller")?;

    println!("Saved {}", wallpaper.describe());
    println!("  -> {}", path.display());
    Ok(())
}
