//! Generate command implementation

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use waller::config::Config;
use waller::gallery;
use waller::generator::generate_batch;
use waller::gradient::render;

use super::GenerationFlags;

/// Generate a batch of wallpapers into a directory and list them
pub fn generate_command(
    config: &Config,
    flags: &GenerationFlags,
    count: Option<usize>,
    out: Option<PathBuf>,
) -> Result<()> {
    let mut batch_options = flags.batch_options(config)?;
    if let Some(count) = count {
        batch_options.count = count;
    }
    let render_options = flags.render_options(config);

    let out_dir = out
        .or_else(|| config.render.output_dir.clone())
        .unwrap_or_else(gallery::default_gallery_dir);

    let mut rng = flags.rng();
    let batch = generate_batch(&mut rng, &batch_options);

    info!(
        count = batch.len(),
        dir = %out_dir.display(),
        "rendering batch"
    );

    println!(
        "Generating {} wallpapers ({}x{}) into {}\n",
        batch.len(),
        render_options.width,
        render_options.height,
        out_dir.display()
    );

    for (index, wallpaper) in batch.iter().enumerate() {
        let image = render(&mut rng, wallpaper, &render_options);
        let path = gallery::save_png(&image, &out_dir, "waller")?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        println!("  #{index}  {}  {name}", wallpaper.describe());
    }

    println!("\nDone.");
    Ok(())
}
