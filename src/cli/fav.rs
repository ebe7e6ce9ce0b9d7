//! Favorites command implementation

use anyhow::{Context, Result, bail};
use clap::Subcommand;

use waller::color::Color;
use waller::domain::{GradientStyle, Wallpaper};
use waller::favorites::FavoritesStore;

use super::GenerationFlags;

#[derive(Debug, Subcommand)]
pub enum FavCommand {
    /// List stored favorites
    List,

    /// Store a wallpaper: exactly two --color values and one --style
    Add {
        #[command(flatten)]
        flags: GenerationFlags,
    },

    /// Remove a favorite by its list index
    Remove { index: usize },

    /// Remove all favorites
    Clear,
}

pub fn fav_command(command: FavCommand) -> Result<()> {
    let path = FavoritesStore::default_path();
    let mut store = FavoritesStore::load(&path)?;

    match command {
        FavCommand::List => {
            if store.is_empty() {
                println!("No favorites yet. Add one with `waller fav add`.");
                return Ok(());
            }

            println!("Favorites ({}):\n", store.len());
            for (index, entry) in store.entries().iter().enumerate() {
                let mut effects = Vec::new();
                if entry.noise {
                    effects.push("noise");
                }
                if entry.stripes {
                    effects.push("stripes");
                }
                let effects = if effects.is_empty() {
                    String::new()
                } else {
                    format!("  [{}]", effects.join(", "))
                };

                println!(
                    "  #{index}  {}{effects}  added {}",
                    entry.wallpaper.describe(),
                    entry.created_at.format("%Y-%m-%d")
                );
            }
        }

        FavCommand::Add { flags } => {
            let wallpaper = wallpaper_from_flags(&flags)?;
            if !store.add(wallpaper, flags.noise, flags.stripes) {
                bail!("Already stored: {}", wallpaper.describe());
            }
            store.save(&path)?;
            println!("Added {}", wallpaper.describe());
        }

        FavCommand::Remove { index } => {
            let removed = store
                .remove(index)
                .with_context(|| format!("No favorite #{index} (have {})", store.len()))?;
            store.save(&path)?;
            println!("Removed {}", removed.wallpaper.describe());
        }

        FavCommand::Clear => {
            let count = store.len();
            store.clear();
            store.save(&path)?;
            println!("Removed {count} favorite(s).");
        }
    }

    Ok(())
}

/// A favorite stores exact colors, so the generation flags must pin
/// both colors and the style instead of leaving them to the generator.
fn wallpaper_from_flags(flags: &GenerationFlags) -> Result<Wallpaper> {
    if flags.colors.len() != 2 {
        bail!(
            "fav add needs exactly two --color values, got {}",
            flags.colors.len()
        );
    }
    if flags.styles.len() != 1 {
        bail!(
            "fav add needs exactly one --style, got {}",
            flags.styles.len()
        );
    }

    let start = Color::parse(&flags.colors[0])
        .with_context(|| format!("Invalid color code: {:?}", flags.colors[0]))?;
    let end = Color::parse(&flags.colors[1])
        .with_context(|| format!("Invalid color code: {:?}", flags.colors[1]))?;
    let style = GradientStyle::parse(&flags.styles[0])
        .with_context(|| format!("Unknown gradient style: {:?}", flags.styles[0]))?;

    Ok(Wallpaper::new(start, end, style))
}
