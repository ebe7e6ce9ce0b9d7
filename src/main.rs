use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use waller::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "waller")]
#[command(about = "Random gradient wallpapers from the command line")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.waller/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of gradient wallpapers into a directory
    Generate {
        #[command(flatten)]
        flags: cli::GenerationFlags,

        /// How many wallpapers to generate
        #[arg(long)]
        count: Option<usize>,

        /// Output directory (defaults to the configured one)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Render one wallpaper and set it as the desktop wallpaper
    Apply {
        #[command(flatten)]
        flags: cli::GenerationFlags,

        /// Where to apply it: home, lock, or both
        #[arg(long)]
        target: Option<String>,

        /// Use a stored favorite by its list index
        #[arg(long)]
        favorite: Option<usize>,

        /// Apply an existing image instead of rendering one
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Render one wallpaper and save it to the picture gallery
    Save {
        #[command(flatten)]
        flags: cli::GenerationFlags,

        /// Use a stored favorite by its list index
        #[arg(long)]
        favorite: Option<usize>,
    },

    /// Manage favorite wallpapers
    Fav {
        #[command(subcommand)]
        command: cli::fav::FavCommand,
    },

    /// Initialize a new ~/.waller/config.toml configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    // Init must run before any config is read, so each command loads
    // the config itself
    let config_path = cli.config;

    match cli.command {
        Some(Commands::Generate { flags, count, out }) => {
            let config = Config::load(config_path.as_deref())?;
            cli::generate::generate_command(&config, &flags, count, out)?;
        }
        Some(Commands::Apply {
            flags,
            target,
            favorite,
            file,
        }) => {
            let config = Config::load(config_path.as_deref())?;
            cli::apply::apply_command(&config, &flags, target, favorite, file)?;
        }
        Some(Commands::Save { flags, favorite }) => {
            let config = Config::load(config_path.as_deref())?;
            cli::save::save_command(&config, &flags, favorite)?;
        }
        Some(Commands::Fav { command }) => {
            cli::fav::fav_command(command)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(config_path, force)?;
        }
        None => {
            // Default: generate a batch with the configured defaults
            let config = Config::load(config_path.as_deref())?;
            let flags = cli::GenerationFlags::default();
            cli::generate::generate_command(&config, &flags, None, None)?;
        }
    }

    Ok(())
}
