//! Init command implementation

use std::path::PathBuf;

use anyhow::{Result, bail};

use waller::config::Config;

/// Default configuration content for waller init
pub const DEFAULT_CONFIG: &str = r#"# Waller Configuration
# ====================
#
# Everything here is a default; the matching CLI flag wins when given.

# ============================================================================
# SETTINGS - Generation defaults
# ============================================================================
#
# Available options:
#   count    - Wallpapers per batch (default: 10)
#   tone     - Brightness bias: "dark", "neutral" or "light" (default: "light")
#   styles   - Allowed gradient styles; [] allows all of them
#              ("linear", "bilinear", "diagonal", "radial", "angular")
#   noise    - Grain effect on by default (default: false)
#   stripes  - Stripe effect on by default (default: false)
#   portrait - Portrait output by default (default: true)

[settings]
count = 10
tone = "light"
styles = ["linear"]
noise = false
stripes = false
portrait = true

# ============================================================================
# RENDER - Output sizes and directories
# ============================================================================
#
# Available options:
#   portrait_width / portrait_height   - Portrait render size (default: 1080x1920)
#   landscape_width / landscape_height - Landscape render size (default: 1920x1080)
#   output_dir                         - Where batches and exports land
#                                        (default: the picture folder + "Waller")

[render]
portrait_width = 1080
portrait_height = 1920
landscape_width = 1920
landscape_height = 1080
# output_dir = "/home/me/Pictures/Waller"
"#;

/// Initialize a new waller configuration
/// By default creates the config at ~/.waller/config.toml
/// Use --config to specify a custom path
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::default_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
