//! Shared generation flags and their resolution against the config

use anyhow::{Context, Result, bail};
use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use waller::color::{Color, color_at_gray_position, color_at_hue_position};
use waller::config::Config;
use waller::domain::{GradientStyle, ToneMode};
use waller::generator::{BatchOptions, MAX_ANCHORS};
use waller::gradient::RenderOptions;

/// Flags shared by every command that builds wallpapers
#[derive(Debug, Clone, Default, Args)]
pub struct GenerationFlags {
    /// Anchor color as a 6-digit hex code (repeatable, up to 4)
    #[arg(long = "color", value_name = "HEX")]
    pub colors: Vec<String>,

    /// Anchor from the hue picker (0-100)
    #[arg(long, value_name = "POS")]
    pub hue: Option<u8>,

    /// Anchor from the grayscale picker (0-100)
    #[arg(long, value_name = "POS")]
    pub gray: Option<u8>,

    /// Brightness bias: dark, neutral, or light
    #[arg(long)]
    pub tone: Option<String>,

    /// Gradient style (repeatable): linear, bilinear, diagonal, radial, angular
    #[arg(long = "style", value_name = "STYLE")]
    pub styles: Vec<String>,

    /// Add a grain effect over the gradient
    #[arg(long)]
    pub noise: bool,

    /// Add translucent vertical stripes
    #[arg(long)]
    pub stripes: bool,

    /// Render landscape instead of the configured orientation
    #[arg(long)]
    pub landscape: bool,

    /// Override the render width
    #[arg(long)]
    pub width: Option<u32>,

    /// Override the render height
    #[arg(long)]
    pub height: Option<u32>,

    /// Seed for reproducible batches
    #[arg(long)]
    pub seed: Option<u64>,
}

impl GenerationFlags {
    /// Anchor colors from hex codes and picker positions, validated
    pub fn anchors(&self) -> Result<Vec<Color>> {
        let mut anchors = Vec::new();

        for raw in &self.colors {
            let color = Color::parse(raw)
                .with_context(|| format!("Invalid color code: {raw:?}"))?;
            anchors.push(color);
        }

        if let Some(position) = self.hue {
            if position > 100 {
                bail!("Hue position must be 0-100, got {position}");
            }
            anchors.push(color_at_hue_position(position));
        }

        if let Some(position) = self.gray {
            if position > 100 {
                bail!("Gray position must be 0-100, got {position}");
            }
            anchors.push(color_at_gray_position(position));
        }

        if anchors.len() > MAX_ANCHORS {
            bail!(
                "At most {MAX_ANCHORS} anchor colors are supported, got {}",
                anchors.len()
            );
        }

        Ok(anchors)
    }

    /// Batch options from flags, falling back to config defaults
    pub fn batch_options(&self, config: &Config) -> Result<BatchOptions> {
        let tone = match &self.tone {
            Some(raw) => ToneMode::parse(raw)
                .with_context(|| format!("Unknown tone: {raw:?} (dark, neutral, light)"))?,
            None => config.settings.tone,
        };

        let styles = if self.styles.is_empty() {
            config.settings.styles.clone()
        } else {
            let mut styles = Vec::with_capacity(self.styles.len());
            for raw in &self.styles {
                let style = GradientStyle::parse(raw)
                    .with_context(|| format!("Unknown gradient style: {raw:?}"))?;
                styles.push(style);
            }
            styles
        };

        Ok(BatchOptions {
            count: config.settings.count,
            anchors: self.anchors()?,
            tone,
            styles,
        })
    }

    /// Render options from flags, falling back to config defaults
    pub fn render_options(&self, config: &Config) -> RenderOptions {
        let portrait = !self.landscape && config.settings.portrait;
        let (width, height) = config.render.size(portrait);

        RenderOptions {
            width: self.width.unwrap_or(width),
            height: self.height.unwrap_or(height),
            noise: self.noise || config.settings.noise,
            stripes: self.stripes || config.settings.stripes,
        }
    }

    /// Seeded RNG when `--seed` is given, entropy otherwise
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
