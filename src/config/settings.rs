//! Settings configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{GradientStyle, ToneMode};

/// Generation defaults applied when the CLI flags are omitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Wallpapers per batch
    #[serde(default = "default_count")]
    pub count: usize,

    /// Default brightness bias
    #[serde(default = "default_tone")]
    pub tone: ToneMode,

    /// Default gradient styles; empty allows all of them
    #[serde(default = "default_styles")]
    pub styles: Vec<GradientStyle>,

    /// Grain effect on by default
    #[serde(default)]
    pub noise: bool,

    /// Stripe effect on by default
    #[serde(default)]
    pub stripes: bool,

    /// Portrait output by default; landscape otherwise
    #[serde(default = "default_portrait")]
    pub portrait: bool,
}

fn default_count() -> usize {
    10
}

fn default_tone() -> ToneMode {
    ToneMode::Light
}

fn default_styles() -> Vec<GradientStyle> {
    vec![GradientStyle::Linear]
}

fn default_portrait() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            count: default_count(),
            tone: default_tone(),
            styles: default_styles(),
            noise: false,
            stripes: false,
            portrait: default_portrait(),
        }
    }
}

/// Output sizes and directories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Portrait render size
    #[serde(default = "default_portrait_width")]
    pub portrait_width: u32,

    #[serde(default = "default_portrait_height")]
    pub portrait_height: u32,

    /// Landscape render size
    #[serde(default = "default_landscape_width")]
    pub landscape_width: u32,

    #[serde(default = "default_landscape_height")]
    pub landscape_height: u32,

    /// Where batches and gallery exports land; defaults to the
    /// platform picture directory plus "Waller"
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_portrait_width() -> u32 {
    1080
}

fn default_portrait_height() -> u32 {
    1920
}

fn default_landscape_width() -> u32 {
    1920
}

fn default_landscape_height() -> u32 {
    1080
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            portrait_width: default_portrait_width(),
            portrait_height: default_portrait_height(),
            landscape_width: default_landscape_width(),
            landscape_height: default_landscape_height(),
            output_dir: None,
        }
    }
}

impl RenderSettings {
    /// Size for the configured orientation
    pub fn size(&self, portrait: bool) -> (u32, u32) {
        if portrait {
            (self.portrait_width, self.portrait_height)
        } else {
            (self.landscape_width, self.landscape_height)
        }
    }
}
