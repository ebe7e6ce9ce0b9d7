use serde::{Deserialize, Serialize};

use crate::color::Color;

/// The geometric pattern used to interpolate between the two colors
/// of a wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientStyle {
    /// Left to right
    Linear,
    /// Top to bottom
    Bilinear,
    /// Top-left to bottom-right
    Diagonal,
    /// Centered circle, radius 0.6 * max(width, height)
    Radial,
    /// Sweep around the center
    Angular,
}

impl GradientStyle {
    /// All styles, in the order they are offered to the user
    pub const ALL: [GradientStyle; 5] = [
        GradientStyle::Linear,
        GradientStyle::Bilinear,
        GradientStyle::Diagonal,
        GradientStyle::Radial,
        GradientStyle::Angular,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "linear" => Some(GradientStyle::Linear),
            "bilinear" => Some(GradientStyle::Bilinear),
            "diagonal" => Some(GradientStyle::Diagonal),
            "radial" => Some(GradientStyle::Radial),
            "angular" | "sweep" => Some(GradientStyle::Angular),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            GradientStyle::Linear => "linear",
            GradientStyle::Bilinear => "bilinear",
            GradientStyle::Diagonal => "diagonal",
            GradientStyle::Radial => "radial",
            GradientStyle::Angular => "angular",
        }
    }
}

impl std::fmt::Display for GradientStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Brightness bias for random color generation and shading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneMode {
    Dark,
    Neutral,
    Light,
}

impl ToneMode {
    /// Value range (HSV) that random colors are drawn from
    pub fn value_range(&self) -> (f32, f32) {
        match self {
            ToneMode::Dark => (0.0, 0.45),
            ToneMode::Neutral => (0.35, 0.85),
            ToneMode::Light => (0.55, 1.0),
        }
    }

    /// The plain base color paired with a single user anchor
    pub fn base_color(&self) -> Color {
        match self {
            ToneMode::Dark => Color::BLACK,
            ToneMode::Neutral => Color::new(128, 128, 128),
            ToneMode::Light => Color::WHITE,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dark" => Some(ToneMode::Dark),
            "neutral" => Some(ToneMode::Neutral),
            "light" => Some(ToneMode::Light),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToneMode::Dark => "dark",
            ToneMode::Neutral => "neutral",
            ToneMode::Light => "light",
        }
    }
}

impl std::fmt::Display for ToneMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which wallpaper slot to replace when applying an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallpaperTarget {
    Home,
    Lock,
    Both,
}

impl WallpaperTarget {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "home" => Some(WallpaperTarget::Home),
            "lock" => Some(WallpaperTarget::Lock),
            "both" => Some(WallpaperTarget::Both),
            _ => None,
        }
    }
}

impl std::fmt::Display for WallpaperTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            WallpaperTarget::Home => "home",
            WallpaperTarget::Lock => "lock",
            WallpaperTarget::Both => "both",
        };
        write!(f, "{}", name)
    }
}

/// One generated wallpaper: two colors and the gradient drawn between them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallpaper {
    /// Gradient start color
    pub start: Color,

    /// Gradient end color
    pub end: Color,

    /// Gradient geometry
    pub style: GradientStyle,
}

impl Wallpaper {
    pub fn new(start: Color, end: Color, style: GradientStyle) -> Self {
        Self { start, end, style }
    }

    /// One-line description used in batch listings and favorite output
    pub fn describe(&self) -> String {
        format!("{} -> {} {}", self.start, self.end, self.style)
    }
}
