//! Shared helpers for integration tests

use waller::color::Color;
use waller::domain::{GradientStyle, Wallpaper};

/// A fixed wallpaper for tests that do not care about generation
pub fn sample_wallpaper() -> Wallpaper {
    Wallpaper::new(
        Color::new(0x1A, 0x2B, 0x3C),
        Color::new(0xD0, 0xE0, 0xF0),
        GradientStyle::Linear,
    )
}

/// Small render size so tests stay fast
pub fn small_render() -> waller::gradient::RenderOptions {
    waller::gradient::RenderOptions::new(24, 40)
}
