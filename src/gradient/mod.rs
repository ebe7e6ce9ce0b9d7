//! Gradient rendering
//!
//! Renders a [`Wallpaper`] into an RGBA pixel buffer. Each style maps a
//! pixel position to an interpolation parameter `t` in `[0, 1]`, and the
//! two wallpaper colors are blended channel-wise at that parameter.

mod effects;

pub use effects::{add_noise, add_stripes};

use image::{Rgba, RgbaImage};
use rand::Rng;

use crate::color::Color;
use crate::domain::{GradientStyle, Wallpaper};

/// Fallback wallpaper dimensions (portrait)
pub const DEFAULT_PORTRAIT: (u32, u32) = (1080, 1920);

/// Fallback wallpaper dimensions (landscape)
pub const DEFAULT_LANDSCAPE: (u32, u32) = (1920, 1080);

/// Output size and effect toggles for a render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub noise: bool,
    pub stripes: bool,
}

impl RenderOptions {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            noise: false,
            stripes: false,
        }
    }

    pub fn portrait() -> Self {
        let (w, h) = DEFAULT_PORTRAIT;
        Self::new(w, h)
    }

    pub fn landscape() -> Self {
        let (w, h) = DEFAULT_LANDSCAPE;
        Self::new(w, h)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::portrait()
    }
}

/// Render a wallpaper into an opaque RGBA buffer.
///
/// Effect passes draw over the finished gradient, so they need a `rng`
/// even when neither effect is enabled.
pub fn render(rng: &mut impl Rng, wallpaper: &Wallpaper, options: &RenderOptions) -> RgbaImage {
    let width = options.width.max(1);
    let height = options.height.max(1);

    let mut img = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let t = gradient_t(wallpaper.style, x, y, width, height);
            let color = lerp(wallpaper.start, wallpaper.end, t);
            img.put_pixel(x, y, Rgba([color.r, color.g, color.b, 255]));
        }
    }

    if options.noise {
        add_noise(rng, &mut img);
    }
    if options.stripes {
        add_stripes(&mut img);
    }

    img
}

/// Interpolation parameter for a pixel, clamped to `[0, 1]`
fn gradient_t(style: GradientStyle, x: u32, y: u32, width: u32, height: u32) -> f32 {
    let w = width as f32;
    let h = height as f32;
    let fx = x as f32;
    let fy = y as f32;

    let t = match style {
        GradientStyle::Linear => fx / (w - 1.0).max(1.0),
        GradientStyle::Bilinear => fy / (h - 1.0).max(1.0),
        // Projection onto the top-left -> bottom-right axis
        GradientStyle::Diagonal => (fx * w + fy * h) / (w * w + h * h),
        GradientStyle::Radial => {
            let dx = fx - w / 2.0;
            let dy = fy - h / 2.0;
            let radius = w.max(h) * 0.6;
            (dx * dx + dy * dy).sqrt() / radius
        }
        GradientStyle::Angular => {
            let dx = fx - w / 2.0;
            let dy = fy - h / 2.0;
            let angle = dy.atan2(dx);
            (angle + std::f32::consts::PI) / std::f32::consts::TAU
        }
    };

    t.clamp(0.0, 1.0)
}

fn lerp(start: Color, end: Color, t: f32) -> Color {
    let channel = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::new(
        channel(start.r, end.r),
        channel(start.g, end.g),
        channel(start.b, end.b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample(img: &RgbaImage, x: u32, y: u32) -> Color {
        let p = img.get_pixel(x, y);
        Color::new(p[0], p[1], p[2])
    }

    #[test]
    fn test_render_has_requested_dimensions_and_opaque_alpha() {
        let mut rng = StdRng::seed_from_u64(1);
        let wallpaper = Wallpaper::new(Color::BLACK, Color::WHITE, GradientStyle::Radial);
        let img = render(&mut rng, &wallpaper, &RenderOptions::new(64, 48));

        assert_eq!(img.dimensions(), (64, 48));
        assert!(img.pixels().all(|p| p[3] == 255));
    }

    #[test]
    fn test_linear_endpoints_hit_anchor_colors() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = Color::new(10, 20, 30);
        let end = Color::new(200, 100, 50);
        let wallpaper = Wallpaper::new(start, end, GradientStyle::Linear);
        let img = render(&mut rng, &wallpaper, &RenderOptions::new(32, 8));

        assert_eq!(sample(&img, 0, 0), start);
        assert_eq!(sample(&img, 31, 0), end);
        // Columns are constant for a left-to-right gradient
        assert_eq!(sample(&img, 15, 0), sample(&img, 15, 7));
    }

    #[test]
    fn test_bilinear_runs_top_to_bottom() {
        let mut rng = StdRng::seed_from_u64(1);
        let wallpaper = Wallpaper::new(Color::BLACK, Color::WHITE, GradientStyle::Bilinear);
        let img = render(&mut rng, &wallpaper, &RenderOptions::new(8, 32));

        assert_eq!(sample(&img, 0, 0), Color::BLACK);
        assert_eq!(sample(&img, 0, 31), Color::WHITE);
        assert_eq!(sample(&img, 0, 15), sample(&img, 7, 15));
    }

    #[test]
    fn test_diagonal_corners() {
        let mut rng = StdRng::seed_from_u64(1);
        let wallpaper = Wallpaper::new(Color::BLACK, Color::WHITE, GradientStyle::Diagonal);
        let img = render(&mut rng, &wallpaper, &RenderOptions::new(32, 32));

        assert_eq!(sample(&img, 0, 0), Color::BLACK);
        // The far corner projects just short of 1.0; allow rounding
        let far = sample(&img, 31, 31);
        assert!(far.r > 240 && far.g > 240 && far.b > 240);
    }

    #[test]
    fn test_radial_is_start_colored_at_center() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = Color::new(250, 0, 0);
        let wallpaper = Wallpaper::new(start, Color::BLACK, GradientStyle::Radial);
        let img = render(&mut rng, &wallpaper, &RenderOptions::new(32, 32));

        // (16, 16) is the exact center for a 32x32 buffer
        assert_eq!(sample(&img, 16, 16), start);
    }

    #[test]
    fn test_equal_colors_render_solid() {
        let mut rng = StdRng::seed_from_u64(1);
        let color = Color::new(40, 80, 120);
        for style in GradientStyle::ALL {
            let wallpaper = Wallpaper::new(color, color, style);
            let img = render(&mut rng, &wallpaper, &RenderOptions::new(16, 16));
            assert!(
                img.pixels().all(|p| Color::new(p[0], p[1], p[2]) == color),
                "style {style} not solid"
            );
        }
    }

    #[test]
    fn test_zero_dimensions_are_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        let wallpaper = Wallpaper::new(Color::BLACK, Color::WHITE, GradientStyle::Linear);
        let img = render(&mut rng, &wallpaper, &RenderOptions::new(0, 0));
        assert_eq!(img.dimensions(), (1, 1));
    }
}
