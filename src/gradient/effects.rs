//! Effect passes drawn over a finished gradient
//!
//! Both effects composite translucent white over the buffer, so they work
//! on dark and light gradients alike.

use image::RgbaImage;
use rand::Rng;

/// Scatter soft translucent dots over the image (film-grain look).
///
/// The dot count scales with the image area so large and small renders
/// get the same visual density.
pub fn add_noise(rng: &mut impl Rng, img: &mut RgbaImage) {
    let (width, height) = img.dimensions();
    let area = width as u64 * height as u64;
    let count = ((area as f32) * 0.02) as u32;
    let count = count.max(200);

    for _ in 0..count {
        let x = rng.r#gen::<f32>() * width as f32;
        let y = rng.r#gen::<f32>() * height as f32;
        let alpha = rng.r#gen::<f32>() * 0.15;
        let radius = 0.6 + rng.r#gen::<f32>() * 1.2;

        fill_circle(img, x, y, radius, alpha);
    }
}

/// Draw 18 evenly spaced translucent vertical stripes
pub fn add_stripes(img: &mut RgbaImage) {
    let (width, height) = img.dimensions();
    let stripe_count = 18u32;
    let stripe_width = width as f32 / (stripe_count as f32 * 2.0);
    let alpha = 0.09;

    for i in 0..stripe_count {
        let left = i as f32 * stripe_width * 2.0;
        let right = left + stripe_width;

        let x0 = left.floor().max(0.0) as u32;
        let x1 = (right.ceil() as u32).min(width);
        for x in x0..x1 {
            for y in 0..height {
                blend_white(img, x, y, alpha);
            }
        }
    }
}

fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, alpha: f32) {
    let (width, height) = img.dimensions();

    let x0 = (cx - radius).floor().max(0.0) as u32;
    let x1 = ((cx + radius).ceil() as u32).min(width.saturating_sub(1));
    let y0 = (cy - radius).floor().max(0.0) as u32;
    let y1 = ((cy + radius).ceil() as u32).min(height.saturating_sub(1));

    for y in y0..=y1 {
        for x in x0..=x1 {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= radius * radius {
                blend_white(img, x, y, alpha);
            }
        }
    }
}

/// Source-over blend of white at `alpha` onto one pixel
fn blend_white(img: &mut RgbaImage, x: u32, y: u32, alpha: f32) {
    let pixel = img.get_pixel_mut(x, y);
    for channel in pixel.0.iter_mut().take(3) {
        let blended = 255.0 * alpha + *channel as f32 * (1.0 - alpha);
        *channel = blended.round().clamp(0.0, 255.0) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn solid(width: u32, height: u32, gray: u8) -> RgbaImage {
        RgbaImage::from_pixel(width, height, image::Rgba([gray, gray, gray, 255]))
    }

    #[test]
    fn test_noise_only_brightens() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut img = solid(100, 100, 60);
        add_noise(&mut rng, &mut img);

        assert!(img.pixels().all(|p| p[0] >= 60 && p[3] == 255));
        // With 200+ dots on a 100x100 buffer, some pixels must change
        assert!(img.pixels().any(|p| p[0] > 60));
    }

    #[test]
    fn test_stripes_leave_gaps() {
        let mut img = solid(180, 10, 0);
        add_stripes(&mut img);

        let brightened: Vec<u32> = (0..180)
            .filter(|&x| img.get_pixel(x, 5)[0] > 0)
            .collect();

        assert!(!brightened.is_empty());
        // The gaps between stripes stay untouched
        assert!(brightened.len() < 180);
    }

    #[test]
    fn test_blend_is_clamped_on_white() {
        let mut img = solid(10, 10, 255);
        add_stripes(&mut img);
        assert!(img.pixels().all(|p| p[0] == 255));
    }
}
