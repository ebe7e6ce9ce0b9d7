//! Random color generation and anchor-based variation

use rand::Rng;

use crate::domain::ToneMode;

use super::{Color, Hsv};

/// Generate a random color with its brightness drawn from the tone range
pub fn random_color(rng: &mut impl Rng, tone: ToneMode) -> Color {
    let base = Color::new(rng.r#gen(), rng.r#gen(), rng.r#gen());
    let hsv = Hsv::from(base);

    let (lo, hi) = tone.value_range();
    let value = lo + rng.r#gen::<f32>() * (hi - lo);

    Hsv::new(hsv.h, hsv.s, value).to_color()
}

/// Jitter each channel by a uniform offset in `[-100, 100]`, clamped to
/// the valid range. Used to scatter gradient colors around a user anchor.
pub fn shuffle_color(rng: &mut impl Rng, color: Color) -> Color {
    let mut channel = |value: u8| {
        let delta: i16 = rng.gen_range(-100..=100);
        (value as i16 + delta).clamp(0, 255) as u8
    };

    Color::new(channel(color.r), channel(color.g), channel(color.b))
}

/// A small HSV-space variation close to the base color, biased by tone.
///
/// `subtle` keeps the variation near the original (half the hue/saturation
/// spread and a smaller brightness push); it is used for user-selected
/// anchors so their variations read as shades rather than new colors.
pub fn shade_color(rng: &mut impl Rng, color: Color, tone: ToneMode, subtle: bool) -> Color {
    let hsv = Hsv::from(color);

    let hue_spread = if subtle { 12.0 } else { 40.0 };
    let sat_spread = if subtle { 0.20 } else { 0.60 };

    let hue_delta = (rng.r#gen::<f32>() - 0.5) * hue_spread;
    let sat_delta = (rng.r#gen::<f32>() - 0.5) * sat_spread;

    let shade = if subtle {
        rng.r#gen::<f32>() * 0.30 + 0.20
    } else {
        rng.r#gen::<f32>() * 0.50 + 0.40
    };

    let value = match tone {
        ToneMode::Dark => hsv.v - shade,
        ToneMode::Light => hsv.v + shade,
        ToneMode::Neutral => {
            // Wobble around the original instead of pushing one way
            let factor = if subtle { 0.25 } else { 0.4 };
            let direction = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
            hsv.v + direction * shade * factor
        }
    };

    Hsv::new(hsv.h + hue_delta, hsv.s + sat_delta, value).to_color()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_shuffle_stays_in_range_at_extremes() {
        let mut rng = StdRng::seed_from_u64(7);

        // Clamping matters most at the channel boundaries
        for color in [Color::BLACK, Color::WHITE, Color::new(0, 255, 100)] {
            for _ in 0..500 {
                let shuffled = shuffle_color(&mut rng, color);
                // u8 channels cannot leave [0,255]; check the jitter bound instead
                assert!((shuffled.r as i16 - color.r as i16).abs() <= 100);
                assert!((shuffled.g as i16 - color.g as i16).abs() <= 100);
                assert!((shuffled.b as i16 - color.b as i16).abs() <= 100);
            }
        }
    }

    #[test]
    fn test_random_color_honors_tone_range() {
        let mut rng = StdRng::seed_from_u64(11);

        for tone in [ToneMode::Dark, ToneMode::Neutral, ToneMode::Light] {
            let (lo, hi) = tone.value_range();
            for _ in 0..200 {
                let color = random_color(&mut rng, tone);
                let v = Hsv::from(color).v;
                // Channel quantization can nudge the value slightly
                assert!(
                    v >= lo - 0.01 && v <= hi + 0.01,
                    "{tone}: value {v} outside [{lo}, {hi}]"
                );
            }
        }
    }

    #[test]
    fn test_dark_shade_darkens_and_light_shade_lightens() {
        let mut rng = StdRng::seed_from_u64(3);
        let base = Color::new(120, 140, 160);
        let v0 = Hsv::from(base).v;

        for _ in 0..100 {
            let dark = shade_color(&mut rng, base, ToneMode::Dark, false);
            assert!(Hsv::from(dark).v <= v0);

            let light = shade_color(&mut rng, base, ToneMode::Light, false);
            assert!(Hsv::from(light).v >= v0);
        }
    }

    #[test]
    fn test_subtle_shade_keeps_hue_close() {
        let mut rng = StdRng::seed_from_u64(5);
        // Saturated mid-brightness base so the hue survives the shade
        let base = Hsv::new(200.0, 0.9, 0.6).to_color();
        let h0 = Hsv::from(base).h;

        for _ in 0..100 {
            let shade = shade_color(&mut rng, base, ToneMode::Neutral, true);
            let h1 = Hsv::from(shade).h;
            let dist = (h1 - h0).abs().min(360.0 - (h1 - h0).abs());
            // Half the subtle spread, plus a little rounding slack
            assert!(dist <= 7.0, "hue moved {dist} degrees");
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a: Vec<Color> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| random_color(&mut rng, ToneMode::Light)).collect()
        };
        let b: Vec<Color> = {
            let mut rng = StdRng::seed_from_u64(42);
            (0..10).map(|_| random_color(&mut rng, ToneMode::Light)).collect()
        };
        assert_eq!(a, b);
    }
}
