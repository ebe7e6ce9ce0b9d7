//! HSV color space conversion

use super::Color;

/// A color in HSV space. Hue is in degrees `[0, 360)`, saturation and
/// value in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    /// Clamps saturation and value and wraps hue into `[0, 360)`
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self {
            h: wrap_hue(h),
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }

    pub fn to_color(self) -> Color {
        let c = self.v * self.s;
        let h_prime = self.h / 60.0;
        let x = c * (1.0 - (h_prime % 2.0 - 1.0).abs());
        let m = self.v - c;

        let (r, g, b) = match h_prime as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Color::new(
            channel_to_u8(r + m),
            channel_to_u8(g + m),
            channel_to_u8(b + m),
        )
    }
}

impl From<Color> for Hsv {
    fn from(color: Color) -> Self {
        let r = color.r as f32 / 255.0;
        let g = color.g as f32 / 255.0;
        let b = color.b as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let h = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };

        let s = if max == 0.0 { 0.0 } else { delta / max };

        Self {
            h: wrap_hue(h),
            s,
            v: max,
        }
    }
}

fn wrap_hue(mut h: f32) -> f32 {
    while h < 0.0 {
        h += 360.0;
    }
    while h >= 360.0 {
        h -= 360.0;
    }
    h
}

fn channel_to_u8(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        let red = Hsv::from(Color::new(255, 0, 0));
        assert_eq!(red.h, 0.0);
        assert_eq!(red.s, 1.0);
        assert_eq!(red.v, 1.0);

        let green = Hsv::from(Color::new(0, 255, 0));
        assert_eq!(green.h, 120.0);

        let blue = Hsv::from(Color::new(0, 0, 255));
        assert_eq!(blue.h, 240.0);
    }

    #[test]
    fn test_grays_have_zero_saturation() {
        for value in [0u8, 64, 128, 255] {
            let hsv = Hsv::from(Color::new(value, value, value));
            assert_eq!(hsv.s, 0.0);
            assert_eq!(hsv.h, 0.0);
        }
    }

    #[test]
    fn test_rgb_hsv_roundtrip_within_one_unit() {
        let samples = [
            Color::new(12, 200, 99),
            Color::new(255, 128, 0),
            Color::new(1, 2, 3),
            Color::new(240, 10, 250),
            Color::new(77, 77, 80),
        ];

        for color in samples {
            let back = Hsv::from(color).to_color();
            assert!((color.r as i16 - back.r as i16).abs() <= 1, "{color} -> {back}");
            assert!((color.g as i16 - back.g as i16).abs() <= 1, "{color} -> {back}");
            assert!((color.b as i16 - back.b as i16).abs() <= 1, "{color} -> {back}");
        }
    }

    #[test]
    fn test_hue_wraps_into_range() {
        assert_eq!(Hsv::new(370.0, 0.5, 0.5).h, 10.0);
        assert_eq!(Hsv::new(-10.0, 0.5, 0.5).h, 350.0);
    }

    #[test]
    fn test_out_of_range_saturation_and_value_clamp() {
        let hsv = Hsv::new(0.0, 1.5, -0.5);
        assert_eq!(hsv.s, 1.0);
        assert_eq!(hsv.v, 0.0);
    }
}
