//! Slider position conversions for the hue and grayscale color pickers
//!
//! Positions run 0..=100. Both pickers are monotonic and invert their
//! own conversion within rounding tolerance.

use super::{Color, Hsv};

/// Hue slider position for a color (0..=100 over the 360 degree wheel)
pub fn hue_position(color: Color) -> u8 {
    (Hsv::from(color).h / 3.6).round().clamp(0.0, 100.0) as u8
}

/// Fully saturated color at a hue slider position
pub fn color_at_hue_position(position: u8) -> Color {
    let hue = position.min(100) as f32 * 3.6;
    Hsv::new(hue, 1.0, 1.0).to_color()
}

/// Grayscale slider position for a color (0..=100 over 0..=255)
pub fn gray_position(color: Color) -> u8 {
    (color.grayscale() as f32 / 2.55).round().clamp(0.0, 100.0) as u8
}

/// Gray color at a grayscale slider position
pub fn color_at_gray_position(position: u8) -> Color {
    let gray = (position.min(100) as f32 * 2.55).round() as u8;
    Color::new(gray, gray, gray)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_positions_invert() {
        for position in 0..=100u8 {
            let color = color_at_hue_position(position);
            let back = hue_position(color);
            // 100 wraps to hue 360 == 0
            let expected = if position == 100 { 0 } else { position };
            assert!(
                (back as i16 - expected as i16).abs() <= 1,
                "position {position} came back as {back}"
            );
        }
    }

    #[test]
    fn test_gray_positions_invert() {
        for position in 0..=100u8 {
            let back = gray_position(color_at_gray_position(position));
            assert!(
                (back as i16 - position as i16).abs() <= 1,
                "position {position} came back as {back}"
            );
        }
    }

    #[test]
    fn test_gray_positions_are_monotonic() {
        let mut last = color_at_gray_position(0).grayscale();
        for position in 1..=100u8 {
            let gray = color_at_gray_position(position).grayscale();
            assert!(gray >= last);
            last = gray;
        }
    }

    #[test]
    fn test_hue_positions_are_monotonic_below_wrap() {
        let mut last = -1.0f32;
        for position in 0..100u8 {
            let hue = Hsv::from(color_at_hue_position(position)).h;
            assert!(hue > last, "hue {hue} at position {position} not above {last}");
            last = hue;
        }
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(color_at_gray_position(0), Color::BLACK);
        assert_eq!(color_at_gray_position(100), Color::WHITE);
        assert_eq!(color_at_hue_position(0), Color::new(255, 0, 0));
    }
}
