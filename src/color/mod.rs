//! Color type and color arithmetic
//!
//! Colors are straight-alpha RGB with one byte per channel; every
//! generation path produces fully opaque colors. Hex formatting is the
//! 6-digit uppercase form with a leading `#`, and parsing accepts the
//! same with or without the `#` and in any case.

mod hsv;
mod random;
mod slider;

pub use hsv::Hsv;
pub use random::{random_color, shade_color, shuffle_color};
pub use slider::{color_at_gray_position, color_at_hue_position, gray_position, hue_position};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error type for hex color parsing
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseColorError {
    #[error("empty color code")]
    Empty,

    #[error("expected 6 hex digits, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex digit: {0:?}")]
    InvalidDigit(char),
}

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack from a 32-bit ARGB integer. The alpha byte is ignored;
    /// colors are opaque throughout.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            r: ((argb >> 16) & 0xFF) as u8,
            g: ((argb >> 8) & 0xFF) as u8,
            b: (argb & 0xFF) as u8,
        }
    }

    /// Pack into a 32-bit ARGB integer with full alpha
    pub const fn to_argb(self) -> u32 {
        0xFF00_0000 | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse a 6-digit hex color code, with or without a leading `#`
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        if digits.is_empty() {
            return Err(ParseColorError::Empty);
        }
        if digits.len() != 6 {
            return Err(ParseColorError::InvalidLength(digits.len()));
        }
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(bad));
        }

        // Length and digits are validated above
        let value = u32::from_str_radix(digits, 16).expect("validated hex digits");
        Ok(Self::from_argb(value))
    }

    /// Average of the three channels
    pub fn grayscale(self) -> u8 {
        ((self.r as u16 + self.g as u16 + self.b as u16) / 3) as u8
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

// Colors appear in config and favorite files as hex strings
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(D::Error::custom)
    }
}
