//! Batch wallpaper generation
//!
//! Builds the list of wallpapers shown to the user: one color pair plus a
//! gradient style per entry. The color pair depends on how many anchor
//! colors the user picked; the style is drawn from the allowed set,
//! avoiding back-to-back repeats so neighboring entries differ.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::color::{Color, random_color, shade_color, shuffle_color};
use crate::domain::{GradientStyle, ToneMode, Wallpaper};

/// The most anchor colors a batch can draw from
pub const MAX_ANCHORS: usize = 4;

/// Inputs for one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOptions {
    /// Number of wallpapers to generate
    pub count: usize,

    /// User-picked anchor colors; empty means fully random generation
    pub anchors: Vec<Color>,

    /// Brightness bias
    pub tone: ToneMode,

    /// Allowed gradient styles; empty means all of them
    pub styles: Vec<GradientStyle>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            count: 10,
            anchors: Vec::new(),
            tone: ToneMode::Light,
            styles: vec![GradientStyle::Linear],
        }
    }
}

/// Generate `options.count` wallpapers.
///
/// Color pair per entry:
/// - no anchors: two random tone-biased colors
/// - one anchor: a subtle shade of it, paired with a shaded tone base
/// - two or more: two distinct anchors, each scattered around its value
pub fn generate_batch(rng: &mut impl Rng, options: &BatchOptions) -> Vec<Wallpaper> {
    let mut wallpapers = Vec::with_capacity(options.count);
    let mut previous_style: Option<GradientStyle> = None;

    for _ in 0..options.count {
        let (start, end) = pick_colors(rng, options);
        let style = pick_style(rng, &options.styles, previous_style);
        previous_style = Some(style);
        wallpapers.push(Wallpaper::new(start, end, style));
    }

    debug!(
        count = wallpapers.len(),
        anchors = options.anchors.len(),
        tone = %options.tone,
        "generated wallpaper batch"
    );

    wallpapers
}

/// Generate a single wallpaper from the same inputs as a batch
pub fn generate_one(rng: &mut impl Rng, options: &BatchOptions) -> Wallpaper {
    let (start, end) = pick_colors(rng, options);
    let style = pick_style(rng, &options.styles, None);
    Wallpaper::new(start, end, style)
}

fn pick_colors(rng: &mut impl Rng, options: &BatchOptions) -> (Color, Color) {
    match options.anchors.as_slice() {
        [] => (
            random_color(rng, options.tone),
            random_color(rng, options.tone),
        ),
        [anchor] => {
            let start = shade_color(rng, *anchor, options.tone, true);
            let end = shade_color(rng, options.tone.base_color(), options.tone, false);
            (start, end)
        }
        anchors => {
            let mut picked: Vec<Color> = anchors.to_vec();
            picked.shuffle(rng);
            (
                shuffle_color(rng, picked[0]),
                shuffle_color(rng, picked[1]),
            )
        }
    }
}

/// Draw a style from the allowed set. With more than one style allowed,
/// the previous entry's style is excluded from the draw.
fn pick_style(
    rng: &mut impl Rng,
    styles: &[GradientStyle],
    previous: Option<GradientStyle>,
) -> GradientStyle {
    let allowed: &[GradientStyle] = if styles.is_empty() {
        &GradientStyle::ALL
    } else {
        styles
    };

    if allowed.len() == 1 {
        return allowed[0];
    }

    let candidates: Vec<GradientStyle> = allowed
        .iter()
        .copied()
        .filter(|s| Some(*s) != previous)
        .collect();

    *candidates
        .choose(rng)
        .unwrap_or(&allowed[0])
}
