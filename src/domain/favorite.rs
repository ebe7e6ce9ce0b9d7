use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Wallpaper;

/// A wallpaper the user marked, snapshotted together with the effect
/// flags it was previewed with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteWallpaper {
    /// The wallpaper itself (colors + gradient style)
    pub wallpaper: Wallpaper,

    /// Grain effect enabled when it was marked
    #[serde(default)]
    pub noise: bool,

    /// Stripe effect enabled when it was marked
    #[serde(default)]
    pub stripes: bool,

    /// When the favorite was added
    pub created_at: DateTime<Utc>,
}

impl FavoriteWallpaper {
    pub fn new(wallpaper: Wallpaper, noise: bool, stripes: bool) -> Self {
        Self {
            wallpaper,
            noise,
            stripes,
            created_at: Utc::now(),
        }
    }

    /// True when this favorite snapshots the same wallpaper and effects
    pub fn matches(&self, wallpaper: &Wallpaper, noise: bool, stripes: bool) -> bool {
        self.wallpaper == *wallpaper && self.noise == noise && self.stripes == stripes
    }
}
