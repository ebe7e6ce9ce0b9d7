//! Core domain types for waller

mod favorite;
mod wallpaper;

pub use favorite::FavoriteWallpaper;
pub use wallpaper::{GradientStyle, ToneMode, Wallpaper, WallpaperTarget};
