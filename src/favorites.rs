//! Favorite wallpaper storage
//!
//! Favorites are snapshots of a wallpaper plus the effect flags it was
//! previewed with, kept as pretty-printed JSON under `~/.waller`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{FavoriteWallpaper, Wallpaper};

/// The persisted favorites collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FavoritesStore {
    #[serde(default)]
    favorites: Vec<FavoriteWallpaper>,
}

impl FavoritesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default storage location: ~/.waller/favorites.json
    pub fn default_path() -> PathBuf {
        crate::config::waller_dir().join("favorites.json")
    }

    /// Load the store from a file; a missing file is an empty store
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read favorites from {}", path.display()))?;

        let store: FavoritesStore =
            serde_json::from_str(&content).with_context(|| "Failed to parse favorites JSON")?;

        Ok(store)
    }

    /// Save the store to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(self)
            .with_context(|| "Failed to serialize favorites")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write favorites to {}", path.display()))?;

        Ok(())
    }

    pub fn entries(&self) -> &[FavoriteWallpaper] {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FavoriteWallpaper> {
        self.favorites.get(index)
    }

    /// Add a snapshot. Returns false when an identical snapshot
    /// (same wallpaper, same effects) is already stored.
    pub fn add(&mut self, wallpaper: Wallpaper, noise: bool, stripes: bool) -> bool {
        if self
            .favorites
            .iter()
            .any(|f| f.matches(&wallpaper, noise, stripes))
        {
            return false;
        }

        self.favorites
            .push(FavoriteWallpaper::new(wallpaper, noise, stripes));
        true
    }

    /// Remove by list position. Returns the removed entry, or None when
    /// the index is out of range.
    pub fn remove(&mut self, index: usize) -> Option<FavoriteWallpaper> {
        if index < self.favorites.len() {
            Some(self.favorites.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.favorites.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::domain::GradientStyle;

    fn wallpaper(seed: u8) -> Wallpaper {
        Wallpaper::new(
            Color::new(seed, 0, 0),
            Color::new(0, seed, 0),
            GradientStyle::Linear,
        )
    }

    #[test]
    fn test_add_rejects_identical_snapshot() {
        let mut store = FavoritesStore::new();
        assert!(store.add(wallpaper(1), false, false));
        assert!(!store.add(wallpaper(1), false, false));
        assert_eq!(store.len(), 1);

        // Same wallpaper with different effects is a different snapshot
        assert!(store.add(wallpaper(1), true, false));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_remove_out_of_range_is_none() {
        let mut store = FavoritesStore::new();
        store.add(wallpaper(1), false, false);

        assert!(store.remove(5).is_none());
        assert_eq!(store.len(), 1);
        assert!(store.remove(0).is_some());
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_roundtrips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let mut store = FavoritesStore::new();
        store.add(wallpaper(3), true, true);
        store.add(wallpaper(4), false, false);
        store.save(&path).unwrap();

        let loaded = FavoritesStore::load(&path).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.entries()[0].wallpaper, wallpaper(3));
        assert!(loaded.entries()[0].noise);
        assert!(!loaded.entries()[1].stripes);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FavoritesStore::load(&dir.path().join("nope.json")).unwrap();
        assert!(store.is_empty());
    }
}
