//! Waller - gradient wallpaper generator
//!
//! Waller builds batches of randomly colored gradient wallpapers, saves
//! them to the picture gallery, and applies them as the desktop
//! wallpaper (home screen, lock screen, or both where the platform
//! supports the distinction).
//!
//! ## Generation
//!
//! A wallpaper is two colors plus a gradient style. With no anchor
//! colors, both colors are random (biased by a tone mode); with anchors,
//! the colors are scattered or shaded around the user's picks so every
//! entry in a batch is a fresh variation of the same palette.

pub mod color;
pub mod config;
pub mod domain;
pub mod favorites;
pub mod gallery;
pub mod generator;
pub mod gradient;
pub mod platform;

pub use domain::*;
