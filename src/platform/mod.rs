//! Desktop wallpaper integration
//!
//! Applies a saved PNG as the desktop wallpaper. The home screen works
//! on all three desktop platforms; the lock screen is only settable on
//! GNOME, so `Both` falls back to home-only with a warning elsewhere.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::warn;

use crate::domain::WallpaperTarget;

/// Apply the image at `path` to the requested wallpaper target
pub fn set_wallpaper(path: &Path, target: WallpaperTarget) -> Result<()> {
    let path = path
        .canonicalize()
        .with_context(|| format!("Wallpaper file not found: {}", path.display()))?;

    match target {
        WallpaperTarget::Home => set_home(&path),
        WallpaperTarget::Lock => set_lock(&path),
        WallpaperTarget::Both => {
            set_home(&path)?;
            match set_lock(&path) {
                Ok(()) => Ok(()),
                Err(err) if !lock_supported() => {
                    warn!("lock screen not supported here, applied home only: {err}");
                    Ok(())
                }
                Err(err) => Err(err),
            }
        }
    }
}

/// Whether the current platform can set the lock screen at all
pub fn lock_supported() -> bool {
    cfg!(target_os = "linux")
}

#[cfg(target_os = "linux")]
fn set_home(path: &Path) -> Result<()> {
    let uri = file_uri(path);

    // GNOME first; feh covers the common X11 setups without gsettings
    match gsettings(&["set", "org.gnome.desktop.background", "picture-uri", &uri]) {
        Ok(()) => {
            // The dark variant keys off a separate setting since GNOME 42
            let _ = gsettings(&[
                "set",
                "org.gnome.desktop.background",
                "picture-uri-dark",
                &uri,
            ]);
            Ok(())
        }
        Err(gsettings_err) => {
            tracing::debug!("gsettings failed, trying feh: {gsettings_err}");
            run("feh", &["--bg-fill", &path.display().to_string()])
                .map_err(|_| gsettings_err)
                .context("Failed to set wallpaper via gsettings or feh")
        }
    }
}

#[cfg(target_os = "linux")]
fn set_lock(path: &Path) -> Result<()> {
    let uri = file_uri(path);
    gsettings(&["set", "org.gnome.desktop.screensaver", "picture-uri", &uri])
        .context("Failed to set lock screen wallpaper via gsettings")
}

#[cfg(target_os = "linux")]
fn gsettings(args: &[&str]) -> Result<()> {
    run("gsettings", args)
}

#[cfg(target_os = "macos")]
fn set_home(path: &Path) -> Result<()> {
    let script = format!(
        "tell application \"System Events\" to tell every desktop to set picture to \"{}\"",
        path.display()
    );
    run("osascript", &["-e", &script]).context("Failed to set wallpaper via osascript")
}

#[cfg(target_os = "macos")]
fn set_lock(_path: &Path) -> Result<()> {
    bail!("the lock screen wallpaper cannot be set on macOS")
}

#[cfg(target_os = "windows")]
fn set_home(path: &Path) -> Result<()> {
    use std::os::windows::ffi::OsStrExt;

    use windows::Win32::UI::WindowsAndMessaging::{
        SPI_SETDESKWALLPAPER, SPIF_SENDCHANGE, SPIF_UPDATEINIFILE, SystemParametersInfoW,
    };

    let mut wide: Vec<u16> = path.as_os_str().encode_wide().collect();
    wide.push(0);

    unsafe {
        SystemParametersInfoW(
            SPI_SETDESKWALLPAPER,
            0,
            Some(wide.as_mut_ptr() as *mut core::ffi::c_void),
            SPIF_UPDATEINIFILE | SPIF_SENDCHANGE,
        )
    }
    .context("Failed to set wallpaper via SystemParametersInfoW")
}

#[cfg(target_os = "windows")]
fn set_lock(_path: &Path) -> Result<()> {
    bail!("the lock screen wallpaper cannot be set on Windows")
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn set_home(_path: &Path) -> Result<()> {
    bail!("setting the wallpaper is not supported on this platform")
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn set_lock(_path: &Path) -> Result<()> {
    bail!("setting the wallpaper is not supported on this platform")
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
fn run(program: &str, args: &[&str]) -> Result<()> {
    let status = std::process::Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run {program}"))?;

    if !status.success() {
        bail!("{program} exited with {status}");
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn file_uri(path: &Path) -> String {
    format!("file://{}", path.display())
}
