//! Typed wallpaper access for a single display.
//!
//! [`DesktopWallpaper`] converts between [`DesktopImageOptions`] and the raw
//! primitives spoken by a [`WallpaperBackend`], and turns the backend's
//! failure signals into [`WallpaperError`]s. It holds no state besides the
//! backend; every call is a single synchronous round trip.

pub mod backend;
#[cfg(target_os = "macos")]
pub mod macos;

pub use backend::{RawWallpaperOptions, RawWallpaperRequest, WallpaperBackend};

use crate::error::WallpaperError;
use crate::options::{
    DesktopImageOptions, DisplayId, FillColor, ImageScaling, channel_to_unit, clipping_from_raw,
    clipping_to_raw, unit_to_channel,
};

/// Returns the native backend for the current platform.
///
/// # Errors
///
/// Returns [`WallpaperError::Unsupported`] on platforms without a backend.
#[cfg(target_os = "macos")]
pub fn system_backend() -> Result<Box<dyn WallpaperBackend>, WallpaperError> {
    Ok(Box::new(macos::MacosBackend::new()))
}

/// Returns the native backend for the current platform.
///
/// # Errors
///
/// Returns [`WallpaperError::Unsupported`] on platforms without a backend.
#[cfg(not(target_os = "macos"))]
pub fn system_backend() -> Result<Box<dyn WallpaperBackend>, WallpaperError> {
    Err(WallpaperError::Unsupported(format!(
        "no native wallpaper backend for {}",
        std::env::consts::OS
    )))
}

/// Translation layer over a native wallpaper backend.
#[derive(Debug, Clone)]
pub struct DesktopWallpaper<B> {
    backend: B,
}

impl<B: WallpaperBackend> DesktopWallpaper<B> {
    /// Wraps a backend.
    #[must_use]
    pub const fn new(backend: B) -> Self { Self { backend } }

    /// Returns the wrapped backend.
    #[must_use]
    pub const fn backend(&self) -> &B { &self.backend }

    /// Identifier of the main display, if the backend reports one.
    #[must_use]
    pub fn main_display(&self) -> Option<DisplayId> { self.backend.main_display() }

    /// Gets the wallpaper options for a display.
    ///
    /// # Errors
    ///
    /// - [`WallpaperError::InvalidDisplay`] if the backend returned no fields.
    /// - [`WallpaperError::IncompleteOptions`] if only some fields were returned.
    /// - [`WallpaperError::UnknownScaling`] if the scaling value has no mode.
    pub fn wallpaper_options_for_screen(
        &self,
        display_id: DisplayId,
    ) -> Result<DesktopImageOptions, WallpaperError> {
        let raw = self.backend.wallpaper_options_for_screen(display_id);
        tracing::debug!(backend = self.backend.name(), display = %display_id, ?raw, "read wallpaper options");

        if raw.is_empty() {
            tracing::warn!(display = %display_id, "no wallpaper options returned, display likely invalid");
            return Err(WallpaperError::InvalidDisplay(display_id));
        }

        let (Some(scaling), Some(allow_clipping), Some(red), Some(green), Some(blue), Some(alpha)) =
            (raw.scaling, raw.allow_clipping, raw.red, raw.green, raw.blue, raw.alpha)
        else {
            let missing = raw.missing_fields();
            tracing::warn!(display = %display_id, ?missing, "backend returned partial wallpaper options");
            return Err(WallpaperError::IncompleteOptions { display: display_id, missing });
        };

        let image_scaling =
            ImageScaling::from_raw(scaling).ok_or(WallpaperError::UnknownScaling(scaling))?;

        Ok(DesktopImageOptions {
            image_scaling,
            allow_clipping: clipping_from_raw(allow_clipping),
            desktop_fill_color: FillColor {
                red: unit_to_channel(red),
                green: unit_to_channel(green),
                blue: unit_to_channel(blue),
                alpha,
            },
        })
    }

    /// Gets the wallpaper path for a display.
    ///
    /// # Errors
    ///
    /// Returns [`WallpaperError::Backend`] with the backend's failure unchanged.
    pub fn wallpaper_path_for_screen(&self, display_id: DisplayId) -> Result<String, WallpaperError> {
        let path = self.backend.wallpaper_path_for_screen(display_id)?;
        tracing::debug!(backend = self.backend.name(), display = %display_id, path = %path, "read wallpaper path");
        Ok(path)
    }

    /// Sets the wallpaper image for a display.
    ///
    /// When `options` is `None`, the display's current options are read first
    /// and reused, so only the image changes.
    ///
    /// # Errors
    ///
    /// - Any error from [`Self::wallpaper_options_for_screen`] when `options`
    ///   is `None`.
    /// - [`WallpaperError::SetFailed`] with the backend's message when the
    ///   backend reports a failure.
    pub fn set_wallpaper(
        &self,
        display_id: DisplayId,
        path: &str,
        options: Option<&DesktopImageOptions>,
    ) -> Result<(), WallpaperError> {
        let options = match options {
            Some(options) => *options,
            None => self.wallpaper_options_for_screen(display_id)?,
        };

        let color = options.desktop_fill_color;
        let request = RawWallpaperRequest {
            display: display_id,
            path,
            scaling: options.image_scaling.to_raw(),
            allow_clipping: clipping_to_raw(options.allow_clipping),
            red: channel_to_unit(color.red),
            green: channel_to_unit(color.green),
            blue: channel_to_unit(color.blue),
            alpha: color.alpha,
        };

        let result = self.backend.set_wallpaper(&request);
        if !result.is_empty() {
            tracing::warn!(display = %display_id, path, error = %result, "backend failed to set wallpaper");
            return Err(WallpaperError::SetFailed(result));
        }

        tracing::debug!(backend = self.backend.name(), display = %display_id, path, "wallpaper set");
        Ok(())
    }
}
