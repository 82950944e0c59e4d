//! Raw contract of the native wallpaper backend.
//!
//! Backends speak only primitives: integers for scaling and clipping, floats
//! for color channels, and strings for paths and diagnostics. The typed
//! translation lives in [`super::DesktopWallpaper`].

use crate::error::BackendError;
use crate::options::DisplayId;

/// Wallpaper options as reported by the backend.
///
/// Every field may be absent independently. A record with no fields at all is
/// how the backend signals an unknown display.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawWallpaperOptions {
    /// Raw scaling value (`1`, `2`, or `-1` for proportional).
    pub scaling: Option<i32>,
    /// Raw clipping value (`0` allows clipping).
    pub allow_clipping: Option<i32>,
    /// Red channel, `0.0..=1.0`.
    pub red: Option<f64>,
    /// Green channel, `0.0..=1.0`.
    pub green: Option<f64>,
    /// Blue channel, `0.0..=1.0`.
    pub blue: Option<f64>,
    /// Alpha channel, `0.0..=1.0`.
    pub alpha: Option<f64>,
}

impl RawWallpaperOptions {
    /// Returns `true` when all six fields are absent.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.scaling.is_none()
            && self.allow_clipping.is_none()
            && self.red.is_none()
            && self.green.is_none()
            && self.blue.is_none()
            && self.alpha.is_none()
    }

    /// Names of the absent fields, in declaration order.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("scaling", self.scaling.is_none()),
            ("allowClipping", self.allow_clipping.is_none()),
            ("red", self.red.is_none()),
            ("green", self.green.is_none()),
            ("blue", self.blue.is_none()),
            ("alpha", self.alpha.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

/// A fully encoded set-wallpaper call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawWallpaperRequest<'a> {
    /// Target display.
    pub display: DisplayId,
    /// Path to the image.
    pub path: &'a str,
    /// Raw scaling value.
    pub scaling: i32,
    /// Raw clipping value.
    pub allow_clipping: i32,
    /// Red channel, `0.0..=1.0`.
    pub red: f64,
    /// Green channel, `0.0..=1.0`.
    pub green: f64,
    /// Blue channel, `0.0..=1.0`.
    pub blue: f64,
    /// Alpha channel, `0.0..=1.0`.
    pub alpha: f64,
}

/// Native wallpaper service for a set of displays.
///
/// Implementations perform a single synchronous round trip per call and keep
/// no state between calls.
pub trait WallpaperBackend {
    /// Sets the wallpaper. Returns an empty string on success and a
    /// diagnostic message otherwise.
    fn set_wallpaper(&self, request: &RawWallpaperRequest<'_>) -> String;

    /// Returns the current wallpaper path for a display.
    ///
    /// # Errors
    ///
    /// Returns the backend's own failure when the path cannot be read.
    fn wallpaper_path_for_screen(&self, display: DisplayId) -> Result<String, BackendError>;

    /// Returns the current raw wallpaper options for a display.
    fn wallpaper_options_for_screen(&self, display: DisplayId) -> RawWallpaperOptions;

    /// Identifier of the main display, if the backend knows one.
    fn main_display(&self) -> Option<DisplayId> { None }

    /// Backend name (for logging).
    fn name(&self) -> &'static str;
}

impl<B: WallpaperBackend + ?Sized> WallpaperBackend for &B {
    fn set_wallpaper(&self, request: &RawWallpaperRequest<'_>) -> String {
        (**self).set_wallpaper(request)
    }

    fn wallpaper_path_for_screen(&self, display: DisplayId) -> Result<String, BackendError> {
        (**self).wallpaper_path_for_screen(display)
    }

    fn wallpaper_options_for_screen(&self, display: DisplayId) -> RawWallpaperOptions {
        (**self).wallpaper_options_for_screen(display)
    }

    fn main_display(&self) -> Option<DisplayId> { (**self).main_display() }

    fn name(&self) -> &'static str { (**self).name() }
}

impl<B: WallpaperBackend + ?Sized> WallpaperBackend for Box<B> {
    fn set_wallpaper(&self, request: &RawWallpaperRequest<'_>) -> String {
        (**self).set_wallpaper(request)
    }

    fn wallpaper_path_for_screen(&self, display: DisplayId) -> Result<String, BackendError> {
        (**self).wallpaper_path_for_screen(display)
    }

    fn wallpaper_options_for_screen(&self, display: DisplayId) -> RawWallpaperOptions {
        (**self).wallpaper_options_for_screen(display)
    }

    fn main_display(&self) -> Option<DisplayId> { (**self).main_display() }

    fn name(&self) -> &'static str { (**self).name() }
}
