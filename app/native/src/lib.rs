//! desktop-wallpaper - typed access to the per-display desktop wallpaper.
//!
//! The [`wallpaper::DesktopWallpaper`] translation layer reads and sets the
//! wallpaper image, scaling mode, clipping behavior and fill color of a
//! display through a [`wallpaper::WallpaperBackend`]. On macOS the backend is
//! `NSWorkspace`; tests and other hosts can inject their own.
//!
//! ```no_run
//! use desktop_wallpaper::options::DisplayId;
//! use desktop_wallpaper::wallpaper::{DesktopWallpaper, system_backend};
//!
//! # fn main() -> Result<(), desktop_wallpaper::error::WallpaperError> {
//! let wallpaper = DesktopWallpaper::new(system_backend()?);
//! let display = DisplayId::new(1);
//! let options = wallpaper.wallpaper_options_for_screen(display)?;
//! wallpaper.set_wallpaper(display, "/Library/Desktop Pictures/Sonoma.heic", Some(&options))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod options;
pub mod schema;
pub mod wallpaper;

mod utils;

pub use error::{BackendError, WallpaperError};
pub use options::{DesktopImageOptions, DisplayId, FillColor, ImageScaling};
pub use wallpaper::{DesktopWallpaper, WallpaperBackend};
