//! Configuration module for desktop-wallpaper.
//!
//! The configuration is optional. It only supplies a default display and
//! named option presets for the CLI; the translation layer never reads it.

pub mod types;

use std::path::PathBuf;
use std::sync::OnceLock;

pub use types::{ConfigError, WallpaperConfig, config_paths, load_config, load_config_from_path};

/// Global configuration instance, loaded once per process.
static CONFIG: OnceLock<WallpaperConfig> = OnceLock::new();

/// Path to the currently loaded configuration file.
static CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Custom config path override (set via CLI --config flag).
static CUSTOM_CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Sets a custom configuration file path to use instead of the default search paths.
///
/// Must be called before [`get_config`] to take effect. Returns `false` if a
/// path was already set.
pub fn set_custom_config_path(path: PathBuf) -> bool { CUSTOM_CONFIG_PATH.set(path).is_ok() }

/// Loads the configuration from disk, falling back to defaults.
fn load_or_default() -> WallpaperConfig {
    let result = CUSTOM_CONFIG_PATH
        .get()
        .map_or_else(load_config, |path| load_config_from_path(path));

    match result {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "loaded configuration");
            let _ = CONFIG_PATH.set(path);
            config
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file found, using defaults");
            WallpaperConfig::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "failed to load configuration, using defaults");
            WallpaperConfig::default()
        }
    }
}

/// Returns the global configuration instance, loading it on first use.
pub fn get_config() -> &'static WallpaperConfig { CONFIG.get_or_init(load_or_default) }

/// Returns the path to the loaded configuration file, if any.
pub fn get_config_path() -> Option<&'static PathBuf> { CONFIG_PATH.get() }
