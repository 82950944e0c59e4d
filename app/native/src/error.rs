//! Error types for desktop-wallpaper.
//!
//! A single error enum is shared by the translation layer, the configuration
//! loader, and the CLI. It serializes as `{ "kind": ..., "message": ... }` so
//! callers that speak JSON receive structured failures.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::options::DisplayId;

/// Failure reported by the native wallpaper backend itself.
///
/// The message is kept verbatim; this layer never reinterprets it.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct BackendError {
    message: String,
}

impl BackendError {
    /// Creates a backend error carrying the native diagnostic text.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self { Self { message: message.into() } }

    /// Returns the native diagnostic text.
    #[must_use]
    pub fn message(&self) -> &str { &self.message }
}

/// Errors that can occur while reading or setting the wallpaper.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum WallpaperError {
    /// The backend returned no option fields at all for this display.
    #[error("Display {0} is likely invalid: no wallpaper options were returned")]
    InvalidDisplay(DisplayId),
    /// The backend rejected a set request. Carries the backend message verbatim.
    #[error("Error setting wallpaper: {0}")]
    SetFailed(String),
    /// The backend returned some option fields but not all of them.
    #[error("Incomplete wallpaper options for display {display}: missing {}", .missing.join(", "))]
    IncompleteOptions {
        /// Display that was queried.
        display: DisplayId,
        /// Names of the absent raw fields.
        missing: Vec<&'static str>,
    },
    /// The backend returned a scaling value with no matching mode.
    #[error("Unknown image scaling value: {0}")]
    UnknownScaling(i32),
    /// Backend failure passed through unchanged.
    #[error(transparent)]
    Backend(#[from] BackendError),
    /// No native backend exists for this platform.
    #[error("Unsupported platform: {0}")]
    Unsupported(String),
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for WallpaperError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for WallpaperError {
    fn from(err: serde_json::Error) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<ConfigError> for WallpaperError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}
