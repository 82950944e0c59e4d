//! Path utilities for shell-like path expansion.
//!
//! Image paths given on the command line or in presets may start with `~` or
//! be relative; the native backend only accepts absolute paths.

use std::path::{Path, PathBuf};

/// Expands a leading tilde to the user's home directory.
///
/// Absolute and relative paths are returned unchanged. Blank input yields an
/// empty path.
#[must_use]
pub fn expand(path: &str) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    let expanded = shellexpand::tilde(path);
    PathBuf::from(expanded.as_ref())
}

/// Expands a tilde and resolves relative paths against `base_dir`.
#[must_use]
pub fn expand_and_resolve(path: &str, base_dir: &Path) -> PathBuf {
    let path = path.trim();

    if path.is_empty() {
        return PathBuf::new();
    }

    let expanded = expand(path);
    if expanded.is_absolute() {
        return expanded;
    }

    base_dir.join(expanded)
}
