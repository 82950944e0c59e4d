//! Shared helpers.
//!
//! - [`path`] - Tilde expansion and relative path resolution
//! - [`objc`] - Objective-C helper utilities (macOS only)

#[cfg(target_os = "macos")]
pub mod objc;
pub mod path;
