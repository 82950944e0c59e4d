//! CLI module for desktop-wallpaper.
//!
//! Parses arguments, installs the log subscriber and dispatches to the
//! command implementations.

mod commands;
mod output;

use clap::Parser;
pub use commands::Cli;
use tracing_subscriber::EnvFilter;

use crate::error::WallpaperError;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "DESKTOP_WALLPAPER_LOG";

/// Runs the CLI.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), WallpaperError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    cli.execute()
}

/// Default filter directive for a `-v` count.
const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "desktop_wallpaper=debug",
        _ => "desktop_wallpaper=trace",
    }
}

/// Installs the stderr log subscriber.
///
/// `DESKTOP_WALLPAPER_LOG` wins over the verbosity flag when set.
fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
