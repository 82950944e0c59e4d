//! CLI command definitions using Clap.
//!
//! - `types` - Shared types used across commands
//! - `wallpaper` - `get` and `set` commands

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::error::WallpaperError;
use crate::wallpaper::{DesktopWallpaper, system_backend};
use crate::{config, schema};

pub mod types;
pub mod wallpaper;

pub use wallpaper::{GetCommands, SetArgs};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name used for completions.
const BIN_NAME: &str = "desktop-wallpaper";

/// desktop-wallpaper - Read and set the desktop wallpaper for a display.
#[derive(Parser, Debug)]
#[command(name = "desktop-wallpaper")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Increase log verbosity (-v for debug, -vv for trace).
    ///
    /// `DESKTOP_WALLPAPER_LOG` takes precedence when set.
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Read the wallpaper or its display options.
    #[command(subcommand)]
    Get(GetCommands),

    /// Set the desktop wallpaper for a display.
    ///
    /// Without option flags the display keeps its current scaling, clipping
    /// and fill color; only the image changes.
    Set(SetArgs),

    /// Print the path of the loaded configuration file.
    ///
    /// Prints the searched locations when no file was found.
    ConfigPath,

    /// Output the configuration JSON Schema.
    ///
    /// Can be redirected to a file for use with editors that support JSON
    /// Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Usage:
    ///   eval "$(desktop-wallpaper completions --shell zsh)"
    ///   desktop-wallpaper completions --shell fish > ~/.config/fish/completions/desktop-wallpaper.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Returns the custom config path if specified via --config flag.
    #[must_use]
    pub fn config_path(&self) -> Option<PathBuf> { self.config.as_ref().map(PathBuf::from) }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), WallpaperError> {
        if let Some(path) = self.config_path() {
            if !path.exists() {
                return Err(WallpaperError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            config::set_custom_config_path(path);
        }

        match &self.command {
            Commands::Get(cmd) => {
                let wallpaper = DesktopWallpaper::new(system_backend()?);
                wallpaper::execute_get(&wallpaper, config::get_config(), cmd)
            }
            Commands::Set(args) => {
                let wallpaper = DesktopWallpaper::new(system_backend()?);
                wallpaper::execute_set(&wallpaper, config::get_config(), args)
            }
            Commands::ConfigPath => {
                config::get_config();
                match config::get_config_path() {
                    Some(path) => println!("{}", path.display()),
                    None => {
                        println!("No configuration file found. Searched:");
                        for path in config::config_paths() {
                            println!("  {}", path.display());
                        }
                    }
                }
                Ok(())
            }
            Commands::Schema => {
                println!("{}", schema::generate_schema_json());
                Ok(())
            }
            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, BIN_NAME, &mut io::stdout());
    }
}
