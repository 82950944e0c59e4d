//! Wallpaper CLI commands.
//!
//! This module contains the `get` and `set` commands. Both run against a
//! [`DesktopWallpaper`] so they can be exercised with any backend.

use clap::{Args, Subcommand};

use super::types::{CliImageScaling, OptionOverrides};
use crate::cli::output;
use crate::config::WallpaperConfig;
use crate::error::WallpaperError;
use crate::options::{DesktopImageOptions, DisplayId, FillColor};
use crate::utils::path::expand_and_resolve;
use crate::wallpaper::{DesktopWallpaper, WallpaperBackend};

/// Get subcommands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum GetCommands {
    /// Print the wallpaper display options for a screen.
    #[command(
        verbatim_doc_comment,
        after_long_help = r#"Examples:
  desktop-wallpaper get options               # Options for the default display
  desktop-wallpaper get options --display 2   # Options for display 2
  desktop-wallpaper get options --json        # Output as JSON"#
    )]
    Options {
        /// Display ID. Defaults to the configured display, then the main display.
        #[arg(long, short, value_name = "ID")]
        display: Option<DisplayId>,

        /// Output as JSON.
        #[arg(long, short)]
        json: bool,
    },

    /// Print the wallpaper image path for a screen.
    Path {
        /// Display ID. Defaults to the configured display, then the main display.
        #[arg(long, short, value_name = "ID")]
        display: Option<DisplayId>,
    },
}

/// Arguments of the `set` command.
#[derive(Args, Debug)]
#[command(after_long_help = r#"Examples:
  desktop-wallpaper set ~/Pictures/a.png                        # Keep current display options
  desktop-wallpaper set a.png --display 2 --scaling proportional
  desktop-wallpaper set a.png --no-clipping --fill-color '#1e1e2e'
  desktop-wallpaper set a.png --preset centered                 # Options from a config preset"#)]
pub struct SetArgs {
    /// The path to the image to use as wallpaper.
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Display ID. Defaults to the configured display, then the main display.
    #[arg(long, short, value_name = "ID")]
    pub display: Option<DisplayId>,

    /// Start from a preset defined in the configuration file.
    #[arg(long, short, value_name = "NAME")]
    pub preset: Option<String>,

    /// How to scale the image.
    #[arg(long, short, value_enum)]
    pub scaling: Option<CliImageScaling>,

    /// Allow parts of the image to be clipped when scaling.
    #[arg(long, conflicts_with = "no_clipping")]
    pub clipping: bool,

    /// Do not allow the image to be clipped when scaling.
    #[arg(long)]
    pub no_clipping: bool,

    /// Fill color for uncovered margins, as #RRGGBB or #RRGGBBAA.
    #[arg(long, short, value_name = "HEX")]
    pub fill_color: Option<FillColor>,
}

impl SetArgs {
    /// Returns the option fields given on the command line.
    #[must_use]
    pub fn overrides(&self) -> OptionOverrides {
        let allow_clipping = match (self.clipping, self.no_clipping) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };

        OptionOverrides {
            image_scaling: self.scaling.map(Into::into),
            allow_clipping,
            fill_color: self.fill_color,
        }
    }
}

/// Picks the display: explicit argument, then configuration, then main display.
pub fn resolve_display<B: WallpaperBackend>(
    wallpaper: &DesktopWallpaper<B>,
    config: &WallpaperConfig,
    explicit: Option<DisplayId>,
) -> Result<DisplayId, WallpaperError> {
    explicit.or(config.display).or_else(|| wallpaper.main_display()).ok_or_else(|| {
        WallpaperError::InvalidArguments(
            "No display given and no main display available. Use --display <ID>.".to_string(),
        )
    })
}

/// Builds the options for a `set` call.
///
/// Returns `None` when neither a preset nor an override was given, leaving
/// the translation layer to keep the display's current options.
pub fn resolve_set_options<B: WallpaperBackend>(
    wallpaper: &DesktopWallpaper<B>,
    config: &WallpaperConfig,
    display: DisplayId,
    args: &SetArgs,
) -> Result<Option<DesktopImageOptions>, WallpaperError> {
    let overrides = args.overrides();

    let base = match args.preset.as_deref() {
        Some(name) => *config.preset(name).ok_or_else(|| {
            WallpaperError::InvalidArguments(format!("Unknown preset '{name}'."))
        })?,
        None if overrides.is_empty() => return Ok(None),
        None => wallpaper.wallpaper_options_for_screen(display)?,
    };

    Ok(Some(overrides.apply(base)))
}

/// Expands and resolves an image path, requiring it to exist.
pub fn resolve_image_path(path: &str) -> Result<String, WallpaperError> {
    let cwd = std::env::current_dir()?;
    let resolved = expand_and_resolve(path, &cwd);

    if !resolved.is_file() {
        return Err(WallpaperError::InvalidArguments(format!(
            "Wallpaper file not found: {}",
            resolved.display()
        )));
    }

    resolved.to_str().map(ToString::to_string).ok_or_else(|| {
        WallpaperError::InvalidArguments(format!(
            "Wallpaper path is not valid UTF-8: {}",
            resolved.display()
        ))
    })
}

/// Execute get subcommands.
pub fn execute_get<B: WallpaperBackend>(
    wallpaper: &DesktopWallpaper<B>,
    config: &WallpaperConfig,
    cmd: &GetCommands,
) -> Result<(), WallpaperError> {
    match cmd {
        GetCommands::Options { display, json } => {
            let display = resolve_display(wallpaper, config, *display)?;
            let options = wallpaper.wallpaper_options_for_screen(display)?;
            if *json {
                output::print_highlighted_json(&serde_json::to_value(options)?);
            } else {
                output::print_options(display, &options);
            }
        }
        GetCommands::Path { display } => {
            let display = resolve_display(wallpaper, config, *display)?;
            println!("{}", wallpaper.wallpaper_path_for_screen(display)?);
        }
    }
    Ok(())
}

/// Execute the set command.
pub fn execute_set<B: WallpaperBackend>(
    wallpaper: &DesktopWallpaper<B>,
    config: &WallpaperConfig,
    args: &SetArgs,
) -> Result<(), WallpaperError> {
    let path = resolve_image_path(&args.path)?;
    let display_id = resolve_display(wallpaper, config, args.display)?;
    let options = resolve_set_options(wallpaper, config, display_id, args)?;

    tracing::info!(display = %display_id, path = %path, preset = args.preset.as_deref(), "setting wallpaper");
    wallpaper.set_wallpaper(display_id, &path, options.as_ref())?;

    println!("Wallpaper set successfully.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use clap::Parser;

    use super::*;
    use crate::error::BackendError;
    use crate::options::ImageScaling;
    use crate::wallpaper::{RawWallpaperOptions, RawWallpaperRequest};

    #[derive(Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        #[command(subcommand)]
        Get(GetCommands),
        Set(SetArgs),
    }

    /// Backend with a fixed main display that counts option reads.
    #[derive(Default)]
    struct FakeBackend {
        main: Option<DisplayId>,
        reads: Cell<usize>,
    }

    impl WallpaperBackend for FakeBackend {
        fn set_wallpaper(&self, _request: &RawWallpaperRequest<'_>) -> String { String::new() }

        fn wallpaper_path_for_screen(&self, _display: DisplayId) -> Result<String, BackendError> {
            Ok("/tmp/current.png".to_string())
        }

        fn wallpaper_options_for_screen(&self, _display: DisplayId) -> RawWallpaperOptions {
            self.reads.set(self.reads.get() + 1);
            RawWallpaperOptions {
                scaling: Some(1),
                allow_clipping: Some(0),
                red: Some(1.0),
                green: Some(1.0),
                blue: Some(1.0),
                alpha: Some(1.0),
            }
        }

        fn main_display(&self) -> Option<DisplayId> { self.main }

        fn name(&self) -> &'static str { "fake" }
    }

    fn parse_set(args: &[&str]) -> SetArgs {
        let argv = ["test", "set"].into_iter().chain(args.iter().copied());
        match TestCli::try_parse_from(argv).unwrap().command {
            TestCommands::Set(args) => args,
            TestCommands::Get(_) => panic!("Expected Set command"),
        }
    }

    #[test]
    fn test_get_options_parse() {
        let cli = TestCli::try_parse_from(["test", "get", "options", "--display", "3", "--json"])
            .unwrap();
        match cli.command {
            TestCommands::Get(GetCommands::Options { display, json }) => {
                assert_eq!(display, Some(DisplayId::new(3)));
                assert!(json);
            }
            _ => panic!("Expected Get Options command"),
        }
    }

    #[test]
    fn test_get_path_parse() {
        let cli = TestCli::try_parse_from(["test", "get", "path"]).unwrap();
        assert!(matches!(
            cli.command,
            TestCommands::Get(GetCommands::Path { display: None })
        ));
    }

    #[test]
    fn test_set_parse_with_overrides() {
        let args = parse_set(&[
            "/tmp/a.png",
            "--scaling",
            "proportional",
            "--no-clipping",
            "--fill-color",
            "#ff0000",
        ]);

        assert_eq!(args.path, "/tmp/a.png");
        let overrides = args.overrides();
        assert_eq!(overrides.image_scaling, Some(ImageScaling::ProportionallyUpOrDown));
        assert_eq!(overrides.allow_clipping, Some(false));
        assert_eq!(overrides.fill_color, Some(FillColor::new(255, 0, 0, 1.0)));
    }

    #[test]
    fn test_set_rejects_conflicting_clipping_flags() {
        let result = TestCli::try_parse_from(["test", "set", "a.png", "--clipping", "--no-clipping"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_set_rejects_invalid_fill_color() {
        let result = TestCli::try_parse_from(["test", "set", "a.png", "--fill-color", "red"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_display_prefers_explicit() {
        let wallpaper = DesktopWallpaper::new(FakeBackend {
            main: Some(DisplayId::new(1)),
            ..Default::default()
        });
        let config = WallpaperConfig { display: Some(DisplayId::new(2)), ..Default::default() };

        let display = resolve_display(&wallpaper, &config, Some(DisplayId::new(3))).unwrap();
        assert_eq!(display, DisplayId::new(3));
        let display = resolve_display(&wallpaper, &config, None).unwrap();
        assert_eq!(display, DisplayId::new(2));
        let display = resolve_display(&wallpaper, &WallpaperConfig::default(), None).unwrap();
        assert_eq!(display, DisplayId::new(1));
    }

    #[test]
    fn test_resolve_display_without_any_source_fails() {
        let wallpaper = DesktopWallpaper::new(FakeBackend::default());
        let err = resolve_display(&wallpaper, &WallpaperConfig::default(), None).unwrap_err();
        assert!(matches!(err, WallpaperError::InvalidArguments(_)));
    }

    #[test]
    fn test_set_options_none_without_flags() {
        let wallpaper = DesktopWallpaper::new(FakeBackend::default());
        let args = parse_set(&["/tmp/a.png"]);

        let options =
            resolve_set_options(&wallpaper, &WallpaperConfig::default(), DisplayId::new(1), &args)
                .unwrap();
        assert!(options.is_none());
        assert_eq!(wallpaper.backend().reads.get(), 0);
    }

    #[test]
    fn test_set_options_merge_current_with_overrides() {
        let wallpaper = DesktopWallpaper::new(FakeBackend::default());
        let args = parse_set(&["/tmp/a.png", "--scaling", "none"]);

        let options =
            resolve_set_options(&wallpaper, &WallpaperConfig::default(), DisplayId::new(1), &args)
                .unwrap()
                .unwrap();
        assert_eq!(options.image_scaling, ImageScaling::None);
        assert!(options.allow_clipping);
        assert_eq!(options.desktop_fill_color, FillColor::new(255, 255, 255, 1.0));
        assert_eq!(wallpaper.backend().reads.get(), 1);
    }

    #[test]
    fn test_set_options_from_preset() {
        let wallpaper = DesktopWallpaper::new(FakeBackend::default());
        let preset = DesktopImageOptions {
            image_scaling: ImageScaling::AxesIndependently,
            allow_clipping: false,
            desktop_fill_color: FillColor::new(0, 0, 0, 1.0),
        };
        let mut config = WallpaperConfig::default();
        config.presets.insert("stretch".to_string(), preset);
        let args = parse_set(&["/tmp/a.png", "--preset", "stretch", "--clipping"]);

        let options =
            resolve_set_options(&wallpaper, &config, DisplayId::new(1), &args).unwrap().unwrap();
        assert_eq!(options.image_scaling, ImageScaling::AxesIndependently);
        assert!(options.allow_clipping);
        assert_eq!(wallpaper.backend().reads.get(), 0);
    }

    #[test]
    fn test_set_options_unknown_preset() {
        let wallpaper = DesktopWallpaper::new(FakeBackend::default());
        let args = parse_set(&["/tmp/a.png", "--preset", "missing"]);

        let err =
            resolve_set_options(&wallpaper, &WallpaperConfig::default(), DisplayId::new(1), &args)
                .unwrap_err();
        assert!(err.to_string().contains("Unknown preset 'missing'"));
    }

    #[test]
    fn test_resolve_image_path_missing_file() {
        let err = resolve_image_path("/nonexistent/path/to/wallpaper.jpg").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_resolve_image_path_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(resolve_image_path(path).unwrap(), path);
    }
}
