//! Shared types for CLI commands.

use crate::options::{DesktopImageOptions, FillColor, ImageScaling};

/// Image scaling mode (CLI representation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliImageScaling {
    /// Stretch each axis independently to fill the display.
    Axes,
    /// Do not scale the image.
    None,
    /// Scale uniformly, preserving the aspect ratio.
    Proportional,
}

impl From<CliImageScaling> for ImageScaling {
    fn from(value: CliImageScaling) -> Self {
        match value {
            CliImageScaling::Axes => Self::AxesIndependently,
            CliImageScaling::None => Self::None,
            CliImageScaling::Proportional => Self::ProportionallyUpOrDown,
        }
    }
}

/// Individual option fields given on the command line.
///
/// Fields left as `None` keep the value of the base options they are applied to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OptionOverrides {
    /// Scaling override.
    pub image_scaling: Option<ImageScaling>,
    /// Clipping override.
    pub allow_clipping: Option<bool>,
    /// Fill color override.
    pub fill_color: Option<FillColor>,
}

impl OptionOverrides {
    /// Returns `true` if no field is overridden.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.image_scaling.is_none() && self.allow_clipping.is_none() && self.fill_color.is_none()
    }

    /// Applies the overridden fields on top of `base`.
    #[must_use]
    pub fn apply(&self, base: DesktopImageOptions) -> DesktopImageOptions {
        DesktopImageOptions {
            image_scaling: self.image_scaling.unwrap_or(base.image_scaling),
            allow_clipping: self.allow_clipping.unwrap_or(base.allow_clipping),
            desktop_fill_color: self.fill_color.unwrap_or(base.desktop_fill_color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> DesktopImageOptions {
        DesktopImageOptions {
            image_scaling: ImageScaling::None,
            allow_clipping: false,
            desktop_fill_color: FillColor::new(1, 2, 3, 1.0),
        }
    }

    #[test]
    fn test_cli_scaling_maps_to_image_scaling() {
        assert_eq!(ImageScaling::from(CliImageScaling::Axes), ImageScaling::AxesIndependently);
        assert_eq!(ImageScaling::from(CliImageScaling::None), ImageScaling::None);
        assert_eq!(
            ImageScaling::from(CliImageScaling::Proportional),
            ImageScaling::ProportionallyUpOrDown
        );
    }

    #[test]
    fn test_empty_overrides_keep_base() {
        let overrides = OptionOverrides::default();
        assert!(overrides.is_empty());
        assert_eq!(overrides.apply(base()), base());
    }

    #[test]
    fn test_overrides_replace_only_given_fields() {
        let overrides = OptionOverrides {
            allow_clipping: Some(true),
            ..Default::default()
        };
        assert!(!overrides.is_empty());

        let options = overrides.apply(base());
        assert_eq!(options.image_scaling, ImageScaling::None);
        assert!(options.allow_clipping);
        assert_eq!(options.desktop_fill_color, FillColor::new(1, 2, 3, 1.0));
    }
}
