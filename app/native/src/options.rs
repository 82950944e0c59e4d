//! Structured wallpaper options and their raw native encodings.
//!
//! The native layer exchanges everything as primitive numbers. This module owns
//! the typed side of that boundary and the conversions in both directions:
//!
//! - [`ImageScaling`] travels as an integer, with `-1` standing in for
//!   proportional scaling.
//! - `allowClipping` travels as an integer where `0` means clipping is allowed.
//! - Fill color channels are 8-bit integers here and `0.0..=1.0` floats natively.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier of a physical display, as understood by the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct DisplayId(u32);

impl DisplayId {
    /// Wraps a raw display identifier.
    #[must_use]
    pub const fn new(id: u32) -> Self { Self(id) }

    /// Returns the raw display identifier.
    #[must_use]
    pub const fn get(self) -> u32 { self.0 }
}

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

impl FromStr for DisplayId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self).map_err(|_| {
            format!("Invalid display ID '{s}'. Expected a non-negative integer.")
        })
    }
}

/// How to scale the desktop image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ImageScaling {
    /// Scale each dimension to exactly fit the display.
    AxesIndependently,
    /// Do not scale the image.
    None,
    /// Scale to the largest size that fits the display while preserving the
    /// aspect ratio.
    ProportionallyUpOrDown,
}

/// Raw scaling values used by the native layer.
///
/// Proportional scaling is encoded as `-1`, not `3`. Any integer missing from
/// this table is rejected rather than coerced.
const SCALING_TABLE: [(ImageScaling, i32); 3] = [
    (ImageScaling::AxesIndependently, 1),
    (ImageScaling::None, 2),
    (ImageScaling::ProportionallyUpOrDown, -1),
];

impl ImageScaling {
    /// All scaling modes.
    pub const ALL: [Self; 3] = [Self::AxesIndependently, Self::None, Self::ProportionallyUpOrDown];

    /// Returns the raw native value for this scaling mode.
    #[must_use]
    pub fn to_raw(self) -> i32 {
        SCALING_TABLE
            .iter()
            .find_map(|&(mode, raw)| (mode == self).then_some(raw))
            .unwrap_or_default()
    }

    /// Looks up the scaling mode for a raw native value.
    ///
    /// Returns `None` for values outside the lookup table.
    #[must_use]
    pub fn from_raw(raw: i32) -> Option<Self> {
        SCALING_TABLE.iter().find_map(|&(mode, value)| (value == raw).then_some(mode))
    }

    /// Short name used on the command line and in human output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AxesIndependently => "axes",
            Self::None => "none",
            Self::ProportionallyUpOrDown => "proportional",
        }
    }
}

impl fmt::Display for ImageScaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Encodes `allowClipping` for the native layer (`0` allows clipping).
#[must_use]
pub const fn clipping_to_raw(allow_clipping: bool) -> i32 { if allow_clipping { 0 } else { 1 } }

/// Decodes the native clipping value.
///
/// Only `0` allows clipping; `1` and `-1` are equivalent and both disallow it.
#[must_use]
pub const fn clipping_from_raw(raw: i32) -> bool { raw == 0 }

/// Converts an 8-bit color channel to a `0.0..=1.0` float.
#[must_use]
pub fn channel_to_unit(channel: u8) -> f64 { f64::from(channel) / 255.0 }

/// Converts a `0.0..=1.0` float color channel to its 8-bit representation.
///
/// Out of range values saturate; NaN maps to `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_channel(unit: f64) -> u8 {
    if unit.is_nan() {
        return 0;
    }
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Color used to fill the margins not covered by the desktop image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FillColor {
    /// Red channel (0 - 255).
    pub red: u8,
    /// Green channel (0 - 255).
    pub green: u8,
    /// Blue channel (0 - 255).
    pub blue: u8,
    /// Alpha channel (0.0 - 1.0).
    pub alpha: f64,
}

impl FillColor {
    /// Creates a fill color from 8-bit channels and a float alpha.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8, alpha: f64) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Formats the color as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let alpha = unit_to_channel(self.alpha);
        if alpha == u8::MAX {
            format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
        } else {
            format!("#{:02x}{:02x}{:02x}{alpha:02x}", self.red, self.green, self.blue)
        }
    }
}

impl Default for FillColor {
    fn default() -> Self { Self::new(0, 0, 0, 1.0) }
}

impl FromStr for FillColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> { parse_hex_color(s) }
}

/// Parses a `#RRGGBB` or `#RRGGBBAA` hex string into a fill color.
///
/// The leading `#` is optional. The alpha byte is scaled to `0.0..=1.0`.
///
/// # Errors
///
/// Returns an error message if the string is not a 6 or 8 digit hex color.
pub fn parse_hex_color(input: &str) -> Result<FillColor, String> {
    let hex = input.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!(
            "Invalid color '{input}'. Expected a hex color like #RRGGBB or #RRGGBBAA."
        ));
    }

    let byte = |at: usize| {
        u8::from_str_radix(&hex[at..at + 2], 16).map_err(|e| format!("Invalid color '{input}': {e}"))
    };

    let alpha = if hex.len() == 8 { channel_to_unit(byte(6)?) } else { 1.0 };

    Ok(FillColor::new(byte(0)?, byte(2)?, byte(4)?, alpha))
}

/// Options for displaying the desktop image on a particular screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DesktopImageOptions {
    /// How to scale the desktop image.
    pub image_scaling: ImageScaling,
    /// Whether parts of the image may be clipped when scaling.
    pub allow_clipping: bool,
    /// Color to fill the margins not covered by the desktop image.
    pub desktop_fill_color: FillColor,
}
