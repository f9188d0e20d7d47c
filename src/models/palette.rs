//! Palette entries and foreground contrast classification.

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// Luminance below which a swatch is considered dark and needs white text.
pub const DARK_LUMINANCE_THRESHOLD: f64 = 150.0;

/// Foreground text color that stays readable on a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextContrast {
    /// White text on a dark swatch
    White,
    /// Black text on a light swatch
    Black,
}

impl TextContrast {
    /// Classifies a luminance score.
    ///
    /// Monotonic: once a luminance is bright enough for black text, every
    /// brighter luminance is too.
    #[must_use]
    pub fn for_luminance(luminance: f64) -> Self {
        if luminance < DARK_LUMINANCE_THRESHOLD {
            Self::White
        } else {
            Self::Black
        }
    }

    /// CSS class used in the swatch table (named after the background).
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::White => "dark",
            Self::Black => "light",
        }
    }

    /// Name of the matching `Color32` constant in generated snippets.
    #[must_use]
    pub const fn color32_constant(&self) -> &'static str {
        match self {
            Self::White => "WHITE",
            Self::Black => "BLACK",
        }
    }
}

/// A named palette color with its precomputed luminance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Enum variant name (e.g., "Red", "Gray3")
    pub name: String,
    /// Swatch color
    pub color: RgbColor,
    /// Luminance estimate of `color`
    pub luminance: f64,
    /// Readable foreground for the swatch
    pub contrast: TextContrast,
}

impl PaletteEntry {
    /// Creates an entry, deriving luminance and contrast from the color.
    #[must_use]
    pub fn new(name: impl Into<String>, color: RgbColor) -> Self {
        let luminance = color.luminance();
        Self {
            name: name.into(),
            color,
            luminance,
            contrast: TextContrast::for_luminance(luminance),
        }
    }
}
