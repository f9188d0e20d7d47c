//! Pattern color palette generation.
//!
//! Builds the fixed set of pattern colors: very light, fully saturated
//! swatches taken from every fourth named hue, followed by eight grays. The
//! result feeds the HTML/snippet renderer in [`render`].

pub mod hues;
pub mod render;

pub use hues::HUE_NAMES;
pub use render::render_document;

use crate::models::{PaletteEntry, RgbColor};

/// Only every Nth named hue becomes a palette color.
pub const HUE_STRIDE: usize = 4;

/// Lightness of the hue swatches.
pub const HUE_LIGHTNESS: f64 = 0.8;

/// Saturation of the hue swatches.
pub const HUE_SATURATION: f64 = 1.0;

/// Step between gray levels on the 0-255 scale.
pub const GRAY_STEP: usize = 32;

/// Builds the palette: hue swatches first, then grays from black upward.
///
/// # Examples
///
/// ```
/// use assetprep::palette::build_palette;
///
/// let palette = build_palette();
/// assert_eq!(palette.len(), 32);
/// assert_eq!(palette[0].name, "Red");
/// assert_eq!(palette[31].name, "Gray8");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn build_palette() -> Vec<PaletteEntry> {
    let hue_count = HUE_NAMES.len() as f64;

    let hues = HUE_NAMES
        .iter()
        .enumerate()
        .step_by(HUE_STRIDE)
        .map(|(index, name)| {
            let hue = index as f64 / hue_count;
            PaletteEntry::new(
                *name,
                RgbColor::from_hls(hue, HUE_LIGHTNESS, HUE_SATURATION),
            )
        });

    let grays = (0..=u8::MAX as usize)
        .step_by(GRAY_STEP)
        .enumerate()
        .map(|(index, level)| {
            let lightness = level as f64 / 255.0;
            PaletteEntry::new(
                format!("Gray{}", index + 1),
                RgbColor::from_hls(0.0, lightness, 0.0),
            )
        });

    hues.chain(grays).collect()
}
