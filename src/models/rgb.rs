//! RGB color handling with HLS conversion and luminance scoring.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Allow float comparisons in HLS conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use serde::{Deserialize, Serialize};
use std::fmt;

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRDS: f64 = 2.0 / 3.0;

/// Weights of the red, green and blue channels in the luminance estimate.
const LUMINANCE_WEIGHTS: (f64, f64, f64) = (0.299, 0.587, 0.114);

/// RGB color value.
///
/// Represents a color using red, green, and blue channels (0-255 each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates an `RgbColor` from HLS (Hue, Lightness, Saturation) color space.
    ///
    /// # Arguments
    ///
    /// * `h` - Hue as a fraction of a full turn (wrapped into 0.0-1.0)
    /// * `l` - Lightness (0.0-1.0, will be clamped)
    /// * `s` - Saturation (0.0-1.0, will be clamped)
    ///
    /// Channels are converted to bytes by truncating `channel * 255`.
    ///
    /// # Examples
    ///
    /// ```
    /// use assetprep::models::RgbColor;
    ///
    /// let pastel_red = RgbColor::from_hls(0.0, 0.8, 1.0);
    /// assert_eq!(pastel_red, RgbColor::new(255, 153, 153));
    ///
    /// let black = RgbColor::from_hls(0.0, 0.0, 0.0);
    /// assert_eq!(black, RgbColor::new(0, 0, 0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HLS color model uses single-char names
    pub fn from_hls(h: f64, l: f64, s: f64) -> Self {
        let l = l.clamp(0.0, 1.0);
        let s = s.clamp(0.0, 1.0);

        if s == 0.0 {
            return Self::from_unit(l, l, l);
        }

        let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - (l * s) };
        let m1 = 2.0 * l - m2;

        Self::from_unit(
            hue_to_channel(m1, m2, h + ONE_THIRD),
            hue_to_channel(m1, m2, h),
            hue_to_channel(m1, m2, h - ONE_THIRD),
        )
    }

    /// Builds a color from unit-range channels, truncating toward zero.
    fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let to_byte = |c: f64| (c * 255.0).clamp(0.0, 255.0) as u8;
        Self::new(to_byte(r), to_byte(g), to_byte(b))
    }

    /// Perceived brightness estimate on the 0-255 scale.
    ///
    /// ```
    /// use assetprep::models::RgbColor;
    ///
    /// assert!((RgbColor::new(255, 255, 255).luminance() - 255.0).abs() < 1e-9);
    /// assert_eq!(RgbColor::new(0, 0, 0).luminance(), 0.0);
    /// ```
    #[must_use]
    pub fn luminance(&self) -> f64 {
        let (wr, wg, wb) = LUMINANCE_WEIGHTS;
        f64::from(self.r) * wr + f64::from(self.g) * wg + f64::from(self.b) * wb
    }

    /// Lowercase six-digit hex code without a leading `#` (e.g. `ff9999`).
    #[must_use]
    pub fn hex_code(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One channel of the HLS conversion for a hue offset.
fn hue_to_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRDS {
        m1 + (m2 - m1) * (TWO_THIRDS - hue) * 6.0
    } else {
        m1
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hex_code())
    }
}
