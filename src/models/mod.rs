//! Data models shared by the asset tools.
//!
//! Models are plain values built once per invocation and are independent of
//! the command-line layer.

pub mod icon;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use icon::{IconKind, IconSpec};
pub use palette::{PaletteEntry, TextContrast};
pub use rgb::RgbColor;
