//! Material Design icon rasterization.
//!
//! The app bundles a handful of Material icons and symbols as PNGs rather
//! than using an icon font. This module knows which ones, where they live in
//! a clone of `google/material-design-icons`, and how to turn each SVG into a
//! metadata-free PNG with ImageMagick.
//!
//! The clone must be a git checkout, not the release zip: the zip lacks the
//! top-level `symbols/` directory.

pub mod converter;

pub use converter::{
    check_base_dir, conversion_commands, ConversionFailure, ConversionReport, ConvertOptions,
    IconConverter, ToolInvocation,
};

use crate::models::IconSpec;

/// Classic icons by group. Browse at https://fonts.google.com/icons?icon.platform=web
pub const ICON_GROUPS: &[(&str, &[&str])] = &[("av", &["play_arrow", "pause", "stop"])];

/// Symbols. Browse at https://fonts.google.com/icons
pub const SYMBOLS: &[&str] = &[
    "add",
    "audio_file",
    "file_open",
    "file_save",
    "menu",
    "new_window",
    "play_arrow",
    "playlist_add_circle",
    "settings",
    "stop",
];

/// Every icon and symbol to generate, icons first.
#[must_use]
pub fn manifest() -> Vec<IconSpec> {
    let icons = ICON_GROUPS.iter().flat_map(|(group, names)| {
        names.iter().map(move |name| IconSpec::icon(*group, *name))
    });
    let symbols = SYMBOLS.iter().map(|name| IconSpec::symbol(*name));

    icons.chain(symbols).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IconKind;
    use std::collections::HashSet;
    use std::path::Path;

    #[test]
    fn test_manifest_contents() {
        let specs = manifest();
        assert_eq!(specs.len(), 13);
        assert_eq!(specs[0], IconSpec::icon("av", "play_arrow"));
        assert_eq!(specs[2], IconSpec::icon("av", "stop"));
        assert_eq!(specs[3], IconSpec::symbol("add"));
        assert_eq!(specs[12], IconSpec::symbol("stop"));
    }

    #[test]
    fn test_each_entry_has_unique_output() {
        let root = Path::new("out");
        let outputs: HashSet<_> = manifest().iter().map(|s| s.output_path(root)).collect();
        assert_eq!(outputs.len(), manifest().len());
    }

    #[test]
    fn test_expected_output_paths() {
        let root = Path::new("res/images");
        let outputs: Vec<String> = manifest()
            .iter()
            .map(|s| s.output_path(root).to_string_lossy().replace('\\', "/"))
            .collect();

        assert!(outputs.contains(&"res/images/md-icons/play_arrow.png".to_string()));
        assert!(outputs.contains(&"res/images/md-icons/pause.png".to_string()));
        assert!(outputs.contains(&"res/images/md-symbols/play_arrow.png".to_string()));
        assert!(outputs.contains(&"res/images/md-symbols/playlist_add_circle.png".to_string()));
    }

    #[test]
    fn test_symbols_follow_icons() {
        let specs = manifest();
        let first_symbol = specs
            .iter()
            .position(|s| s.kind == IconKind::Symbol)
            .unwrap();
        assert!(specs[first_symbol..]
            .iter()
            .all(|s| s.kind == IconKind::Symbol));
    }
}
