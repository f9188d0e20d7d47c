//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Golden output of `assetprep colors`.
pub const GOLDEN_PALETTE_HTML: &str = include_str!("palette.html");

/// Path to the assetprep binary
pub fn assetprep_bin() -> &'static str {
    env!("CARGO_BIN_EXE_assetprep")
}

/// Creates a Command whose config directory is isolated from the user's.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> Command {
    let mut cmd = Command::new(assetprep_bin());
    cmd.env("ASSETPREP_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// Creates an empty temporary config directory.
pub fn temp_config_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp config dir")
}

/// Creates a directory containing empty files with the given names.
pub fn create_sample_dir(names: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for name in names {
        fs::write(temp_dir.path().join(name), b"RIFF").expect("Failed to write sample file");
    }
    temp_dir
}

/// Creates a minimal material-design-icons checkout layout (src/ and symbols/).
pub fn create_material_icons_checkout() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let base = temp_dir.path().join("material-design-icons");
    fs::create_dir_all(base.join("src").join("av")).expect("Failed to create src/");
    fs::create_dir_all(base.join("symbols").join("web")).expect("Failed to create symbols/");
    (base, temp_dir)
}
