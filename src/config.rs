//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::{APP_DATA_DIR, CONFIG_DIR_ENV};

/// Default root for generated PNG directories, relative to the working directory.
pub const DEFAULT_OUTPUT_ROOT: &str = "res/images";

/// Default ImageMagick rasterization density.
pub const DEFAULT_DENSITY: u32 = 576;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Clone of `google/material-design-icons` used when `md-icons` gets no base directory
    #[serde(default)]
    pub material_icons: Option<PathBuf>,
    /// Root that receives `md-icons/` and `md-symbols/`
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,
}

fn default_output_root() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_ROOT)
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            material_icons: None,
            output_root: default_output_root(),
        }
    }
}

/// External tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// ImageMagick `convert` executable
    #[serde(default = "default_convert")]
    pub convert: String,
    /// ImageMagick `mogrify` executable
    #[serde(default = "default_mogrify")]
    pub mogrify: String,
    /// Rasterization density in DPI
    #[serde(default = "default_density")]
    pub density: u32,
}

fn default_convert() -> String {
    "convert".to_string()
}

fn default_mogrify() -> String {
    "mogrify".to_string()
}

const fn default_density() -> u32 {
    DEFAULT_DENSITY
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            convert: default_convert(),
            mogrify: default_mogrify(),
            density: default_density(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/assetprep/config.toml`
/// - macOS: `~/Library/Application Support/assetprep/config.toml`
/// - Windows: `%APPDATA%\assetprep\config.toml`
///
/// The directory can be overridden with the `ASSETPREP_CONFIG_DIR` environment variable.
///
/// # Validation
///
/// - tool names must not be empty
/// - `density` must be greater than zero
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// External tools
    #[serde(default)]
    pub tools: ToolConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the config directory path, honouring `ASSETPREP_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DATA_DIR);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(&config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        Self::from_toml(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        // Ensure config directory exists
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let config_path = Self::config_file_path()?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, &config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// `material_icons` is not required to exist: a checkout that moved is
    /// reported by `doctor` and `md-icons` rather than making the whole file
    /// unreadable.
    pub fn validate(&self) -> Result<()> {
        if self.tools.convert.trim().is_empty() {
            anyhow::bail!("tools.convert must not be empty");
        }
        if self.tools.mogrify.trim().is_empty() {
            anyhow::bail!("tools.mogrify must not be empty");
        }
        if self.tools.density == 0 {
            anyhow::bail!("tools.density must be greater than zero");
        }

        Ok(())
    }
}
