//! Dependency checking for the icon conversion toolchain.
//!
//! This module detects the external ImageMagick tools that `md-icons` shells
//! out to, and validates the material-design-icons checkout it reads from.
//!
//! # Example
//!
//! ```rust
//! use assetprep::config::ToolConfig;
//! use assetprep::doctor::{DependencyChecker, ToolStatus};
//!
//! let checker = DependencyChecker::new(ToolConfig::default());
//! for status in checker.check_all(None) {
//!     match status.status {
//!         ToolStatus::Available => println!("✓ {}: {}", status.name, status.message),
//!         ToolStatus::Missing => println!("✗ {}: {}", status.name, status.message),
//!         ToolStatus::Unknown => println!("? {}: {}", status.name, status.message),
//!     }
//! }
//! ```
//!
//! # Error Handling
//!
//! Checks never fail outright:
//! - Missing tools return `ToolStatus::Missing`
//! - Command execution errors return `ToolStatus::Unknown` with error details
//! - Unparseable version output returns `ToolStatus::Unknown`

use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use crate::config::ToolConfig;
use crate::constants::APP_BINARY_NAME;

/// Display name of the material-design-icons checkout check.
pub const MATERIAL_ICONS_CHECK: &str = "Material Icons";

const CLONE_NOTE: &str = "Clone the git repository; the release zip has no symbols/ directory.";

/// Status of a single dependency check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Dependency is present and working
    Available,
    /// Dependency is not found or not working
    Missing,
    /// Could not determine status
    Unknown,
}

/// Result of checking a single dependency.
#[derive(Debug, Clone)]
pub struct DependencyStatus {
    /// Name of the dependency (e.g., "convert")
    pub name: String,
    /// Status of the dependency
    pub status: ToolStatus,
    /// Version string if detected (e.g., "6.9.11-60")
    pub version: Option<String>,
    /// Human-readable message about the status
    pub message: String,
}

impl DependencyStatus {
    /// Creates a new dependency status.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        status: ToolStatus,
        version: Option<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            version,
            message: message.into(),
        }
    }

    /// Creates a status for an available dependency.
    #[must_use]
    pub fn available(name: impl Into<String>, version: impl Into<String>) -> Self {
        let version_str = version.into();
        Self::new(
            name,
            ToolStatus::Available,
            Some(version_str.clone()),
            format!("Found version {version_str}"),
        )
    }

    /// Creates a status for a missing dependency.
    #[must_use]
    pub fn missing(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, ToolStatus::Missing, None, message)
    }

    /// Creates a status for an unknown dependency state.
    #[must_use]
    pub fn unknown(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(name, ToolStatus::Unknown, None, message)
    }
}

/// Checker for the icon conversion toolchain.
pub struct DependencyChecker {
    tools: ToolConfig,
}

impl DependencyChecker {
    /// Creates a checker for the configured tool executables.
    #[must_use]
    pub fn new(tools: ToolConfig) -> Self {
        Self { tools }
    }

    /// Checks all dependencies and returns their status.
    pub fn check_all(&self, material_icons: Option<&Path>) -> Vec<DependencyStatus> {
        vec![
            self.check_imagemagick_tool(&self.tools.convert),
            self.check_imagemagick_tool(&self.tools.mogrify),
            self.check_material_icons(material_icons),
        ]
    }

    /// Checks that an ImageMagick tool runs, using `<tool> -version`.
    pub fn check_imagemagick_tool(&self, tool: &str) -> DependencyStatus {
        match Self::run_version_command(tool, &["-version"]) {
            Ok(output) => {
                if let Some(version) = Self::parse_imagemagick_version(&output) {
                    DependencyStatus::available(tool, version)
                } else {
                    DependencyStatus::unknown(
                        tool,
                        format!(
                            "Found but could not parse version: {}",
                            output.lines().next().unwrap_or("")
                        ),
                    )
                }
            }
            Err(e) => {
                if Self::is_command_not_found(&e) {
                    DependencyStatus::missing(tool, "Not found in PATH. Install ImageMagick")
                } else {
                    DependencyStatus::unknown(tool, format!("Error checking: {e:#}"))
                }
            }
        }
    }

    /// Checks that the material-design-icons checkout has `src/` and `symbols/`.
    pub fn check_material_icons(&self, path: Option<&Path>) -> DependencyStatus {
        let Some(dir) = path else {
            return DependencyStatus::unknown(
                MATERIAL_ICONS_CHECK,
                format!(
                    "Path not configured. Pass it to md-icons or run: \
                     {APP_BINARY_NAME} config set --material-icons <DIR>"
                ),
            );
        };

        if !dir.is_dir() {
            return DependencyStatus::missing(
                MATERIAL_ICONS_CHECK,
                format!("Directory does not exist: {}", dir.display()),
            );
        }

        let missing_dirs: Vec<&str> = ["src", "symbols"]
            .into_iter()
            .filter(|name| !dir.join(name).is_dir())
            .collect();

        if missing_dirs.is_empty() {
            DependencyStatus::new(
                MATERIAL_ICONS_CHECK,
                ToolStatus::Available,
                None,
                format!("Valid checkout at {}", dir.display()),
            )
        } else {
            DependencyStatus::missing(
                MATERIAL_ICONS_CHECK,
                format!(
                    "Invalid checkout (missing: {}): {}\n{CLONE_NOTE}",
                    missing_dirs.join(", "),
                    dir.display()
                ),
            )
        }
    }

    /// Runs a command and returns its output, preferring stdout.
    fn run_version_command(command: &str, args: &[&str]) -> Result<String> {
        let output = Command::new(command)
            .args(args)
            .output()
            .context(format!("Failed to execute '{command}'"))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        let result = if stdout.trim().is_empty() {
            stderr.to_string()
        } else {
            stdout.to_string()
        };

        Ok(result)
    }

    /// Parses ImageMagick `-version` output.
    ///
    /// Examples:
    /// - "Version: ImageMagick 6.9.11-60 Q16 x86_64 ..." -> Some("6.9.11-60")
    /// - "Version: ImageMagick 7.1.1-21 Q16-HDRI ..." -> Some("7.1.1-21")
    fn parse_imagemagick_version(output: &str) -> Option<String> {
        let first_line = output.lines().next()?;
        let mut words = first_line.split_whitespace();
        words.find(|word| *word == "ImageMagick")?;

        let version = words.next()?;
        let numeric = version.split('-').next().unwrap_or_default();
        let parts: Vec<&str> = numeric.split('.').collect();

        let looks_like_version = parts.len() >= 2
            && parts
                .iter()
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));

        looks_like_version.then(|| version.to_string())
    }

    /// Checks if an error was caused by a missing executable.
    fn is_command_not_found(error: &anyhow::Error) -> bool {
        error.chain().any(|cause| {
            cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io| io.kind() == ErrorKind::NotFound)
        })
    }
}
