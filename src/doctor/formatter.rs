//! Output formatting for dependency check results.
//!
//! Renders check results either as a terminal report with ✓/✗/⚠ markers,
//! versions and platform-specific install hints, or as JSON.

use crate::doctor::checker::MATERIAL_ICONS_CHECK;
use crate::doctor::{DependencyStatus, ToolStatus};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Output format for doctor results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Terminal,
    /// Machine-readable JSON output
    Json,
}

/// Platform-specific information for installation instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS
    MacOs,
    /// Linux
    Linux,
    /// Windows
    Windows,
    /// Unknown platform
    Unknown,
}

impl Platform {
    /// Detects the current platform from OS configuration.
    #[must_use]
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Unknown
        }
    }

    /// Returns the platform name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::MacOs => "macOS",
            Self::Linux => "Linux",
            Self::Windows => "Windows",
            Self::Unknown => "Unknown",
        }
    }
}

/// JSON output structure for doctor results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonOutput {
    /// Overall health status
    pub status: String,
    /// Number of successful checks
    pub passed: usize,
    /// Number of failed checks
    pub failed: usize,
    /// Number of unknown checks
    pub unknown: usize,
    /// Individual dependency results
    pub dependencies: Vec<JsonDependency>,
    /// Platform information
    pub platform: String,
}

/// JSON representation of a single dependency check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonDependency {
    /// Dependency name
    pub name: String,
    /// Status (available, missing, unknown)
    pub status: String,
    /// Version string if detected
    pub version: Option<String>,
    /// Status message
    pub message: String,
    /// Installation instructions if missing
    pub installation_hint: Option<String>,
}

/// Counts of each status in a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Tally {
    passed: usize,
    failed: usize,
    unknown: usize,
}

impl Tally {
    fn of(statuses: &[DependencyStatus]) -> Self {
        let count = |wanted: ToolStatus| statuses.iter().filter(|s| s.status == wanted).count();
        Self {
            passed: count(ToolStatus::Available),
            failed: count(ToolStatus::Missing),
            unknown: count(ToolStatus::Unknown),
        }
    }
}

/// Formatter for dependency check results.
pub struct DoctorFormatter {
    format: OutputFormat,
    platform: Platform,
}

impl DoctorFormatter {
    /// Creates a new formatter with terminal output and auto-detected platform.
    #[must_use]
    pub fn new() -> Self {
        Self::with_format(OutputFormat::Terminal)
    }

    /// Creates a new formatter with specified output format.
    #[must_use]
    pub fn with_format(format: OutputFormat) -> Self {
        Self {
            format,
            platform: Platform::detect(),
        }
    }

    /// Creates a new formatter with specified platform (for testing).
    #[must_use]
    pub fn with_platform(platform: Platform) -> Self {
        Self {
            format: OutputFormat::Terminal,
            platform,
        }
    }

    /// Formats dependency check results into a human-readable or JSON string.
    pub fn format_results(&self, statuses: &[DependencyStatus]) -> String {
        match self.format {
            OutputFormat::Terminal => self.format_terminal(statuses),
            OutputFormat::Json => self.format_json(statuses),
        }
    }

    fn format_terminal(&self, statuses: &[DependencyStatus]) -> String {
        let mut output = String::new();
        let tally = Tally::of(statuses);

        output.push_str("Asset Toolchain Status\n");
        output.push_str("══════════════════════\n\n");

        for status in statuses {
            let (symbol, status_text) = match status.status {
                ToolStatus::Available => ("✓", "OK"),
                ToolStatus::Missing => ("✗", "MISSING"),
                ToolStatus::Unknown => ("⚠", "UNKNOWN"),
            };

            // Format: ✓ convert ............. OK (v6.9.11-60)
            let name_width: usize = 20;
            let dots = ".".repeat(name_width.saturating_sub(status.name.len()));
            let _ = write!(output, "{symbol} {}{dots} {status_text}", status.name);
            if let Some(version) = &status.version {
                let _ = write!(output, " (v{version})");
            }
            output.push('\n');

            if status.status == ToolStatus::Missing {
                let _ = writeln!(output, "    Install: {}", self.installation_hint(&status.name));
            }

            if status.status == ToolStatus::Available {
                output.push('\n');
            } else {
                for line in status.message.lines() {
                    let _ = writeln!(output, "    {line}");
                }
                output.push('\n');
            }
        }

        output.push_str("──────────────────────\n");
        let _ = write!(output, "Summary: {} passed", tally.passed);
        if tally.failed > 0 {
            let _ = write!(output, ", {} failed", tally.failed);
        }
        if tally.unknown > 0 {
            let _ = write!(output, ", {} unknown", tally.unknown);
        }
        output.push('\n');

        if tally.failed == 0 && tally.unknown == 0 {
            output.push_str("\n✓ All dependencies are ready!\n");
        } else if tally.failed > 0 {
            output.push_str("\n✗ Missing required dependencies\n");
            output.push_str("  Install missing tools and run 'doctor' again.\n");
        } else {
            output.push_str("\n⚠ Some checks could not be completed\n");
            output.push_str("  Review warnings above and verify your setup.\n");
        }

        output
    }

    fn format_json(&self, statuses: &[DependencyStatus]) -> String {
        let tally = Tally::of(statuses);

        let overall_status = if tally.failed == 0 && tally.unknown == 0 {
            "ready"
        } else if tally.failed > 0 {
            "missing_dependencies"
        } else {
            "warnings"
        };

        let dependencies = statuses
            .iter()
            .map(|s| JsonDependency {
                name: s.name.clone(),
                status: match s.status {
                    ToolStatus::Available => "available",
                    ToolStatus::Missing => "missing",
                    ToolStatus::Unknown => "unknown",
                }
                .to_string(),
                version: s.version.clone(),
                message: s.message.clone(),
                installation_hint: (s.status == ToolStatus::Missing)
                    .then(|| self.installation_hint(&s.name)),
            })
            .collect();

        let json_output = JsonOutput {
            status: overall_status.to_string(),
            passed: tally.passed,
            failed: tally.failed,
            unknown: tally.unknown,
            dependencies,
            platform: self.platform.name().to_string(),
        };

        serde_json::to_string_pretty(&json_output).unwrap_or_else(|_| {
            r#"{"status":"error","message":"Failed to serialize JSON output"}"#.to_string()
        })
    }

    /// Installation hint for a missing dependency.
    fn installation_hint(&self, name: &str) -> String {
        if name == MATERIAL_ICONS_CHECK {
            return "git clone https://github.com/google/material-design-icons.git".to_string();
        }

        match self.platform {
            Platform::MacOs => "brew install imagemagick".to_string(),
            Platform::Linux => concat!(
                "sudo apt-get install imagemagick  (Debian/Ubuntu)\n",
                "             or: sudo pacman -S imagemagick  (Arch)"
            )
            .to_string(),
            Platform::Windows => "winget install ImageMagick.ImageMagick".to_string(),
            Platform::Unknown => "Install ImageMagick from https://imagemagick.org".to_string(),
        }
    }
}

impl Default for DoctorFormatter {
    fn default() -> Self {
        Self::new()
    }
}
