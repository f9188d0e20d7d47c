//! Md-icons command for rasterizing Material Design icons.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_BINARY_NAME;
use crate::icons::{check_base_dir, ConvertOptions, IconConverter};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

/// Convert Material Design icons and symbols from SVG to PNG
///
/// BASE_DIR is a git clone of https://github.com/google/material-design-icons
/// (the release zip lacks the symbols/ directory).
#[derive(Debug, Clone, Args)]
pub struct MdIconsArgs {
    /// Material design icons checkout (defaults to the configured path)
    #[arg(value_name = "BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Root for the md-icons/ and md-symbols/ output directories
    #[arg(long, value_name = "DIR")]
    pub out_root: Option<PathBuf>,

    /// ImageMagick convert executable
    #[arg(long, value_name = "BIN")]
    pub convert_bin: Option<String>,

    /// ImageMagick mogrify executable
    #[arg(long, value_name = "BIN")]
    pub mogrify_bin: Option<String>,

    /// Print the commands without running them
    #[arg(long)]
    pub dry_run: bool,
}

impl MdIconsArgs {
    /// Execute the md-icons command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let options = self.resolve_options(config)?;

        println!(
            "Reading material design icons/symbols from base directory {}",
            options.base_dir.display()
        );

        check_base_dir(&options.base_dir).map_err(|e| CliError::io(e.to_string()))?;

        let converter = IconConverter::new(options);

        if self.dry_run {
            for (_, commands) in converter.plan() {
                for command in commands {
                    println!("{command}");
                }
            }
            return Ok(());
        }

        let report = converter.run().map_err(|e| CliError::io(format!("{e:#}")))?;
        info!(
            "Converted {} icons, {} failed",
            report.converted.len(),
            report.failures.len()
        );

        if report.is_success() {
            println!("✓ Converted {} icons", report.converted.len());
            println!("  Output: {}", converter.options().out_root.display());
            Ok(())
        } else {
            let details = report
                .failures
                .iter()
                .map(|failure| format!("  - {failure}"))
                .collect::<Vec<_>>()
                .join("\n");
            Err(CliError::validation(format!(
                "{} of {} icons failed to convert:\n{details}",
                report.failures.len(),
                report.failures.len() + report.converted.len()
            )))
        }
    }

    /// Merges command-line flags over the configuration.
    fn resolve_options(&self, config: Config) -> CliResult<ConvertOptions> {
        let base_dir = self
            .base_dir
            .clone()
            .or(config.paths.material_icons)
            .ok_or_else(|| {
                CliError::validation(format!(
                    "No base directory given. Pass BASE_DIR or run: \
                     {APP_BINARY_NAME} config set --material-icons <DIR>"
                ))
            })?;

        let convert_bin = self.convert_bin.clone().unwrap_or(config.tools.convert);
        let mogrify_bin = self.mogrify_bin.clone().unwrap_or(config.tools.mogrify);
        if convert_bin.trim().is_empty() || mogrify_bin.trim().is_empty() {
            return Err(CliError::validation("Tool executables must not be empty"));
        }

        Ok(ConvertOptions {
            base_dir,
            out_root: self.out_root.clone().unwrap_or(config.paths.output_root),
            convert_bin,
            mogrify_bin,
            density: config.tools.density,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> MdIconsArgs {
        MdIconsArgs {
            base_dir: None,
            out_root: None,
            convert_bin: None,
            mogrify_bin: None,
            dry_run: false,
        }
    }

    #[test]
    fn test_resolve_requires_base_dir() {
        let err = args().resolve_options(Config::new()).unwrap_err();
        assert_eq!(err.exit_code().code(), 1);
    }

    #[test]
    fn test_resolve_uses_config_defaults() {
        let mut config = Config::new();
        config.paths.material_icons = Some(PathBuf::from("/md"));
        config.tools.density = 288;

        let options = args().resolve_options(config).unwrap();
        assert_eq!(options.base_dir, PathBuf::from("/md"));
        assert_eq!(options.out_root, PathBuf::from("res/images"));
        assert_eq!(options.convert_bin, "convert");
        assert_eq!(options.density, 288);
    }

    #[test]
    fn test_resolve_flags_override_config() {
        let mut config = Config::new();
        config.paths.material_icons = Some(PathBuf::from("/configured"));

        let mut cli = args();
        cli.base_dir = Some(PathBuf::from("/given"));
        cli.out_root = Some(PathBuf::from("assets"));
        cli.mogrify_bin = Some("gm-mogrify".to_string());

        let options = cli.resolve_options(config).unwrap();
        assert_eq!(options.base_dir, PathBuf::from("/given"));
        assert_eq!(options.out_root, PathBuf::from("assets"));
        assert_eq!(options.mogrify_bin, "gm-mogrify");
        assert_eq!(options.convert_bin, "convert");
    }

    #[test]
    fn test_resolve_rejects_empty_tool() {
        let mut cli = args();
        cli.base_dir = Some(PathBuf::from("/md"));
        cli.convert_bin = Some(String::new());
        assert!(cli.resolve_options(Config::new()).is_err());
    }
}
