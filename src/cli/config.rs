//! Configuration management CLI commands.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug, Clone)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug, Clone)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug, Clone)]
pub struct ConfigSetArgs {
    /// Material design icons checkout
    #[arg(long, value_name = "DIR")]
    material_icons: Option<PathBuf>,

    /// Root for generated PNG directories
    #[arg(long, value_name = "DIR")]
    output_root: Option<PathBuf>,

    /// ImageMagick convert executable
    #[arg(long, value_name = "BIN")]
    convert_bin: Option<String>,

    /// ImageMagick mogrify executable
    #[arg(long, value_name = "BIN")]
    mogrify_bin: Option<String>,

    /// Rasterization density in DPI
    #[arg(long, value_name = "DPI")]
    density: Option<u32>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    config_file: Option<String>,
    paths: PathsOutput,
    tools: ToolsOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    material_icons: Option<String>,
    output_root: String,
}

#[derive(Serialize, Debug)]
struct ToolsOutput {
    convert: String,
    mogrify: String,
    density: u32,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.material_icons.is_none()
            && self.output_root.is_none()
            && self.convert_bin.is_none()
            && self.mogrify_bin.is_none()
            && self.density.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(concat!(
                "At least one configuration option must be specified: ",
                "--material-icons, --output-root, --convert-bin, --mogrify-bin, or --density"
            )));
        }

        let mut config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if let Some(path) = &self.material_icons {
            if !path.is_dir() {
                return Err(CliError::validation(format!(
                    "Material design icons directory does not exist: {}",
                    path.display()
                )));
            }
            config.paths.material_icons = Some(path.clone());
        }

        if let Some(path) = &self.output_root {
            config.paths.output_root.clone_from(path);
        }

        if let Some(bin) = &self.convert_bin {
            config.tools.convert.clone_from(bin);
        }

        if let Some(bin) = &self.mogrify_bin {
            config.tools.mogrify.clone_from(bin);
        }

        if let Some(density) = self.density {
            if density == 0 {
                return Err(CliError::validation("Density must be greater than zero"));
            }
            config.tools.density = density;
        }

        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        config_file: Config::config_file_path()
            .ok()
            .map(|p| p.to_string_lossy().to_string()),
        paths: PathsOutput {
            material_icons: config
                .paths
                .material_icons
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            output_root: config.paths.output_root.to_string_lossy().to_string(),
        },
        tools: ToolsOutput {
            convert: config.tools.convert.clone(),
            mogrify: config.tools.mogrify.clone(),
            density: config.tools.density,
        },
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    if let Ok(path) = Config::config_file_path() {
        if Config::exists() {
            println!("Config file: {}", path.display());
        } else {
            println!("Config file: {} (not created, using defaults)", path.display());
        }
        println!();
    }

    println!("Paths:");
    match &config.paths.material_icons {
        Some(dir) => println!("  Material Icons: {}", dir.display()),
        None => println!("  Material Icons: (not configured)"),
    }
    println!("  Output Root: {}", config.paths.output_root.display());
    println!();

    println!("Tools:");
    println!("  convert: {}", config.tools.convert);
    println!("  mogrify: {}", config.tools.mogrify);
    println!("  Density: {}", config.tools.density);
    println!();
}
