//! Colors command for the pattern palette.

use crate::cli::common::{CliError, CliResult};
use crate::models::{PaletteEntry, TextContrast};
use crate::palette::{build_palette, render_document};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Output format for the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorsFormat {
    /// Swatch table, enum body and match arms as HTML
    Html,
    /// Palette entries as a JSON array
    Json,
}

/// Generate the pattern color palette
#[derive(Debug, Clone, Args)]
pub struct ColorsArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = ColorsFormat::Html)]
    pub format: ColorsFormat,

    /// Write to a file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// JSON-serializable palette entry
#[derive(Serialize, Debug)]
struct ColorOutput<'a> {
    name: &'a str,
    r: u8,
    g: u8,
    b: u8,
    hex: String,
    luminance: f64,
    foreground: &'static str,
}

impl<'a> From<&'a PaletteEntry> for ColorOutput<'a> {
    fn from(entry: &'a PaletteEntry) -> Self {
        Self {
            name: &entry.name,
            r: entry.color.r,
            g: entry.color.g,
            b: entry.color.b,
            hex: entry.color.hex_code(),
            luminance: entry.luminance,
            foreground: match entry.contrast {
                TextContrast::White => "white",
                TextContrast::Black => "black",
            },
        }
    }
}

impl ColorsArgs {
    /// Execute the colors command
    pub fn execute(&self) -> CliResult<()> {
        let palette = build_palette();
        debug!("Built palette with {} colors", palette.len());

        let rendered = match self.format {
            ColorsFormat::Html => render_document(&palette),
            ColorsFormat::Json => {
                let entries: Vec<ColorOutput<'_>> = palette.iter().map(ColorOutput::from).collect();
                let mut json = serde_json::to_string_pretty(&entries).map_err(|e| {
                    CliError::io(format!("Failed to serialize palette to JSON: {e}"))
                })?;
                json.push('\n');
                json
            }
        };

        match &self.output {
            Some(path) => {
                std::fs::write(path, rendered).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {e}", path.display()))
                })?;
                eprintln!("✓ Wrote {} colors to {}", palette.len(), path.display());
            }
            None => print!("{rendered}"),
        }

        Ok(())
    }
}
