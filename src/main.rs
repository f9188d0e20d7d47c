//! Asset Prep - asset preparation helpers
//!
//! Generates the pattern color palette, proposes sample file names, and
//! rasterizes Material Design icons with ImageMagick.

use assetprep::cli::{
    CliResult, ColorsArgs, ConfigArgs, DoctorArgs, MdIconsArgs, SampleNamesArgs,
};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Asset Prep - asset preparation helpers
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the pattern color palette as HTML or JSON
    Colors(ColorsArgs),
    /// Propose display names for .WAV sample files
    SampleNames(SampleNamesArgs),
    /// Convert Material Design icons and symbols from SVG to PNG
    MdIcons(MdIconsArgs),
    /// Check that ImageMagick and the icon checkout are available
    Doctor(DoctorArgs),
    /// Show or change configuration
    Config(ConfigArgs),
}

impl Commands {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Colors(args) => args.execute(),
            Self::SampleNames(args) => args.execute(),
            Self::MdIcons(args) => args.execute(),
            Self::Doctor(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = cli.command.execute() {
        eprintln!("Error: {}", err.message());
        std::process::exit(err.exit_code().code());
    }
}
