//! CLI command handlers for assetprep.
//!
//! Each subcommand is a single top-to-bottom pass. Handlers return
//! [`CliResult`] so `main` can map failures to exit codes.

pub mod colors;
pub mod common;
pub mod config;
pub mod doctor;
pub mod md_icons;
pub mod sample_names;

// Re-export types used by main.rs and tests
pub use colors::{ColorsArgs, ColorsFormat};
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use doctor::DoctorArgs;
pub use md_icons::MdIconsArgs;
pub use sample_names::SampleNamesArgs;
