//! Sample-names command for proposing sample display names.

use crate::cli::common::{CliError, CliResult};
use crate::samples::{propose_renames, DEFAULT_SUFFIX};
use clap::Args;
use std::path::PathBuf;

/// Propose display names for sample files (prints only, never renames)
#[derive(Debug, Clone, Args)]
pub struct SampleNamesArgs {
    /// Directory to scan (defaults to the current directory)
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Filename suffix to match (case-sensitive)
    #[arg(long, value_name = "SUFFIX", default_value = DEFAULT_SUFFIX)]
    pub suffix: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SampleNamesArgs {
    /// Execute the sample-names command
    pub fn execute(&self) -> CliResult<()> {
        if self.suffix.is_empty() {
            return Err(CliError::validation("Suffix must not be empty"));
        }

        let proposals = propose_renames(&self.dir, &self.suffix)
            .map_err(|e| CliError::io(format!("{e:#}")))?;

        if self.json {
            let json = serde_json::to_string_pretty(&proposals)
                .map_err(|e| CliError::io(format!("Failed to serialize proposals to JSON: {e}")))?;
            println!("{json}");
        } else {
            for proposal in &proposals {
                println!("{}", proposal.to_tuple_line());
            }
        }

        Ok(())
    }
}
