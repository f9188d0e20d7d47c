//! Doctor command for dependency checking.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::doctor::{DependencyChecker, DoctorFormatter, OutputFormat, ToolStatus};
use clap::Args;

/// Check that ImageMagick and the icon checkout are available
#[derive(Debug, Clone, Args)]
pub struct DoctorArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl DoctorArgs {
    /// Execute the doctor command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        let checker = DependencyChecker::new(config.tools.clone());
        let statuses = checker.check_all(config.paths.material_icons.as_deref());

        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Terminal
        };

        let formatter = DoctorFormatter::with_format(format);
        println!("{}", formatter.format_results(&statuses));

        if statuses.iter().any(|s| s.status == ToolStatus::Missing) {
            Err(CliError::validation("Some dependencies are missing"))
        } else {
            Ok(())
        }
    }
}
