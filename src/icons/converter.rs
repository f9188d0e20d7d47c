//! Runs ImageMagick over the icon manifest.
//!
//! Each entry is two synchronous tool runs: `convert` rasterizes the SVG at
//! a high density with a transparent background and inverted colors, then
//! `mogrify -strip` removes any remaining metadata so regenerated PNGs are
//! byte-stable.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

use crate::models::icon::{ICONS_SUBDIR, SYMBOLS_SUBDIR};
use crate::models::IconSpec;

/// Settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Root of the material-design-icons checkout
    pub base_dir: PathBuf,
    /// Directory that receives `md-icons/` and `md-symbols/`
    pub out_root: PathBuf,
    /// ImageMagick `convert` executable
    pub convert_bin: String,
    /// ImageMagick `mogrify` executable
    pub mogrify_bin: String,
    /// Rasterization density in DPI
    pub density: u32,
}

/// A single external tool command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    /// Executable name or path
    pub program: String,
    /// Arguments, in order
    pub args: Vec<OsString>,
}

impl ToolInvocation {
    fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
        }
    }

    fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Builds a `Command` ready to spawn.
    #[must_use]
    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }

    /// Runs the command to completion, inheriting stdio.
    ///
    /// Returns the exit code, or `None` when the process was killed by a
    /// signal. Fails only when the process cannot be started.
    pub fn run(&self) -> Result<Option<i32>> {
        debug!("Running: {self}");
        let status = self
            .to_command()
            .status()
            .context(format!("Failed to execute '{}'", self.program))?;

        Ok(status.code())
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Returns the `convert` and `mogrify` command lines for one entry.
///
/// # Examples
///
/// ```
/// use assetprep::icons::{conversion_commands, ConvertOptions};
/// use assetprep::models::IconSpec;
/// use std::path::PathBuf;
///
/// let options = ConvertOptions {
///     base_dir: PathBuf::from("/md"),
///     out_root: PathBuf::from("out"),
///     convert_bin: "convert".to_string(),
///     mogrify_bin: "mogrify".to_string(),
///     density: 576,
/// };
/// let [convert, strip] = conversion_commands(&IconSpec::symbol("menu"), &options);
/// assert_eq!(convert.program, "convert");
/// let output = PathBuf::from("out/md-symbols/menu.png");
/// assert_eq!(strip.to_string(), format!("mogrify -strip {}", output.display()));
/// ```
#[must_use]
pub fn conversion_commands(spec: &IconSpec, options: &ConvertOptions) -> [ToolInvocation; 2] {
    let source = spec.source_path(&options.base_dir);
    let output = spec.output_path(&options.out_root);

    let convert = ToolInvocation::new(&options.convert_bin)
        .arg(source)
        .arg("-density")
        .arg(options.density.to_string())
        .arg("-background")
        .arg("none")
        .arg("-negate")
        .arg("-define")
        .arg("png:exclude-chunks=date,time")
        .arg(output.clone());

    let strip = ToolInvocation::new(&options.mogrify_bin)
        .arg("-strip")
        .arg(output);

    [convert, strip]
}

/// An entry whose conversion did not complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionFailure {
    /// Entry that failed
    pub spec: IconSpec,
    /// Command line that exited unsuccessfully
    pub command: String,
    /// Exit code, `None` if terminated by a signal
    pub exit_code: Option<i32>,
}

impl fmt::Display for ConversionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.exit_code {
            Some(code) => write!(f, "{}: `{}` exited with {code}", self.spec, self.command),
            None => write!(f, "{}: `{}` was terminated", self.spec, self.command),
        }
    }
}

/// Outcome of a conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// PNGs written and stripped
    pub converted: Vec<PathBuf>,
    /// Entries whose tools exited unsuccessfully
    pub failures: Vec<ConversionFailure>,
}

impl ConversionReport {
    /// True when every entry converted.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Converts a list of icon entries with ImageMagick.
pub struct IconConverter {
    options: ConvertOptions,
    specs: Vec<IconSpec>,
}

impl IconConverter {
    /// Creates a converter for the built-in manifest.
    #[must_use]
    pub fn new(options: ConvertOptions) -> Self {
        Self::with_specs(options, super::manifest())
    }

    /// Creates a converter for an explicit list of entries.
    #[must_use]
    pub fn with_specs(options: ConvertOptions, specs: Vec<IconSpec>) -> Self {
        Self { options, specs }
    }

    /// Options this converter runs with.
    #[must_use]
    pub const fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Command lines for every entry, in run order.
    #[must_use]
    pub fn plan(&self) -> Vec<(IconSpec, [ToolInvocation; 2])> {
        self.specs
            .iter()
            .map(|spec| (spec.clone(), conversion_commands(spec, &self.options)))
            .collect()
    }

    /// Creates the `md-icons/` and `md-symbols/` output directories.
    pub fn prepare_output_dirs(&self) -> Result<()> {
        for subdir in [ICONS_SUBDIR, SYMBOLS_SUBDIR] {
            let dir = self.options.out_root.join(subdir);
            fs::create_dir_all(&dir)
                .context(format!("Failed to create output directory: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Converts every entry in order.
    ///
    /// A tool that exits unsuccessfully is recorded in the report and the
    /// run moves on to the next entry; the strip step is skipped for an
    /// entry whose conversion failed. A tool that cannot be started at all
    /// aborts the run.
    pub fn run(&self) -> Result<ConversionReport> {
        self.prepare_output_dirs()?;

        let mut report = ConversionReport::default();
        for (spec, [convert, strip]) in self.plan() {
            info!("Converting {spec}");

            if let Some(failure) = Self::run_step(&spec, &convert)? {
                report.failures.push(failure);
                continue;
            }
            if let Some(failure) = Self::run_step(&spec, &strip)? {
                report.failures.push(failure);
                continue;
            }

            report
                .converted
                .push(spec.output_path(&self.options.out_root));
        }

        Ok(report)
    }

    fn run_step(spec: &IconSpec, invocation: &ToolInvocation) -> Result<Option<ConversionFailure>> {
        let exit_code = invocation.run()?;
        if exit_code == Some(0) {
            return Ok(None);
        }

        let failure = ConversionFailure {
            spec: spec.clone(),
            command: invocation.to_string(),
            exit_code,
        };
        warn!("{failure}");
        Ok(Some(failure))
    }
}

/// Checks that a base directory looks like a material-design-icons clone.
pub fn check_base_dir(base_dir: &Path) -> Result<()> {
    if !base_dir.is_dir() {
        anyhow::bail!(
            "Material design icons directory not found: {}",
            base_dir.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options(base: &Path, out: &Path) -> ConvertOptions {
        ConvertOptions {
            base_dir: base.to_path_buf(),
            out_root: out.to_path_buf(),
            convert_bin: "convert".to_string(),
            mogrify_bin: "mogrify".to_string(),
            density: 576,
        }
    }

    #[test]
    fn test_convert_arguments_for_icon() {
        let opts = options(Path::new("/md"), Path::new("res/images"));
        let [convert, strip] = conversion_commands(&IconSpec::icon("av", "pause"), &opts);

        let args: Vec<String> = convert
            .args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();
        assert_eq!(convert.program, "convert");
        assert_eq!(
            PathBuf::from(&args[0]),
            PathBuf::from("/md/src/av/pause/materialicons/24px.svg")
        );
        assert_eq!(
            &args[1..8],
            &[
                "-density",
                "576",
                "-background",
                "none",
                "-negate",
                "-define",
                "png:exclude-chunks=date,time"
            ]
        );
        assert_eq!(PathBuf::from(&args[8]), PathBuf::from("res/images/md-icons/pause.png"));

        assert_eq!(strip.program, "mogrify");
        assert_eq!(strip.args[0], OsString::from("-strip"));
        assert_eq!(PathBuf::from(&strip.args[1]), PathBuf::from("res/images/md-icons/pause.png"));
    }

    #[test]
    fn test_custom_tools_and_density() {
        let mut opts = options(Path::new("/md"), Path::new("out"));
        opts.convert_bin = "magick-convert".to_string();
        opts.mogrify_bin = "magick-mogrify".to_string();
        opts.density = 288;

        let [convert, strip] = conversion_commands(&IconSpec::symbol("add"), &opts);
        assert_eq!(convert.program, "magick-convert");
        assert_eq!(convert.args[2], OsString::from("288"));
        assert_eq!(strip.program, "magick-mogrify");
    }

    #[test]
    fn test_plan_covers_manifest() {
        let converter = IconConverter::new(options(Path::new("/md"), Path::new("out")));
        let plan = converter.plan();
        assert_eq!(plan.len(), super::super::manifest().len());
        assert_eq!(plan[0].0, IconSpec::icon("av", "play_arrow"));
    }

    #[test]
    fn test_prepare_output_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("res").join("images");
        let converter = IconConverter::new(options(temp_dir.path(), &out));

        converter.prepare_output_dirs().unwrap();
        assert!(out.join("md-icons").is_dir());
        assert!(out.join("md-symbols").is_dir());

        // Existing directories are fine
        converter.prepare_output_dirs().unwrap();
    }

    #[test]
    fn test_missing_tool_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut opts = options(temp_dir.path(), temp_dir.path());
        opts.convert_bin = "assetprep-no-such-convert-tool".to_string();

        let converter = IconConverter::with_specs(opts, vec![IconSpec::symbol("add")]);
        let err = converter.run().unwrap_err();
        assert!(err.to_string().contains("assetprep-no-such-convert-tool"));
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_tool_is_recorded() {
        let temp_dir = TempDir::new().unwrap();
        let mut opts = options(temp_dir.path(), temp_dir.path());
        opts.convert_bin = "false".to_string();
        opts.mogrify_bin = "true".to_string();

        let specs = vec![IconSpec::symbol("add"), IconSpec::symbol("menu")];
        let report = IconConverter::with_specs(opts, specs).run().unwrap();

        assert!(!report.is_success());
        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].exit_code, Some(1));
        assert!(report.failures[0].command.starts_with("false "));
        assert!(report.converted.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_tools() {
        let temp_dir = TempDir::new().unwrap();
        let mut opts = options(temp_dir.path(), temp_dir.path());
        opts.convert_bin = "true".to_string();
        opts.mogrify_bin = "true".to_string();

        let report = IconConverter::new(opts).run().unwrap();
        assert!(report.is_success());
        assert_eq!(report.converted.len(), 13);
        assert_eq!(report.converted[0], temp_dir.path().join("md-icons").join("play_arrow.png"));
    }

    #[test]
    fn test_check_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(check_base_dir(temp_dir.path()).is_ok());
        assert!(check_base_dir(&temp_dir.path().join("missing")).is_err());
    }
}
