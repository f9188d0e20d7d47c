//! Sample filename normalization.
//!
//! Drum-machine sample packs tend to ship files like `KICK 01.WAV` or
//! `HiHat_Open.WAV`. This module proposes stable, human-friendly names
//! (`K-i-c-k-01`, `Hi-hat-open`) and pairs them with the original filenames so
//! they can be pasted into a sample table. Nothing on disk is renamed.

use anyhow::{Context, Result};
use regex::{Captures, Regex};
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Default filename suffix for sample files.
pub const DEFAULT_SUFFIX: &str = ".WAV";

/// A proposed display name for one sample file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameProposal {
    /// Proposed name (e.g., "K-i-c-k-01")
    pub proposed: String,
    /// Filename as found on disk (e.g., "KICK 01.WAV")
    pub original: String,
}

impl RenameProposal {
    /// Formats the pair as a tuple literal line: `("K-i-c-k-01", "KICK 01.WAV"),`
    #[must_use]
    pub fn to_tuple_line(&self) -> String {
        format!("(\"{}\", \"{}\"),", self.proposed, self.original)
    }
}

/// Word breaks: any run of hyphens, periods, whitespace or underscores.
static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-.\s_]+").expect("separator pattern is valid"));

/// ASCII capitals after the first character each start a new word.
static CAPITALS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[A-Z]").expect("capital pattern is valid"));

/// Converts a filename stem into a capitalized spinal-case sample name.
///
/// Every ASCII capital after the first character starts a new word, so
/// all-caps stems come out one letter per word. Runs of separators (`-`,
/// `.`, whitespace, `_`) become a single hyphen, capitals are lowercased,
/// and the first character is uppercased. Applying it to its own output is
/// a no-op.
///
/// # Examples
///
/// ```
/// use assetprep::samples::sample_name;
///
/// assert_eq!(sample_name("KICK 01"), "K-i-c-k-01");
/// assert_eq!(sample_name("BD0025"), "B-d0025");
/// assert_eq!(sample_name("HiHat_Open"), "Hi-hat-open");
/// assert_eq!(sample_name("Kick-01"), "Kick-01");
/// ```
#[must_use]
pub fn sample_name(stem: &str) -> String {
    let mut chars = stem.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut name = single_char(first.to_lowercase()).unwrap_or(first).to_string();
    name.push_str(&CAPITALS.replace_all(chars.as_str(), |caps: &Captures<'_>| {
        format!("-{}", caps[0].to_ascii_lowercase())
    }));

    capitalize_first(&SEPARATORS.replace_all(&name, "-"))
}

/// Returns the only character of a case mapping, if it maps to exactly one.
fn single_char(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => Some(single),
        _ => None,
    }
}

/// Uppercases the first character when it maps to exactly one character.
fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    match single_char(first.to_uppercase()) {
        Some(upper) => std::iter::once(upper).chain(chars).collect(),
        None => name.to_string(),
    }
}

/// Lists files in `dir` ending with `suffix` and proposes a name for each.
///
/// Matching is exact and case-sensitive. Proposals are sorted by original
/// filename so output is stable across platforms.
pub fn propose_renames(dir: &Path, suffix: &str) -> Result<Vec<RenameProposal>> {
    let entries = fs::read_dir(dir)
        .context(format!("Failed to read sample directory: {}", dir.display()))?;

    let mut proposals = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let path = entry.path();
        debug!("Found {}", path.display());

        if !path.is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str().map(str::to_string) else {
            debug!("Skipping non-UTF-8 filename: {}", path.display());
            continue;
        };

        if let Some(stem) = file_name.strip_suffix(suffix) {
            proposals.push(RenameProposal {
                proposed: sample_name(stem),
                original: file_name.clone(),
            });
        }
    }

    proposals.sort_by(|a, b| a.original.cmp(&b.original));
    Ok(proposals)
}
