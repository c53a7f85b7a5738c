// Rust guideline compliant 2026-02-09

//! Implementation of the `jdki format` command.
//!
//! Turns a release-note id list into a flat issue file using the tracker
//! XML downloaded under the issues directory.

use crate::output::OutputFormatter;
use crate::progress::ProgressReporter;
use anyhow::Result;
use jdkissue_app::{format_issues, FormatOptions, FormatSummary};
use jdkissue_core::Config;
use std::path::{Path, PathBuf};

const PROGRESS_INTERVAL: usize = 10;

/// Runs the formatter without printing the summary.
///
/// # Arguments
///
/// * `input` - Id list, one `JDK-<digits>` per line
/// * `issues_dir` - Tracker XML directory; the configured one when `None`
/// * `apply_excludes` - Whether exclusion rules are applied
/// * `config` - Loaded configuration
/// * `show_progress` - Whether progress lines are written to stderr
///
/// # Errors
///
/// Returns an error if the id list or issues directory is missing, an id is
/// not canonical, an issue XML is missing or invalid, or an output file
/// cannot be written.
pub fn run(
    input: &Path,
    issues_dir: Option<PathBuf>,
    apply_excludes: bool,
    config: &Config,
    show_progress: bool,
) -> Result<FormatSummary> {
    let options = FormatOptions {
        issues_dir: issues_dir.unwrap_or_else(|| config.issues_dir.clone()),
        apply_excludes,
    };
    let reporter = ProgressReporter::new("Formatting", PROGRESS_INTERVAL, show_progress);
    let summary = format_issues(input, &options, |done, total| reporter.report(done, total))?;
    Ok(summary)
}

/// Runs the formatter and prints the summary.
///
/// # Errors
///
/// Returns an error under the same conditions as [`run`].
pub fn execute(
    input: PathBuf,
    issues_dir: Option<PathBuf>,
    apply_excludes: bool,
    config: &Config,
    formatter: &dyn OutputFormatter,
    show_progress: bool,
) -> Result<()> {
    let summary = run(&input, issues_dir, apply_excludes, config, show_progress)?;
    println!("{}", formatter.format_formatter_run(&summary));
    Ok(())
}
