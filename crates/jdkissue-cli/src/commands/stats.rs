// Rust guideline compliant 2026-02-09

//! Implementation of the `jdki stats` command.

use crate::commands::{resolve_files, warn_failures};
use crate::output::OutputFormatter;
use anyhow::Result;
use jdkissue_app::{load_sources, summarize, IssueSummary};
use jdkissue_core::Config;
use serde::Serialize;
use std::path::PathBuf;

/// Summary of one loaded source.
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    /// Source label (file path or merged label).
    pub source: String,
    /// Files the source was loaded from.
    pub files: Vec<PathBuf>,
    /// Counts over the source.
    #[serde(flatten)]
    pub summary: IssueSummary,
}

/// Summarizes each source without printing.
///
/// # Arguments
///
/// * `files` - Issue files; the configured defaults apply when empty
/// * `merge` - Summarize all files as one source
/// * `config` - Loaded configuration
/// * `use_color` - Whether load warnings are colored
///
/// # Errors
///
/// Returns an error if no file was given or none could be loaded.
pub fn run(
    files: &[PathBuf],
    merge: bool,
    config: &Config,
    use_color: bool,
) -> Result<Vec<SourceSummary>> {
    let files = resolve_files(files, config)?;
    let report = load_sources(&files, merge);
    warn_failures(&report.failures, use_color);

    let summaries = report
        .into_sources()?
        .into_iter()
        .map(|source| SourceSummary {
            summary: summarize(
                &source.stats,
                &config.high_priorities,
                &config.unspecified_label,
            ),
            source: source.label,
            files: source.files,
        })
        .collect();
    Ok(summaries)
}

/// Summarizes each source and prints the result.
///
/// # Errors
///
/// Returns an error under the same conditions as [`run`].
pub fn execute(
    files: Vec<PathBuf>,
    merge: bool,
    config: &Config,
    formatter: &dyn OutputFormatter,
    use_color: bool,
) -> Result<()> {
    let summaries = run(&files, merge, config, use_color)?;
    println!("{}", formatter.format_summaries(&summaries));
    Ok(())
}
