// Rust guideline compliant 2026-02-09

//! Implementation of the `jdki report` command.
//!
//! Loads the issue files of one or more releases and writes the interactive
//! HTML dashboard.

use crate::output::OutputFormatter;
use anyhow::Result;
use jdkissue_app::report::{version_file_name, DEFAULT_REPORT_FILE};
use jdkissue_app::{prepare_report_data, AppError, ReportGenerator, ReportOptions};
use jdkissue_core::{load_multiple_files, Config, RenderStrategy};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Inputs of one report run, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ReportArgs {
    /// Release versions, e.g. `21.0.6`.
    pub versions: Vec<String>,
    /// Explicit issue files; derived from the versions when empty.
    pub files: Vec<PathBuf>,
    /// Directory holding the per-version issue files.
    pub data_dir: PathBuf,
    /// Output path; defaults to `jdk_issue_report.html`.
    pub output: Option<PathBuf>,
    /// Title override.
    pub title: Option<String>,
    /// Summary override.
    pub summary: Option<String>,
    /// Rendering strategy name.
    pub strategy: Option<String>,
    /// Template file for the placeholder strategy.
    pub template: Option<PathBuf>,
}

/// What a report run produced.
#[derive(Debug, Clone, Serialize)]
pub struct ReportOutcome {
    /// Written report path.
    pub output: PathBuf,
    /// Release versions covered.
    pub versions: Vec<String>,
    /// Issue files read.
    pub files: Vec<PathBuf>,
    /// Number of issues in the report.
    pub total_issues: usize,
    /// Strategy used to render the page.
    pub strategy: RenderStrategy,
}

/// Issue files for a list of versions inside `data_dir`.
pub fn version_files<S: AsRef<str>>(data_dir: &Path, versions: &[S]) -> Vec<PathBuf> {
    versions
        .iter()
        .map(|version| data_dir.join(version_file_name(version.as_ref())))
        .collect()
}

/// Writes a report without printing a result.
///
/// Flags override the configuration for title, summary, strategy and
/// template. Every issue file must exist.
///
/// # Errors
///
/// Returns an error if:
/// - No version was given
/// - The strategy name is unknown
/// - An issue file or the custom template is missing
/// - Rendering or writing the report fails
pub fn run(args: &ReportArgs, config: &Config) -> Result<ReportOutcome> {
    if args.versions.is_empty() {
        return Err(AppError::InvalidInput("at least one version is required".to_string()).into());
    }

    let strategy = match args.strategy.as_deref() {
        Some(name) => RenderStrategy::parse(name).map_err(AppError::from)?,
        None => config.render_strategy,
    };
    let template = args.template.clone().or_else(|| config.template_path.clone());

    let files = if args.files.is_empty() {
        version_files(&args.data_dir, &args.versions)
    } else {
        args.files.clone()
    };
    tracing::info!(versions = ?args.versions, files = files.len(), "loading report issues");
    let stats = load_multiple_files(&files).map_err(AppError::from)?;

    let options = ReportOptions {
        title: args.title.clone().or_else(|| config.report_title.clone()),
        summary: args.summary.clone().or_else(|| config.report_summary.clone()),
        high_priorities: config.high_priorities.clone(),
    };
    let data = prepare_report_data(&stats, &args.versions, &options)?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILE));
    ReportGenerator::new(strategy, template.as_deref())?.write(&data, &output)?;

    Ok(ReportOutcome {
        output,
        versions: args.versions.clone(),
        files,
        total_issues: data.total_issues,
        strategy,
    })
}

/// Writes a report and prints where it went.
///
/// # Errors
///
/// Returns an error under the same conditions as [`run`].
pub fn execute(args: ReportArgs, config: &Config, formatter: &dyn OutputFormatter) -> Result<()> {
    let outcome = run(&args, config)?;
    println!("{}", formatter.format_report(&outcome));
    Ok(())
}
