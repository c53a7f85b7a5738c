// Rust guideline compliant 2026-02-09

//! Implementation of the `jdki search` command.
//!
//! Looks issues up by id, keyword or field filters across one or more
//! issue files, then sorts, limits and groups the hits.

use crate::commands::{resolve_files, warn_failures};
use crate::output::{OutputFormatter, SearchView};
use anyhow::Result;
use jdkissue_app::{
    load_sources, run_search, AppError, GroupKey, SearchOptions, SearchOutcome, SearchQuery,
    SortKey,
};
use jdkissue_core::{Config, FilterRequest, IssueField};
use std::path::PathBuf;

/// Inputs of one search run, as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    /// Issue files; falls back to the configured defaults when empty.
    pub files: Vec<PathBuf>,
    /// Issue id lookup.
    pub id: Option<String>,
    /// Keyword search.
    pub keyword: Option<String>,
    /// Fields searched by the keyword.
    pub search_fields: Vec<String>,
    /// Priority filter.
    pub priority: Option<String>,
    /// Type filter.
    pub issue_type: Option<String>,
    /// Component filter.
    pub component: Option<String>,
    /// OS filter.
    pub os: Option<String>,
    /// Show per-issue details.
    pub verbose: bool,
    /// Treat all files as one source.
    pub merge: bool,
    /// Print result statistics.
    pub stats: bool,
    /// Grouping key name.
    pub group_by: Option<String>,
    /// Sort key name.
    pub sort: Option<String>,
    /// Maximum number of hits.
    pub limit: Option<usize>,
}

/// Builds the query from the arguments.
///
/// # Errors
///
/// Returns an error if a search field name is unknown or no criteria were
/// given.
pub fn build_query(args: &SearchArgs) -> jdkissue_app::Result<SearchQuery> {
    let fields = args
        .search_fields
        .iter()
        .map(|name| name.parse::<IssueField>())
        .collect::<jdkissue_core::Result<Vec<_>>>()?;
    let filter = FilterRequest::new(
        args.priority.clone(),
        args.issue_type.clone(),
        args.component.clone(),
        args.os.clone(),
    );
    SearchQuery::from_parts(args.id.clone(), args.keyword.clone(), fields, filter)
}

/// Builds the post-processing options from the arguments and config.
///
/// # Errors
///
/// Returns an error if the sort or group key is unknown or the limit is zero.
pub fn build_options(args: &SearchArgs, config: &Config) -> jdkissue_app::Result<SearchOptions> {
    if args.limit == Some(0) {
        return Err(AppError::InvalidInput("limit must be at least 1".to_string()));
    }
    Ok(SearchOptions {
        sort: args.sort.as_deref().map(SortKey::parse).transpose()?,
        limit: args.limit,
        group_by: args.group_by.as_deref().map(GroupKey::parse).transpose()?,
        high_priorities: config.high_priorities.clone(),
        unspecified_label: config.unspecified_label.clone(),
    })
}

/// Runs a search without printing the result.
///
/// Files that fail to load are reported on stderr and skipped.
///
/// # Errors
///
/// Returns an error if:
/// - No search criteria were given
/// - A field, sort or group name is unknown
/// - No files were given or none could be loaded
pub fn run(args: &SearchArgs, config: &Config, use_color: bool) -> Result<SearchOutcome> {
    let query = build_query(args)?;
    let options = build_options(args, config)?;
    let files = resolve_files(&args.files, config)?;

    let report = load_sources(&files, args.merge);
    warn_failures(&report.failures, use_color);
    let sources = report.into_sources()?;

    Ok(run_search(&sources, &query, &options))
}

/// Runs a search and prints the result.
///
/// # Errors
///
/// Returns an error under the same conditions as [`run`].
pub fn execute(
    args: SearchArgs,
    config: &Config,
    formatter: &dyn OutputFormatter,
    use_color: bool,
) -> Result<()> {
    let outcome = run(&args, config, use_color)?;
    let view = SearchView {
        verbose: args.verbose,
        show_stats: args.stats,
        unspecified_label: config.unspecified_label.clone(),
    };
    println!("{}", formatter.format_search(&outcome, &view));
    Ok(())
}
