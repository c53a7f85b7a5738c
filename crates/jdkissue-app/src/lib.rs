// Rust guideline compliant 2026-02-09

//! Shared application services for the JDK issue tools.
//!
//! This crate provides reusable, non-CLI-specific services: tolerant issue
//! loading, the search pipeline, count summaries, HTML report rendering,
//! the release-note formatter, and standardized response envelopes.

pub mod error;
pub mod formatter;
pub mod loader;
pub mod report;
pub mod response;
pub mod search;
pub mod summary;

pub use error::{AppError, ErrorCode, Result};
pub use formatter::{format_issues, ExcludedIssue, FormatOptions, FormatSummary};
pub use loader::{load_sources, IssueSource, LoadFailure, LoadReport, MERGED_SOURCE_LABEL};
pub use report::{
    prepare_report_data, PlaceholderRenderer, ReportData, ReportGenerator, ReportOptions,
    ReportRenderer, TemplateRenderer,
};
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use search::{
    run_search, GroupKey, HitGroup, SearchHit, SearchOptions, SearchOutcome, SearchQuery, SortKey,
};
pub use summary::{summarize, CountEntry, IssueSummary};
