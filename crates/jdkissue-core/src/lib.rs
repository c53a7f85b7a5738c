// Rust guideline compliant 2026-02-06

//! JDK Issue Core Library
//!
//! This crate provides the foundational components for working with JDK
//! bug-tracker issue records:
//! - Data models (Issue, IssueRecord, IssueField)
//! - Flat-file block parser and writer
//! - Statistics and query engine over loaded issues
//! - Exclusion rules for release summaries
//! - Tracker XML payload extraction
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod exclusion;
pub mod identity;
pub mod models;
pub mod parser;
pub mod stats;
pub mod xml;

pub use config::{Config, OutputFormat, RenderStrategy};
pub use error::{Error, Result};
pub use exclusion::{ExclusionPolicy, ExclusionReason};
pub use models::{BlockField, Issue, IssueField, IssueRecord};
pub use parser::{format_block, parse_issue_file, parse_issues, parse_records, write_blocks};
pub use stats::{load_and_analyze, load_multiple_files, Counts, FilterRequest, IssueStatistics};
