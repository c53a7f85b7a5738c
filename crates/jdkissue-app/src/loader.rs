// Rust guideline compliant 2026-02-09

//! Loading issue files into query sources.
//!
//! A failing file never aborts the batch: it is logged, recorded in the
//! report and the remaining files are still loaded.

use crate::error::{AppError, Result};
use jdkissue_core::{parse_issue_file, Error as CoreError, IssueStatistics};
use std::path::{Path, PathBuf};

/// Label of the combined source produced by a merged load.
pub const MERGED_SOURCE_LABEL: &str = "merged";

/// One queryable collection and where it came from.
#[derive(Debug, Clone)]
pub struct IssueSource {
    /// File path, or [`MERGED_SOURCE_LABEL`] for a merged load.
    pub label: String,
    /// Files that contributed issues to this source.
    pub files: Vec<PathBuf>,
    /// The loaded issues.
    pub stats: IssueStatistics,
}

/// A file that could not be loaded.
#[derive(Debug)]
pub struct LoadFailure {
    /// Path of the file.
    pub path: PathBuf,
    /// Why loading failed.
    pub error: CoreError,
}

/// Result of a batch load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Successfully loaded sources, in argument order.
    pub sources: Vec<IssueSource>,
    /// Files that failed, in argument order.
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    /// Total number of issues across all sources.
    pub fn issue_count(&self) -> usize {
        self.sources.iter().map(|source| source.stats.len()).sum()
    }

    /// Returns the sources, failing if none could be loaded.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when every file failed.
    pub fn into_sources(self) -> Result<Vec<IssueSource>> {
        if self.sources.is_empty() {
            return Err(AppError::InvalidInput(
                "no issue file could be loaded".to_string(),
            ));
        }
        Ok(self.sources)
    }
}

/// Loads issue files.
///
/// Each file becomes its own source unless `merge` is set and more than one
/// file was given, in which case all loaded issues are concatenated in
/// argument order into a single source.
///
/// # Arguments
///
/// * `paths` - Issue files to load
/// * `merge` - Whether to combine the files into one source
///
/// # Returns
///
/// The loaded sources and the per-file failures.
pub fn load_sources<P: AsRef<Path>>(paths: &[P], merge: bool) -> LoadReport {
    let mut report = LoadReport::default();

    for path in paths {
        let path = path.as_ref();
        match parse_issue_file(path) {
            Ok(issues) => {
                tracing::debug!(path = %path.display(), count = issues.len(), "loaded issue file");
                report.sources.push(IssueSource {
                    label: path.display().to_string(),
                    files: vec![path.to_path_buf()],
                    stats: IssueStatistics::new(issues),
                });
            }
            Err(error) => {
                tracing::debug!(path = %path.display(), %error, "failed to load issue file");
                report.failures.push(LoadFailure {
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }

    if merge && paths.len() > 1 && !report.sources.is_empty() {
        let mut files = Vec::new();
        let mut issues = Vec::new();
        for source in report.sources.drain(..) {
            files.extend(source.files);
            issues.extend(source.stats.into_issues());
        }
        report.sources.push(IssueSource {
            label: MERGED_SOURCE_LABEL.to_string(),
            files,
            stats: IssueStatistics::new(issues),
        });
    }

    report
}
