// Rust guideline compliant 2026-02-09

//! Release-note formatter: turns an id list plus downloaded tracker XML
//! into a flat issue file.
//!
//! For an input `ids.txt` three files are written next to it:
//! `ids.txt_output.txt` (issue blocks), `ids.txt_skipped.txt` (ids without
//! a downloaded issue directory) and `ids.txt_excluded.txt`
//! (`id\treason\ttitle` per excluded issue).

use crate::error::Result;
use jdkissue_core::identity::{numeric_part, read_id_list};
use jdkissue_core::xml::load_issue_record;
use jdkissue_core::{format_block, write_blocks, Error as CoreError, ExclusionPolicy};
use serde::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Options for a formatter run.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Directory holding one sub-directory per downloaded issue.
    pub issues_dir: PathBuf,
    /// Whether exclusion rules are applied.
    pub apply_excludes: bool,
}

/// An issue removed by the exclusion rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedIssue {
    /// Issue id.
    pub issue_id: String,
    /// Canonical exclusion reason.
    pub reason: String,
    /// Full title line.
    pub title: String,
}

/// What a formatter run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatSummary {
    /// Number of ids read from the input.
    pub requested: usize,
    /// Number of blocks written.
    pub formatted: usize,
    /// Ids without an issue directory.
    pub skipped: Vec<String>,
    /// Excluded issues.
    pub excluded: Vec<ExcludedIssue>,
    /// Path of the block file.
    pub output_path: PathBuf,
    /// Path of the skipped-id file.
    pub skipped_path: PathBuf,
    /// Path of the exclusion file.
    pub excluded_path: PathBuf,
}

/// Output paths derived from an input path.
pub fn output_paths(input: &Path) -> (PathBuf, PathBuf, PathBuf) {
    (
        with_suffix(input, "_output.txt"),
        with_suffix(input, "_skipped.txt"),
        with_suffix(input, "_excluded.txt"),
    )
}

fn with_suffix(input: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Location of the XML payload for an issue id.
pub fn issue_xml_path(issues_dir: &Path, issue_id: &str) -> PathBuf {
    let digits = numeric_part(issue_id).unwrap_or(issue_id);
    issues_dir
        .join(issue_id)
        .join(format!("jdk-{}.xml", digits.to_lowercase()))
}

/// Runs the formatter.
///
/// `progress` is called after each id with the number processed so far and
/// the total.
///
/// # Errors
///
/// Returns an error if:
/// - The id list is missing, malformed or empty
/// - The issues directory does not exist
/// - An issue directory exists but its XML is missing or invalid
/// - An output file cannot be written
pub fn format_issues<F>(
    input: &Path,
    options: &FormatOptions,
    mut progress: F,
) -> Result<FormatSummary>
where
    F: FnMut(usize, usize),
{
    if !options.issues_dir.is_dir() {
        return Err(CoreError::InputNotFound {
            kind: "Issues directory",
            path: options.issues_dir.clone(),
        }
        .into());
    }

    let ids = read_id_list(input)?;
    let policy = if options.apply_excludes {
        Some(ExclusionPolicy::new()?)
    } else {
        None
    };

    let mut blocks = Vec::new();
    let mut skipped = Vec::new();
    let mut excluded = Vec::new();

    for (index, issue_id) in ids.iter().enumerate() {
        if !options.issues_dir.join(issue_id).exists() {
            tracing::info!(issue_id = %issue_id, "issue directory missing, skipped");
            skipped.push(issue_id.clone());
        } else {
            let record = load_issue_record(&issue_xml_path(&options.issues_dir, issue_id))?;
            match policy.as_ref().and_then(|policy| policy.evaluate(&record)) {
                Some(reason) => {
                    tracing::info!(issue_id = %issue_id, %reason, "issue excluded");
                    excluded.push(ExcludedIssue {
                        issue_id: issue_id.clone(),
                        reason: reason.to_string(),
                        title: record.title.clone().unwrap_or_default(),
                    });
                }
                None => blocks.push(format_block(&record)),
            }
        }
        progress(index + 1, ids.len());
    }

    let (output_path, skipped_path, excluded_path) = output_paths(input);
    std::fs::write(&output_path, write_blocks(&blocks))?;
    std::fs::write(&skipped_path, lines_text(skipped.iter().map(String::as_str)))?;
    std::fs::write(
        &excluded_path,
        lines_text(
            excluded
                .iter()
                .map(|e| format!("{}\t{}\t{}", e.issue_id, e.reason, e.title)),
        ),
    )?;
    tracing::info!(
        formatted = blocks.len(),
        skipped = skipped.len(),
        excluded = excluded.len(),
        path = %output_path.display(),
        "formatter finished"
    );

    Ok(FormatSummary {
        requested: ids.len(),
        formatted: blocks.len(),
        skipped,
        excluded,
        output_path,
        skipped_path,
        excluded_path,
    })
}

// One entry per line with a trailing newline; nothing at all when empty.
fn lines_text<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| format!("{}\n", line.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths_append_suffix() {
        let (output, skipped, excluded) = output_paths(Path::new("dir/ids.txt"));
        assert_eq!(output, PathBuf::from("dir/ids.txt_output.txt"));
        assert_eq!(skipped, PathBuf::from("dir/ids.txt_skipped.txt"));
        assert_eq!(excluded, PathBuf::from("dir/ids.txt_excluded.txt"));
    }

    #[test]
    fn test_issue_xml_path() {
        assert_eq!(
            issue_xml_path(Path::new("jdk_issues"), "JDK-8320192"),
            PathBuf::from("jdk_issues/JDK-8320192/jdk-8320192.xml")
        );
    }

    #[test]
    fn test_lines_text() {
        assert_eq!(lines_text(Vec::<String>::new()), "");
        assert_eq!(lines_text(["a", "b"]), "a\nb\n");
    }
}
