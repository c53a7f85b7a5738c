// Rust guideline compliant 2026-02-06

//! Flat-file issue format.
//!
//! Issues are stored as blocks of `Name: value` lines separated by a line
//! holding exactly `-----`. Lines that do not open a field continue the
//! field above them, which is how multi-line descriptions are stored.

use crate::models::{BlockField, Issue, IssueRecord};
use crate::{Error, Result};
use std::borrow::Cow;
use std::path::Path;

/// Exact separator between blocks.
pub const BLOCK_SEPARATOR: &str = "\n-----\n";

/// Separator used when writing blocks.
const OUTPUT_SEPARATOR: &str = "\n\n-----\n";

/// Splits content into raw field records, one per non-blank block.
///
/// `\r\n` and lone `\r` line endings are read as `\n`.
pub fn parse_records(content: &str) -> Vec<IssueRecord> {
    normalize_line_endings(content)
        .split(BLOCK_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
        .map(parse_block)
        .collect()
}

/// Parses content into issues, dropping blocks without an `[id] title` line.
pub fn parse_issues(content: &str) -> Vec<Issue> {
    parse_records(content)
        .iter()
        .filter_map(|record| {
            let issue = Issue::from_record(record);
            if issue.is_none() {
                tracing::debug!(title = ?record.title, "skipping block without issue id");
            }
            issue
        })
        .collect()
}

/// Reads and parses an issue file.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read as UTF-8.
pub fn parse_issue_file(path: &Path) -> Result<Vec<Issue>> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            kind: "Issue file",
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    Ok(parse_issues(&content))
}

fn normalize_line_endings(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

fn parse_block(block: &str) -> IssueRecord {
    let mut record = IssueRecord::default();
    let mut current: Option<(BlockField, Vec<&str>)> = None;

    for line in block.trim().split('\n') {
        match match_prefix(line) {
            Some((field, rest)) => {
                if let Some((open, lines)) = current.take() {
                    record.set(open, lines.join("\n"));
                }
                current = Some((field, vec![rest]));
            }
            None => {
                if let Some((_, lines)) = current.as_mut() {
                    lines.push(line);
                }
            }
        }
    }

    if let Some((open, lines)) = current {
        record.set(open, lines.join("\n"));
    }

    record
}

fn match_prefix(line: &str) -> Option<(BlockField, &str)> {
    BlockField::ALL
        .iter()
        .find_map(|field| line.strip_prefix(field.prefix()).map(|rest| (*field, rest)))
}

/// Renders a record as one block.
///
/// `Title`, `Priority`, `Type` and `Component` are always written;
/// `Description` and `OS` only when present and non-empty.
pub fn format_block(record: &IssueRecord) -> String {
    let mut lines = Vec::with_capacity(6);
    for field in BlockField::ALL {
        let value = record.get(field).unwrap_or_default();
        let optional = matches!(field, BlockField::Description | BlockField::Os);
        if optional && value.is_empty() {
            continue;
        }
        lines.push(format!("{}{}", field.prefix(), value));
    }
    lines.join("\n")
}

/// Joins rendered blocks into file content with a trailing newline.
pub fn write_blocks<I, S>(blocks: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = blocks
        .into_iter()
        .map(|block| block.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(OUTPUT_SEPARATOR);
    format!("{joined}\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_before_first_field_are_dropped() {
        let records = parse_records("preamble\nTitle: [JDK-1] One\nPriority: P3");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title.as_deref(), Some("[JDK-1] One"));
        assert_eq!(records[0].priority.as_deref(), Some("P3"));
    }

    #[test]
    fn test_continuation_lines_join_open_field() {
        let records = parse_records("Title: [JDK-1] One\nDescription: first\nsecond\n\nthird");
        assert_eq!(records[0].description.as_deref(), Some("first\nsecond\n\nthird"));
    }

    #[test]
    fn test_prefix_inside_text_opens_new_field() {
        let records = parse_records("Title: [JDK-1] One\nDescription: text\nOS: not really\nmore");
        assert_eq!(records[0].description.as_deref(), Some("text"));
        assert_eq!(records[0].os.as_deref(), Some("not really\nmore"));
    }

    #[test]
    fn test_blank_blocks_are_discarded() {
        let records = parse_records("\n-----\n  \n-----\nTitle: [JDK-1] One\n");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_format_block_skips_empty_optional_fields() {
        let record = IssueRecord {
            title: Some("[JDK-1] One".to_string()),
            priority: Some("P2".to_string()),
            issue_type: Some("Bug".to_string()),
            component: Some("core".to_string()),
            description: Some(String::new()),
            os: None,
        };
        assert_eq!(
            format_block(&record),
            "Title: [JDK-1] One\nPriority: P2\nType: Bug\nComponent: core"
        );
    }

    #[test]
    fn test_write_blocks_layout() {
        let content = write_blocks(["Title: [JDK-1] a", "Title: [JDK-2] b"]);
        assert_eq!(content, "Title: [JDK-1] a\n\n-----\nTitle: [JDK-2] b\n");
        assert_eq!(parse_issues(&content).len(), 2);
    }
}
