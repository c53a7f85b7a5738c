// Rust guideline compliant 2026-02-06

//! Statistics and query engine over a loaded issue collection.
//!
//! All queries are linear scans over the issues in load order. The
//! collection is never mutated after construction.

use crate::identity::{ids_match, normalize_query_id};
use crate::models::{Issue, IssueField};
use crate::parser::parse_issue_file;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Counts keyed by distinct field value.
pub type Counts = BTreeMap<String, usize>;

/// Priorities counted as high when the caller does not supply any.
pub const DEFAULT_HIGH_PRIORITIES: [&str; 2] = ["P1", "P2"];

/// Label used for a missing OS value in reports.
pub const UNKNOWN_OS_LABEL: &str = "unknown";

/// Optional constraints on known issue fields, combined with AND.
///
/// Values match case-insensitively. Blank values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRequest {
    /// Required priority.
    pub priority: Option<String>,
    /// Required issue type.
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
    /// Required component.
    pub component: Option<String>,
    /// Required OS value.
    pub os: Option<String>,
}

impl FilterRequest {
    /// Builds a request, dropping blank constraints.
    pub fn new(
        priority: Option<String>,
        issue_type: Option<String>,
        component: Option<String>,
        os: Option<String>,
    ) -> Self {
        let keep = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            priority: keep(priority),
            issue_type: keep(issue_type),
            component: keep(component),
            os: keep(os),
        }
    }

    /// Returns true if no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.constraints().next().is_none()
    }

    /// Iterates over the set constraints in a fixed order.
    pub fn constraints(&self) -> impl Iterator<Item = (IssueField, &str)> {
        [
            (IssueField::Priority, self.priority.as_deref()),
            (IssueField::Type, self.issue_type.as_deref()),
            (IssueField::Component, self.component.as_deref()),
            (IssueField::Os, self.os.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
    }

    /// Returns true if the issue satisfies every constraint.
    ///
    /// An issue without a value for a constrained field never matches.
    pub fn matches(&self, issue: &Issue) -> bool {
        self.constraints().all(|(field, wanted)| {
            issue
                .field(field)
                .is_some_and(|value| value.to_lowercase() == wanted.to_lowercase())
        })
    }
}

/// Immutable issue collection with aggregate and lookup queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueStatistics {
    issues: Vec<Issue>,
}

impl IssueStatistics {
    /// Wraps issues in load order.
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Returns the issues in load order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Consumes the collection, returning its issues.
    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// Number of issues.
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if there are no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Counts issues per priority value.
    pub fn priority_stats(&self) -> Counts {
        count_by(&self.issues, |issue| issue.priority.as_str())
    }

    /// Counts issues per component value.
    pub fn component_stats(&self) -> Counts {
        count_by(&self.issues, |issue| issue.component.as_str())
    }

    /// Counts issues per type value.
    pub fn type_stats(&self) -> Counts {
        count_by(&self.issues, |issue| issue.issue_type.as_str())
    }

    /// Counts issues per OS value; missing or blank values are counted
    /// under `unspecified_label`.
    pub fn os_stats(&self, unspecified_label: &str) -> Counts {
        count_by(&self.issues, |issue| {
            issue
                .os
                .as_deref()
                .filter(|os| !os.is_empty())
                .unwrap_or(unspecified_label)
        })
    }

    /// Returns issues matching every constraint, in load order.
    pub fn filter_issues(&self, request: &FilterRequest) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|issue| request.matches(issue))
            .collect()
    }

    /// Finds the first issue with the given id; the `JDK-` prefix is optional.
    pub fn find_by_id(&self, issue_id: &str) -> Option<&Issue> {
        let wanted = normalize_query_id(issue_id);
        self.issues
            .iter()
            .find(|issue| ids_match(&issue.issue_id, &wanted))
    }

    /// Returns issues where the keyword occurs in any of `fields`
    /// (case-insensitive substring match), in load order.
    pub fn search_in_fields(&self, keyword: &str, fields: &[IssueField]) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.contains_keyword(keyword, fields))
            .collect()
    }

    /// Same as [`search_in_fields`](Self::search_in_fields) over title,
    /// description and component.
    pub fn search(&self, keyword: &str) -> Vec<&Issue> {
        self.search_in_fields(keyword, &IssueField::DEFAULT_SEARCH)
    }

    /// Counts issues whose priority is one of `priorities` (exact match).
    pub fn count_high_priority<S: AsRef<str>>(&self, priorities: &[S]) -> usize {
        self.issues
            .iter()
            .filter(|issue| priorities.iter().any(|p| p.as_ref() == issue.priority))
            .count()
    }

    /// Counts issues whose OS mentions Windows.
    pub fn count_windows_related(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| {
                issue
                    .os
                    .as_deref()
                    .is_some_and(|os| os.to_lowercase().contains("windows"))
            })
            .count()
    }

    /// Counts issues whose component or description mentions security.
    pub fn count_security_related(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| {
                issue.component.to_lowercase().contains("security")
                    || issue.description.to_lowercase().contains("security")
            })
            .count()
    }
}

impl From<Vec<Issue>> for IssueStatistics {
    fn from(issues: Vec<Issue>) -> Self {
        Self::new(issues)
    }
}

fn count_by<'a, F>(issues: &'a [Issue], key: F) -> Counts
where
    F: Fn(&'a Issue) -> &'a str,
{
    let mut counts = Counts::new();
    for issue in issues {
        *counts.entry(key(issue).to_string()).or_insert(0) += 1;
    }
    counts
}

/// Loads one issue file.
///
/// # Errors
///
/// Returns an error if the file is missing or unreadable.
pub fn load_and_analyze(path: &Path) -> Result<IssueStatistics> {
    Ok(IssueStatistics::new(parse_issue_file(path)?))
}

/// Loads several issue files into one collection, in argument order.
///
/// # Errors
///
/// Returns the first file error encountered.
pub fn load_multiple_files<P: AsRef<Path>>(paths: &[P]) -> Result<IssueStatistics> {
    let mut issues = Vec::new();
    for path in paths {
        issues.extend(parse_issue_file(path.as_ref())?);
    }
    Ok(IssueStatistics::new(issues))
}
