// Rust guideline compliant 2026-02-09

//! Ordered count summaries for console and JSON output.

use jdkissue_core::{Counts, IssueStatistics};
use serde::Serialize;

/// Priority labels in display order.
pub const PRIORITY_ORDER: [&str; 5] = ["P1", "P2", "P3", "P4", "P5"];

/// Number of components shown in summaries.
pub const TOP_COMPONENTS: usize = 10;

/// One value and how many issues carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    /// Field value, or the unspecified label for blanks.
    pub value: String,
    /// Number of issues.
    pub count: usize,
}

/// Display-ready statistics over a set of issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSummary {
    /// Number of issues summarized.
    pub total: usize,
    /// Counts per priority: P1..P5 first, then the rest sorted by value.
    pub by_priority: Vec<CountEntry>,
    /// Counts per type, most frequent first.
    pub by_type: Vec<CountEntry>,
    /// The most frequent components.
    pub by_component: Vec<CountEntry>,
    /// Counts per OS, most frequent first.
    pub by_os: Vec<CountEntry>,
    /// Counts per source, in load order; empty when not applicable.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub by_source: Vec<CountEntry>,
    /// Issues with a high priority.
    pub high_priority: usize,
    /// Issues whose OS mentions Windows.
    pub windows_related: usize,
    /// Issues whose component or description mentions security.
    pub security_related: usize,
}

/// Summarizes a collection.
///
/// Blank priority, type and component values and missing OS values are
/// reported under `unspecified_label`.
pub fn summarize<S: AsRef<str>>(
    stats: &IssueStatistics,
    high_priorities: &[S],
    unspecified_label: &str,
) -> IssueSummary {
    let priorities = relabel_blank(stats.priority_stats(), unspecified_label);
    let types = relabel_blank(stats.type_stats(), unspecified_label);
    let components = relabel_blank(stats.component_stats(), unspecified_label);

    IssueSummary {
        total: stats.len(),
        by_priority: ordered_by_priority(&priorities),
        by_type: ordered_by_count(&types, None),
        by_component: ordered_by_count(&components, Some(TOP_COMPONENTS)),
        by_os: ordered_by_count(&stats.os_stats(unspecified_label), None),
        by_source: Vec::new(),
        high_priority: stats.count_high_priority(high_priorities),
        windows_related: stats.count_windows_related(),
        security_related: stats.count_security_related(),
    }
}

/// Moves the count of the empty value under `label`.
pub fn relabel_blank(mut counts: Counts, label: &str) -> Counts {
    if let Some(blank) = counts.remove("") {
        *counts.entry(label.to_string()).or_insert(0) += blank;
    }
    counts
}

/// Orders counts P1..P5 first, then the remaining values by name.
pub fn ordered_by_priority(counts: &Counts) -> Vec<CountEntry> {
    let known = PRIORITY_ORDER
        .iter()
        .filter_map(|p| counts.get(*p).map(|count| entry(p, *count)));
    let others = counts
        .iter()
        .filter(|(value, _)| !PRIORITY_ORDER.contains(&value.as_str()))
        .map(|(value, count)| entry(value, *count));
    known.chain(others).collect()
}

/// Orders counts by count descending, ties by name; keeps at most `limit`.
pub fn ordered_by_count(counts: &Counts, limit: Option<usize>) -> Vec<CountEntry> {
    let mut entries: Vec<CountEntry> = counts
        .iter()
        .map(|(value, count)| entry(value, *count))
        .collect();
    // Counts iterate by name, so a stable sort keeps ties alphabetical.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    if let Some(limit) = limit {
        entries.truncate(limit);
    }
    entries
}

fn entry(value: &str, count: usize) -> CountEntry {
    CountEntry {
        value: value.to_string(),
        count,
    }
}
