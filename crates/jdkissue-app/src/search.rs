// Rust guideline compliant 2026-02-09

//! Search pipeline over loaded sources.
//!
//! A run executes exactly one query against every source, then computes
//! result statistics, sorts, limits and optionally groups the hits.

use crate::error::{AppError, Result};
use crate::loader::IssueSource;
use crate::summary::{summarize, CountEntry, IssueSummary, PRIORITY_ORDER};
use jdkissue_core::{FilterRequest, Issue, IssueField, IssueStatistics};
use serde::Serialize;
use std::cmp::Ordering;
use std::path::Path;

/// Characters of description shown before a keyword match.
pub const SNIPPET_BEFORE: usize = 60;
/// Characters of description shown after the start of a keyword match,
/// in addition to the keyword itself.
pub const SNIPPET_AFTER: usize = 80;
/// Characters of description in a filter-mode preview.
pub const PREVIEW_CHARS: usize = 200;
/// Characters of description in an id-mode detail view.
pub const DETAIL_CHARS: usize = 500;

/// What to look for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SearchQuery {
    /// Lookup by issue id; the `JDK-` prefix is optional.
    ById {
        /// The requested id.
        id: String,
    },
    /// Case-insensitive substring search.
    Keyword {
        /// The keyword.
        keyword: String,
        /// Fields searched.
        fields: Vec<IssueField>,
    },
    /// AND filter over known fields.
    Filter(FilterRequest),
}

impl SearchQuery {
    /// Picks the query from command inputs.
    ///
    /// An id wins over a keyword, which wins over filters. Blank values count
    /// as absent.
    ///
    /// # Errors
    ///
    /// Returns `NoQuery` when nothing was given.
    pub fn from_parts(
        id: Option<String>,
        keyword: Option<String>,
        fields: Vec<IssueField>,
        filter: FilterRequest,
    ) -> Result<Self> {
        if let Some(id) = id.filter(|v| !v.trim().is_empty()) {
            return Ok(SearchQuery::ById {
                id: id.trim().to_string(),
            });
        }
        if let Some(keyword) = keyword.filter(|v| !v.is_empty()) {
            let fields = if fields.is_empty() {
                IssueField::DEFAULT_SEARCH.to_vec()
            } else {
                fields
            };
            return Ok(SearchQuery::Keyword { keyword, fields });
        }
        if !filter.is_empty() {
            return Ok(SearchQuery::Filter(filter));
        }
        Err(AppError::NoQuery)
    }

    fn run<'a>(&self, stats: &'a IssueStatistics) -> Vec<&'a Issue> {
        match self {
            SearchQuery::ById { id } => stats.find_by_id(id).into_iter().collect(),
            SearchQuery::Keyword { keyword, fields } => stats.search_in_fields(keyword, fields),
            SearchQuery::Filter(request) => stats.filter_issues(request),
        }
    }
}

/// Sort keys for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// P1..P5, then any other value.
    Priority,
    /// Issue type.
    Type,
    /// Component.
    Component,
    /// Operating system.
    Os,
}

impl SortKey {
    /// Parses a sort key name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unknown names.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "priority" => Ok(SortKey::Priority),
            "type" => Ok(SortKey::Type),
            "component" => Ok(SortKey::Component),
            "os" => Ok(SortKey::Os),
            _ => Err(AppError::InvalidInput(format!("Invalid sort key: {}", value))),
        }
    }
}

/// Grouping keys for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKey {
    /// Group by priority.
    Priority,
    /// Group by type.
    Type,
    /// Group by component.
    Component,
    /// Group by OS.
    Os,
    /// Group by source file name.
    File,
}

impl GroupKey {
    /// Parses a group key name.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for unknown names.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "priority" => Ok(GroupKey::Priority),
            "type" => Ok(GroupKey::Type),
            "component" => Ok(GroupKey::Component),
            "os" => Ok(GroupKey::Os),
            "file" => Ok(GroupKey::File),
            _ => Err(AppError::InvalidInput(format!("Invalid group key: {}", value))),
        }
    }

    /// Display name, capitalized.
    pub fn title(self) -> &'static str {
        match self {
            GroupKey::Priority => "Priority",
            GroupKey::Type => "Type",
            GroupKey::Component => "Component",
            GroupKey::Os => "OS",
            GroupKey::File => "File",
        }
    }
}

/// Post-processing options.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Sort key; results keep source order when absent.
    pub sort: Option<SortKey>,
    /// Maximum number of hits kept.
    pub limit: Option<usize>,
    /// Grouping key.
    pub group_by: Option<GroupKey>,
    /// Priorities counted as high in the result statistics.
    pub high_priorities: Vec<String>,
    /// Label for blank values.
    pub unspecified_label: String,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            sort: None,
            limit: None,
            group_by: None,
            high_priorities: vec!["P1".to_string(), "P2".to_string()],
            unspecified_label: "not specified".to_string(),
        }
    }
}

/// One matching issue and the source it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    /// Source label (file path or merged label).
    pub source: String,
    /// The matching issue.
    #[serde(flatten)]
    pub issue: Issue,
}

/// Hits sharing one group value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HitGroup {
    /// Group value, or the unspecified label.
    pub key: String,
    /// Hits in result order.
    pub hits: Vec<SearchHit>,
}

/// Everything a search run produced.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    /// The executed query.
    pub query: SearchQuery,
    /// Number of hits before the limit was applied.
    pub total: usize,
    /// Statistics over all hits.
    pub stats: IssueSummary,
    /// Hits after sorting and limiting.
    pub hits: Vec<SearchHit>,
    /// Grouping key, when grouping was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_by: Option<GroupKey>,
    /// Hits grouped by the requested key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<HitGroup>>,
}

impl SearchOutcome {
    /// Hits belonging to one source, in result order.
    pub fn hits_for<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a SearchHit> {
        self.hits.iter().filter(move |hit| hit.source == source)
    }
}

/// Runs a query against every source.
pub fn run_search(
    sources: &[IssueSource],
    query: &SearchQuery,
    options: &SearchOptions,
) -> SearchOutcome {
    let mut hits: Vec<SearchHit> = sources
        .iter()
        .flat_map(|source| {
            query.run(&source.stats).into_iter().map(move |issue| SearchHit {
                source: source.label.clone(),
                issue: issue.clone(),
            })
        })
        .collect();
    tracing::debug!(?query, hits = hits.len(), "search executed");

    let stats = result_summary(sources, &hits, options);
    let total = hits.len();

    if let Some(key) = options.sort {
        sort_hits(&mut hits, key, &options.unspecified_label);
    }
    if let Some(limit) = options.limit {
        hits.truncate(limit);
    }
    let groups = options
        .group_by
        .map(|key| group_hits(&hits, key, &options.unspecified_label));

    SearchOutcome {
        query: query.clone(),
        total,
        stats,
        hits,
        group_by: options.group_by,
        groups,
    }
}

fn result_summary(
    sources: &[IssueSource],
    hits: &[SearchHit],
    options: &SearchOptions,
) -> IssueSummary {
    let matched = IssueStatistics::new(hits.iter().map(|hit| hit.issue.clone()).collect());
    let mut summary = summarize(&matched, &options.high_priorities, &options.unspecified_label);
    summary.by_source = sources
        .iter()
        .map(|source| CountEntry {
            value: source.label.clone(),
            count: hits.iter().filter(|hit| hit.source == source.label).count(),
        })
        .collect();
    summary
}

/// Rank of a priority label; unknown labels sort last.
pub fn priority_rank(priority: &str) -> usize {
    PRIORITY_ORDER
        .iter()
        .position(|p| *p == priority)
        .unwrap_or(PRIORITY_ORDER.len())
}

/// Sorts hits in place; equal keys keep their order.
pub fn sort_hits(hits: &mut [SearchHit], key: SortKey, unspecified_label: &str) {
    match key {
        SortKey::Priority => {
            hits.sort_by_key(|hit| priority_rank(&hit.issue.priority));
        }
        SortKey::Type => hits.sort_by(|a, b| {
            compare_labels(&a.issue.issue_type, &b.issue.issue_type, unspecified_label)
        }),
        SortKey::Component => hits.sort_by(|a, b| {
            compare_labels(&a.issue.component, &b.issue.component, unspecified_label)
        }),
        SortKey::Os => hits.sort_by(|a, b| {
            compare_labels(
                a.issue.os.as_deref().unwrap_or_default(),
                b.issue.os.as_deref().unwrap_or_default(),
                unspecified_label,
            )
        }),
    }
}

fn compare_labels(a: &str, b: &str, unspecified_label: &str) -> Ordering {
    label_or(a, unspecified_label).cmp(label_or(b, unspecified_label))
}

fn label_or<'a>(value: &'a str, unspecified_label: &'a str) -> &'a str {
    if value.is_empty() {
        unspecified_label
    } else {
        value
    }
}

/// Groups hits by a key.
///
/// Priority groups come in P1..P5 order, then the unspecified label, then
/// any other value by name. Other keys order groups by size, largest first;
/// equal sizes keep first-seen order.
pub fn group_hits(hits: &[SearchHit], key: GroupKey, unspecified_label: &str) -> Vec<HitGroup> {
    let mut groups: Vec<HitGroup> = Vec::new();
    for hit in hits {
        let value = group_value(hit, key, unspecified_label);
        match groups.iter_mut().find(|group| group.key == value) {
            Some(group) => group.hits.push(hit.clone()),
            None => groups.push(HitGroup {
                key: value,
                hits: vec![hit.clone()],
            }),
        }
    }

    match key {
        GroupKey::Priority => groups.sort_by(|a, b| {
            let rank = |group: &HitGroup| match PRIORITY_ORDER.iter().position(|p| *p == group.key) {
                Some(index) => (index, String::new()),
                None if group.key == unspecified_label => (PRIORITY_ORDER.len(), String::new()),
                None => (PRIORITY_ORDER.len() + 1, group.key.clone()),
            };
            rank(a).cmp(&rank(b))
        }),
        _ => groups.sort_by(|a, b| b.hits.len().cmp(&a.hits.len())),
    }
    groups
}

fn group_value(hit: &SearchHit, key: GroupKey, unspecified_label: &str) -> String {
    let value = match key {
        GroupKey::Priority => hit.issue.priority.as_str(),
        GroupKey::Type => hit.issue.issue_type.as_str(),
        GroupKey::Component => hit.issue.component.as_str(),
        GroupKey::Os => hit.issue.os.as_deref().unwrap_or_default(),
        GroupKey::File => Path::new(&hit.source)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&hit.source),
    };
    label_or(value, unspecified_label).to_string()
}

/// Returns the description text around the first case-insensitive match of
/// `keyword`, with newlines flattened to spaces.
///
/// The window spans [`SNIPPET_BEFORE`] characters before the match and
/// [`SNIPPET_AFTER`] characters after its end. Returns `None` when the
/// description does not contain the keyword.
pub fn keyword_snippet(description: &str, keyword: &str) -> Option<String> {
    if keyword.is_empty() {
        return None;
    }
    let chars: Vec<char> = description.chars().collect();
    let lowered: Vec<String> = chars.iter().map(|c| c.to_lowercase().collect()).collect();
    let needle: Vec<String> = keyword.chars().map(|c| c.to_lowercase().collect()).collect();

    let start = lowered
        .windows(needle.len())
        .position(|window| window == needle.as_slice())?;
    let from = start.saturating_sub(SNIPPET_BEFORE);
    let to = (start + needle.len() + SNIPPET_AFTER).min(chars.len());

    Some(chars[from..to].iter().collect::<String>().replace('\n', " "))
}

/// Truncates text to `max_chars` characters.
///
/// Returns the kept text and the number of characters dropped.
pub fn truncate_chars(text: &str, max_chars: usize) -> (&str, usize) {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => (&text[..byte_index], text.chars().count() - max_chars),
        None => (text, 0),
    }
}
