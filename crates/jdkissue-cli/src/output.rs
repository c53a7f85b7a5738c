// Rust guideline compliant 2026-02-09

//! Output formatting for the `jdki` CLI.
//!
//! Every command result goes through an [`OutputFormatter`], so the same
//! command code serves table, plain and JSON output.

use crate::commands::report::ReportOutcome;
use crate::commands::stats::SourceSummary;
use crate::terminal::{paint, wrap_text};
use jdkissue_app::search::{keyword_snippet, truncate_chars, DETAIL_CHARS, PREVIEW_CHARS};
use jdkissue_app::{
    AppError, CountEntry, ErrorCode, ErrorEnvelope, FormatSummary, IssueSummary, SearchHit,
    SearchOutcome, SearchQuery, SuccessEnvelope,
};
use jdkissue_core::OutputFormat;
use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use termcolor::Color;

const DETAIL_INDENT: usize = 3;

/// Presentation switches for search results.
#[derive(Debug, Clone)]
pub struct SearchView {
    /// Show per-issue details instead of one row per issue.
    pub verbose: bool,
    /// Append the result statistics.
    pub show_stats: bool,
    /// Label printed for a missing OS value.
    pub unspecified_label: String,
}

/// Output formatter trait.
///
/// Defines the interface for rendering command results in different output
/// formats.
pub trait OutputFormatter {
    /// Formats the result of a search run.
    fn format_search(&self, outcome: &SearchOutcome, view: &SearchView) -> String;

    /// Formats one summary per loaded source.
    fn format_summaries(&self, summaries: &[SourceSummary]) -> String;

    /// Formats the result of a report run.
    fn format_report(&self, outcome: &ReportOutcome) -> String;

    /// Formats the result of a release-note formatter run.
    fn format_formatter_run(&self, summary: &FormatSummary) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// Lines shown under a hit in verbose mode.
///
/// Id lookups show the description up to [`DETAIL_CHARS`] characters plus
/// the number left out; keyword searches show the text around the first
/// match in the description; filters show a [`PREVIEW_CHARS`] preview.
pub fn verbose_details(hit: &SearchHit, query: &SearchQuery) -> Vec<String> {
    let description = hit.issue.description.as_str();
    if description.is_empty() {
        return Vec::new();
    }

    match query {
        SearchQuery::ById { .. } => {
            let (shown, rest) = truncate_chars(description, DETAIL_CHARS);
            let mut lines = vec!["Description:".to_string(), shown.to_string()];
            if rest > 0 {
                lines.push(format!("... ({rest} more characters)"));
            }
            lines
        }
        SearchQuery::Keyword { keyword, .. } => keyword_snippet(description, keyword)
            .map(|snippet| vec![format!("Context: ...{snippet}...")])
            .unwrap_or_default(),
        SearchQuery::Filter(_) => {
            let (shown, rest) = truncate_chars(description, PREVIEW_CHARS);
            let ellipsis = if rest > 0 { "..." } else { "" };
            vec![format!("Description: {shown}{ellipsis}")]
        }
    }
}

/// Human-readable description of the executed query.
pub fn describe_query(query: &SearchQuery) -> String {
    match query {
        SearchQuery::ById { id } => format!("Issue id: {id}"),
        SearchQuery::Keyword { keyword, fields } => {
            let fields: Vec<&str> = fields.iter().map(|field| field.name()).collect();
            format!("Keyword: \"{keyword}\" in {}", fields.join(", "))
        }
        SearchQuery::Filter(request) => {
            let constraints: Vec<String> = request
                .constraints()
                .map(|(field, value)| format!("{field}={value}"))
                .collect();
            format!("Filter: {}", constraints.join(", "))
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
}

fn os_or_label<'a>(hit: &'a SearchHit, label: &'a str) -> &'a str {
    hit.issue
        .os
        .as_deref()
        .filter(|os| !os.is_empty())
        .unwrap_or(label)
}

/// JSON output formatter.
///
/// Wraps results in the standard success envelope; errors use the error
/// envelope with a stable code.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_search(&self, outcome: &SearchOutcome, _view: &SearchView) -> String {
        to_json(&SuccessEnvelope::new(outcome))
    }

    fn format_summaries(&self, summaries: &[SourceSummary]) -> String {
        to_json(&SuccessEnvelope::new(summaries))
    }

    fn format_report(&self, outcome: &ReportOutcome) -> String {
        to_json(&SuccessEnvelope::new(outcome))
    }

    fn format_formatter_run(&self, summary: &FormatSummary) -> String {
        to_json(&SuccessEnvelope::new(summary))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let envelope = match error.downcast_ref::<AppError>() {
            Some(app_error) => ErrorEnvelope::from_error(app_error),
            None => ErrorEnvelope {
                code: ErrorCode::Unknown,
                message: format!("{error:#}"),
                details: None,
            },
        };
        to_json(&envelope)
    }
}

/// Table output formatter.
///
/// Renders results as aligned tables with colored headings.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    ///
    /// # Arguments
    /// * `use_color` - Whether to use colored output
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn heading(&self, text: &str) -> String {
        paint(text, Color::Cyan, true, self.use_color)
    }

    fn hit_table(&self, hits: &[&SearchHit], label: &str) -> String {
        let mut builder = Builder::default();
        builder.push_record(["ID", "Priority", "Type", "Component", "OS", "Title"]);
        for hit in hits {
            builder.push_record([
                hit.issue.issue_id.as_str(),
                hit.issue.priority.as_str(),
                hit.issue.issue_type.as_str(),
                hit.issue.component.as_str(),
                os_or_label(hit, label),
                hit.issue.title.as_str(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn hit_details(&self, hits: &[&SearchHit], query: &SearchQuery, label: &str) -> String {
        let indent = " ".repeat(DETAIL_INDENT);
        let mut output = String::new();
        for (index, hit) in hits.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", index + 1, hit.issue.title));
            output.push_str(&format!("{indent}ID: {}\n", hit.issue.issue_id));
            output.push_str(&format!(
                "{indent}Priority: {}, Type: {}\n",
                hit.issue.priority, hit.issue.issue_type
            ));
            output.push_str(&format!("{indent}Component: {}\n", hit.issue.component));
            output.push_str(&format!("{indent}OS: {}\n", os_or_label(hit, label)));
            for line in verbose_details(hit, query) {
                output.push_str(&indent);
                output.push_str(&wrap_text(&line, DETAIL_INDENT));
                output.push('\n');
            }
            output.push('\n');
        }
        output
    }

    fn hits_block(&self, hits: &[&SearchHit], query: &SearchQuery, view: &SearchView) -> String {
        if view.verbose {
            self.hit_details(hits, query, &view.unspecified_label)
        } else {
            format!("{}\n", self.hit_table(hits, &view.unspecified_label))
        }
    }

    fn summary_text(&self, summary: &IssueSummary) -> String {
        let mut output = String::new();
        output.push_str(&format!("Total issues:     {}\n", summary.total));
        output.push_str(&format!("High priority:    {}\n", summary.high_priority));
        output.push_str(&format!("Windows related:  {}\n", summary.windows_related));
        output.push_str(&format!("Security related: {}\n", summary.security_related));

        let sections: [(&str, &[CountEntry]); 5] = [
            ("Priority", summary.by_priority.as_slice()),
            ("Type", summary.by_type.as_slice()),
            ("Component (top 10)", summary.by_component.as_slice()),
            ("OS", summary.by_os.as_slice()),
            ("File", summary.by_source.as_slice()),
        ];
        for (name, entries) in sections {
            if entries.is_empty() {
                continue;
            }
            output.push('\n');
            output.push_str(&count_table(name, entries));
            output.push('\n');
        }
        output
    }
}

fn count_table(name: &str, entries: &[CountEntry]) -> String {
    let mut builder = Builder::default();
    builder.push_record([name, "Count"]);
    for entry in entries {
        builder.push_record([entry.value.clone(), entry.count.to_string()]);
    }
    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

impl OutputFormatter for TableFormatter {
    fn format_search(&self, outcome: &SearchOutcome, view: &SearchView) -> String {
        let mut output = String::new();
        output.push_str(&self.heading(&describe_query(&outcome.query)));
        output.push_str("\n\n");

        if outcome.hits.is_empty() {
            output.push_str("No matching issues found.\n");
        } else if let Some(groups) = &outcome.groups {
            let title = group_title(outcome);
            for group in groups {
                let hits: Vec<&SearchHit> = group.hits.iter().collect();
                output.push_str(&self.heading(&format!(
                    "{title}: {} ({} issues)",
                    group.key,
                    hits.len()
                )));
                output.push('\n');
                output.push_str(&self.hits_block(&hits, &outcome.query, view));
                output.push('\n');
            }
        } else {
            for source in &outcome.stats.by_source {
                let hits: Vec<&SearchHit> = outcome.hits_for(&source.value).collect();
                if hits.is_empty() {
                    continue;
                }
                output.push_str(&self.heading(&format!(
                    "[{}] {} matches",
                    source.value,
                    hits.len()
                )));
                output.push('\n');
                output.push_str(&self.hits_block(&hits, &outcome.query, view));
                output.push('\n');
            }
        }

        if outcome.hits.len() < outcome.total {
            output.push_str(&format!(
                "Total: {} issues (showing {})\n",
                outcome.total,
                outcome.hits.len()
            ));
        } else {
            output.push_str(&format!("Total: {} issues\n", outcome.total));
        }

        if view.show_stats && outcome.total > 0 {
            output.push('\n');
            output.push_str(&self.heading("Statistics"));
            output.push('\n');
            output.push_str(&self.summary_text(&outcome.stats));
        }
        output
    }

    fn format_summaries(&self, summaries: &[SourceSummary]) -> String {
        let mut output = String::new();
        for summary in summaries {
            output.push_str(&self.heading(&format!("[{}]", summary.source)));
            output.push('\n');
            output.push_str(&self.summary_text(&summary.summary));
            output.push('\n');
        }
        output
    }

    fn format_report(&self, outcome: &ReportOutcome) -> String {
        format!(
            "Report written: {} ({} issues, versions {})",
            outcome.output.display(),
            outcome.total_issues,
            outcome.versions.join(", ")
        )
    }

    fn format_formatter_run(&self, summary: &FormatSummary) -> String {
        let mut output = format!(
            "Formatted {} of {} issues: {}\n",
            summary.formatted,
            summary.requested,
            summary.output_path.display()
        );
        output.push_str(&format!(
            "Skipped:  {} ({})\n",
            summary.skipped.len(),
            summary.skipped_path.display()
        ));
        output.push_str(&format!(
            "Excluded: {} ({})\n",
            summary.excluded.len(),
            summary.excluded_path.display()
        ));

        if !summary.excluded.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["ID", "Reason", "Title"]);
            for issue in &summary.excluded {
                builder.push_record([
                    issue.issue_id.as_str(),
                    issue.reason.as_str(),
                    issue.title.as_str(),
                ]);
            }
            let mut table = builder.build();
            table.with(Style::modern());
            output.push('\n');
            output.push_str(&table.to_string());
            output.push('\n');
        }
        output
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!(
            "{} {error:#}",
            paint("Error:", Color::Red, true, self.use_color)
        )
    }
}

/// Plain text output formatter.
///
/// One tab-separated line per item, no colors and no tables.
pub struct PlainFormatter;

impl PlainFormatter {
    fn hit_lines(&self, hits: &[&SearchHit], query: &SearchQuery, view: &SearchView) -> String {
        let mut output = String::new();
        for hit in hits {
            output.push_str(&format!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\n",
                hit.source,
                hit.issue.issue_id,
                hit.issue.priority,
                hit.issue.issue_type,
                hit.issue.component,
                os_or_label(hit, &view.unspecified_label),
                hit.issue.title
            ));
            if view.verbose {
                for line in verbose_details(hit, query) {
                    output.push_str(&format!("  {line}\n"));
                }
            }
        }
        output
    }

    fn summary_lines(&self, prefix: &str, summary: &IssueSummary) -> String {
        let mut output = String::new();
        output.push_str(&format!("{prefix}total\t{}\n", summary.total));
        output.push_str(&format!("{prefix}high_priority\t{}\n", summary.high_priority));
        output.push_str(&format!("{prefix}windows_related\t{}\n", summary.windows_related));
        output.push_str(&format!("{prefix}security_related\t{}\n", summary.security_related));

        let sections: [(&str, &[CountEntry]); 5] = [
            ("priority", summary.by_priority.as_slice()),
            ("type", summary.by_type.as_slice()),
            ("component", summary.by_component.as_slice()),
            ("os", summary.by_os.as_slice()),
            ("file", summary.by_source.as_slice()),
        ];
        for (name, entries) in sections {
            for entry in entries {
                output.push_str(&format!("{prefix}{name}\t{}\t{}\n", entry.value, entry.count));
            }
        }
        output
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_search(&self, outcome: &SearchOutcome, view: &SearchView) -> String {
        let mut output = String::new();
        match &outcome.groups {
            Some(groups) => {
                let title = group_title(outcome);
                for group in groups {
                    let hits: Vec<&SearchHit> = group.hits.iter().collect();
                    output.push_str(&format!("# {title}: {} ({})\n", group.key, hits.len()));
                    output.push_str(&self.hit_lines(&hits, &outcome.query, view));
                }
            }
            None => {
                let hits: Vec<&SearchHit> = outcome.hits.iter().collect();
                output.push_str(&self.hit_lines(&hits, &outcome.query, view));
            }
        }
        output.push_str(&format!("total\t{}\n", outcome.total));
        if view.show_stats {
            output.push_str(&self.summary_lines("stats\t", &outcome.stats));
        }
        output
    }

    fn format_summaries(&self, summaries: &[SourceSummary]) -> String {
        summaries
            .iter()
            .map(|summary| self.summary_lines(&format!("{}\t", summary.source), &summary.summary))
            .collect()
    }

    fn format_report(&self, outcome: &ReportOutcome) -> String {
        format!("{}\t{}", outcome.output.display(), outcome.total_issues)
    }

    fn format_formatter_run(&self, summary: &FormatSummary) -> String {
        let mut output = format!(
            "formatted\t{}\t{}\n",
            summary.formatted,
            summary.output_path.display()
        );
        for issue_id in &summary.skipped {
            output.push_str(&format!("skipped\t{issue_id}\n"));
        }
        for issue in &summary.excluded {
            output.push_str(&format!("excluded\t{}\t{}\n", issue.issue_id, issue.reason));
        }
        output
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {error:#}")
    }
}

fn group_title(outcome: &SearchOutcome) -> &'static str {
    outcome.group_by.map(|key| key.title()).unwrap_or("Group")
}

/// Creates the formatter for an output format.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (table format only)
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
