// Rust guideline compliant 2026-02-09

//! HTML report preparation and rendering.
//!
//! [`prepare_report_data`] turns a loaded collection into template
//! variables; a [`ReportRenderer`] chosen by [`RenderStrategy`] turns the
//! variables into a page.

use crate::error::Result;
use askama::Template;
use jdkissue_core::stats::UNKNOWN_OS_LABEL;
use jdkissue_core::{Counts, IssueStatistics, RenderStrategy};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Bundled report template, shared by both rendering strategies.
pub const BUNDLED_TEMPLATE: &str = include_str!("../templates/report.html");

/// Default report file name.
pub const DEFAULT_REPORT_FILE: &str = "jdk_issue_report.html";

/// Default summary line.
pub const DEFAULT_SUMMARY: &str = "Issue analysis across JDK releases";

const DESCRIPTION_PREVIEW_CHARS: usize = 200;
const TOP_COMPONENT_OPTIONS: usize = 15;

/// Caller overrides for report text and counting.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Title override.
    pub title: Option<String>,
    /// Summary override.
    pub summary: Option<String>,
    /// Priorities counted as high.
    pub high_priorities: Vec<String>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: None,
            summary: None,
            high_priorities: vec!["P1".to_string(), "P2".to_string()],
        }
    }
}

/// Template variables of one report.
///
/// JSON-valued fields hold serialized text ready to embed in a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportData {
    /// Page title.
    pub title: String,
    /// Summary line under the title.
    pub summary: String,
    /// Versions joined with `, `.
    pub versions_text: String,
    /// Number of issues.
    pub total_issues: usize,
    /// Issues with a high priority.
    pub high_priority_count: usize,
    /// Issues whose OS mentions Windows.
    pub windows_count: usize,
    /// Issues whose component or description mentions security.
    pub security_count: usize,
    /// JSON array of issue rows.
    pub issues_data: String,
    /// JSON object of counts per priority.
    pub priority_stats: String,
    /// JSON object of counts per component.
    pub component_stats: String,
    /// JSON object of counts per type.
    pub type_stats: String,
    /// JSON object of counts per OS, missing values as `unknown`.
    pub os_stats: String,
    /// `<option>` elements for the type filter.
    pub type_options: String,
    /// `<option>` elements for the component filter.
    pub component_options: String,
    /// Local generation time.
    pub generated_at: String,
}

impl ReportData {
    /// Template variables as `(name, value)` pairs.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("summary", self.summary.clone()),
            ("versions_text", self.versions_text.clone()),
            ("total_issues", self.total_issues.to_string()),
            ("high_priority_count", self.high_priority_count.to_string()),
            ("windows_count", self.windows_count.to_string()),
            ("security_count", self.security_count.to_string()),
            ("issues_data", self.issues_data.clone()),
            ("priority_stats", self.priority_stats.clone()),
            ("component_stats", self.component_stats.clone()),
            ("type_stats", self.type_stats.clone()),
            ("os_stats", self.os_stats.clone()),
            ("type_options", self.type_options.clone()),
            ("component_options", self.component_options.clone()),
            ("generated_at", self.generated_at.clone()),
        ]
    }
}

#[derive(Serialize)]
struct IssueRow<'a> {
    id: &'a str,
    title: &'a str,
    priority: &'a str,
    #[serde(rename = "type")]
    issue_type: &'a str,
    component: &'a str,
    os: &'a str,
    description: String,
}

/// Builds the template variables for a collection.
///
/// # Arguments
///
/// * `stats` - The issues to report on
/// * `versions` - Release versions the issues were loaded for
/// * `options` - Title, summary and high priority overrides
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn prepare_report_data<S: AsRef<str>>(
    stats: &IssueStatistics,
    versions: &[S],
    options: &ReportOptions,
) -> Result<ReportData> {
    let versions_text = versions
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");

    let rows: Vec<IssueRow<'_>> = stats
        .issues()
        .iter()
        .map(|issue| IssueRow {
            id: &issue.issue_id,
            title: &issue.title,
            priority: &issue.priority,
            issue_type: &issue.issue_type,
            component: &issue.component,
            os: issue.os.as_deref().unwrap_or_default(),
            description: preview(&issue.description),
        })
        .collect();

    let type_stats = stats.type_stats();
    let component_stats = stats.component_stats();

    Ok(ReportData {
        title: options
            .title
            .clone()
            .unwrap_or_else(|| format!("JDK Issue Analysis Report - {versions_text}")),
        summary: options
            .summary
            .clone()
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
        total_issues: stats.len(),
        high_priority_count: stats.count_high_priority(&options.high_priorities),
        windows_count: stats.count_windows_related(),
        security_count: stats.count_security_related(),
        issues_data: script_json(&rows)?,
        priority_stats: script_json(&stats.priority_stats())?,
        component_stats: script_json(&component_stats)?,
        type_stats: script_json(&type_stats)?,
        os_stats: script_json(&stats.os_stats(UNKNOWN_OS_LABEL))?,
        type_options: type_options(&type_stats),
        component_options: component_options(&component_stats),
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        versions_text,
    })
}

fn preview(description: &str) -> String {
    match description.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((byte_index, _)) => format!("{}...", &description[..byte_index]),
        None => description.to_string(),
    }
}

// `</` is escaped so issue text cannot close the surrounding script element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_string(value).map_err(jdkissue_core::Error::from)?;
    Ok(json.replace("</", "<\\/"))
}

/// Renders one `<option>` per type, sorted by name.
pub fn type_options(type_stats: &Counts) -> String {
    type_stats
        .keys()
        .map(|name| format!("<option value=\"{name}\">{name}</option>"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one `<option>` per component for the most frequent components.
pub fn component_options(component_stats: &Counts) -> String {
    let mut ranked: Vec<(&String, &usize)> = component_stats.iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(a.1));
    ranked
        .into_iter()
        .take(TOP_COMPONENT_OPTIONS)
        .map(|(name, _)| format!("<option value=\"{name}\">{name}</option>"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders report variables into a page.
pub trait ReportRenderer {
    /// Produces the full HTML text.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&self, data: &ReportData) -> Result<String>;
}

#[derive(Template)]
#[template(path = "report.html", escape = "none")]
struct ReportPage<'a> {
    title: &'a str,
    summary: &'a str,
    versions_text: &'a str,
    total_issues: usize,
    high_priority_count: usize,
    windows_count: usize,
    security_count: usize,
    issues_data: &'a str,
    priority_stats: &'a str,
    component_stats: &'a str,
    type_stats: &'a str,
    os_stats: &'a str,
    type_options: &'a str,
    component_options: &'a str,
    generated_at: &'a str,
}

impl<'a> From<&'a ReportData> for ReportPage<'a> {
    fn from(data: &'a ReportData) -> Self {
        Self {
            title: &data.title,
            summary: &data.summary,
            versions_text: &data.versions_text,
            total_issues: data.total_issues,
            high_priority_count: data.high_priority_count,
            windows_count: data.windows_count,
            security_count: data.security_count,
            issues_data: &data.issues_data,
            priority_stats: &data.priority_stats,
            component_stats: &data.component_stats,
            type_stats: &data.type_stats,
            os_stats: &data.os_stats,
            type_options: &data.type_options,
            component_options: &data.component_options,
            generated_at: &data.generated_at,
        }
    }
}

/// Renders with the compiled bundled template.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRenderer;

impl ReportRenderer for TemplateRenderer {
    fn render(&self, data: &ReportData) -> Result<String> {
        Ok(ReportPage::from(data).render()?)
    }
}

/// Renders by replacing literal `{{ name }}` placeholders.
#[derive(Debug, Clone)]
pub struct PlaceholderRenderer {
    template: String,
}

impl PlaceholderRenderer {
    /// Uses the bundled template.
    pub fn bundled() -> Self {
        Self::new(BUNDLED_TEMPLATE)
    }

    /// Uses the given template text.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Reads the template from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unreadable.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(jdkissue_core::Error::InputNotFound {
                kind: "Template file",
                path: path.to_path_buf(),
            }
            .into());
        }
        Ok(Self::new(std::fs::read_to_string(path)?))
    }
}

impl ReportRenderer for PlaceholderRenderer {
    fn render(&self, data: &ReportData) -> Result<String> {
        let mut page = self.template.clone();
        for (name, value) in data.fields() {
            page = page.replace(&format!("{{{{ {name} }}}}"), &value);
        }
        Ok(page)
    }
}

/// Writes reports with the renderer selected at construction.
pub struct ReportGenerator {
    renderer: Box<dyn ReportRenderer>,
}

impl ReportGenerator {
    /// Creates a generator for a strategy.
    ///
    /// `template_path` only applies to the placeholder strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if the custom template cannot be read.
    pub fn new(strategy: RenderStrategy, template_path: Option<&Path>) -> Result<Self> {
        let renderer: Box<dyn ReportRenderer> = match (strategy, template_path) {
            (RenderStrategy::Template, path) => {
                if let Some(path) = path {
                    tracing::warn!(
                        path = %path.display(),
                        "custom template ignored by the template strategy"
                    );
                }
                Box::new(TemplateRenderer)
            }
            (RenderStrategy::Placeholder, Some(path)) => {
                Box::new(PlaceholderRenderer::from_file(path)?)
            }
            (RenderStrategy::Placeholder, None) => Box::new(PlaceholderRenderer::bundled()),
        };
        Ok(Self { renderer })
    }

    /// Creates a generator around an existing renderer.
    pub fn with_renderer(renderer: Box<dyn ReportRenderer>) -> Self {
        Self { renderer }
    }

    /// Renders a report without writing it.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(&self, data: &ReportData) -> Result<String> {
        self.renderer.render(data)
    }

    /// Renders and writes a report.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails or the file cannot be written.
    pub fn write(&self, data: &ReportData, output: &Path) -> Result<()> {
        let page = self.render(data)?;
        std::fs::write(output, page)?;
        tracing::info!(path = %output.display(), issues = data.total_issues, "report written");
        Ok(())
    }
}

/// Conventional issue file for a release version, e.g.
/// `21.0.6` maps to `jdk_OpenJDK21_0_6_Released.txt`.
pub fn version_file_name(version: &str) -> PathBuf {
    PathBuf::from(format!("jdk_OpenJDK{}_Released.txt", version.replace('.', "_")))
}
