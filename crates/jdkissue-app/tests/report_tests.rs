// Rust guideline compliant 2026-02-09

//! Integration tests for report preparation and rendering.

use jdkissue_app::report::BUNDLED_TEMPLATE;
use jdkissue_app::{
    prepare_report_data, PlaceholderRenderer, ReportGenerator, ReportOptions, ReportRenderer,
    TemplateRenderer,
};
use jdkissue_core::{parse_issues, IssueStatistics, RenderStrategy};
use tempfile::TempDir;

fn stats() -> IssueStatistics {
    let long_description = "x".repeat(250);
    IssueStatistics::new(parse_issues(&format!(
        "Title: [JDK-100] Fix X\nPriority: P2\nType: Bug\nComponent: core\n-----\n\
         Title: [JDK-101] Fix Y\nPriority: P4\nType: Enhancement\nComponent: security-libs\n\
         Description: {long_description}\nOS: windows\n"
    )))
}

#[test]
fn test_report_data_defaults() {
    let data = prepare_report_data(&stats(), &["21.0.6", "21.0.7"], &ReportOptions::default()).unwrap();
    assert_eq!(data.title, "JDK Issue Analysis Report - 21.0.6, 21.0.7");
    assert_eq!(data.versions_text, "21.0.6, 21.0.7");
    assert_eq!(data.total_issues, 2);
    assert_eq!(data.high_priority_count, 1);
    assert_eq!(data.windows_count, 1);
    assert_eq!(data.security_count, 1);
    assert_eq!(data.priority_stats, r#"{"P2":1,"P4":1}"#);
    assert_eq!(data.os_stats, r#"{"unknown":1,"windows":1}"#);

    let rows: serde_json::Value = serde_json::from_str(&data.issues_data).unwrap();
    assert_eq!(rows[0]["id"], "JDK-100");
    assert_eq!(rows[0]["os"], "");
    assert_eq!(rows[1]["type"], "Enhancement");
    let description = rows[1]["description"].as_str().unwrap();
    assert_eq!(description.len(), 203);
    assert!(description.ends_with("..."));

    assert_eq!(
        data.type_options,
        "<option value=\"Bug\">Bug</option>\n<option value=\"Enhancement\">Enhancement</option>"
    );
}

#[test]
fn test_report_overrides() {
    let options = ReportOptions {
        title: Some("Quarterly".to_string()),
        summary: Some("Windows focus".to_string()),
        high_priorities: vec!["P4".to_string()],
    };
    let data = prepare_report_data(&stats(), &["21"], &options).unwrap();
    assert_eq!(data.title, "Quarterly");
    assert_eq!(data.summary, "Windows focus");
    assert_eq!(data.high_priority_count, 1);
}

#[test]
fn test_both_strategies_render_same_page() {
    let data = prepare_report_data(&stats(), &["21.0.6"], &ReportOptions::default()).unwrap();
    let compiled = TemplateRenderer.render(&data).unwrap();
    let substituted = PlaceholderRenderer::bundled().render(&data).unwrap();
    assert_eq!(compiled.trim_end(), substituted.trim_end());

    for constant in [
        "const issuesData = [",
        "const priorityStats = {",
        "const componentStats = {",
        "const typeStats = {",
        "const osStats = {",
    ] {
        assert!(compiled.contains(constant), "missing {constant}");
    }
    assert!(compiled.contains("<title>JDK Issue Analysis Report - 21.0.6</title>"));
    assert!(!substituted.contains("{{ "));
}

#[test]
fn test_bundled_template_names_every_variable() {
    let data = prepare_report_data(&stats(), &["21"], &ReportOptions::default()).unwrap();
    for (name, _) in data.fields() {
        assert!(
            BUNDLED_TEMPLATE.contains(&format!("{{{{ {name} }}}}")),
            "template lacks {name}"
        );
    }
}

#[test]
fn test_generator_writes_custom_placeholder_template() {
    let temp_dir = TempDir::new().unwrap();
    let template_path = temp_dir.path().join("custom.html");
    std::fs::write(&template_path, "<h1>{{ title }}</h1><p>{{ total_issues }}</p>").unwrap();
    let output = temp_dir.path().join("report.html");

    let generator = ReportGenerator::new(RenderStrategy::Placeholder, Some(&template_path)).unwrap();
    let data = prepare_report_data(&stats(), &["21"], &ReportOptions::default()).unwrap();
    generator.write(&data, &output).unwrap();

    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "<h1>JDK Issue Analysis Report - 21</h1><p>2</p>"
    );
}

#[test]
fn test_generator_missing_template_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("absent.html");
    assert!(ReportGenerator::new(RenderStrategy::Placeholder, Some(&missing)).is_err());
    assert!(ReportGenerator::new(RenderStrategy::Template, Some(&missing)).is_ok());
}
