// Rust guideline compliant 2026-02-09

//! Integration tests for CLI commands.

use jdkissue_app::{AppError, MERGED_SOURCE_LABEL};
use jdkissue_cli::commands::report::{self, ReportArgs};
use jdkissue_cli::commands::search::{self, SearchArgs};
use jdkissue_cli::commands::{format, stats};
use jdkissue_core::{Config, RenderStrategy};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIRST_FILE: &str = "Title: [JDK-8000001] Crash in C2 compiler
Priority: P2
Type: Bug
Component: hotspot
Description: The JVM crashes with a deadlock
OS: windows

-----
Title: [JDK-8000002] Fix typo in javadoc
Priority: P4
Type: Bug
Component: core-libs
Description: Small typo
";

const SECOND_FILE: &str = "Title: [JDK-8000003] Add new API
Priority: P3
Type: Enhancement
Component: core-libs
Description: Security manager update
OS: linux
";

fn write_issue_files(dir: &Path) -> (PathBuf, PathBuf) {
    let first = dir.join("jdk_OpenJDK21_0_6_Released.txt");
    let second = dir.join("jdk_OpenJDK21_0_7_Released.txt");
    fs::write(&first, FIRST_FILE).expect("write first file");
    fs::write(&second, SECOND_FILE).expect("write second file");
    (first, second)
}

fn app_error(error: &anyhow::Error) -> &AppError {
    error
        .downcast_ref::<AppError>()
        .expect("error should be an AppError")
}

#[test]
fn test_search_keyword_across_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let (first, second) = write_issue_files(temp_dir.path());

    let args = SearchArgs {
        files: vec![first.clone(), second],
        keyword: Some("CORE-LIBS".to_string()),
        ..SearchArgs::default()
    };
    let outcome = search::run(&args, &Config::default(), false).expect("search should succeed");

    assert_eq!(outcome.total, 2);
    let ids: Vec<&str> = outcome.hits.iter().map(|hit| hit.issue.issue_id.as_str()).collect();
    assert_eq!(ids, vec!["JDK-8000002", "JDK-8000003"]);
    assert_eq!(outcome.stats.by_source.len(), 2);
    assert_eq!(outcome.hits[0].source, first.display().to_string());
}

#[test]
fn test_search_id_wins_over_filters() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let (first, _) = write_issue_files(temp_dir.path());

    let args = SearchArgs {
        files: vec![first],
        id: Some("8000001".to_string()),
        priority: Some("P4".to_string()),
        ..SearchArgs::default()
    };
    let outcome = search::run(&args, &Config::default(), false).expect("search should succeed");

    assert_eq!(outcome.total, 1);
    assert_eq!(outcome.hits[0].issue.title, "Crash in C2 compiler");
}

#[test]
fn test_search_merge_uses_single_source() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let (first, second) = write_issue_files(temp_dir.path());

    let args = SearchArgs {
        files: vec![first, second],
        component: Some("core-libs".to_string()),
        merge: true,
        sort: Some("priority".to_string()),
        ..SearchArgs::default()
    };
    let outcome = search::run(&args, &Config::default(), false).expect("search should succeed");

    assert_eq!(outcome.stats.by_source.len(), 1);
    assert_eq!(outcome.stats.by_source[0].value, MERGED_SOURCE_LABEL);
    let priorities: Vec<&str> = outcome
        .hits
        .iter()
        .map(|hit| hit.issue.priority.as_str())
        .collect();
    assert_eq!(priorities, vec!["P3", "P4"]);
}

#[test]
fn test_search_skips_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let (first, _) = write_issue_files(temp_dir.path());

    let args = SearchArgs {
        files: vec![temp_dir.path().join("missing.txt"), first],
        priority: Some("p2".to_string()),
        ..SearchArgs::default()
    };
    let outcome = search::run(&args, &Config::default(), false).expect("search should succeed");
    assert_eq!(outcome.total, 1);
}

#[test]
fn test_search_fails_when_nothing_loads() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let args = SearchArgs {
        files: vec![temp_dir.path().join("missing.txt")],
        priority: Some("P2".to_string()),
        ..SearchArgs::default()
    };
    let err = search::run(&args, &Config::default(), false).unwrap_err();
    assert!(matches!(app_error(&err), AppError::InvalidInput(_)));
}

#[test]
fn test_search_without_criteria_fails_before_loading() {
    let args = SearchArgs {
        files: vec![PathBuf::from("does-not-matter.txt")],
        ..SearchArgs::default()
    };
    let err = search::run(&args, &Config::default(), false).unwrap_err();
    assert!(matches!(app_error(&err), AppError::NoQuery));
}

#[test]
fn test_search_uses_configured_default_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let (first, _) = write_issue_files(temp_dir.path());
    let config = Config {
        default_files: vec![first],
        ..Config::default()
    };

    let args = SearchArgs {
        issue_type: Some("bug".to_string()),
        ..SearchArgs::default()
    };
    let outcome = search::run(&args, &config, false).expect("search should succeed");
    assert_eq!(outcome.total, 2);
}

#[test]
fn test_stats_per_file_and_merged() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let (first, second) = write_issue_files(temp_dir.path());
    let files = vec![first, second];

    let per_file = stats::run(&files, false, &Config::default(), false).expect("stats");
    assert_eq!(per_file.len(), 2);
    assert_eq!(per_file[0].summary.total, 2);
    assert_eq!(per_file[0].summary.high_priority, 1);
    assert_eq!(per_file[0].summary.windows_related, 1);
    assert_eq!(per_file[1].summary.security_related, 1);

    let merged = stats::run(&files, true, &Config::default(), false).expect("stats");
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].source, MERGED_SOURCE_LABEL);
    assert_eq!(merged[0].files.len(), 2);
    assert_eq!(merged[0].summary.total, 3);
}

#[test]
fn test_report_from_version_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_issue_files(temp_dir.path());
    let output = temp_dir.path().join("report.html");

    let args = ReportArgs {
        versions: vec!["21.0.6".to_string(), "21.0.7".to_string()],
        data_dir: temp_dir.path().to_path_buf(),
        output: Some(output.clone()),
        strategy: Some("placeholder".to_string()),
        ..ReportArgs::default()
    };
    let outcome = report::run(&args, &Config::default()).expect("report should succeed");

    assert_eq!(outcome.total_issues, 3);
    assert_eq!(outcome.strategy, RenderStrategy::Placeholder);
    let page = fs::read_to_string(&output).expect("read report");
    assert!(page.contains("JDK Issue Analysis Report - 21.0.6, 21.0.7"));
    assert!(page.contains("JDK-8000003"));
    assert!(!page.contains("{{ "));
}

#[test]
fn test_report_flags_override_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let (first, _) = write_issue_files(temp_dir.path());
    let output = temp_dir.path().join("custom.html");
    let config = Config {
        report_title: Some("Configured title".to_string()),
        report_summary: Some("Configured summary".to_string()),
        ..Config::default()
    };

    let args = ReportArgs {
        versions: vec!["21.0.6".to_string()],
        files: vec![first],
        output: Some(output.clone()),
        title: Some("Flag title".to_string()),
        ..ReportArgs::default()
    };
    let outcome = report::run(&args, &config).expect("report should succeed");

    assert_eq!(outcome.strategy, RenderStrategy::Template);
    let page = fs::read_to_string(&output).expect("read report");
    assert!(page.contains("Flag title"));
    assert!(!page.contains("Configured title"));
    assert!(page.contains("Configured summary"));
}

#[test]
fn test_report_missing_version_file_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let args = ReportArgs {
        versions: vec!["9.9.9".to_string()],
        data_dir: temp_dir.path().to_path_buf(),
        output: Some(temp_dir.path().join("report.html")),
        ..ReportArgs::default()
    };
    let err = report::run(&args, &Config::default()).unwrap_err();
    assert!(matches!(
        app_error(&err),
        AppError::Core(jdkissue_core::Error::InputNotFound { .. })
    ));
    assert!(!temp_dir.path().join("report.html").exists());
}

fn tracker_payload(id: &str, title: &str, issue_type: &str) -> String {
    format!(
        "<rss><channel><item>\
         <title>[{id}] {title}</title>\
         <priority>P3</priority>\
         <type>{issue_type}</type>\
         <component>core-libs</component>\
         <description>Details</description>\
         </item></channel></rss>"
    )
}

#[test]
fn test_format_uses_configured_issues_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let issues_dir = temp_dir.path().join("downloaded");
    for (id, issue_type) in [("JDK-8000010", "Bug"), ("JDK-8000011", "Enhancement")] {
        let dir = issues_dir.join(id);
        fs::create_dir_all(&dir).expect("create issue dir");
        let digits = id.trim_start_matches("JDK-");
        fs::write(
            dir.join(format!("jdk-{digits}.xml")),
            tracker_payload(id, "Something broke", issue_type),
        )
        .expect("write payload");
    }
    let input = temp_dir.path().join("ids.txt");
    fs::write(&input, "JDK-8000010\nJDK-8000011\nJDK-8000012\n").expect("write ids");

    let config = Config {
        issues_dir: issues_dir.clone(),
        ..Config::default()
    };
    let summary = format::run(&input, None, true, &config, false).expect("format should succeed");

    assert_eq!(summary.requested, 3);
    assert_eq!(summary.formatted, 1);
    assert_eq!(summary.skipped, vec!["JDK-8000012"]);
    assert_eq!(summary.excluded.len(), 1);
    assert_eq!(summary.excluded[0].issue_id, "JDK-8000011");

    let output = fs::read_to_string(&summary.output_path).expect("read output");
    assert!(output.starts_with("Title: [JDK-8000010] Something broke\n"));

    let kept_all = format::run(&input, Some(issues_dir), false, &Config::default(), false)
        .expect("format should succeed");
    assert_eq!(kept_all.formatted, 2);
    assert!(kept_all.excluded.is_empty());
}
