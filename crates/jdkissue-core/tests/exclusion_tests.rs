// Rust guideline compliant 2026-02-06

//! Integration tests for the exclusion rules.

use jdkissue_core::{ExclusionPolicy, ExclusionReason, IssueRecord};

fn record(issue_type: &str, title: &str, description: &str, os: Option<&str>) -> IssueRecord {
    IssueRecord {
        title: Some(title.to_string()),
        priority: Some("P3".to_string()),
        issue_type: Some(issue_type.to_string()),
        component: Some("hotspot".to_string()),
        description: (!description.is_empty()).then(|| description.to_string()),
        os: os.map(str::to_string),
    }
}

fn policy() -> ExclusionPolicy {
    ExclusionPolicy::new().expect("Exclusion rules should compile")
}

#[test]
fn test_type_rule_wins_over_text_rules() {
    let reason = policy().evaluate(&record(
        "Enhancement",
        "[JDK-1] Fix crash in compiler",
        "",
        None,
    ));
    assert_eq!(
        reason.map(|r| r.to_string()).as_deref(),
        Some("Excluded: non-bug type 'Enhancement'")
    );
}

#[test]
fn test_each_rule_in_order() {
    let policy = policy();
    let cases = [
        (record("Sub-Task", "[JDK-1] x", "", None), Some(ExclusionReason::NonBugType("Sub-Task".to_string()))),
        (record("Bug", "[JDK-2] Update jtreg tags", "", None), Some(ExclusionReason::DocumentationOrTest)),
        (record("Bug", "[JDK-3] Speed up string concat", "", None), Some(ExclusionReason::Performance)),
        (record("Bug", "[JDK-4] VM fails", "SIGSEGV in libjvm", None), Some(ExclusionReason::Stability)),
        (
            record("Bug", "[JDK-5] Font issue", "", Some("os_x")),
            Some(ExclusionReason::NonWindowsPlatform("os_x".to_string())),
        ),
        (record("Bug", "[JDK-6] Bump update version for 21.0.3", "", None), Some(ExclusionReason::MetaChange)),
        (record("Bug", "[JDK-7] Wrong result from Math.floorMod", "", Some("windows")), None),
    ];
    for (input, expected) in cases {
        assert_eq!(policy.evaluate(&input), expected, "record {:?}", input.title);
    }
}

#[test]
fn test_text_rules_are_case_insensitive() {
    let policy = policy();
    assert_eq!(
        policy.evaluate(&record("Bug", "[JDK-1] JAVADOC fix", "", None)),
        Some(ExclusionReason::DocumentationOrTest)
    );
    assert_eq!(
        policy.evaluate(&record("Bug", "[JDK-1] x", "The VM HANGS", None)),
        None,
        "hang requires a word boundary on both sides"
    );
    assert_eq!(
        policy.evaluate(&record("Bug", "[JDK-1] x", "the VM will HANG forever", None)),
        Some(ExclusionReason::Stability)
    );
}

#[test]
fn test_generic_or_windows_os_is_kept() {
    let policy = policy();
    assert_eq!(policy.evaluate(&record("Bug", "[JDK-1] x", "", Some("generic"))), None);
    assert_eq!(
        policy.evaluate(&record("Bug", "[JDK-1] x", "", Some("linux, windows"))),
        None
    );
    assert_eq!(policy.evaluate(&record("Bug", "[JDK-1] x", "", Some(" "))), None);
}

#[test]
fn test_platform_reason_keeps_raw_value() {
    let reason = policy()
        .evaluate(&record("Bug", "[JDK-1] x", "", Some("Linux / Solaris")))
        .expect("Should be excluded");
    assert_eq!(reason.to_string(), "Excluded: non-Windows platform(s): Linux / Solaris");
}
