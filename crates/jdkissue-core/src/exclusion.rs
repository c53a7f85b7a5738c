// Rust guideline compliant 2026-02-07

//! Exclusion rules applied to issues before they reach a release summary.
//!
//! Rules run in a fixed order and the first one that applies decides the
//! reason: type, documentation/test, performance, stability, platform, meta.

use crate::models::IssueRecord;
use crate::Result;
use regex::Regex;
use std::fmt;

/// Types that are never treated as bug fixes.
pub const NON_BUG_TYPES: [&str; 4] = ["Enhancement", "New Feature", "Task", "Sub-Task"];

/// Lowercase OS token prefixes that denote a non-Windows platform.
pub const NON_WINDOWS_OS_PREFIXES: [&str; 7] =
    ["os_x", "mac", "macos", "linux", "solaris", "aix", "bsd"];

const DOC_TEST_PATTERN: &str = r"(?i)(regtest|jtreg|TEST:|javadoc|man page|docs?\b|typo\b)";
const PERF_PATTERN: &str =
    r"(?i)(performance|\bperf\b|optimi[sz]e|microbench|\bbenchmark\b|speed up|faster)";
const STABILITY_PATTERN: &str =
    r"(?i)(\bcrash|\bhang\b|hs_err|core dump|SIG(SEGV|BUS|ILL)\b|\bassert(ion)?\b)";
const META_PATTERN: &str =
    r"(?i)(Bump update version|Remove designator DEFAULT_PROMOTED_VERSION_PRE)";
const OS_SPLIT_PATTERN: &str = r"[,/;\s]+";

/// Why an issue was excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionReason {
    /// The type is not a bug.
    NonBugType(String),
    /// Documentation or test-only change.
    DocumentationOrTest,
    /// Performance-only change.
    Performance,
    /// JVM stability or crash fix.
    Stability,
    /// Only non-Windows platforms are affected; carries the raw OS value.
    NonWindowsPlatform(String),
    /// Version bump or designator change.
    MetaChange,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::NonBugType(t) => write!(f, "Excluded: non-bug type '{t}'"),
            ExclusionReason::DocumentationOrTest => {
                f.write_str("Excluded: documentation/test-only change")
            }
            ExclusionReason::Performance => f.write_str("Excluded: performance-only change"),
            ExclusionReason::Stability => f.write_str("Excluded: JVM stability/crash fix"),
            ExclusionReason::NonWindowsPlatform(os) => {
                write!(f, "Excluded: non-Windows platform(s): {os}")
            }
            ExclusionReason::MetaChange => {
                f.write_str("Excluded: meta change (version bump/designator)")
            }
        }
    }
}

/// Compiled exclusion rules.
#[derive(Debug, Clone)]
pub struct ExclusionPolicy {
    doc_test: Regex,
    perf: Regex,
    stability: Regex,
    meta: Regex,
    os_split: Regex,
}

impl ExclusionPolicy {
    /// Compiles the rule patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            doc_test: Regex::new(DOC_TEST_PATTERN)?,
            perf: Regex::new(PERF_PATTERN)?,
            stability: Regex::new(STABILITY_PATTERN)?,
            meta: Regex::new(META_PATTERN)?,
            os_split: Regex::new(OS_SPLIT_PATTERN)?,
        })
    }

    /// Returns the first applicable exclusion reason, or `None` if the
    /// issue should be kept.
    pub fn evaluate(&self, record: &IssueRecord) -> Option<ExclusionReason> {
        let issue_type = record.issue_type.as_deref().unwrap_or_default().trim();
        if NON_BUG_TYPES.contains(&issue_type) {
            return Some(ExclusionReason::NonBugType(issue_type.to_string()));
        }

        let text = format!(
            "{}\n{}",
            record.title.as_deref().unwrap_or_default(),
            record.description.as_deref().unwrap_or_default()
        );

        if self.doc_test.is_match(&text) {
            return Some(ExclusionReason::DocumentationOrTest);
        }
        if self.perf.is_match(&text) {
            return Some(ExclusionReason::Performance);
        }
        if self.stability.is_match(&text) {
            return Some(ExclusionReason::Stability);
        }

        let os = record.os.as_deref().unwrap_or_default().trim();
        if !os.is_empty() && self.is_non_windows_only(os) {
            return Some(ExclusionReason::NonWindowsPlatform(os.to_string()));
        }

        if self.meta.is_match(&text) {
            return Some(ExclusionReason::MetaChange);
        }

        None
    }

    fn is_non_windows_only(&self, os: &str) -> bool {
        let lower = os.to_lowercase();
        if lower.contains("windows") || lower.contains("generic") {
            return false;
        }
        let mut pieces = self
            .os_split
            .split(&lower)
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .peekable();
        pieces.peek().is_some()
            && pieces.all(|piece| {
                NON_WINDOWS_OS_PREFIXES
                    .iter()
                    .any(|prefix| piece.starts_with(prefix))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(issue_type: &str, title: &str, os: Option<&str>) -> IssueRecord {
        IssueRecord {
            title: Some(title.to_string()),
            priority: Some("P3".to_string()),
            issue_type: Some(issue_type.to_string()),
            component: Some("core-libs".to_string()),
            description: None,
            os: os.map(str::to_string),
        }
    }

    #[test]
    fn test_type_match_is_exact_after_trim() {
        let policy = ExclusionPolicy::new().unwrap();
        assert_eq!(
            policy.evaluate(&record(" Task ", "[JDK-1] x", None)),
            Some(ExclusionReason::NonBugType("Task".to_string()))
        );
        assert_eq!(policy.evaluate(&record("task", "[JDK-1] x", None)), None);
    }

    #[test]
    fn test_doc_pattern_uses_word_boundary() {
        let policy = ExclusionPolicy::new().unwrap();
        assert_eq!(
            policy.evaluate(&record("Bug", "[JDK-1] Fix typo in message", None)),
            Some(ExclusionReason::DocumentationOrTest)
        );
        assert_eq!(policy.evaluate(&record("Bug", "[JDK-1] Fix typography", None)), None);
    }

    #[test]
    fn test_mixed_platforms_are_kept() {
        let policy = ExclusionPolicy::new().unwrap();
        assert_eq!(policy.evaluate(&record("Bug", "[JDK-1] x", Some("linux, freebsd"))), None);
        assert_eq!(
            policy.evaluate(&record("Bug", "[JDK-1] x", Some("linux, os_x"))),
            Some(ExclusionReason::NonWindowsPlatform("linux, os_x".to_string()))
        );
    }

    #[test]
    fn test_reason_text() {
        assert_eq!(
            ExclusionReason::NonBugType("Enhancement".to_string()).to_string(),
            "Excluded: non-bug type 'Enhancement'"
        );
        assert_eq!(
            ExclusionReason::NonWindowsPlatform("linux".to_string()).to_string(),
            "Excluded: non-Windows platform(s): linux"
        );
    }
}
