// Rust guideline compliant 2026-02-06

//! Issue identifier helpers.

use crate::{Error, Result};
use std::path::Path;

/// Canonical identifier prefix.
pub const ID_PREFIX: &str = "JDK-";

/// Normalizes a user-supplied identifier for lookup.
///
/// Prepends `JDK-` unless the value already starts with it (compared
/// case-insensitively). The remainder is left untouched.
pub fn normalize_query_id(raw: &str) -> String {
    if has_prefix(raw) {
        raw.to_string()
    } else {
        format!("{ID_PREFIX}{raw}")
    }
}

/// Returns true if two identifiers are equal ignoring case.
pub fn ids_match(left: &str, right: &str) -> bool {
    left.to_uppercase() == right.to_uppercase()
}

/// Returns true if the identifier is exactly `JDK-` followed by one or more digits.
pub fn is_canonical_id(value: &str) -> bool {
    value
        .strip_prefix(ID_PREFIX)
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}

/// Returns the digit part of a canonical identifier.
pub fn numeric_part(value: &str) -> Option<&str> {
    value.strip_prefix(ID_PREFIX).filter(|_| is_canonical_id(value))
}

/// Reads an identifier list: one canonical id per line, blank lines ignored.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - A non-blank line is not a canonical identifier
/// - The file holds no identifiers
pub fn read_id_list(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::InputNotFound {
            kind: "Input file",
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    let mut ids = Vec::new();
    for (index, raw_line) in content.lines().enumerate() {
        let id = raw_line.trim();
        if id.is_empty() {
            continue;
        }
        if !is_canonical_id(id) {
            return Err(Error::InvalidIssueId {
                location: format!("{}:{}", path.display(), index + 1),
                value: raw_line.to_string(),
            });
        }
        ids.push(id.to_string());
    }

    if ids.is_empty() {
        return Err(Error::EmptyIdList(path.to_path_buf()));
    }

    Ok(ids)
}

fn has_prefix(raw: &str) -> bool {
    raw.get(..ID_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(ID_PREFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_normalize_query_id() {
        assert_eq!(normalize_query_id("8320192"), "JDK-8320192");
        assert_eq!(normalize_query_id("JDK-8320192"), "JDK-8320192");
        assert_eq!(normalize_query_id("jdk-8320192"), "jdk-8320192");
    }

    #[test]
    fn test_canonical_id() {
        assert!(is_canonical_id("JDK-1"));
        assert!(!is_canonical_id("JDK-"));
        assert!(!is_canonical_id("jdk-1"));
        assert!(!is_canonical_id("JDK-12a"));
        assert_eq!(numeric_part("JDK-42"), Some("42"));
        assert_eq!(numeric_part("JDK-x"), None);
    }

    #[test]
    fn test_read_id_list_reports_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ids.txt");
        std::fs::write(&path, "JDK-1\n\nbogus\n").unwrap();
        let err = read_id_list(&path).unwrap_err();
        assert!(err.to_string().contains(":3"));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_read_id_list_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ids.txt");
        std::fs::write(&path, "\n  \n").unwrap();
        assert!(matches!(read_id_list(&path), Err(Error::EmptyIdList(_))));
    }
}
