// Rust guideline compliant 2026-02-06

//! Core data models for JDK issues.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single tracker issue.
///
/// `issue_id` and `title` always come from one `[<id>] <title>` source line;
/// see [`Issue::from_record`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Tracker identifier, canonically `JDK-<digits>`.
    pub issue_id: String,
    /// Display title without the bracketed identifier.
    pub title: String,
    /// Priority label (usually P1-P5, not constrained).
    #[serde(default)]
    pub priority: String,
    /// Issue type (Bug, Enhancement, ...).
    #[serde(rename = "type", default)]
    pub issue_type: String,
    /// Component, possibly a comma-joined list.
    #[serde(default)]
    pub component: String,
    /// Free-text description, possibly empty.
    #[serde(default)]
    pub description: String,
    /// Operating system field; `None` when the source did not provide one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
}

/// Raw field map of one flat-file block or one tracker XML item.
///
/// `title` keeps the bracketed identifier prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    /// Full title line, e.g. `[JDK-8320192] SHAKE256 does not work`.
    pub title: Option<String>,
    /// Priority label.
    pub priority: Option<String>,
    /// Issue type.
    #[serde(rename = "type")]
    pub issue_type: Option<String>,
    /// Component.
    pub component: Option<String>,
    /// Description text.
    pub description: Option<String>,
    /// Operating system value.
    pub os: Option<String>,
}

impl IssueRecord {
    /// Returns the value stored under a flat-file field name.
    pub fn get(&self, name: BlockField) -> Option<&str> {
        match name {
            BlockField::Title => self.title.as_deref(),
            BlockField::Priority => self.priority.as_deref(),
            BlockField::Type => self.issue_type.as_deref(),
            BlockField::Component => self.component.as_deref(),
            BlockField::Description => self.description.as_deref(),
            BlockField::Os => self.os.as_deref(),
        }
    }

    /// Stores a value under a flat-file field name, replacing any previous value.
    pub fn set(&mut self, name: BlockField, value: String) {
        let slot = match name {
            BlockField::Title => &mut self.title,
            BlockField::Priority => &mut self.priority,
            BlockField::Type => &mut self.issue_type,
            BlockField::Component => &mut self.component,
            BlockField::Description => &mut self.description,
            BlockField::Os => &mut self.os,
        };
        *slot = Some(value);
    }
}

/// Field names recognized at the start of a flat-file line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockField {
    /// `Title: `
    Title,
    /// `Priority: `
    Priority,
    /// `Type: `
    Type,
    /// `Component: `
    Component,
    /// `Description: `
    Description,
    /// `OS: `
    Os,
}

impl BlockField {
    /// All block fields in prefix-matching order.
    pub const ALL: [BlockField; 6] = [
        BlockField::Title,
        BlockField::Priority,
        BlockField::Type,
        BlockField::Component,
        BlockField::Description,
        BlockField::Os,
    ];

    /// Line prefix that opens this field.
    pub fn prefix(self) -> &'static str {
        match self {
            BlockField::Title => "Title: ",
            BlockField::Priority => "Priority: ",
            BlockField::Type => "Type: ",
            BlockField::Component => "Component: ",
            BlockField::Description => "Description: ",
            BlockField::Os => "OS: ",
        }
    }
}

impl Issue {
    /// Builds an issue from a raw record.
    ///
    /// Returns `None` when the title does not start with `[` followed later
    /// by `]`; such records carry no identity.
    pub fn from_record(record: &IssueRecord) -> Option<Self> {
        let (issue_id, title) = split_title(record.title.as_deref()?)?;

        Some(Self {
            issue_id,
            title,
            priority: record.priority.clone().unwrap_or_default(),
            issue_type: record.issue_type.clone().unwrap_or_default(),
            component: record.component.clone().unwrap_or_default(),
            description: record.description.clone().unwrap_or_default(),
            os: record.os.clone(),
        })
    }

    /// Converts the issue back into a raw record.
    ///
    /// An empty description is treated as not provided.
    pub fn to_record(&self) -> IssueRecord {
        IssueRecord {
            title: Some(format!("[{}] {}", self.issue_id, self.title)),
            priority: Some(self.priority.clone()),
            issue_type: Some(self.issue_type.clone()),
            component: Some(self.component.clone()),
            description: (!self.description.is_empty()).then(|| self.description.clone()),
            os: self.os.clone(),
        }
    }

    /// Returns the value of a searchable field, or `None` if the issue has
    /// no value for it.
    pub fn field(&self, field: IssueField) -> Option<&str> {
        match field {
            IssueField::Id => Some(&self.issue_id),
            IssueField::Title => Some(&self.title),
            IssueField::Priority => Some(&self.priority),
            IssueField::Type => Some(&self.issue_type),
            IssueField::Component => Some(&self.component),
            IssueField::Description => Some(&self.description),
            IssueField::Os => self.os.as_deref(),
        }
    }

    /// Returns true if the keyword occurs case-insensitively in any of the
    /// given fields. Empty field values never match.
    pub fn contains_keyword(&self, keyword: &str, fields: &[IssueField]) -> bool {
        let keyword = keyword.to_lowercase();
        fields.iter().any(|field| {
            self.field(*field)
                .filter(|value| !value.is_empty())
                .is_some_and(|value| value.to_lowercase().contains(&keyword))
        })
    }
}

fn split_title(raw: &str) -> Option<(String, String)> {
    let rest = raw.strip_prefix('[')?;
    let close = rest.find(']')?;
    let issue_id = rest[..close].to_string();
    let title = rest[close + 1..].trim().to_string();
    Some((issue_id, title))
}

/// Issue attributes addressable by search and grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueField {
    /// The issue identifier.
    Id,
    /// The display title.
    Title,
    /// The priority label.
    Priority,
    /// The issue type.
    Type,
    /// The component.
    Component,
    /// The description.
    Description,
    /// The operating system value.
    Os,
}

impl IssueField {
    /// Fields searched when the caller does not name any.
    pub const DEFAULT_SEARCH: [IssueField; 3] =
        [IssueField::Title, IssueField::Description, IssueField::Component];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            IssueField::Id => "id",
            IssueField::Title => "title",
            IssueField::Priority => "priority",
            IssueField::Type => "type",
            IssueField::Component => "component",
            IssueField::Description => "description",
            IssueField::Os => "os",
        }
    }
}

impl fmt::Display for IssueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IssueField {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "id" | "issue_id" => Ok(IssueField::Id),
            "title" => Ok(IssueField::Title),
            "priority" => Ok(IssueField::Priority),
            "type" => Ok(IssueField::Type),
            "component" => Ok(IssueField::Component),
            "description" => Ok(IssueField::Description),
            "os" => Ok(IssueField::Os),
            _ => Err(crate::Error::InvalidField(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str) -> IssueRecord {
        IssueRecord {
            title: Some(title.to_string()),
            ..IssueRecord::default()
        }
    }

    #[test]
    fn test_from_record_splits_identity() {
        let issue = Issue::from_record(&record("[JDK-8320192]  SHAKE256 does not work ")).unwrap();
        assert_eq!(issue.issue_id, "JDK-8320192");
        assert_eq!(issue.title, "SHAKE256 does not work");
        assert_eq!(issue.priority, "");
        assert_eq!(issue.os, None);
    }

    #[test]
    fn test_from_record_requires_bracket_prefix() {
        assert!(Issue::from_record(&record("JDK-1 no brackets")).is_none());
        assert!(Issue::from_record(&record("[JDK-1 unterminated")).is_none());
        assert!(Issue::from_record(&IssueRecord::default()).is_none());
    }

    #[test]
    fn test_from_record_uses_first_closing_bracket() {
        let issue = Issue::from_record(&record("[JDK-5] [x] title")).unwrap();
        assert_eq!(issue.issue_id, "JDK-5");
        assert_eq!(issue.title, "[x] title");
    }

    #[test]
    fn test_explicit_blank_os_is_kept() {
        let mut raw = record("[JDK-1] t");
        raw.os = Some(String::new());
        let issue = Issue::from_record(&raw).unwrap();
        assert_eq!(issue.os.as_deref(), Some(""));
    }

    #[test]
    fn test_contains_keyword_skips_empty_values() {
        let issue = Issue::from_record(&record("[JDK-1] Title")).unwrap();
        assert!(!issue.contains_keyword("", &[IssueField::Description]));
        assert!(issue.contains_keyword("TIT", &[IssueField::Title]));
    }

    #[test]
    fn test_issue_field_parse() {
        assert_eq!("Component".parse::<IssueField>().unwrap(), IssueField::Component);
        assert_eq!("issue_id".parse::<IssueField>().unwrap(), IssueField::Id);
        assert!("severity".parse::<IssueField>().is_err());
    }
}
